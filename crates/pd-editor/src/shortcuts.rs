//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s.
//! The shortcut map lives in Rust so it's shared across WASM and native.
//! The host is expected not to forward keys typed into inspector inputs.

use pd_core::scene::SceneMutation;

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    // ── Edit ──
    Delete,
    Duplicate,
    Deselect,

    // ── Export ──
    ExportHtml,
    CopyHtml,
}

impl ShortcutAction {
    /// The scene mutation for edit actions; export actions have none.
    pub fn mutation(self) -> Option<SceneMutation> {
        match self {
            Self::Delete => Some(SceneMutation::DeleteSelected),
            Self::Duplicate => Some(SceneMutation::DuplicateSelected),
            Self::Deselect => Some(SceneMutation::Select(None)),
            Self::ExportHtml | Self::CopyHtml => None,
        }
    }
}

/// Resolves key events into shortcut actions.
///
/// Uses platform-aware modifier detection: on macOS `meta` is ⌘,
/// on other platforms `ctrl` serves the same role.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"d"`, `"Delete"`).
    /// Returns `None` if the key combo has no binding.
    pub fn resolve(
        key: &str,
        ctrl: bool,
        shift: bool,
        _alt: bool,
        meta: bool,
    ) -> Option<ShortcutAction> {
        let cmd = ctrl || meta;

        if cmd && shift {
            return match key {
                "c" | "C" => Some(ShortcutAction::CopyHtml),
                _ => None,
            };
        }

        if cmd {
            return match key {
                "d" | "D" => Some(ShortcutAction::Duplicate),
                "s" | "S" => Some(ShortcutAction::ExportHtml),
                _ => None,
            };
        }

        match key {
            "Delete" | "Backspace" => Some(ShortcutAction::Delete),
            "Escape" => Some(ShortcutAction::Deselect),
            _ => None,
        }
    }
}
