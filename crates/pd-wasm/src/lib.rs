//! WASM bridge for Page Draft: exposes the editor session to JavaScript.
//!
//! Compiled via `wasm-pack build --target web`. The host page owns the DOM;
//! it forwards pointer, drag and key events here and redraws from
//! [`PageCanvas::view_json`] after every call that reports a change.

use pd_core::id::ElementId;
use pd_core::model::ElementKind;
use pd_core::parse::parse_color;
use pd_core::scene::{Scene, SceneMutation};
use pd_editor::config::EditorConfig;
use pd_editor::input::{CanvasRect, DragPayload, InputEvent};
use pd_editor::inspector::InspectorEdit;
use pd_editor::session::EditorSession;
use pd_editor::shortcuts::ShortcutAction;
use serde_json::json;
use wasm_bindgen::prelude::*;

/// The main WASM-facing editor controller.
///
/// All interaction from the page goes through this struct.
#[wasm_bindgen]
pub struct PageCanvas {
    session: EditorSession,
}

impl Default for PageCanvas {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl PageCanvas {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        // Set up panic hook for better error messages in console
        console_error_panic_hook_setup();
        Self {
            session: EditorSession::default(),
        }
    }

    /// Create a controller from a JSON [`EditorConfig`]. Falls back to the
    /// defaults when the config does not parse.
    pub fn with_config(config_json: &str) -> Self {
        console_error_panic_hook_setup();
        let config = EditorConfig::from_json(config_json).unwrap_or_default();
        Self {
            session: EditorSession::new(config),
        }
    }

    // ─── Lifecycle ───────────────────────────────────────────────────────

    /// Open a template from `{name, description, accentColor}`.
    /// Returns `false` if the payload does not parse.
    pub fn open_template(&mut self, json: &str) -> bool {
        self.session.open_template_json(json).is_ok()
    }

    pub fn close(&mut self) {
        self.session.close();
    }

    pub fn is_open(&self) -> bool {
        self.session.is_open()
    }

    /// Report the canvas's client-space bounding box.
    pub fn set_canvas_rect(&mut self, left: f32, top: f32, width: f32, height: f32) {
        self.session
            .set_canvas_rect(CanvasRect::new(left, top, width, height));
    }

    // ─── Palette ─────────────────────────────────────────────────────────

    /// Palette click. Returns true if an element was added.
    pub fn palette_click(&mut self, kind: &str) -> bool {
        let Some(kind) = ElementKind::from_tag(kind) else {
            return false;
        };
        self.track(|s| {
            s.handle_input(&InputEvent::PaletteClick { kind }, None);
        })
    }

    /// Palette drag start with the `application/x-eltype` value.
    pub fn drag_start(&mut self, type_tag: &str) {
        let payload = payload_from_tag(type_tag);
        self.session
            .handle_input(&InputEvent::PaletteDragStart { payload }, None);
    }

    /// Returns whether the host should accept the drop here.
    pub fn drag_over(&mut self, x: f32, y: f32) -> bool {
        self.session
            .handle_input(&InputEvent::DragOver { x, y }, None)
            .accept_drop
    }

    /// Drop with the `application/x-eltype` value read from the
    /// `DataTransfer`. Returns true if an element was created.
    pub fn drop_payload(&mut self, x: f32, y: f32, type_tag: &str) -> bool {
        let payload = payload_from_tag(type_tag);
        self.track(|s| {
            s.handle_input(&InputEvent::Drop { x, y, payload }, None);
        })
    }

    pub fn drag_end(&mut self) {
        self.session.handle_input(&InputEvent::DragEnd, None);
    }

    // ─── Pointer ─────────────────────────────────────────────────────────

    /// Pointer down; `hit_id` is the element under the pointer or `""`.
    /// Returns true if the scene changed.
    pub fn pointer_down(&mut self, x: f32, y: f32, hit_id: &str) -> bool {
        let hit = ElementId::lookup(hit_id);
        self.track(|s| {
            s.handle_input(&InputEvent::from_pointer_down(x, y), hit);
        })
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.track(|s| {
            s.handle_input(&InputEvent::from_pointer_move(x, y), None);
        })
    }

    /// Pointer up, anywhere on the page.
    pub fn pointer_up(&mut self, x: f32, y: f32) {
        self.session
            .handle_input(&InputEvent::from_pointer_up(x, y), None);
    }

    // ─── Toolbar ─────────────────────────────────────────────────────────

    pub fn duplicate_selected(&mut self) -> bool {
        self.session.apply(&SceneMutation::DuplicateSelected)
    }

    pub fn delete_selected(&mut self) -> bool {
        self.session.apply(&SceneMutation::DeleteSelected)
    }

    /// Select an element by ID, or clear the selection with `""`.
    pub fn select(&mut self, id: &str) -> bool {
        if id.is_empty() {
            return self.session.apply(&SceneMutation::Select(None));
        }
        // Never interned, so it cannot name an element.
        let Some(id) = ElementId::lookup(id) else {
            return false;
        };
        self.session.apply(&SceneMutation::Select(Some(id)))
    }

    /// Set the scene accent from a hex color.
    pub fn set_accent(&mut self, hex: &str) -> bool {
        parse_color(hex).is_some_and(|c| self.session.set_accent(c))
    }

    /// Accent swatches as a JSON array of hex strings.
    pub fn accent_presets_json(&self) -> String {
        json!(self.session.config().accent_presets).to_string()
    }

    // ─── Inspector ───────────────────────────────────────────────────────

    /// Inspector panel as JSON.
    pub fn inspector_json(&self) -> String {
        to_json(&self.session.inspector())
    }

    /// Apply an edit `{"field": "...", "value": ...}`. Returns true if the
    /// scene changed.
    pub fn edit(&mut self, edit_json: &str) -> bool {
        match serde_json::from_str::<InspectorEdit>(edit_json) {
            Ok(edit) => self.session.edit(&edit),
            Err(e) => {
                log::warn!("rejected inspector edit: {e}");
                false
            }
        }
    }

    // ─── View ────────────────────────────────────────────────────────────

    /// Canvas view as JSON, or `null` when closed.
    pub fn view_json(&self) -> String {
        match self.session.view() {
            Some(view) => to_json(&view),
            None => "null".to_string(),
        }
    }

    // ─── Keyboard Shortcut API ───────────────────────────────────────────

    /// Handle a keyboard event. Returns a JSON string:
    /// `{"changed":bool, "action":"<action_name>"}`.
    /// `exportHtml` and `copyHtml` are left for the host to carry out.
    pub fn handle_key(
        &mut self,
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    ) -> String {
        let mut action = None;
        let changed = self.track(|s| action = s.handle_key(key, ctrl, shift, alt, meta));
        let name = action.map_or("none", action_to_name);
        json!({ "changed": changed, "action": name }).to_string()
    }

    // ─── Export ──────────────────────────────────────────────────────────

    /// The exported document as JSON:
    /// `{"ok":true,"filename":"...","mime":"...","html":"..."}` or
    /// `{"ok":false,"error":"..."}`.
    pub fn export_html(&self) -> String {
        match self.session.export_artifact() {
            Ok(artifact) => json!({
                "ok": true,
                "filename": artifact.filename,
                "mime": artifact.mime,
                "html": artifact.as_str(),
            })
            .to_string(),
            Err(e) => json!({ "ok": false, "error": e.to_string() }).to_string(),
        }
    }
}

impl PageCanvas {
    /// Run `f` and report whether the scene snapshot changed.
    fn track(&mut self, f: impl FnOnce(&mut EditorSession)) -> bool {
        let before: Option<Scene> = self.session.scene().cloned();
        f(&mut self.session);
        self.session.scene() != before.as_ref()
    }
}

fn payload_from_tag(type_tag: &str) -> DragPayload {
    let mut payload = DragPayload::new();
    if !type_tag.is_empty() {
        payload.set(pd_editor::ELEMENT_TYPE_MIME, type_tag);
    }
    payload
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        log::warn!("serialization failed: {e}");
        json!({ "ok": false, "error": e.to_string() }).to_string()
    })
}

fn action_to_name(action: ShortcutAction) -> &'static str {
    match action {
        ShortcutAction::Delete => "delete",
        ShortcutAction::Duplicate => "duplicate",
        ShortcutAction::Deselect => "deselect",
        ShortcutAction::ExportHtml => "exportHtml",
        ShortcutAction::CopyHtml => "copyHtml",
    }
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Page Draft WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
