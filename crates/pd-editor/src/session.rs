//! Editor session: the one owner of the scene while the editor is open.
//!
//! Every input event, inspector edit, toolbar action and shortcut goes
//! through [`EditorSession`], which applies the resulting mutations in
//! arrival order. Each call leaves a complete, consistent snapshot behind.

use crate::canvas::{CanvasView, render_view};
use crate::config::EditorConfig;
use crate::export::{Clipboard, ExportArtifact, ExportError, FileDelivery};
use crate::input::{CanvasRect, InputEvent};
use crate::inspector::{InspectorEdit, InspectorPanel};
use crate::interaction::{Handled, InteractionController};
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use pd_core::id::ElementId;
use pd_core::model::{Color, TemplateSeed};
use pd_core::parse::parse_color;
use pd_core::scene::{Scene, SceneMutation};
use std::path::PathBuf;
use thiserror::Error;

/// Errors at the session's fallible edges.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A template payload could not be decoded.
    #[error("invalid template payload: {0}")]
    Payload(#[from] serde_json::Error),
    /// An editor config could not be decoded.
    #[error("invalid editor config: {0}")]
    Config(#[source] serde_json::Error),
    /// The operation needs an open editor.
    #[error("no template is open")]
    Closed,
    #[error(transparent)]
    Export(#[from] ExportError),
}

#[derive(Debug, Default)]
pub struct EditorSession {
    /// `None` while the editor is closed.
    scene: Option<Scene>,
    controller: InteractionController,
    config: EditorConfig,
}

impl EditorSession {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            scene: None,
            controller: InteractionController::new(),
            config,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.scene.is_some()
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    // ─── Lifecycle ───────────────────────────────────────────────────────

    /// Seed a fresh scene from a template, replacing any open one.
    pub fn open_template(&mut self, seed: &TemplateSeed) -> &Scene {
        let mut scene = Scene::from_template(seed);
        if seed.accent_color.as_deref().and_then(parse_color).is_none() {
            scene = scene.set_accent(self.config.default_accent);
        }
        self.controller.reset();
        log::debug!(
            "opened template {:?} with {} element(s)",
            seed.name,
            scene.len()
        );
        self.scene.insert(scene)
    }

    /// [`open_template`](Self::open_template) from a JSON payload
    /// `{ name, description, accentColor }`.
    pub fn open_template_json(&mut self, json: &str) -> Result<&Scene, SessionError> {
        let seed: TemplateSeed = serde_json::from_str(json).inspect_err(|e| {
            log::warn!("rejected template payload: {e}");
        })?;
        Ok(self.open_template(&seed))
    }

    /// Discard the scene.
    pub fn close(&mut self) {
        self.controller.reset();
        self.scene = None;
    }

    // ─── Editing ─────────────────────────────────────────────────────────

    /// Apply one mutation. Returns whether the scene changed.
    pub fn apply(&mut self, mutation: &SceneMutation) -> bool {
        let Some(scene) = &self.scene else {
            return false;
        };
        let next = scene.apply(mutation);
        let changed = next != *scene;
        self.scene = Some(next);
        changed
    }

    pub fn set_canvas_rect(&mut self, rect: CanvasRect) {
        self.controller.set_canvas(rect);
    }

    /// Route an input event through the interaction controller and apply
    /// what it produces. Ignored while closed.
    pub fn handle_input(&mut self, event: &InputEvent, hit: Option<ElementId>) -> Handled {
        let Some(scene) = &self.scene else {
            return Handled::default();
        };
        let handled = self.controller.handle(event, hit, scene, &self.config);
        for m in &handled.mutations {
            self.apply(m);
        }
        handled
    }

    /// Apply an inspector edit to the current selection.
    pub fn edit(&mut self, edit: &InspectorEdit) -> bool {
        let mutation = self.scene.as_ref().and_then(|s| edit.to_mutation(s));
        mutation.is_some_and(|m| self.apply(&m))
    }

    pub fn inspector(&self) -> InspectorPanel {
        match &self.scene {
            Some(scene) => InspectorPanel::project(scene),
            None => InspectorPanel { selection: None },
        }
    }

    pub fn view(&self) -> Option<CanvasView> {
        self.scene.as_ref().map(render_view)
    }

    pub fn set_accent(&mut self, accent: Color) -> bool {
        self.apply(&SceneMutation::SetAccent(accent))
    }

    /// Resolve a key press and apply its edit, if any. Export actions are
    /// returned for the host to carry out with its own delivery targets.
    pub fn handle_key(
        &mut self,
        key: &str,
        ctrl: bool,
        shift: bool,
        alt: bool,
        meta: bool,
    ) -> Option<ShortcutAction> {
        if !self.is_open() {
            return None;
        }
        let action = ShortcutMap::resolve(key, ctrl, shift, alt, meta)?;
        if let Some(m) = action.mutation() {
            self.apply(&m);
        }
        Some(action)
    }

    // ─── Export ──────────────────────────────────────────────────────────

    pub fn export_html(&self) -> Result<String, SessionError> {
        let scene = self.scene.as_ref().ok_or(SessionError::Closed)?;
        Ok(pd_core::serialize(scene))
    }

    pub fn export_artifact(&self) -> Result<ExportArtifact, SessionError> {
        Ok(ExportArtifact {
            filename: self.config.export_filename.clone(),
            mime: pd_core::EXPORT_MIME,
            bytes: self.export_html()?.into_bytes(),
        })
    }

    /// Hand the export to a file-saving capability.
    pub fn deliver_file(
        &self,
        delivery: &mut dyn FileDelivery,
    ) -> Result<Option<PathBuf>, SessionError> {
        let artifact = self.export_artifact()?;
        Ok(delivery.deliver(&artifact)?)
    }

    /// Put the export on the clipboard.
    pub fn copy_html(&self, clipboard: &mut dyn Clipboard) -> Result<(), SessionError> {
        let artifact = self.export_artifact()?;
        clipboard.write_text(artifact.as_str())?;
        Ok(())
    }
}
