//! Live canvas view model.
//!
//! The host UI draws exactly what this produces. Styles come from the same
//! [`resolve_element`] the HTML serializer uses.

use pd_core::id::ElementId;
use pd_core::model::{Color, ElementKind};
use pd_core::resolve::{canvas_background, resolve_element};
use pd_core::scene::Scene;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasView {
    /// CSS `background` of the canvas surface.
    pub background: String,
    /// Outline color of the selection ring.
    pub selection_color: Color,
    pub items: Vec<CanvasItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasItem {
    pub id: ElementId,
    pub kind: ElementKind,
    pub wrapper_style: String,
    pub inner_style: Option<String>,
    pub text: Option<String>,
    pub selected: bool,
}

/// Project the scene for the editor surface, in paint order.
pub fn render_view(scene: &Scene) -> CanvasView {
    let selected = scene.selected_id();
    let items = scene
        .elements()
        .map(|element| {
            let resolved = resolve_element(element);
            let mut wrapper = resolved.wrapper.clone();
            wrapper.push("cursor", "move");
            CanvasItem {
                id: element.id,
                kind: element.kind(),
                wrapper_style: wrapper.to_string(),
                inner_style: resolved.inner.as_ref().map(ToString::to_string),
                text: resolved.text().map(str::to_string),
                selected: selected == Some(element.id),
            }
        })
        .collect();

    CanvasView {
        background: canvas_background(scene.accent()),
        selection_color: scene.accent(),
        items,
    }
}
