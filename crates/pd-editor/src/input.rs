//! Input abstraction layer.
//!
//! Normalizes palette clicks, HTML drag-and-drop and pointer events into a
//! unified `InputEvent` enum consumed by the interaction controller.
//! Coordinates are client-space; the controller maps them onto the canvas.

use pd_core::model::{ElementKind, Position};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// MIME key under which a palette drag carries its element type tag.
pub const ELEMENT_TYPE_MIME: &str = "application/x-eltype";

/// String entries keyed by MIME type, like a browser `DataTransfer`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    entries: SmallVec<[(String, String); 2]>,
}

impl DragPayload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Payload a palette entry puts on drag start.
    pub fn for_kind(kind: ElementKind) -> Self {
        let mut payload = Self::new();
        payload.set(ELEMENT_TYPE_MIME, kind.tag());
        payload
    }

    /// Set an entry, replacing any previous value for `mime`.
    pub fn set(&mut self, mime: &str, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(m, _)| m == mime) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((mime.to_string(), value)),
        }
    }

    pub fn get(&self, mime: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(m, _)| m == mime)
            .map(|(_, v)| v.as_str())
    }

    /// The element kind this payload names, if it names a known one.
    pub fn element_kind(&self) -> Option<ElementKind> {
        self.get(ELEMENT_TYPE_MIME).and_then(ElementKind::from_tag)
    }
}

/// The canvas's bounding box in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl CanvasRect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Whether a client-space point lies inside the canvas (edges included).
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.left + self.width && y >= self.top && y <= self.top + self.height
    }

    /// Client-space point → rounded canvas coordinates.
    pub fn to_canvas(&self, x: f32, y: f32) -> Position {
        Position::new(round_px(x - self.left), round_px(y - self.top))
    }
}

/// Round to the nearest pixel, saturating at the `i32` range.
pub(crate) fn round_px(v: f32) -> i32 {
    // `as` saturates for out-of-range floats and maps NaN to 0.
    v.round() as i32
}

/// A normalized input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A palette entry was clicked (not dragged).
    PaletteClick { kind: ElementKind },

    /// A drag started on a palette entry.
    PaletteDragStart { payload: DragPayload },

    /// A drag is hovering at a client-space point.
    DragOver { x: f32, y: f32 },

    /// A drag was released at a client-space point.
    Drop { x: f32, y: f32, payload: DragPayload },

    /// The drag gesture finished, with or without a drop.
    DragEnd,

    /// Pointer pressed.
    PointerDown { x: f32, y: f32 },

    /// Pointer moved.
    PointerMove { x: f32, y: f32 },

    /// Pointer released, anywhere on the page.
    PointerUp { x: f32, y: f32 },
}

impl InputEvent {
    pub fn from_pointer_down(x: f32, y: f32) -> Self {
        Self::PointerDown { x, y }
    }

    pub fn from_pointer_move(x: f32, y: f32) -> Self {
        Self::PointerMove { x, y }
    }

    pub fn from_pointer_up(x: f32, y: f32) -> Self {
        Self::PointerUp { x, y }
    }

    /// Extract position if this event carries one.
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            Self::DragOver { x, y }
            | Self::Drop { x, y, .. }
            | Self::PointerDown { x, y }
            | Self::PointerMove { x, y }
            | Self::PointerUp { x, y } => Some((*x, *y)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn payload_roundtrips_kind() {
        for kind in ElementKind::ALL {
            assert_eq!(DragPayload::for_kind(kind).element_kind(), Some(kind));
        }
    }

    #[test]
    fn payload_without_type_tag() {
        let mut payload = DragPayload::new();
        payload.set("text/plain", "heading");
        assert_eq!(payload.element_kind(), None);

        payload.set(ELEMENT_TYPE_MIME, "carousel");
        assert_eq!(payload.element_kind(), None);

        payload.set(ELEMENT_TYPE_MIME, "box");
        assert_eq!(payload.element_kind(), Some(ElementKind::Box));
    }

    #[test]
    fn canvas_rect_maps_and_rounds() {
        let rect = CanvasRect::new(100.0, 50.0, 800.0, 560.0);
        assert_eq!(rect.to_canvas(150.4, 80.6), Position::new(50, 31));
        assert_eq!(rect.to_canvas(90.0, 40.0), Position::new(-10, -10));
        assert!(rect.contains(100.0, 50.0));
        assert!(rect.contains(900.0, 610.0));
        assert!(!rect.contains(901.0, 300.0));
        assert!(!rect.contains(500.0, 49.0));
    }
}
