//! Pointer interaction controller.
//!
//! Translates [`InputEvent`]s into [`SceneMutation`]s. The controller owns
//! the only transient gesture state in the editor, an explicit
//! [`InteractionState`], and never mutates the scene itself: it reads the
//! current snapshot and returns mutations for the session to apply.
//!
//! ## Gestures
//!
//! | From | Event | To | Mutations |
//! |------|-------|----|-----------|
//! | any | `PaletteClick` | Idle | `AddElement` |
//! | any | `PaletteDragStart` | PaletteDragging | none |
//! | PaletteDragging | `DragOver` inside canvas | PaletteDragging | none, accepts the drop |
//! | any | `Drop` inside canvas | Idle | `AddElementAtDrop` |
//! | any | `DragEnd` | Idle | none |
//! | any | `PointerDown` on element | ElementDragging | `Select` |
//! | ElementDragging | `PointerMove` | ElementDragging | `MoveElement` |
//! | any | `PointerUp` | Idle | none |
//!
//! Events carrying a NaN or infinite coordinate are ignored, except
//! `PointerUp`, which still ends the gesture.

use crate::config::EditorConfig;
use crate::input::{CanvasRect, InputEvent, round_px};
use pd_core::id::ElementId;
use pd_core::model::{ElementKind, Position};
use pd_core::scene::{Scene, SceneMutation};
use smallvec::{SmallVec, smallvec};

/// The single active gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// A palette entry is being dragged towards the canvas.
    PaletteDragging { kind: ElementKind },
    /// An element follows the pointer. `offset` is the grab point relative
    /// to the element's top-left corner, in canvas pixels.
    ElementDragging { id: ElementId, offset: (f32, f32) },
}

/// Result of handling one event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Handled {
    pub mutations: SmallVec<[SceneMutation; 2]>,
    /// The host should accept the pending drop (`preventDefault` on
    /// drag-over).
    pub accept_drop: bool,
}

impl Handled {
    fn none() -> Self {
        Self::default()
    }

    fn mutation(m: SceneMutation) -> Self {
        Self {
            mutations: smallvec![m],
            accept_drop: false,
        }
    }
}

/// Turns input events into scene mutations.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    state: InteractionState,
    canvas: Option<CanvasRect>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn canvas(&self) -> Option<CanvasRect> {
        self.canvas
    }

    /// Record the canvas's current client-space bounding box.
    pub fn set_canvas(&mut self, rect: CanvasRect) {
        self.canvas = Some(rect);
    }

    /// Drop any gesture in progress.
    pub fn reset(&mut self) {
        if self.state != InteractionState::Idle {
            log::debug!("gesture reset from {:?}", self.state);
        }
        self.state = InteractionState::Idle;
    }

    /// Canvas rect, or a rect at the client origin when the host has not
    /// reported one yet.
    fn rect(&self, config: &EditorConfig) -> CanvasRect {
        self.canvas.unwrap_or(CanvasRect::new(
            0.0,
            0.0,
            config.fallback_canvas_width,
            f32::INFINITY,
        ))
    }

    /// Handle one event against the current scene snapshot.
    ///
    /// `hit` is the element under the pointer for `PointerDown`, as
    /// hit-tested by the host.
    pub fn handle(
        &mut self,
        event: &InputEvent,
        hit: Option<ElementId>,
        scene: &Scene,
        config: &EditorConfig,
    ) -> Handled {
        if let Some((x, y)) = event.position()
            && !(x.is_finite() && y.is_finite())
            && !matches!(event, InputEvent::PointerUp { .. })
        {
            log::warn!("ignoring {event:?}: non-finite pointer coordinates");
            return Handled::none();
        }
        let rect = self.rect(config);
        match event {
            InputEvent::PaletteClick { kind } => {
                self.reset();
                let width = self.canvas.map(|r| r.width);
                Handled::mutation(SceneMutation::AddElement {
                    kind: *kind,
                    position: config.palette_click_position(width),
                })
            }
            InputEvent::PaletteDragStart { payload } => {
                match payload.element_kind() {
                    Some(kind) => {
                        log::debug!("palette drag started: {kind}");
                        self.state = InteractionState::PaletteDragging { kind };
                    }
                    None => {
                        log::warn!("palette drag without a recognized element type");
                        self.reset();
                    }
                }
                Handled::none()
            }
            InputEvent::DragOver { x, y } => {
                let InteractionState::PaletteDragging { kind } = self.state else {
                    return Handled::none();
                };
                let accept_drop = rect.contains(*x, *y);
                log::trace!("drag-over {kind} at ({x}, {y}), accept: {accept_drop}");
                Handled {
                    mutations: SmallVec::new(),
                    accept_drop,
                }
            }
            InputEvent::Drop { x, y, payload } => {
                self.reset();
                let Some(kind) = payload.element_kind() else {
                    log::warn!("drop ignored: payload has no recognized element type");
                    return Handled::none();
                };
                if !rect.contains(*x, *y) {
                    log::debug!("drop ignored: ({x}, {y}) is outside the canvas");
                    return Handled::none();
                }
                Handled::mutation(SceneMutation::AddElementAtDrop {
                    kind,
                    drop: rect.to_canvas(*x, *y),
                })
            }
            InputEvent::DragEnd => {
                self.reset();
                Handled::none()
            }
            InputEvent::PointerDown { x, y } => {
                // A new gesture always replaces whatever was left over.
                self.reset();
                let Some(element) = hit.and_then(|id| scene.get(id)) else {
                    return Handled::none();
                };
                let offset = (
                    x - rect.left - element.position.x as f32,
                    y - rect.top - element.position.y as f32,
                );
                log::debug!("element drag started: {} offset {offset:?}", element.id);
                self.state = InteractionState::ElementDragging {
                    id: element.id,
                    offset,
                };
                Handled::mutation(SceneMutation::Select(Some(element.id)))
            }
            InputEvent::PointerMove { x, y } => {
                let InteractionState::ElementDragging { id, offset } = self.state else {
                    return Handled::none();
                };
                let position = Position::new(
                    round_px(x - rect.left - offset.0),
                    round_px(y - rect.top - offset.1),
                );
                log::trace!("drag {id} to {position:?}");
                Handled::mutation(SceneMutation::MoveElement { id, position })
            }
            InputEvent::PointerUp { .. } => {
                self.reset();
                Handled::none()
            }
        }
    }
}
