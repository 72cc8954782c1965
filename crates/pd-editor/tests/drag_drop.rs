//! Integration tests: pointer and drag-and-drop gestures (pd-editor ↔ pd-core).
//!
//! Drives an `EditorSession` with host-style input events and checks the
//! resulting scene snapshots.

use pd_core::id::ElementId;
use pd_core::model::*;
use pd_editor::input::{CanvasRect, DragPayload, InputEvent};
use pd_editor::interaction::InteractionState;
use pd_editor::session::EditorSession;
use pretty_assertions::assert_eq;

/// Canvas sits at (200, 100) in client space.
const CANVAS: CanvasRect = CanvasRect::new(200.0, 100.0, 800.0, 560.0);

fn session() -> EditorSession {
    let mut session = EditorSession::default();
    session.open_template_json(include_str!("fixtures/pulse_dashboard.json")).unwrap();
    session.set_canvas_rect(CANVAS);
    session
}

fn element_at(session: &EditorSession, index: usize) -> (ElementId, Position) {
    let el = session.scene().unwrap().elements().nth(index).unwrap();
    (el.id, el.position)
}

// ─── Element dragging ────────────────────────────────────────────────────

#[test]
fn drag_moves_element_by_pointer_delta() {
    let mut session = session();
    let (id, start) = element_at(&session, 2); // button at (60, 160)

    // Grab 15px into the button.
    let grab = (CANVAS.left + start.x as f32 + 15.0, CANVAS.top + start.y as f32 + 15.0);
    session.handle_input(&InputEvent::from_pointer_down(grab.0, grab.1), Some(id));
    assert_eq!(session.scene().unwrap().selected_id(), Some(id));

    session.handle_input(&InputEvent::from_pointer_move(grab.0 + 100.0, grab.1 + 40.0), None);
    assert_eq!(element_at(&session, 2).1, Position::new(160, 200));
}

#[test]
fn release_outside_canvas_ends_drag() {
    let mut session = session();
    let (id, start) = element_at(&session, 0);
    let grab = (CANVAS.left + start.x as f32, CANVAS.top + start.y as f32);

    session.handle_input(&InputEvent::from_pointer_down(grab.0, grab.1), Some(id));
    session.handle_input(&InputEvent::from_pointer_move(grab.0 + 30.0, grab.1), None);
    let moved_to = element_at(&session, 0).1;
    assert_eq!(moved_to, Position::new(start.x + 30, start.y));

    // Released far outside the canvas.
    session.handle_input(&InputEvent::from_pointer_up(5.0, 5.0), None);
    assert_eq!(session.controller().state(), InteractionState::Idle);

    session.handle_input(&InputEvent::from_pointer_move(700.0, 500.0), None);
    assert_eq!(element_at(&session, 0).1, moved_to);
}

#[test]
fn drag_past_canvas_edge_clamps() {
    let mut session = session();
    let (id, start) = element_at(&session, 1);
    let grab = (CANVAS.left + start.x as f32, CANVAS.top + start.y as f32);

    session.handle_input(&InputEvent::from_pointer_down(grab.0, grab.1), Some(id));
    session.handle_input(&InputEvent::from_pointer_move(0.0, 0.0), None);
    assert_eq!(element_at(&session, 1).1, Position::new(MIN_COORD, MIN_COORD));
}

#[test]
fn new_gesture_cancels_stale_drag() {
    let mut session = session();
    let (first, _) = element_at(&session, 0);
    let (second, second_pos) = element_at(&session, 2);

    // Pointer-up was missed; the next pointer-down starts over.
    session.handle_input(&InputEvent::from_pointer_down(260.0, 140.0), Some(first));
    session.handle_input(&InputEvent::from_pointer_down(260.0, 260.0), Some(second));
    session.handle_input(&InputEvent::from_pointer_move(280.0, 260.0), None);

    assert_eq!(session.scene().unwrap().selected_id(), Some(second));
    assert_eq!(element_at(&session, 0).1, Position::new(60, 40));
    assert_eq!(element_at(&session, 2).1, second_pos.offset(20, 0));
}

// ─── Palette drag-and-drop ───────────────────────────────────────────────

#[test]
fn palette_drop_creates_selected_element() {
    let mut session = session();
    let payload = DragPayload::for_kind(ElementKind::Box);
    session.handle_input(
        &InputEvent::PaletteDragStart {
            payload: payload.clone(),
        },
        None,
    );
    let over = session.handle_input(&InputEvent::DragOver { x: 500.0, y: 300.0 }, None);
    assert!(over.accept_drop);

    session.handle_input(&InputEvent::Drop { x: 500.0, y: 300.0, payload }, None);
    session.handle_input(&InputEvent::DragEnd, None);

    let scene = session.scene().unwrap();
    assert_eq!(scene.len(), 4);
    let dropped = scene.elements().last().unwrap();
    assert_eq!(dropped.kind(), ElementKind::Box);
    assert_eq!(dropped.position, Position::new(260, 180));
    assert_eq!(scene.selected_id(), Some(dropped.id));
}

#[test]
fn drop_near_edge_is_clamped() {
    let mut session = session();
    let payload = DragPayload::for_kind(ElementKind::Box);
    session.handle_input(&InputEvent::Drop { x: 210.0, y: 105.0, payload }, None);
    let (_, pos) = element_at(&session, 3);
    assert!(pos.x >= MIN_COORD && pos.y >= MIN_COORD, "{pos:?}");
}

#[test]
fn drop_outside_canvas_creates_nothing() {
    let mut session = session();
    let payload = DragPayload::for_kind(ElementKind::Heading);
    session.handle_input(&InputEvent::Drop { x: 50.0, y: 50.0, payload }, None);
    assert_eq!(session.scene().unwrap().len(), 3);
}

#[test]
fn drop_without_type_tag_creates_nothing() {
    let mut session = session();
    let mut payload = DragPayload::new();
    payload.set("text/uri-list", "https://example.com");
    session.handle_input(&InputEvent::Drop { x: 500.0, y: 300.0, payload }, None);
    assert_eq!(session.scene().unwrap().len(), 3);
}

#[test]
fn palette_click_places_at_canvas_column() {
    let mut session = session();
    session.handle_input(
        &InputEvent::PaletteClick {
            kind: ElementKind::Paragraph,
        },
        None,
    );
    let scene = session.scene().unwrap();
    let added = scene.elements().last().unwrap();
    assert_eq!(added.position, Position::new(280, 60));
    // Clicking does not steal the selection.
    assert_eq!(scene.selected().map(Element::kind), Some(ElementKind::Heading));
}
