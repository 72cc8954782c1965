//! Integration tests: scene → static HTML export.

use pd_core::html::serialize;
use pd_core::model::*;
use pd_core::scene::Scene;

fn selected_last(scene: Scene) -> Scene {
    let id = scene.elements().last().unwrap().id;
    scene.select(Some(id))
}

#[test]
fn heading_script_content_is_escaped() {
    let scene = selected_last(Scene::new().add_element(ElementKind::Heading, Position::new(60, 40)));
    let id = scene.selected_id().unwrap();
    let scene = scene.update_content(id, "<script>alert(1)</script>");

    let html = serialize(&scene);
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script>"));
}

#[test]
fn serialize_is_idempotent() {
    let seed = TemplateSeed {
        name: "Pulse Dashboard".into(),
        description: "KPIs, charts, and modular widgets.".into(),
        accent_color: Some("#f59e0b".into()),
    };
    let scene = Scene::from_template(&seed).add_element(ElementKind::Box, Position::new(300, 300));
    assert_eq!(serialize(&scene), serialize(&scene));
}

#[test]
fn button_background_with_default_padding() {
    let scene = selected_last(Scene::new().add_element(ElementKind::Button, Position::new(100, 100)));
    let id = scene.selected_id().unwrap();
    let scene = scene.update_style(
        id,
        &StylePatch::new()
            .set(StyleValue::BackgroundColor(Color::rgb(0xff, 0, 0)))
            .clear(StyleKey::PaddingX)
            .clear(StyleKey::PaddingY),
    );

    let html = serialize(&scene);
    assert!(html.contains("<button style=\"background:#ff0000;"), "{html}");
    assert!(html.contains("padding:10px 16px"), "{html}");
}

#[test]
fn drop_near_edge_is_clamped() {
    let scene = Scene::new().add_element_at_drop(ElementKind::Box, Position::new(10, 5));
    let el = scene.elements().next().unwrap();
    assert!(el.position.x >= MIN_COORD && el.position.y >= MIN_COORD);

    let html = serialize(&scene);
    assert!(!html.contains("left:-"));
    assert!(!html.contains("top:-"));
}

#[test]
fn elements_emitted_in_paint_order() {
    let scene = Scene::from_template(&TemplateSeed::default());
    let html = serialize(&scene);
    let heading = html.find("Your Headline").unwrap();
    let paragraph = html.find("A short, punchy description").unwrap();
    let button = html.find("<button").unwrap();
    assert!(heading < paragraph && paragraph < button);
}

#[test]
fn canvas_gradient_uses_accent() {
    let scene = Scene::with_accent(Color::rgb(0xa7, 0x8b, 0xfa));
    let html = serialize(&scene);
    assert!(html.contains("radial-gradient(600px 200px at 0% 0%, #a78bfa14, transparent)"));
}
