//! Scene store: the ordered element list plus selection and accent.
//!
//! A `Scene` is an immutable snapshot. Every operation returns a new scene;
//! elements live behind `Arc`, so an update shares every untouched element
//! with the previous snapshot and consumers can diff by pointer.
//!
//! Operations are total. Unknown or stale IDs leave the scene unchanged.

use crate::id::ElementId;
use crate::model::*;
use crate::parse::parse_color;
use std::sync::Arc;

/// Offset applied to the drop point so the grab point of the dragged
/// preview lines up with the new element's top-left corner.
pub const DROP_ANCHOR: (i32, i32) = (40, 20);

/// Minimum coordinate for elements placed by a palette drop.
pub const DROP_MIN_COORD: i32 = 8;

/// Shift applied to a duplicate, on both axes.
pub const DUPLICATE_OFFSET: i32 = 24;

/// Default seed text used when a template omits name or description.
const SEED_HEADLINE: &str = "Your Headline";
const SEED_DESCRIPTION: &str = "A short, punchy description goes right here.";

/// A mutation of the scene, produced by the interaction controller and the
/// inspector and applied with [`Scene::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum SceneMutation {
    AddElement {
        kind: ElementKind,
        position: Position,
    },
    AddElementAtDrop {
        kind: ElementKind,
        drop: Position,
    },
    MoveElement {
        id: ElementId,
        position: Position,
    },
    UpdateStyle {
        id: ElementId,
        patch: StylePatch,
    },
    UpdateContent {
        id: ElementId,
        content: String,
    },
    DuplicateSelected,
    DeleteSelected,
    Select(Option<ElementId>),
    SetAccent(Color),
}

/// One editing session's page: elements in paint order, selection, accent.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    elements: Vec<Arc<Element>>,
    selected: Option<ElementId>,
    accent: Color,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// An empty scene with the default accent.
    #[must_use]
    pub fn new() -> Self {
        Self::with_accent(DEFAULT_ACCENT)
    }

    #[must_use]
    pub fn with_accent(accent: Color) -> Self {
        Self {
            elements: Vec::new(),
            selected: None,
            accent,
        }
    }

    /// Seed a scene from an opened template: a heading, a paragraph and a
    /// button stacked at fixed offsets, with the heading selected.
    #[must_use]
    pub fn from_template(seed: &TemplateSeed) -> Self {
        let headline = non_empty(&seed.name).unwrap_or(SEED_HEADLINE);
        let description = non_empty(&seed.description).unwrap_or(SEED_DESCRIPTION);
        let accent = seed
            .accent_color
            .as_deref()
            .and_then(parse_color)
            .unwrap_or(DEFAULT_ACCENT);

        let heading = create_element(
            ElementKind::Heading,
            Position::new(60, 40),
            ElementOverrides::content(headline),
        );
        let paragraph = create_element(
            ElementKind::Paragraph,
            Position::new(60, 100),
            ElementOverrides::content(description),
        );
        let button = create_element(
            ElementKind::Button,
            Position::new(60, 160),
            ElementOverrides::default(),
        );

        let selected = Some(heading.id);
        Self {
            elements: vec![Arc::new(heading), Arc::new(paragraph), Arc::new(button)],
            selected,
            accent,
        }
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    /// Elements in paint order (later = on top).
    pub fn elements(&self) -> impl ExactSizeIterator<Item = &Element> + DoubleEndedIterator {
        self.elements.iter().map(|e| &**e)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id).map(|e| &**e)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.get(id).is_some()
    }

    pub fn selected_id(&self) -> Option<ElementId> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Element> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn accent(&self) -> Color {
        self.accent
    }

    /// Whether `other` holds the very same allocation for element `id`
    /// (i.e. the element was not touched between the two snapshots).
    pub fn shares_element(&self, other: &Scene, id: ElementId) -> bool {
        let find = |s: &Scene| s.elements.iter().find(|e| e.id == id).cloned();
        match (find(self), find(other)) {
            (Some(a), Some(b)) => Arc::ptr_eq(&a, &b),
            _ => false,
        }
    }

    // ─── Operations ──────────────────────────────────────────────────────

    /// Apply a single mutation.
    #[must_use]
    pub fn apply(&self, mutation: &SceneMutation) -> Scene {
        log::debug!("scene mutation: {mutation:?}");
        match mutation {
            SceneMutation::AddElement { kind, position } => self.add_element(*kind, *position),
            SceneMutation::AddElementAtDrop { kind, drop } => self.add_element_at_drop(*kind, *drop),
            SceneMutation::MoveElement { id, position } => self.move_element(*id, *position),
            SceneMutation::UpdateStyle { id, patch } => self.update_style(*id, patch),
            SceneMutation::UpdateContent { id, content } => self.update_content(*id, content),
            SceneMutation::DuplicateSelected => self.duplicate_selected(),
            SceneMutation::DeleteSelected => self.delete_selected(),
            SceneMutation::Select(id) => self.select(*id),
            SceneMutation::SetAccent(color) => self.set_accent(*color),
        }
    }

    /// Apply mutations in order.
    #[must_use]
    pub fn apply_all<'a>(&self, mutations: impl IntoIterator<Item = &'a SceneMutation>) -> Scene {
        mutations
            .into_iter()
            .fold(self.clone(), |scene, m| scene.apply(m))
    }

    /// Append a new element with kind defaults. Selection is unchanged.
    #[must_use]
    pub fn add_element(&self, kind: ElementKind, position: Position) -> Scene {
        let element = create_element(kind, position, ElementOverrides::default());
        self.push(element).0
    }

    /// Append a new element at a palette drop point and select it.
    #[must_use]
    pub fn add_element_at_drop(&self, kind: ElementKind, drop: Position) -> Scene {
        let position = drop
            .offset(-DROP_ANCHOR.0, -DROP_ANCHOR.1)
            .clamped(DROP_MIN_COORD);
        let element = create_element(kind, position, ElementOverrides::default());
        let (mut next, id) = self.push(element);
        next.selected = Some(id);
        next
    }

    /// Move an element, clamping both axes to [`MIN_COORD`].
    #[must_use]
    pub fn move_element(&self, id: ElementId, position: Position) -> Scene {
        self.map_element(id, |el| el.position = position.clamped(MIN_COORD))
    }

    /// Merge `patch` into the selected element's style. Ignored unless `id`
    /// is the current selection.
    #[must_use]
    pub fn update_style(&self, id: ElementId, patch: &StylePatch) -> Scene {
        if self.selected != Some(id) || patch.is_empty() {
            return self.clone();
        }
        self.map_element(id, |el| el.style = merge_style(&el.style, patch))
    }

    /// Replace the selected element's text. Ignored unless `id` is the
    /// current selection, and for kinds without text.
    #[must_use]
    pub fn update_content(&self, id: ElementId, content: &str) -> Scene {
        if self.selected != Some(id) {
            return self.clone();
        }
        match self.get(id) {
            Some(el) if el.kind().has_text() => {
                self.map_element(id, |el| el.content = content.to_string())
            }
            _ => self.clone(),
        }
    }

    /// Clone the selected element under a new ID, shifted by
    /// [`DUPLICATE_OFFSET`]; the clone becomes the selection.
    #[must_use]
    pub fn duplicate_selected(&self) -> Scene {
        let Some(source) = self.selected() else {
            return self.clone();
        };
        let clone = source.duplicate(source.position.offset(DUPLICATE_OFFSET, DUPLICATE_OFFSET));
        let (mut next, id) = self.push(clone);
        next.selected = Some(id);
        next
    }

    /// Remove the selected element and clear the selection.
    #[must_use]
    pub fn delete_selected(&self) -> Scene {
        let Some(id) = self.selected else {
            return self.clone();
        };
        let mut next = self.clone();
        next.elements.retain(|e| e.id != id);
        next.selected = None;
        next
    }

    /// Set or clear the selection. An ID not in the scene is ignored.
    #[must_use]
    pub fn select(&self, id: Option<ElementId>) -> Scene {
        match id {
            Some(id) if !self.contains(id) => self.clone(),
            _ => Scene {
                selected: id,
                ..self.clone()
            },
        }
    }

    #[must_use]
    pub fn set_accent(&self, accent: Color) -> Scene {
        Scene {
            accent,
            ..self.clone()
        }
    }

    // ─── Internals ───────────────────────────────────────────────────────

    fn push(&self, element: Element) -> (Scene, ElementId) {
        let id = element.id;
        let mut next = self.clone();
        next.elements.push(Arc::new(element));
        (next, id)
    }

    fn map_element(&self, id: ElementId, f: impl FnOnce(&mut Element)) -> Scene {
        let Some(pos) = self.elements.iter().position(|e| e.id == id) else {
            return self.clone();
        };
        let mut next = self.clone();
        let mut updated = Element::clone(&next.elements[pos]);
        f(&mut updated);
        next.elements[pos] = Arc::new(updated);
        next
    }
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn with_selected(kind: ElementKind) -> (Scene, ElementId) {
        let scene = Scene::new().add_element(kind, Position::new(100, 100));
        let id = scene.elements().last().unwrap().id;
        (scene.select(Some(id)), id)
    }

    #[test]
    fn add_element_keeps_selection() {
        let scene = Scene::new().add_element(ElementKind::Button, Position::new(100, 100));
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.selected_id(), None);
    }

    #[test]
    fn drop_offsets_and_selects() {
        let scene = Scene::new().add_element_at_drop(ElementKind::Box, Position::new(200, 150));
        let el = scene.elements().next().unwrap();
        assert_eq!(el.position, Position::new(160, 130));
        assert_eq!(scene.selected_id(), Some(el.id));
    }

    #[test]
    fn move_unknown_id_is_noop() {
        let (scene, _) = with_selected(ElementKind::Box);
        let moved = scene.move_element(ElementId::intern("ghost"), Position::new(1, 1));
        assert_eq!(moved, scene);
    }

    #[test]
    fn move_clamps_negative_coordinates() {
        let (scene, id) = with_selected(ElementKind::Heading);
        let moved = scene.move_element(id, Position::new(-50, 2));
        assert_eq!(moved.get(id).unwrap().position, Position::new(4, 4));
    }

    #[test]
    fn style_update_requires_selection() {
        let scene = Scene::new().add_element(ElementKind::Button, Position::new(100, 100));
        let id = scene.elements().next().unwrap().id;
        let patch = StylePatch::from(StyleValue::PaddingX(40));
        assert_eq!(scene.update_style(id, &patch), scene);

        let selected = scene.select(Some(id));
        let updated = selected.update_style(id, &patch);
        assert_eq!(updated.get(id).unwrap().style.padding_x, Some(40));
    }

    #[test]
    fn content_update_ignored_for_box() {
        let (scene, id) = with_selected(ElementKind::Box);
        let updated = scene.update_content(id, "hello");
        assert_eq!(updated.get(id).unwrap().content, "");
    }

    #[test]
    fn untouched_elements_are_shared() {
        let scene = Scene::new()
            .add_element(ElementKind::Heading, Position::new(10, 10))
            .add_element(ElementKind::Box, Position::new(50, 50));
        let ids: Vec<_> = scene.elements().map(|e| e.id).collect();
        let moved = scene.move_element(ids[1], Position::new(80, 80));
        assert!(moved.shares_element(&scene, ids[0]));
        assert!(!moved.shares_element(&scene, ids[1]));
    }

    #[test]
    fn select_unknown_keeps_selection() {
        let (scene, id) = with_selected(ElementKind::Paragraph);
        let next = scene.select(Some(ElementId::intern("missing")));
        assert_eq!(next.selected_id(), Some(id));
        assert_eq!(scene.select(None).selected_id(), None);
    }

    #[test]
    fn template_seed_layout() {
        let seed = TemplateSeed {
            name: "Alpha Landing".into(),
            description: String::new(),
            accent_color: Some("#34d399".into()),
        };
        let scene = Scene::from_template(&seed);
        let summary: Vec<_> = scene
            .elements()
            .map(|e| (e.kind(), e.position, e.content.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (ElementKind::Heading, Position::new(60, 40), "Alpha Landing"),
                (ElementKind::Paragraph, Position::new(60, 100), SEED_DESCRIPTION),
                (ElementKind::Button, Position::new(60, 160), "Get Started"),
            ]
        );
        assert_eq!(scene.accent(), Color::rgb(0x34, 0xd3, 0x99));
        assert_eq!(scene.selected().map(Element::kind), Some(ElementKind::Heading));
    }

    #[test]
    fn template_only_empty_text_falls_back() {
        let seed = TemplateSeed {
            name: "  ".into(),
            description: String::new(),
            accent_color: None,
        };
        let scene = Scene::from_template(&seed);
        let contents: Vec<_> = scene.elements().map(|e| e.content.as_str()).collect();
        assert_eq!(contents, vec!["  ", SEED_DESCRIPTION, "Get Started"]);
    }

    #[test]
    fn template_bad_accent_falls_back() {
        let seed = TemplateSeed {
            accent_color: Some("not-a-color".into()),
            ..TemplateSeed::default()
        };
        let scene = Scene::from_template(&seed);
        assert_eq!(scene.accent(), DEFAULT_ACCENT);
        assert_eq!(scene.elements().next().unwrap().content, SEED_HEADLINE);
    }
}
