//! Inspector binding.
//!
//! [`InspectorPanel::project`] is a read-only projection of the current
//! selection, rebuilt from the scene on every read so no field ever shows a
//! stale element. [`InspectorEdit::to_mutation`] turns one field change into
//! a scene update routed through the current selection.

use pd_core::id::ElementId;
use pd_core::model::*;
use pd_core::parse::{coerce_int, parse_color};
use pd_core::scene::{Scene, SceneMutation};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub const FONT_SIZE_MIN: u32 = 10;
pub const FONT_SIZE_MAX: u32 = 96;

// Values shown for unset keys.
const SHOWN_FONT_SIZE: u32 = 16;
const SHOWN_TEXT_COLOR: Color = Color::rgb(0xff, 0xff, 0xff);
const SHOWN_TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

/// Spacing and size fields, in display order.
const SPACING_KEYS: [StyleKey; 5] = [
    StyleKey::PaddingX,
    StyleKey::PaddingY,
    StyleKey::Width,
    StyleKey::Height,
    StyleKey::BorderRadius,
];

// ─── Projection ──────────────────────────────────────────────────────────

/// What the inspector shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectorPanel {
    /// `None` = nothing selected; the panel shows a hint only.
    pub selection: Option<SelectionFields>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionFields {
    pub id: ElementId,
    pub kind: ElementKind,
    /// Present for kinds that show text.
    pub content: Option<String>,
    pub typography: Typography,
    pub text_color: Color,
    /// Present for every kind except Paragraph.
    pub background_color: Option<Color>,
    pub spacing: SmallVec<[NumberField; 5]>,
    /// Box only.
    pub border: Option<BorderFields>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_size: u32,
    /// Highlighted for any weight of 600 or more.
    pub bold: bool,
    pub italic: bool,
    pub align: Option<TextAlign>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberField {
    pub key: StyleKey,
    pub label: &'static str,
    /// `None` renders as an empty input.
    pub value: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderFields {
    pub width: u32,
    pub color: Color,
}

fn label(key: StyleKey) -> &'static str {
    match key {
        StyleKey::PaddingX => "Padding X",
        StyleKey::PaddingY => "Padding Y",
        StyleKey::Width => "Width",
        StyleKey::Height => "Height",
        StyleKey::BorderRadius => "Radius",
        StyleKey::BorderWidth => "Border width",
        _ => "",
    }
}

impl InspectorPanel {
    /// Project the scene's current selection.
    pub fn project(scene: &Scene) -> Self {
        Self {
            selection: scene.selected().map(SelectionFields::of),
        }
    }
}

impl SelectionFields {
    fn of(element: &Element) -> Self {
        let kind = element.kind();
        let s = &element.style;

        let spacing = SPACING_KEYS
            .into_iter()
            .filter(|key| kind.allows(*key))
            .map(|key| {
                let value = match key {
                    StyleKey::PaddingX => Some(s.padding_x.unwrap_or(0)),
                    StyleKey::PaddingY => Some(s.padding_y.unwrap_or(0)),
                    StyleKey::Width => s.width,
                    StyleKey::Height => s.height,
                    _ => Some(s.border_radius.unwrap_or(0)),
                };
                NumberField {
                    key,
                    label: label(key),
                    value,
                }
            })
            .collect();

        Self {
            id: element.id,
            kind,
            content: kind.has_text().then(|| element.content.clone()),
            typography: Typography {
                font_size: s.font_size.unwrap_or(SHOWN_FONT_SIZE),
                bold: s.font_weight.is_some_and(|w| w.css() >= 600),
                italic: s.font_style == Some(FontStyle::Italic),
                align: s.text_align,
            },
            text_color: s.color.unwrap_or(SHOWN_TEXT_COLOR),
            background_color: kind
                .allows(StyleKey::BackgroundColor)
                .then(|| s.background_color.unwrap_or(SHOWN_TRANSPARENT)),
            spacing,
            border: (kind == ElementKind::Box).then(|| BorderFields {
                width: s.border_width.unwrap_or(0),
                color: s.border_color.unwrap_or(SHOWN_TRANSPARENT),
            }),
        }
    }
}

// ─── Edits ───────────────────────────────────────────────────────────────

/// One field change. Numeric and color fields carry raw input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum InspectorEdit {
    Content(String),
    FontSize(String),
    ToggleBold,
    ToggleItalic,
    Align(TextAlign),
    TextColor(String),
    BackgroundColor(String),
    PaddingX(String),
    PaddingY(String),
    Width(String),
    Height(String),
    BorderRadius(String),
    BorderWidth(String),
    BorderColor(String),
}

/// Lenient text → non-negative pixel count.
fn coerce_px(raw: &str) -> u32 {
    coerce_int(raw).clamp(0, i64::from(u32::MAX)) as u32
}

impl InspectorEdit {
    /// Whether the field is shown for `kind`.
    pub fn is_exposed_for(&self, kind: ElementKind) -> bool {
        match self {
            Self::Content(_) => kind.has_text(),
            Self::FontSize(_)
            | Self::ToggleBold
            | Self::ToggleItalic
            | Self::Align(_)
            | Self::TextColor(_) => true,
            Self::BackgroundColor(_) => kind.allows(StyleKey::BackgroundColor),
            Self::PaddingX(_) => kind.allows(StyleKey::PaddingX),
            Self::PaddingY(_) => kind.allows(StyleKey::PaddingY),
            Self::Width(_) => kind.allows(StyleKey::Width),
            Self::Height(_) => kind.allows(StyleKey::Height),
            Self::BorderRadius(_) => kind.allows(StyleKey::BorderRadius),
            Self::BorderWidth(_) | Self::BorderColor(_) => kind == ElementKind::Box,
        }
    }

    /// The scene update for this edit against the current selection.
    /// `None` when nothing is selected, when the field is hidden for the
    /// selected kind, or when a color does not parse.
    pub fn to_mutation(&self, scene: &Scene) -> Option<SceneMutation> {
        let element = scene.selected()?;
        if !self.is_exposed_for(element.kind()) {
            log::warn!("{self:?} is not editable on a {}", element.kind());
            return None;
        }
        let id = element.id;
        let style = &element.style;

        let patch = match self {
            Self::Content(text) => {
                return Some(SceneMutation::UpdateContent {
                    id,
                    content: text.clone(),
                });
            }
            Self::FontSize(raw) => {
                let size = coerce_int(raw).clamp(i64::from(FONT_SIZE_MIN), i64::from(FONT_SIZE_MAX));
                StylePatch::from(StyleValue::FontSize(size as u32))
            }
            Self::ToggleBold => {
                StylePatch::from(StyleValue::FontWeight(FontWeight::toggled(style.font_weight)))
            }
            Self::ToggleItalic => {
                let next = match style.font_style {
                    Some(FontStyle::Italic) => FontStyle::Normal,
                    _ => FontStyle::Italic,
                };
                StylePatch::from(StyleValue::FontStyle(next))
            }
            Self::Align(align) => StylePatch::from(StyleValue::TextAlign(*align)),
            Self::TextColor(raw) => StylePatch::from(StyleValue::Color(color_input(raw)?)),
            Self::BackgroundColor(raw) => {
                StylePatch::from(StyleValue::BackgroundColor(color_input(raw)?))
            }
            Self::BorderColor(raw) => StylePatch::from(StyleValue::BorderColor(color_input(raw)?)),
            Self::PaddingX(raw) => StylePatch::from(StyleValue::PaddingX(coerce_px(raw))),
            Self::PaddingY(raw) => StylePatch::from(StyleValue::PaddingY(coerce_px(raw))),
            Self::BorderRadius(raw) => StylePatch::from(StyleValue::BorderRadius(coerce_px(raw))),
            Self::BorderWidth(raw) => StylePatch::from(StyleValue::BorderWidth(coerce_px(raw))),
            Self::Width(raw) => size_patch(StyleKey::Width, coerce_px(raw)),
            Self::Height(raw) => size_patch(StyleKey::Height, coerce_px(raw)),
        };
        Some(SceneMutation::UpdateStyle { id, patch })
    }
}

fn color_input(raw: &str) -> Option<Color> {
    let color = parse_color(raw);
    if color.is_none() {
        log::warn!("ignoring color input `{raw}`");
    }
    color
}

/// Width and height of 0 mean "unset".
fn size_patch(key: StyleKey, v: u32) -> StylePatch {
    match (key, v) {
        (_, 0) => StylePatch::new().clear(key),
        (StyleKey::Height, v) => StylePatch::from(StyleValue::Height(v)),
        (_, v) => StylePatch::from(StyleValue::Width(v)),
    }
}
