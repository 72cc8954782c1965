//! Element model for the page canvas.
//!
//! A page is a flat list of absolutely positioned elements. Each element has
//! an immutable kind, a position, free-form text content, and a sparse style
//! map. Absent style keys mean "use the kind's default" at render time; that
//! resolution lives in [`crate::resolve`].

use crate::id::ElementId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;
use std::fmt;

/// Smallest coordinate an element may sit at on either axis.
pub const MIN_COORD: i32 = 4;

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color, 8 bits per channel.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Helper to parse a single hex digit.
fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex color string: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    /// The string may optionally start with `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        Self::from_hex_digits(hex.strip_prefix('#').unwrap_or(hex))
    }

    /// Parse bare hex digits (no `#`).
    pub fn from_hex_digits(digits: &str) -> Option<Self> {
        let bytes = digits.as_bytes();
        let short = |i: usize| hex_val(bytes[i]).map(|v| v * 17);
        let long = |i: usize| Some(hex_val(bytes[i])? << 4 | hex_val(bytes[i + 1])?);

        match bytes.len() {
            3 => Some(Self::rgb(short(0)?, short(1)?, short(2)?)),
            4 => Some(Self::rgba(short(0)?, short(1)?, short(2)?, short(3)?)),
            6 => Some(Self::rgb(long(0)?, long(2)?, long(4)?)),
            8 => Some(Self::rgba(long(0)?, long(2)?, long(4)?, long(6)?)),
            _ => None,
        }
    }

    /// Same color with a different alpha channel.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Emit as lowercase `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        crate::parse::parse_color(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid color `{s}`")))
    }
}

/// Scene accent used when a template does not provide one.
pub const DEFAULT_ACCENT: Color = Color::rgb(0x60, 0xa5, 0xfa);

// ─── Typography enums ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum FontWeight {
    Regular,
    /// Only ever produced by the Button defaults.
    SemiBold,
    Bold,
}

impl FontWeight {
    pub const fn css(self) -> u16 {
        match self {
            Self::Regular => 400,
            Self::SemiBold => 600,
            Self::Bold => 700,
        }
    }

    /// Inspector bold toggle: 700 flips to 400, anything else to 700.
    #[must_use]
    pub const fn toggled(current: Option<Self>) -> Self {
        match current {
            Some(Self::Bold) => Self::Regular,
            _ => Self::Bold,
        }
    }
}

impl From<FontWeight> for u16 {
    fn from(w: FontWeight) -> u16 {
        w.css()
    }
}

impl TryFrom<u16> for FontWeight {
    type Error = String;

    fn try_from(v: u16) -> Result<Self, Self::Error> {
        match v {
            400 => Ok(Self::Regular),
            600 => Ok(Self::SemiBold),
            700 => Ok(Self::Bold),
            other => Err(format!("unsupported font weight {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Normal,
    Italic,
}

impl FontStyle {
    pub const fn css(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
        }
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub const fn css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

// ─── Element kinds ───────────────────────────────────────────────────────

/// The closed set of placeable elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    #[serde(rename = "heading")]
    Heading,
    #[serde(rename = "text", alias = "paragraph")]
    Paragraph,
    #[serde(rename = "button")]
    Button,
    #[serde(rename = "box")]
    Box,
}

impl ElementKind {
    pub const ALL: [ElementKind; 4] = [Self::Heading, Self::Paragraph, Self::Button, Self::Box];

    /// Wire tag used by palette drag payloads and the bridge.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Heading => "heading",
            Self::Paragraph => "text",
            Self::Button => "button",
            Self::Box => "box",
        }
    }

    /// Inverse of [`tag`](Self::tag); also accepts `paragraph`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "heading" => Some(Self::Heading),
            "text" | "paragraph" => Some(Self::Paragraph),
            "button" => Some(Self::Button),
            "box" => Some(Self::Box),
            _ => None,
        }
    }

    /// Whether this kind renders its `content`.
    pub const fn has_text(self) -> bool {
        !matches!(self, Self::Box)
    }

    /// Style keys the renderer and serializer read for this kind.
    pub fn allowed_keys(self) -> &'static [StyleKey] {
        use StyleKey as K;
        match self {
            Self::Heading => &[
                K::FontSize,
                K::FontWeight,
                K::FontStyle,
                K::TextAlign,
                K::Color,
                K::BackgroundColor,
                K::Width,
                K::Height,
            ],
            Self::Paragraph => &[
                K::FontSize,
                K::FontWeight,
                K::FontStyle,
                K::TextAlign,
                K::Color,
                K::Width,
                K::Height,
            ],
            Self::Button => &[
                K::FontSize,
                K::FontWeight,
                K::FontStyle,
                K::TextAlign,
                K::Color,
                K::BackgroundColor,
                K::PaddingX,
                K::PaddingY,
                K::Width,
                K::Height,
                K::BorderRadius,
            ],
            Self::Box => &[
                K::BackgroundColor,
                K::Width,
                K::Height,
                K::BorderRadius,
                K::BorderWidth,
                K::BorderColor,
            ],
        }
    }

    pub fn allows(self, key: StyleKey) -> bool {
        self.allowed_keys().contains(&key)
    }

    /// Default content for a freshly created element.
    pub const fn default_content(self) -> &'static str {
        match self {
            Self::Heading => "Headline",
            Self::Paragraph => "Start typing your content...",
            Self::Button => "Get Started",
            Self::Box => "",
        }
    }

    /// Default style for a freshly created element. Returned by value, so
    /// every element owns its own copy.
    pub fn default_style(self) -> Style {
        match self {
            Self::Heading => Style {
                font_size: Some(36),
                font_weight: Some(FontWeight::Bold),
                color: Some(Color::rgb(0xff, 0xff, 0xff)),
                ..Style::default()
            },
            Self::Paragraph => Style {
                font_size: Some(16),
                font_weight: Some(FontWeight::Regular),
                color: Some(Color::rgb(0xe5, 0xe7, 0xeb)),
                ..Style::default()
            },
            Self::Button => Style {
                font_size: Some(16),
                font_weight: Some(FontWeight::SemiBold),
                color: Some(Color::rgb(0x11, 0x18, 0x27)),
                background_color: Some(Color::rgb(0xff, 0xff, 0xff)),
                padding_x: Some(16),
                padding_y: Some(10),
                border_radius: Some(10),
                ..Style::default()
            },
            Self::Box => Style {
                background_color: Some(Color::rgb(0x11, 0x18, 0x27)),
                width: Some(240),
                height: Some(120),
                border_radius: Some(16),
                border_color: Some(Color::rgba(0xff, 0xff, 0xff, 0x22)),
                border_width: Some(1),
                ..Style::default()
            },
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// ─── Style ───────────────────────────────────────────────────────────────

/// Name of a single style attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleKey {
    FontSize,
    FontWeight,
    FontStyle,
    TextAlign,
    Color,
    BackgroundColor,
    PaddingX,
    PaddingY,
    Width,
    Height,
    BorderRadius,
    BorderWidth,
    BorderColor,
}

/// A typed value for one style attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleValue {
    FontSize(u32),
    FontWeight(FontWeight),
    FontStyle(FontStyle),
    TextAlign(TextAlign),
    Color(Color),
    BackgroundColor(Color),
    PaddingX(u32),
    PaddingY(u32),
    Width(u32),
    Height(u32),
    BorderRadius(u32),
    BorderWidth(u32),
    BorderColor(Color),
}

impl StyleValue {
    pub const fn key(&self) -> StyleKey {
        match self {
            Self::FontSize(_) => StyleKey::FontSize,
            Self::FontWeight(_) => StyleKey::FontWeight,
            Self::FontStyle(_) => StyleKey::FontStyle,
            Self::TextAlign(_) => StyleKey::TextAlign,
            Self::Color(_) => StyleKey::Color,
            Self::BackgroundColor(_) => StyleKey::BackgroundColor,
            Self::PaddingX(_) => StyleKey::PaddingX,
            Self::PaddingY(_) => StyleKey::PaddingY,
            Self::Width(_) => StyleKey::Width,
            Self::Height(_) => StyleKey::Height,
            Self::BorderRadius(_) => StyleKey::BorderRadius,
            Self::BorderWidth(_) => StyleKey::BorderWidth,
            Self::BorderColor(_) => StyleKey::BorderColor,
        }
    }
}

/// Sparse per-element style. `None` = not set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Style {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_x: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_y: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
}

impl Style {
    /// Set one attribute.
    pub fn set(&mut self, value: StyleValue) {
        match value {
            StyleValue::FontSize(v) => self.font_size = Some(v),
            StyleValue::FontWeight(v) => self.font_weight = Some(v),
            StyleValue::FontStyle(v) => self.font_style = Some(v),
            StyleValue::TextAlign(v) => self.text_align = Some(v),
            StyleValue::Color(v) => self.color = Some(v),
            StyleValue::BackgroundColor(v) => self.background_color = Some(v),
            StyleValue::PaddingX(v) => self.padding_x = Some(v),
            StyleValue::PaddingY(v) => self.padding_y = Some(v),
            StyleValue::Width(v) => self.width = Some(v),
            StyleValue::Height(v) => self.height = Some(v),
            StyleValue::BorderRadius(v) => self.border_radius = Some(v),
            StyleValue::BorderWidth(v) => self.border_width = Some(v),
            StyleValue::BorderColor(v) => self.border_color = Some(v),
        }
    }

    /// Unset one attribute.
    pub fn clear(&mut self, key: StyleKey) {
        match key {
            StyleKey::FontSize => self.font_size = None,
            StyleKey::FontWeight => self.font_weight = None,
            StyleKey::FontStyle => self.font_style = None,
            StyleKey::TextAlign => self.text_align = None,
            StyleKey::Color => self.color = None,
            StyleKey::BackgroundColor => self.background_color = None,
            StyleKey::PaddingX => self.padding_x = None,
            StyleKey::PaddingY => self.padding_y = None,
            StyleKey::Width => self.width = None,
            StyleKey::Height => self.height = None,
            StyleKey::BorderRadius => self.border_radius = None,
            StyleKey::BorderWidth => self.border_width = None,
            StyleKey::BorderColor => self.border_color = None,
        }
    }

    /// All values currently set, in declaration order.
    pub fn values(&self) -> SmallVec<[StyleValue; 8]> {
        let mut out = SmallVec::new();
        let mut push = |v: Option<StyleValue>| {
            if let Some(v) = v {
                out.push(v);
            }
        };
        push(self.font_size.map(StyleValue::FontSize));
        push(self.font_weight.map(StyleValue::FontWeight));
        push(self.font_style.map(StyleValue::FontStyle));
        push(self.text_align.map(StyleValue::TextAlign));
        push(self.color.map(StyleValue::Color));
        push(self.background_color.map(StyleValue::BackgroundColor));
        push(self.padding_x.map(StyleValue::PaddingX));
        push(self.padding_y.map(StyleValue::PaddingY));
        push(self.width.map(StyleValue::Width));
        push(self.height.map(StyleValue::Height));
        push(self.border_radius.map(StyleValue::BorderRadius));
        push(self.border_width.map(StyleValue::BorderWidth));
        push(self.border_color.map(StyleValue::BorderColor));
        out
    }

    /// Keys currently set.
    pub fn keys(&self) -> SmallVec<[StyleKey; 8]> {
        self.values().iter().map(StyleValue::key).collect()
    }
}

/// One entry of a partial style update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchEntry {
    Set(StyleValue),
    Clear(StyleKey),
}

/// An ordered partial style update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylePatch(pub SmallVec<[PatchEntry; 2]>);

impl StylePatch {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn set(mut self, value: StyleValue) -> Self {
        self.0.push(PatchEntry::Set(value));
        self
    }

    #[must_use]
    pub fn clear(mut self, key: StyleKey) -> Self {
        self.0.push(PatchEntry::Clear(key));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<StyleValue> for StylePatch {
    fn from(value: StyleValue) -> Self {
        Self::new().set(value)
    }
}

/// Every key set in `style` becomes a `Set` entry.
impl From<&Style> for StylePatch {
    fn from(style: &Style) -> Self {
        Self(style.values().into_iter().map(PatchEntry::Set).collect())
    }
}

/// Merge a partial update into an existing style.
///
/// Entries are applied in order: `Set` overrides that key, `Clear` unsets it.
/// Keys the patch does not name keep their existing value. The result owns
/// all of its values; nothing is shared with `existing` or `patch`.
#[must_use]
pub fn merge_style(existing: &Style, patch: &StylePatch) -> Style {
    let mut merged = existing.clone();
    for entry in &patch.0 {
        match *entry {
            PatchEntry::Set(value) => merged.set(value),
            PatchEntry::Clear(key) => merged.clear(key),
        }
    }
    merged
}

// ─── Element ─────────────────────────────────────────────────────────────

/// Canvas-relative integer position of an element's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Clamp both axes to at least `min`.
    #[must_use]
    pub fn clamped(self, min: i32) -> Self {
        Self {
            x: self.x.max(min),
            y: self.y.max(min),
        }
    }

    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// A placed visual node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    kind: ElementKind,
    pub position: Position,
    pub content: String,
    pub style: Style,
}

impl Element {
    /// The kind is fixed at creation.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Copy of this element under a fresh ID.
    #[must_use]
    pub fn duplicate(&self, position: Position) -> Self {
        Self {
            id: ElementId::generate(self.kind.tag()),
            kind: self.kind,
            position: position.clamped(MIN_COORD),
            content: self.content.clone(),
            style: self.style.clone(),
        }
    }
}

/// Caller-supplied overrides for [`create_element`]. Overrides win over
/// the kind defaults.
#[derive(Debug, Clone, Default)]
pub struct ElementOverrides {
    pub content: Option<String>,
    pub style: StylePatch,
}

impl ElementOverrides {
    pub fn content(text: impl Into<String>) -> Self {
        Self {
            content: Some(text.into()),
            ..Self::default()
        }
    }
}

/// Build a new element with a fresh ID and kind defaults, then apply
/// `overrides`. The position is clamped to [`MIN_COORD`].
pub fn create_element(
    kind: ElementKind,
    position: Position,
    overrides: ElementOverrides,
) -> Element {
    let style = merge_style(&kind.default_style(), &overrides.style);
    let content = overrides
        .content
        .unwrap_or_else(|| kind.default_content().to_string());
    Element {
        id: ElementId::generate(kind.tag()),
        kind,
        position: position.clamped(MIN_COORD),
        content,
        style,
    }
}

// ─── Templates ───────────────────────────────────────────────────────────

/// Payload announced when the user opens a template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateSeed {
    pub name: String,
    pub description: String,
    /// Raw color text; unparsable values fall back to [`DEFAULT_ACCENT`].
    #[serde(alias = "accent")]
    pub accent_color: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn color_hex_roundtrip() {
        let c = Color::from_hex("#FFFFFF22").unwrap();
        assert_eq!(c, Color::rgba(255, 255, 255, 0x22));
        assert_eq!(c.to_hex(), "#ffffff22");
        assert_eq!(Color::from_hex("#abc").unwrap().to_hex(), "#aabbcc");
        assert!(Color::from_hex("#abcde").is_none());
    }

    #[test]
    fn defaults_stay_within_allowed_keys() {
        for kind in ElementKind::ALL {
            let el = create_element(kind, Position::new(10, 10), ElementOverrides::default());
            for key in el.style.keys() {
                assert!(kind.allows(key), "{kind} default sets disallowed key {key:?}");
            }
        }
    }

    #[test]
    fn defaults_match_kind_table() {
        let expected = [
            (
                ElementKind::Heading,
                "Headline",
                Style {
                    font_size: Some(36),
                    font_weight: Some(FontWeight::Bold),
                    color: Some(Color::rgb(0xff, 0xff, 0xff)),
                    ..Style::default()
                },
            ),
            (
                ElementKind::Paragraph,
                "Start typing your content...",
                Style {
                    font_size: Some(16),
                    font_weight: Some(FontWeight::Regular),
                    color: Some(Color::rgb(0xe5, 0xe7, 0xeb)),
                    ..Style::default()
                },
            ),
            (
                ElementKind::Button,
                "Get Started",
                Style {
                    font_size: Some(16),
                    font_weight: Some(FontWeight::SemiBold),
                    color: Some(Color::rgb(0x11, 0x18, 0x27)),
                    background_color: Some(Color::rgb(0xff, 0xff, 0xff)),
                    padding_x: Some(16),
                    padding_y: Some(10),
                    border_radius: Some(10),
                    ..Style::default()
                },
            ),
            (
                ElementKind::Box,
                "",
                Style {
                    background_color: Some(Color::rgb(0x11, 0x18, 0x27)),
                    width: Some(240),
                    height: Some(120),
                    border_radius: Some(16),
                    border_color: Some(Color::rgba(0xff, 0xff, 0xff, 0x22)),
                    border_width: Some(1),
                    ..Style::default()
                },
            ),
        ];
        for (kind, content, style) in expected {
            let el = create_element(kind, Position::new(50, 50), ElementOverrides::default());
            assert_eq!(el.kind(), kind);
            assert_eq!((el.content.as_str(), &el.style), (content, &style), "{kind}");
        }
    }

    #[test]
    fn overrides_win_over_defaults() {
        let overrides = ElementOverrides {
            content: Some("Launch".into()),
            style: StylePatch::new().set(StyleValue::FontSize(48)),
        };
        let el = create_element(ElementKind::Heading, Position::new(60, 40), overrides);
        assert_eq!(el.content, "Launch");
        assert_eq!(el.style.font_size, Some(48));
        assert_eq!(el.style.font_weight, Some(FontWeight::Bold));
    }

    #[test]
    fn creation_clamps_position() {
        let el = create_element(
            ElementKind::Box,
            Position::new(-30, 2),
            ElementOverrides::default(),
        );
        assert_eq!(el.position, Position::new(4, 4));
    }

    #[test]
    fn merge_only_touches_named_keys() {
        let base = ElementKind::Box.default_style();
        let patch = StylePatch::new()
            .set(StyleValue::Width(300))
            .clear(StyleKey::BorderColor);
        let merged = merge_style(&base, &patch);
        assert_eq!(merged.width, Some(300));
        assert_eq!(merged.border_color, None);
        assert_eq!(merged.height, base.height);
        assert_eq!(merged.background_color, base.background_color);
    }

    #[test]
    fn later_patch_entries_win() {
        let patch = StylePatch::new()
            .set(StyleValue::PaddingX(1))
            .set(StyleValue::PaddingX(2));
        assert_eq!(merge_style(&Style::default(), &patch).padding_x, Some(2));
    }

    #[test]
    fn bold_toggle_flips_between_400_and_700() {
        assert_eq!(FontWeight::toggled(Some(FontWeight::Bold)), FontWeight::Regular);
        assert_eq!(FontWeight::toggled(Some(FontWeight::SemiBold)), FontWeight::Bold);
        assert_eq!(FontWeight::toggled(None), FontWeight::Bold);
    }

    #[test]
    fn kind_tags() {
        for kind in ElementKind::ALL {
            assert_eq!(ElementKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(ElementKind::from_tag("paragraph"), Some(ElementKind::Paragraph));
        assert_eq!(ElementKind::from_tag("image"), None);
    }

    #[test]
    fn style_serializes_sparse_camel_case() {
        let json = serde_json::to_string(&ElementKind::Button.default_style()).unwrap();
        assert!(json.contains(r##""backgroundColor":"#ffffff""##));
        assert!(json.contains(r#""fontWeight":600"#));
        assert!(!json.contains("borderColor"));
    }
}
