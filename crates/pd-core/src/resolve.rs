//! Effective style resolution.
//!
//! The single place where a sparse element style turns into concrete CSS.
//! Both the live canvas view and the HTML serializer consume this output, so
//! the two can never disagree about defaults.
//!
//! Every element resolves to a *wrapper* block (absolutely positioned at the
//! element's coordinates) and, for Button and Box, an *inner* block.
//! Keys the element's kind does not allow are never read.

use crate::model::*;
use smallvec::SmallVec;
use std::fmt;

// Fallbacks for unset keys on the inner blocks.
const BUTTON_BACKGROUND: Color = Color::rgb(0xff, 0xff, 0xff);
const BUTTON_COLOR: Color = Color::rgb(0x11, 0x18, 0x27);
const BUTTON_PADDING_X: u32 = 16;
const BUTTON_PADDING_Y: u32 = 10;
const BUTTON_RADIUS: u32 = 10;
const BUTTON_FONT_SIZE: u32 = 16;
const BUTTON_FONT_WEIGHT: FontWeight = FontWeight::SemiBold;
const BOX_WIDTH: u32 = 240;
const BOX_HEIGHT: u32 = 120;
const BOX_RADIUS: u32 = 16;
const BOX_BACKGROUND: Color = Color::rgb(0x11, 0x18, 0x27);

/// Alpha of the accent tint in the canvas background gradients.
const ACCENT_TINT_ALPHA: u8 = 0x14;

/// An ordered list of CSS declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssBlock {
    decls: SmallVec<[(&'static str, String); 12]>,
}

impl CssBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, property: &'static str, value: impl Into<String>) {
        self.decls.push((property, value.into()));
    }

    fn push_opt(&mut self, property: &'static str, value: Option<String>) {
        if let Some(v) = value {
            self.push(property, v);
        }
    }

    /// Value of the first declaration for `property`.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.decls
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.decls.iter().map(|(p, v)| (*p, v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

/// Renders as an inline style attribute value: `a:b;c:d`.
impl fmt::Display for CssBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (p, v)) in self.decls.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{p}:{v}")?;
        }
        Ok(())
    }
}

/// An element with its styles resolved to CSS.
#[derive(Debug, Clone)]
pub struct ResolvedElement<'a> {
    pub element: &'a Element,
    pub wrapper: CssBlock,
    /// The button or box block inside the wrapper. `None` for text kinds.
    pub inner: Option<CssBlock>,
}

impl ResolvedElement<'_> {
    /// Text to render, if the kind shows text.
    pub fn text(&self) -> Option<&str> {
        self.element
            .kind()
            .has_text()
            .then_some(self.element.content.as_str())
    }
}

fn px(v: u32) -> String {
    format!("{v}px")
}

/// Resolve one element.
#[must_use]
pub fn resolve_element(element: &Element) -> ResolvedElement<'_> {
    let kind = element.kind();
    let s = &element.style;
    let allowed = |key: StyleKey| kind.allows(key);

    let mut wrapper = CssBlock::new();
    wrapper.push("position", "absolute");
    wrapper.push("left", px_signed(element.position.x));
    wrapper.push("top", px_signed(element.position.y));

    let mut inner = None;

    match kind {
        ElementKind::Heading | ElementKind::Paragraph => {
            push_text_decls(&mut wrapper, s);
            if allowed(StyleKey::BackgroundColor) {
                wrapper.push_opt("background", s.background_color.map(|c| c.to_hex()));
            }
            wrapper.push_opt("width", s.width.map(px));
            wrapper.push_opt("height", s.height.map(px));
            if kind == ElementKind::Heading {
                wrapper.push("line-height", "1.1");
            } else {
                wrapper.push("line-height", "1.6");
                wrapper.push("opacity", "0.95");
            }
        }
        ElementKind::Button => {
            wrapper.push_opt("text-align", s.text_align.map(|a| a.css().to_string()));
            wrapper.push_opt("width", s.width.map(px));
            wrapper.push_opt("height", s.height.map(px));

            let mut button = CssBlock::new();
            button.push(
                "background",
                s.background_color.unwrap_or(BUTTON_BACKGROUND).to_hex(),
            );
            button.push("color", s.color.unwrap_or(BUTTON_COLOR).to_hex());
            button.push(
                "padding",
                format!(
                    "{}px {}px",
                    s.padding_y.unwrap_or(BUTTON_PADDING_Y),
                    s.padding_x.unwrap_or(BUTTON_PADDING_X)
                ),
            );
            button.push("border-radius", px(s.border_radius.unwrap_or(BUTTON_RADIUS)));
            button.push("font-size", px(s.font_size.unwrap_or(BUTTON_FONT_SIZE)));
            button.push(
                "font-weight",
                s.font_weight.unwrap_or(BUTTON_FONT_WEIGHT).css().to_string(),
            );
            button.push_opt("font-style", s.font_style.map(|f| f.css().to_string()));
            inner = Some(button);
        }
        ElementKind::Box => {
            let mut block = CssBlock::new();
            block.push("width", px(s.width.unwrap_or(BOX_WIDTH)));
            block.push("height", px(s.height.unwrap_or(BOX_HEIGHT)));
            block.push("border-radius", px(s.border_radius.unwrap_or(BOX_RADIUS)));
            block.push("background", s.background_color.unwrap_or(BOX_BACKGROUND).to_hex());
            if let Some(w) = s.border_width.filter(|w| *w > 0) {
                let color = s
                    .border_color
                    .map_or_else(|| "transparent".to_string(), |c| c.to_hex());
                block.push("border", format!("{w}px solid {color}"));
            }
            inner = Some(block);
        }
    }

    ResolvedElement {
        element,
        wrapper,
        inner,
    }
}

fn px_signed(v: i32) -> String {
    format!("{v}px")
}

fn push_text_decls(block: &mut CssBlock, s: &Style) {
    block.push_opt("color", s.color.map(|c| c.to_hex()));
    block.push_opt("font-size", s.font_size.map(px));
    block.push_opt("font-weight", s.font_weight.map(|w| w.css().to_string()));
    block.push_opt("font-style", s.font_style.map(|f| f.css().to_string()));
    block.push_opt("text-align", s.text_align.map(|a| a.css().to_string()));
}

/// Decorative canvas background: two accent-tinted radial gradients in
/// opposite corners.
#[must_use]
pub fn canvas_background(accent: Color) -> String {
    let tint = accent.with_alpha(ACCENT_TINT_ALPHA).to_hex();
    format!(
        "radial-gradient(600px 200px at 0% 0%, {tint}, transparent), \
         radial-gradient(600px 200px at 100% 100%, {tint}, transparent)"
    )
}
