//! Serializer: Scene → standalone static HTML document.
//!
//! Pure and deterministic. Element styles come from [`crate::resolve`], the
//! same resolution the live canvas uses, and every piece of user text is
//! HTML-escaped before it is embedded.

use crate::model::ElementKind;
use crate::resolve::{ResolvedElement, canvas_background, resolve_element};
use crate::scene::Scene;
use std::fmt::Write;

/// Suggested filename for an exported page.
pub const EXPORT_FILENAME: &str = "page.html";

/// MIME type of the exported document.
pub const EXPORT_MIME: &str = "text/html";

/// Escape `&`, `<`, `>`, `"` and `'` for embedding in HTML text or
/// attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render one element's markup.
fn emit_element(out: &mut String, resolved: &ResolvedElement<'_>) {
    let text = escape_html(resolved.text().unwrap_or_default());
    let wrapper = &resolved.wrapper;
    let _ = match resolved.element.kind() {
        ElementKind::Heading | ElementKind::Paragraph => {
            write!(out, "<div style=\"{wrapper}\">{text}</div>")
        }
        ElementKind::Button => {
            let inner = resolved.inner.as_ref().map(ToString::to_string).unwrap_or_default();
            write!(
                out,
                "<div style=\"{wrapper}\"><button style=\"{inner}\">{text}</button></div>"
            )
        }
        ElementKind::Box => {
            let inner = resolved.inner.as_ref().map(ToString::to_string).unwrap_or_default();
            write!(out, "<div style=\"{wrapper}\"><div style=\"{inner}\"></div></div>")
        }
    };
}

/// Serialize a scene as a self-contained HTML page.
#[must_use]
pub fn serialize(scene: &Scene) -> String {
    let mut items = String::with_capacity(256 * scene.len().max(1));
    for (i, element) in scene.elements().enumerate() {
        if i > 0 {
            items.push_str("\n      ");
        }
        emit_element(&mut items, &resolve_element(element));
    }

    let background = canvas_background(scene.accent());
    log::debug!(
        "serialized {} element(s), {} bytes of markup",
        scene.len(),
        items.len()
    );

    format!(
        r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Exported Page</title>
    <style>
      body{{margin:0;background:#0a0a0a;color:#fff;font-family:Inter,system-ui,-apple-system,Segoe UI,Roboto,Helvetica,Arial,sans-serif}}
      .canvas{{position:relative;min-height:560px;overflow:hidden;background:{background}}}
    </style>
  </head>
  <body>
    <div class="canvas">
      {items}
    </div>
  </body>
</html>"#
    )
}
