pub mod html;
pub mod id;
pub mod model;
pub mod parse;
pub mod resolve;
pub mod scene;

pub use html::{EXPORT_FILENAME, EXPORT_MIME, escape_html, serialize};
pub use id::ElementId;
pub use model::*;
pub use parse::{coerce_int, parse_color};
pub use resolve::{CssBlock, ResolvedElement, canvas_background, resolve_element};
pub use scene::{Scene, SceneMutation};
