pub mod canvas;
pub mod config;
pub mod export;
pub mod input;
pub mod inspector;
pub mod interaction;
pub mod session;
pub mod shortcuts;

pub use canvas::{CanvasItem, CanvasView, render_view};
pub use config::EditorConfig;
pub use export::{
    Clipboard, DirectoryDelivery, ExportArtifact, ExportError, FileDelivery, MemoryClipboard,
};
pub use input::{CanvasRect, DragPayload, ELEMENT_TYPE_MIME, InputEvent};
pub use inspector::{InspectorEdit, InspectorPanel};
pub use interaction::{Handled, InteractionController, InteractionState};
pub use session::{EditorSession, SessionError};
pub use shortcuts::{ShortcutAction, ShortcutMap};
