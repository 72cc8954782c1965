//! Editor configuration.
//!
//! Everything here has a default; a config file only needs the keys it
//! wants to change.

use pd_core::model::{Color, DEFAULT_ACCENT};
use serde::{Deserialize, Serialize};

use crate::session::SessionError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    /// Canvas width assumed when the host has not reported a canvas rect.
    pub fallback_canvas_width: f32,
    /// A palette click places the element this far left of the canvas
    /// centre line.
    pub palette_column_offset: f32,
    /// Top coordinate of palette-click placement.
    pub palette_top: i32,
    pub export_filename: String,
    pub default_accent: Color,
    /// Swatches offered by the accent picker.
    pub accent_presets: Vec<Color>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            fallback_canvas_width: 800.0,
            palette_column_offset: 120.0,
            palette_top: 60,
            export_filename: pd_core::EXPORT_FILENAME.to_string(),
            default_accent: DEFAULT_ACCENT,
            accent_presets: vec![
                Color::rgb(0x60, 0xa5, 0xfa),
                Color::rgb(0x34, 0xd3, 0x99),
                Color::rgb(0xf4, 0x72, 0xb6),
                Color::rgb(0xf5, 0x9e, 0x0b),
                Color::rgb(0xa7, 0x8b, 0xfa),
                Color::rgb(0x22, 0xd3, 0xee),
                Color::rgb(0xef, 0x44, 0x44),
            ],
        }
    }
}

impl EditorConfig {
    /// Parse a JSON config. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        serde_json::from_str(json).map_err(|e| {
            log::warn!("rejected editor config: {e}");
            SessionError::Config(e)
        })
    }

    /// Placement of a palette click on a canvas of `canvas_width` pixels.
    pub fn palette_click_position(&self, canvas_width: Option<f32>) -> pd_core::Position {
        let width = canvas_width
            .filter(|w| *w > 0.0)
            .unwrap_or(self.fallback_canvas_width);
        let x = (width / 2.0 - self.palette_column_offset).round() as i32;
        pd_core::Position::new(x, self.palette_top)
    }
}
