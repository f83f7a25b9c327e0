//! Page rendering for vitrine.
//!
//! Turns one [`vitrine_catalog::AppRecord`] into a complete, self-contained
//! HTML document: inline stylesheet, no external assets beyond system fonts
//! and emoji glyphs.

pub mod color;
pub mod renderer;
pub mod templates;

pub use color::{to_rgba, AccentScale, ColorError};
pub use renderer::{PageRenderer, RenderError, RenderOptions};
pub use templates::TemplateEngine;
