//! Terminal presentation: setup, styling, and rendering.
pub mod plain;
pub mod terminal;
pub mod theme;
pub mod ui;

pub use plain::render_plain;
pub use theme::PricerTheme;
pub use ui::{RenderContext, render};
