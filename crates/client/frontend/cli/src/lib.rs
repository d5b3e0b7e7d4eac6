//! Terminal UI frontend for the card cost calculator.
//!
//! This crate is the presentation layer: it owns the raw form state (tier
//! slider, base-stats text, upgrade slider), feeds it through a
//! `pricing_core::Calculator` on every change, and renders the resulting
//! `QuoteView`. Engagement observers are notified from here, never from the
//! core.

mod app;
mod config;
mod input;
pub mod logging;
pub mod observer;
pub mod presentation;
mod state;

pub use app::CliApp;
pub use config::{CliConfig, UiConfig};
pub use input::{InputHandler, KeyAction};
pub use observer::{EngagementObserver, TracingObserver};
pub use state::{Field, FormChange, FormState};
