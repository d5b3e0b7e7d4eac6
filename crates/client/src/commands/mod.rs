//! Subcommands of the `card-pricer` binary.
mod quote;
mod tui;

pub use quote::QuoteArgs;
pub use tui::TuiArgs;
