//! Fixed terminal palette for the calculator screen.

use ratatui::style::{Color, Modifier, Style};

/// Styles for every visual state the form can be in.
#[derive(Clone, Copy, Debug, Default)]
pub struct PricerTheme;

impl PricerTheme {
    pub fn new() -> Self {
        Self
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    /// Border and label of a field, brighter when focused.
    pub fn field(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    pub fn disabled(&self) -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    }

    pub fn gauge_filled(&self) -> Style {
        Style::default().fg(Color::LightBlue)
    }

    pub fn gauge_unfilled(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    /// Currently selected upgrade mark.
    pub fn selected_mark(&self, enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightBlue)
                .add_modifier(Modifier::BOLD)
        } else {
            self.disabled().add_modifier(Modifier::REVERSED)
        }
    }

    pub fn error(&self) -> Style {
        Style::default().fg(Color::LightRed)
    }

    pub fn advisory(&self) -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn cost(&self) -> Style {
        Style::default().fg(Color::White)
    }

    pub fn total(&self) -> Style {
        Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD)
    }

    pub fn footer(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }
}
