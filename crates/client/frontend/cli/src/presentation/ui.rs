//! Calculator screen rendering.
//!
//! Layout, top to bottom: title, tier slider, base-stats field with its
//! helper line, upgrade slider, cost lines, key help.
use anyhow::Result;
use pricing_core::{PricingConfig, QuoteView, UpgradeLevel};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, LineGauge, Paragraph},
};

use crate::presentation::{terminal::Tui, theme::PricerTheme};
use crate::state::{Field, FormState};

const FOOTER_HELP: &str =
    "Tab/↑↓ field  ←→ adjust  PgUp/PgDn ±5  Enter apply overall  Esc quit";

/// Everything needed to draw one frame.
pub struct RenderContext<'a> {
    pub form: &'a FormState,
    pub view: &'a QuoteView,
    pub theme: PricerTheme,
}

impl<'a> RenderContext<'a> {
    pub fn new(form: &'a FormState, view: &'a QuoteView) -> Self {
        Self {
            form,
            view,
            theme: PricerTheme::new(),
        }
    }
}

/// Draw the calculator screen.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| draw(frame, ctx))?;
    Ok(())
}

/// Draw into an arbitrary frame; split out so tests can use a test backend.
pub fn draw(frame: &mut Frame, ctx: &RenderContext) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Overall slider
            Constraint::Length(3), // Base stats
            Constraint::Length(1), // Helper text
            Constraint::Length(3), // Upgrade slider
            Constraint::Length(5), // Costs
            Constraint::Min(0),
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    frame.render_widget(
        Paragraph::new(Span::styled("Card Cost Calculator", ctx.theme.title())),
        chunks[0],
    );
    render_tier(frame, chunks[1], ctx);
    render_base_stats(frame, chunks[2], ctx);
    render_helper(frame, chunks[3], ctx);
    render_upgrade(frame, chunks[4], ctx);
    render_costs(frame, chunks[5], ctx);
    frame.render_widget(
        Paragraph::new(Span::styled(FOOTER_HELP, ctx.theme.footer())),
        chunks[7],
    );
}

fn field_block(field: Field, ctx: &RenderContext, enabled: bool) -> Block<'static> {
    let style = if enabled {
        ctx.theme.field(ctx.form.focus == field)
    } else {
        ctx.theme.disabled()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(Span::styled(field.to_string(), style))
}

fn render_tier(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let span = (PricingConfig::MAX_RATING_TIER - PricingConfig::MIN_RATING_TIER) as f64;
    let ratio =
        (ctx.form.rating_tier.get() - PricingConfig::MIN_RATING_TIER) as f64 / span;

    let mut label = ctx.form.tier_display();
    if ctx.form.is_editing_tier() {
        label.push('_');
    }

    let gauge = LineGauge::default()
        .block(field_block(Field::RatingTier, ctx, true))
        .filled_style(ctx.theme.gauge_filled())
        .unfilled_style(ctx.theme.gauge_unfilled())
        .line_set(symbols::line::THICK)
        .label(format!("{label:>4} "))
        .ratio(ratio.clamp(0.0, 1.0));

    frame.render_widget(gauge, area);
}

fn render_base_stats(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let mut text = ctx.form.base_stats_text.clone();
    if ctx.form.focus == Field::BaseStats {
        text.push('_');
    }

    let paragraph = Paragraph::new(text).block(field_block(Field::BaseStats, ctx, true));
    frame.render_widget(paragraph, area);
}

fn render_helper(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let line = if !ctx.view.validation_error.is_empty() {
        Span::styled(ctx.view.validation_error.as_str(), ctx.theme.error())
    } else {
        Span::styled(ctx.view.validation_advisory.as_str(), ctx.theme.advisory())
    };
    frame.render_widget(Paragraph::new(Line::from(vec![Span::raw(" "), line])), area);
}

fn render_upgrade(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let enabled = ctx.view.upgrade_enabled;
    let current = ctx.form.upgrade_level.get();

    let mut spans = Vec::new();
    for mark in UpgradeLevel::NONE.get()..=UpgradeLevel::MAX.get() {
        let style = if mark == current {
            ctx.theme.selected_mark(enabled)
        } else if enabled {
            ctx.theme.cost()
        } else {
            ctx.theme.disabled()
        };
        spans.push(Span::styled(format!(" {mark} "), style));
        spans.push(Span::raw(" "));
    }

    let paragraph =
        Paragraph::new(Line::from(spans)).block(field_block(Field::UpgradeLevel, ctx, enabled));
    frame.render_widget(paragraph, area);
}

fn render_costs(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let view = ctx.view;
    let lines = vec![
        cost_line("Card Cost: ", &view.formatted_base_cost, ctx.theme.cost()),
        cost_line("Upgrade Cost: ", &view.formatted_upgrade_cost, ctx.theme.cost()),
        cost_line("Total Cost: ", &view.formatted_total_cost, ctx.theme.total()),
    ];

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::TOP));
    frame.render_widget(paragraph, area);
}

fn cost_line<'a>(label: &'a str, value: &'a str, style: ratatui::style::Style) -> Line<'a> {
    Line::from(vec![Span::raw(label), Span::styled(value, style)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricing_core::RatingTier;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(form: &FormState, view: &QuoteView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let ctx = RenderContext::new(form, view);
        terminal.draw(|frame| draw(frame, &ctx)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn renders_labels_and_costs() {
        let form = FormState::new(RatingTier::DEFAULT);
        let view = QuoteView {
            formatted_base_cost: "48,250 credits".into(),
            formatted_upgrade_cost: "n/a".into(),
            formatted_total_cost: "48,250 credits".into(),
            ..QuoteView::default()
        };

        let text = screen_text(&form, &view);
        assert!(text.contains("Select Overall"));
        assert!(text.contains("Total Base Stats"));
        assert!(text.contains("Select Upgrade Level"));
        assert!(text.contains("Card Cost: 48,250 credits"));
        assert!(text.contains("Upgrade Cost: n/a"));
        assert!(text.contains("Total Cost: 48,250 credits"));
        assert!(text.contains("90"));
    }

    #[test]
    fn renders_error_before_advisory() {
        let form = FormState::new(RatingTier::DEFAULT);
        let view = QuoteView {
            validation_error: "bad input".into(),
            validation_advisory: "soft hint".into(),
            ..QuoteView::default()
        };

        let text = screen_text(&form, &view);
        assert!(text.contains("bad input"));
        assert!(!text.contains("soft hint"));
    }
}
