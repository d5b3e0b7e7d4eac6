//! Plain-text rendering of a quote for non-interactive output.
use std::fmt::Write;

use pricing_core::QuoteView;

/// Render the output surface as lines of text.
///
/// Helper text comes first when present, followed by the three cost lines.
pub fn render_plain(view: &QuoteView) -> String {
    let mut out = String::new();

    if !view.validation_error.is_empty() {
        let _ = writeln!(out, "Error: {}", view.validation_error);
    } else if !view.validation_advisory.is_empty() {
        let _ = writeln!(out, "Note: {}", view.validation_advisory);
    }

    let _ = writeln!(out, "Card Cost: {}", view.formatted_base_cost);
    let _ = writeln!(out, "Upgrade Cost: {}", view.formatted_upgrade_cost);
    let _ = writeln!(out, "Total Cost: {}", view.formatted_total_cost);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_quote_prints_cost_lines_only() {
        let view = QuoteView {
            formatted_base_cost: "48,250 credits".into(),
            formatted_upgrade_cost: "n/a".into(),
            formatted_total_cost: "48,250 credits".into(),
            upgrade_enabled: true,
            ..QuoteView::default()
        };

        assert_eq!(
            render_plain(&view),
            "Card Cost: 48,250 credits\nUpgrade Cost: n/a\nTotal Cost: 48,250 credits\n"
        );
    }

    #[test]
    fn error_line_precedes_costs() {
        let view = QuoteView {
            validation_error: "Should be an integer between 251 and 594 (both inclusive)".into(),
            formatted_base_cost: "n/a".into(),
            formatted_upgrade_cost: "n/a".into(),
            formatted_total_cost: "n/a".into(),
            ..QuoteView::default()
        };

        let text = render_plain(&view);
        assert!(text.starts_with("Error: Should be an integer"));
        assert!(text.ends_with("Total Cost: n/a\n"));
    }

    #[test]
    fn advisory_is_labelled_as_note() {
        let view = QuoteView {
            validation_advisory: "Needs to be higher than 399 to unlock upgrade level".into(),
            ..QuoteView::default()
        };

        assert!(render_plain(&view).starts_with("Note: Needs to be higher than 399"));
    }
}
