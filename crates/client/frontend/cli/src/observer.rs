//! Engagement observers.
//!
//! Side-effecting hooks the presentation layer calls after user actions.
//! The pricing core never sees them.

/// Receives engagement events from the presentation layer.
pub trait EngagementObserver {
    /// The calculator screen was opened.
    fn page_view(&self);

    /// Base-stats text changed and passed validation (an advisory may apply).
    fn base_stats_accepted(&self, value: u16);
}

/// Emits engagement events as `tracing` records on the `engagement` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl EngagementObserver for TracingObserver {
    fn page_view(&self) {
        tracing::info!(target: "engagement", action = "pageview", "Calculator opened");
    }

    fn base_stats_accepted(&self, value: u16) {
        tracing::info!(
            target: "engagement",
            category = "engagement",
            action = "set_total_base_stats",
            label = "input",
            value,
            "Base stats accepted"
        );
    }
}
