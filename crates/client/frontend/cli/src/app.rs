//! Glue code tying the form state, the pricing core, and the terminal together.
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use pricing_core::{Calculator, PriceOracle, Quote, UpgradeOracle};

use crate::config::CliConfig;
use crate::input::{InputHandler, KeyAction};
use crate::observer::EngagementObserver;
use crate::presentation::{RenderContext, terminal, ui};
use crate::state::{FormChange, FormState};

pub struct CliApp<P, U> {
    config: CliConfig,
    calculator: Calculator<P, U>,
    form: FormState,
    quote: Quote,
    input: InputHandler,
    observer: Box<dyn EngagementObserver>,
}

impl<P, U> CliApp<P, U>
where
    P: PriceOracle,
    U: UpgradeOracle,
{
    pub fn new(
        config: CliConfig,
        calculator: Calculator<P, U>,
        observer: Box<dyn EngagementObserver>,
    ) -> Self {
        let form = FormState::new(config.initial_tier());
        let quote = calculator.quote(form.input());

        Self {
            config,
            calculator,
            form,
            quote,
            input: InputHandler::new(),
            observer,
        }
    }

    /// Run the interactive screen until the user quits.
    pub fn run(mut self) -> Result<()> {
        tracing::info!("Calculator starting...");

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        self.observer.page_view();

        let tick = Duration::from_millis(self.config.ui.tick_ms);
        ui::render(&mut terminal, &self.render_context())?;

        loop {
            if !event::poll(tick)? {
                continue;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        break;
                    }
                }
                Event::Resize(..) => {}
                _ => continue,
            }

            ui::render(&mut terminal, &self.render_context())?;
        }

        tracing::info!("Calculator exiting");
        Ok(())
    }

    /// Apply one key press. Returns true when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let action = self.input.handle_key(key);
        if action == KeyAction::Quit {
            return true;
        }

        let change = self.form.apply(&action, self.quote.view.upgrade_enabled);
        if change.is_change() {
            self.refresh(change);
        }
        false
    }

    fn refresh(&mut self, change: FormChange) {
        self.quote = self.calculator.quote(self.form.input());
        tracing::debug!(
            ?change,
            tier = self.form.rating_tier.get(),
            level = self.form.upgrade_level.get(),
            total = self.quote.cost.total_cost,
            "Quote refreshed"
        );

        if change == FormChange::BaseStats {
            if let Ok(stats) = &self.quote.validation {
                self.observer.base_stats_accepted(stats.value());
            }
        }
    }

    fn render_context(&self) -> RenderContext<'_> {
        RenderContext::new(&self.form, &self.quote.view)
    }

    pub fn config(&self) -> &CliConfig {
        &self.config
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn quote(&self) -> &Quote {
        &self.quote
    }
}
