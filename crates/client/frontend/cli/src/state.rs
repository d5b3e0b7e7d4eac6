//! Raw form state for the calculator screen.
//!
//! Holds exactly what the user has entered. Nothing here prices anything;
//! [`FormState::input`] hands a snapshot to the core after every change.

use pricing_core::{QuoteInput, RatingTier, UpgradeLevel};
use strum::Display;

use crate::input::KeyAction;

/// Longest text kept in either text field.
const MAX_TIER_TEXT: usize = 3;
const MAX_BASE_STATS_TEXT: usize = 12;

/// Focusable form fields, in tab order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display)]
pub enum Field {
    #[default]
    #[strum(serialize = "Select Overall")]
    RatingTier,
    #[strum(serialize = "Total Base Stats")]
    BaseStats,
    #[strum(serialize = "Select Upgrade Level")]
    UpgradeLevel,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Self::RatingTier => Self::BaseStats,
            Self::BaseStats => Self::UpgradeLevel,
            Self::UpgradeLevel => Self::RatingTier,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::RatingTier => Self::UpgradeLevel,
            Self::BaseStats => Self::RatingTier,
            Self::UpgradeLevel => Self::BaseStats,
        }
    }
}

/// Which part of the pricing input an action touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormChange {
    None,
    Tier,
    BaseStats,
    UpgradeLevel,
}

impl FormChange {
    pub fn is_change(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Form contents plus the focused field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    pub focus: Field,
    pub rating_tier: RatingTier,
    /// Uncommitted tier text while the user is typing a number.
    pub tier_text: Option<String>,
    pub base_stats_text: String,
    pub upgrade_level: UpgradeLevel,
}

impl FormState {
    pub fn new(initial_tier: RatingTier) -> Self {
        Self {
            focus: Field::default(),
            rating_tier: initial_tier,
            tier_text: None,
            base_stats_text: String::new(),
            upgrade_level: UpgradeLevel::NONE,
        }
    }

    /// Applies one key action.
    ///
    /// `upgrade_enabled` comes from the latest quote; the upgrade slider
    /// ignores steps while it is false.
    pub fn apply(&mut self, action: &KeyAction, upgrade_enabled: bool) -> FormChange {
        match *action {
            KeyAction::FocusNext => self.move_focus(Field::next),
            KeyAction::FocusPrev => self.move_focus(Field::prev),
            KeyAction::Step(delta) => self.step(delta, upgrade_enabled),
            KeyAction::Insert(ch) => self.insert(ch),
            KeyAction::Backspace => self.backspace(),
            KeyAction::Commit if self.focus == Field::RatingTier => self.commit_tier_text(),
            KeyAction::Commit | KeyAction::Quit | KeyAction::None => FormChange::None,
        }
    }

    /// Commits pending tier text, clamping it into the valid tier range.
    ///
    /// An emptied field commits as the minimum tier.
    pub fn commit_tier_text(&mut self) -> FormChange {
        let Some(text) = self.tier_text.take() else {
            return FormChange::None;
        };

        let tier = if text.is_empty() {
            RatingTier::MIN
        } else {
            text.parse::<i64>()
                .map(RatingTier::clamped)
                .unwrap_or(RatingTier::MIN)
        };

        self.set_tier(tier)
    }

    /// Text shown in the tier number box.
    pub fn tier_display(&self) -> String {
        match &self.tier_text {
            Some(text) => text.clone(),
            None => self.rating_tier.to_string(),
        }
    }

    pub fn is_editing_tier(&self) -> bool {
        self.tier_text.is_some()
    }

    /// Snapshot handed to the pricing core.
    pub fn input(&self) -> QuoteInput<'_> {
        QuoteInput::new(self.rating_tier, &self.base_stats_text, self.upgrade_level)
    }

    fn move_focus(&mut self, to: impl FnOnce(Field) -> Field) -> FormChange {
        let change = if self.focus == Field::RatingTier {
            self.commit_tier_text()
        } else {
            FormChange::None
        };
        self.focus = to(self.focus);
        change
    }

    fn step(&mut self, delta: i16, upgrade_enabled: bool) -> FormChange {
        match self.focus {
            Field::RatingTier => {
                self.tier_text = None;
                let tier = self.rating_tier.offset(delta);
                self.set_tier(tier)
            }
            Field::UpgradeLevel if upgrade_enabled => {
                let level = self.upgrade_level.offset(delta);
                if level == self.upgrade_level {
                    return FormChange::None;
                }
                self.upgrade_level = level;
                FormChange::UpgradeLevel
            }
            Field::UpgradeLevel | Field::BaseStats => FormChange::None,
        }
    }

    fn insert(&mut self, ch: char) -> FormChange {
        match self.focus {
            Field::RatingTier if ch.is_ascii_digit() => {
                let text = self.tier_text.get_or_insert_with(String::new);
                if text.len() < MAX_TIER_TEXT {
                    text.push(ch);
                }
                FormChange::None
            }
            Field::BaseStats if ch.is_ascii_digit() || ch == '.' || ch == '-' => {
                if self.base_stats_text.len() >= MAX_BASE_STATS_TEXT {
                    return FormChange::None;
                }
                self.base_stats_text.push(ch);
                FormChange::BaseStats
            }
            _ => FormChange::None,
        }
    }

    fn backspace(&mut self) -> FormChange {
        match self.focus {
            Field::RatingTier => {
                let current = self.rating_tier.to_string();
                self.tier_text.get_or_insert(current).pop();
                FormChange::None
            }
            Field::BaseStats => match self.base_stats_text.pop() {
                Some(_) => FormChange::BaseStats,
                None => FormChange::None,
            },
            Field::UpgradeLevel => FormChange::None,
        }
    }

    fn set_tier(&mut self, tier: RatingTier) -> FormChange {
        if tier == self.rating_tier {
            return FormChange::None;
        }
        self.rating_tier = tier;
        FormChange::Tier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> FormState {
        FormState::new(RatingTier::DEFAULT)
    }

    fn type_text(form: &mut FormState, text: &str) {
        for ch in text.chars() {
            form.apply(&KeyAction::Insert(ch), true);
        }
    }

    #[test]
    fn focus_cycles_through_fields() {
        let mut form = form();
        assert_eq!(form.focus, Field::RatingTier);
        form.apply(&KeyAction::FocusNext, true);
        assert_eq!(form.focus, Field::BaseStats);
        form.apply(&KeyAction::FocusNext, true);
        assert_eq!(form.focus, Field::UpgradeLevel);
        form.apply(&KeyAction::FocusNext, true);
        assert_eq!(form.focus, Field::RatingTier);
        form.apply(&KeyAction::FocusPrev, true);
        assert_eq!(form.focus, Field::UpgradeLevel);
    }

    #[test]
    fn field_labels() {
        assert_eq!(Field::RatingTier.to_string(), "Select Overall");
        assert_eq!(Field::BaseStats.to_string(), "Total Base Stats");
        assert_eq!(Field::UpgradeLevel.to_string(), "Select Upgrade Level");
    }

    #[test]
    fn tier_steps_saturate() {
        let mut form = form();
        assert_eq!(form.apply(&KeyAction::Step(5), true), FormChange::Tier);
        assert_eq!(form.rating_tier.get(), 95);
        form.apply(&KeyAction::Step(5), true);
        assert_eq!(form.rating_tier.get(), 99);
        assert_eq!(form.apply(&KeyAction::Step(1), true), FormChange::None);
    }

    #[test]
    fn typed_tier_applies_on_commit_only() {
        let mut form = form();
        type_text(&mut form, "75");
        assert_eq!(form.rating_tier, RatingTier::DEFAULT);
        assert_eq!(form.tier_display(), "75");

        assert_eq!(form.apply(&KeyAction::Commit, true), FormChange::Tier);
        assert_eq!(form.rating_tier.get(), 75);
        assert!(!form.is_editing_tier());
    }

    #[test]
    fn typed_tier_is_clamped() {
        let mut form = form();
        type_text(&mut form, "65");
        form.apply(&KeyAction::Commit, true);
        assert_eq!(form.rating_tier.get(), 70);

        type_text(&mut form, "120");
        form.apply(&KeyAction::Commit, true);
        assert_eq!(form.rating_tier.get(), 99);
    }

    #[test]
    fn emptied_tier_commits_as_minimum() {
        let mut form = form();
        form.apply(&KeyAction::Backspace, true);
        assert_eq!(form.tier_display(), "9");
        form.apply(&KeyAction::Backspace, true);
        assert_eq!(form.tier_display(), "");

        assert_eq!(form.apply(&KeyAction::FocusNext, true), FormChange::Tier);
        assert_eq!(form.rating_tier, RatingTier::MIN);
        assert_eq!(form.focus, Field::BaseStats);
    }

    #[test]
    fn leaving_tier_commits_pending_text() {
        let mut form = form();
        type_text(&mut form, "81");
        assert_eq!(form.apply(&KeyAction::FocusPrev, true), FormChange::Tier);
        assert_eq!(form.rating_tier.get(), 81);
    }

    #[test]
    fn base_stats_text_accepts_number_characters() {
        let mut form = form();
        form.apply(&KeyAction::FocusNext, true);
        assert_eq!(form.apply(&KeyAction::Insert('5'), true), FormChange::BaseStats);
        assert_eq!(form.apply(&KeyAction::Insert('x'), true), FormChange::None);
        type_text(&mut form, "32.0");
        assert_eq!(form.base_stats_text, "532.0");

        assert_eq!(form.apply(&KeyAction::Backspace, true), FormChange::BaseStats);
        assert_eq!(form.input().base_stats_text, "532.");
    }

    #[test]
    fn backspace_on_empty_base_stats_is_noop() {
        let mut form = form();
        form.apply(&KeyAction::FocusNext, true);
        assert_eq!(form.apply(&KeyAction::Backspace, true), FormChange::None);
    }

    #[test]
    fn upgrade_slider_respects_enabled_flag() {
        let mut form = form();
        form.focus = Field::UpgradeLevel;
        assert_eq!(form.apply(&KeyAction::Step(1), false), FormChange::None);
        assert_eq!(form.upgrade_level, UpgradeLevel::NONE);

        assert_eq!(form.apply(&KeyAction::Step(1), true), FormChange::UpgradeLevel);
        assert_eq!(form.upgrade_level.get(), 1);
        assert_eq!(form.apply(&KeyAction::Step(-1), true), FormChange::UpgradeLevel);
        assert_eq!(form.apply(&KeyAction::Step(-1), true), FormChange::None);
    }

    #[test]
    fn input_snapshot_reflects_form() {
        let mut form = form();
        form.focus = Field::BaseStats;
        type_text(&mut form, "450");
        let input = form.input();
        assert_eq!(input.rating_tier, RatingTier::DEFAULT);
        assert_eq!(input.base_stats_text, "450");
        assert_eq!(input.upgrade_level, UpgradeLevel::NONE);
    }
}
