//! Currency display built on a transition controller
//!
//! Only the digits roll. The sign and the currency symbol are static parts
//! that switch immediately, and the scrolling direction follows the amount:
//! an increase scrolls down, a decrease scrolls up.

use std::time::Instant;

use crate::alphabet::AlphabetSet;
use crate::format::{format_currency, CurrencyText, LocaleFormat};
use crate::path::Direction;
use crate::transition::{TargetOutcome, TransitionController, TransitionOptions};

#[derive(Debug, Clone)]
pub struct CurrencyTicker {
    controller: TransitionController,
    locale: LocaleFormat,
    decimals: usize,
    amount: f64,
    text: CurrencyText,
    /// Amount waiting behind the running animation
    pending: Option<(f64, CurrencyText)>,
}

impl CurrencyTicker {
    pub fn new(
        amount: f64,
        decimals: usize,
        locale: LocaleFormat,
        alphabets: AlphabetSet,
        options: TransitionOptions,
    ) -> Self {
        let text = format_currency(amount, decimals, &locale);
        let controller = TransitionController::new(&text.digits, alphabets, options);
        Self {
            controller,
            locale,
            decimals,
            amount,
            text,
            pending: None,
        }
    }

    pub fn set_amount(&mut self, amount: f64) -> TargetOutcome {
        self.set_amount_at(amount, Instant::now())
    }

    /// Move to `amount`, rolling in the direction of the change
    ///
    /// The sign and symbol follow the digits: a dropped amount leaves them
    /// untouched and a queued one applies them once its digits start.
    pub fn set_amount_at(&mut self, amount: f64, now: Instant) -> TargetOutcome {
        let direction = Direction::for_change(self.amount, amount);
        let text = format_currency(amount, self.decimals, &self.locale);
        let outcome = self
            .controller
            .set_target_directed_at(&text.digits, direction, now);
        match outcome {
            TargetOutcome::Dropped => {}
            TargetOutcome::Queued => self.pending = Some((amount, text)),
            TargetOutcome::Unchanged | TargetOutcome::Started | TargetOutcome::Committed => {
                self.pending = None;
                self.amount = amount;
                self.text = text;
            }
        }
        outcome
    }

    pub fn update_at(&mut self, now: Instant) -> bool {
        let animating = self.controller.update_at(now);
        self.apply_pending();
        animating
    }

    /// Jump to the latest requested amount
    pub fn finish(&mut self) {
        self.controller.finish();
        self.apply_pending();
    }

    fn apply_pending(&mut self) {
        if self.controller.state().queued().is_none() {
            if let Some((amount, text)) = self.pending.take() {
                self.amount = amount;
                self.text = text;
            }
        }
    }

    /// Amount whose digits are shown or rolling in
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Static parts and digits of [`Self::amount`]
    pub fn text(&self) -> &CurrencyText {
        &self.text
    }

    pub fn controller(&self) -> &TransitionController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut TransitionController {
        &mut self.controller
    }
}
