use std::time::Instant;

use anyhow::Result;
use rolltext_core::{
    alphabet::alphanumeric, AlphabetSet, AppConfig, CurrencyTicker, DiffStrategy, Direction,
    SampleWindow, TargetOutcome, TransitionController, TransitionOptions,
};
use tracing::debug;

use crate::theme::Theme;

/// Values a ticker cycles through
#[derive(Debug, Clone)]
pub enum Feed {
    Texts(Vec<String>),
    Amounts(Vec<f64>),
}

impl Feed {
    fn len(&self) -> usize {
        match self {
            Feed::Texts(texts) => texts.len(),
            Feed::Amounts(amounts) => amounts.len(),
        }
    }
}

#[derive(Debug, Clone)]
enum Display {
    Text(TransitionController),
    Currency(CurrencyTicker),
}

/// A labelled line of rolling text fed from a fixed cycle of values
#[derive(Debug, Clone)]
pub struct Ticker {
    pub label: String,
    display: Display,
    feed: Feed,
    cursor: usize,
}

impl Ticker {
    pub fn text(
        label: &str,
        texts: Vec<String>,
        alphabets: AlphabetSet,
        options: TransitionOptions,
    ) -> Self {
        let initial = texts.first().cloned().unwrap_or_default();
        Self {
            label: label.to_string(),
            display: Display::Text(TransitionController::new(&initial, alphabets, options)),
            feed: Feed::Texts(texts),
            cursor: 0,
        }
    }

    pub fn currency(
        label: &str,
        amounts: Vec<f64>,
        config: &AppConfig,
        options: TransitionOptions,
    ) -> Self {
        let initial = amounts.first().copied().unwrap_or_default();
        let ticker = CurrencyTicker::new(
            initial,
            config.locale.decimals,
            config.locale.format(),
            AlphabetSet::numbers(),
            options,
        );
        Self {
            label: label.to_string(),
            display: Display::Currency(ticker),
            feed: Feed::Amounts(amounts),
            cursor: 0,
        }
    }

    pub fn controller(&self) -> &TransitionController {
        match &self.display {
            Display::Text(controller) => controller,
            Display::Currency(ticker) => ticker.controller(),
        }
    }

    fn controller_mut(&mut self) -> &mut TransitionController {
        match &mut self.display {
            Display::Text(controller) => controller,
            Display::Currency(ticker) => ticker.controller_mut(),
        }
    }

    /// Static text drawn before the rolling columns
    pub fn prefix(&self) -> String {
        match &self.display {
            Display::Text(_) => String::new(),
            Display::Currency(ticker) => {
                let text = ticker.text();
                let mut prefix = String::new();
                if let Some(sign) = text.sign {
                    prefix.push(sign);
                }
                if let Some(symbol) = &text.prefix {
                    prefix.push_str(symbol);
                    prefix.push(' ');
                }
                prefix
            }
        }
    }

    /// Static text drawn after the rolling columns
    pub fn suffix(&self) -> String {
        match &self.display {
            Display::Text(_) => String::new(),
            Display::Currency(ticker) => ticker
                .text()
                .suffix
                .as_ref()
                .map(|symbol| format!(" {}", symbol))
                .unwrap_or_default(),
        }
    }

    pub fn sample(&self) -> Vec<SampleWindow> {
        self.controller().sample()
    }

    pub fn is_animating(&self) -> bool {
        self.controller().is_animating()
    }

    /// Request the next value of the feed
    ///
    /// A dropped value is offered again on the next call.
    pub fn advance_at(&mut self, now: Instant) -> TargetOutcome {
        let len = self.feed.len();
        if len == 0 {
            return TargetOutcome::Unchanged;
        }
        let next = (self.cursor + 1) % len;

        let outcome = match (&mut self.display, &self.feed) {
            (Display::Text(controller), Feed::Texts(texts)) => {
                controller.set_target_at(&texts[next], now)
            }
            (Display::Currency(ticker), Feed::Amounts(amounts)) => {
                ticker.set_amount_at(amounts[next], now)
            }
            _ => TargetOutcome::Unchanged,
        };
        if outcome != TargetOutcome::Dropped {
            self.cursor = next;
        }
        outcome
    }

    pub fn update_at(&mut self, now: Instant) -> bool {
        match &mut self.display {
            Display::Text(controller) => controller.update_at(now),
            Display::Currency(ticker) => ticker.update_at(now),
        }
    }

    fn set_options(&mut self, options: TransitionOptions) {
        self.controller_mut().set_options(options);
    }
}

/// State of the demo screen
pub struct App {
    pub tickers: Vec<Ticker>,
    pub theme: Theme,
    pub options: TransitionOptions,
    pub paused: bool,
    pub should_quit: bool,
    /// Targets discarded because a ticker was still rolling
    pub dropped: usize,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig, theme: Theme) -> Result<Self> {
        let options = config.animation.transition_options();
        let tickers = vec![
            Ticker::text(
                "counter",
                ["1234", "5678", "9999", "10000", "0", "42"]
                    .map(String::from)
                    .to_vec(),
                config.alphabets.build()?,
                options.clone(),
            ),
            Ticker::text(
                "code",
                ["ABC123", "XYZ789", "DEF456", "GHI000"]
                    .map(String::from)
                    .to_vec(),
                AlphabetSet::new(&alphanumeric())?,
                options.clone(),
            ),
            Ticker::currency(
                "balance",
                vec![0.0, 100.0, 200.0, 1250.5, 200.0, -100.0, -200.0],
                config,
                options.clone(),
            ),
        ];

        Ok(Self {
            tickers,
            theme,
            options,
            paused: false,
            should_quit: false,
            dropped: 0,
            status_message: None,
        })
    }

    /// Advance every ticker to its next value
    pub fn advance_at(&mut self, now: Instant) {
        for ticker in &mut self.tickers {
            let outcome = ticker.advance_at(now);
            if outcome == TargetOutcome::Dropped {
                self.dropped += 1;
            }
            debug!(label = %ticker.label, ?outcome, "Advanced ticker");
        }
    }

    /// Periodic value change, ignored while paused
    pub fn on_demo_tick(&mut self, now: Instant) {
        if !self.paused {
            self.advance_at(now);
        }
    }

    /// Step running animations; true while any ticker still rolls
    pub fn update_at(&mut self, now: Instant) -> bool {
        let mut animating = false;
        for ticker in &mut self.tickers {
            animating |= ticker.update_at(now);
        }
        animating
    }

    pub fn is_animating(&self) -> bool {
        self.tickers.iter().any(Ticker::is_animating)
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.status_message = self.paused.then(|| "Paused".to_string());
    }

    /// Up → Down → Any → Up
    pub fn cycle_direction(&mut self) {
        self.options.direction = match self.options.direction {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Any,
            Direction::Any => Direction::Up,
        };
        self.apply_options();
    }

    pub fn toggle_strategy(&mut self) {
        self.options.strategy = match self.options.strategy {
            DiffStrategy::Full => DiffStrategy::Simple,
            DiffStrategy::Simple => DiffStrategy::Full,
        };
        self.apply_options();
    }

    fn apply_options(&mut self) {
        for ticker in &mut self.tickers {
            ticker.set_options(self.options.clone());
        }
        self.status_message = Some(format!(
            "direction: {} | diff: {}",
            direction_name(self.options.direction),
            strategy_name(self.options.strategy)
        ));
    }
}

pub fn direction_name(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "up",
        Direction::Down => "down",
        Direction::Any => "any",
    }
}

pub fn strategy_name(strategy: DiffStrategy) -> &'static str {
    match strategy {
        DiffStrategy::Full => "full",
        DiffStrategy::Simple => "simple",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn app() -> App {
        App::new(&AppConfig::default(), Theme::default()).unwrap()
    }

    #[test]
    fn test_initial_texts() {
        let app = app();
        assert_eq!(app.tickers[0].controller().current_text(), "1234");
        assert_eq!(app.tickers[1].controller().current_text(), "ABC123");
        assert_eq!(app.tickers[2].controller().current_text(), "0.00");
        assert_eq!(app.tickers[2].prefix(), "$ ");
        assert_eq!(app.tickers[2].suffix(), "");
        assert!(!app.is_animating());
    }

    #[test]
    fn test_advance_and_settle() {
        let mut app = app();
        let t0 = Instant::now();
        app.advance_at(t0);
        assert!(app.is_animating());

        assert!(!app.update_at(t0 + Duration::from_secs(1)));
        assert_eq!(app.tickers[0].controller().current_text(), "5678");
        assert_eq!(app.tickers[1].controller().current_text(), "XYZ789");
        assert_eq!(app.tickers[2].controller().current_text(), "100.00");
    }

    #[test]
    fn test_busy_targets_are_counted() {
        let mut app = app();
        let t0 = Instant::now();
        app.advance_at(t0);
        app.advance_at(t0 + Duration::from_millis(10));
        assert_eq!(app.dropped, 3);
    }

    #[test]
    fn test_pause_ignores_demo_ticks() {
        let mut app = app();
        app.toggle_pause();
        app.on_demo_tick(Instant::now());
        assert!(!app.is_animating());
        assert_eq!(app.status_message.as_deref(), Some("Paused"));

        app.toggle_pause();
        app.on_demo_tick(Instant::now());
        assert!(app.is_animating());
    }

    #[test]
    fn test_feed_wraps_around() {
        let mut ticker = Ticker::text(
            "t",
            vec!["1".into(), "2".into()],
            AlphabetSet::numbers(),
            TransitionOptions::default(),
        );
        let t0 = Instant::now();
        ticker.advance_at(t0);
        ticker.update_at(t0 + Duration::from_secs(1));
        ticker.advance_at(t0 + Duration::from_secs(2));
        ticker.update_at(t0 + Duration::from_secs(3));
        assert_eq!(ticker.controller().current_text(), "1");
    }

    #[test]
    fn test_dropped_value_is_offered_again() {
        let mut ticker = Ticker::text(
            "t",
            vec!["1".into(), "2".into(), "3".into()],
            AlphabetSet::numbers(),
            TransitionOptions::default(),
        );
        let t0 = Instant::now();
        assert_eq!(ticker.advance_at(t0), TargetOutcome::Started);
        assert_eq!(ticker.advance_at(t0), TargetOutcome::Dropped);
        ticker.update_at(t0 + Duration::from_secs(1));
        assert_eq!(ticker.controller().current_text(), "2");

        ticker.advance_at(t0 + Duration::from_secs(2));
        ticker.update_at(t0 + Duration::from_secs(3));
        assert_eq!(ticker.controller().current_text(), "3");
    }

    #[test]
    fn test_negative_amount_prefix() {
        let mut app = app();
        let ticker = &mut app.tickers[2];
        let t0 = Instant::now();
        for i in 0..5 {
            ticker.advance_at(t0 + Duration::from_secs(i * 2));
            ticker.update_at(t0 + Duration::from_secs(i * 2 + 1));
        }
        assert_eq!(ticker.prefix(), "\u{2212}$ ");
    }

    #[test]
    fn test_cycle_direction() {
        let mut app = app();
        assert_eq!(app.options.direction, Direction::Any);
        app.cycle_direction();
        assert_eq!(app.options.direction, Direction::Up);
        assert_eq!(app.tickers[0].controller().options().direction, Direction::Up);
        app.toggle_strategy();
        assert_eq!(app.tickers[1].controller().options().strategy, DiffStrategy::Simple);
    }
}
