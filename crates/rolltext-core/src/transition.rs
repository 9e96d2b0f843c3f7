//! Sequence transition controller
//!
//! Owns the column states of one displayed value. A new target snapshots the
//! diff and every column's path in one go, then all columns advance on a
//! single shared clock until the target is committed.
//!
//! Time is passed in explicitly (`*_at(now)`), so a render loop, a timer or
//! a test can drive it. The convenience methods without `_at` use
//! `Instant::now()`.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::alphabet::{AlphabetSet, Symbol, EMPTY};
use crate::diff::{ColumnAction, DiffStrategy};
use crate::easing::EasingType;
use crate::path::{AnimationPath, Direction};
use crate::sample::{is_complete_at, progress_at, sample, SampleWindow};

/// How displayed columns are paired with diff actions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnAlignment {
    /// Column `i` shows padded position `i` of both texts and action `i`
    #[default]
    Positional,
    /// One column per action, consuming source and target as the diff says
    Aligned,
}

/// What happens to a target that arrives while an animation is running
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusyPolicy {
    /// Ignore it; the running animation finishes against its snapshot
    #[default]
    Drop,
    /// Remember the most recent one and start it after the commit
    QueueLatest,
}

/// Result of handing a new target to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetOutcome {
    /// Target equals what is already shown or already in flight
    Unchanged,
    /// An animation towards the target started
    Started,
    /// Target was applied without animating
    Committed,
    /// An animation is running and the target was discarded
    Dropped,
    /// An animation is running and the target will follow it
    Queued,
}

#[derive(Debug, Clone)]
pub struct TransitionOptions {
    pub duration: Duration,
    pub direction: Direction,
    pub strategy: DiffStrategy,
    pub alignment: ColumnAlignment,
    pub easing: EasingType,
    /// When false every target is committed immediately
    pub animate_changes: bool,
    pub on_busy: BusyPolicy,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(400),
            direction: Direction::Any,
            strategy: DiffStrategy::Full,
            alignment: ColumnAlignment::Positional,
            easing: EasingType::Cubic,
            animate_changes: true,
            on_busy: BusyPolicy::Drop,
        }
    }
}

/// One animated character position
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnState {
    pub current: Symbol,
    pub target: Symbol,
    pub action: ColumnAction,
    pub path: AnimationPath,
    /// Eased progress in [0, 1]
    pub progress: f64,
}

impl ColumnState {
    /// A column resting on `symbol`
    fn settled(symbol: Symbol, alphabets: &AlphabetSet) -> Self {
        Self {
            current: symbol,
            target: symbol,
            action: ColumnAction::Same,
            path: alphabets.resolve_path(symbol, symbol, Direction::Any),
            progress: 1.0,
        }
    }

    /// Column moving from `current` to `target` as `action` describes
    fn moving(
        current: Symbol,
        target: Symbol,
        action: ColumnAction,
        alphabets: &AlphabetSet,
        direction: Direction,
    ) -> Self {
        let (from, to) = match action {
            ColumnAction::Insert => (EMPTY, target),
            ColumnAction::Delete => (current, EMPTY),
            ColumnAction::Same => (current, target),
        };

        let path = if current == target || from == to {
            alphabets.resolve_path(target, target, Direction::Any)
        } else {
            alphabets.resolve_path(from, to, direction)
        };
        trace!(
            from = ?current,
            to = ?target,
            ?action,
            start = path.start(),
            end = path.end(),
            "column path"
        );

        Self {
            current,
            target,
            action,
            path,
            progress: 0.0,
        }
    }

    pub fn is_animated(&self) -> bool {
        !self.path.is_stationary()
    }

    /// Window of glyphs to draw at the column's current progress
    pub fn sample(&self) -> SampleWindow {
        sample(&self.path, self.progress)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Animating { started: Instant },
}

/// Column states of one bound value
#[derive(Debug, Clone)]
pub struct SequenceState {
    columns: Vec<ColumnState>,
    current: String,
    /// Text being animated towards; equals `current` when idle
    target: String,
    phase: Phase,
    queued: Option<(String, Direction)>,
}

impl SequenceState {
    fn settled(text: &str, alphabets: &AlphabetSet) -> Self {
        Self {
            columns: text
                .chars()
                .map(|c| ColumnState::settled(c, alphabets))
                .collect(),
            current: text.to_string(),
            target: text.to_string(),
            phase: Phase::Idle,
            queued: None,
        }
    }

    pub fn columns(&self) -> &[ColumnState] {
        &self.columns
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Animating { .. })
    }

    /// Target waiting for the running animation, if any
    pub fn queued(&self) -> Option<&str> {
        self.queued.as_ref().map(|(text, _)| text.as_str())
    }
}

/// Drives transitions of one displayed value
///
/// ```
/// use std::time::{Duration, Instant};
/// use rolltext_core::{AlphabetSet, TransitionController, TransitionOptions};
///
/// let mut ticker = TransitionController::new("99", AlphabetSet::numbers(), TransitionOptions::default());
/// let t0 = Instant::now();
/// ticker.set_target_at("100", t0);
/// assert!(ticker.update_at(t0 + Duration::from_millis(100)));
/// assert!(!ticker.update_at(t0 + Duration::from_secs(1)));
/// assert_eq!(ticker.current_text(), "100");
/// ```
#[derive(Debug, Clone)]
pub struct TransitionController {
    alphabets: AlphabetSet,
    options: TransitionOptions,
    state: SequenceState,
}

impl TransitionController {
    /// Bind to `initial`, shown at rest
    pub fn new(initial: &str, alphabets: AlphabetSet, options: TransitionOptions) -> Self {
        let state = SequenceState::settled(initial, &alphabets);
        Self {
            alphabets,
            options,
            state,
        }
    }

    pub fn options(&self) -> &TransitionOptions {
        &self.options
    }

    /// Replace the options; takes effect with the next target
    pub fn set_options(&mut self, options: TransitionOptions) {
        self.options = options;
    }

    pub fn alphabets(&self) -> &AlphabetSet {
        &self.alphabets
    }

    pub fn state(&self) -> &SequenceState {
        &self.state
    }

    pub fn columns(&self) -> &[ColumnState] {
        self.state.columns()
    }

    pub fn current_text(&self) -> &str {
        self.state.current()
    }

    pub fn target_text(&self) -> &str {
        self.state.target()
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    /// Shared progress of all columns, 1.0 when idle
    pub fn progress(&self) -> f64 {
        if self.is_animating() {
            self.state.columns.first().map_or(0.0, |c| c.progress)
        } else {
            1.0
        }
    }

    pub fn set_target(&mut self, text: &str) -> TargetOutcome {
        self.set_target_at(text, Instant::now())
    }

    /// Hand over a new target using the configured direction
    pub fn set_target_at(&mut self, text: &str, now: Instant) -> TargetOutcome {
        self.set_target_directed_at(text, self.options.direction, now)
    }

    /// Hand over a new target with a direction for this change only
    pub fn set_target_directed_at(
        &mut self,
        text: &str,
        direction: Direction,
        now: Instant,
    ) -> TargetOutcome {
        if self.state.is_animating() {
            if text == self.state.target {
                // The newest request is the one in flight
                self.state.queued = None;
                return TargetOutcome::Unchanged;
            }
            return match self.options.on_busy {
                BusyPolicy::Drop => {
                    debug!(target_text = text, "dropping target during running animation");
                    TargetOutcome::Dropped
                }
                BusyPolicy::QueueLatest => {
                    debug!(target_text = text, "queueing target behind running animation");
                    self.state.queued = Some((text.to_string(), direction));
                    TargetOutcome::Queued
                }
            };
        }

        if text == self.state.current {
            return TargetOutcome::Unchanged;
        }

        if !self.options.animate_changes || self.options.duration.is_zero() {
            self.state = SequenceState::settled(text, &self.alphabets);
            return TargetOutcome::Committed;
        }

        self.start(text, direction, now);
        TargetOutcome::Started
    }

    /// Snapshot the diff and every column path, then start the clock
    fn start(&mut self, text: &str, direction: Direction, now: Instant) {
        let source: Vec<Symbol> = self.state.current.chars().collect();
        let target: Vec<Symbol> = text.chars().collect();
        let actions = self
            .options
            .strategy
            .compute(&source, &target, self.alphabets.supported());

        let columns = match self.options.alignment {
            ColumnAlignment::Positional => positional_pairs(&source, &target, &actions),
            ColumnAlignment::Aligned => aligned_pairs(&source, &target, &actions),
        }
        .into_iter()
        .map(|(current, target, action)| {
            ColumnState::moving(current, target, action, &self.alphabets, direction)
        })
        .collect();

        debug!(
            from = %self.state.current,
            to = text,
            ?direction,
            actions = actions.len(),
            "starting transition"
        );

        self.state.columns = columns;
        self.state.target = text.to_string();
        self.state.phase = Phase::Animating { started: now };
    }

    /// Advance using the current time; returns true while animating
    pub fn update(&mut self) -> bool {
        self.update_at(Instant::now())
    }

    /// Advance all columns to `now`; returns true while animating
    pub fn update_at(&mut self, now: Instant) -> bool {
        let Phase::Animating { started } = self.state.phase else {
            return false;
        };

        if is_complete_at(started, now, self.options.duration) {
            self.commit();
            if let Some((text, direction)) = self.state.queued.take() {
                self.set_target_directed_at(&text, direction, now);
            }
            return self.is_animating();
        }

        let eased = self
            .options
            .easing
            .apply(progress_at(started, now, self.options.duration));
        for column in &mut self.state.columns {
            column.progress = eased;
        }
        true
    }

    /// Jump to the end of the running animation, if any
    ///
    /// A queued target is applied as well, without animating.
    pub fn finish(&mut self) {
        if self.is_animating() {
            self.commit();
        }
        if let Some((text, _)) = self.state.queued.take() {
            self.state = SequenceState::settled(&text, &self.alphabets);
        }
    }

    fn commit(&mut self) {
        debug!(text = %self.state.target, "transition complete");
        let queued = self.state.queued.take();
        let target = std::mem::take(&mut self.state.target);
        self.state = SequenceState::settled(&target, &self.alphabets);
        self.state.queued = queued;
    }

    /// Sampling windows for every column at its current progress
    pub fn sample(&self) -> Vec<SampleWindow> {
        self.state.columns.iter().map(ColumnState::sample).collect()
    }

    /// The text a single-row display would show right now
    pub fn visible_text(&self) -> String {
        self.sample()
            .iter()
            .filter_map(SampleWindow::nearest)
            .collect()
    }
}

type ColumnPair = (Symbol, Symbol, ColumnAction);

/// Pad both texts to the same length and pair position `i` with action `i`
fn positional_pairs(
    source: &[Symbol],
    target: &[Symbol],
    actions: &[ColumnAction],
) -> Vec<ColumnPair> {
    let len = source.len().max(target.len());
    (0..len)
        .map(|i| {
            (
                source.get(i).copied().unwrap_or(EMPTY),
                target.get(i).copied().unwrap_or(EMPTY),
                actions.get(i).copied().unwrap_or(ColumnAction::Same),
            )
        })
        .collect()
}

/// Walk the actions, consuming source and target symbols as they dictate
fn aligned_pairs(source: &[Symbol], target: &[Symbol], actions: &[ColumnAction]) -> Vec<ColumnPair> {
    let mut s = 0;
    let mut t = 0;
    actions
        .iter()
        .map(|&action| {
            let current = match action {
                ColumnAction::Same | ColumnAction::Delete => {
                    s += 1;
                    source.get(s - 1).copied().unwrap_or(EMPTY)
                }
                ColumnAction::Insert => EMPTY,
            };
            let next = match action {
                ColumnAction::Same | ColumnAction::Insert => {
                    t += 1;
                    target.get(t - 1).copied().unwrap_or(EMPTY)
                }
                ColumnAction::Delete => EMPTY,
            };
            (current, next, action)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::AlphabetSet;

    const DURATION: Duration = Duration::from_millis(400);

    fn options() -> TransitionOptions {
        TransitionOptions {
            duration: DURATION,
            easing: EasingType::Linear,
            ..Default::default()
        }
    }

    fn controller(initial: &str) -> TransitionController {
        TransitionController::new(initial, AlphabetSet::numbers(), options())
    }

    #[test]
    fn test_bound_value_is_at_rest() {
        let ticker = controller("123");
        assert!(!ticker.is_animating());
        assert_eq!(ticker.columns().len(), 3);
        assert!(ticker.columns().iter().all(|c| !c.is_animated()));
        assert_eq!(ticker.visible_text(), "123");
        assert_eq!(ticker.progress(), 1.0);
    }

    #[test]
    fn test_full_transition_lifecycle() {
        let mut ticker = controller("123");
        let t0 = Instant::now();

        assert_eq!(ticker.set_target_at("128", t0), TargetOutcome::Started);
        assert!(ticker.is_animating());
        assert_eq!(ticker.target_text(), "128");
        assert_eq!(ticker.current_text(), "123");
        assert!(ticker.columns().iter().all(|c| c.progress == 0.0));

        assert!(ticker.update_at(t0 + DURATION / 2));
        assert!((ticker.progress() - 0.5).abs() < 1e-9);
        // Only the last column moves
        assert!(!ticker.columns()[0].is_animated());
        assert!(ticker.columns()[2].is_animated());

        assert!(!ticker.update_at(t0 + DURATION));
        assert_eq!(ticker.current_text(), "128");
        assert_eq!(ticker.visible_text(), "128");
    }

    #[test]
    fn test_columns_share_one_clock() {
        let mut ticker = controller("0000");
        let t0 = Instant::now();
        ticker.set_target_at("9876", t0);
        ticker.update_at(t0 + Duration::from_millis(123));
        let first = ticker.columns()[0].progress;
        assert!(ticker.columns().iter().all(|c| c.progress == first));
    }

    #[test]
    fn test_same_text_is_unchanged() {
        let mut ticker = controller("42");
        assert_eq!(ticker.set_target("42"), TargetOutcome::Unchanged);
        assert!(!ticker.is_animating());
    }

    #[test]
    fn test_target_during_animation_is_dropped() {
        let mut ticker = controller("1");
        let t0 = Instant::now();
        ticker.set_target_at("2", t0);

        assert_eq!(ticker.set_target_at("2", t0), TargetOutcome::Unchanged);
        assert_eq!(ticker.set_target_at("7", t0 + DURATION / 4), TargetOutcome::Dropped);
        assert_eq!(ticker.target_text(), "2");

        assert!(!ticker.update_at(t0 + DURATION));
        assert_eq!(ticker.current_text(), "2");
        assert!(!ticker.is_animating());
    }

    #[test]
    fn test_queue_latest_runs_after_commit() {
        let mut ticker = TransitionController::new(
            "1",
            AlphabetSet::numbers(),
            TransitionOptions {
                on_busy: BusyPolicy::QueueLatest,
                ..options()
            },
        );
        let t0 = Instant::now();
        ticker.set_target_at("2", t0);
        assert_eq!(ticker.set_target_at("5", t0), TargetOutcome::Queued);
        assert_eq!(ticker.set_target_at("6", t0), TargetOutcome::Queued);
        assert_eq!(ticker.state().queued(), Some("6"));

        // Commit "2", then immediately start towards the latest queued value
        let t1 = t0 + DURATION;
        assert!(ticker.update_at(t1));
        assert_eq!(ticker.current_text(), "2");
        assert_eq!(ticker.target_text(), "6");
        assert_eq!(ticker.state().queued(), None);

        assert!(!ticker.update_at(t1 + DURATION));
        assert_eq!(ticker.current_text(), "6");
    }

    fn queueing(initial: &str) -> TransitionController {
        TransitionController::new(
            initial,
            AlphabetSet::numbers(),
            TransitionOptions {
                on_busy: BusyPolicy::QueueLatest,
                ..options()
            },
        )
    }

    #[test]
    fn test_requesting_in_flight_target_clears_queue() {
        let mut ticker = queueing("1");
        let t0 = Instant::now();
        assert_eq!(ticker.set_target_at("2", t0), TargetOutcome::Started);
        assert_eq!(ticker.set_target_at("5", t0), TargetOutcome::Queued);
        assert_eq!(ticker.set_target_at("2", t0), TargetOutcome::Unchanged);
        assert_eq!(ticker.state().queued(), None);

        assert!(!ticker.update_at(t0 + DURATION));
        assert!(!ticker.update_at(t0 + DURATION * 2));
        assert_eq!(ticker.current_text(), "2");
    }

    #[test]
    fn test_finish_applies_queued_target() {
        let mut ticker = queueing("1");
        let t0 = Instant::now();
        ticker.set_target_at("2", t0);
        ticker.set_target_at("5", t0);

        ticker.finish();
        assert!(!ticker.is_animating());
        assert_eq!(ticker.current_text(), "5");
        assert_eq!(ticker.state().queued(), None);

        // Nothing left over to override the next change
        let t1 = t0 + DURATION;
        assert_eq!(ticker.set_target_at("3", t1), TargetOutcome::Started);
        assert!(!ticker.update_at(t1 + DURATION));
        assert_eq!(ticker.current_text(), "3");
    }

    #[test]
    fn test_disabled_animation_commits_immediately() {
        let mut ticker = TransitionController::new(
            "10",
            AlphabetSet::numbers(),
            TransitionOptions {
                animate_changes: false,
                ..options()
            },
        );
        assert_eq!(ticker.set_target("11"), TargetOutcome::Committed);
        assert_eq!(ticker.current_text(), "11");
        assert!(!ticker.is_animating());

        let mut instant = TransitionController::new(
            "10",
            AlphabetSet::numbers(),
            TransitionOptions {
                duration: Duration::ZERO,
                ..options()
            },
        );
        assert_eq!(instant.set_target("12"), TargetOutcome::Committed);
        assert_eq!(instant.visible_text(), "12");
    }

    #[test]
    fn test_positional_columns_follow_padded_positions() {
        let mut ticker = controller("9");
        ticker.set_target_at("10", Instant::now());

        let columns = ticker.columns();
        assert_eq!(columns.len(), 2);
        assert_eq!(
            (columns[0].current, columns[0].target, columns[0].action),
            ('9', '1', ColumnAction::Insert)
        );
        assert_eq!(columns[0].path.start(), 0);
        assert_eq!(
            (columns[1].current, columns[1].target, columns[1].action),
            (EMPTY, '0', ColumnAction::Same)
        );
    }

    #[test]
    fn test_aligned_columns_follow_actions() {
        let mut ticker = TransitionController::new(
            "9",
            AlphabetSet::numbers(),
            TransitionOptions {
                alignment: ColumnAlignment::Aligned,
                ..options()
            },
        );
        let t0 = Instant::now();
        ticker.set_target_at("10", t0);

        let columns = ticker.columns();
        assert_eq!(columns.len(), 2);
        assert_eq!((columns[0].current, columns[0].target), (EMPTY, '1'));
        assert_eq!((columns[1].current, columns[1].target), ('9', '0'));

        // Nothing visible in the inserted column at the start
        assert_eq!(ticker.visible_text(), "9");
        ticker.update_at(t0 + DURATION);
        assert_eq!(ticker.visible_text(), "10");
    }

    #[test]
    fn test_aligned_delete_drops_column_on_commit() {
        let mut ticker = TransitionController::new(
            "1,000",
            AlphabetSet::numbers(),
            TransitionOptions {
                alignment: ColumnAlignment::Aligned,
                ..options()
            },
        );
        let t0 = Instant::now();
        ticker.set_target_at("999", t0);
        assert!(ticker.columns().iter().any(|c| c.action == ColumnAction::Delete));

        ticker.update_at(t0 + DURATION);
        assert_eq!(ticker.columns().len(), 3);
        assert_eq!(ticker.visible_text(), "999");
    }

    #[test]
    fn test_direction_override_applies_to_one_change() {
        let mut ticker = controller("9");
        let t0 = Instant::now();
        ticker.set_target_directed_at("0", Direction::Down, t0);
        let path = &ticker.columns()[0].path;
        assert_eq!((path.start(), path.end()), (10, 11));

        ticker.update_at(t0 + DURATION);
        ticker.set_target_directed_at("9", Direction::Up, t0 + DURATION);
        let path = &ticker.columns()[0].path;
        assert_eq!((path.start(), path.end()), (11, 10));
    }

    #[test]
    fn test_finish_commits_immediately() {
        let mut ticker = controller("5");
        ticker.set_target("6");
        ticker.finish();
        assert!(!ticker.is_animating());
        assert_eq!(ticker.current_text(), "6");
        assert!(!ticker.update());
    }

    #[test]
    fn test_unsupported_symbols_change_without_rolling_digits() {
        let mut ticker = controller("1.5");
        let t0 = Instant::now();
        ticker.set_target_at("1,5", t0);
        let columns = ticker.columns();
        assert!(!columns[0].is_animated());
        assert_eq!(columns[1].path.alphabet().symbols(), &['.', ',']);
        ticker.update_at(t0 + DURATION);
        assert_eq!(ticker.visible_text(), "1,5");
    }

    #[test]
    fn test_empty_initial_text() {
        let mut ticker = controller("");
        assert!(ticker.columns().is_empty());
        let t0 = Instant::now();
        assert_eq!(ticker.set_target_at("5", t0), TargetOutcome::Started);
        assert_eq!(ticker.columns()[0].action, ColumnAction::Insert);
        assert_eq!(ticker.columns()[0].path.start(), 0);
        assert_eq!(ticker.columns()[0].path.end(), 6);
        ticker.update_at(t0 + DURATION);
        assert_eq!(ticker.current_text(), "5");
    }
}
