//! Sampling a column's path at a point in its animation
//!
//! The display layer asks for a three-slot window around the current
//! position plus a fractional offset, and scrolls those glyphs by
//! `offset × glyph height`. Also holds the time helpers that turn
//! (start, now, duration) into progress.

use std::time::{Duration, Instant};

use crate::alphabet::{Symbol, EMPTY};
use crate::easing::EasingType;
use crate::path::AnimationPath;

/// The glyphs visible around one column's current position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleWindow {
    /// Layout slot of `current`
    pub index: i64,
    /// Symbol at the current slot; `None` draws nothing
    pub current: Option<Symbol>,
    /// Symbol at the following slot, scrolling in from above
    pub next: Option<Symbol>,
    /// Symbol at the preceding slot, scrolling in from below
    pub previous: Option<Symbol>,
    /// Fraction of a glyph travelled past `current`, signed by direction
    pub offset: f64,
}

impl SampleWindow {
    /// A window that shows a single resting symbol
    pub fn resting(symbol: Symbol) -> Self {
        Self {
            index: 0,
            current: visible(symbol),
            next: None,
            previous: None,
            offset: 0.0,
        }
    }

    /// Whichever symbol covers most of the row
    pub fn nearest(&self) -> Option<Symbol> {
        if self.offset >= 0.5 {
            self.next
        } else if self.offset <= -0.5 {
            self.previous
        } else {
            self.current
        }
    }
}

/// Sample `path` at `progress` in [0, 1]
pub fn sample(path: &AnimationPath, progress: f64) -> SampleWindow {
    let progress = progress.clamp(0.0, 1.0);
    let total_steps = path.distance() as f64;
    let position = progress * total_steps;
    let whole = position.floor();
    let sign: i64 = if path.end() >= path.start() { 1 } else { -1 };

    let index = path.start() as i64 + whole as i64 * sign;
    let offset = (position - whole) * sign as f64;
    let alphabet = path.alphabet();
    let lookup = |i: i64| alphabet.symbol_at(i).and_then(visible);

    SampleWindow {
        index,
        current: lookup(index),
        next: lookup(index + 1),
        previous: lookup(index - 1),
        offset,
    }
}

/// Sample `path` after `elapsed` of an animation lasting `duration`
pub fn sample_elapsed(
    path: &AnimationPath,
    elapsed: Duration,
    duration: Duration,
    easing: EasingType,
) -> SampleWindow {
    sample(path, easing.apply(ratio(elapsed, duration)))
}

#[inline]
fn visible(symbol: Symbol) -> Option<Symbol> {
    (symbol != EMPTY).then_some(symbol)
}

/// Calculate animation progress (0.0 to 1.0) at `now`
///
/// # Arguments
/// * `start` - Animation start time
/// * `now` - The instant being rendered
/// * `duration` - Total animation duration
///
/// # Returns
/// Progress value clamped to [0.0, 1.0]
#[inline]
pub fn progress_at(start: Instant, now: Instant, duration: Duration) -> f64 {
    ratio(now.saturating_duration_since(start), duration)
}

/// Check if an animation started at `start` has finished by `now`
#[inline]
pub fn is_complete_at(start: Instant, now: Instant, duration: Duration) -> bool {
    now.saturating_duration_since(start) >= duration
}

#[inline]
fn ratio(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}
