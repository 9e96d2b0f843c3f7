//! Index paths through circular alphabets
//!
//! Given a start and end symbol, find the first alphabet that knows both and
//! pick start/end slots in its doubled layout according to the scrolling
//! direction. Resolution never fails: symbols no alphabet knows get a
//! throwaway alphabet made of just themselves.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::alphabet::{Alphabet, AlphabetSet, Symbol, EMPTY};

/// Preferred scrolling direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Value decreasing: indices move towards the start of the layout
    Up,
    /// Value increasing: indices move towards the end of the layout
    Down,
    /// Whichever way is shorter
    #[default]
    Any,
}

impl Direction {
    /// Direction for a numeric value changing from `previous` to `next`
    pub fn for_change<T: PartialOrd>(previous: T, next: T) -> Self {
        if previous < next {
            Direction::Down
        } else if previous > next {
            Direction::Up
        } else {
            Direction::Any
        }
    }
}

/// Start and end slots of one column's animation within an alphabet layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationPath {
    alphabet: Arc<Alphabet>,
    start: usize,
    /// May equal the layout length, meaning "scroll off the end"
    end: usize,
}

impl AnimationPath {
    pub fn new(alphabet: Arc<Alphabet>, start: usize, end: usize) -> Self {
        Self { alphabet, start, end }
    }

    pub fn alphabet(&self) -> &Arc<Alphabet> {
        &self.alphabet
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of slots travelled
    #[inline]
    pub fn distance(&self) -> usize {
        self.start.abs_diff(self.end)
    }

    pub fn is_stationary(&self) -> bool {
        self.start == self.end
    }

    /// Symbol shown when the animation has finished; EMPTY past the layout
    pub fn end_symbol(&self) -> Symbol {
        self.alphabet.symbol_at(self.end as i64).unwrap_or(EMPTY)
    }
}

/// Resolve the path from `start` to `end`
///
/// Alphabets are tried in order; the first one containing both symbols wins.
/// Equal symbols always produce a stationary path.
pub fn resolve_path(
    start: Symbol,
    end: Symbol,
    alphabets: &[Arc<Alphabet>],
    direction: Direction,
) -> AnimationPath {
    for alphabet in alphabets {
        let (Some(start_index), Some(end_index)) =
            (alphabet.index_of(start), alphabet.index_of(end))
        else {
            continue;
        };
        if start == end {
            return AnimationPath::new(Arc::clone(alphabet), start_index, end_index);
        }
        let (from, to) = directed_indices(alphabet, start, end, start_index, end_index, direction);
        return AnimationPath::new(Arc::clone(alphabet), from, to);
    }

    // No configured alphabet knows both symbols
    let fallback = Arc::new(Alphabet::from_symbols([start, end]));
    let start_index = fallback.index_of(start).unwrap_or(0);
    let end_index = fallback.index_of(end).unwrap_or(0);
    if start == end {
        return AnimationPath::new(fallback, start_index, end_index);
    }
    let (from, to) = directed_indices(&fallback, start, end, start_index, end_index, direction);
    tracing::trace!(?start, ?end, from, to, "resolved path through fallback alphabet");
    AnimationPath::new(fallback, from, to)
}

impl AlphabetSet {
    /// Resolve a path through this set's alphabets
    pub fn resolve_path(&self, start: Symbol, end: Symbol, direction: Direction) -> AnimationPath {
        resolve_path(start, end, self.alphabets(), direction)
    }
}

/// Apply the direction rules to a pair of first-half indices
///
/// Down wraps when the end is behind the start and sends EMPTY targets past
/// the end of the layout. Up wraps when the start is behind the end. Any
/// compares the direct distance with the wrapped one and prefers wrapping on
/// a tie; it leaves paths touching EMPTY alone.
fn directed_indices(
    alphabet: &Alphabet,
    start_symbol: Symbol,
    end_symbol: Symbol,
    start: usize,
    end: usize,
    direction: Direction,
) -> (usize, usize) {
    let k = alphabet.len();
    let start_is_empty = start_symbol == EMPTY;
    let end_is_empty = end_symbol == EMPTY;

    match direction {
        Direction::Down => {
            if end_is_empty {
                (start, alphabet.layout_len())
            } else if end < start {
                (start, end + k)
            } else {
                (start, end)
            }
        }
        Direction::Up => {
            if start < end {
                (start + k, end)
            } else {
                (start, end)
            }
        }
        Direction::Any => {
            if start_is_empty || end_is_empty || start == end {
                return (start, end);
            }
            let direct = start.abs_diff(end);
            let wrapped = k - direct;
            if wrapped > direct {
                (start, end)
            } else if end < start {
                (start, end + k)
            } else {
                (start + k, end)
            }
        }
    }
}
