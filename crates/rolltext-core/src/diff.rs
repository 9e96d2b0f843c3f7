//! Per-column edit actions between two character sequences
//!
//! Runs of supported symbols are matched with a Levenshtein table, with one
//! twist: when both runs have the same length every position is treated as
//! a substitution, so values of equal width roll in place instead of
//! shuffling columns in and out.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::alphabet::Symbol;

/// What happens to one column during a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnAction {
    /// The column stays and rolls from its current to its target symbol
    Same,
    /// A new column rolls in from EMPTY
    Insert,
    /// An existing column rolls out to EMPTY
    Delete,
}

/// Which diff variant to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffStrategy {
    /// Edit-distance table over each supported run
    #[default]
    Full,
    /// Position-by-position comparison, no table
    Simple,
}

impl DiffStrategy {
    pub fn compute(
        self,
        source: &[Symbol],
        target: &[Symbol],
        supported: &HashSet<Symbol>,
    ) -> Vec<ColumnAction> {
        match self {
            DiffStrategy::Full => compute_actions(source, target, supported),
            DiffStrategy::Simple => compute_actions_simple(source, target, supported),
        }
    }
}

/// Compute column actions using the full edit-distance algorithm
///
/// Always satisfies `inserts - deletes == target.len() - source.len()`.
pub fn compute_actions(
    source: &[Symbol],
    target: &[Symbol],
    supported: &HashSet<Symbol>,
) -> Vec<ColumnAction> {
    let mut actions = Vec::with_capacity(source.len().max(target.len()));
    let mut s = 0;
    let mut t = 0;

    loop {
        let source_done = s == source.len();
        let target_done = t == target.len();

        if source_done && target_done {
            break;
        }
        if source_done {
            fill(&mut actions, target.len() - t, ColumnAction::Insert);
            break;
        }
        if target_done {
            fill(&mut actions, source.len() - s, ColumnAction::Delete);
            break;
        }

        let source_supported = supported.contains(&source[s]);
        let target_supported = supported.contains(&target[t]);

        match (source_supported, target_supported) {
            (true, true) => {
                let s_end = next_unsupported(source, s + 1, supported);
                let t_end = next_unsupported(target, t + 1, supported);
                append_segment_actions(&mut actions, &source[s..s_end], &target[t..t_end]);
                s = s_end;
                t = t_end;
            }
            (false, true) => {
                actions.push(ColumnAction::Insert);
                t += 1;
            }
            (true, false) => {
                actions.push(ColumnAction::Delete);
                s += 1;
            }
            (false, false) => {
                // Neither side can roll; replace in place
                actions.push(ColumnAction::Same);
                s += 1;
                t += 1;
            }
        }
    }

    actions
}

/// Compute column actions without an edit-distance table
///
/// Same branch structure as [`compute_actions`], but every position is
/// decided on its own. Cheaper, and still balances inserts against deletes.
pub fn compute_actions_simple(
    source: &[Symbol],
    target: &[Symbol],
    supported: &HashSet<Symbol>,
) -> Vec<ColumnAction> {
    let mut actions = Vec::with_capacity(source.len().max(target.len()));
    let mut s = 0;
    let mut t = 0;

    while s < source.len() || t < target.len() {
        if s >= source.len() {
            fill(&mut actions, target.len() - t, ColumnAction::Insert);
            break;
        }
        if t >= target.len() {
            fill(&mut actions, source.len() - s, ColumnAction::Delete);
            break;
        }

        let (sc, tc) = (source[s], target[t]);
        let source_supported = supported.contains(&sc);
        let target_supported = supported.contains(&tc);

        if sc == tc || source_supported == target_supported {
            actions.push(ColumnAction::Same);
            s += 1;
            t += 1;
        } else if target_supported {
            actions.push(ColumnAction::Insert);
            t += 1;
        } else {
            actions.push(ColumnAction::Delete);
            s += 1;
        }
    }

    actions
}

fn next_unsupported(chars: &[Symbol], from: usize, supported: &HashSet<Symbol>) -> usize {
    chars[from..]
        .iter()
        .position(|c| !supported.contains(c))
        .map_or(chars.len(), |offset| from + offset)
}

#[inline]
fn fill(actions: &mut Vec<ColumnAction>, count: usize, action: ColumnAction) {
    actions.extend(std::iter::repeat(action).take(count));
}

/// Resolve one run of supported symbols
fn append_segment_actions(actions: &mut Vec<ColumnAction>, source: &[Symbol], target: &[Symbol]) {
    if source.len() == target.len() {
        fill(actions, source.len(), ColumnAction::Same);
        return;
    }

    let rows = source.len() + 1;
    let cols = target.len() + 1;
    let mut matrix = vec![vec![0usize; cols]; rows];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for row in 1..rows {
        for col in 1..cols {
            let cost = usize::from(source[row - 1] != target[col - 1]);
            matrix[row][col] = (matrix[row - 1][col] + 1)
                .min(matrix[row][col - 1] + 1)
                .min(matrix[row - 1][col - 1] + cost);
        }
    }

    // Walk back from the bottom-right corner
    let mut reversed = Vec::with_capacity(rows.max(cols));
    let mut row = rows - 1;
    let mut col = cols - 1;

    while row > 0 || col > 0 {
        if row == 0 {
            reversed.push(ColumnAction::Insert);
            col -= 1;
        } else if col == 0 {
            reversed.push(ColumnAction::Delete);
            row -= 1;
        } else {
            let insert = matrix[row][col - 1];
            let delete = matrix[row - 1][col];
            let replace = matrix[row - 1][col - 1];

            if insert < delete && insert < replace {
                reversed.push(ColumnAction::Insert);
                col -= 1;
            } else if delete < replace {
                reversed.push(ColumnAction::Delete);
                row -= 1;
            } else {
                reversed.push(ColumnAction::Same);
                row -= 1;
                col -= 1;
            }
        }
    }

    actions.extend(reversed.into_iter().rev());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{ALPHABETICAL, NUMBERS};
    use super::ColumnAction::{Delete, Insert, Same};

    fn chars(s: &str) -> Vec<Symbol> {
        s.chars().collect()
    }

    fn digits() -> HashSet<Symbol> {
        NUMBERS.chars().collect()
    }

    fn balance(actions: &[ColumnAction]) -> i64 {
        actions.iter().fold(0, |acc, a| match a {
            Insert => acc + 1,
            Delete => acc - 1,
            Same => acc,
        })
    }

    #[test]
    fn test_identical_sequences_are_all_same() {
        let supported = digits();
        for text in ["", "0", "12,345.67", "abc", "9999"] {
            let s = chars(text);
            for strategy in [DiffStrategy::Full, DiffStrategy::Simple] {
                let actions = strategy.compute(&s, &s, &supported);
                assert_eq!(actions, vec![Same; s.len()], "{:?} {:?}", strategy, text);
            }
        }
    }

    #[test]
    fn test_empty_inputs() {
        let supported = digits();
        assert!(compute_actions(&[], &[], &supported).is_empty());
        assert_eq!(compute_actions(&[], &chars("5"), &supported), vec![Insert]);
        assert_eq!(compute_actions(&chars("12"), &[], &supported), vec![Delete, Delete]);
    }

    #[test]
    fn test_equal_length_supported_run_rolls_in_place() {
        let actions = compute_actions(&chars("099"), &chars("100"), &digits());
        assert_eq!(actions, vec![Same, Same, Same]);
    }

    #[test]
    fn test_nine_to_ten_prefers_insert_on_ties() {
        let actions = compute_actions(&chars("9"), &chars("10"), &digits());
        assert_eq!(actions, vec![Insert, Same]);
        assert_eq!(balance(&actions), 1);
    }

    #[test]
    fn test_growing_number_inserts_leading_column() {
        // "999" -> "1000": the trailing 999 lines up with 000 after one insert
        let actions = compute_actions(&chars("999"), &chars("1000"), &digits());
        assert_eq!(actions, vec![Insert, Same, Same, Same]);
    }

    #[test]
    fn test_dp_keeps_matching_symbols() {
        let actions = compute_actions(&chars("1234"), &chars("124"), &digits());
        assert_eq!(actions, vec![Same, Same, Delete, Same]);
    }

    #[test]
    fn test_unsupported_separators_split_runs() {
        // Grouping separator appears in the target only
        let actions = compute_actions(&chars("999"), &chars("1,000"), &digits());
        assert_eq!(balance(&actions), 2);
        assert!(actions.contains(&Insert));

        // Separators on both sides are replaced in place
        let actions = compute_actions(&chars("1,5"), &chars("2.5"), &digits());
        assert_eq!(actions, vec![Same, Same, Same]);
    }

    #[test]
    fn test_only_target_supported_inserts() {
        let actions = compute_actions(&chars("$"), &chars("5$"), &digits());
        assert_eq!(actions[0], Insert);
        assert_eq!(balance(&actions), 1);
    }

    #[test]
    fn test_only_source_supported_deletes() {
        let actions = compute_actions(&chars("5$"), &chars("$"), &digits());
        assert_eq!(actions, vec![Delete, Same]);
    }

    #[test]
    fn test_simple_variant_never_runs_table() {
        let supported = digits();
        let actions = compute_actions_simple(&chars("9"), &chars("10"), &supported);
        assert_eq!(actions, vec![Same, Insert]);

        let actions = compute_actions_simple(&chars("1a"), &chars("a"), &supported);
        assert_eq!(actions, vec![Delete, Same]);

        let actions = compute_actions_simple(&chars("a1"), &chars("1"), &supported);
        assert_eq!(actions, vec![Insert, Delete, Delete]);
    }

    #[test]
    fn test_balance_holds_for_mixed_inputs() {
        let supported: HashSet<Symbol> = NUMBERS.chars().chain(ALPHABETICAL.chars()).collect();
        let cases = [
            ("", "abc"),
            ("abc", ""),
            ("1,234.56", "987.1"),
            ("$12", "€1,200"),
            ("hello world", "help"),
            ("a-b-c", "abc"),
            ("12:30", "1:05 PM"),
        ];
        for (s, t) in cases {
            let source = chars(s);
            let target = chars(t);
            for strategy in [DiffStrategy::Full, DiffStrategy::Simple] {
                let actions = strategy.compute(&source, &target, &supported);
                assert_eq!(
                    balance(&actions),
                    target.len() as i64 - source.len() as i64,
                    "{:?}: {:?} -> {:?}",
                    strategy,
                    s,
                    t
                );
            }
        }
    }
}
