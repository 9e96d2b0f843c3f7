//! Circular symbol tables
//!
//! An [`Alphabet`] is laid out as a flat array of `2k + 1` slots: slot 0 holds
//! [`EMPTY`], slots `1..=k` hold the symbols in order and slots `k+1..=2k`
//! repeat them. Wrapping past the last symbol is then plain index arithmetic
//! into the second half.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::error::{Error, Result};

/// A single display character
pub type Symbol = char;

/// Sentinel for "no character", used as the endpoint of inserts and deletes
pub const EMPTY: Symbol = '\0';

/// Digits in ascending order
pub const NUMBERS: &str = "0123456789";

/// Lowercase then uppercase latin letters
pub const ALPHABETICAL: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Character lists for mixed digit/letter tickers
pub fn alphanumeric() -> Vec<String> {
    vec![NUMBERS.to_string(), ALPHABETICAL.to_string()]
}

/// Ordered, immutable circular symbol table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    /// Slot 0 is EMPTY, followed by the symbols twice
    layout: Vec<Symbol>,
    /// Position of each symbol in the first half of the layout
    positions: HashMap<Symbol, usize>,
}

impl Alphabet {
    /// Build an alphabet from a character list
    ///
    /// Duplicates keep their first position and [`EMPTY`] is ignored. A list
    /// with no usable symbols is rejected.
    pub fn new(chars: &str) -> Result<Self> {
        let alphabet = Self::from_symbols(chars.chars());
        if alphabet.is_empty() {
            return Err(Error::InvalidAlphabet(format!(
                "character list {:?} contains no symbols",
                chars
            )));
        }
        Ok(alphabet)
    }

    /// Build an alphabet from arbitrary symbols; the result may be empty
    pub(crate) fn from_symbols(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        let mut seen = HashSet::new();
        let ordered: Vec<Symbol> = symbols
            .into_iter()
            .filter(|&c| c != EMPTY && seen.insert(c))
            .collect();

        let mut layout = Vec::with_capacity(ordered.len() * 2 + 1);
        layout.push(EMPTY);
        layout.extend_from_slice(&ordered);
        layout.extend_from_slice(&ordered);

        let positions = ordered
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i + 1))
            .collect();

        Self { layout, positions }
    }

    /// Number of distinct symbols (k)
    #[inline]
    pub fn len(&self) -> usize {
        (self.layout.len() - 1) / 2
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The full circular layout, `2k + 1` slots
    pub fn layout(&self) -> &[Symbol] {
        &self.layout
    }

    /// Length of the circular layout
    #[inline]
    pub fn layout_len(&self) -> usize {
        self.layout.len()
    }

    /// The symbols in their configured order
    pub fn symbols(&self) -> &[Symbol] {
        &self.layout[1..=self.len()]
    }

    /// Whether `symbol` is one of this alphabet's symbols (EMPTY is not)
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.positions.contains_key(&symbol)
    }

    /// Index of `symbol` in the first half of the layout
    ///
    /// EMPTY always resolves to 0; unknown symbols resolve to `None`.
    pub fn index_of(&self, symbol: Symbol) -> Option<usize> {
        if symbol == EMPTY {
            return Some(0);
        }
        self.positions.get(&symbol).copied()
    }

    /// Symbol stored at a layout slot, `None` outside the layout
    pub fn symbol_at(&self, index: i64) -> Option<Symbol> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.layout.get(i))
            .copied()
    }
}

/// The configured alphabets plus the union of their symbols
///
/// Shared read-only between every column and every display bound to the
/// same configuration.
#[derive(Debug, Clone)]
pub struct AlphabetSet {
    alphabets: Vec<Arc<Alphabet>>,
    supported: Arc<HashSet<Symbol>>,
}

impl AlphabetSet {
    /// Build from ordered character lists, earlier lists take precedence
    pub fn new<S: AsRef<str>>(lists: &[S]) -> Result<Self> {
        if lists.is_empty() {
            return Err(Error::InvalidAlphabet(
                "at least one character list is required".to_string(),
            ));
        }
        let alphabets = lists
            .iter()
            .map(|list| Alphabet::new(list.as_ref()).map(Arc::new))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_alphabets(alphabets))
    }

    pub fn from_alphabets(alphabets: Vec<Arc<Alphabet>>) -> Self {
        let supported = alphabets
            .iter()
            .flat_map(|a| a.symbols().iter().copied())
            .collect();
        Self {
            alphabets,
            supported: Arc::new(supported),
        }
    }

    /// Digits only
    pub fn numbers() -> Self {
        Self::from_alphabets(vec![Arc::new(Alphabet::from_symbols(NUMBERS.chars()))])
    }

    pub fn alphabets(&self) -> &[Arc<Alphabet>] {
        &self.alphabets
    }

    /// Every symbol that appears in at least one alphabet
    pub fn supported(&self) -> &HashSet<Symbol> {
        &self.supported
    }

    pub fn is_supported(&self, symbol: Symbol) -> bool {
        self.supported.contains(&symbol)
    }
}

impl Default for AlphabetSet {
    fn default() -> Self {
        Self::numbers()
    }
}
