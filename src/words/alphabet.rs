// Alphabet — the ordered symbol set that defines the one-hot axis.
//
// A symbol's position in the alphabet is the slot it activates in an encoded
// word. Lookups go through `index_of`, which returns `None` on a miss so the
// encoder can surface a typed error instead of panicking.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The lowercase ASCII letters, in order.
pub const ASCII_LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Ordered character set with a reverse index for one-hot encoding.
///
/// If a symbol is listed more than once, its first position wins the lookup,
/// but every listed symbol still counts toward `len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Alphabet {
    symbols: Vec<char>,
    index: HashMap<char, usize>,
}

impl Alphabet {
    /// Build an alphabet from the characters of `symbols`, in order.
    pub fn new(symbols: &str) -> Self {
        let symbols: Vec<char> = symbols.chars().collect();
        let mut index = HashMap::with_capacity(symbols.len());
        for (i, &c) in symbols.iter().enumerate() {
            index.entry(c).or_insert(i);
        }
        Self { symbols, index }
    }

    /// The 26 lowercase ASCII letters.
    pub fn ascii_lowercase() -> Self {
        Self::new(ASCII_LOWERCASE)
    }

    /// Width of the alphabet axis in an encoded tensor.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Slot index for `c`, or `None` if the alphabet doesn't contain it.
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.index.get(&c).copied()
    }

    /// Symbol stored at slot `idx`.
    pub fn symbol_at(&self, idx: usize) -> Option<char> {
        self.symbols.get(idx).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.index.contains_key(&c)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::ascii_lowercase()
    }
}

impl From<&str> for Alphabet {
    fn from(symbols: &str) -> Self {
        Self::new(symbols)
    }
}

impl From<String> for Alphabet {
    fn from(symbols: String) -> Self {
        Self::new(&symbols)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols.into_iter().collect()
    }
}
