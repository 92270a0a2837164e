// One-hot word encoding.
//
// Each word becomes a [positions, alphabet] matrix with a single 1 per
// occupied position. All words in a list share the same position count: the
// longest word's length, optionally capped by `max_len`. Shorter words are
// zero-padded, longer ones are truncated without error.

use ndarray::Array3;
use tracing::debug;

use super::alphabet::Alphabet;
use super::tensor::WordTensor;
use super::traits::WordEncoder;
use crate::error::{Error, Result};

/// One-hot encoder over a fixed alphabet. This is the default `WordEncoder`.
#[derive(Debug, Clone, Default)]
pub struct OneHotEncoder {
    /// Symbols that may appear in encoded words
    pub alphabet: Alphabet,
    /// Optional cap on the position axis (None = longest word)
    pub max_len: Option<usize>,
}

impl OneHotEncoder {
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            max_len: None,
        }
    }

    /// Cap encoded words at `max_len` positions.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }
}

impl WordEncoder for OneHotEncoder {
    fn encode<S: AsRef<str>>(&self, words: &[S]) -> Result<WordTensor> {
        vectorize_words(words, &self.alphabet, self.max_len)
    }
}

/// Encode `words` as a [words, positions, alphabet] one-hot tensor.
///
/// The position axis is the longest word's length, or `max_len` if that is
/// smaller. Characters past the cut are dropped and never looked up.
pub fn vectorize_words<S: AsRef<str>>(
    words: &[S],
    alphabet: &Alphabet,
    max_len: Option<usize>,
) -> Result<WordTensor> {
    if max_len == Some(0) {
        return Err(Error::InvalidMaxLen);
    }

    let natural_len = words
        .iter()
        .map(|w| w.as_ref().chars().count())
        .max()
        .ok_or(Error::EmptyWordList)?;
    let len = max_len.map_or(natural_len, |cap| cap.min(natural_len));

    let mut data = Array3::<u8>::zeros((words.len(), len, alphabet.len()));
    for (i, word) in words.iter().enumerate() {
        let word = word.as_ref();
        for (p, c) in word.chars().take(len).enumerate() {
            let a = alphabet.index_of(c).ok_or_else(|| Error::UnknownSymbol {
                character: c,
                word: word.to_string(),
            })?;
            data[[i, p, a]] = 1;
        }
    }

    debug!(
        words = words.len(),
        positions = len,
        alphabet = alphabet.len(),
        "Encoded word tensor"
    );

    Ok(WordTensor::from_array(data))
}
