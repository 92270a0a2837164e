// WordTensor — a list of words as a [words, positions, alphabet] indicator tensor.
//
// Entry (i, p, a) is 1 when word i has alphabet symbol a at position p.
// Positions past the end of a word are all-zero rows. The comparison
// functions in `overlap` and `masks` consume this type, so shape checks live
// here rather than in each caller.

use ndarray::{s, Array3, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One-hot encoded word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordTensor {
    data: Array3<u8>,
}

impl WordTensor {
    /// Wrap a raw indicator array of shape [words, positions, alphabet].
    pub fn from_array(data: Array3<u8>) -> Self {
        Self { data }
    }

    /// Shape as `(words, positions, alphabet_size)`.
    pub fn dim(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    pub fn num_words(&self) -> usize {
        self.data.dim().0
    }

    /// Padded word length: the size of the position axis.
    pub fn positions(&self) -> usize {
        self.data.dim().1
    }

    pub fn alphabet_size(&self) -> usize {
        self.data.dim().2
    }

    pub fn as_array(&self) -> &Array3<u8> {
        &self.data
    }

    /// The [positions, alphabet] slice for word `i`.
    pub fn word(&self, i: usize) -> Option<ArrayView2<'_, u8>> {
        (i < self.num_words()).then(|| self.data.slice(s![i, .., ..]))
    }

    /// Copy of this tensor resized to `len` positions.
    ///
    /// Extra positions are zero-padded; surplus positions are dropped, the
    /// same way encoding truncates words longer than `max_len`.
    pub fn with_positions(&self, len: usize) -> Self {
        let (n, l, a) = self.data.dim();
        let mut data = Array3::zeros((n, len, a));
        let keep = l.min(len);
        data.slice_mut(s![.., ..keep, ..])
            .assign(&self.data.slice(s![.., ..keep, ..]));
        Self { data }
    }

    /// Fail unless `other` has the same position and alphabet axes.
    pub(crate) fn ensure_same_word_shape(&self, other: &WordTensor) -> Result<()> {
        let expected = vec![self.positions(), self.alphabet_size()];
        let got = vec![other.positions(), other.alphabet_size()];
        if expected != got {
            tracing::warn!(?expected, ?got, "Word tensor shapes differ");
            return Err(Error::ShapeMismatch { expected, got });
        }
        Ok(())
    }
}
