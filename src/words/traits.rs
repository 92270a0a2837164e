// Word encoder trait — swap-ready abstraction.
//
// The comparison functions only care about the [words, positions, alphabet]
// tensor, not how it was built. The default implementation is a plain
// one-hot encoder over a fixed alphabet.

use super::tensor::WordTensor;
use crate::error::Result;

/// Trait for turning an ordered word list into an indicator tensor.
pub trait WordEncoder {
    /// Encode `words` in order; row i of the result is `words[i]`.
    fn encode<S: AsRef<str>>(&self, words: &[S]) -> Result<WordTensor>;
}
