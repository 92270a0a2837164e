// Structural match masks between two word lists.
//
// A cipher word can only decode to a plaintext word with the same length and
// the same repetition pattern. Both properties are computed here as boolean
// [words1, words2] masks.
//
// The repetition pattern is the unique-token sequence: at each position, how
// many distinct symbols the word has used so far. "one" gives [1, 2, 3] and
// "too" gives [1, 2, 2]. A letter substitution never changes it, but equal
// sequences don't prove a substitution exists: "abab" and "abba" both give
// [1, 2, 2, 2]. `candidate_mask` settles that with the first-occurrence
// pattern, which maps each letter to the position where it first appears.

use std::collections::HashMap;

use ndarray::{Array2, Axis, Zip};
use tracing::debug;

use super::tensor::WordTensor;
use crate::error::{Error, Result};

/// Mask of word pairs with equal character counts.
pub fn shared_word_length_mask<S1, S2>(words1: &[S1], words2: &[S2]) -> Array2<bool>
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    let lengths1: Vec<usize> = words1.iter().map(|w| w.as_ref().chars().count()).collect();
    let lengths2: Vec<usize> = words2.iter().map(|w| w.as_ref().chars().count()).collect();

    Array2::from_shape_fn((lengths1.len(), lengths2.len()), |(i, j)| {
        lengths1[i] == lengths2[j]
    })
}

/// Running count of distinct symbols per position, shape [words, positions].
///
/// Takes the prefix maximum along the position axis, then sums over the
/// alphabet axis. Rows are non-decreasing; after a word ends its row holds
/// the word's distinct-symbol count.
pub fn unique_token_sequence(x: &WordTensor) -> Array2<u32> {
    let mut seen = x.as_array().clone();
    seen.accumulate_axis_inplace(Axis(1), |&prev, curr| *curr = (*curr).max(prev));
    seen.mapv(u32::from).sum_axis(Axis(2))
}

/// Mask of word pairs whose unique-token sequences are identical.
///
/// The alphabets may differ in width and order; only the position axes must
/// agree.
pub fn shared_token_sequence_mask(x1: &WordTensor, x2: &WordTensor) -> Result<Array2<bool>> {
    if x1.positions() != x2.positions() {
        tracing::warn!(
            left = x1.positions(),
            right = x2.positions(),
            "Token sequence lengths differ"
        );
        return Err(Error::ShapeMismatch {
            expected: vec![x1.positions()],
            got: vec![x2.positions()],
        });
    }

    let s1 = unique_token_sequence(x1);
    let s2 = unique_token_sequence(x2);

    let mask = Array2::from_shape_fn((s1.nrows(), s2.nrows()), |(i, j)| s1.row(i) == s2.row(j));

    debug!(
        rows = mask.nrows(),
        cols = mask.ncols(),
        matches = mask.iter().filter(|&&m| m).count(),
        "Computed token sequence mask"
    );
    Ok(mask)
}

/// Position of each character's first appearance in `word`.
///
/// "abab" gives [0, 1, 0, 1] and "abba" gives [0, 1, 1, 0]. Two words have
/// equal patterns exactly when a one-to-one letter mapping turns one into
/// the other.
pub fn first_occurrence_pattern(word: &str) -> Vec<usize> {
    let mut first_seen: HashMap<char, usize> = HashMap::new();
    word.chars()
        .enumerate()
        .map(|(p, c)| *first_seen.entry(c).or_insert(p))
        .collect()
}

/// Words from list 2 that each word of list 1 could decode to under a
/// one-to-one letter substitution.
///
/// The token sequence mask is applied first to rule out non-matches, then
/// surviving pairs are confirmed on their full first-occurrence patterns.
/// `x1`/`x2` must be the encodings of `words1`/`words2`.
pub fn candidate_mask<S1, S2>(
    words1: &[S1],
    x1: &WordTensor,
    words2: &[S2],
    x2: &WordTensor,
) -> Result<Array2<bool>>
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    for (words, x) in [(words1.len(), x1), (words2.len(), x2)] {
        if words != x.num_words() {
            return Err(Error::ShapeMismatch {
                expected: vec![words],
                got: vec![x.num_words()],
            });
        }
    }

    let mut mask = shared_token_sequence_mask(x1, x2)?;
    let patterns1: Vec<Vec<usize>> = words1
        .iter()
        .map(|w| first_occurrence_pattern(w.as_ref()))
        .collect();
    let patterns2: Vec<Vec<usize>> = words2
        .iter()
        .map(|w| first_occurrence_pattern(w.as_ref()))
        .collect();

    // Equal patterns imply equal lengths
    Zip::indexed(&mut mask).for_each(|(i, j), m| *m = *m && patterns1[i] == patterns2[j]);
    Ok(mask)
}
