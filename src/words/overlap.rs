// Positional character overlap between two encoded word lists.
//
// Entry (i, j) counts the (position, symbol) slots active in both word i of
// the first list and word j of the second:
//
//   overlap[i, j] = sum over p, a of X[i, p, a] * V[j, p, a]
//
// With a shared alphabet that is the number of equal characters at equal
// positions. With two alphabets of the same width but different orderings it
// only counts index coincidences.

use ndarray::Array2;
use tracing::debug;

use super::tensor::WordTensor;
use crate::error::{Error, Result};

/// Count matching (position, symbol) activations for every word pair.
///
/// Both tensors must have the same position and alphabet axes; pad the
/// shorter one with `WordTensor::with_positions` first.
pub fn word_vector_overlap(x: &WordTensor, v: &WordTensor) -> Result<Array2<u32>> {
    x.ensure_same_word_shape(v)?;

    let (n1, len, width) = x.dim();
    let n2 = v.num_words();

    // Flatten [positions, alphabet] so the contraction is one matrix product
    let xs = flatten_words(x, n1, len * width)?;
    let vs = flatten_words(v, n2, len * width)?;
    let overlap = xs.dot(&vs.t());

    debug!(rows = n1, cols = n2, "Computed word vector overlap");
    Ok(overlap)
}

fn flatten_words(x: &WordTensor, rows: usize, cols: usize) -> Result<Array2<u32>> {
    x.as_array()
        .mapv(u32::from)
        .into_shape_with_order((rows, cols))
        .map_err(|_| Error::ShapeMismatch {
            expected: vec![rows, cols],
            got: x.as_array().shape().to_vec(),
        })
}
