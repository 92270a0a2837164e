// Colored terminal tables for word-pair matrices.
//
// Rows are labelled with the first word list, columns with the second. The
// functions return the rendered table; callers decide where it goes.

use colored::{ColoredString, Colorize};
use ndarray::Array2;

/// Labels longer than this are truncated in the table.
const MAX_LABEL_CHARS: usize = 12;

/// Render a boolean mask: a green block for a match, a dim dot otherwise.
pub fn render_mask<S1, S2>(row_labels: &[S1], col_labels: &[S2], mask: &Array2<bool>) -> String
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    render_table(row_labels, col_labels, mask.dim(), |i, j| {
        if mask[[i, j]] {
            "■".green().bold()
        } else {
            "·".dimmed()
        }
    })
}

/// Render an integer matrix (overlap counts, token sequences). Zero cells
/// are dimmed so the non-zero ones stand out.
pub fn render_counts<S1, S2>(row_labels: &[S1], col_labels: &[S2], counts: &Array2<u32>) -> String
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    render_table(row_labels, col_labels, counts.dim(), |i, j| {
        let count = counts[[i, j]];
        if count == 0 {
            "0".dimmed()
        } else {
            count.to_string().bold()
        }
    })
}

fn render_table<S1, S2, F>(
    row_labels: &[S1],
    col_labels: &[S2],
    (rows, cols): (usize, usize),
    cell: F,
) -> String
where
    S1: AsRef<str>,
    S2: AsRef<str>,
    F: Fn(usize, usize) -> ColoredString,
{
    let rows_text: Vec<String> = (0..rows).map(|i| label(row_labels, i)).collect();
    let cols_text: Vec<String> = (0..cols).map(|j| label(col_labels, j)).collect();

    let row_width = rows_text.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let col_width = cols_text
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(1);

    let mut out = String::new();

    // Header
    out.push_str(&" ".repeat(row_width));
    for text in &cols_text {
        out.push_str(&format!("  {:>col_width$}", text.dimmed()));
    }
    out.push('\n');

    for (i, text) in rows_text.iter().enumerate() {
        out.push_str(&format!("{:<row_width$}", text.bold()));
        for j in 0..cols {
            out.push_str(&format!("  {:>col_width$}", cell(i, j)));
        }
        out.push('\n');
    }

    out
}

/// Label for index `i`, falling back to the index when no label was given.
fn label<S: AsRef<str>>(labels: &[S], i: usize) -> String {
    match labels.get(i) {
        Some(l) => super::truncate_chars(l.as_ref(), MAX_LABEL_CHARS),
        None => format!("#{i}"),
    }
}
