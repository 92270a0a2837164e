// Composition tests — verifying that the pure functions chain together.
//
// These tests exercise the data flow between modules:
//   Config -> Encoder -> WordTensor -> Overlap / Masks -> Terminal table
// with no side effects beyond reading a fake environment.

use ndarray::array;

use cryptogram::config::Config;
use cryptogram::output::terminal::{render_counts, render_mask};
use cryptogram::output::truncate_chars;
use cryptogram::words::alphabet::Alphabet;
use cryptogram::words::masks::{candidate_mask, shared_token_sequence_mask};
use cryptogram::words::onehot::vectorize_words;
use cryptogram::words::overlap::word_vector_overlap;
use cryptogram::words::tensor::WordTensor;
use cryptogram::words::traits::WordEncoder;

const CIPHER: [&str; 6] = ["molly", "folly", "to", "sully", "artsy", "on"];
const PLAIN: [&str; 4] = ["fully", "party", "no", "artsy"];

fn expected_token_mask() -> ndarray::Array2<bool> {
    array![
        [true, false, false, false],
        [true, false, false, false],
        [false, false, true, false],
        [true, false, false, false],
        [false, true, false, true],
        [false, false, true, false],
    ]
}

// ============================================================
// Chain: Encode -> Pad -> Overlap
// ============================================================

#[test]
fn padded_overlap_matches_expected_matrix() {
    let alphabet = Alphabet::new("onerigtulhmasp");
    let x = vectorize_words(&["one", "ring", "to"], &alphabet, None).unwrap();
    let v = vectorize_words(
        &["one", "ring", "to", "rule", "them", "all", "rings", "top", "tip", "ale"],
        &alphabet,
        None,
    )
    .unwrap();

    // "rings" makes v one position longer
    let x = x.with_positions(v.positions());
    let overlap = word_vector_overlap(&x, &v).unwrap();

    let expected = array![
        [3u32, 0, 0, 0, 1, 0, 0, 0, 0, 1],
        [0, 4, 0, 1, 0, 0, 4, 0, 1, 0],
        [0, 0, 2, 0, 1, 0, 0, 2, 1, 0],
    ];
    assert_eq!(overlap, expected);
}

#[test]
fn overlap_is_transposed_when_arguments_swap() {
    let alphabet = Alphabet::ascii_lowercase();
    let x = vectorize_words(&CIPHER, &alphabet, None).unwrap();
    let v = vectorize_words(&PLAIN, &alphabet, None).unwrap();
    let forward = word_vector_overlap(&x, &v).unwrap();
    let backward = word_vector_overlap(&v, &x).unwrap();
    assert_eq!(forward.t(), backward);
}

// ============================================================
// Chain: Encode -> Token sequence mask
// ============================================================

#[test]
fn token_mask_same_alphabet() {
    let alphabet = Alphabet::ascii_lowercase();
    let x = vectorize_words(&CIPHER, &alphabet, None).unwrap();
    let y = vectorize_words(&PLAIN, &alphabet, None).unwrap();

    let mask = shared_token_sequence_mask(&x, &y).unwrap();
    assert_eq!(mask, expected_token_mask());
    assert_eq!(mask.row(4).to_vec(), vec![false, true, false, true]);
}

#[test]
fn token_mask_different_alphabets() {
    // The alphabet axis is summed away before comparing, so its width and
    // order don't matter
    let x = vectorize_words(&CIPHER, &Alphabet::new("molyftsuarn"), None).unwrap();
    let y = vectorize_words(&PLAIN, &Alphabet::ascii_lowercase(), None).unwrap();

    let mask = shared_token_sequence_mask(&x, &y).unwrap();
    assert_eq!(mask, expected_token_mask());
}

#[test]
fn candidate_mask_agrees_with_token_mask_on_fixed_lists() {
    let alphabet = Alphabet::ascii_lowercase();
    let x = vectorize_words(&CIPHER, &alphabet, None).unwrap();
    let y = vectorize_words(&PLAIN, &alphabet, None).unwrap();

    // Every word here is either 2 or 5 letters, and same-pattern pairs
    // already share a length
    let candidates = candidate_mask(&CIPHER, &x, &PLAIN, &y).unwrap();
    assert_eq!(candidates, expected_token_mask());
}

#[test]
fn candidate_mask_narrows_token_mask_to_real_substitutions() {
    let alphabet = Alphabet::ascii_lowercase();
    let cipher = ["abab", "abba", "xyzz"];
    let plain = ["noon", "toto", "deed", "tree"];
    let x = vectorize_words(&cipher, &alphabet, None).unwrap();
    let y = vectorize_words(&plain, &alphabet, None).unwrap();

    // Every word here counts [1, 2, 2, 2] except "xyzz" and "tree" at [1, 2, 3, 3]
    let sequences = shared_token_sequence_mask(&x, &y).unwrap();
    assert_eq!(
        sequences,
        array![
            [true, true, true, false],
            [true, true, true, false],
            [false, false, false, true],
        ]
    );

    let candidates = candidate_mask(&cipher, &x, &plain, &y).unwrap();
    assert_eq!(
        candidates,
        array![
            [false, true, false, false],
            [true, false, true, false],
            [false, false, false, true],
        ]
    );
}

// ============================================================
// Chain: Config -> Encoder -> Mask -> Terminal
// ============================================================

#[test]
fn configured_encoder_feeds_mask_and_table() {
    colored::control::set_override(false);

    let config = Config::from_lookup(|key| match key {
        "CRYPTOGRAM_ALPHABET" => Some("molyftsuarnp".to_string()),
        _ => None,
    })
    .unwrap();
    let encoder = config.encoder();

    let x = encoder.encode(&CIPHER).unwrap();
    let y = encoder.encode(&PLAIN).unwrap();
    let mask = shared_token_sequence_mask(&x, &y).unwrap();
    assert_eq!(mask, expected_token_mask());

    let table = render_mask(&CIPHER, &PLAIN, &mask);
    let artsy_line = table
        .lines()
        .find(|l| l.starts_with("artsy"))
        .expect("row for artsy");
    assert_eq!(artsy_line.matches('■').count(), 2);
    assert_eq!(table.lines().count(), CIPHER.len() + 1);
}

#[test]
fn configured_max_len_truncates_before_comparing() {
    let config = Config::from_lookup(|key| match key {
        "CRYPTOGRAM_MAX_LEN" => Some("2".to_string()),
        _ => None,
    })
    .unwrap();
    let x = config.encoder().encode(&CIPHER).unwrap();
    assert_eq!(x.positions(), 2);

    // Every word starts with two different letters
    let mask = shared_token_sequence_mask(&x, &x).unwrap();
    assert!(mask.iter().all(|&m| m));
}

#[test]
fn overlap_table_renders_counts() {
    colored::control::set_override(false);

    let alphabet = Alphabet::ascii_lowercase();
    let x = vectorize_words(&["fully", "folly"], &alphabet, None).unwrap();
    let overlap = word_vector_overlap(&x, &x).unwrap();
    assert_eq!(overlap, array![[5u32, 4], [4, 5]]);

    let table = render_counts(&["fully", "folly"], &["fully", "folly"], &overlap);
    assert!(table.contains('5'));
    assert!(table.contains('4'));
}

#[test]
fn long_labels_are_truncated_in_tables() {
    colored::control::set_override(false);
    let words = ["internationalization"];
    let x = vectorize_words(&words, &Alphabet::ascii_lowercase(), None).unwrap();
    let mask = shared_token_sequence_mask(&x, &x).unwrap();
    let table = render_mask(&words, &words, &mask);
    assert!(table.contains(&truncate_chars(words[0], 12)));
    assert!(!table.contains(words[0]));
}

// ============================================================
// Serialization
// ============================================================

#[test]
fn word_tensor_survives_json() {
    let x = vectorize_words(&["one", "to"], &Alphabet::new("onet"), None).unwrap();
    let json = serde_json::to_string(&x).unwrap();
    let back: WordTensor = serde_json::from_str(&json).unwrap();
    assert_eq!(back, x);
}
