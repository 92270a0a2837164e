// Cryptogram: one-hot word tensors and structural match masks.
//
// This is the library root. `words` holds the encoder and the comparison
// functions; `config` and `output` are the ambient layers around them.

pub mod config;
pub mod error;
pub mod output;
pub mod words;

pub use error::{Error, Result};
