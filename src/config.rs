use std::env;

use anyhow::{Context, Result};

use crate::words::alphabet::{Alphabet, ASCII_LOWERCASE};
use crate::words::onehot::OneHotEncoder;

/// Encoder configuration loaded from environment variables.
///
/// Everything has a default, so an empty environment gives a lowercase
/// ASCII encoder with no length cap.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Symbols words may contain (CRYPTOGRAM_ALPHABET, default a-z)
    pub alphabet: String,
    /// Cap on encoded word length (CRYPTOGRAM_MAX_LEN, default none)
    pub max_len: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alphabet: ASCII_LOWERCASE.to_string(),
            max_len: None,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let alphabet = lookup("CRYPTOGRAM_ALPHABET")
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| ASCII_LOWERCASE.to_string());

        let max_len = match lookup("CRYPTOGRAM_MAX_LEN").as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => {
                let parsed: usize = raw
                    .parse()
                    .with_context(|| format!("CRYPTOGRAM_MAX_LEN is not a number: {raw:?}"))?;
                if parsed == 0 {
                    anyhow::bail!("CRYPTOGRAM_MAX_LEN must be a positive integer, got 0");
                }
                Some(parsed)
            }
        };

        Ok(Self { alphabet, max_len })
    }

    /// Build the one-hot encoder this configuration describes.
    pub fn encoder(&self) -> OneHotEncoder {
        OneHotEncoder {
            alphabet: Alphabet::new(&self.alphabet),
            max_len: self.max_len,
        }
    }
}
