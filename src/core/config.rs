// File: src/core/config.rs
use crate::core::types::{TransformationKind, WordCategory};
use rand::Rng;
use thiserror::Error;

/// Validation failures for a [`GenerationConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("min_length {min} exceeds max_length {max}")]
    LengthBounds { min: usize, max: usize },

    #[error("min_leet_chars {min} exceeds max_leet_chars {max}")]
    LeetBounds { min: usize, max: usize },

    #[error("count must be at least 1")]
    ZeroCount,
}

/// All knobs for one generation run.
///
/// Constructed and validated at the boundary, then passed by reference
/// into the engine; the engine never mutates it. Leet counts are
/// `usize`, so negative values are unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// How many passphrases one batch produces.
    pub count: usize,
    /// Inclusive word-length bounds applied when loading word lists.
    pub min_length: usize,
    pub max_length: usize,
    /// Inclusive bounds on how many characters the leet pass substitutes.
    pub min_leet_chars: usize,
    pub max_leet_chars: usize,
    /// Word order, one symbol per token. `A`/`V`/`N`/`P` select a
    /// category; any other symbol renders literally.
    pub pattern: String,
    pub transformation: TransformationKind,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            count: 3,
            min_length: 4,
            max_length: 8,
            min_leet_chars: 1,
            max_leet_chars: 2,
            pattern: "AVNP".to_string(),
            transformation: TransformationKind::MiniLeet,
        }
    }
}

impl GenerationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_length > self.max_length {
            return Err(ConfigError::LengthBounds {
                min: self.min_length,
                max: self.max_length,
            });
        }
        if self.min_leet_chars > self.max_leet_chars {
            return Err(ConfigError::LeetBounds {
                min: self.min_leet_chars,
                max: self.max_leet_chars,
            });
        }
        if self.count < 1 {
            return Err(ConfigError::ZeroCount);
        }
        Ok(())
    }

    /// Builds a randomized but always-valid configuration.
    ///
    /// Menu-layer policy, not part of the engine contract. The
    /// transformation is drawn first so the leet bounds can depend on
    /// it: a plain transformation gets [0, 0], an active one keeps the
    /// original at-least-one-substitution guarantee.
    pub fn randomized<R: Rng>(rng: &mut R) -> Self {
        let transformation = TransformationKind::ALL[rng.gen_range(0..TransformationKind::ALL.len())];
        let (min_leet_chars, max_leet_chars) = match transformation {
            TransformationKind::Plain => (0, 0),
            _ => (1, rng.gen_range(1..=5)),
        };

        let pattern_length = rng.gen_range(2..=5);
        let pattern = (0..pattern_length)
            .map(|_| WordCategory::ALL[rng.gen_range(0..WordCategory::ALL.len())].symbol())
            .collect();

        Self {
            count: rng.gen_range(1..=10),
            min_length: 4,
            max_length: 99,
            min_leet_chars,
            max_leet_chars,
            pattern,
            transformation,
        }
    }
}
