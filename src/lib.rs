// src/lib.rs

pub mod core;
pub mod wordlist;

pub use crate::core::config::{ConfigError, GenerationConfig};
pub use crate::core::engine::PassphraseEngine;
pub use crate::core::types::{TransformationKind, WordBank, WordCategory};
