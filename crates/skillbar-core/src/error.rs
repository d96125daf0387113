//! Error types for skillbar-core
//!
//! Bar operations reject bad input silently (they return `false`); the
//! variants here cover host programming errors and configuration loading.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Slot index {0} is outside the bar (0..=8)")]
    SlotOutOfRange(usize),

    #[error("Invalid bar configuration: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
