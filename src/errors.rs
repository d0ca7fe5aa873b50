//! # Error Types Module
//!
//! This module defines the error types that can escape the pantry core.
//! Tokenizing and importing degrade silently on odd input, so only a few
//! conditions are ever reported to the caller.

use crate::unit::Unit;

/// Custom error types for pantry operations
#[derive(Debug, Clone, PartialEq)]
pub enum PantryError {
    /// Recipe text could not be parsed (e.g. no non-blank lines)
    Parse(String),
    /// Unit conversion requested across categories (weight <-> volume)
    InvalidConversion {
        /// Unit the quantity is expressed in
        from: Unit,
        /// Unit the caller asked for
        to: Unit,
    },
    /// Importer configuration is unusable
    Config(String),
}

impl std::fmt::Display for PantryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PantryError::Parse(msg) => write!(f, "Recipe parse error: {msg}"),
            PantryError::InvalidConversion { from, to } => {
                write!(f, "Invalid unit conversion: cannot convert from {from} to {to}")
            }
            PantryError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for PantryError {}

/// Result type alias for convenience
pub type PantryResult<T> = Result<T, PantryError>;
