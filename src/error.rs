//! Error types for the fallible edges of the crate
//!
//! The calculators themselves are total functions. Errors only arise when loading
//! assumptions or scenario files and when parsing enum values from text.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid value for assumption '{name}': {value}")]
    InvalidAssumption { name: String, value: String },

    #[error("Unknown assumption: {0}")]
    UnknownAssumption(String),

    #[error("Duplicate assumption: {0}")]
    DuplicateAssumption(String),

    #[error("Missing assumption: {0}")]
    MissingAssumption(&'static str),

    #[error("Unknown gender: {0}")]
    UnknownGender(String),
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
