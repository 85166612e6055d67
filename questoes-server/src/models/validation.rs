//! Validation error types

use std::fmt;

/// Validation error for incoming question payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more required fields were absent or falsy on create
    MissingFields { fields: Vec<&'static str> },

    /// Body could not be read or decoded as a question payload
    MalformedBody { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // The client only learns the general rule, not which field tripped it.
            Self::MissingFields { .. } => write!(
                f,
                "Os campos enunciado, disciplina, tema e nivel são obrigatórios"
            ),
            Self::MalformedBody { reason } => write!(f, "JSON inválido: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
