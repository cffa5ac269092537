/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the utils module

use thiserror::Error;

/// Errors that can occur in the utils module
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    /// Matrix has no inverse
    #[error("Matrix inversion failed: matrix is singular")]
    SingularMatrix,

    /// Operand shapes do not fit the operation
    #[error("Dimension error: {0}")]
    Dimension(String),
}

/// A specialized Result type for utils operations
pub type Result<T> = std::result::Result<T, UtilsError>;
