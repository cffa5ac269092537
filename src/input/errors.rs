/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for POSCAR parsing

use crate::utils::UtilsError;
use std::io;
use thiserror::Error;

/// Errors that can occur during POSCAR parsing
#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// The file ended before a required line
    #[error("Unexpected end of input at line {line}: expected {expected}")]
    UnexpectedEof { line: usize, expected: &'static str },

    /// A token that must be numeric is missing or malformed
    #[error("Invalid number at line {line}: expected {expected}, found '{token}'")]
    InvalidNumber {
        line: usize,
        token: String,
        expected: &'static str,
    },

    /// Cartesian positions cannot be converted with a singular lattice
    #[error("Cannot convert Cartesian positions: lattice is singular")]
    SingularLattice,

    #[error("Linear algebra error: {0}")]
    LinearAlgebra(UtilsError),
}

impl From<UtilsError> for InputError {
    fn from(err: UtilsError) -> Self {
        match err {
            UtilsError::SingularMatrix => InputError::SingularLattice,
            other => InputError::LinearAlgebra(other),
        }
    }
}

/// Result type for input operations
pub type Result<T> = std::result::Result<T, InputError>;
