/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Utility functions shared by the reader
//!
//! Currently the lattice linear algebra used for coordinate conversion.

pub mod errors;
pub mod linear_algebra;

pub use errors::{Result, UtilsError};
pub use linear_algebra::{
    cartesian_to_fractional, determinant, fractional_to_cartesian, invert_matrix,
};
