/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Linear algebra for lattice coordinate conversions
//!
//! Positions are stored as rows, so a set of N positions is an N×3 matrix
//! and the lattice is a 3×3 matrix with basis vectors as rows:
//!
//! ```text
//! cartesian  = fractional · L
//! fractional = cartesian  · L⁻¹
//! ```

use super::errors::{Result, UtilsError};
use crate::atoms::{Lattice, Position};
use ndarray::Array2;

/// Pivots smaller than this are treated as zero
const SINGULAR_TOLERANCE: f64 = 1e-12;

/// Build an ndarray matrix from a lattice
pub fn lattice_to_array(lattice: &Lattice) -> Array2<f64> {
    Array2::from_shape_fn((3, 3), |(i, j)| lattice[i][j])
}

/// Build an N×3 ndarray matrix from positions
pub fn positions_to_array(positions: &[Position]) -> Array2<f64> {
    Array2::from_shape_fn((positions.len(), 3), |(i, j)| positions[i][j])
}

/// Convert an N×3 ndarray matrix back into positions
pub fn array_to_positions(array: &Array2<f64>) -> Result<Vec<Position>> {
    if array.ncols() != 3 {
        return Err(UtilsError::Dimension(format!(
            "expected 3 columns, found {}",
            array.ncols()
        )));
    }
    Ok(array
        .rows()
        .into_iter()
        .map(|row| [row[0], row[1], row[2]])
        .collect())
}

/// Invert a square matrix by Gauss-Jordan elimination with partial pivoting
pub fn invert_matrix(a: &Array2<f64>) -> Result<Array2<f64>> {
    let n = a.nrows();
    if n != a.ncols() {
        return Err(UtilsError::Dimension(
            "Matrix must be square for inversion".to_string(),
        ));
    }

    // Augmented matrix [A | I]
    let mut aug = Array2::<f64>::zeros((n, 2 * n));
    for i in 0..n {
        for j in 0..n {
            aug[(i, j)] = a[(i, j)];
        }
        aug[(i, n + i)] = 1.0;
    }

    // Pivot threshold relative to the largest entry
    let scale = a.iter().fold(0.0_f64, |m, v| m.max(v.abs()));

    for i in 0..n {
        let mut max_idx = i;
        let mut max_val = aug[(i, i)].abs();
        for j in (i + 1)..n {
            if aug[(j, i)].abs() > max_val {
                max_idx = j;
                max_val = aug[(j, i)].abs();
            }
        }

        if max_idx != i {
            for j in 0..(2 * n) {
                aug.swap((i, j), (max_idx, j));
            }
        }

        let pivot = aug[(i, i)];
        if pivot == 0.0 || pivot.abs() <= SINGULAR_TOLERANCE * scale {
            return Err(UtilsError::SingularMatrix);
        }

        for j in 0..(2 * n) {
            aug[(i, j)] /= pivot;
        }

        for j in 0..n {
            if j != i {
                let factor = aug[(j, i)];
                if factor != 0.0 {
                    for k in 0..(2 * n) {
                        let value_i_k = aug[(i, k)];
                        aug[(j, k)] -= factor * value_i_k;
                    }
                }
            }
        }
    }

    Ok(Array2::from_shape_fn((n, n), |(i, j)| aug[(i, n + j)]))
}

/// Convert Cartesian positions to fractional coordinates of `lattice`
pub fn cartesian_to_fractional(positions: &[Position], lattice: &Lattice) -> Result<Vec<Position>> {
    let inverse = invert_matrix(&lattice_to_array(lattice))?;
    let fractional = positions_to_array(positions).dot(&inverse);
    array_to_positions(&fractional)
}

/// Convert fractional coordinates of `lattice` to Cartesian positions
pub fn fractional_to_cartesian(positions: &[Position], lattice: &Lattice) -> Vec<Position> {
    let cartesian = positions_to_array(positions).dot(&lattice_to_array(lattice));
    cartesian
        .rows()
        .into_iter()
        .map(|row| [row[0], row[1], row[2]])
        .collect()
}

/// Determinant of a lattice (signed cell volume)
pub fn determinant(lattice: &Lattice) -> f64 {
    let [a, b, c] = lattice;
    a[0] * (b[1] * c[2] - b[2] * c[1]) - a[1] * (b[0] * c[2] - b[2] * c[0])
        + a[2] * (b[0] * c[1] - b[1] * c[0])
}
