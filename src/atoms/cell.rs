/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Crystal cell produced by the POSCAR reader

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lattice basis vectors as rows, in Cartesian units
pub type Lattice = [[f64; 3]; 3];

/// Fractional coordinates of one atom in the lattice basis
pub type Position = [f64; 3];

/// A crystal cell: lattice, fractional positions and per-atom species
///
/// `positions` and `numbers` have the same length and order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Basis vectors, already multiplied by the file's scale factor
    pub lattice: Lattice,
    /// Fractional coordinates
    pub positions: Vec<Position>,
    /// Atomic numbers, or 1-based species group indices when the file
    /// did not name valid elements
    pub numbers: Vec<i32>,
}

impl Cell {
    /// Create a new cell
    pub fn new(lattice: Lattice, positions: Vec<Position>, numbers: Vec<i32>) -> Self {
        Self {
            lattice,
            positions,
            numbers,
        }
    }

    /// Number of atoms in the cell
    pub fn num_atoms(&self) -> usize {
        self.positions.len()
    }

    /// Split into the `(lattice, positions, numbers)` triple
    pub fn into_parts(self) -> (Lattice, Vec<Position>, Vec<i32>) {
        (self.lattice, self.positions, self.numbers)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Lattice:")?;
        for row in &self.lattice {
            writeln!(f, "  {:12.6} {:12.6} {:12.6}", row[0], row[1], row[2])?;
        }
        writeln!(f, "Positions ({} atoms):", self.num_atoms())?;
        for (pos, z) in self.positions.iter().zip(&self.numbers) {
            writeln!(f, "  {:10.6} {:10.6} {:10.6}  {}", pos[0], pos[1], pos[2], z)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_parts() {
        let lattice = [[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]];
        let cell = Cell::new(lattice, vec![[0.0; 3], [0.5; 3]], vec![26, 8]);

        assert_eq!(cell.num_atoms(), 2);

        let (l, p, n) = cell.into_parts();
        assert_eq!(l, lattice);
        assert_eq!(p.len(), 2);
        assert_eq!(n, vec![26, 8]);
    }

    #[test]
    fn test_display() {
        let cell = Cell::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]], vec![[0.0; 3]], vec![1]);
        let text = cell.to_string();
        assert!(text.contains("Positions (1 atoms)"));
    }
}
