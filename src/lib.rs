/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! # poscar-rs
//!
//! A reader for VASP POSCAR crystal-structure files.
//!
//! Parsing yields a [`Cell`]: the lattice (basis vectors as rows, scaled),
//! fractional atom positions, and one species number per atom. Species are
//! atomic numbers when the file names valid elements, otherwise 1-based
//! indices of the species blocks.
//!
//! ```
//! let text = "cubic\n1.0\n2 0 0\n0 2 0\n0 0 2\n2\nDirect\n0 0 0\n0.5 0.5 0.5\n";
//! let cell = poscar_rs::input::parse_poscar_str(text).unwrap();
//! assert_eq!(cell.numbers, vec![1, 1]);
//! ```

pub mod atoms;
pub mod cli;
pub mod fixtures;
pub mod input;
pub mod utils;

pub use atoms::Cell;
pub use input::{parse_poscar, parse_poscar_lines, parse_poscar_str};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
