/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! VASP POSCAR input
//!
//! Reads a POSCAR file into a [`Cell`]: the scaled lattice, fractional
//! positions and one species number per atom.

pub mod config;
pub mod coordinates;
pub mod errors;
pub mod parser;

pub use config::ParserConfig;
pub use coordinates::CoordinateMode;
pub use errors::{InputError, Result};
pub use parser::{LineCursor, PoscarParser, SpeciesHeader};

use crate::atoms::Cell;
use std::path::Path;

/// Parse a POSCAR file with default configuration
pub fn parse_poscar<P: AsRef<Path>>(path: P) -> Result<Cell> {
    let config = ParserConfig {
        input_path: path.as_ref().to_path_buf(),
    };

    let parser = PoscarParser::new(config);
    parser.parse::<&Path>(None)
}

/// Parse POSCAR content from a string
pub fn parse_poscar_str(content: &str) -> Result<Cell> {
    PoscarParser::default().parse_str(content)
}

/// Parse POSCAR content already split into lines
pub fn parse_poscar_lines<S: AsRef<str>>(lines: &[S]) -> Result<Cell> {
    let lines: Vec<&str> = lines.iter().map(|line| line.as_ref()).collect();
    PoscarParser::default().parse_lines(&lines)
}
