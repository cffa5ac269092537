/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Coordinate mode of the POSCAR position block

/// How atom positions are written in the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateMode {
    /// Fractional coordinates of the lattice basis
    Direct,
    /// Cartesian coordinates in the lattice's units
    Cartesian,
}

impl CoordinateMode {
    /// Decide the mode from a mode line.
    ///
    /// Only the first character counts: `c` or `k` (either case) means
    /// Cartesian, anything else, including an empty line, means direct.
    pub fn from_line(line: &str) -> Self {
        match first_char_lower(line) {
            Some('c') | Some('k') => CoordinateMode::Cartesian,
            _ => CoordinateMode::Direct,
        }
    }

    /// True if positions must be converted to fractional coordinates
    pub fn is_cartesian(self) -> bool {
        self == CoordinateMode::Cartesian
    }
}

/// True if the line is a "Selective dynamics" marker
pub fn is_selective_dynamics(line: &str) -> bool {
    first_char_lower(line) == Some('s')
}

fn first_char_lower(line: &str) -> Option<char> {
    line.chars().next().map(|c| c.to_ascii_lowercase())
}
