/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Parser implementation for VASP POSCAR files
//!
//! POSCAR is line-positional:
//!
//! ```text
//! 0      comment (may list element symbols)
//! 1      global scale factor
//! 2-4    lattice vectors
//! 5      atom counts, or element symbols followed by counts on line 6
//! [n]    optional "Selective dynamics" marker
//! n+1    coordinate mode (Direct / Cartesian)
//! ...    one position line per atom
//! ```
//!
//! How many lines the header takes depends on its content, so the parser
//! carries a [`LineCursor`] through one method per region.

use super::config::ParserConfig;
use super::coordinates::{is_selective_dynamics, CoordinateMode};
use super::errors::{InputError, Result};
use crate::atoms::{expand_species, is_valid_symbol_sequence, Cell, Lattice, Position};
use crate::utils::linear_algebra;
use log::debug;
use std::fs;
use std::path::Path;

/// Read position over the lines of a POSCAR file
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    lines: &'a [&'a str],
    index: usize,
}

impl<'a> LineCursor<'a> {
    /// Create a cursor at the first line
    pub fn new(lines: &'a [&'a str]) -> Self {
        Self { lines, index: 0 }
    }

    /// Zero-based index of the next unread line
    pub fn index(&self) -> usize {
        self.index
    }

    /// One-based line number of the next unread line, for error messages
    pub fn line_number(&self) -> usize {
        self.index + 1
    }

    /// Look at the next unread line without consuming it
    pub fn peek(&self, expected: &'static str) -> Result<&'a str> {
        self.lines
            .get(self.index)
            .copied()
            .ok_or(InputError::UnexpectedEof {
                line: self.line_number(),
                expected,
            })
    }

    /// Consume and return the next line
    pub fn next_line(&mut self, expected: &'static str) -> Result<&'a str> {
        let line = self.peek(expected)?;
        self.index += 1;
        Ok(line)
    }

    /// Skip `n` lines
    pub fn advance(&mut self, n: usize) {
        self.index += n;
    }
}

/// Species blocks declared in the header
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesHeader {
    /// Number of atoms per species block
    pub counts: Vec<usize>,
    /// Symbols in effect for the blocks, if any
    pub symbols: Option<Vec<String>>,
}

impl SpeciesHeader {
    /// Total number of atoms declared
    pub fn total_atoms(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// POSCAR file parser
#[derive(Debug, Default)]
pub struct PoscarParser {
    config: ParserConfig,
}

impl PoscarParser {
    /// Create a new POSCAR parser with the given configuration
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a POSCAR file, falling back to the configured path when
    /// `path` is `None`
    pub fn parse<P: AsRef<Path>>(&self, path: Option<P>) -> Result<Cell> {
        let path = match path {
            Some(p) => p.as_ref().to_path_buf(),
            None => self.config.input_path.clone(),
        };

        debug!("Reading POSCAR from {}", path.display());
        let content = fs::read_to_string(&path)?;
        self.parse_str(&content)
    }

    /// Parse POSCAR content held in memory
    pub fn parse_str(&self, content: &str) -> Result<Cell> {
        let lines: Vec<&str> = content.lines().collect();
        self.parse_lines(&lines)
    }

    /// Parse POSCAR lines into a cell
    pub fn parse_lines(&self, lines: &[&str]) -> Result<Cell> {
        let mut cursor = LineCursor::new(lines);

        let preliminary = Self::read_comment_symbols(&mut cursor)?;
        let scale = Self::read_scale(&mut cursor)?;
        let lattice = Self::read_lattice(&mut cursor, scale)?;
        let header = Self::read_species_header(&mut cursor, preliminary)?;
        Self::skip_selective_dynamics(&mut cursor)?;
        let mode = Self::read_coordinate_mode(&mut cursor)?;
        let positions = Self::read_positions(&mut cursor, header.total_atoms())?;

        let positions = if mode.is_cartesian() {
            linear_algebra::cartesian_to_fractional(&positions, &lattice)?
        } else {
            positions
        };

        let numbers = expand_species(&header.counts, header.symbols.as_deref());

        Ok(Cell::new(lattice, positions, numbers))
    }

    /// Line 0: a comment, or a list of element symbols
    pub fn read_comment_symbols(cursor: &mut LineCursor<'_>) -> Result<Option<Vec<String>>> {
        let line = cursor.next_line("comment line")?;
        let tokens: Vec<&str> = line.split_whitespace().collect();

        if is_valid_symbol_sequence(&tokens) {
            debug!("Comment line lists element symbols: {:?}", tokens);
            Ok(Some(tokens.into_iter().map(String::from).collect()))
        } else {
            Ok(None)
        }
    }

    /// Line 1: the global scale factor
    pub fn read_scale(cursor: &mut LineCursor<'_>) -> Result<f64> {
        let line_number = cursor.line_number();
        let line = cursor.next_line("scale factor")?;
        let token = line.trim();

        token.parse().map_err(|_| InputError::InvalidNumber {
            line: line_number,
            token: token.to_string(),
            expected: "scale factor",
        })
    }

    /// Lines 2-4: lattice vectors, multiplied by `scale`
    pub fn read_lattice(cursor: &mut LineCursor<'_>, scale: f64) -> Result<Lattice> {
        let mut lattice = [[0.0; 3]; 3];
        for row in lattice.iter_mut() {
            let line_number = cursor.line_number();
            let line = cursor.next_line("lattice vector")?;
            let vector = parse_vector(line, line_number, "lattice vector component")?;
            for (value, component) in row.iter_mut().zip(vector) {
                *value = component * scale;
            }
        }
        Ok(lattice)
    }

    /// Line 5 (and maybe 6): atom counts, optionally preceded by symbols.
    ///
    /// If every token on the line is an integer it holds the counts and one
    /// line is consumed. Otherwise the line holds symbols, which replace any
    /// found on the comment line, and the counts follow on the next line.
    pub fn read_species_header(
        cursor: &mut LineCursor<'_>,
        preliminary: Option<Vec<String>>,
    ) -> Result<SpeciesHeader> {
        let line = cursor.peek("atom counts")?;

        if let Some(counts) = parse_counts(line) {
            debug!("Atom counts {:?} without a symbols line", counts);
            cursor.advance(1);
            return Ok(SpeciesHeader {
                counts,
                symbols: preliminary,
            });
        }

        let symbols: Vec<String> = line.split_whitespace().map(String::from).collect();
        debug!("Species symbols line: {:?}", symbols);
        cursor.advance(1);

        let line_number = cursor.line_number();
        let counts_line = cursor.next_line("atom counts")?;
        let counts = counts_line
            .split_whitespace()
            .map(|token| {
                token.parse::<usize>().map_err(|_| InputError::InvalidNumber {
                    line: line_number,
                    token: token.to_string(),
                    expected: "atom count",
                })
            })
            .collect::<Result<Vec<usize>>>()?;

        Ok(SpeciesHeader {
            counts,
            symbols: Some(symbols),
        })
    }

    /// Skip a "Selective dynamics" marker line if present
    pub fn skip_selective_dynamics(cursor: &mut LineCursor<'_>) -> Result<bool> {
        let line = cursor.peek("coordinate mode")?;
        if is_selective_dynamics(line) {
            debug!("Skipping selective dynamics line {}", cursor.line_number());
            cursor.advance(1);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// The coordinate mode line
    pub fn read_coordinate_mode(cursor: &mut LineCursor<'_>) -> Result<CoordinateMode> {
        let line = cursor.next_line("coordinate mode")?;
        let mode = CoordinateMode::from_line(line);
        debug!("Coordinate mode: {:?}", mode);
        Ok(mode)
    }

    /// `count` position lines, first three tokens of each
    pub fn read_positions(cursor: &mut LineCursor<'_>, count: usize) -> Result<Vec<Position>> {
        let mut positions = Vec::with_capacity(count);
        for _ in 0..count {
            let line_number = cursor.line_number();
            let line = cursor.next_line("atom position")?;
            positions.push(parse_vector(line, line_number, "position component")?);
        }
        Ok(positions)
    }
}

/// Parse every token of a line as a count, or `None` if any is not an integer
fn parse_counts(line: &str) -> Option<Vec<usize>> {
    line.split_whitespace()
        .map(|token| token.parse::<usize>().ok())
        .collect()
}

/// Parse the first three tokens of a line as reals
fn parse_vector(line: &str, line_number: usize, expected: &'static str) -> Result<[f64; 3]> {
    let mut tokens = line.split_whitespace();
    let mut vector = [0.0; 3];
    for value in vector.iter_mut() {
        let token = tokens.next().unwrap_or_default();
        *value = token.parse().map_err(|_| InputError::InvalidNumber {
            line: line_number,
            token: token.to_string(),
            expected,
        })?;
    }
    Ok(vector)
}
