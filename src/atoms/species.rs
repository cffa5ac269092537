/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Species resolution for POSCAR atom blocks
//!
//! A POSCAR file declares atoms in blocks: one count per species, optionally
//! paired with a chemical symbol. Resolution turns those blocks into one
//! species number per atom. When the symbols are usable the numbers are
//! atomic numbers; otherwise each block gets a 1-based group index.

use super::database;
use log::debug;

/// How the per-atom species numbers are assigned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeciesScheme {
    /// Every block has a valid element symbol; atoms carry atomic numbers
    Chemical,
    /// Symbols are absent, mismatched or unknown; atoms carry block indices
    Positional,
}

/// Returns true if every token is a known element symbol.
///
/// An empty sequence is valid.
pub fn is_valid_symbol_sequence<S: AsRef<str>>(tokens: &[S]) -> bool {
    tokens
        .iter()
        .all(|token| database::is_element_symbol(token.as_ref()))
}

/// Decide which scheme applies to the given counts and symbols
pub fn resolve_scheme<S: AsRef<str>>(counts: &[usize], symbols: Option<&[S]>) -> SpeciesScheme {
    match symbols {
        None => {
            debug!("No species symbols given, using positional species");
            SpeciesScheme::Positional
        }
        Some(symbols) if symbols.len() != counts.len() => {
            debug!(
                "{} symbols for {} species blocks, using positional species",
                symbols.len(),
                counts.len()
            );
            SpeciesScheme::Positional
        }
        Some(symbols) if !is_valid_symbol_sequence(symbols) => {
            debug!("Unknown element symbol among species symbols, using positional species");
            SpeciesScheme::Positional
        }
        Some(_) => SpeciesScheme::Chemical,
    }
}

/// Expand species blocks into one species number per atom.
///
/// The result has `counts.iter().sum()` entries, in block order. This never
/// fails: unusable symbols degrade to positional numbering.
pub fn expand_species<S: AsRef<str>>(counts: &[usize], symbols: Option<&[S]>) -> Vec<i32> {
    let total: usize = counts.iter().sum();
    let mut numbers = Vec::with_capacity(total);

    match (resolve_scheme(counts, symbols), symbols) {
        (SpeciesScheme::Chemical, Some(symbols)) => {
            for (symbol, &count) in symbols.iter().zip(counts) {
                // Chemical scheme guarantees every symbol is in the table
                let z = database::atomic_number_from_symbol(symbol.as_ref()).unwrap_or_default();
                numbers.extend(std::iter::repeat(z).take(count));
            }
        }
        _ => {
            for (i, &count) in counts.iter().enumerate() {
                numbers.extend(std::iter::repeat(i as i32 + 1).take(count));
            }
        }
    }

    numbers
}
