/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Element symbol table
//!
//! Maps the standard chemical symbols (H through Og) to atomic numbers.
//! Lookups are case-sensitive: `"Fe"` resolves, `"FE"` and `"fe"` do not.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Number of elements known to the table
pub const ELEMENT_COUNT: usize = 118;

/// Element symbols ordered by atomic number (index 0 is hydrogen)
pub const ELEMENT_SYMBOLS: [&str; ELEMENT_COUNT] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", // 1-10
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca", // 11-20
    "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", // 21-30
    "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", // 31-40
    "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn", // 41-50
    "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", // 51-60
    "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb", // 61-70
    "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", // 71-80
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", // 81-90
    "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm", // 91-100
    "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", // 101-110
    "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og", // 111-118
];

static SYMBOL_MAP: Lazy<HashMap<&'static str, i32>> = Lazy::new(|| {
    ELEMENT_SYMBOLS
        .iter()
        .enumerate()
        .map(|(i, &symbol)| (symbol, i as i32 + 1))
        .collect()
});

/// Returns the element symbol for an atomic number
pub fn element_symbol(atomic_number: i32) -> Option<&'static str> {
    if atomic_number < 1 {
        return None;
    }
    ELEMENT_SYMBOLS.get(atomic_number as usize - 1).copied()
}

/// Returns the atomic number for an element symbol, or `None` if the
/// token is not a valid element symbol
pub fn atomic_number_from_symbol(symbol: &str) -> Option<i32> {
    SYMBOL_MAP.get(symbol).copied()
}

/// Returns true if the token is a known element symbol
pub fn is_element_symbol(symbol: &str) -> bool {
    SYMBOL_MAP.contains_key(symbol)
}
