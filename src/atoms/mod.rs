/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Atomic data and crystal cell types
//!
//! This module provides the element symbol table, species resolution for
//! POSCAR atom blocks, and the `Cell` produced by the reader.

pub mod cell;
pub mod database;
pub mod species;

pub use cell::{Cell, Lattice, Position};
pub use species::{expand_species, is_valid_symbol_sequence, resolve_scheme, SpeciesScheme};
