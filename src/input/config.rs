/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Configuration for the POSCAR parser

use std::path::PathBuf;

/// POSCAR parser configuration
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Path to the input file
    pub input_path: PathBuf,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("POSCAR"),
        }
    }
}
