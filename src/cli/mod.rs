/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Command Line Interface (CLI) module
//!
//! This module provides a command-line interface for reading POSCAR files.

use crate::atoms::Cell;
use crate::fixtures::{self, FixtureConfig};
use crate::utils::determinant;
use anyhow::{bail, Context};
use clap::Parser;
use log::warn;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Read VASP POSCAR files and report lattice, positions and species
#[derive(Parser, Debug)]
#[command(name = "poscar-rs", version, about)]
pub struct Cli {
    /// POSCAR files to read
    pub files: Vec<PathBuf>,

    /// Also read every fixture file under this data directory
    #[arg(long, value_name = "DIR")]
    pub fixtures: Option<PathBuf>,

    /// Print one JSON document per file instead of a summary
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct CellReport<'a> {
    path: &'a Path,
    #[serde(flatten)]
    cell: &'a Cell,
}

/// Run the CLI
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut paths = cli.files.clone();
    if let Some(root) = &cli.fixtures {
        let config = FixtureConfig::new(root);
        let found = config
            .all_filenames()
            .with_context(|| format!("listing fixtures under {}", root.display()))?;
        paths.extend(found);
    }

    if paths.is_empty() {
        bail!("no POSCAR files given");
    }

    let mut failures = 0;
    for path in &paths {
        match fixtures::read_vasp(path) {
            Ok(cell) => println!("{}", format_cell(path, &cell, cli.json)?),
            Err(err) => {
                warn!("{}", err);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} files failed to parse", failures, paths.len());
    }
    Ok(())
}

/// Format a parsed cell as a summary line or as JSON
pub fn format_cell(path: &Path, cell: &Cell, json: bool) -> anyhow::Result<String> {
    if json {
        let report = CellReport { path, cell };
        return serde_json::to_string(&report).context("serializing cell");
    }

    Ok(format!(
        "{}: {} atoms, volume {:.4}, species {:?}",
        path.display(),
        cell.num_atoms(),
        determinant(&cell.lattice),
        cell.numbers
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cubic_cell() -> Cell {
        Cell::new(
            [[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]],
            vec![[0.0, 0.0, 0.0], [0.5, 0.5, 0.5]],
            vec![1, 1],
        )
    }

    #[test]
    fn test_summary() {
        let line = format_cell(Path::new("POSCAR"), &cubic_cell(), false).unwrap();
        assert_eq!(line, "POSCAR: 2 atoms, volume 8.0000, species [1, 1]");
    }

    #[test]
    fn test_json() {
        let text = format_cell(Path::new("POSCAR"), &cubic_cell(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["path"], "POSCAR");
        assert_eq!(value["numbers"], serde_json::json!([1, 1]));
        assert_eq!(value["lattice"][0][0], 2.0);
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["poscar-rs", "--json", "a/POSCAR", "b/POSCAR"]);
        assert!(cli.json);
        assert_eq!(cli.files.len(), 2);
        assert!(cli.fixtures.is_none());
    }

    #[test]
    fn test_no_files() {
        let cli = Cli::parse_from(["poscar-rs"]);
        assert!(run(&cli).is_err());
    }
}
