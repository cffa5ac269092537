/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! POSCAR test fixtures
//!
//! Fixture files live in one directory per crystal family under a common
//! data root:
//!
//! ```text
//! data/
//!   cubic/       POSCAR-221, POSCAR-225, ...
//!   hexagonal/
//!   ...
//! ```

use crate::atoms::Cell;
use crate::input::{self, InputError};
use log::info;
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fixture directories, one per crystal family
pub const FIXTURE_DIRNAMES: [&str; 9] = [
    "cubic",
    "hexagonal",
    "monoclinic",
    "orthorhombic",
    "tetragonal",
    "triclinic",
    "trigonal",
    "distorted",
    "virtual_structure",
];

/// Errors from fixture discovery and loading
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Cannot read fixture directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: InputError,
    },
}

/// Result type for fixture operations
pub type Result<T> = std::result::Result<T, FixtureError>;

/// Where to find fixture files
#[derive(Debug, Clone)]
pub struct FixtureConfig {
    /// Directory holding the per-family fixture directories
    pub root_data_dir: PathBuf,
    /// Names of the fixture directories under the root
    pub dirnames: Vec<String>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self::new("data")
    }
}

impl FixtureConfig {
    /// Fixture layout with the standard directory names under `root`
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root_data_dir: root.as_ref().to_path_buf(),
            dirnames: FIXTURE_DIRNAMES.iter().map(|d| d.to_string()).collect(),
        }
    }

    /// Full paths of the fixture directories
    pub fn dirnames(&self) -> Vec<PathBuf> {
        self.dirnames
            .iter()
            .map(|d| self.root_data_dir.join(d))
            .collect()
    }

    /// Every file in every fixture directory, sorted within each directory
    pub fn all_filenames(&self) -> Result<Vec<PathBuf>> {
        let mut all = Vec::new();
        for dir in self.dirnames() {
            let mut filenames = list_dir(&dir)?;
            filenames.sort();
            info!("{}: {} fixture files", dir.display(), filenames.len());
            all.extend(filenames);
        }
        Ok(all)
    }

    /// Parse every fixture file, in parallel.
    ///
    /// Results are in the order of [`FixtureConfig::all_filenames`]; a file
    /// that fails to parse does not stop the others.
    pub fn read_all(&self) -> Result<Vec<(PathBuf, Result<Cell>)>> {
        let filenames = self.all_filenames()?;
        Ok(filenames
            .into_par_iter()
            .map(|path| {
                let cell = read_vasp(&path);
                (path, cell)
            })
            .collect())
    }
}

fn list_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let io_err = |source: io::Error| FixtureError::Io {
        path: dir.to_path_buf(),
        source,
    };
    fs::read_dir(dir)
        .map_err(io_err)?
        .map(|entry| entry.map(|e| e.path()).map_err(io_err))
        .collect()
}

/// Read one POSCAR fixture file
pub fn read_vasp<P: AsRef<Path>>(path: P) -> Result<Cell> {
    input::parse_poscar(path.as_ref()).map_err(|source| FixtureError::Parse {
        path: path.as_ref().to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dirnames() {
        let config = FixtureConfig::new("/fixtures");
        let dirs = config.dirnames();
        assert_eq!(dirs.len(), 9);
        assert_eq!(dirs[0], PathBuf::from("/fixtures/cubic"));
        assert_eq!(dirs[8], PathBuf::from("/fixtures/virtual_structure"));
    }

    #[test]
    fn test_missing_directory() {
        let config = FixtureConfig::new("/nonexistent/poscar/fixtures");
        assert!(matches!(
            config.all_filenames(),
            Err(FixtureError::Io { .. })
        ));
    }
}
