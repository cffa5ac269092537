/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use poscar_rs::fixtures::{read_vasp, FixtureConfig, FixtureError, FIXTURE_DIRNAMES};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const ROCKSALT: &str = "\
Na Cl
5.64
1 0 0
0 1 0
0 0 1
1 1
Direct
0 0 0
0.5 0.5 0.5
";

const BROKEN: &str = "broken\nnot-a-number\n";

/// Test helper to lay out a fixture tree with one file per directory
fn create_fixture_tree(root: &Path) {
    for (i, dir) in FIXTURE_DIRNAMES.iter().enumerate() {
        let dir = root.join(dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("POSCAR-{:03}", i)), ROCKSALT).unwrap();
    }
}

#[test]
fn test_all_filenames() {
    let root = tempdir().unwrap();
    create_fixture_tree(root.path());
    fs::write(root.path().join("cubic").join("POSCAR-000-b"), ROCKSALT).unwrap();

    let config = FixtureConfig::new(root.path());
    let filenames = config.all_filenames().unwrap();

    assert_eq!(filenames.len(), FIXTURE_DIRNAMES.len() + 1);
    assert_eq!(filenames[0], root.path().join("cubic").join("POSCAR-000"));
    assert_eq!(filenames[1], root.path().join("cubic").join("POSCAR-000-b"));
    assert!(filenames
        .last()
        .unwrap()
        .starts_with(root.path().join("virtual_structure")));
}

#[test]
fn test_read_vasp() {
    let root = tempdir().unwrap();
    let path = root.path().join("POSCAR");
    fs::write(&path, ROCKSALT).unwrap();

    let cell = read_vasp(&path).unwrap();
    assert_eq!(cell.numbers, vec![11, 17]);
    assert_eq!(cell.lattice[2], [0.0, 0.0, 5.64]);
}

#[test]
fn test_read_all_keeps_going_after_failure() {
    let root = tempdir().unwrap();
    create_fixture_tree(root.path());
    let broken = root.path().join("trigonal").join("POSCAR-broken");
    fs::write(&broken, BROKEN).unwrap();

    let config = FixtureConfig::new(root.path());
    let results = config.read_all().unwrap();
    assert_eq!(results.len(), FIXTURE_DIRNAMES.len() + 1);

    let failures: Vec<_> = results.iter().filter(|(_, r)| r.is_err()).collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, broken);
    assert!(matches!(failures[0].1, Err(FixtureError::Parse { .. })));
}

#[test]
fn test_custom_dirnames() {
    let root = tempdir().unwrap();
    fs::create_dir_all(root.path().join("extra")).unwrap();
    fs::write(root.path().join("extra").join("POSCAR"), ROCKSALT).unwrap();

    let config = FixtureConfig {
        root_data_dir: root.path().to_path_buf(),
        dirnames: vec!["extra".to_string()],
    };
    assert_eq!(config.all_filenames().unwrap().len(), 1);
}
