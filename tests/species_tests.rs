/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use poscar_rs::atoms::database::{atomic_number_from_symbol, ELEMENT_SYMBOLS};
use poscar_rs::atoms::{expand_species, is_valid_symbol_sequence, resolve_scheme, SpeciesScheme};
use rstest::rstest;

#[test]
fn test_chemical_expansion() {
    assert_eq!(
        expand_species(&[2, 3], Some(&["Fe", "O"][..])),
        vec![26, 26, 8, 8, 8]
    );
}

#[test]
fn test_invalid_symbol_uses_positional() {
    assert_eq!(
        resolve_scheme(&[2, 3], Some(&["Xx", "O"][..])),
        SpeciesScheme::Positional
    );
    assert_eq!(
        expand_species(&[2, 3], Some(&["Xx", "O"][..])),
        vec![1, 1, 2, 2, 2]
    );
}

#[test]
fn test_absent_symbols_use_positional() {
    assert_eq!(expand_species(&[1], None::<&[&str]>), vec![1]);
    assert_eq!(expand_species(&[], None::<&[&str]>), Vec::<i32>::new());
}

#[test]
fn test_symbol_validity_check() {
    assert!(is_valid_symbol_sequence::<&str>(&[]));
    assert!(!is_valid_symbol_sequence(&["H", "Zz"]));
    assert!(is_valid_symbol_sequence(&ELEMENT_SYMBOLS));
}

#[rstest]
#[case(&[4], &["Si"])]
#[case(&[2, 3], &["Fe", "O"])]
#[case(&[1, 0, 6], &["Ba", "Ti", "O"])]
#[case(&[3, 1, 2, 5], &["Li", "Mn", "P", "O"])]
fn test_blocks_follow_counts(#[case] counts: &[usize], #[case] symbols: &[&str]) {
    for scheme_symbols in [Some(symbols), None] {
        let numbers = expand_species(counts, scheme_symbols);
        assert_eq!(numbers.len(), counts.iter().sum::<usize>());

        let mut offset = 0;
        for (block, &count) in counts.iter().enumerate() {
            let expected = match scheme_symbols {
                Some(s) => atomic_number_from_symbol(s[block]).unwrap(),
                None => block as i32 + 1,
            };
            assert!(numbers[offset..offset + count].iter().all(|&z| z == expected));
            offset += count;
        }
    }
}
