//! Integration tests for the public oligo analysis API.
//!
//! These run a handful of realistic primer-like sequences through every
//! operation, the way a primer-design tool would consume the crate.
//! Edge cases for each operation live next to the implementation.

use ddna_core::{Alphabet, CaseMode, DdnaError, OligoConfig};
use ddna_oligos::{
    NucleotideSequence, complement, nrepeats, nrepeats_with_config, palindrome,
    palindrome_span_with_config, reverse, reverse_complement, stretch, stretch_with_config,
};
use pretty_assertions::assert_eq;

/// EcoRI-flanked primer with a poly-A tail.
const PRIMER: &[u8] = b"CCGGAATTCTTTTTGCAGCAGCAG";

#[test]
fn test_primer_features() {
    assert_eq!(
        reverse_complement(PRIMER, true),
        b"CTGCTGCTGCAAAAAGAATTCCGG".to_vec()
    );
    assert_eq!(reverse_complement(PRIMER, true), reverse(&complement(PRIMER, true)));
    assert_eq!(palindrome(PRIMER, true), b"GAATTC".to_vec());
    assert_eq!(stretch(PRIMER), 4);
    assert_eq!(nrepeats(PRIMER, 3).unwrap(), 2);
}

#[test]
fn test_empty_input_is_neutral() {
    let empty: &[u8] = b"";
    assert_eq!(reverse(empty), Vec::<u8>::new());
    assert_eq!(complement(empty, false), Vec::<u8>::new());
    assert_eq!(reverse_complement(empty, true), Vec::<u8>::new());
    assert_eq!(palindrome(empty, true), Vec::<u8>::new());
    assert_eq!(stretch(empty), 0);
    assert_eq!(nrepeats(empty, 3).unwrap(), 0);
}

#[test]
fn test_invalid_period_is_reported() {
    let err = nrepeats(PRIMER, 0).unwrap_err();
    assert!(matches!(err, DdnaError::InvalidArgument(_)));
    assert_eq!(err.to_string(), "Invalid argument: repeat period must be at least 1, got 0");
}

#[test]
fn test_config_driven_analysis() {
    let config: OligoConfig = r#"
        alphabet = "rna"
        case_mode = "insensitive"
    "#
    .parse()
    .expect("Failed to parse config");

    let seq = b"ggaauuccaaaa";
    let span = palindrome_span_with_config(seq, &config);
    assert_eq!(span.slice(seq), b"ggaauucc");
    assert_eq!(stretch_with_config(b"aAaA", &config), 3);
    assert_eq!(nrepeats_with_config(b"auAUaU", 2, &config).unwrap(), 2);
}

#[test]
fn test_trait_matches_free_functions() {
    let seq = PRIMER.to_vec();
    assert_eq!(seq.reversed(), reverse(PRIMER));
    assert_eq!(seq.complement(Alphabet::Rna), complement(PRIMER, false));
    assert_eq!(seq.reverse_complement(Alphabet::Dna), reverse_complement(PRIMER, true));
    assert_eq!(seq.palindrome(Alphabet::Dna), palindrome(PRIMER, true));
    assert_eq!(seq.stretch(), stretch(PRIMER));
    assert_eq!(seq.nrepeats(3).unwrap(), nrepeats(PRIMER, 3).unwrap());

    let config = OligoConfig::dna().with_case_mode(CaseMode::Sensitive);
    assert_eq!(seq.palindrome_span(&config).len(), 6);
}
