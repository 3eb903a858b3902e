use ddna_core::{Alphabet, DdnaResult, OligoConfig, PalindromeMatch};

use crate::palindrome::palindrome_span_with_config;
use crate::repeats;
use crate::transform;

/// Structural features of a nucleotide sequence, in method form.
///
/// Implemented for `[u8]` and `str`, so it is available on `Vec<u8>`, byte
/// string literals, `String` and `&str`.
///
/// ```
/// use ddna_oligos::NucleotideSequence;
/// use ddna_core::Alphabet;
///
/// let seq = b"ATGAATTC";
/// assert_eq!(seq.reverse_complement(Alphabet::Dna), b"GAATTCAT");
/// assert_eq!(seq.palindrome(Alphabet::Dna), b"GAATTC");
/// assert_eq!("AATT".stretch(), 1);
/// ```
pub trait NucleotideSequence {
    fn as_nucleotides(&self) -> &[u8];

    /// Symbols in reverse order.
    ///
    /// Named `reversed` because `[u8]` already has an in-place `reverse`.
    fn reversed(&self) -> Vec<u8> {
        transform::reverse(self.as_nucleotides())
    }

    fn complement(&self, alphabet: Alphabet) -> Vec<u8> {
        transform::complement(self.as_nucleotides(), alphabet)
    }

    fn reverse_complement(&self, alphabet: Alphabet) -> Vec<u8> {
        transform::reverse_complement(self.as_nucleotides(), alphabet)
    }

    /// Longest region equal to its own reverse complement.
    fn palindrome(&self, alphabet: Alphabet) -> Vec<u8> {
        let seq = self.as_nucleotides();
        self.palindrome_span(&OligoConfig::default().with_alphabet(alphabet))
            .slice(seq)
            .to_vec()
    }

    fn palindrome_span(&self, config: &OligoConfig) -> PalindromeMatch {
        palindrome_span_with_config(self.as_nucleotides(), config)
    }

    /// Longest homopolymer run, minus one.
    fn stretch(&self) -> usize {
        repeats::stretch(self.as_nucleotides())
    }

    /// Longest tandem run of `n`-symbol blocks, minus one.
    fn nrepeats(&self, n: usize) -> DdnaResult<usize> {
        repeats::nrepeats(self.as_nucleotides(), n)
    }
}

impl NucleotideSequence for [u8] {
    fn as_nucleotides(&self) -> &[u8] {
        self
    }
}

impl NucleotideSequence for str {
    fn as_nucleotides(&self) -> &[u8] {
        self.as_bytes()
    }
}
