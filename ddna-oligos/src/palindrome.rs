//! Longest hairpin-forming region of a sequence.
//!
//! A hairpin region is a substring that equals its own reverse complement,
//! so `GAATTC` qualifies while the literal palindrome `GAAG` does not. The
//! search expands outwards from every center, checking both
//! `seq[left] == comp[right]` and `seq[right] == comp[left]`: complementing
//! is not an involution for every byte (RNA bases under the DNA table,
//! lowercase letters), so one direction does not imply the other.
//!
//! Expansion from each center is bounded by the remaining sequence, which
//! makes the search quadratic in the worst case (e.g. `ATATAT...`). Callers
//! scanning very long inputs should bound their length.

use log::trace;

use ddna_core::{Alphabet, OligoConfig, PalindromeMatch, SequenceBuffer};

use crate::transform::complement_in_place;

/// Longest reverse-complement palindrome in `seq`, or an empty vector if
/// there is none. Ties go to the leftmost region.
///
/// ```
/// use ddna_oligos::palindrome;
///
/// assert_eq!(palindrome(b"GATATG", true), b"ATAT");
/// assert_eq!(palindrome(b"AAAA", true), b"");
/// ```
pub fn palindrome(seq: &[u8], alphabet: impl Into<Alphabet>) -> Vec<u8> {
    let span = palindrome_span(seq, alphabet);
    span.slice(seq).to_vec()
}

/// Alias of [`palindrome`].
pub fn manacher(seq: &[u8], alphabet: impl Into<Alphabet>) -> Vec<u8> {
    palindrome(seq, alphabet)
}

/// Span of the longest reverse-complement palindrome in `seq`, using the
/// default options for everything but the alphabet.
pub fn palindrome_span(seq: &[u8], alphabet: impl Into<Alphabet>) -> PalindromeMatch {
    let config = OligoConfig::default().with_alphabet(alphabet.into());
    palindrome_span_with_config(seq, &config)
}

/// Span of the longest reverse-complement palindrome in `seq`.
///
/// Even-length centers are always searched. When `config.odd_centers` is
/// set, a single self-complementary base (such as `N`, `S` or `W`) may also
/// sit at the center, so `ANT` is found whole. Such a center only counts once
/// it expands to at least three bases: `AN` has no hairpin.
pub fn palindrome_span_with_config(seq: &[u8], config: &OligoConfig) -> PalindromeMatch {
    let buffer = SequenceBuffer::with_case_mode(seq, config.case_mode);
    let n = buffer.len();
    if n < 2 {
        return PalindromeMatch::empty();
    }

    let mut comp = buffer.clone();
    complement_in_place(&mut comp, config.alphabet);

    let mut best = PalindromeMatch::empty();
    for i in 0..n {
        if config.odd_centers && buffer[i] == comp[i] {
            let span = expand(&buffer, &comp, i, i + 1);
            // a lone base that does not expand is not a hairpin
            if span.len() >= 3 && span.len() > best.len() {
                best = span;
            }
        }

        if i + 1 < n {
            let span = expand(&buffer, &comp, i + 1, i + 1);
            if span.len() > best.len() {
                best = span;
            }
        }
    }

    trace!(
        "longest {} hairpin in {} bp sequence: [{}, {})",
        config.alphabet, n, best.start(), best.end()
    );

    best
}

/// Grow the already matching span `[lo, hi)` one base per side while the
/// outer pair is complementary in both directions.
#[inline]
fn expand(seq: &[u8], comp: &[u8], mut lo: usize, mut hi: usize) -> PalindromeMatch {
    while lo > 0 && hi < seq.len() && seq[lo - 1] == comp[hi] && seq[hi] == comp[lo - 1] {
        lo -= 1;
        hi += 1;
    }
    PalindromeMatch::new(lo, hi)
}
