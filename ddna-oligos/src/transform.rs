//! Reverse, complement, and reverse complement of nucleotide sequences.
//!
//! The value-returning functions copy their input into a [`SequenceBuffer`]
//! and run the matching `*_in_place` kernel on it. Callers that already own a
//! mutable buffer can use the kernels directly.

use log::debug;

use ddna_core::{Alphabet, DdnaError, DdnaResult, SequenceBuffer};

/// Reverse the order of symbols.
pub fn reverse(seq: &[u8]) -> Vec<u8> {
    let mut buffer = SequenceBuffer::new(seq);
    reverse_in_place(&mut buffer);
    buffer.into_inner()
}

/// Replace each symbol with its complement, keeping the order.
///
/// ```
/// use ddna_oligos::complement;
///
/// assert_eq!(complement(b"GATC", true), b"CTAG");
/// assert_eq!(complement(b"GATC", false), b"CUAG");
/// ```
pub fn complement(seq: &[u8], alphabet: impl Into<Alphabet>) -> Vec<u8> {
    let mut buffer = SequenceBuffer::new(seq);
    complement_in_place(&mut buffer, alphabet);
    buffer.into_inner()
}

/// The complement read in reverse order, i.e. the opposing strand.
///
/// Equal to `reverse(&complement(seq, alphabet))`, computed in one pass.
pub fn reverse_complement(seq: &[u8], alphabet: impl Into<Alphabet>) -> Vec<u8> {
    let mut buffer = SequenceBuffer::new(seq);
    reverse_complement_in_place(&mut buffer, alphabet);
    buffer.into_inner()
}

#[inline]
pub fn reverse_in_place(seq: &mut [u8]) {
    seq.reverse();
}

pub fn complement_in_place(seq: &mut [u8], alphabet: impl Into<Alphabet>) {
    let table = alphabet.into().table();
    for base in seq.iter_mut() {
        *base = table.complement(*base);
    }
}

/// Fused reverse complement: complement both ends, swap them, and move
/// inwards. An odd middle symbol is complemented where it stands.
pub fn reverse_complement_in_place(seq: &mut [u8], alphabet: impl Into<Alphabet>) {
    let table = alphabet.into().table();
    let n = seq.len();
    let half = n / 2;

    for left in 0..half {
        let right = n - 1 - left;
        let (l, r) = (seq[left], seq[right]);
        seq[left] = table.complement(r);
        seq[right] = table.complement(l);
    }

    if n % 2 == 1 {
        seq[half] = table.complement(seq[half]);
    }
}

/// Borrow the bytes of `seq`, rejecting symbols wider than one byte.
fn ascii_bytes(seq: &str) -> DdnaResult<&[u8]> {
    if !seq.is_ascii() {
        debug!("Rejecting non-ASCII sequence of {} bytes", seq.len());
        return Err(DdnaError::InvalidArgument(
            "sequence contains non-ASCII symbols".to_string(),
        ));
    }
    Ok(seq.as_bytes())
}

fn into_string(bytes: Vec<u8>) -> DdnaResult<String> {
    String::from_utf8(bytes).map_err(|e| DdnaError::InvalidArgument(e.to_string()))
}

/// [`reverse`] for `&str` input.
///
/// Returns [`DdnaError::InvalidArgument`] if `seq` is not ASCII.
pub fn reverse_str(seq: &str) -> DdnaResult<String> {
    into_string(reverse(ascii_bytes(seq)?))
}

/// [`complement`] for `&str` input.
///
/// Returns [`DdnaError::InvalidArgument`] if `seq` is not ASCII.
pub fn complement_str(seq: &str, alphabet: impl Into<Alphabet>) -> DdnaResult<String> {
    into_string(complement(ascii_bytes(seq)?, alphabet))
}

/// [`reverse_complement`] for `&str` input.
///
/// Returns [`DdnaError::InvalidArgument`] if `seq` is not ASCII.
pub fn reverse_complement_str(seq: &str, alphabet: impl Into<Alphabet>) -> DdnaResult<String> {
    into_string(reverse_complement(ascii_bytes(seq)?, alphabet))
}
