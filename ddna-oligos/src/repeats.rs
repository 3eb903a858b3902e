//! Homopolymer and tandem-repeat run lengths.
//!
//! Both functions count *extra* repeats beyond the first occurrence, so a run
//! of four `A`s scores 3 and a sequence without any repeat scores 0.

use log::debug;

use ddna_core::{DdnaError, DdnaResult, OligoConfig, SequenceBuffer};

/// Longest homopolymer run in `seq`, minus one.
///
/// ```
/// use ddna_oligos::stretch;
///
/// assert_eq!(stretch(b"AAAAACCCCCCGGGGGGG"), 6);
/// assert_eq!(stretch(b"ATGC"), 0);
/// assert_eq!(stretch(b""), 0);
/// ```
pub fn stretch(seq: &[u8]) -> usize {
    let mut best = 0;
    let mut run = 0;
    for pair in seq.windows(2) {
        if pair[0] == pair[1] {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }
    best
}

/// [`stretch`] honoring the configured case mode.
pub fn stretch_with_config(seq: &[u8], config: &OligoConfig) -> usize {
    let buffer = SequenceBuffer::with_case_mode(seq, config.case_mode);
    stretch(&buffer)
}

/// Longest run of a repeated block of `n` symbols, minus one.
///
/// Every phase `k` in `0..n` is scanned separately: the blocks starting at
/// `k`, `k + n`, `k + 2n`, ... are compared with the block before them. A
/// trailing block shorter than `n` is ignored. `nrepeats(seq, 1)` equals
/// `stretch(seq)`.
///
/// Block comparisons read a prefix count of `seq[i] != seq[i + n]`, so each
/// one is constant time and the whole scan is linear in `seq.len()` for any `n`.
///
/// Returns [`DdnaError::InvalidArgument`] when `n` is zero.
///
/// ```
/// use ddna_oligos::nrepeats;
///
/// assert_eq!(nrepeats(b"ACAACAACA", 3).unwrap(), 2);
/// assert_eq!(nrepeats(b"AAAA", 2).unwrap(), 1);
/// assert!(nrepeats(b"AAAA", 0).is_err());
/// ```
pub fn nrepeats(seq: &[u8], n: usize) -> DdnaResult<usize> {
    if n < 1 {
        debug!("Rejecting repeat period {n} for a {} bp sequence", seq.len());
        return Err(DdnaError::InvalidArgument(format!(
            "repeat period must be at least 1, got {n}"
        )));
    }

    let len = seq.len();
    if len < 2 * n {
        return Ok(0);
    }

    // mismatches[i] counts positions p < i where seq[p] != seq[p + n]
    let mut mismatches = Vec::with_capacity(len - n + 1);
    mismatches.push(0usize);
    for (a, b) in seq.iter().zip(&seq[n..]) {
        let last = mismatches[mismatches.len() - 1];
        mismatches.push(last + usize::from(a != b));
    }

    let mut best = 0;
    for phase in 0..n {
        let mut count = 0;
        // block at `start` equals the block before it iff no mismatch in [start - n, start)
        let mut start = phase + n;
        while start + n <= len {
            if mismatches[start] == mismatches[start - n] {
                count += 1;
                best = best.max(count);
            } else {
                count = 0;
            }
            start += n;
        }
    }

    Ok(best)
}

/// [`nrepeats`] honoring the configured case mode.
pub fn nrepeats_with_config(seq: &[u8], n: usize, config: &OligoConfig) -> DdnaResult<usize> {
    let buffer = SequenceBuffer::with_case_mode(seq, config.case_mode);
    nrepeats(&buffer, n)
}
