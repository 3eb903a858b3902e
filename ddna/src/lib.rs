//! designer-dna: structural features of nucleotide sequences for oligo design.
//!
//! This crate re-exports the workspace crates behind cargo features:
//!
//! - `core` - complement tables, sequence buffers, configuration and errors
//! - `oligos` - reverse complements, hairpin palindromes and repeat runs

#[cfg(feature = "core")]
#[doc(inline)]
pub use ddna_core as core;

#[cfg(feature = "oligos")]
#[doc(inline)]
pub use ddna_oligos as oligos;

#[cfg(feature = "oligos")]
pub mod prelude {
    pub use ddna_core::{Alphabet, CaseMode, DdnaError, DdnaResult, OligoConfig, PalindromeMatch};
    pub use ddna_oligos::NucleotideSequence;
}
