#![deny(unsafe_code)]

//! Sequence features used to flag secondary-structure and repeat risk in
//! oligo and primer design.
//!
//! - `transform` - reverse, complement and reverse complement
//! - `palindrome` - longest region equal to its own reverse complement (hairpins)
//! - `repeats` - homopolymer and tandem-repeat run lengths
//!
//! Every function is a pure transform of its input: the input is copied into
//! an owned buffer, the result is returned, and nothing is kept between calls.
//!
//! # Example
//!
//! ```
//! use ddna_oligos::{nrepeats, palindrome, reverse_complement, stretch};
//!
//! let oligo = b"ATGAATTCAAAA";
//!
//! assert_eq!(reverse_complement(oligo, true), b"TTTTGAATTCAT");
//! assert_eq!(palindrome(oligo, true), b"TGAATTCA");
//! assert_eq!(stretch(oligo), 3);
//! assert_eq!(nrepeats(oligo, 2).unwrap(), 1);
//! ```

pub mod palindrome;
pub mod repeats;
pub mod sequence;
pub mod transform;

// re-exports
pub use palindrome::{manacher, palindrome, palindrome_span, palindrome_span_with_config};
pub use repeats::{nrepeats, nrepeats_with_config, stretch, stretch_with_config};
pub use sequence::NucleotideSequence;
pub use transform::{
    complement, complement_in_place, complement_str, reverse, reverse_complement,
    reverse_complement_in_place, reverse_complement_str, reverse_in_place, reverse_str,
};
