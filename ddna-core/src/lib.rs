#![deny(unsafe_code)]

//! Core types for designer-dna.
//!
//! - `alphabet` - DNA and RNA complement tables
//! - `buffer` - owned working copies of input sequences
//! - `config` - analysis options, parsed from TOML
//! - `models` - result types such as [`PalindromeMatch`]
//! - `errors` - the shared error type

pub mod alphabet;
pub mod buffer;
pub mod config;
pub mod errors;
pub mod models;

// re-exports
pub use alphabet::{Alphabet, ComplementTable, DNA_COMPLEMENT_TABLE, RNA_COMPLEMENT_TABLE};
pub use buffer::SequenceBuffer;
pub use config::{CaseMode, OligoConfig};
pub use errors::{DdnaError, DdnaResult};
pub use models::PalindromeMatch;
