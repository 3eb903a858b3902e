use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use crate::errors::DdnaError;

/// Nucleotide alphabet selecting which complement table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    /// A, C, G, T (+ IUPAC ambiguity codes)
    #[default]
    Dna,
    /// A, C, G, U (+ IUPAC ambiguity codes)
    Rna,
}

impl Alphabet {
    /// Convert the `dna: bool` flag used throughout the public API.
    pub fn from_dna_flag(dna: bool) -> Self {
        if dna { Alphabet::Dna } else { Alphabet::Rna }
    }

    pub fn is_dna(&self) -> bool {
        matches!(self, Alphabet::Dna)
    }

    /// Complement table for this alphabet.
    pub fn table(&self) -> &'static ComplementTable {
        match self {
            Alphabet::Dna => &DNA_COMPLEMENT_TABLE,
            Alphabet::Rna => &RNA_COMPLEMENT_TABLE,
        }
    }
}

impl From<bool> for Alphabet {
    fn from(dna: bool) -> Self {
        Alphabet::from_dna_flag(dna)
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Alphabet::Dna => write!(f, "dna"),
            Alphabet::Rna => write!(f, "rna"),
        }
    }
}

impl FromStr for Alphabet {
    type Err = DdnaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dna" => Ok(Alphabet::Dna),
            "rna" => Ok(Alphabet::Rna),
            other => Err(DdnaError::InvalidConfig(format!(
                "unknown alphabet `{other}`, expected `dna` or `rna`"
            ))),
        }
    }
}

/// A 256-entry byte to byte complement mapping.
///
/// Bytes outside the IUPAC nucleotide alphabet map to themselves. Lowercase
/// letters map to the uppercase complement.
#[derive(Debug, PartialEq, Eq)]
pub struct ComplementTable {
    pub alphabet: Alphabet,
    pub complement_array: &'static [u8; 256],
}

impl ComplementTable {
    #[inline]
    pub fn complement(&self, base: u8) -> u8 {
        self.complement_array[base as usize]
    }

    /// True when `base` is its own complement under this table (N, S, W, `-`, ...).
    #[inline]
    pub fn is_self_complementary(&self, base: u8) -> bool {
        self.complement(base) == base
    }
}

/// Fill both cases of `from` with the uppercase `to`.
const fn pair(mut arr: [u8; 256], from: u8, to: u8) -> [u8; 256] {
    arr[from.to_ascii_uppercase() as usize] = to;
    arr[from.to_ascii_lowercase() as usize] = to;
    arr
}

/// IUPAC complements shared by the DNA and RNA tables. Everything except the
/// partner of `A` is the same for both alphabets.
const fn iupac_complements(a_partner: u8) -> [u8; 256] {
    let mut arr = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        arr[i] = i as u8;
        i += 1;
    }

    arr = pair(arr, b'A', a_partner);
    arr = pair(arr, b'T', b'A');
    arr = pair(arr, b'U', b'A');
    arr = pair(arr, b'C', b'G');
    arr = pair(arr, b'G', b'C');
    arr = pair(arr, b'N', b'N');
    // two-base ambiguity codes
    arr = pair(arr, b'R', b'Y'); // A or G
    arr = pair(arr, b'Y', b'R'); // C or T
    arr = pair(arr, b'S', b'S'); // G or C
    arr = pair(arr, b'W', b'W'); // A or T
    arr = pair(arr, b'K', b'M'); // G or T
    arr = pair(arr, b'M', b'K'); // A or C
    // three-base ambiguity codes
    arr = pair(arr, b'B', b'V'); // not A
    arr = pair(arr, b'V', b'B'); // not T
    arr = pair(arr, b'D', b'H'); // not C
    arr = pair(arr, b'H', b'D'); // not G
    arr
}

const DNA_COMPLEMENT_ARRAY: [u8; 256] = iupac_complements(b'T');

const RNA_COMPLEMENT_ARRAY: [u8; 256] = iupac_complements(b'U');

pub static DNA_COMPLEMENT_TABLE: ComplementTable = ComplementTable {
    alphabet: Alphabet::Dna,
    complement_array: &DNA_COMPLEMENT_ARRAY,
};

pub static RNA_COMPLEMENT_TABLE: ComplementTable = ComplementTable {
    alphabet: Alphabet::Rna,
    complement_array: &RNA_COMPLEMENT_ARRAY,
};
