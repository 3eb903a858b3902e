use std::fmt::Display;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::errors::{DdnaError, DdnaResult};

/// How letter case is treated when symbols are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    /// Bytes are compared exactly as given. Complement tables still fold
    /// lowercase input to an uppercase complement.
    #[default]
    Sensitive,
    /// Input is uppercased before any comparison; results are uppercase.
    Insensitive,
}

impl Display for CaseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaseMode::Sensitive => write!(f, "sensitive"),
            CaseMode::Insensitive => write!(f, "insensitive"),
        }
    }
}

impl FromStr for CaseMode {
    type Err = DdnaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sensitive" => Ok(CaseMode::Sensitive),
            "insensitive" => Ok(CaseMode::Insensitive),
            other => Err(DdnaError::InvalidConfig(format!(
                "unknown case mode `{other}`, expected `sensitive` or `insensitive`"
            ))),
        }
    }
}

/// Options shared by the sequence analysis functions.
///
/// Every field has a default, so an empty TOML document is a valid config:
///
/// ```toml
/// alphabet = "rna"
/// case_mode = "insensitive"
/// odd_centers = false
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OligoConfig {
    pub alphabet: Alphabet,
    pub case_mode: CaseMode,
    /// Also expand hairpins around a single self-complementary base (e.g. `ANT`).
    pub odd_centers: bool,
}

impl Default for OligoConfig {
    fn default() -> Self {
        OligoConfig {
            alphabet: Alphabet::Dna,
            case_mode: CaseMode::Sensitive,
            odd_centers: true,
        }
    }
}

impl OligoConfig {
    pub fn dna() -> Self {
        OligoConfig::default()
    }

    pub fn rna() -> Self {
        OligoConfig {
            alphabet: Alphabet::Rna,
            ..OligoConfig::default()
        }
    }

    pub fn with_alphabet(self, alphabet: Alphabet) -> Self {
        OligoConfig { alphabet, ..self }
    }

    pub fn with_case_mode(self, case_mode: CaseMode) -> Self {
        OligoConfig { case_mode, ..self }
    }

    pub fn with_odd_centers(self, odd_centers: bool) -> Self {
        OligoConfig {
            odd_centers,
            ..self
        }
    }
}

impl FromStr for OligoConfig {
    type Err = DdnaError;

    fn from_str(s: &str) -> DdnaResult<Self> {
        let config: OligoConfig = toml::from_str(s)?;
        debug!(
            "Parsed oligo config: alphabet={}, case_mode={}, odd_centers={}",
            config.alphabet, config.case_mode, config.odd_centers
        );
        Ok(config)
    }
}
