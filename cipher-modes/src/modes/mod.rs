//! Cipher modes implementation

use std::fmt;
use std::str::FromStr;

use crate::error::CipherModeError;

pub mod cbc;
pub mod ecb;
pub mod text;

/// Main struct for cipher modes
pub struct CipherModes;

/// Chaining mode selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Ecb,
    Cbc,
}

impl FromStr for Mode {
    type Err = CipherModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ecb" => Ok(Mode::Ecb),
            "cbc" => Ok(Mode::Cbc),
            _ => Err(CipherModeError::UnsupportedModeError(s.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Ecb => f.write_str("ecb"),
            Mode::Cbc => f.write_str("cbc"),
        }
    }
}
