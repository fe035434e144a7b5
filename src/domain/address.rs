use serde::{Deserialize, Serialize};

use super::null_as_default;

const CEP_DIGITS: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    #[serde(rename = "cep", default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub neighborhood: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub street: String,
    #[serde(rename = "service", default, deserialize_with = "null_as_default")]
    pub source_service: String,
}

/// Brazilian postal code normalized to its eight digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cep(String);

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid CEP: must be exactly 8 digits")]
pub struct CepError;

impl Cep {
    /// Drops every non-digit (so `01001-000` is accepted) before checking length.
    pub fn parse(input: &str) -> Result<Self, CepError> {
        let digits: String = input.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != CEP_DIGITS {
            return Err(CepError);
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Cep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
