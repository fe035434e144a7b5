use serde::{Deserialize, Serialize};

use super::null_as_default;

const MAX_BANK_CODE_DIGITS: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ispb: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "fullName", default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: u32,
}

/// COMPE code as typed by the user: one to three ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankCode(String);

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BankCodeError {
    #[error("bank code must contain only numeric digits")]
    NotNumeric,
    #[error("bank code must have up to 3 digits")]
    TooLong,
}

impl BankCode {
    pub fn parse(code: impl Into<String>) -> Result<Self, BankCodeError> {
        let code = code.into();
        if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BankCodeError::NotNumeric);
        }
        if code.len() > MAX_BANK_CODE_DIGITS {
            return Err(BankCodeError::TooLong);
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BankCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable, so banks sharing a code keep their upstream order.
pub fn sort_by_code(banks: &mut [Bank]) {
    banks.sort_by_key(|bank| bank.code);
}
