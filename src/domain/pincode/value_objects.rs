use crate::domain::distance::errors::DomainError;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

lazy_static! {
    static ref PIN_CODE_REGEX: regex::Regex = regex::Regex::new(r"^\d{6}$").unwrap();
}

/// A six digit Indian postal index number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
pub struct PinCode {
    #[validate(regex(path = *PIN_CODE_REGEX))]
    pub value: String,
}

impl PinCode {
    pub fn new(value: String) -> Result<Self, validator::ValidationErrors> {
        let pin_code = Self { value };
        pin_code.validate()?;
        Ok(pin_code)
    }

    /// Parses user input the way the web form does: every non-digit is dropped
    /// before the length check, so `"221 010"` and `"221-010"` are accepted.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if raw.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Both pincodes are required".into(),
            ));
        }
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        Self::new(digits).map_err(|_| {
            DomainError::ValidationError(format!("Pincode must be 6 digits: {}", raw.trim()))
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for PinCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
