use crate::domain::normalize::Normalize;
use crate::error::ValidationError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// ISO 4217 currency code, stored lowercase (`"usd"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Normalize<Currency> for Currency {
    fn normalize(self) -> Result<Currency, ValidationError> {
        Ok(self)
    }
}

impl Normalize<Currency> for &str {
    fn normalize(self) -> Result<Currency, ValidationError> {
        if self.len() == 3 && self.bytes().all(|b| b.is_ascii_alphabetic()) {
            Ok(Currency(self.to_ascii_lowercase()))
        } else {
            Err(ValidationError::Constraint {
                field: String::new(),
                reason: format!("{self:?} is not a three-letter ISO 4217 code"),
            })
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Normalize::<Self>::normalize(raw.as_str()).map_err(serde::de::Error::custom)
    }
}
