use crate::error::ValidationError;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// A strictly positive monetary amount.
///
/// Held as an arbitrary-precision `Decimal` and always written to the wire as
/// a decimal string, so `19.99` is emitted as `"19.99"` and read back exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(ValidationError::Constraint {
                field: String::new(),
                reason: "amount must be positive".to_string(),
            })
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Leaf parser for JSON input.
    ///
    /// Accepts a decimal string or a JSON integer. JSON floats are rejected
    /// since they may already have lost precision in transit.
    pub fn parse(value: &Value) -> Result<Self, ValidationError> {
        let invalid_type = || ValidationError::InvalidType {
            field: String::new(),
            expected: "decimal string or integer",
        };
        let decimal = match value {
            Value::String(raw) => {
                Decimal::from_str_exact(raw.trim()).map_err(|e| ValidationError::Constraint {
                    field: String::new(),
                    reason: format!("{raw:?} is not a decimal number: {e}"),
                })?
            }
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Decimal::from(i)
                } else if let Some(u) = n.as_u64() {
                    Decimal::from(u)
                } else {
                    return Err(invalid_type());
                }
            }
            _ => return Err(invalid_type()),
        };
        Self::new(decimal)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = ValidationError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}
