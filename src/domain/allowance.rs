use crate::domain::amount::Amount;
use crate::domain::currency::Currency;
use crate::domain::normalize::normalized;
use crate::domain::record::{Fields, Record, timestamp, wire_enum};
use crate::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

wire_enum! {
    pub enum AllowanceReason {
        OneTime => "one_time",
    }
}

/// The spending limit a delegated card is scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct Allowance {
    reason: AllowanceReason,
    max_amount: Amount,
    currency: Currency,
    checkout_session_id: String,
    merchant_id: String,
    expires_at: DateTime<Utc>,
}

impl Allowance {
    pub fn reason(&self) -> AllowanceReason {
        self.reason
    }

    pub fn max_amount(&self) -> Amount {
        self.max_amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn checkout_session_id(&self) -> &str {
        &self.checkout_session_id
    }

    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}

impl Record for Allowance {
    fn from_fields(fields: &Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            reason: fields.required_enum("reason")?,
            max_amount: fields.required_with("max_amount", Amount::parse)?,
            currency: fields.required_with("currency", normalized)?,
            checkout_session_id: fields.required_str("checkout_session_id")?,
            merchant_id: fields.required_str("merchant_id")?,
            expires_at: fields.required_with("expires_at", timestamp)?,
        })
    }
}

impl TryFrom<Value> for Allowance {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::validate(&value)
    }
}
