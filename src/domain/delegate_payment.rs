//! Request and response records of the delegate-payment operation.

use crate::domain::address::Address;
use crate::domain::allowance::Allowance;
use crate::domain::payment_method::PaymentMethodCard;
use crate::domain::record::{Fields, Record, timestamp, unsigned, wire_enum};
use crate::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

wire_enum! {
    pub enum RiskSignalType {
        CardTesting => "card_testing",
    }
}

wire_enum! {
    pub enum RiskAction {
        Blocked => "blocked",
        ManualReview => "manual_review",
        Authorized => "authorized",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct RiskSignal {
    r#type: RiskSignalType,
    score: u64,
    action: RiskAction,
}

impl RiskSignal {
    pub fn r#type(&self) -> RiskSignalType {
        self.r#type
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn action(&self) -> RiskAction {
        self.action
    }
}

impl Record for RiskSignal {
    fn from_fields(fields: &Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            r#type: fields.required_enum("type")?,
            score: fields.required_with("score", unsigned)?,
            action: fields.required_enum("action")?,
        })
    }
}

impl TryFrom<Value> for RiskSignal {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::validate(&value)
    }
}

/// A request to delegate a card for a single, bounded purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct DelegatePaymentRequest {
    payment_method: PaymentMethodCard,
    allowance: Allowance,
    #[serde(skip_serializing_if = "Option::is_none")]
    billing_address: Option<Address>,
    risk_signals: Vec<RiskSignal>,
    metadata: BTreeMap<String, String>,
}

impl DelegatePaymentRequest {
    pub fn payment_method(&self) -> &PaymentMethodCard {
        &self.payment_method
    }

    pub fn allowance(&self) -> &Allowance {
        &self.allowance
    }

    pub fn billing_address(&self) -> Option<&Address> {
        self.billing_address.as_ref()
    }

    pub fn risk_signals(&self) -> &[RiskSignal] {
        &self.risk_signals
    }

    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }
}

impl Record for DelegatePaymentRequest {
    fn from_fields(fields: &Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            payment_method: fields.required_record("payment_method")?,
            allowance: fields.required_record("allowance")?,
            billing_address: fields.optional_record("billing_address")?,
            risk_signals: fields.list_with("risk_signals", true, RiskSignal::validate)?,
            metadata: fields.string_map("metadata", true)?,
        })
    }
}

impl TryFrom<Value> for DelegatePaymentRequest {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::validate(&value)
    }
}

/// The token issued for a successfully delegated card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct DelegatePaymentResponse {
    id: String,
    created: DateTime<Utc>,
    metadata: BTreeMap<String, String>,
}

impl DelegatePaymentResponse {
    pub fn new(
        id: impl Into<String>,
        created: DateTime<Utc>,
        metadata: BTreeMap<String, String>,
    ) -> Self {
        Self {
            id: id.into(),
            created,
            metadata,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }
}

impl Record for DelegatePaymentResponse {
    fn from_fields(fields: &Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            id: fields.required_str("id")?,
            created: fields.required_with("created", timestamp)?,
            metadata: fields.string_map("metadata", true)?,
        })
    }
}

impl TryFrom<Value> for DelegatePaymentResponse {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::validate(&value)
    }
}
