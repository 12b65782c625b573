//! The card being delegated.
//!
//! Only the `card` payment method exists today. The card number may be a
//! funding PAN or a network token; which one is declared by
//! `card_number_type` and is always required.

use crate::domain::record::{Fields, Record, digits, wire_enum, wire_value};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

wire_enum! {
    pub enum PaymentMethodType {
        Card => "card",
    }
}

wire_enum! {
    pub enum CardNumberType {
        Fpan => "fpan",
        NetworkToken => "network_token",
    }
}

wire_enum! {
    /// Verification checks already run against the card.
    pub enum CardCheck {
        Avs => "avs",
        Cvv => "cvv",
        Ani => "ani",
        Auth0 => "auth0",
    }
}

wire_enum! {
    pub enum CardFundingType {
        Credit => "credit",
        Debit => "debit",
        Prepaid => "prepaid",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct PaymentMethodCard {
    r#type: PaymentMethodType,
    card_number_type: CardNumberType,
    number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    exp_month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exp_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cvc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cryptogram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    eci_value: Option<String>,
    checks_performed: Vec<CardCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    iin: Option<String>,
    display_card_funding_type: CardFundingType,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_wallet_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_last4: Option<String>,
    metadata: BTreeMap<String, String>,
}

fn exp_month(value: &Value) -> Result<String, ValidationError> {
    let month = digits(value, 2, 2)?;
    if month.parse::<u8>().is_ok_and(|m| (1..=12).contains(&m)) {
        Ok(month)
    } else {
        Err(ValidationError::Constraint {
            field: String::new(),
            reason: "must be a month between 01 and 12".to_string(),
        })
    }
}

impl PaymentMethodCard {
    pub fn card_number_type(&self) -> CardNumberType {
        self.card_number_type
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn exp_month(&self) -> Option<&str> {
        self.exp_month.as_deref()
    }

    pub fn exp_year(&self) -> Option<&str> {
        self.exp_year.as_deref()
    }

    pub fn checks_performed(&self) -> &[CardCheck] {
        &self.checks_performed
    }

    pub fn display_card_funding_type(&self) -> CardFundingType {
        self.display_card_funding_type
    }

    pub fn display_last4(&self) -> Option<&str> {
        self.display_last4.as_deref()
    }

    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }
}

impl Record for PaymentMethodCard {
    fn from_fields(fields: &Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            r#type: fields.required_enum("type")?,
            card_number_type: fields.required_enum("card_number_type")?,
            number: fields.required_with("number", |v| digits(v, 12, 19))?,
            exp_month: fields.optional_with("exp_month", exp_month)?,
            exp_year: fields.optional_with("exp_year", |v| digits(v, 4, 4))?,
            name: fields.optional_str("name")?,
            cvc: fields.optional_with("cvc", |v| digits(v, 3, 4))?,
            cryptogram: fields.optional_str("cryptogram")?,
            eci_value: fields.optional_str("eci_value")?,
            checks_performed: fields.list_with("checks_performed", false, wire_value)?,
            iin: fields.optional_with("iin", |v| digits(v, 1, 6))?,
            display_card_funding_type: fields.required_enum("display_card_funding_type")?,
            display_wallet_type: fields.optional_str("display_wallet_type")?,
            display_brand: fields.optional_str("display_brand")?,
            display_last4: fields.optional_with("display_last4", |v| digits(v, 4, 4))?,
            metadata: fields.string_map("metadata", false)?,
        })
    }
}

impl TryFrom<Value> for PaymentMethodCard {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::validate(&value)
    }
}
