use crate::domain::country::CountryCode;
use crate::domain::normalize::{Normalize, normalized};
use crate::domain::record::{Fields, Record};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A postal address attached to a transaction.
///
/// `country` is always held in canonical uppercase form, whether it was
/// supplied as a raw string or as a [`CountryCode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct Address {
    name: String,
    line_one: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    line_two: Option<String>,
    city: String,
    state: String,
    country: CountryCode,
    postal_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number: Option<String>,
}

impl Address {
    /// Builds an address from already-separated parts.
    ///
    /// `country` may be a `CountryCode` or any casing of its string form.
    pub fn new(
        name: impl Into<String>,
        line_one: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        country: impl Normalize<CountryCode>,
        postal_code: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: name.into(),
            line_one: line_one.into(),
            line_two: None,
            city: city.into(),
            state: state.into(),
            country: country.normalize().map_err(|e| e.nested_under("country"))?,
            postal_code: postal_code.into(),
            phone_number: None,
        })
    }

    pub fn with_line_two(self, line_two: impl Into<String>) -> Self {
        Self {
            line_two: Some(line_two.into()),
            ..self
        }
    }

    pub fn with_phone_number(self, phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: Some(phone_number.into()),
            ..self
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn line_one(&self) -> &str {
        &self.line_one
    }

    pub fn line_two(&self) -> Option<&str> {
        self.line_two.as_deref()
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn country(&self) -> CountryCode {
        self.country
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }
}

impl Record for Address {
    fn from_fields(fields: &Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: fields.required_str("name")?,
            line_one: fields.required_str("line_one")?,
            line_two: fields.optional_str("line_two")?,
            city: fields.required_str("city")?,
            state: fields.required_str("state")?,
            country: fields.required_with("country", normalized)?,
            postal_code: fields.required_str("postal_code")?,
            phone_number: fields.optional_str("phone_number")?,
        })
    }
}

impl TryFrom<Value> for Address {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::validate(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn address_json(country: &str) -> Value {
        json!({
            "name": "Ada Lovelace",
            "line_one": "1 Main St",
            "city": "San Francisco",
            "state": "CA",
            "country": country,
            "postal_code": "94105"
        })
    }

    #[test]
    fn test_country_normalized_from_lowercase() {
        let address = Address::validate(&address_json("us")).unwrap();
        assert_eq!(address.country(), CountryCode::US);
        assert_eq!(serde_json::to_value(&address).unwrap()["country"], "US");
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let address = Address::validate(&address_json("US")).unwrap();
        assert_eq!(address.line_two(), None);
        assert_eq!(address.phone_number(), None);
    }

    #[test]
    fn test_missing_required_field_named() {
        for field in ["name", "line_one", "city", "state", "country", "postal_code"] {
            let mut body = address_json("US");
            body.as_object_mut().unwrap().remove(field);
            let err = Address::validate(&body).unwrap_err();
            assert_eq!(
                err,
                ValidationError::MissingField {
                    field: field.to_string()
                }
            );
        }
    }

    #[test]
    fn test_unknown_country_rejected() {
        let err = Address::validate(&address_json("zz")).unwrap_err();
        assert_eq!(err.param(), "country");
        assert!(matches!(err, ValidationError::NotInEnumeration { .. }));
    }

    #[test]
    fn test_typed_and_raw_country_agree() {
        let typed = Address::new("A", "1 Main", "SF", "CA", CountryCode::US, "94105").unwrap();
        let raw = Address::new("A", "1 Main", "SF", "CA", "us", "94105").unwrap();
        assert_eq!(typed, raw);
    }

    #[test]
    fn test_builder_country_error_is_scoped() {
        let err = Address::new("A", "1 Main", "SF", "CA", "xx", "94105").unwrap_err();
        assert_eq!(err.param(), "country");
    }

    #[test]
    fn test_with_optional_parts() {
        let address = Address::new("A", "1 Main", "SF", "CA", "us", "94105")
            .unwrap()
            .with_line_two("Apt 2")
            .with_phone_number("+15555550100");
        assert_eq!(address.line_two(), Some("Apt 2"));
        assert_eq!(address.phone_number(), Some("+15555550100"));
    }
}
