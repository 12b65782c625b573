use crate::domain::address::Address;
use crate::domain::delegate_payment::{DelegatePaymentRequest, DelegatePaymentResponse};
use crate::domain::error_response::ErrorResponse;
use crate::domain::record::Record;
use crate::error::Result;
use serde::Serialize;
use serde_json::Value;

/// The record types that can be validated by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RecordKind {
    Address,
    ErrorResponse,
    DelegatePaymentRequest,
    DelegatePaymentResponse,
}

impl RecordKind {
    /// Validates `value` as this kind and returns its canonical JSON form.
    pub fn canonicalize(self, value: &Value) -> Result<Value> {
        match self {
            Self::Address => canonical::<Address>(value),
            Self::ErrorResponse => canonical::<ErrorResponse>(value),
            Self::DelegatePaymentRequest => canonical::<DelegatePaymentRequest>(value),
            Self::DelegatePaymentResponse => canonical::<DelegatePaymentResponse>(value),
        }
    }
}

fn canonical<T: Record + Serialize>(value: &Value) -> Result<Value> {
    let record = T::validate(value)?;
    Ok(serde_json::to_value(record)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AcpError;
    use serde_json::json;

    #[test]
    fn test_canonicalize_address() {
        let value = json!({
            "name": "A",
            "line_one": "1 Main",
            "line_two": null,
            "city": "SF",
            "state": "CA",
            "country": "us",
            "postal_code": "94105"
        });
        let canonical = RecordKind::Address.canonicalize(&value).unwrap();
        assert_eq!(canonical["country"], "US");
        assert!(canonical.get("line_two").is_none());
    }

    #[test]
    fn test_canonicalize_reports_validation_error() {
        let err = RecordKind::ErrorResponse
            .canonicalize(&json!({ "type": "nope", "code": "c", "message": "m" }))
            .unwrap_err();
        assert!(matches!(err, AcpError::Validation(e) if e.param() == "type"));
    }
}
