use crate::domain::record::{Fields, Record, wire_enum};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

wire_enum! {
    /// The category of a rejected request.
    ///
    /// Only `InvalidRequest` is ever produced by record validation. The other
    /// categories belong to the layers above it.
    pub enum ErrorResponseType {
        InvalidRequest => "invalid_request",
        RequestNotIdempotent => "request_not_idempotent",
        ProcessingError => "processing_error",
        ServiceUnavailable => "service_unavailable",
    }
}

/// Body of a rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct ErrorResponse {
    r#type: ErrorResponseType,
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    param: Option<String>,
}

impl ErrorResponse {
    pub fn new(
        r#type: ErrorResponseType,
        code: impl Into<String>,
        message: impl Into<String>,
        param: Option<String>,
    ) -> Self {
        Self {
            r#type,
            code: code.into(),
            message: message.into(),
            param,
        }
    }

    pub fn r#type(&self) -> ErrorResponseType {
        self.r#type
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn param(&self) -> Option<&str> {
        self.param.as_deref()
    }
}

impl From<ValidationError> for ErrorResponse {
    fn from(err: ValidationError) -> Self {
        let param = Some(err.param().to_string()).filter(|p| !p.is_empty());
        Self::new(
            ErrorResponseType::InvalidRequest,
            err.code(),
            err.to_string(),
            param,
        )
    }
}

impl Record for ErrorResponse {
    fn from_fields(fields: &Fields<'_>) -> Result<Self, ValidationError> {
        Ok(Self {
            r#type: fields.required_enum("type")?,
            code: fields.required_str("code")?,
            message: fields.required_str("message")?,
            param: fields.optional_str("param")?,
        })
    }
}

impl TryFrom<Value> for ErrorResponse {
    type Error = ValidationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::validate(&value)
    }
}
