use thiserror::Error;

/// A field-scoped validation failure.
///
/// Every variant carries the dotted path of the offending field so the
/// failure can be reported back as the `param` of an `invalid_request` error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid type for {field}: expected {expected}")]
    InvalidType {
        field: String,
        expected: &'static str,
    },

    #[error("Invalid value for {field}: {value:?} is not one of the allowed values")]
    NotInEnumeration { field: String, value: String },

    #[error("Invalid value for {field}: {reason}")]
    Constraint { field: String, reason: String },

    #[error("Expected a JSON object")]
    NotAnObject { field: String },
}

impl ValidationError {
    /// The dotted path of the field that failed validation.
    ///
    /// Top-level object failures report an empty path.
    pub fn param(&self) -> &str {
        match self {
            Self::MissingField { field }
            | Self::InvalidType { field, .. }
            | Self::NotInEnumeration { field, .. }
            | Self::Constraint { field, .. }
            | Self::NotAnObject { field } => field,
        }
    }

    /// Short machine-readable code used in error responses.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "missing_field",
            Self::InvalidType { .. } | Self::NotAnObject { .. } => "invalid_type",
            Self::NotInEnumeration { .. } | Self::Constraint { .. } => "invalid_field",
        }
    }

    /// Rewrites the field path so it is rooted under `prefix`.
    pub(crate) fn nested_under(self, prefix: &str) -> Self {
        let join = |field: String| {
            if field.is_empty() {
                prefix.to_string()
            } else {
                format!("{prefix}.{field}")
            }
        };
        match self {
            Self::MissingField { field } => Self::MissingField { field: join(field) },
            Self::InvalidType { field, expected } => Self::InvalidType {
                field: join(field),
                expected,
            },
            Self::NotInEnumeration { field, value } => Self::NotInEnumeration {
                field: join(field),
                value,
            },
            Self::Constraint { field, reason } => Self::Constraint {
                field: join(field),
                reason,
            },
            Self::NotAnObject { field } => Self::NotAnObject { field: join(field) },
        }
    }
}

#[derive(Error, Debug)]
pub enum AcpError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AcpError>;
