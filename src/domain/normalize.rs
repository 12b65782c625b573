use crate::error::ValidationError;
use serde_json::Value;

/// Pre-validation coercion into a canonical type.
///
/// Implementations for the canonical type itself must return the value
/// unchanged. Implementations for raw representations coerce first and then
/// validate, so normalizing twice is the same as normalizing once.
pub trait Normalize<T> {
    fn normalize(self) -> Result<T, ValidationError>;
}

/// Normalizes a JSON value by way of its string content.
///
/// Used by `Fields::required_with` for fields whose canonical type accepts
/// loosely formatted strings.
pub fn normalized<T>(value: &Value) -> Result<T, ValidationError>
where
    for<'s> &'s str: Normalize<T>,
{
    Normalize::<T>::normalize(crate::domain::record::string(value)?)
}
