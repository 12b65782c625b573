//! Field-level access to untyped JSON input.
//!
//! `Fields` wraps a JSON object and hands out typed values one field at a
//! time. Leaf parsers report failures with an empty field path; `Fields`
//! roots every failure under the name of the field it was reading, so nested
//! records end up with dotted paths such as `payment_method.card_number_type`.

use crate::error::ValidationError;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A closed set of values with a fixed wire representation.
pub trait WireEnum: Sized + Copy + 'static {
    /// Every legal value, in declaration order.
    const VARIANTS: &'static [Self];

    /// The exact wire string for this value.
    fn as_str(&self) -> &'static str;

    /// Exhaustive lookup from wire string to value. Exact match only.
    fn from_wire(raw: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.as_str() == raw)
    }
}

/// Declares a closed enumeration together with its wire mapping.
///
/// Generates the enum, its `WireEnum` impl, `Display`, and serde impls that
/// write and accept only the listed literals.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::domain::record::WireEnum for $name {
            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::domain::record::WireEnum::as_str(self))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::domain::record::WireEnum::as_str(self))
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::domain::record::WireEnum>::from_wire(&raw).ok_or_else(|| {
                    serde::de::Error::custom(format!(
                        "{raw:?} is not a valid {}",
                        stringify!($name)
                    ))
                })
            }
        }
    };
}

pub(crate) use wire_enum;

/// A record that can be built from an untyped JSON object.
pub trait Record: Sized {
    fn from_fields(fields: &Fields<'_>) -> Result<Self, ValidationError>;

    /// Validates `value` and builds the record.
    fn validate(value: &Value) -> Result<Self, ValidationError> {
        Self::from_fields(&Fields::of(value)?)
    }
}

/// Read-only view over the fields of a JSON object.
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub fn of(value: &'a Value) -> Result<Self, ValidationError> {
        match value {
            Value::Object(map) => Ok(Self { map }),
            _ => Err(ValidationError::NotAnObject {
                field: String::new(),
            }),
        }
    }

    // An explicit `null` counts as absent.
    fn present(&self, name: &str) -> Option<&'a Value> {
        self.map.get(name).filter(|v| !v.is_null())
    }

    pub fn required_with<T>(
        &self,
        name: &str,
        parse: impl FnOnce(&'a Value) -> Result<T, ValidationError>,
    ) -> Result<T, ValidationError> {
        let value = self.present(name).ok_or_else(|| ValidationError::MissingField {
            field: name.to_string(),
        })?;
        parse(value).map_err(|e| e.nested_under(name))
    }

    pub fn optional_with<T>(
        &self,
        name: &str,
        parse: impl FnOnce(&'a Value) -> Result<T, ValidationError>,
    ) -> Result<Option<T>, ValidationError> {
        self.present(name)
            .map(|value| parse(value).map_err(|e| e.nested_under(name)))
            .transpose()
    }

    pub fn required_str(&self, name: &str) -> Result<String, ValidationError> {
        self.required_with(name, |v| string(v).map(str::to_string))
    }

    pub fn optional_str(&self, name: &str) -> Result<Option<String>, ValidationError> {
        self.optional_with(name, |v| string(v).map(str::to_string))
    }

    pub fn required_enum<T: WireEnum>(&self, name: &str) -> Result<T, ValidationError> {
        self.required_with(name, wire_value)
    }

    pub fn required_record<T: Record>(&self, name: &str) -> Result<T, ValidationError> {
        self.required_with(name, T::validate)
    }

    pub fn optional_record<T: Record>(&self, name: &str) -> Result<Option<T>, ValidationError> {
        self.optional_with(name, T::validate)
    }

    /// Reads a JSON array, parsing each element with `parse`.
    ///
    /// Element failures are reported as `name[index]`.
    pub fn list_with<T>(
        &self,
        name: &str,
        required: bool,
        parse: impl Fn(&'a Value) -> Result<T, ValidationError>,
    ) -> Result<Vec<T>, ValidationError> {
        let Some(value) = self.present(name) else {
            if required {
                return Err(ValidationError::MissingField {
                    field: name.to_string(),
                });
            }
            return Ok(Vec::new());
        };
        let Value::Array(items) = value else {
            return Err(ValidationError::InvalidType {
                field: name.to_string(),
                expected: "array",
            });
        };
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                parse(item).map_err(|e| e.nested_under(&format!("{name}[{index}]")))
            })
            .collect()
    }

    /// Reads a flat object whose values are all strings.
    pub fn string_map(
        &self,
        name: &str,
        required: bool,
    ) -> Result<BTreeMap<String, String>, ValidationError> {
        let entries = |value: &'a Value| -> Result<BTreeMap<String, String>, ValidationError> {
            let Value::Object(map) = value else {
                return Err(ValidationError::NotAnObject {
                    field: String::new(),
                });
            };
            map.iter()
                .map(|(key, v)| {
                    string(v)
                        .map(|s| (key.clone(), s.to_string()))
                        .map_err(|e| e.nested_under(key))
                })
                .collect()
        };
        let parsed = if required {
            Some(self.required_with(name, entries)?)
        } else {
            self.optional_with(name, entries)?
        };
        Ok(parsed.unwrap_or_default())
    }
}

/// Leaf parser: a JSON string.
pub fn string(value: &Value) -> Result<&str, ValidationError> {
    value.as_str().ok_or(ValidationError::InvalidType {
        field: String::new(),
        expected: "string",
    })
}

/// Leaf parser: a member of a closed enumeration, matched exactly.
pub fn wire_value<T: WireEnum>(value: &Value) -> Result<T, ValidationError> {
    let raw = string(value)?;
    T::from_wire(raw).ok_or_else(|| ValidationError::NotInEnumeration {
        field: String::new(),
        value: raw.to_string(),
    })
}

/// Leaf parser: a string made only of ASCII digits, with a length in `min..=max`.
pub fn digits(value: &Value, min: usize, max: usize) -> Result<String, ValidationError> {
    let raw = string(value)?;
    if raw.len() < min || raw.len() > max || !raw.bytes().all(|b| b.is_ascii_digit()) {
        let reason = if min == max {
            format!("must be exactly {min} digits")
        } else {
            format!("must be {min} to {max} digits")
        };
        return Err(ValidationError::Constraint {
            field: String::new(),
            reason,
        });
    }
    Ok(raw.to_string())
}

/// Leaf parser: a non-negative JSON integer.
pub fn unsigned(value: &Value) -> Result<u64, ValidationError> {
    value.as_u64().ok_or(ValidationError::InvalidType {
        field: String::new(),
        expected: "non-negative integer",
    })
}

/// Leaf parser: an RFC 3339 timestamp, converted to UTC.
pub fn timestamp(value: &Value) -> Result<DateTime<Utc>, ValidationError> {
    let raw = string(value)?;
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| ValidationError::Constraint {
            field: String::new(),
            reason: format!("{raw:?} is not an RFC 3339 timestamp: {e}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    wire_enum! {
        enum Colour {
            Red => "red",
            DarkBlue => "dark_blue",
        }
    }

    #[test]
    fn test_wire_enum_exact_match() {
        assert_eq!(Colour::from_wire("dark_blue"), Some(Colour::DarkBlue));
        assert_eq!(Colour::from_wire("RED"), None);
        assert_eq!(Colour::Red.to_string(), "red");
    }

    #[test]
    fn test_null_is_missing() {
        let value = json!({ "name": null });
        let fields = Fields::of(&value).unwrap();
        let err = fields.required_str("name").unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                field: "name".into()
            }
        );
        assert_eq!(fields.optional_str("name").unwrap(), None);
    }

    #[test]
    fn test_type_mismatch_names_field() {
        let value = json!({ "name": 42 });
        let fields = Fields::of(&value).unwrap();
        let err = fields.required_str("name").unwrap_err();
        assert_eq!(err.param(), "name");
        assert!(matches!(err, ValidationError::InvalidType { .. }));
    }

    #[test]
    fn test_list_element_path() {
        let value = json!({ "colours": ["red", "green"] });
        let fields = Fields::of(&value).unwrap();
        let err = fields
            .list_with("colours", true, wire_value::<Colour>)
            .unwrap_err();
        assert_eq!(err.param(), "colours[1]");
    }

    #[test]
    fn test_optional_list_defaults_empty() {
        let value = json!({});
        let fields = Fields::of(&value).unwrap();
        let colours = fields
            .list_with("colours", false, wire_value::<Colour>)
            .unwrap();
        assert!(colours.is_empty());
    }

    #[test]
    fn test_string_map_rejects_non_string_values() {
        let value = json!({ "metadata": { "a": "1", "b": 2 } });
        let fields = Fields::of(&value).unwrap();
        let err = fields.string_map("metadata", true).unwrap_err();
        assert_eq!(err.param(), "metadata.b");
    }

    #[test]
    fn test_digits_constraint() {
        assert_eq!(digits(&json!("4242"), 4, 4).unwrap(), "4242");
        assert!(digits(&json!("42a2"), 4, 4).is_err());
        assert!(digits(&json!("42"), 4, 4).is_err());
    }

    #[test]
    fn test_timestamp_offset_converted_to_utc() {
        let t = timestamp(&json!("2025-10-09T09:20:50+02:00")).unwrap();
        assert_eq!(t.to_rfc3339(), "2025-10-09T07:20:50+00:00");
        assert!(timestamp(&json!("yesterday")).is_err());
    }

    #[test]
    fn test_non_object_input() {
        assert!(matches!(
            Fields::of(&json!([1, 2])),
            Err(ValidationError::NotAnObject { .. })
        ));
    }
}
