//! Domain records and the validation machinery that builds them.
//!
//! Every record is an immutable value object: it is only obtainable through
//! validation (`Record::validate`, `serde` deserialization, or a checked
//! constructor) and exposes read-only accessors.

pub mod address;
pub mod allowance;
pub mod amount;
pub mod country;
pub mod currency;
pub mod delegate_payment;
pub mod error_response;
pub mod normalize;
pub mod payment_method;
pub mod ports;
pub mod record;
