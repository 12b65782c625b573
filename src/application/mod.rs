//! Application layer orchestrating validation behind the endpoint contract.
//!
//! `DelegationHandler` is the in-process counterpart of the delegate-payment
//! endpoint: it validates the payload, enforces idempotency keys and answers
//! with a status code and a JSON body. `RecordKind` validates any record type
//! by name for the command line.

pub mod catalog;
pub mod delegation;
