mod common;

use acp_validator::domain::address::Address;
use acp_validator::domain::amount::Amount;
use acp_validator::domain::country::CountryCode;
use acp_validator::domain::error_response::{ErrorResponse, ErrorResponseType};
use acp_validator::domain::normalize::Normalize;
use acp_validator::domain::record::{Record, WireEnum};
use acp_validator::error::ValidationError;
use common::address_payload;
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

fn random_casing(code: &str, rng: &mut impl Rng) -> String {
    code.chars()
        .map(|c| {
            if rng.gen_bool(0.5) {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

#[test]
fn test_lower_and_upper_case_agree_for_every_code() {
    for code in CountryCode::VARIANTS {
        let lower = Address::validate(&address_payload(&code.as_str().to_lowercase())).unwrap();
        let upper = Address::validate(&address_payload(code.as_str())).unwrap();
        assert_eq!(lower.country(), *code);
        assert_eq!(lower, upper);
    }
}

#[test]
fn test_random_casing_normalizes() {
    let mut rng = rand::thread_rng();
    for _ in 0..500 {
        let code = CountryCode::VARIANTS[rng.gen_range(0..CountryCode::VARIANTS.len())];
        let raw = random_casing(code.as_str(), &mut rng);
        assert_eq!(Normalize::<CountryCode>::normalize(raw.as_str()), Ok(code));
    }
}

#[test]
fn test_normalization_is_idempotent() {
    for code in CountryCode::VARIANTS {
        let once = Normalize::<CountryCode>::normalize(code.as_str()).unwrap();
        assert_eq!(once.normalize(), Ok(*code));
    }
}

#[test]
fn test_canonical_address_revalidates_unchanged() {
    let address = Address::validate(&address_payload("ca")).unwrap();
    let canonical = serde_json::to_value(&address).unwrap();
    assert_eq!(Address::validate(&canonical).unwrap(), address);
}

#[test]
fn test_decimal_serializes_as_exact_string() {
    let amount = Amount::new(dec!(19.99)).unwrap();
    let wire = serde_json::to_string(&amount).unwrap();
    assert_eq!(wire, "\"19.99\"");
}

#[test]
fn test_random_decimal_round_trip() {
    let mut rng = rand::thread_rng();
    for _ in 0..500 {
        let mantissa: i64 = rng.gen_range(1..i64::MAX);
        let scale: u32 = rng.gen_range(0..=10);
        let amount = Amount::new(Decimal::new(mantissa, scale)).unwrap();

        let wire = serde_json::to_string(&amount).unwrap();
        let back: Amount = serde_json::from_str(&wire).unwrap();
        assert_eq!(back, amount);
        assert_eq!(back.to_string(), amount.to_string());
    }
}

#[test]
fn test_error_type_outside_set_rejected() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let len = rng.gen_range(0..24);
        let candidate: String = (0..len)
            .map(|_| rng.gen_range(b'a'..=b'z') as char)
            .collect();
        let body = json!({ "type": candidate, "code": "c", "message": "m" });
        let result = ErrorResponse::validate(&body);
        match ErrorResponseType::from_wire(&candidate) {
            Some(t) => assert_eq!(result.unwrap().r#type(), t),
            None => assert!(matches!(
                result,
                Err(ValidationError::NotInEnumeration { .. })
            )),
        }
    }
}

#[test]
fn test_validation_errors_map_to_invalid_request() {
    let mut body = address_payload("us");
    body.as_object_mut().unwrap().remove("city");
    let response: ErrorResponse = Address::validate(&body).unwrap_err().into();
    assert_eq!(response.r#type(), ErrorResponseType::InvalidRequest);
    assert_eq!(response.param(), Some("city"));
}
