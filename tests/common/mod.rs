use serde_json::{Value, json};

/// A well-formed delegate-payment payload.
pub fn delegate_payment_payload() -> Value {
    json!({
        "payment_method": {
            "type": "card",
            "card_number_type": "fpan",
            "number": "4242424242424242",
            "exp_month": "11",
            "exp_year": "2026",
            "name": "Jane Doe",
            "cvc": "223",
            "checks_performed": ["avs", "cvv"],
            "iin": "424242",
            "display_card_funding_type": "credit",
            "display_brand": "visa",
            "display_last4": "4242",
            "metadata": { "issuing_bank": "temp" }
        },
        "allowance": {
            "reason": "one_time",
            "max_amount": "19.99",
            "currency": "usd",
            "checkout_session_id": "csn_01HV3P3ABC",
            "merchant_id": "acme",
            "expires_at": "2025-10-09T07:20:50.52Z"
        },
        "billing_address": {
            "name": "Jane Doe",
            "line_one": "123 Fake St.",
            "line_two": "Unit 1",
            "city": "San Francisco",
            "state": "CA",
            "country": "us",
            "postal_code": "12345",
            "phone_number": "+15555555555"
        },
        "risk_signals": [
            { "type": "card_testing", "score": 10, "action": "manual_review" }
        ],
        "metadata": { "source": "chatgpt_checkout", "campaign": "q4" }
    })
}

pub fn address_payload(country: &str) -> Value {
    json!({
        "name": "Jane Doe",
        "line_one": "123 Fake St.",
        "city": "San Francisco",
        "state": "CA",
        "country": country,
        "postal_code": "12345"
    })
}
