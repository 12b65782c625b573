mod common;

use acp_validator::application::delegation::{DelegationHandler, STATUS_CREATED};
use acp_validator::domain::address::Address;
use acp_validator::domain::country::CountryCode;
use acp_validator::domain::ports::IdempotencyStoreBox;
use acp_validator::domain::record::Record;
use acp_validator::infrastructure::in_memory::InMemoryIdempotencyStore;
use common::{address_payload, delegate_payment_payload};
use std::sync::Arc;

#[tokio::test]
async fn test_same_key_from_many_tasks_yields_one_token() {
    let store: IdempotencyStoreBox = Box::new(InMemoryIdempotencyStore::new());
    let handler = Arc::new(DelegationHandler::new(store));

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let handler = Arc::clone(&handler);
            tokio::spawn(async move {
                handler
                    .delegate_payment(delegate_payment_payload(), "shared-key")
                    .await
                    .unwrap()
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        let reply = handle.await.unwrap();
        assert_eq!(reply.status, STATUS_CREATED);
        ids.push(reply.body["id"].clone());
    }
    ids.dedup();
    assert_eq!(ids.len(), 1);
}

#[test]
fn test_validation_from_many_threads() {
    let handles: Vec<_> = ["us", "US", "uS", "Us"]
        .into_iter()
        .map(|country| {
            std::thread::spawn(move || Address::validate(&address_payload(country)).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().country(), CountryCode::US);
    }
}
