use crate::domain::delegate_payment::{DelegatePaymentRequest, DelegatePaymentResponse};
use crate::domain::error_response::{ErrorResponse, ErrorResponseType};
use crate::domain::ports::{IdempotencyRecord, IdempotencyStoreBox};
use crate::domain::record::Record;
use crate::error::Result;
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub const STATUS_CREATED: u16 = 201;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_CONFLICT: u16 = 409;

/// Name reported as `param` when the idempotency key itself is unusable.
pub const IDEMPOTENCY_KEY_PARAM: &str = "Idempotency-Key";

/// Status code and JSON body returned for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: Value,
}

impl Reply {
    fn new(status: u16, body: &impl Serialize) -> Result<Self> {
        Ok(Self {
            status,
            body: serde_json::to_value(body)?,
        })
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone)]
pub struct HandlerConfig {
    /// Prefix of issued delegated-payment token ids.
    pub token_prefix: String,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            token_prefix: "vt_".to_string(),
        }
    }
}

/// Serves delegate-payment requests.
///
/// Successful replies are remembered under their idempotency key and replayed
/// for an identical retry. Reusing a key with a different payload is rejected
/// as `request_not_idempotent`. Validation failures are not remembered, so a
/// caller can correct the payload and resubmit under the same key.
pub struct DelegationHandler {
    store: IdempotencyStoreBox,
    config: HandlerConfig,
}

impl DelegationHandler {
    pub fn new(store: IdempotencyStoreBox) -> Self {
        Self::with_config(store, HandlerConfig::default())
    }

    pub fn with_config(store: IdempotencyStoreBox, config: HandlerConfig) -> Self {
        Self { store, config }
    }

    /// Handles one delegate-payment call.
    ///
    /// Only storage failures are returned as `Err`; every other outcome is a
    /// `Reply` carrying either the success record or an `ErrorResponse`.
    pub async fn delegate_payment(&self, payload: Value, idempotency_key: &str) -> Result<Reply> {
        if idempotency_key.trim().is_empty() {
            warn!("delegate_payment called without an idempotency key");
            let error = ErrorResponse::new(
                ErrorResponseType::InvalidRequest,
                "missing_field",
                "An idempotency key is required",
                Some(IDEMPOTENCY_KEY_PARAM.to_string()),
            );
            return Reply::new(STATUS_BAD_REQUEST, &error);
        }

        if let Some(previous) = self.store.get(idempotency_key).await? {
            return self.replay(idempotency_key, &payload, previous);
        }

        let request = match DelegatePaymentRequest::validate(&payload) {
            Ok(request) => request,
            Err(err) => {
                warn!(
                    idempotency_key,
                    param = err.param(),
                    error = %err,
                    "rejected delegate_payment payload"
                );
                return Reply::new(STATUS_BAD_REQUEST, &ErrorResponse::from(err));
            }
        };

        let response = DelegatePaymentResponse::new(
            format!("{}{}", self.config.token_prefix, Uuid::new_v4().simple()),
            Utc::now(),
            request.metadata().clone(),
        );
        let reply = Reply::new(STATUS_CREATED, &response)?;

        let record = IdempotencyRecord {
            request: payload.clone(),
            status: reply.status,
            body: reply.body.clone(),
        };
        if let Some(previous) = self
            .store
            .insert_if_absent(idempotency_key.to_string(), record)
            .await?
        {
            // A concurrent request with the same key got there first.
            return self.replay(idempotency_key, &payload, previous);
        }

        info!(
            idempotency_key,
            id = response.id(),
            merchant_id = request.allowance().merchant_id(),
            max_amount = %request.allowance().max_amount(),
            "delegated payment"
        );
        Ok(reply)
    }

    fn replay(
        &self,
        idempotency_key: &str,
        payload: &Value,
        previous: IdempotencyRecord,
    ) -> Result<Reply> {
        if previous.request == *payload {
            debug!(idempotency_key, "replaying stored reply");
            return Ok(Reply {
                status: previous.status,
                body: previous.body,
            });
        }

        warn!(idempotency_key, "idempotency key reused with a different payload");
        let error = ErrorResponse::new(
            ErrorResponseType::RequestNotIdempotent,
            "idempotency_conflict",
            "This idempotency key was already used with a different request payload",
            Some(IDEMPOTENCY_KEY_PARAM.to_string()),
        );
        Reply::new(STATUS_CONFLICT, &error)
    }
}
