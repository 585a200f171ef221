use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde_json::{Map, Value};

use crate::api::coerce::coerce_int;
use crate::error::ApiError;

/// Lenient JSON object body.
///
/// Unlike `axum::Json`, this never rejects a request for a missing content type
/// or a malformed payload: anything that is not a JSON object decodes to an
/// empty map, and handlers validate the fields they need. The only rejection is
/// a body over the configured size limit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonBody(pub Map<String, Value>);

impl JsonBody {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(bytes) {
            Ok(Value::Object(map)) => Self(map),
            Ok(_) => Self::default(),
            Err(e) => {
                if !bytes.is_empty() {
                    tracing::debug!("Ignoring unparseable request body: {}", e);
                }
                Self::default()
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Field coerced to an integer (0 when absent or non-numeric)
    pub fn int(&self, key: &str) -> i64 {
        coerce_int(self.get(key))
    }
}

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Bytes::from_request(req, state).await {
            Ok(bytes) => Ok(Self::from_bytes(&bytes)),
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                Err(ApiError::payload_too_large("request body too large"))
            }
            Err(rejection) => {
                tracing::debug!("Failed to read request body: {}", rejection.body_text());
                Ok(Self::default())
            }
        }
    }
}
