use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::shared::infrastructure::http::error::ApiError;

/// JSON request body extractor.
///
/// Decodes the first JSON value in the body regardless of the request's
/// `Content-Type`, and rejects with [`ApiError::MalformedInput`] carrying the
/// decoder's message.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::MalformedInput(rejection.body_text()))?;
        decode_first_value(&bytes).map(JsonBody)
    }
}

pub fn decode_first_value<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    let mut values = serde_json::Deserializer::from_slice(bytes).into_iter::<T>();
    match values.next() {
        Some(Ok(value)) => Ok(value),
        Some(Err(err)) => Err(ApiError::MalformedInput(err.to_string())),
        None => Err(ApiError::MalformedInput("EOF".to_string())),
    }
}
