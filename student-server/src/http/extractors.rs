//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON request body that rejects with a 400.
///
/// Unlike `axum::Json` this ignores the content type and reports every
/// decoding failure (syntax, types, missing fields) as a bad request.
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
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(error = %e, "rejected request body");
            ApiError::BadRequest("invalid request body".into())
        })?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StudentPayload;
    use axum::body::Body;

    fn request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/students")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn decodes_without_content_type() {
        let JsonBody(payload) = JsonBody::<StudentPayload>::from_request(
            request(r#"{"name":"Ada","email":"ada@x.com"}"#),
            &(),
        )
        .await
        .unwrap();

        assert_eq!(payload.name, "Ada");
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let result = JsonBody::<StudentPayload>::from_request(request("not json"), &()).await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }
}
