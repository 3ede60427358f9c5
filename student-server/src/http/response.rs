//! JSON response body with an explicit charset

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use super::error::INTERNAL_MESSAGE;

/// Content type sent with every successful JSON body
pub const JSON_UTF8: &str = "application/json; charset=utf-8";

/// JSON response labelled `application/json; charset=utf-8`.
///
/// An encoding failure answers 500 with a plain-text body.
pub struct JsonUtf8<T>(pub T);

impl<T> IntoResponse for JsonUtf8<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(bytes) => {
                ([(CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))], bytes).into_response()
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to encode response body");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn sets_charset_header() {
        let response = JsonUtf8(vec!["b1", "b2"]).into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], JSON_UTF8);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], br#"["b1","b2"]"#);
    }
}
