use core::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use derive_more::From;
use serde_json::json;

use crate::types::Error;

/// Failures a PDF request can end in. Neither carries a partial document.
#[derive(Debug,From)]
pub enum ApiError {
   #[from]
    BadRequest(serde_json::Error),
   #[from]
    Render(Error),
}

impl std::error::Error for ApiError {}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::BadRequest(e) => write!(f, "invalid invoice payload: {e}"),
            ApiError::Render(e) => write!(f, "failed to render invoice: {e}"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Style;

    #[test]
    fn render_failures_are_server_errors() {
        let response = ApiError::from(Error::MissingFont(Style::Bold)).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn decode_failures_are_bad_requests() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();

        assert_eq!(ApiError::from(err).into_response().status(), StatusCode::BAD_REQUEST);
    }
}
