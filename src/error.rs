use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Errors a request handler can fail with.
///
/// The display text is sent verbatim as the response body.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid page number: {0}")]
    InvalidPageNumber(#[from] std::num::ParseIntError),

    #[error("page number {0} is out of range")]
    PageOutOfRange(i64),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("non 200 OK response from Wikipedia API: {dump}")]
    UpstreamStatus { status: StatusCode, dump: String },

    #[error(transparent)]
    Deserialize(#[from] serde_json::Error),

    #[error(transparent)]
    Render(#[from] minijinja::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::PageOutOfRange(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            AppError::UpstreamStatus {
                status: upstream_status,
                ..
            } => tracing::error!(
                error = %self,
                status_code = status.as_u16(),
                upstream_status = upstream_status.as_u16(),
                "request failed"
            ),
            _ => tracing::error!(error = %self, status_code = status.as_u16(), "request failed"),
        }
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_is_internal() {
        let err: AppError = "abc".parse::<i64>().unwrap_err().into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().starts_with("invalid page number"));
    }

    #[test]
    fn test_page_out_of_range_is_bad_request() {
        let err = AppError::PageOutOfRange(0);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "page number 0 is out of range");
    }

    #[test]
    fn test_upstream_status_display() {
        let err = AppError::UpstreamStatus {
            status: StatusCode::SERVICE_UNAVAILABLE,
            dump: "HTTP/1.1 503 Service Unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "non 200 OK response from Wikipedia API: HTTP/1.1 503 Service Unavailable"
        );
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_into_response_body_is_error_text() {
        let response = AppError::PageOutOfRange(-2).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"page number -2 is out of range");
    }
}
