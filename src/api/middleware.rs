use axum::{
    extract::Request,
    http::{HeaderValue, StatusCode, header::USER_AGENT},
    middleware::Next,
    response::Response,
};
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::time::Instant;
use tracing::{Instrument, field::Empty, info, info_span};

pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Per-request token tying together all log lines of one request.
/// Available to handlers as a request extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelationId(pub String);

/// Assigns a correlation id, runs the request inside a span carrying it and
/// logs the outcome. A panicking handler is logged as a 500 and the panic is
/// resumed afterwards.
pub async fn request_logger(mut request: Request, next: Next) -> Response {
    let start = Instant::now();

    let correlation_id = nanoid::nanoid!();
    request
        .extensions_mut()
        .insert(CorrelationId(correlation_id.clone()));

    let method = request.method().clone();
    let url = request.uri().to_string();
    let user_agent = request
        .headers()
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let span = info_span!(
        "request",
        correlation_id = %correlation_id,
        search_query = Empty,
        page_num = Empty,
    );

    let outcome = AssertUnwindSafe(next.run(request))
        .catch_unwind()
        .instrument(span.clone())
        .await;

    let log_request = |status: StatusCode| {
        span.in_scope(|| {
            info!(
                method = %method,
                url = %url,
                user_agent = %user_agent,
                elapsed_ms = start.elapsed().as_millis() as u64,
                status_code = status.as_u16(),
                "incoming request"
            )
        })
    };

    match outcome {
        Ok(mut response) => {
            if let Ok(value) = HeaderValue::from_str(&correlation_id) {
                response.headers_mut().insert(CORRELATION_ID_HEADER, value);
            }
            log_request(response.status());
            response
        }
        Err(panic) => {
            log_request(StatusCode::INTERNAL_SERVER_ERROR);
            std::panic::resume_unwind(panic)
        }
    }
}
