use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use tracing::{Span, debug, info, trace};

use crate::error::{AppError, Result};
use crate::pagination::{PAGE_SIZE, Search, result_offset};

use super::AppState;
use super::models::{SearchPage, SearchParams};

pub async fn index_handler(State(state): State<AppState>) -> Result<Html<String>> {
    let body = state.templates.render_index()?;
    Ok(Html(body))
}

pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>> {
    let page_num = params.page_num();

    // Attach the query to the request span so every later log line carries it
    let span = Span::current();
    span.record("search_query", params.q.as_str());
    span.record("page_num", page_num);

    info!("incoming search query '{}' on page '{}'", params.q, page_num);

    let requested_page: i64 = page_num.parse()?;
    let page = u64::try_from(requested_page)
        .ok()
        .filter(|page| *page >= 1)
        .ok_or(AppError::PageOutOfRange(requested_page))?;

    let offset =
        result_offset(page, PAGE_SIZE).ok_or(AppError::PageOutOfRange(requested_page))?;
    let search_response = state
        .wikipedia
        .search(&params.q, PAGE_SIZE, offset)
        .await?;

    if let Ok(payload) = serde_json::to_string(&search_response) {
        debug!(wikipedia_search_response = %payload);
    }

    let search = Search::new(params.q.clone(), page, PAGE_SIZE, search_response);
    let body = state.templates.render_search(&SearchPage::from(&search))?;

    trace!("search query '{}' succeeded without errors", search.query);

    Ok(Html(body))
}

pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 page not found")
}
