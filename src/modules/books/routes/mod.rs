use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use folio_generator::{Book, GenerationRequest, LocaleRegistry};
use folio_http::error::AppError;
use folio_kernel::settings::GenerationSettings;

use super::{
    export,
    models::{validation_error, BookQuery},
};
use crate::utils;

/// Shared state for the books handlers
pub struct BooksState {
    pub limits: GenerationSettings,
}

fn into_request(
    state: &BooksState,
    query: Result<Query<BookQuery>, QueryRejection>,
) -> Result<GenerationRequest, AppError> {
    let Query(query) = query.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
    query.validate(&state.limits).map_err(validation_error)
}

/// Generation is CPU-bound, so it runs off the async workers.
async fn generate(request: GenerationRequest) -> Result<Vec<Book>, AppError> {
    let books = tokio::task::spawn_blocking(move || folio_generator::generate(&request))
        .await
        .context("book generation task failed")?;
    Ok(books)
}

/// `GET /api/books`
pub async fn list_books(
    State(state): State<Arc<BooksState>>,
    query: Result<Query<BookQuery>, QueryRejection>,
) -> Result<Json<Vec<Book>>, AppError> {
    let request = into_request(&state, query)?;
    tracing::debug!(
        locale = %request.locale,
        seed = request.seed,
        start = request.start,
        count = request.count,
        "generating books"
    );
    Ok(Json(generate(request).await?))
}

/// `GET /api/books/export`
pub async fn export_books(
    State(state): State<Arc<BooksState>>,
    query: Result<Query<BookQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let request = into_request(&state, query)?;
    let filename = utils::export_filename(&request.locale, request.seed);

    let books = generate(request).await?;
    let body = export::to_csv(&books).context("failed to render CSV export")?;

    tracing::info!(rows = books.len(), file = %filename, "exported books");

    Ok((
        [
            (header::CONTENT_TYPE, export::CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    ))
}

/// `GET /api/books/locales`
pub async fn list_locales() -> Json<Vec<&'static str>> {
    Json(LocaleRegistry::builtin().tags())
}

/// Any other path under `/api/books`
pub async fn not_found(uri: axum::http::Uri) -> AppError {
    AppError::not_found(format!("no books route matches {}", uri.path()))
}

/// `GET /api/books/health`
pub async fn health_check() -> &'static str {
    "books module is healthy"
}
