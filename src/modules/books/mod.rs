pub mod export;
pub mod models;
pub mod routes;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{routing::get, Router};
use folio_generator::{LocaleRegistry, DERIVATION_VERSION};
use folio_kernel::{settings::GenerationSettings, InitCtx, Module};
use serde_json::json;

use routes::BooksState;

/// Synthetic book catalogue: paged JSON listing and CSV export
pub struct BooksModule {
    state: Arc<BooksState>,
}

impl BooksModule {
    pub fn new(limits: GenerationSettings) -> Self {
        Self {
            state: Arc::new(BooksState { limits }),
        }
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let default_locale = &self.state.limits.default_locale;
        if !LocaleRegistry::builtin().contains(default_locale) {
            tracing::warn!(
                module = self.name(),
                locale = %default_locale,
                "configured default locale is not registered; requests will use the fallback"
            );
        }

        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            locales = ?LocaleRegistry::builtin().tags(),
            derivation_version = DERIVATION_VERSION,
            max_count = self.state.limits.max_count,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/", get(routes::list_books))
            .route("/export", get(routes::export_books))
            .route("/locales", get(routes::list_locales))
            .route("/health", get(routes::health_check))
            .fallback(routes::not_found)
            .with_state(self.state.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let parameters = json!([
            { "name": "locale", "in": "query", "schema": { "type": "string", "default": "en-US" } },
            { "name": "seed", "in": "query", "schema": { "type": "integer", "format": "int64", "minimum": 0, "default": 42 } },
            { "name": "averageLikes", "in": "query", "schema": { "type": "number", "minimum": 0, "maximum": self.state.limits.max_average_likes, "default": 5 } },
            { "name": "averageReviews", "in": "query", "schema": { "type": "number", "minimum": 0, "maximum": self.state.limits.max_average_reviews, "default": 3 } },
            { "name": "start", "in": "query", "schema": { "type": "integer", "format": "int64", "minimum": 0, "default": 0 } },
            { "name": "count", "in": "query", "schema": { "type": "integer", "minimum": 1, "maximum": self.state.limits.max_count, "default": 20 } }
        ]);

        let error_responses = json!({
            "400": {
                "description": "Malformed query string",
                "content": { "application/json": { "schema": { "$ref": "#/components/schemas/ErrorResponse" } } }
            },
            "422": {
                "description": "Parameter out of range",
                "content": { "application/json": { "schema": { "$ref": "#/components/schemas/ErrorResponse" } } }
            }
        });

        let mut list_responses = error_responses.clone();
        list_responses["200"] = json!({
            "description": "Generated books",
            "content": {
                "application/json": {
                    "schema": { "type": "array", "items": { "$ref": "#/components/schemas/Book" } }
                }
            }
        });

        let mut export_responses = error_responses;
        export_responses["200"] = json!({
            "description": "Generated books as a CSV attachment",
            "content": { "text/csv": { "schema": { "type": "string" } } }
        });

        Some(json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "Generate a page of books",
                        "tags": ["Books"],
                        "parameters": parameters,
                        "responses": list_responses
                    }
                },
                "/export": {
                    "get": {
                        "summary": "Export a page of books as CSV",
                        "tags": ["Books"],
                        "parameters": parameters,
                        "responses": export_responses
                    }
                },
                "/locales": {
                    "get": {
                        "summary": "List registered locales",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "Locale tags",
                                "content": {
                                    "application/json": {
                                        "schema": { "type": "array", "items": { "type": "string" } }
                                    }
                                }
                            }
                        }
                    }
                },
                "/health": {
                    "get": {
                        "summary": "Books health check",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "OK",
                                "content": { "text/plain": { "schema": { "type": "string" } } }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Book": {
                        "type": "object",
                        "properties": {
                            "absoluteIndex": { "type": "integer", "format": "int64", "description": "1-based record position" },
                            "isbn": { "type": "string", "example": "978-1-23-456789-0" },
                            "title": { "type": "string" },
                            "authors": { "type": "array", "items": { "type": "string" } },
                            "publisher": { "type": "string" },
                            "likes": { "type": "integer" },
                            "reviews": { "type": "array", "items": { "$ref": "#/components/schemas/Review" } }
                        },
                        "required": ["absoluteIndex", "isbn", "title", "authors", "publisher", "likes", "reviews"]
                    },
                    "Review": {
                        "type": "object",
                        "properties": {
                            "text": { "type": "string" },
                            "author": { "type": "string" }
                        },
                        "required": ["text", "author"]
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module stopped");
        Ok(())
    }
}

/// Create a new instance of the books module
pub fn create_module(limits: GenerationSettings) -> Arc<dyn Module> {
    Arc::new(BooksModule::new(limits))
}
