use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use nw_core::{Category, Error, NewsResponse};

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
}

/// Error envelope for the HTTP surface. Boundary validation failures map to
/// 400; everything else is a 500 carrying the underlying error message.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let status = match &err {
            Error::InvalidCategory(_) | Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.message }))).into_response()
    }
}

/// Fetch news items with optional category and search filters.
pub async fn get_news(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NewsQuery>,
) -> Result<Json<NewsResponse>, ApiError> {
    let category = Category::from_str(query.category.as_deref().unwrap_or("general"))?;
    let page = query.page.unwrap_or(1);
    if page < 1 {
        return Err(Error::InvalidRequest("page must be >= 1".to_string()).into());
    }

    let response = state
        .aggregator
        .fetch_and_analyze(category, query.search.as_deref(), page)
        .await
        .map_err(|e| {
            error!("Error fetching news: {}", e);
            ApiError::from(e)
        })?;

    Ok(Json(response))
}

/// Get available news categories.
pub async fn get_categories() -> impl IntoResponse {
    Json(json!({ "categories": Category::LISTED }))
}

/// Health check endpoint.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "healthy", "timestamp": Utc::now().to_rfc3339() }))
}
