//! API routes for conversion and registry introspection
//!
//! Conversion endpoints pass the engine's success-flag results through with
//! status 200 either way; clients inspect the `success` field. Registry
//! lookups map `CategoryNotFound`/`UnitNotFound` to 404. Shape problems the
//! engine does not own (missing batch field, oversized batch, empty search
//! query) are rejected here with 400.

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use metron_core::{
    convert_batch, convert_request, BatchItem, Category, CategorySummary, ConversionRequest,
    ConversionResult, Unit, MAX_SEARCH_RESULTS, REGISTRY,
};

/// Batch cap enforced by the transport layer, not the engine
const MAX_BATCH_SIZE: usize = 100;

pub fn router() -> Router {
    Router::new()
        .route("/api/convert", post(convert))
        .route("/api/convert/batch", post(batch))
        .route("/api/categories", get(list_categories))
        .route("/api/categories/{category}", get(get_category))
        .route("/api/categories/{category}/units/{unit}", get(get_unit))
        .route("/api/categories/{category}/search", get(search_units))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

fn reject(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            success: false,
            error: error.into(),
        }),
    )
        .into_response()
}

async fn convert(Json(request): Json<ConversionRequest>) -> Json<ConversionResult> {
    let result = convert_request(&request);
    if let Some(error) = result.error() {
        tracing::debug!(error, "conversion rejected");
    }
    Json(result)
}

#[derive(Debug, Deserialize)]
struct BatchBody {
    #[serde(default)]
    conversions: Option<Vec<ConversionRequest>>,
}

#[derive(Debug, Serialize)]
struct BatchResponse {
    success: bool,
    results: Vec<BatchItem>,
    successful: usize,
    failed: usize,
}

async fn batch(Json(body): Json<BatchBody>) -> Response {
    let Some(conversions) = body.conversions else {
        return reject(StatusCode::BAD_REQUEST, "Missing required field: conversions");
    };
    if conversions.len() > MAX_BATCH_SIZE {
        return reject(
            StatusCode::BAD_REQUEST,
            format!("Batch size exceeds maximum of {MAX_BATCH_SIZE} conversions"),
        );
    }

    let outcome = convert_batch(&conversions);
    tracing::debug!(
        total = outcome.results.len(),
        successful = outcome.successful,
        failed = outcome.failed,
        "batch processed"
    );

    Json(BatchResponse {
        success: true,
        results: outcome.results,
        successful: outcome.successful,
        failed: outcome.failed,
    })
    .into_response()
}

#[derive(Debug, Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: Vec<CategorySummary>,
}

async fn list_categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        success: true,
        categories: REGISTRY.summaries(),
    })
}

#[derive(Debug, Serialize)]
struct CategoryResponse {
    success: bool,
    category: Category,
}

async fn get_category(Path(category): Path<String>) -> Response {
    match REGISTRY.category(&category) {
        Ok(category) => Json(CategoryResponse {
            success: true,
            category: category.clone(),
        })
        .into_response(),
        Err(e) => reject(StatusCode::NOT_FOUND, e.to_string()),
    }
}

#[derive(Debug, Serialize)]
struct UnitResponse {
    success: bool,
    unit: Unit,
}

async fn get_unit(Path((category, unit)): Path<(String, String)>) -> Response {
    match REGISTRY.unit(&category, &unit) {
        Ok(unit) => Json(UnitResponse {
            success: true,
            unit: unit.clone(),
        })
        .into_response(),
        Err(e) => reject(StatusCode::NOT_FOUND, e.to_string()),
    }
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: Option<String>,
    #[serde(default)]
    limit: Option<usize>,
}

#[derive(Debug, Serialize)]
struct SearchResponse {
    success: bool,
    units: Vec<Unit>,
}

async fn search_units(
    Path(category): Path<String>,
    Query(params): Query<SearchParams>,
) -> Response {
    let query = params.q.unwrap_or_default();
    if query.trim().is_empty() {
        return reject(StatusCode::BAD_REQUEST, "Missing required query parameter: q");
    }
    let limit = params.limit.unwrap_or(MAX_SEARCH_RESULTS);

    match REGISTRY.search_units(&category, &query, limit) {
        Ok(units) => Json(SearchResponse {
            success: true,
            units: units.cloned().collect(),
        })
        .into_response(),
        Err(e) => reject(StatusCode::NOT_FOUND, e.to_string()),
    }
}
