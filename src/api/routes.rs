use axum::{
    extract::{DefaultBodyLimit, Json, Multipart, State},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use askama::Template;
use chrono::Utc;
use std::time::Instant;
use tracing::{info, warn};

use crate::api::models::{InsightRequest, InsightResponse};
use crate::api::page::IndexTemplate;
use crate::api::response;
use crate::error::Result;
use crate::AppState;

/// Product overview uploads can be sizeable PDFs even though they are never read.
const FORM_BODY_LIMIT: usize = 25 * 1024 * 1024;

pub fn create_router(app_state: AppState) -> Router {
    let api = Router::new()
        .route("/api/insights", post(insights_api_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    Router::new()
        .route("/", get(index_handler))
        .route(
            "/insights",
            post(insights_form_handler).layer(DefaultBodyLimit::max(FORM_BODY_LIMIT)),
        )
        .route("/health", get(|| async { "ok" }))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn index_handler() -> Result<Html<String>> {
    Ok(Html(IndexTemplate::default().render()?))
}

async fn insights_form_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>> {
    let request = read_form(multipart).await?;
    let start = Instant::now();

    let outcome = state.pipeline.run(&request).await;
    match &outcome {
        Ok(_) => info!(elapsed = ?start.elapsed(), "form submission answered"),
        Err(err) => warn!(kind = err.kind(), error = %err, "form submission failed"),
    }

    // The page is re-rendered blank; submitted values are not echoed back.
    Ok(Html(IndexTemplate::from_outcome(outcome).render()?))
}

/// Collects the six text fields. Any other part, including the product
/// overview upload, is skipped without being read.
async fn read_form(mut multipart: Multipart) -> Result<InsightRequest> {
    let mut request = InsightRequest::default();

    while let Some(field) = multipart.next_field().await? {
        let target = match field.name().unwrap_or_default() {
            "product_name" => &mut request.product_name,
            "company_url" => &mut request.company_url,
            "product_category" => &mut request.product_category,
            "competitor_url" | "competitors_url" => &mut request.competitor_url,
            "value_proposition" => &mut request.value_proposition,
            "target_customer" => &mut request.target_customer,
            _ => continue,
        };
        *target = field.text().await?;
    }

    Ok(request)
}

async fn insights_api_handler(
    State(state): State<AppState>,
    Json(req): Json<InsightRequest>,
) -> Response {
    info!(company_url = %req.company_url, "processing insight request");
    let start = Instant::now();

    match state.pipeline.run(&req).await {
        Ok(insights) => {
            info!(elapsed = ?start.elapsed(), "insight request succeeded");
            response::success(InsightResponse {
                product_name: req.product_name,
                company_url: req.company_url,
                insights,
                generated_at: Utc::now(),
            })
            .into_response()
        }
        Err(err) => {
            warn!(kind = err.kind(), error = %err, elapsed = ?start.elapsed(), "insight request failed");
            err.into_response()
        }
    }
}
