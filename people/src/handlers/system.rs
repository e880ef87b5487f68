use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::state::AppState;
use crate::view::Outcome;
use crate::SERVICE_NAME;

/// GET /health
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now()
    }))
}

/// GET /404, and every request no route matches.
pub async fn not_found(state: web::Data<AppState>) -> Outcome {
    Outcome::not_found(state.site_name())
}
