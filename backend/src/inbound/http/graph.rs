//! Graph demo API handler.

use actix_web::{get, web};

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Run the fixed neighbours-of traversal.
///
/// The rows are serialised to text and returned as a JSON string.
#[utoipa::path(
    get,
    path = "/api/graph_demo",
    responses(
        (status = 200, description = "JSON-encoded traversal rows", body = String),
        (status = 503, description = "Graph store unavailable or not configured", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["graph"],
    operation_id = "graphDemo"
)]
#[get("/graph_demo")]
pub async fn graph_demo(state: web::Data<HttpState>) -> ApiResult<web::Json<String>> {
    let rows = state.graph.run_demo().await?;
    Ok(web::Json(rows.to_json_text()))
}
