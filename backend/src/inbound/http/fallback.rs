//! Response for requests that match no route.

use actix_web::HttpResponse;
use serde_json::json;

/// `404 {"error":"Not found"}`, installed as the application default service.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "Not found" }))
}
