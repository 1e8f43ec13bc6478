//! News detail API handler.
//!
//! ```text
//! POST /api/detail {"eid":"n-17"}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{DocumentId, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{EID, FlexibleId, map_document_id_error, require};

/// Request body for `POST /api/detail`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct DetailRequest {
    /// Document id; integers are accepted and used in decimal form.
    pub eid: Option<FlexibleId>,
}

/// Return the stored body of the news document `eid`.
#[utoipa::path(
    post,
    path = "/api/detail",
    request_body = DetailRequest,
    responses(
        (status = 200, description = "Document source", body = Object),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "No document with that id", body = Error),
        (status = 503, description = "Search index unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["news"],
    operation_id = "detail"
)]
#[post("/detail")]
pub async fn detail(
    state: web::Data<HttpState>,
    payload: web::Json<DetailRequest>,
) -> ApiResult<web::Json<Value>> {
    let eid = DocumentId::new(require(payload.into_inner().eid, EID)?.into_key())
        .map_err(map_document_id_error)?;
    let source = state.news.detail(&eid).await?;
    Ok(web::Json(source))
}
