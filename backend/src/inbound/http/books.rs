//! Book catalogue API handlers.
//!
//! ```text
//! POST /api/addBook {"userid":42,"bookname":"Dune"}
//! POST /api/bookList {"userid":42}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};

use crate::domain::ports::AddBookOutcome;
use crate::domain::{Book, BookName, Error, OwnerId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::{BOOK_CREATED, BOOK_EXISTS, Envelope};
use crate::inbound::http::validation::{
    BOOKNAME, FlexibleId, USERID, map_book_name_error, parse_required_id, require,
};
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/addBook`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct AddBookRequest {
    pub userid: Option<FlexibleId>,
    pub bookname: Option<String>,
}

/// Request body for `POST /api/bookList`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct BookListRequest {
    pub userid: Option<FlexibleId>,
}

/// Book row as exposed by the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, utoipa::ToSchema)]
pub struct BookResponse {
    pub id: i64,
    pub bookname: String,
    pub userid: i64,
    #[schema(example = "2024-03-09 14:05:30")]
    pub createtime: String,
    pub bookstatus: i16,
}

impl From<&Book> for BookResponse {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id(),
            bookname: book.name().as_ref().to_owned(),
            userid: book.owner().get(),
            createtime: book.created().as_ref().to_owned(),
            bookstatus: book.status().code(),
        }
    }
}

/// Add a book unless its name is used anywhere in the catalogue.
#[utoipa::path(
    post,
    path = "/api/addBook",
    request_body = AddBookRequest,
    responses(
        (status = 200, description = "Add outcome", body = Envelope),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "Catalogue store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["books"],
    operation_id = "addBook"
)]
#[post("/addBook")]
pub async fn add_book(
    state: web::Data<HttpState>,
    payload: web::Json<AddBookRequest>,
) -> ApiResult<web::Json<Envelope>> {
    let AddBookRequest { userid, bookname } = payload.into_inner();
    let owner = OwnerId::new(parse_required_id(userid, USERID)?);
    let name = BookName::new(&require(bookname, BOOKNAME)?).map_err(map_book_name_error)?;

    let envelope = match state.catalogue.add_book(owner, name).await? {
        AddBookOutcome::Created(_) => Envelope::success(BOOK_CREATED),
        AddBookOutcome::NameTaken => Envelope::rejected(BOOK_EXISTS),
    };
    Ok(web::Json(envelope))
}

/// List an owner's books.
///
/// The body is a JSON string whose content is the JSON array of books, so
/// clients decode it twice. An owner without books receives `"[]"`.
#[utoipa::path(
    post,
    path = "/api/bookList",
    request_body = BookListRequest,
    responses(
        (status = 200, description = "JSON-encoded array of BookResponse", body = String),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "Catalogue store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["books"],
    operation_id = "bookList"
)]
#[post("/bookList")]
pub async fn book_list(
    state: web::Data<HttpState>,
    payload: web::Json<BookListRequest>,
) -> ApiResult<web::Json<String>> {
    let owner = OwnerId::new(parse_required_id(payload.into_inner().userid, USERID)?);
    let books = state.catalogue.list_books(owner).await?;
    let rows: Vec<BookResponse> = books.iter().map(BookResponse::from).collect();
    let encoded = serde_json::to_string(&rows)
        .map_err(|err| Error::internal(format!("failed to encode book list: {err}")))?;
    Ok(web::Json(encoded))
}
