//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] collects every HTTP endpoint and its request and response
//! schemas. Debug builds serve it through Swagger UI.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::accounts::CredentialsRequest;
use crate::inbound::http::books::{AddBookRequest, BookListRequest, BookResponse};
use crate::inbound::http::chapters::{AddChapterRequest, EditChapterRequest};
use crate::inbound::http::detail::DetailRequest;
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::validation::FlexibleId;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf backend API",
        description = "Accounts, book catalogue, chapters, news detail and a graph demo."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::accounts::login,
        crate::inbound::http::accounts::register,
        crate::inbound::http::books::add_book,
        crate::inbound::http::books::book_list,
        crate::inbound::http::detail::detail,
        crate::inbound::http::chapters::add_chapter,
        crate::inbound::http::chapters::edit_chapter,
        crate::inbound::http::graph::graph_demo,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        Envelope,
        FlexibleId,
        CredentialsRequest,
        AddBookRequest,
        BookListRequest,
        BookResponse,
        AddChapterRequest,
        EditChapterRequest,
        DetailRequest,
    )),
    tags(
        (name = "accounts", description = "Registration and login"),
        (name = "books", description = "Book catalogue"),
        (name = "chapters", description = "Chapter authoring"),
        (name = "news", description = "News detail lookup"),
        (name = "graph", description = "Graph store demo"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
