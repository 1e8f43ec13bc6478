//! End-to-end HTTP contract tests against the in-memory adapters.
//!
//! The application is wired exactly as the server wires it, minus the health
//! probes and Swagger UI, so these tests exercise validation, the domain
//! services and the adapters' uniqueness and revision rules together.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use async_trait::async_trait;
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use bookshelf::Trace;
use bookshelf::domain::ports::{ChapterIndex, SearchIndexError, UnconfiguredGraphDemo};
use bookshelf::domain::{
    AccountService, BookCatalogueService, ChapterDocument, ChapterId, ChapterRevision,
    ChapterService, NewsDetailService, StoredChapter, TRACE_ID_HEADER,
};
use bookshelf::inbound::http::configure_api;
use bookshelf::inbound::http::fallback::not_found;
use bookshelf::inbound::http::state::{HttpState, HttpStatePorts};
use bookshelf::outbound::memory::{
    InMemoryBookRepository, InMemorySearchIndex, InMemoryUserRepository,
};

/// Chapter index that lets another writer win every conditional write.
struct RacingChapterIndex {
    inner: Arc<InMemorySearchIndex>,
}

#[async_trait]
impl ChapterIndex for RacingChapterIndex {
    async fn insert(&self, document: &ChapterDocument) -> Result<ChapterId, SearchIndexError> {
        self.inner.insert(document).await
    }

    async fn fetch(&self, id: &ChapterId) -> Result<Option<StoredChapter>, SearchIndexError> {
        self.inner.fetch(id).await
    }

    async fn replace(
        &self,
        id: &ChapterId,
        document: &ChapterDocument,
        expected: ChapterRevision,
    ) -> Result<(), SearchIndexError> {
        self.inner.replace(id, document, expected).await?;
        self.inner.replace(id, document, expected).await
    }
}

struct World {
    index: Arc<InMemorySearchIndex>,
    state: HttpState,
}

fn state_with<I>(index: Arc<InMemorySearchIndex>, chapters: Arc<I>) -> HttpState
where
    I: ChapterIndex + 'static,
{
    HttpState::new(HttpStatePorts {
        accounts: Arc::new(AccountService::new(Arc::new(InMemoryUserRepository::new()))),
        catalogue: Arc::new(BookCatalogueService::new(
            Arc::new(InMemoryBookRepository::new()),
            Arc::new(DefaultClock),
        )),
        chapters: Arc::new(ChapterService::new(chapters, Arc::new(DefaultClock))),
        news: Arc::new(NewsDetailService::new(index)),
        graph: Arc::new(UnconfiguredGraphDemo),
    })
}

#[fixture]
fn world() -> World {
    let index = Arc::new(InMemorySearchIndex::new());
    World {
        state: state_with(index.clone(), index.clone()),
        index,
    }
}

fn app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(configure_api)
        .default_service(web::to(not_found))
}

async fn call<S, R>(app: &S, request: R) -> (StatusCode, Value)
where
    S: Service<R, Response = ServiceResponse, Error = actix_web::Error>,
{
    let response = test::call_service(app, request).await;
    let status = response.status();
    let bytes = test::read_body(response).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON response body")
    };
    (status, body)
}

fn post(uri: &str, body: Value) -> test::TestRequest {
    test::TestRequest::post().uri(uri).set_json(body)
}

/// Body of a double-encoded endpoint, decoded twice.
fn decode_twice(body: &Value) -> Value {
    let text = body.as_str().expect("string body");
    serde_json::from_str(text).expect("inner JSON")
}

#[rstest]
#[actix_web::test]
async fn registering_a_username_twice_is_rejected_the_second_time(world: World) {
    let app = test::init_service(app(world.state)).await;
    let credentials = json!({ "username": "ada", "password": "pw1" });

    let (_, first) = call(&app, post("/api/register", credentials.clone()).to_request()).await;
    let (status, second) = call(&app, post("/api/register", credentials).to_request()).await;

    assert_eq!(first["code"], 1);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["code"], 0);
}

#[rstest]
#[actix_web::test]
async fn login_accepts_the_registered_password_only(world: World) {
    let app = test::init_service(app(world.state)).await;
    call(
        &app,
        post("/api/register", json!({ "username": "ada", "password": "s3cret" })).to_request(),
    )
    .await;

    let (_, ok) = call(
        &app,
        post("/api/login", json!({ "username": "ada", "password": "s3cret" })).to_request(),
    )
    .await;
    let (_, wrong) = call(
        &app,
        post("/api/login", json!({ "username": "ada", "password": "guess" })).to_request(),
    )
    .await;
    let (_, unknown) = call(
        &app,
        post("/api/login", json!({ "username": "bob", "password": "s3cret" })).to_request(),
    )
    .await;

    assert_eq!(ok["code"], 1);
    assert_eq!(ok["username"], "ada");
    assert_eq!(wrong["code"], 0);
    assert_eq!(wrong, unknown);
}

#[rstest]
#[actix_web::test]
async fn register_without_username_is_a_bad_request(world: World) {
    let app = test::init_service(app(world.state)).await;

    let (status, body) =
        call(&app, post("/api/register", json!({ "password": "pw" })).to_request()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["field"], "username");
}

#[rstest]
#[actix_web::test]
async fn book_names_are_unique_across_owners(world: World) {
    let app = test::init_service(app(world.state)).await;

    let (_, first) = call(
        &app,
        post("/api/addBook", json!({ "userid": 1, "bookname": "X" })).to_request(),
    )
    .await;
    let (_, second) = call(
        &app,
        post("/api/addBook", json!({ "userid": "2", "bookname": "X" })).to_request(),
    )
    .await;

    assert_eq!(first["code"], 1);
    assert_eq!(second["code"], 0);
}

#[rstest]
#[actix_web::test]
async fn book_list_is_double_encoded_and_scoped_to_the_owner(world: World) {
    let app = test::init_service(app(world.state)).await;
    for (owner, name) in [(1, "First"), (2, "Elsewhere"), (1, "Second")] {
        call(
            &app,
            post("/api/addBook", json!({ "userid": owner, "bookname": name })).to_request(),
        )
        .await;
    }

    let (status, body) =
        call(&app, post("/api/bookList", json!({ "userid": 1 })).to_request()).await;
    let books = decode_twice(&body);

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = books
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|book| book["bookname"].as_str())
        .collect();
    assert_eq!(names, ["First", "Second"]);
    let createtime = books[0]["createtime"].as_str().expect("createtime");
    assert_eq!(createtime.len(), "YYYY-MM-DD HH:MM:SS".len());
    assert_eq!(books[0]["bookstatus"], 0);
}

#[rstest]
#[actix_web::test]
async fn book_list_for_an_owner_without_books_is_empty(world: World) {
    let app = test::init_service(app(world.state)).await;

    let (_, body) = call(&app, post("/api/bookList", json!({ "userid": 42 })).to_request()).await;

    assert_eq!(body, json!("[]"));
}

#[rstest]
#[actix_web::test]
async fn detail_returns_the_stored_source(world: World) {
    world
        .index
        .put_news("n-1", json!({ "title": "Launch", "body": "..." }))
        .expect("seed news");
    let app = test::init_service(app(world.state)).await;

    let (status, body) = call(&app, post("/api/detail", json!({ "eid": "n-1" })).to_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "title": "Launch", "body": "..." }));
}

#[rstest]
#[actix_web::test]
async fn detail_for_a_missing_document_is_a_structured_404(world: World) {
    let app = test::init_service(app(world.state)).await;

    let response = test::call_service(
        &app,
        post("/api/detail", json!({ "eid": "nope" })).to_request(),
    )
    .await;
    let trace_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace-id header");
    let body: Value = test::read_body_json(response).await;

    assert_eq!(body["code"], "not_found");
    assert_eq!(body["details"]["eid"], "nope");
    assert_eq!(body["traceId"], trace_id.as_str());
}

#[rstest]
#[actix_web::test]
async fn chapters_start_at_version_one_and_edits_bump_it(world: World) {
    let app = test::init_service(app(world.state)).await;

    let (_, created) = call(
        &app,
        post(
            "/api/addChapter",
            json!({ "bookid": 3, "chaptername": "Prologue", "chaptercontent": "Once." }),
        )
        .to_request(),
    )
    .await;
    let chapter_id = created["chapterid"].as_str().expect("chapterid").to_owned();
    let before = world
        .index
        .fetch(&ChapterId::new(chapter_id.clone()).expect("id"))
        .await
        .expect("fetch")
        .expect("stored");

    let (_, edited) = call(
        &app,
        post(
            "/api/editChapter",
            json!({ "chapterid": chapter_id, "chaptercontent": "Twice." }),
        )
        .to_request(),
    )
    .await;
    let after = world
        .index
        .fetch(&before.id)
        .await
        .expect("fetch")
        .expect("stored");

    assert_eq!(created["code"], 1);
    assert_eq!(before.document.chapterversion.get(), 1);
    assert_eq!(edited["code"], 1);
    assert_eq!(edited["chapterversion"], 2);
    assert_eq!(after.document.create_date, before.document.create_date);
    assert_eq!(after.document.chaptername.as_deref(), Some("Prologue"));
    assert_eq!(after.document.chaptercontent.as_deref(), Some("Twice."));
}

#[rstest]
#[actix_web::test]
async fn editing_a_missing_chapter_is_rejected(world: World) {
    let app = test::init_service(app(world.state)).await;

    let (status, body) = call(
        &app,
        post("/api/editChapter", json!({ "chapterid": "missing" })).to_request(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    assert_eq!(body["message"], "chapter not found");
}

#[rstest]
#[actix_web::test]
async fn a_lost_edit_race_reports_a_concurrent_modification() {
    let index = Arc::new(InMemorySearchIndex::new());
    let racing = Arc::new(RacingChapterIndex {
        inner: index.clone(),
    });
    let app = test::init_service(app(state_with(index, racing))).await;

    let (_, created) = call(
        &app,
        post("/api/addChapter", json!({ "bookid": 1 })).to_request(),
    )
    .await;
    let (_, body) = call(
        &app,
        post(
            "/api/editChapter",
            json!({ "chapterid": created["chapterid"], "chaptername": "Mine" }),
        )
        .to_request(),
    )
    .await;

    assert_eq!(body["code"], 0);
    assert_eq!(body["message"], "chapter was modified concurrently");
}

#[rstest]
#[actix_web::test]
async fn graph_demo_without_a_store_is_unavailable(world: World) {
    let app = test::init_service(app(world.state)).await;

    let (status, body) = call(
        &app,
        test::TestRequest::get().uri("/api/graph_demo").to_request(),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "service_unavailable");
}

#[rstest]
#[case("/")]
#[case("/api/unknown")]
#[case("/static/app.js")]
#[actix_web::test]
async fn unknown_routes_are_not_found(world: World, #[case] uri: &str) {
    let app = test::init_service(app(world.state)).await;

    let (status, body) = call(&app, test::TestRequest::get().uri(uri).to_request()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Not found" }));
}
