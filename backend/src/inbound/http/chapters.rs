//! Chapter API handlers.
//!
//! ```text
//! POST /api/addChapter {"bookid":3,"chaptername":"One","chaptercontent":"..."}
//! POST /api/editChapter {"chapterid":"abc","chapterabstract":"..."}
//! ```

use actix_web::{post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{BookId, ChapterDraft, ChapterEdit, ChapterEditOutcome, ChapterId, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::{
    CHAPTER_CONFLICT, CHAPTER_CREATED, CHAPTER_NOT_FOUND, CHAPTER_UPDATED, Envelope,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    BOOKID, CHAPTERID, FlexibleId, map_chapter_id_error, parse_required_id, require,
};

/// Request body for `POST /api/addChapter`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct AddChapterRequest {
    pub bookid: Option<FlexibleId>,
    pub chaptername: Option<String>,
    pub chapterabstract: Option<String>,
    pub chaptercontent: Option<String>,
}

/// Request body for `POST /api/editChapter`. Absent fields keep their value.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct EditChapterRequest {
    pub chapterid: Option<String>,
    pub chaptername: Option<String>,
    pub chapterabstract: Option<String>,
    pub chaptercontent: Option<String>,
}

/// Index a new chapter at version 1.
#[utoipa::path(
    post,
    path = "/api/addChapter",
    request_body = AddChapterRequest,
    responses(
        (status = 200, description = "Chapter created", body = Envelope),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "Search index unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["chapters"],
    operation_id = "addChapter"
)]
#[post("/addChapter")]
pub async fn add_chapter(
    state: web::Data<HttpState>,
    payload: web::Json<AddChapterRequest>,
) -> ApiResult<web::Json<Envelope>> {
    let AddChapterRequest {
        bookid,
        chaptername,
        chapterabstract,
        chaptercontent,
    } = payload.into_inner();
    let draft = ChapterDraft {
        book_id: BookId::new(parse_required_id(bookid, BOOKID)?),
        name: chaptername,
        abstract_text: chapterabstract,
        content: chaptercontent,
    };
    let created = state.chapters.add_chapter(draft).await?;
    Ok(web::Json(
        Envelope::success(CHAPTER_CREATED).with_chapter_id(created.chapter_id.as_ref()),
    ))
}

/// Revise a chapter, bumping its version.
///
/// The write is conditional on the revision read, so a concurrent edit makes
/// this one report `code: 0` instead of overwriting it.
#[utoipa::path(
    post,
    path = "/api/editChapter",
    request_body = EditChapterRequest,
    responses(
        (status = 200, description = "Edit outcome", body = Envelope),
        (status = 400, description = "Invalid request", body = Error),
        (status = 503, description = "Search index unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["chapters"],
    operation_id = "editChapter"
)]
#[post("/editChapter")]
pub async fn edit_chapter(
    state: web::Data<HttpState>,
    payload: web::Json<EditChapterRequest>,
) -> ApiResult<web::Json<Envelope>> {
    let EditChapterRequest {
        chapterid,
        chaptername,
        chapterabstract,
        chaptercontent,
    } = payload.into_inner();
    let chapter_id = ChapterId::new(require(chapterid, CHAPTERID)?).map_err(map_chapter_id_error)?;
    let edit = ChapterEdit {
        chapter_id,
        name: chaptername,
        abstract_text: chapterabstract,
        content: chaptercontent,
    };
    let envelope = match state.chapters.edit_chapter(edit).await? {
        ChapterEditOutcome::Updated { version } => {
            Envelope::success(CHAPTER_UPDATED).with_chapter_version(version.get())
        }
        ChapterEditOutcome::NotFound => Envelope::rejected(CHAPTER_NOT_FOUND),
        ChapterEditOutcome::Conflict => Envelope::rejected(CHAPTER_CONFLICT),
    };
    Ok(web::Json(envelope))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockChapterCommand;
    use crate::domain::{ChapterCreated, ChapterVersion};
    use crate::inbound::http::test_utils::{TestPorts, call_json};
    use actix_web::http::StatusCode;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn ports_with(chapters: MockChapterCommand) -> TestPorts {
        TestPorts {
            chapters,
            ..TestPorts::default()
        }
    }

    #[rstest]
    #[actix_web::test]
    async fn add_chapter_returns_the_index_id() {
        let mut chapters = MockChapterCommand::new();
        chapters
            .expect_add_chapter()
            .withf(|draft| {
                draft.book_id == BookId::new(3)
                    && draft.name.as_deref() == Some("One")
                    && draft.content.is_none()
            })
            .times(1)
            .return_once(|_| {
                Ok(ChapterCreated {
                    chapter_id: ChapterId::new("AbC123").expect("valid id"),
                })
            });

        let (status, body) = call_json(
            ports_with(chapters),
            "/api/addChapter",
            json!({ "bookid": "3", "chaptername": "One" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "code": 1, "message": "chapter created", "chapterid": "AbC123" })
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn add_chapter_requires_bookid() {
        let mut chapters = MockChapterCommand::new();
        chapters.expect_add_chapter().never();

        let (status, body) = call_json(
            ports_with(chapters),
            "/api/addChapter",
            json!({ "chaptername": "One" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"]["field"], "bookid");
    }

    #[rstest]
    #[actix_web::test]
    async fn add_chapter_index_outage_is_not_flattened() {
        let mut chapters = MockChapterCommand::new();
        chapters
            .expect_add_chapter()
            .times(1)
            .return_once(|_| Err(Error::service_unavailable("search index unavailable")));

        let (status, body) = call_json(
            ports_with(chapters),
            "/api/addChapter",
            json!({ "bookid": 3 }),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["code"], "service_unavailable");
    }

    #[rstest]
    #[case(
        ChapterEditOutcome::Updated { version: ChapterVersion::INITIAL.next() },
        json!({ "code": 1, "message": "chapter updated", "chapterversion": 2 })
    )]
    #[case(
        ChapterEditOutcome::NotFound,
        json!({ "code": 0, "message": "chapter not found" })
    )]
    #[case(
        ChapterEditOutcome::Conflict,
        json!({ "code": 0, "message": "chapter was modified concurrently" })
    )]
    #[actix_web::test]
    async fn edit_chapter_maps_outcomes(#[case] outcome: ChapterEditOutcome, #[case] expected: Value) {
        let mut chapters = MockChapterCommand::new();
        chapters
            .expect_edit_chapter()
            .withf(|edit| edit.chapter_id.as_ref() == "AbC123" && edit.name.is_none())
            .times(1)
            .return_once(move |_| Ok(outcome));

        let (status, body) = call_json(
            ports_with(chapters),
            "/api/editChapter",
            json!({ "chapterid": "AbC123", "chapterabstract": "new" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, expected);
    }

    #[rstest]
    #[case(json!({}), "missing_field")]
    #[case(json!({ "chapterid": "  " }), "empty_value")]
    #[actix_web::test]
    async fn edit_chapter_validates_chapterid(#[case] payload: Value, #[case] code: &str) {
        let mut chapters = MockChapterCommand::new();
        chapters.expect_edit_chapter().never();

        let (status, body) = call_json(ports_with(chapters), "/api/editChapter", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"]["field"], "chapterid");
        assert_eq!(body["details"]["code"], code);
    }
}
