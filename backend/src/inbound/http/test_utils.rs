//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::Value;

use crate::Trace;
use crate::domain::ports::{
    MockAccountCommand, MockBookCatalogue, MockChapterCommand, MockGraphDemoQuery,
    MockNewsDetailQuery,
};
use crate::inbound::http::fallback::not_found;
use crate::inbound::http::state::{HttpState, HttpStatePorts};

/// Mocked driving ports. Defaults carry no expectations, so any call fails
/// the test.
#[derive(Default)]
pub struct TestPorts {
    pub accounts: MockAccountCommand,
    pub catalogue: MockBookCatalogue,
    pub chapters: MockChapterCommand,
    pub news: MockNewsDetailQuery,
    pub graph: MockGraphDemoQuery,
}

impl TestPorts {
    pub fn into_state(self) -> HttpState {
        HttpState::new(HttpStatePorts {
            accounts: Arc::new(self.accounts),
            catalogue: Arc::new(self.catalogue),
            chapters: Arc::new(self.chapters),
            news: Arc::new(self.news),
            graph: Arc::new(self.graph),
        })
    }
}

/// Application wired like the server, minus health probes and docs.
pub fn test_app(
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
        .configure(super::configure_api)
        .default_service(web::to(not_found))
}

async fn send(ports: TestPorts, request: test::TestRequest) -> (StatusCode, Value) {
    let app = test::init_service(test_app(ports.into_state())).await;
    let response = test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let bytes = test::read_body(response).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON response body")
    };
    (status, body)
}

/// POST `payload` as JSON to `uri`.
pub async fn call_json(ports: TestPorts, uri: &str, payload: Value) -> (StatusCode, Value) {
    send(ports, test::TestRequest::post().uri(uri).set_json(payload)).await
}

/// POST a raw body with a JSON content type.
pub async fn call_raw(ports: TestPorts, uri: &str, body: &'static str) -> (StatusCode, Value) {
    send(
        ports,
        test::TestRequest::post()
            .uri(uri)
            .insert_header(("content-type", "application/json"))
            .set_payload(body),
    )
    .await
}

/// GET `uri`.
pub async fn call_get(ports: TestPorts, uri: &str) -> (StatusCode, Value) {
    send(ports, test::TestRequest::get().uri(uri)).await
}
