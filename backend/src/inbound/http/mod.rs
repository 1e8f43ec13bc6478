//! HTTP inbound adapter exposing REST endpoints.
//!
//! Every business endpoint lives under the `/api` scope registered by
//! [`configure_api`]; the server and the handler tests share that wiring.

use actix_web::web;

pub mod accounts;
pub mod books;
pub mod chapters;
pub mod detail;
pub mod envelope;
pub mod error;
pub mod fallback;
pub mod graph;
pub mod health;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;

/// JSON extractor configuration mapping unreadable bodies to structured 400s.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(validation::json_error_handler)
}

/// Register the `/api` scope and its handlers.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use bookshelf::inbound::http::configure_api;
///
/// let _app = App::new().configure(configure_api);
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .service(accounts::login)
            .service(accounts::register)
            .service(books::add_book)
            .service(books::book_list)
            .service(detail::detail)
            .service(chapters::add_chapter)
            .service(chapters::edit_chapter)
            .service(graph::graph_demo),
    );
}
