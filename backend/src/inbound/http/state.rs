//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AccountCommand, BookCatalogue, ChapterCommand, GraphDemoQuery, NewsDetailQuery,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub accounts: Arc<dyn AccountCommand>,
    pub catalogue: Arc<dyn BookCatalogue>,
    pub chapters: Arc<dyn ChapterCommand>,
    pub news: Arc<dyn NewsDetailQuery>,
    pub graph: Arc<dyn GraphDemoQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn AccountCommand>,
    pub catalogue: Arc<dyn BookCatalogue>,
    pub chapters: Arc<dyn ChapterCommand>,
    pub news: Arc<dyn NewsDetailQuery>,
    pub graph: Arc<dyn GraphDemoQuery>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use bookshelf::domain::ports::UnconfiguredGraphDemo;
    /// use bookshelf::domain::{
    ///     AccountService, BookCatalogueService, ChapterService, NewsDetailService,
    /// };
    /// use bookshelf::inbound::http::state::{HttpState, HttpStatePorts};
    /// use bookshelf::outbound::memory::{
    ///     InMemoryBookRepository, InMemorySearchIndex, InMemoryUserRepository,
    /// };
    /// use mockable::DefaultClock;
    ///
    /// let index = Arc::new(InMemorySearchIndex::default());
    /// let state = HttpState::new(HttpStatePorts {
    ///     accounts: Arc::new(AccountService::new(Arc::new(InMemoryUserRepository::default()))),
    ///     catalogue: Arc::new(BookCatalogueService::new(
    ///         Arc::new(InMemoryBookRepository::default()),
    ///         Arc::new(DefaultClock),
    ///     )),
    ///     chapters: Arc::new(ChapterService::new(index.clone(), Arc::new(DefaultClock))),
    ///     news: Arc::new(NewsDetailService::new(index)),
    ///     graph: Arc::new(UnconfiguredGraphDemo),
    /// });
    /// let _accounts = state.accounts.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            accounts,
            catalogue,
            chapters,
            news,
            graph,
        } = ports;
        Self {
            accounts,
            catalogue,
            chapters,
            news,
            graph,
        }
    }
}
