//! Builders wiring domain services onto configured or in-memory adapters.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::info;

use bookshelf::domain::ports::{
    AccountCommand, BookCatalogue, ChapterCommand, GraphDemoQuery, NewsDetailQuery,
    UnconfiguredGraphDemo,
};
use bookshelf::domain::{
    AccountService, BookCatalogueService, ChapterService, GraphDemoService, NewsDetailService,
};
use bookshelf::inbound::http::state::{HttpState, HttpStatePorts};
use bookshelf::outbound::memory::{
    InMemoryBookRepository, InMemorySearchIndex, InMemoryUserRepository,
};
use bookshelf::outbound::persistence::{DieselBookRepository, DieselUserRepository};

use super::ServerConfig;

fn build_relational(
    config: &ServerConfig,
    clock: &Arc<dyn Clock>,
) -> (Arc<dyn AccountCommand>, Arc<dyn BookCatalogue>) {
    match &config.db_pool {
        Some(pool) => (
            Arc::new(AccountService::new(Arc::new(DieselUserRepository::new(
                pool.clone(),
            )))),
            Arc::new(BookCatalogueService::new(
                Arc::new(DieselBookRepository::new(pool.clone())),
                clock.clone(),
            )),
        ),
        None => {
            info!("no database configured; users and books are kept in memory");
            (
                Arc::new(AccountService::new(Arc::new(InMemoryUserRepository::new()))),
                Arc::new(BookCatalogueService::new(
                    Arc::new(InMemoryBookRepository::new()),
                    clock.clone(),
                )),
            )
        }
    }
}

fn build_search(
    config: &ServerConfig,
    clock: &Arc<dyn Clock>,
) -> (Arc<dyn ChapterCommand>, Arc<dyn NewsDetailQuery>) {
    match &config.search {
        Some(client) => {
            let client = Arc::new(client.clone());
            (
                Arc::new(ChapterService::new(client.clone(), clock.clone())),
                Arc::new(NewsDetailService::new(client)),
            )
        }
        None => {
            info!("no search index configured; chapters and news are kept in memory");
            let index = Arc::new(InMemorySearchIndex::new());
            (
                Arc::new(ChapterService::new(index.clone(), clock.clone())),
                Arc::new(NewsDetailService::new(index)),
            )
        }
    }
}

fn build_graph(config: &ServerConfig) -> Arc<dyn GraphDemoQuery> {
    match &config.graph {
        Some(store) => Arc::new(GraphDemoService::new(
            Arc::new(store.clone()),
            config.graph_demo_node,
        )),
        None => {
            info!("no graph store configured; graph demo is disabled");
            Arc::new(UnconfiguredGraphDemo)
        }
    }
}

/// Build the shared HTTP state from the configured adapters.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let (accounts, catalogue) = build_relational(config, &clock);
    let (chapters, news) = build_search(config, &clock);
    let graph = build_graph(config);

    web::Data::new(HttpState::new(HttpStatePorts {
        accounts,
        catalogue,
        chapters,
        news,
        graph,
    }))
}
