//! In-process adapters used when no external store is configured.
//!
//! They honour the same contracts as the network adapters (unique names,
//! optimistic chapter revisions) so the HTTP surface behaves identically in
//! local runs and tests. State lives behind a `Mutex` and is lost on restart.

mod books;
mod search;
mod users;

pub use books::InMemoryBookRepository;
pub use search::InMemorySearchIndex;
pub use users::InMemoryUserRepository;

/// Message reported when a previous holder of the lock panicked.
const POISONED: &str = "in-memory store lock poisoned";
