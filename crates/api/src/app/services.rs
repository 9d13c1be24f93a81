use std::sync::Arc;

use campusfind_store::{seed, InMemoryItemStore, ItemStore};

/// Services shared by all handlers.
///
/// Holds the item store behind its trait so a persistence-backed
/// implementation can be wired in without touching the routes.
pub struct AppServices {
    store: Arc<dyn ItemStore>,
}

impl AppServices {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn ItemStore {
        self.store.as_ref()
    }
}

/// Wire the default (in-memory) services.
pub fn build_services(seed_demo: bool) -> AppServices {
    let store = if seed_demo {
        tracing::info!("seeding demo items into the in-memory store");
        InMemoryItemStore::with_items(seed::demo_items())
    } else {
        InMemoryItemStore::new()
    };

    AppServices::new(Arc::new(store))
}
