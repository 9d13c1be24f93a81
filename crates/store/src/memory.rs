use std::sync::RwLock;

use chrono::Utc;

use campusfind_core::{ItemId, UserId};
use campusfind_items::{Item, ItemReport};

use crate::filter::ItemFilter;
use crate::store::{ItemStore, StoreError, UserItems};

/// In-memory item store.
///
/// Intended for tests/dev. Mutations are serialized behind an `RwLock`, so
/// each `create`/`claim` is atomic within the process; nothing is persisted.
/// Records are kept newest first (`create` prepends).
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    items: RwLock<Vec<Item>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection (fixtures, seed data). The given
    /// order is preserved and treated as newest first.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<Item>>, StoreError> {
        self.items
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<Item>>, StoreError> {
        self.items
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }
}

impl ItemStore for InMemoryItemStore {
    fn list(&self, filter: &ItemFilter) -> Result<Vec<Item>, StoreError> {
        let items = self.read()?;
        Ok(items.iter().filter(|i| filter.matches(i)).cloned().collect())
    }

    fn get_by_id(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        let items = self.read()?;
        Ok(items.iter().find(|i| i.id() == id).cloned())
    }

    fn create(&self, report: ItemReport, reporter: UserId) -> Result<Item, StoreError> {
        let item = Item::from_report(ItemId::new(), report, reporter, Utc::now().date_naive());

        let mut items = self.write()?;
        items.insert(0, item.clone());

        tracing::debug!(item_id = %item.id(), reporter_id = %reporter, "item report created");
        Ok(item)
    }

    fn claim(&self, item_id: ItemId, claimer: UserId) -> Result<bool, StoreError> {
        let mut items = self.write()?;

        let Some(item) = items.iter_mut().find(|i| i.id() == item_id) else {
            return Ok(false);
        };

        let previous = item.record_claim(claimer);
        if let Some(previous) = previous {
            tracing::warn!(
                %item_id,
                previous_claimer = %previous,
                new_claimer = %claimer,
                "claim overwrote an existing claimer"
            );
        } else {
            tracing::debug!(%item_id, claimer_id = %claimer, "item claimed");
        }

        Ok(true)
    }

    fn list_by_user(&self, user_id: UserId) -> Result<UserItems, StoreError> {
        let items = self.read()?;

        // Three independent scans; an item can land in several buckets.
        Ok(UserItems {
            reported: items
                .iter()
                .filter(|i| i.reporter_id() == user_id)
                .cloned()
                .collect(),
            found: items
                .iter()
                .filter(|i| i.finder_id() == Some(user_id))
                .cloned()
                .collect(),
            claimed: items
                .iter()
                .filter(|i| i.claimer_id() == Some(user_id))
                .cloned()
                .collect(),
        })
    }
}
