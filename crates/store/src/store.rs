use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use campusfind_core::{ItemId, UserId};
use campusfind_items::{Item, ItemReport};

use crate::filter::ItemFilter;

/// Item store operation error.
///
/// This is the **infrastructure** error channel only. "Not found" conditions
/// are part of the contract, not failures: `get_by_id` answers `Ok(None)` and
/// `claim` answers `Ok(false)`. What remains is the transient-failure class —
/// a backend outage, or a poisoned lock in the in-memory implementation —
/// which callers surface as a retryable error.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("item store unavailable: {0}")]
    Unavailable(String),
}

/// The three per-user partitions of the collection.
///
/// Partitions are computed independently and are not mutually exclusive: an
/// item whose reporter and finder are the same user appears in both
/// `reported` and `found`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserItems {
    pub reported: Vec<Item>,
    pub found: Vec<Item>,
    pub claimed: Vec<Item>,
}

/// Canonical collection of lost-and-found items.
///
/// ## Semantics
///
/// - `list` preserves insertion order (most-recent-first; `create` prepends)
///   and applies only the filter options that are set.
/// - `create` assumes its input already passed [`ItemReport::validate`]; it
///   assigns a fresh id, stamps today's date as `date_reported`, and records
///   the submitting user as both reporter and finder.
/// - `claim` is atomic per call and **deliberately unguarded**: it sets
///   `status = claimed` and overwrites `claimer_id` regardless of the item's
///   prior status. See DESIGN.md for the open product question this tracks.
/// - No cross-operation ordering is promised; each operation is an
///   independent unit of work.
pub trait ItemStore: Send + Sync {
    /// List items matching `filter`, newest first.
    fn list(&self, filter: &ItemFilter) -> Result<Vec<Item>, StoreError>;

    /// Fetch a single item. Absence is not an error.
    fn get_by_id(&self, id: ItemId) -> Result<Option<Item>, StoreError>;

    /// Insert a new report as the newest record and return the created item.
    fn create(&self, report: ItemReport, reporter: UserId) -> Result<Item, StoreError>;

    /// Claim an item for `claimer`. Returns `Ok(false)` (collection
    /// untouched) when no such item exists.
    fn claim(&self, item_id: ItemId, claimer: UserId) -> Result<bool, StoreError>;

    /// Partition the collection by the user's role on each item.
    fn list_by_user(&self, user_id: UserId) -> Result<UserItems, StoreError>;
}

impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    fn list(&self, filter: &ItemFilter) -> Result<Vec<Item>, StoreError> {
        (**self).list(filter)
    }

    fn get_by_id(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        (**self).get_by_id(id)
    }

    fn create(&self, report: ItemReport, reporter: UserId) -> Result<Item, StoreError> {
        (**self).create(report, reporter)
    }

    fn claim(&self, item_id: ItemId, claimer: UserId) -> Result<bool, StoreError> {
        (**self).claim(item_id, claimer)
    }

    fn list_by_user(&self, user_id: UserId) -> Result<UserItems, StoreError> {
        (**self).list_by_user(user_id)
    }
}
