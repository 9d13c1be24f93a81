use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use campusfind_core::{DomainError, ItemId, UserId};

use crate::report::ItemReport;

/// Item status lifecycle.
///
/// The only transition any operation produces is `Found -> Claimed`. `Lost`
/// is part of the status vocabulary (and accepted by filters) but nothing in
/// the current system creates a `Lost` record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Lost,
    Found,
    Claimed,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Lost => "lost",
            ItemStatus::Found => "found",
            ItemStatus::Claimed => "claimed",
        }
    }
}

impl core::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for ItemStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lost" => Ok(ItemStatus::Lost),
            "found" => Ok(ItemStatus::Found),
            "claimed" => Ok(ItemStatus::Claimed),
            other => Err(DomainError::validation(format!(
                "status must be one of: lost, found, claimed (got '{other}')"
            ))),
        }
    }
}

/// Item category (closed vocabulary from the report form).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Clothing,
    Accessories,
    Books,
    Keys,
    Bags,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Clothing => "clothing",
            Category::Accessories => "accessories",
            Category::Books => "books",
            Category::Keys => "keys",
            Category::Bags => "bags",
            Category::Other => "other",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "electronics" => Ok(Category::Electronics),
            "clothing" => Ok(Category::Clothing),
            "accessories" => Ok(Category::Accessories),
            "books" => Ok(Category::Books),
            "keys" => Ok(Category::Keys),
            "bags" => Ok(Category::Bags),
            "other" => Ok(Category::Other),
            other => Err(DomainError::validation(format!(
                "category must be one of: electronics, clothing, accessories, books, keys, bags, other (got '{other}')"
            ))),
        }
    }
}

/// A reported lost-and-found item.
///
/// Descriptive fields and ownership of the report are fixed at creation;
/// the only mutation in the item's life is [`Item::record_claim`], which
/// keeps the claimer-iff-claimed invariant by setting `status` and
/// `claimer_id` together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    title: String,
    description: String,
    category: Category,
    location: String,
    date_found: NaiveDate,
    date_reported: NaiveDate,
    status: ItemStatus,
    reporter_id: UserId,
    finder_id: Option<UserId>,
    claimer_id: Option<UserId>,
}

impl Item {
    /// Build a fresh item from a validated report submission.
    ///
    /// The submitting user is recorded as both reporter and finder, the
    /// status starts at `found`, and no claimer is set. The caller supplies
    /// `date_reported` (the store uses today) so the entity stays clock-free.
    pub fn from_report(
        id: ItemId,
        report: ItemReport,
        reporter_id: UserId,
        date_reported: NaiveDate,
    ) -> Self {
        Self {
            id,
            title: report.title,
            description: report.description,
            category: report.category,
            location: report.location,
            date_found: report.date_found,
            date_reported,
            status: ItemStatus::Found,
            reporter_id,
            finder_id: Some(reporter_id),
            claimer_id: None,
        }
    }

    /// Rehydrate an item from persisted (or seeded) field values.
    ///
    /// No lifecycle rules run here; the record is taken as stored.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: ItemId,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        location: impl Into<String>,
        date_found: NaiveDate,
        date_reported: NaiveDate,
        status: ItemStatus,
        reporter_id: UserId,
        finder_id: Option<UserId>,
        claimer_id: Option<UserId>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            category,
            location: location.into(),
            date_found,
            date_reported,
            status,
            reporter_id,
            finder_id,
            claimer_id,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn date_found(&self) -> NaiveDate {
        self.date_found
    }

    pub fn date_reported(&self) -> NaiveDate {
        self.date_reported
    }

    pub fn status(&self) -> ItemStatus {
        self.status
    }

    pub fn reporter_id(&self) -> UserId {
        self.reporter_id
    }

    pub fn finder_id(&self) -> Option<UserId> {
        self.finder_id
    }

    pub fn claimer_id(&self) -> Option<UserId> {
        self.claimer_id
    }

    /// Whether the detail view should offer a claim action.
    pub fn is_claimable(&self) -> bool {
        matches!(self.status, ItemStatus::Found)
    }

    /// Record a claim by `claimer`.
    ///
    /// Deliberately unguarded: an already-claimed item is re-claimed and the
    /// previous claimer is overwritten. Whether a status guard belongs here
    /// is an open product question; until it is answered this reproduces the
    /// long-standing behavior. Returns the claimer that was replaced, if any.
    pub fn record_claim(&mut self, claimer: UserId) -> Option<UserId> {
        let previous = self.claimer_id.replace(claimer);
        self.status = ItemStatus::Claimed;
        previous
    }
}
