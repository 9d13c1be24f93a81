use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use campusfind_items::{Category, Item, ItemStatus};

/// Inclusive date range over `date_found`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Listing filter options.
///
/// Every option is independent and optional; an unset option filters nothing.
/// The default (empty) filter matches all items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    /// Exact category match.
    pub category: Option<Category>,
    /// Case-insensitive substring match on location.
    pub location: Option<String>,
    /// Exact status match.
    pub status: Option<ItemStatus>,
    /// Inclusive bounds on `date_found`.
    pub date_range: Option<DateRange>,
}

impl ItemFilter {
    pub fn matches(&self, item: &Item) -> bool {
        if let Some(category) = self.category {
            if item.category() != category {
                return false;
            }
        }

        if let Some(location) = &self.location {
            let needle = location.to_lowercase();
            if !item.location().to_lowercase().contains(&needle) {
                return false;
            }
        }

        if let Some(status) = self.status {
            if item.status() != status {
                return false;
            }
        }

        if let Some(range) = self.date_range {
            if !range.contains(item.date_found()) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusfind_core::{ItemId, UserId};
    use campusfind_items::ItemReport;

    fn item_at(location: &str, category: Category, date_found: NaiveDate) -> Item {
        Item::from_report(
            ItemId::new(),
            ItemReport {
                title: "Backpack".to_string(),
                description: "Black Nike backpack with laptop compartment.".to_string(),
                category,
                location: location.to_string(),
                date_found,
            },
            UserId::new(),
            date_found,
        )
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn empty_filter_matches_everything() {
        let item = item_at("Reitz Union", Category::Bags, date(10));
        assert!(ItemFilter::default().matches(&item));
    }

    #[test]
    fn location_match_is_case_insensitive_substring() {
        let item = item_at("Marston Science Library", Category::Books, date(10));

        let filter = ItemFilter {
            location: Some("lib".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&item));

        let filter = ItemFilter {
            location: Some("STADIUM".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&item));
    }

    #[test]
    fn date_range_bounds_are_inclusive() {
        let range = DateRange {
            start: date(10),
            end: date(12),
        };
        assert!(range.contains(date(10)));
        assert!(range.contains(date(12)));
        assert!(!range.contains(date(13)));
        assert!(!range.contains(date(9)));
    }

    #[test]
    fn all_set_options_must_match() {
        let item = item_at("Library West", Category::Electronics, date(15));
        let filter = ItemFilter {
            category: Some(Category::Electronics),
            location: Some("library".to_string()),
            status: Some(ItemStatus::Found),
            date_range: Some(DateRange {
                start: date(14),
                end: date(16),
            }),
        };
        assert!(filter.matches(&item));

        let mismatched = ItemFilter {
            category: Some(Category::Keys),
            ..filter
        };
        assert!(!mismatched.matches(&item));
    }
}
