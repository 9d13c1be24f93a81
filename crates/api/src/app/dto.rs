use chrono::NaiveDate;
use serde::Deserialize;

use campusfind_items::{Item, ItemReport};
use campusfind_store::{DateRange, ItemFilter, UserItems};

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct ReportItemRequest {
    pub title: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub date_found: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct ClaimItemRequest {
    /// Free-text note to whoever holds the item. Logged, not stored.
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListItemsQuery {
    pub category: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl ReportItemRequest {
    /// Parse the category and produce a validated report, or an error
    /// response. Validation runs here, before the store is ever called.
    pub fn into_report(self) -> Result<ItemReport, axum::response::Response> {
        let category = errors::parse_category(&self.category)?;

        let report = ItemReport {
            title: self.title,
            description: self.description,
            category,
            location: self.location,
            date_found: self.date_found,
        };

        report.validate().map_err(errors::domain_error_to_response)?;
        Ok(report)
    }
}

impl ListItemsQuery {
    /// Map query parameters onto a store filter. Unset parameters stay
    /// unset; `date_from`/`date_to` must be supplied together.
    pub fn into_filter(self) -> Result<ItemFilter, axum::response::Response> {
        let category = self
            .category
            .as_deref()
            .map(errors::parse_category)
            .transpose()?;
        let status = self
            .status
            .as_deref()
            .map(errors::parse_status)
            .transpose()?;

        let date_range = match (self.date_from, self.date_to) {
            (Some(start), Some(end)) => Some(DateRange { start, end }),
            (None, None) => None,
            _ => {
                return Err(errors::json_error(
                    axum::http::StatusCode::BAD_REQUEST,
                    "validation_error",
                    "date_from and date_to must be provided together",
                ))
            }
        };

        Ok(ItemFilter {
            category,
            location: self.location,
            status,
            date_range,
        })
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn item_to_json(item: &Item) -> serde_json::Value {
    serde_json::json!({
        "id": item.id().to_string(),
        "title": item.title(),
        "description": item.description(),
        "category": item.category().as_str(),
        "location": item.location(),
        "date_found": item.date_found().to_string(),
        "date_reported": item.date_reported().to_string(),
        "status": item.status().as_str(),
        "reporter_id": item.reporter_id().to_string(),
        "finder_id": item.finder_id().map(|id| id.to_string()),
        "claimer_id": item.claimer_id().map(|id| id.to_string()),
        "claimable": item.is_claimable(),
    })
}

pub fn items_to_json(items: &[Item]) -> serde_json::Value {
    serde_json::json!({
        "count": items.len(),
        "items": items.iter().map(item_to_json).collect::<Vec<_>>(),
    })
}

pub fn user_items_to_json(partitions: &UserItems) -> serde_json::Value {
    serde_json::json!({
        "reported": partitions.reported.iter().map(item_to_json).collect::<Vec<_>>(),
        "found": partitions.found.iter().map(item_to_json).collect::<Vec<_>>(),
        "claimed": partitions.claimed.iter().map(item_to_json).collect::<Vec<_>>(),
    })
}
