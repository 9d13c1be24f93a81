use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use campusfind_core::{DomainError, DomainResult};

use crate::item::Category;

/// Bounds from the report form schema.
pub const TITLE_MAX_CHARS: usize = 100;
pub const DESCRIPTION_MIN_CHARS: usize = 10;
pub const DESCRIPTION_MAX_CHARS: usize = 500;
pub const LOCATION_MAX_CHARS: usize = 100;

/// Report-form input for a newly found item.
///
/// The store assumes valid input; callers must run [`ItemReport::validate`]
/// before handing a report to `create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemReport {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub location: String,
    pub date_found: NaiveDate,
}

impl ItemReport {
    /// Check field presence and length bounds.
    ///
    /// Category and date are already enforced by the type; this covers the
    /// free-text fields.
    pub fn validate(&self) -> DomainResult<()> {
        if self.title.trim().is_empty() {
            return Err(DomainError::validation("title is required"));
        }
        if self.title.chars().count() > TITLE_MAX_CHARS {
            return Err(DomainError::validation(format!(
                "title must be at most {TITLE_MAX_CHARS} characters"
            )));
        }

        let description_chars = self.description.chars().count();
        if description_chars < DESCRIPTION_MIN_CHARS {
            return Err(DomainError::validation(format!(
                "description must be at least {DESCRIPTION_MIN_CHARS} characters"
            )));
        }
        if description_chars > DESCRIPTION_MAX_CHARS {
            return Err(DomainError::validation(format!(
                "description must be at most {DESCRIPTION_MAX_CHARS} characters"
            )));
        }

        if self.location.trim().is_empty() {
            return Err(DomainError::validation("location is required"));
        }
        if self.location.chars().count() > LOCATION_MAX_CHARS {
            return Err(DomainError::validation(format!(
                "location must be at most {LOCATION_MAX_CHARS} characters"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_report() -> ItemReport {
        ItemReport {
            title: "Car Keys".to_string(),
            description: "Honda car keys with keychain.".to_string(),
            category: Category::Keys,
            location: "Parking Garage".to_string(),
            date_found: NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
        }
    }

    #[test]
    fn valid_report_passes() {
        assert!(valid_report().validate().is_ok());
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut report = valid_report();
        report.title = "   ".to_string();
        let err = report.validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn overlong_title_is_rejected() {
        let mut report = valid_report();
        report.title = "x".repeat(TITLE_MAX_CHARS + 1);
        assert!(report.validate().is_err());
    }

    #[test]
    fn short_description_is_rejected() {
        let mut report = valid_report();
        report.description = "too short".to_string();
        assert!(report.description.chars().count() < DESCRIPTION_MIN_CHARS);
        assert!(report.validate().is_err());
    }

    #[test]
    fn overlong_description_is_rejected() {
        let mut report = valid_report();
        report.description = "x".repeat(DESCRIPTION_MAX_CHARS + 1);
        assert!(report.validate().is_err());
    }

    #[test]
    fn blank_location_is_rejected() {
        let mut report = valid_report();
        report.location = String::new();
        assert!(report.validate().is_err());
    }

    #[test]
    fn boundary_lengths_pass() {
        let mut report = valid_report();
        report.title = "x".repeat(TITLE_MAX_CHARS);
        report.description = "x".repeat(DESCRIPTION_MIN_CHARS);
        report.location = "x".repeat(LOCATION_MAX_CHARS);
        assert!(report.validate().is_ok());

        report.description = "x".repeat(DESCRIPTION_MAX_CHARS);
        assert!(report.validate().is_ok());
    }
}
