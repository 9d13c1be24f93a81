//! Demo seed data.
//!
//! A small, deterministic campus dataset for local development and tests.
//! IDs are fixed so `/my-items` and claim flows are explorable against a
//! seeded server across restarts.

use chrono::NaiveDate;
use uuid::Uuid;

use campusfind_core::{ItemId, UserId};
use campusfind_items::{Category, Item, ItemStatus};

/// Deterministic demo item id (`n` starting at 1).
pub fn demo_item_id(n: u32) -> ItemId {
    ItemId::from_uuid(Uuid::from_u128(0x11ED_0000_0000_0000_0000_0000_0000 + n as u128))
}

/// Deterministic demo user id (`n` starting at 1).
pub fn demo_user_id(n: u32) -> UserId {
    UserId::from_uuid(Uuid::from_u128(0x05E2_0000_0000_0000_0000_0000_0000 + n as u128))
}

fn date(day: u32) -> NaiveDate {
    // All demo records fall in January 2024.
    NaiveDate::from_ymd_opt(2024, 1, day).expect("valid demo date")
}

/// The demo collection, newest first. Two records are pre-claimed so claimed
/// states are visible without extra setup.
pub fn demo_items() -> Vec<Item> {
    vec![
        Item::restore(
            demo_item_id(1),
            "iPhone 15 Pro",
            "Black iPhone 15 Pro with cracked screen. Found near Library West.",
            Category::Electronics,
            "Library West",
            date(15),
            date(15),
            ItemStatus::Found,
            demo_user_id(1),
            Some(demo_user_id(2)),
            None,
        ),
        Item::restore(
            demo_item_id(2),
            "UF Gators Hoodie",
            "Blue UF Gators hoodie, size M. Left in Turlington Hall.",
            Category::Clothing,
            "Turlington Hall",
            date(14),
            date(14),
            ItemStatus::Found,
            demo_user_id(1),
            Some(demo_user_id(3)),
            None,
        ),
        Item::restore(
            demo_item_id(3),
            "MacBook Air",
            "Silver MacBook Air 13\" with stickers on the cover.",
            Category::Electronics,
            "Marston Science Library",
            date(13),
            date(13),
            ItemStatus::Claimed,
            demo_user_id(1),
            Some(demo_user_id(4)),
            Some(demo_user_id(5)),
        ),
        Item::restore(
            demo_item_id(4),
            "Car Keys",
            "Honda car keys with keychain. Found in parking garage.",
            Category::Keys,
            "Parking Garage",
            date(12),
            date(12),
            ItemStatus::Found,
            demo_user_id(1),
            Some(demo_user_id(6)),
            None,
        ),
        Item::restore(
            demo_item_id(5),
            "Textbook - Calculus",
            "Calculus textbook, 3rd edition. Left in classroom.",
            Category::Books,
            "Little Hall",
            date(11),
            date(11),
            ItemStatus::Found,
            demo_user_id(1),
            Some(demo_user_id(7)),
            None,
        ),
        Item::restore(
            demo_item_id(6),
            "Backpack",
            "Black Nike backpack with laptop compartment.",
            Category::Bags,
            "Reitz Union",
            date(10),
            date(10),
            ItemStatus::Found,
            demo_user_id(1),
            Some(demo_user_id(8)),
            None,
        ),
        Item::restore(
            demo_item_id(7),
            "AirPods Pro",
            "White AirPods Pro in charging case.",
            Category::Electronics,
            "Gainesville Gym",
            date(9),
            date(9),
            ItemStatus::Found,
            demo_user_id(1),
            Some(demo_user_id(9)),
            None,
        ),
        Item::restore(
            demo_item_id(8),
            "UF Ring",
            "Gold UF class ring, size 7.",
            Category::Accessories,
            "Ben Hill Griffin Stadium",
            date(8),
            date(8),
            ItemStatus::Claimed,
            demo_user_id(1),
            Some(demo_user_id(10)),
            Some(demo_user_id(11)),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn demo_ids_are_unique() {
        let items = demo_items();
        let ids: HashSet<_> = items.iter().map(|i| i.id()).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn demo_data_honors_claimer_iff_claimed() {
        for item in demo_items() {
            assert_eq!(
                item.claimer_id().is_some(),
                item.status() == ItemStatus::Claimed
            );
        }
    }

    #[test]
    fn demo_data_is_newest_first_by_date_found() {
        let items = demo_items();
        for pair in items.windows(2) {
            assert!(pair[0].date_found() >= pair[1].date_found());
        }
    }
}
