use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Domain representation of a menu belonging to a restaurant.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Menu {
    /// Unique identifier of the menu.
    pub id: i32,
    /// Owning restaurant identifier.
    pub restaurant_id: i32,
    /// Name of the menu, unique within the restaurant.
    pub name: String,
    /// Whether the menu is currently offered.
    pub is_active: bool,
    /// Position of the menu in listings, lowest first.
    pub sort_order: i32,
    /// Timestamp for when the menu record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the menu record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new menu for a restaurant.
#[derive(Debug, Clone)]
pub struct NewMenu {
    /// Owning restaurant identifier.
    pub restaurant_id: i32,
    /// Name of the menu.
    pub name: String,
    /// Timestamp used for both `created_at` and `updated_at`.
    pub created_at: NaiveDateTime,
}

impl NewMenu {
    /// Build a new menu payload stamped with the current time.
    pub fn new(restaurant_id: i32, name: impl Into<String>) -> Self {
        Self {
            restaurant_id,
            name: name.into(),
            created_at: Local::now().naive_utc(),
        }
    }
}
