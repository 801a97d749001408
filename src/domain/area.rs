use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Seating area of a restaurant, e.g. a terrace or main hall.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Area {
    pub id: i32,
    pub restaurant_id: i32,
    pub name: String,
    pub sort_order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Area listing entry carrying the number of tables placed in it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AreaSummary {
    #[serde(flatten)]
    pub area: Area,
    pub table_count: i64,
}

/// Payload required to insert a new area for a restaurant.
#[derive(Debug, Clone)]
pub struct NewArea {
    pub restaurant_id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
}

impl NewArea {
    /// Build a new area payload stamped with the current time.
    pub fn new(restaurant_id: i32, name: impl Into<String>) -> Self {
        Self {
            restaurant_id,
            name: name.into(),
            created_at: Local::now().naive_utc(),
        }
    }
}
