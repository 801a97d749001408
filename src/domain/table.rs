use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Capacity assigned to a table when the caller does not provide one.
pub const DEFAULT_TABLE_CAPACITY: i32 = 4;

/// A physical table placed in one of the restaurant's areas.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DiningTable {
    /// Unique identifier of the table.
    pub id: i32,
    /// Owning restaurant identifier.
    pub restaurant_id: i32,
    /// Area the table is placed in.
    pub area_id: i32,
    /// Free-form label shown to staff, e.g. `T4`.
    pub table_number: String,
    /// Number of seats.
    pub capacity: i32,
    /// Timestamp for when the table record was created.
    pub created_at: NaiveDateTime,
}

/// Table listing entry joined with the name of its area.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DiningTableWithArea {
    #[serde(flatten)]
    pub table: DiningTable,
    pub area_name: String,
}

/// Payload required to insert a new table.
#[derive(Debug, Clone)]
pub struct NewDiningTable {
    pub restaurant_id: i32,
    pub area_id: i32,
    pub table_number: String,
    pub capacity: i32,
    pub created_at: NaiveDateTime,
}

impl NewDiningTable {
    /// Build a table payload with the default capacity.
    pub fn new(restaurant_id: i32, area_id: i32, table_number: impl Into<String>) -> Self {
        Self {
            restaurant_id,
            area_id,
            table_number: table_number.into(),
            capacity: DEFAULT_TABLE_CAPACITY,
            created_at: Local::now().naive_utc(),
        }
    }

    /// Override the number of seats.
    pub fn with_capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }
}
