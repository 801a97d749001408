use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A restaurant account. Every other entity is scoped to one.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Restaurant {
    pub id: i32,
    /// Display name of the restaurant.
    pub name: String,
    /// Login handle of the owning account.
    pub username: String,
    pub created_at: NaiveDateTime,
}

/// Payload required to register a restaurant.
#[derive(Debug, Clone)]
pub struct NewRestaurant {
    pub name: String,
    pub username: String,
    pub created_at: NaiveDateTime,
}

impl NewRestaurant {
    pub fn new(username: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            username: username.into(),
            created_at: Local::now().naive_utc(),
        }
    }
}
