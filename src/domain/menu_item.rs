use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Preparation time in minutes used when none is supplied.
pub const DEFAULT_PREPARATION_TIME: i32 = 15;

/// Dietary classification of a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ItemType {
    #[default]
    #[serde(rename = "Veg")]
    Veg,
    #[serde(rename = "Non-Veg")]
    NonVeg,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Veg => "Veg",
            ItemType::NonVeg => "Non-Veg",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name an [`ItemType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownItemType(pub String);

impl FromStr for ItemType {
    type Err = UnknownItemType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Veg" => Ok(ItemType::Veg),
            "Non-Veg" => Ok(ItemType::NonVeg),
            other => Err(UnknownItemType(other.to_string())),
        }
    }
}

/// Domain representation of a dish offered on one of the restaurant's menus.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MenuItem {
    /// Unique identifier of the item.
    pub id: i32,
    /// Owning restaurant identifier.
    pub restaurant_id: i32,
    /// Menu the item is listed on.
    pub menu_id: i32,
    /// Name of the dish.
    pub name: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Optional free-form category such as `Starters`.
    pub category: Option<String>,
    /// Dietary classification.
    pub item_type: ItemType,
    /// Price in the restaurant's currency.
    pub price: f64,
    /// Preparation time in minutes.
    pub preparation_time: i32,
    /// Whether the dish can currently be ordered.
    pub is_available: bool,
    /// Whether the dish has size or flavour variations.
    pub has_variations: bool,
    /// MIME type of the stored image, when one has been uploaded.
    pub image_mime_type: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new menu item.
#[derive(Debug, Clone)]
pub struct NewMenuItem {
    pub restaurant_id: i32,
    pub menu_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub item_type: ItemType,
    pub price: f64,
    pub preparation_time: i32,
    pub is_available: bool,
    pub created_at: NaiveDateTime,
}

impl NewMenuItem {
    /// Build an available vegetarian item with zero price and default preparation time.
    pub fn new(restaurant_id: i32, menu_id: i32, name: impl Into<String>) -> Self {
        Self {
            restaurant_id,
            menu_id,
            name: name.into(),
            description: None,
            category: None,
            item_type: ItemType::default(),
            price: 0.0,
            preparation_time: DEFAULT_PREPARATION_TIME,
            is_available: true,
            created_at: Local::now().naive_utc(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_item_type(mut self, item_type: ItemType) -> Self {
        self.item_type = item_type;
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_preparation_time(mut self, minutes: i32) -> Self {
        self.preparation_time = minutes;
        self
    }

    pub fn with_availability(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_type_parses_known_labels() {
        assert_eq!("Veg".parse::<ItemType>(), Ok(ItemType::Veg));
        assert_eq!("Non-Veg".parse::<ItemType>(), Ok(ItemType::NonVeg));
        assert_eq!(
            "veg".parse::<ItemType>(),
            Err(UnknownItemType("veg".to_string()))
        );
    }

    #[test]
    fn item_type_serializes_as_label() {
        let value = serde_json::to_value(ItemType::NonVeg).expect("serialize");
        assert_eq!(value, serde_json::json!("Non-Veg"));
    }
}
