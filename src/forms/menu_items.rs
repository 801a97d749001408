use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::menu_item::{ItemType, NewMenuItem};
use crate::forms::{
    DESCRIPTION_MAX_LEN, NAME_MAX_LEN, is_blank, non_blank, parse_optional_f64,
    parse_optional_flag, parse_optional_i32,
};

/// Result type returned by the menu item form helpers.
pub type MenuItemFormResult<T> = Result<T, MenuItemFormError>;

/// Errors that can occur while processing the "add menu item" payload.
#[derive(Debug, Error)]
pub enum MenuItemFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("Item name is required")]
    EmptyName,
    /// The menu identifier is missing or not a number.
    #[error("Invalid menu selection")]
    InvalidMenu,
    #[error("Item type must be Veg or Non-Veg")]
    InvalidItemType,
    #[error("Price must be a non-negative number")]
    InvalidPrice,
    #[error("Preparation time must be a non-negative whole number")]
    InvalidPreparationTime,
    #[error("Availability must be a boolean")]
    InvalidAvailability,
}

/// Payload of the `add_menu_item` action.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddMenuItemForm {
    /// Identifier of the menu the item is listed on.
    #[serde(default)]
    pub menu_id: Option<String>,
    /// Name of the dish.
    #[serde(default)]
    #[validate(length(max = NAME_MAX_LEN))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = DESCRIPTION_MAX_LEN))]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(length(max = NAME_MAX_LEN))]
    pub category: Option<String>,
    /// `Veg` (default) or `Non-Veg`.
    #[serde(default)]
    pub item_type: Option<String>,
    /// Decimal price; defaults to zero.
    #[serde(default)]
    pub price: Option<String>,
    /// Minutes; defaults to fifteen.
    #[serde(default)]
    pub preparation_time: Option<String>,
    /// Checkbox-style flag; defaults to available.
    #[serde(default)]
    pub is_available: Option<String>,
}

impl AddMenuItemForm {
    /// Validates the payload into a domain `NewMenuItem`.
    pub fn into_new_menu_item(self, restaurant_id: i32) -> MenuItemFormResult<NewMenuItem> {
        if is_blank(&self.name) {
            return Err(MenuItemFormError::EmptyName);
        }

        let menu_id = match parse_optional_i32(self.menu_id.as_deref()) {
            Ok(Some(menu_id)) if menu_id > 0 => menu_id,
            _ => return Err(MenuItemFormError::InvalidMenu),
        };

        self.validate()?;

        let item_type = match non_blank(self.item_type.as_deref()) {
            None => ItemType::default(),
            Some(raw) => raw
                .parse::<ItemType>()
                .map_err(|_| MenuItemFormError::InvalidItemType)?,
        };

        let price = match parse_optional_f64(self.price.as_deref()) {
            Ok(price) if price.unwrap_or_default() >= 0.0 => price,
            _ => return Err(MenuItemFormError::InvalidPrice),
        };

        let preparation_time = match parse_optional_i32(self.preparation_time.as_deref()) {
            Ok(minutes) if minutes.unwrap_or_default() >= 0 => minutes,
            _ => return Err(MenuItemFormError::InvalidPreparationTime),
        };

        let is_available = parse_optional_flag(self.is_available.as_deref())
            .map_err(|_| MenuItemFormError::InvalidAvailability)?;

        let mut new_item =
            NewMenuItem::new(restaurant_id, menu_id, self.name).with_item_type(item_type);

        if let Some(description) = self.description.filter(|value| !is_blank(value)) {
            new_item = new_item.with_description(description);
        }
        if let Some(category) = self.category.filter(|value| !is_blank(value)) {
            new_item = new_item.with_category(category);
        }
        if let Some(price) = price {
            new_item = new_item.with_price(price);
        }
        if let Some(minutes) = preparation_time {
            new_item = new_item.with_preparation_time(minutes);
        }
        if let Some(is_available) = is_available {
            new_item = new_item.with_availability(is_available);
        }

        Ok(new_item)
    }
}
