use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::menu::NewMenu;
use crate::forms::{NAME_MAX_LEN, is_blank};

/// Result type returned by the menu form helpers.
pub type MenuFormResult<T> = Result<T, MenuFormError>;

/// Errors that can occur while processing the "add menu" payload.
#[derive(Debug, Error)]
pub enum MenuFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("Menu name is required")]
    EmptyName,
}

/// Payload of the `add_menu` action.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddMenuForm {
    #[serde(default)]
    #[validate(length(max = NAME_MAX_LEN))]
    pub name: String,
}

impl AddMenuForm {
    /// Validates the payload into a domain `NewMenu`, keeping the name verbatim.
    pub fn into_new_menu(self, restaurant_id: i32) -> MenuFormResult<NewMenu> {
        if is_blank(&self.name) {
            return Err(MenuFormError::EmptyName);
        }
        self.validate()?;

        Ok(NewMenu::new(restaurant_id, self.name))
    }
}
