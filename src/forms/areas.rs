use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::area::NewArea;
use crate::forms::{NAME_MAX_LEN, is_blank};

pub type AreaFormResult<T> = Result<T, AreaFormError>;

#[derive(Debug, Error)]
pub enum AreaFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("Area name is required")]
    EmptyName,
}

/// Payload of the `add_area` action.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddAreaForm {
    #[serde(default)]
    #[validate(length(max = NAME_MAX_LEN))]
    pub name: String,
}

impl AddAreaForm {
    pub fn into_new_area(self, restaurant_id: i32) -> AreaFormResult<NewArea> {
        if is_blank(&self.name) {
            return Err(AreaFormError::EmptyName);
        }
        self.validate()?;

        Ok(NewArea::new(restaurant_id, self.name))
    }
}
