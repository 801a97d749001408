use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::table::{DEFAULT_TABLE_CAPACITY, NewDiningTable};
use crate::forms::{NAME_MAX_LEN, is_blank, parse_optional_i32};

pub type TableFormResult<T> = Result<T, TableFormError>;

/// Errors that can occur while processing the "add table" payload.
#[derive(Debug, Error)]
pub enum TableFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("Table number is required")]
    EmptyNumber,
    #[error("Capacity must be a whole number")]
    InvalidCapacity,
    #[error("Capacity must be greater than 0")]
    NonPositiveCapacity,
    /// The area identifier is missing or not a number.
    #[error("Invalid area selection")]
    InvalidArea,
}

/// Payload of the `add_table` action.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddTableForm {
    /// Label of the table, e.g. `T4`.
    #[serde(default)]
    #[validate(length(max = NAME_MAX_LEN))]
    pub table_number: String,
    /// Number of seats; defaults to four.
    #[serde(default)]
    pub capacity: Option<String>,
    /// Identifier of the area the table is placed in.
    #[serde(default)]
    pub area_id: Option<String>,
}

impl AddTableForm {
    /// Validates the payload into a domain `NewDiningTable`.
    ///
    /// Checks run in the order number, capacity, area so that callers see
    /// the first problem of the submitted form.
    pub fn into_new_table(self, restaurant_id: i32) -> TableFormResult<NewDiningTable> {
        if is_blank(&self.table_number) {
            return Err(TableFormError::EmptyNumber);
        }
        self.validate()?;

        let capacity = parse_optional_i32(self.capacity.as_deref())
            .map_err(|_| TableFormError::InvalidCapacity)?
            .unwrap_or(DEFAULT_TABLE_CAPACITY);
        if capacity <= 0 {
            return Err(TableFormError::NonPositiveCapacity);
        }

        let area_id = match parse_optional_i32(self.area_id.as_deref()) {
            Ok(Some(area_id)) if area_id > 0 => area_id,
            _ => return Err(TableFormError::InvalidArea),
        };

        Ok(NewDiningTable::new(restaurant_id, area_id, self.table_number).with_capacity(capacity))
    }
}
