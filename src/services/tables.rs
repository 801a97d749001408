use crate::domain::table::{DiningTable, DiningTableWithArea};
use crate::forms::tables::{AddTableForm, TableFormError};
use crate::repository::errors::RepositoryError;
use crate::repository::{AreaReader, TableReader, TableWriter};
use crate::services::{ServiceError, ServiceResult};

const INVALID_AREA: &str = "Invalid area selection";

/// Lists the tables of a restaurant with the names of their areas.
pub fn list_tables<R>(repo: &R, restaurant_id: i32) -> ServiceResult<Vec<DiningTableWithArea>>
where
    R: TableReader + ?Sized,
{
    Ok(repo.list_tables(restaurant_id)?)
}

/// Places a new table in one of the restaurant's areas.
///
/// The area must belong to the same restaurant and the table number must be
/// unused within that area.
pub fn create_table<R>(repo: &R, restaurant_id: i32, form: AddTableForm) -> ServiceResult<DiningTable>
where
    R: AreaReader + TableReader + TableWriter + ?Sized,
{
    let new_table = form.into_new_table(restaurant_id).map_err(|err| match err {
        TableFormError::InvalidArea => ServiceError::InvalidSelection(INVALID_AREA.to_string()),
        other => ServiceError::Form(other.to_string()),
    })?;

    if repo
        .get_area_by_id(new_table.area_id, restaurant_id)?
        .is_none()
    {
        return Err(ServiceError::InvalidSelection(INVALID_AREA.to_string()));
    }

    let duplicate = || {
        ServiceError::Conflict(format!(
            "Table '{}' already exists in this area",
            new_table.table_number
        ))
    };

    if repo
        .get_table_by_number(restaurant_id, new_table.area_id, &new_table.table_number)?
        .is_some()
    {
        return Err(duplicate());
    }

    match repo.create_table(&new_table) {
        Ok(table) => {
            log::info!(
                "Created table {} in area {} for restaurant {restaurant_id}",
                table.id,
                table.area_id
            );
            Ok(table)
        }
        Err(RepositoryError::Conflict(_)) => Err(duplicate()),
        Err(err) => Err(err.into()),
    }
}
