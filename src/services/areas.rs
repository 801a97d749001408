use crate::domain::area::{Area, AreaSummary};
use crate::forms::areas::AddAreaForm;
use crate::repository::errors::RepositoryError;
use crate::repository::{AreaReader, AreaWriter};
use crate::services::{ServiceError, ServiceResult};

/// Lists the areas of a restaurant together with their table counts.
pub fn list_areas<R>(repo: &R, restaurant_id: i32) -> ServiceResult<Vec<AreaSummary>>
where
    R: AreaReader + ?Sized,
{
    Ok(repo.list_areas(restaurant_id)?)
}

/// Creates an area unless the restaurant already has one with the same name.
pub fn create_area<R>(repo: &R, restaurant_id: i32, form: AddAreaForm) -> ServiceResult<Area>
where
    R: AreaReader + AreaWriter + ?Sized,
{
    let new_area = form
        .into_new_area(restaurant_id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let duplicate = || ServiceError::Conflict(format!("Area '{}' already exists", new_area.name));

    if repo
        .get_area_by_name(restaurant_id, &new_area.name)?
        .is_some()
    {
        return Err(duplicate());
    }

    match repo.create_area(&new_area) {
        Ok(area) => {
            log::info!("Created area {} for restaurant {restaurant_id}", area.id);
            Ok(area)
        }
        Err(RepositoryError::Conflict(_)) => Err(duplicate()),
        Err(err) => Err(err.into()),
    }
}
