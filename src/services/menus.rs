use crate::domain::menu::Menu;
use crate::forms::menus::AddMenuForm;
use crate::repository::errors::RepositoryError;
use crate::repository::{MenuReader, MenuWriter};
use crate::services::{ServiceError, ServiceResult};

/// Lists the menus of a restaurant.
pub fn list_menus<R>(repo: &R, restaurant_id: i32) -> ServiceResult<Vec<Menu>>
where
    R: MenuReader + ?Sized,
{
    Ok(repo.list_menus(restaurant_id)?)
}

/// Creates a menu unless the restaurant already has one with the same name.
pub fn create_menu<R>(repo: &R, restaurant_id: i32, form: AddMenuForm) -> ServiceResult<Menu>
where
    R: MenuReader + MenuWriter + ?Sized,
{
    let new_menu = form
        .into_new_menu(restaurant_id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let duplicate = || ServiceError::Conflict(format!("Menu '{}' already exists", new_menu.name));

    if repo
        .get_menu_by_name(restaurant_id, &new_menu.name)?
        .is_some()
    {
        return Err(duplicate());
    }

    match repo.create_menu(&new_menu) {
        Ok(menu) => {
            log::info!("Created menu {} for restaurant {restaurant_id}", menu.id);
            Ok(menu)
        }
        Err(RepositoryError::Conflict(_)) => Err(duplicate()),
        Err(err) => Err(err.into()),
    }
}
