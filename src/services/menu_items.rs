use crate::domain::menu_item::MenuItem;
use crate::forms::menu_items::{AddMenuItemForm, MenuItemFormError};
use crate::repository::{MenuItemReader, MenuItemWriter, MenuReader};
use crate::services::{ServiceError, ServiceResult};

const INVALID_MENU: &str = "Invalid menu selection";

/// Lists the menu items of a restaurant.
pub fn list_menu_items<R>(repo: &R, restaurant_id: i32) -> ServiceResult<Vec<MenuItem>>
where
    R: MenuItemReader + ?Sized,
{
    Ok(repo.list_menu_items(restaurant_id)?)
}

/// Adds an item to one of the restaurant's menus.
///
/// Items are created without variations or an image.
pub fn create_menu_item<R>(
    repo: &R,
    restaurant_id: i32,
    form: AddMenuItemForm,
) -> ServiceResult<MenuItem>
where
    R: MenuReader + MenuItemWriter + ?Sized,
{
    let new_item = form
        .into_new_menu_item(restaurant_id)
        .map_err(|err| match err {
            MenuItemFormError::InvalidMenu => {
                ServiceError::InvalidSelection(INVALID_MENU.to_string())
            }
            other => ServiceError::Form(other.to_string()),
        })?;

    if repo
        .get_menu_by_id(new_item.menu_id, restaurant_id)?
        .is_none()
    {
        return Err(ServiceError::InvalidSelection(INVALID_MENU.to_string()));
    }

    let item = repo.create_menu_item(&new_item)?;
    log::info!(
        "Created menu item {} on menu {} for restaurant {restaurant_id}",
        item.id,
        item.menu_id
    );

    Ok(item)
}
