use crate::db::{DbConnection, DbPool};
use crate::domain::area::{Area, AreaSummary, NewArea};
use crate::domain::menu::{Menu, NewMenu};
use crate::domain::menu_item::{MenuItem, NewMenuItem};
use crate::domain::restaurant::{NewRestaurant, Restaurant};
use crate::domain::table::{DiningTable, DiningTableWithArea, NewDiningTable};
use crate::repository::errors::RepositoryResult;

pub mod area;
pub mod errors;
pub mod menu;
pub mod menu_item;
pub mod restaurant;
pub mod table;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over restaurant accounts.
pub trait RestaurantReader {
    fn list_restaurants(&self) -> RepositoryResult<Vec<Restaurant>>;
    fn get_restaurant_by_id(&self, id: i32) -> RepositoryResult<Option<Restaurant>>;
    fn get_restaurant_by_username(&self, username: &str) -> RepositoryResult<Option<Restaurant>>;
}

/// Write operations over restaurant accounts.
pub trait RestaurantWriter {
    fn create_restaurant(&self, new_restaurant: &NewRestaurant) -> RepositoryResult<Restaurant>;
}

/// Read-only operations over the menus of a restaurant.
pub trait MenuReader {
    fn list_menus(&self, restaurant_id: i32) -> RepositoryResult<Vec<Menu>>;
    fn get_menu_by_id(&self, menu_id: i32, restaurant_id: i32) -> RepositoryResult<Option<Menu>>;
    fn get_menu_by_name(&self, restaurant_id: i32, name: &str) -> RepositoryResult<Option<Menu>>;
}

/// Write operations over the menus of a restaurant.
pub trait MenuWriter {
    fn create_menu(&self, new_menu: &NewMenu) -> RepositoryResult<Menu>;
}

/// Read-only operations over the seating areas of a restaurant.
pub trait AreaReader {
    fn list_areas(&self, restaurant_id: i32) -> RepositoryResult<Vec<AreaSummary>>;
    fn get_area_by_id(&self, area_id: i32, restaurant_id: i32) -> RepositoryResult<Option<Area>>;
    fn get_area_by_name(&self, restaurant_id: i32, name: &str) -> RepositoryResult<Option<Area>>;
}

/// Write operations over the seating areas of a restaurant.
pub trait AreaWriter {
    fn create_area(&self, new_area: &NewArea) -> RepositoryResult<Area>;
}

/// Read-only operations over dining tables.
pub trait TableReader {
    fn list_tables(&self, restaurant_id: i32) -> RepositoryResult<Vec<DiningTableWithArea>>;
    fn get_table_by_number(
        &self,
        restaurant_id: i32,
        area_id: i32,
        table_number: &str,
    ) -> RepositoryResult<Option<DiningTable>>;
}

/// Write operations over dining tables.
pub trait TableWriter {
    fn create_table(&self, new_table: &NewDiningTable) -> RepositoryResult<DiningTable>;
}

/// Read-only operations over menu items.
pub trait MenuItemReader {
    fn list_menu_items(&self, restaurant_id: i32) -> RepositoryResult<Vec<MenuItem>>;
    fn get_menu_item_by_name(
        &self,
        restaurant_id: i32,
        name: &str,
    ) -> RepositoryResult<Option<MenuItem>>;
}

/// Write operations over menu items.
pub trait MenuItemWriter {
    fn create_menu_item(&self, new_item: &NewMenuItem) -> RepositoryResult<MenuItem>;
}

/// Every capability the action router needs from storage.
pub trait DashboardRepository:
    RestaurantReader
    + MenuReader
    + MenuWriter
    + AreaReader
    + AreaWriter
    + TableReader
    + TableWriter
    + MenuItemReader
    + MenuItemWriter
{
}

impl<T> DashboardRepository for T where
    T: RestaurantReader
        + MenuReader
        + MenuWriter
        + AreaReader
        + AreaWriter
        + TableReader
        + TableWriter
        + MenuItemReader
        + MenuItemWriter
{
}
