use mockall::mock;

use super::{
    AreaReader, AreaWriter, MenuItemReader, MenuItemWriter, MenuReader, MenuWriter,
    RestaurantReader, TableReader, TableWriter,
};
use crate::domain::{
    area::{Area, AreaSummary, NewArea},
    menu::{Menu, NewMenu},
    menu_item::{MenuItem, NewMenuItem},
    restaurant::Restaurant,
    table::{DiningTable, DiningTableWithArea, NewDiningTable},
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub RestaurantReader {}

    impl RestaurantReader for RestaurantReader {
        fn list_restaurants(&self) -> RepositoryResult<Vec<Restaurant>>;
        fn get_restaurant_by_id(&self, id: i32) -> RepositoryResult<Option<Restaurant>>;
        fn get_restaurant_by_username(&self, username: &str) -> RepositoryResult<Option<Restaurant>>;
    }
}

mock! {
    pub Repository {}

    impl MenuReader for Repository {
        fn list_menus(&self, restaurant_id: i32) -> RepositoryResult<Vec<Menu>>;
        fn get_menu_by_id(&self, menu_id: i32, restaurant_id: i32) -> RepositoryResult<Option<Menu>>;
        fn get_menu_by_name(&self, restaurant_id: i32, name: &str) -> RepositoryResult<Option<Menu>>;
    }

    impl MenuWriter for Repository {
        fn create_menu(&self, new_menu: &NewMenu) -> RepositoryResult<Menu>;
    }

    impl AreaReader for Repository {
        fn list_areas(&self, restaurant_id: i32) -> RepositoryResult<Vec<AreaSummary>>;
        fn get_area_by_id(&self, area_id: i32, restaurant_id: i32) -> RepositoryResult<Option<Area>>;
        fn get_area_by_name(&self, restaurant_id: i32, name: &str) -> RepositoryResult<Option<Area>>;
    }

    impl AreaWriter for Repository {
        fn create_area(&self, new_area: &NewArea) -> RepositoryResult<Area>;
    }

    impl TableReader for Repository {
        fn list_tables(&self, restaurant_id: i32) -> RepositoryResult<Vec<DiningTableWithArea>>;
        fn get_table_by_number(&self, restaurant_id: i32, area_id: i32, table_number: &str) -> RepositoryResult<Option<DiningTable>>;
    }

    impl TableWriter for Repository {
        fn create_table(&self, new_table: &NewDiningTable) -> RepositoryResult<DiningTable>;
    }

    impl MenuItemReader for Repository {
        fn list_menu_items(&self, restaurant_id: i32) -> RepositoryResult<Vec<MenuItem>>;
        fn get_menu_item_by_name(&self, restaurant_id: i32, name: &str) -> RepositoryResult<Option<MenuItem>>;
    }

    impl MenuItemWriter for Repository {
        fn create_menu_item(&self, new_item: &NewMenuItem) -> RepositoryResult<MenuItem>;
    }
}
