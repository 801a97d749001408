use diesel::prelude::*;

use crate::domain::menu_item::{MenuItem as DomainMenuItem, NewMenuItem as DomainNewMenuItem};
use crate::models::menu_item::{MenuItem as DbMenuItem, NewMenuItem as DbNewMenuItem};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, MenuItemReader, MenuItemWriter};

impl MenuItemReader for DieselRepository {
    fn list_menu_items(&self, restaurant_id: i32) -> RepositoryResult<Vec<DomainMenuItem>> {
        use crate::schema::menu_items;

        let mut conn = self.conn()?;

        let rows = menu_items::table
            .filter(menu_items::restaurant_id.eq(restaurant_id))
            .order(menu_items::name.asc())
            .select(DbMenuItem::as_select())
            .load::<DbMenuItem>(&mut conn)?;

        Ok(rows.into_iter().map(DomainMenuItem::from).collect())
    }

    fn get_menu_item_by_name(
        &self,
        restaurant_id: i32,
        name: &str,
    ) -> RepositoryResult<Option<DomainMenuItem>> {
        use crate::schema::menu_items;

        let mut conn = self.conn()?;

        let item = menu_items::table
            .filter(menu_items::restaurant_id.eq(restaurant_id))
            .filter(menu_items::name.eq(name))
            .select(DbMenuItem::as_select())
            .first::<DbMenuItem>(&mut conn)
            .optional()?;

        Ok(item.map(DomainMenuItem::from))
    }
}

impl MenuItemWriter for DieselRepository {
    fn create_menu_item(
        &self,
        new_item: &DomainNewMenuItem,
    ) -> RepositoryResult<DomainMenuItem> {
        use crate::schema::menu_items;

        let mut conn = self.conn()?;

        let insertable = DbNewMenuItem::from(new_item);

        let created = diesel::insert_into(menu_items::table)
            .values(&insertable)
            .returning(DbMenuItem::as_returning())
            .get_result::<DbMenuItem>(&mut conn)?;

        Ok(created.into())
    }
}
