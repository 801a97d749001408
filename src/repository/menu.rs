use diesel::prelude::*;

use crate::domain::menu::{Menu as DomainMenu, NewMenu as DomainNewMenu};
use crate::models::menu::{Menu as DbMenu, NewMenu as DbNewMenu};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, MenuReader, MenuWriter};

impl MenuReader for DieselRepository {
    fn list_menus(&self, restaurant_id: i32) -> RepositoryResult<Vec<DomainMenu>> {
        use crate::schema::menus;

        let mut conn = self.conn()?;

        let rows = menus::table
            .filter(menus::restaurant_id.eq(restaurant_id))
            .order((menus::sort_order.asc(), menus::created_at.desc()))
            .load::<DbMenu>(&mut conn)?;

        Ok(rows.into_iter().map(DomainMenu::from).collect())
    }

    fn get_menu_by_id(
        &self,
        menu_id: i32,
        restaurant_id: i32,
    ) -> RepositoryResult<Option<DomainMenu>> {
        use crate::schema::menus;

        let mut conn = self.conn()?;

        let menu = menus::table
            .filter(menus::id.eq(menu_id))
            .filter(menus::restaurant_id.eq(restaurant_id))
            .first::<DbMenu>(&mut conn)
            .optional()?;

        Ok(menu.map(DomainMenu::from))
    }

    fn get_menu_by_name(
        &self,
        restaurant_id: i32,
        name: &str,
    ) -> RepositoryResult<Option<DomainMenu>> {
        use crate::schema::menus;

        let mut conn = self.conn()?;

        let menu = menus::table
            .filter(menus::restaurant_id.eq(restaurant_id))
            .filter(menus::name.eq(name))
            .first::<DbMenu>(&mut conn)
            .optional()?;

        Ok(menu.map(DomainMenu::from))
    }
}

impl MenuWriter for DieselRepository {
    fn create_menu(&self, new_menu: &DomainNewMenu) -> RepositoryResult<DomainMenu> {
        use crate::schema::menus;

        let mut conn = self.conn()?;

        let insertable = DbNewMenu::from(new_menu);

        let created = diesel::insert_into(menus::table)
            .values(&insertable)
            .get_result::<DbMenu>(&mut conn)?;

        Ok(created.into())
    }
}
