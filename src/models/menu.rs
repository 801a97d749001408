use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::menu::{Menu as DomainMenu, NewMenu as DomainNewMenu};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::menus)]
pub struct Menu {
    pub id: i32,
    pub restaurant_id: i32,
    pub name: String,
    pub is_active: bool,
    pub sort_order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::menus)]
pub struct NewMenu<'a> {
    pub restaurant_id: i32,
    pub name: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Menu> for DomainMenu {
    fn from(value: Menu) -> Self {
        Self {
            id: value.id,
            restaurant_id: value.restaurant_id,
            name: value.name,
            is_active: value.is_active,
            sort_order: value.sort_order,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewMenu> for NewMenu<'a> {
    fn from(value: &'a DomainNewMenu) -> Self {
        Self {
            restaurant_id: value.restaurant_id,
            name: value.name.as_str(),
            created_at: value.created_at,
            updated_at: value.created_at,
        }
    }
}
