use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::area::{Area as DomainArea, NewArea as DomainNewArea};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::areas)]
pub struct Area {
    pub id: i32,
    pub restaurant_id: i32,
    pub name: String,
    pub sort_order: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::areas)]
pub struct NewArea<'a> {
    pub restaurant_id: i32,
    pub name: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Area> for DomainArea {
    fn from(value: Area) -> Self {
        Self {
            id: value.id,
            restaurant_id: value.restaurant_id,
            name: value.name,
            sort_order: value.sort_order,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewArea> for NewArea<'a> {
    fn from(value: &'a DomainNewArea) -> Self {
        Self {
            restaurant_id: value.restaurant_id,
            name: value.name.as_str(),
            created_at: value.created_at,
            updated_at: value.created_at,
        }
    }
}
