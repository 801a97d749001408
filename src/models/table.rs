use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::table::{DiningTable as DomainDiningTable, NewDiningTable as DomainNewDiningTable};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::dining_tables)]
pub struct DiningTable {
    pub id: i32,
    pub restaurant_id: i32,
    pub area_id: i32,
    pub table_number: String,
    pub capacity: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::dining_tables)]
pub struct NewDiningTable<'a> {
    pub restaurant_id: i32,
    pub area_id: i32,
    pub table_number: &'a str,
    pub capacity: i32,
    pub created_at: NaiveDateTime,
}

impl From<DiningTable> for DomainDiningTable {
    fn from(value: DiningTable) -> Self {
        Self {
            id: value.id,
            restaurant_id: value.restaurant_id,
            area_id: value.area_id,
            table_number: value.table_number,
            capacity: value.capacity,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewDiningTable> for NewDiningTable<'a> {
    fn from(value: &'a DomainNewDiningTable) -> Self {
        Self {
            restaurant_id: value.restaurant_id,
            area_id: value.area_id,
            table_number: value.table_number.as_str(),
            capacity: value.capacity,
            created_at: value.created_at,
        }
    }
}
