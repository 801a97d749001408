use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::restaurant::{
    NewRestaurant as DomainNewRestaurant, Restaurant as DomainRestaurant,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::restaurants)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub username: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::restaurants)]
pub struct NewRestaurant<'a> {
    pub name: &'a str,
    pub username: &'a str,
    pub created_at: NaiveDateTime,
}

impl From<Restaurant> for DomainRestaurant {
    fn from(value: Restaurant) -> Self {
        Self {
            id: value.id,
            name: value.name,
            username: value.username,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewRestaurant> for NewRestaurant<'a> {
    fn from(value: &'a DomainNewRestaurant) -> Self {
        Self {
            name: value.name.as_str(),
            username: value.username.as_str(),
            created_at: value.created_at,
        }
    }
}
