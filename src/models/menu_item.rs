use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::menu_item::{MenuItem as DomainMenuItem, NewMenuItem as DomainNewMenuItem};

/// Menu item row without the image payload, which is never loaded for listings.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::menu_items)]
pub struct MenuItem {
    pub id: i32,
    pub restaurant_id: i32,
    pub menu_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub item_type: String,
    pub price: f64,
    pub preparation_time: i32,
    pub is_available: bool,
    pub has_variations: bool,
    pub image_mime_type: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::menu_items)]
pub struct NewMenuItem<'a> {
    pub restaurant_id: i32,
    pub menu_id: i32,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub category: Option<&'a str>,
    pub item_type: &'a str,
    pub price: f64,
    pub preparation_time: i32,
    pub is_available: bool,
    pub has_variations: bool,
    pub image_data: Option<Vec<u8>>,
    pub image_mime_type: Option<&'a str>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<MenuItem> for DomainMenuItem {
    fn from(value: MenuItem) -> Self {
        Self {
            id: value.id,
            restaurant_id: value.restaurant_id,
            menu_id: value.menu_id,
            name: value.name,
            description: value.description,
            category: value.category,
            item_type: value.item_type.parse().unwrap_or_default(),
            price: value.price,
            preparation_time: value.preparation_time,
            is_available: value.is_available,
            has_variations: value.has_variations,
            image_mime_type: value.image_mime_type,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewMenuItem> for NewMenuItem<'a> {
    fn from(value: &'a DomainNewMenuItem) -> Self {
        Self {
            restaurant_id: value.restaurant_id,
            menu_id: value.menu_id,
            name: value.name.as_str(),
            description: value.description.as_deref(),
            category: value.category.as_deref(),
            item_type: value.item_type.as_str(),
            price: value.price,
            preparation_time: value.preparation_time,
            is_available: value.is_available,
            has_variations: false,
            image_data: None,
            image_mime_type: None,
            created_at: value.created_at,
            updated_at: value.created_at,
        }
    }
}
