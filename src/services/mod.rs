pub mod errors;

pub use errors::{ServiceError, ServiceResult};

pub mod api;
pub mod areas;
pub mod menu_items;
pub mod menus;
pub mod restaurants;
pub mod seed;
pub mod tables;
