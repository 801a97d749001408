pub mod area;
pub mod menu;
pub mod menu_item;
pub mod restaurant;
pub mod table;
