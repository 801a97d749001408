use restaurant_dashboard::domain::area::NewArea;
use restaurant_dashboard::domain::menu::NewMenu;
use restaurant_dashboard::domain::menu_item::{ItemType, NewMenuItem};
use restaurant_dashboard::domain::restaurant::NewRestaurant;
use restaurant_dashboard::domain::table::NewDiningTable;
use restaurant_dashboard::repository::errors::RepositoryError;
use restaurant_dashboard::repository::{
    AreaReader, AreaWriter, MenuItemReader, MenuItemWriter, MenuReader, MenuWriter,
    RestaurantReader, RestaurantWriter, TableReader, TableWriter,
};

mod common;

#[test]
fn test_restaurant_repository_lookup() {
    let test_db = common::TestDb::new("test_restaurant_repository_lookup.db");
    let repo = test_db.repository();

    let first = common::create_restaurant(&repo, "first", "First Bistro");
    let second = common::create_restaurant(&repo, "second", "Second Diner");

    let all = repo.list_restaurants().unwrap();
    assert_eq!(
        all.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );

    let found = repo.get_restaurant_by_username("second").unwrap().unwrap();
    assert_eq!(found.id, second.id);
    assert!(repo.get_restaurant_by_username("nobody").unwrap().is_none());
    assert_eq!(
        repo.get_restaurant_by_id(first.id).unwrap().unwrap().name,
        "First Bistro"
    );

    let err = repo
        .create_restaurant(&NewRestaurant::new("first", "Duplicate"))
        .expect_err("expected duplicate username to fail");
    assert!(matches!(err, RepositoryError::Conflict(_)));
}

#[test]
fn test_menu_repository_is_tenant_scoped() {
    let test_db = common::TestDb::new("test_menu_repository_is_tenant_scoped.db");
    let repo = test_db.repository();
    let owner = common::create_restaurant(&repo, "owner", "Owner");
    let other = common::create_restaurant(&repo, "other", "Other");

    let menu = repo.create_menu(&NewMenu::new(owner.id, "Breakfast Menu")).unwrap();
    assert!(menu.is_active);
    assert_eq!(menu.sort_order, 0);

    assert!(repo.get_menu_by_id(menu.id, owner.id).unwrap().is_some());
    assert!(repo.get_menu_by_id(menu.id, other.id).unwrap().is_none());
    assert!(
        repo.get_menu_by_name(owner.id, "Breakfast Menu")
            .unwrap()
            .is_some()
    );
    assert!(
        repo.get_menu_by_name(other.id, "Breakfast Menu")
            .unwrap()
            .is_none()
    );

    assert_eq!(repo.list_menus(owner.id).unwrap().len(), 1);
    assert!(repo.list_menus(other.id).unwrap().is_empty());

    // Same name is fine for another restaurant.
    repo.create_menu(&NewMenu::new(other.id, "Breakfast Menu"))
        .unwrap();
}

#[test]
fn test_duplicate_names_map_to_conflict() {
    let test_db = common::TestDb::new("test_duplicate_names_map_to_conflict.db");
    let repo = test_db.repository();
    let owner = common::create_restaurant(&repo, "owner", "Owner");

    repo.create_menu(&NewMenu::new(owner.id, "Lunch Menu")).unwrap();
    let err = repo
        .create_menu(&NewMenu::new(owner.id, "Lunch Menu"))
        .expect_err("expected unique violation");
    assert!(matches!(err, RepositoryError::Conflict(_)));

    let area = repo.create_area(&NewArea::new(owner.id, "Terrace")).unwrap();
    let err = repo
        .create_area(&NewArea::new(owner.id, "Terrace"))
        .expect_err("expected unique violation");
    assert!(matches!(err, RepositoryError::Conflict(_)));

    repo.create_table(&NewDiningTable::new(owner.id, area.id, "T1"))
        .unwrap();
    let err = repo
        .create_table(&NewDiningTable::new(owner.id, area.id, "T1"))
        .expect_err("expected unique violation");
    assert!(matches!(err, RepositoryError::Conflict(_)));
}

#[test]
fn test_non_positive_capacity_is_rejected_by_storage() {
    let test_db = common::TestDb::new("test_non_positive_capacity_is_rejected_by_storage.db");
    let repo = test_db.repository();
    let owner = common::create_restaurant(&repo, "owner", "Owner");
    let area = repo.create_area(&NewArea::new(owner.id, "Main Hall")).unwrap();

    let err = repo
        .create_table(&NewDiningTable::new(owner.id, area.id, "T0").with_capacity(0))
        .expect_err("expected check constraint to fail");

    assert!(matches!(err, RepositoryError::Database(_)));
}

#[test]
fn test_areas_carry_table_counts() {
    let test_db = common::TestDb::new("test_areas_carry_table_counts.db");
    let repo = test_db.repository();
    let owner = common::create_restaurant(&repo, "owner", "Owner");

    let hall = repo.create_area(&NewArea::new(owner.id, "Main Hall")).unwrap();
    let bar = repo.create_area(&NewArea::new(owner.id, "Bar Area")).unwrap();
    for number in ["T1", "T2", "T3"] {
        repo.create_table(&NewDiningTable::new(owner.id, hall.id, number))
            .unwrap();
    }

    let areas = repo.list_areas(owner.id).unwrap();
    assert_eq!(areas.len(), 2);

    let count_of = |id: i32| {
        areas
            .iter()
            .find(|summary| summary.area.id == id)
            .map(|summary| summary.table_count)
    };
    assert_eq!(count_of(hall.id), Some(3));
    assert_eq!(count_of(bar.id), Some(0));

    assert!(repo.get_area_by_id(hall.id, owner.id).unwrap().is_some());
    assert!(repo.get_area_by_id(hall.id, owner.id + 1).unwrap().is_none());
}

#[test]
fn test_tables_join_area_names_and_sort_by_number() {
    let test_db = common::TestDb::new("test_tables_join_area_names_and_sort_by_number.db");
    let repo = test_db.repository();
    let owner = common::create_restaurant(&repo, "owner", "Owner");
    let other = common::create_restaurant(&repo, "other", "Other");

    let terrace = repo.create_area(&NewArea::new(owner.id, "Terrace")).unwrap();
    let foreign = repo.create_area(&NewArea::new(other.id, "Hidden")).unwrap();

    for number in ["T3", "T1", "T2"] {
        repo.create_table(&NewDiningTable::new(owner.id, terrace.id, number).with_capacity(6))
            .unwrap();
    }
    repo.create_table(&NewDiningTable::new(other.id, foreign.id, "T0"))
        .unwrap();

    let tables = repo.list_tables(owner.id).unwrap();
    assert_eq!(
        tables
            .iter()
            .map(|t| t.table.table_number.as_str())
            .collect::<Vec<_>>(),
        vec!["T1", "T2", "T3"]
    );
    assert!(tables.iter().all(|t| t.area_name == "Terrace"));
    assert!(tables.iter().all(|t| t.table.capacity == 6));

    assert!(
        repo.get_table_by_number(owner.id, terrace.id, "T2")
            .unwrap()
            .is_some()
    );
    assert!(
        repo.get_table_by_number(owner.id, terrace.id, "T9")
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_menu_items_round_trip_and_sort_by_name() {
    let test_db = common::TestDb::new("test_menu_items_round_trip_and_sort_by_name.db");
    let repo = test_db.repository();
    let owner = common::create_restaurant(&repo, "owner", "Owner");
    let menu = repo.create_menu(&NewMenu::new(owner.id, "Dinner Menu")).unwrap();

    let steak = repo
        .create_menu_item(
            &NewMenuItem::new(owner.id, menu.id, "Steak")
                .with_description("Grilled sirloin")
                .with_category("Mains")
                .with_item_type(ItemType::NonVeg)
                .with_price(24.5)
                .with_preparation_time(25)
                .with_availability(false),
        )
        .unwrap();
    repo.create_menu_item(&NewMenuItem::new(owner.id, menu.id, "Bruschetta"))
        .unwrap();

    assert_eq!(steak.item_type, ItemType::NonVeg);
    assert_eq!(steak.price, 24.5);
    assert_eq!(steak.preparation_time, 25);
    assert!(!steak.is_available);
    assert!(!steak.has_variations);
    assert!(steak.image_mime_type.is_none());

    let items = repo.list_menu_items(owner.id).unwrap();
    assert_eq!(
        items.iter().map(|i| i.name.as_str()).collect::<Vec<_>>(),
        vec!["Bruschetta", "Steak"]
    );
    assert_eq!(items[0].item_type, ItemType::Veg);
    assert_eq!(items[0].preparation_time, 15);
    assert!(items[0].is_available);

    assert!(
        repo.get_menu_item_by_name(owner.id, "Steak")
            .unwrap()
            .is_some()
    );
    assert!(
        repo.get_menu_item_by_name(owner.id + 1, "Steak")
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_area_and_item_listings_are_tenant_scoped() {
    let test_db = common::TestDb::new("test_area_and_item_listings_are_tenant_scoped.db");
    let repo = test_db.repository();
    let owner = common::create_restaurant(&repo, "owner", "Owner");
    let other = common::create_restaurant(&repo, "other", "Other");

    let hall = repo.create_area(&NewArea::new(owner.id, "Main Hall")).unwrap();
    let owner_menu = repo.create_menu(&NewMenu::new(owner.id, "Lunch Menu")).unwrap();
    repo.create_menu_item(&NewMenuItem::new(owner.id, owner_menu.id, "Soup"))
        .unwrap();
    repo.create_table(&NewDiningTable::new(owner.id, hall.id, "T1"))
        .unwrap();

    let foreign_area = repo.create_area(&NewArea::new(other.id, "Hidden Room")).unwrap();
    let foreign_menu = repo.create_menu(&NewMenu::new(other.id, "Secret Menu")).unwrap();
    repo.create_menu_item(&NewMenuItem::new(other.id, foreign_menu.id, "Secret Dish"))
        .unwrap();
    for number in ["T1", "T2"] {
        repo.create_table(&NewDiningTable::new(other.id, foreign_area.id, number))
            .unwrap();
    }

    let areas = repo.list_areas(owner.id).unwrap();
    assert_eq!(
        areas.iter().map(|a| a.area.name.as_str()).collect::<Vec<_>>(),
        vec!["Main Hall"]
    );
    assert_eq!(areas[0].table_count, 1);

    let items = repo.list_menu_items(owner.id).unwrap();
    assert_eq!(
        items.iter().map(|i| i.name.as_str()).collect::<Vec<_>>(),
        vec!["Soup"]
    );

    let tables = repo.list_tables(owner.id).unwrap();
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].area_name, "Main Hall");

    let other_areas = repo.list_areas(other.id).unwrap();
    assert_eq!(other_areas.len(), 1);
    assert_eq!(other_areas[0].table_count, 2);
    assert_eq!(
        repo.list_menu_items(other.id)
            .unwrap()
            .iter()
            .map(|i| i.name.as_str())
            .collect::<Vec<_>>(),
        vec!["Secret Dish"]
    );
}
