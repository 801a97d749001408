use rand::SeedableRng;
use rand::rngs::StdRng;

use restaurant_dashboard::domain::menu::NewMenu;
use restaurant_dashboard::domain::seed::{SeedKind, SeedOutcome};
use restaurant_dashboard::repository::{AreaReader, MenuItemReader, MenuReader, MenuWriter, TableReader};
use restaurant_dashboard::services::seed::{
    DEMO_AREAS, DEMO_ITEMS, DEMO_MENUS, DEMO_TABLE_CAPACITY, DEMO_TABLES, seed_demo_data,
};

mod common;

#[test]
fn test_seed_fills_empty_restaurant() {
    let test_db = common::TestDb::new("test_seed_fills_empty_restaurant.db");
    let repo = test_db.repository();
    let owner = common::create_restaurant(&repo, "owner", "Owner");
    let mut rng = StdRng::seed_from_u64(42);

    let report = seed_demo_data(&repo, owner.id, &mut rng);

    assert_eq!(report.failed_count(), 0);
    assert_eq!(report.created_of(SeedKind::Menu), DEMO_MENUS.len());
    assert_eq!(report.created_of(SeedKind::Area), DEMO_AREAS.len());
    assert_eq!(report.created_of(SeedKind::Table), DEMO_TABLES.len());
    assert_eq!(report.created_of(SeedKind::MenuItem), DEMO_ITEMS.len());
    assert_eq!(report.created_count(), 19);
    assert_eq!(report.created().len(), 19);

    let menus = repo.list_menus(owner.id).unwrap();
    let areas = repo.list_areas(owner.id).unwrap();
    let tables = repo.list_tables(owner.id).unwrap();
    let items = repo.list_menu_items(owner.id).unwrap();

    assert_eq!(menus.len(), 5);
    assert_eq!(areas.len(), 4);
    assert_eq!(
        tables
            .iter()
            .map(|t| t.table.table_number.as_str())
            .collect::<Vec<_>>(),
        vec!["T1", "T2", "T3", "T4", "T5"]
    );
    assert!(
        tables
            .iter()
            .all(|t| DEMO_TABLE_CAPACITY.contains(&t.table.capacity))
    );
    assert!(
        tables
            .iter()
            .all(|t| areas.iter().any(|a| a.area.id == t.table.area_id))
    );
    assert_eq!(items.len(), 5);
    assert!(
        items
            .iter()
            .all(|i| menus.iter().any(|m| m.id == i.menu_id))
    );
    assert_eq!(
        areas.iter().map(|a| a.table_count).sum::<i64>(),
        DEMO_TABLES.len() as i64
    );
}

#[test]
fn test_seed_skips_existing_menu() {
    let test_db = common::TestDb::new("test_seed_skips_existing_menu.db");
    let repo = test_db.repository();
    let owner = common::create_restaurant(&repo, "owner", "Owner");
    repo.create_menu(&NewMenu::new(owner.id, "Lunch Menu")).unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    let report = seed_demo_data(&repo, owner.id, &mut rng);

    assert_eq!(report.created_of(SeedKind::Menu), DEMO_MENUS.len() - 1);
    assert_eq!(report.created_count(), 18);
    assert_eq!(report.skipped_count(), 1);
    assert!(report.entries.iter().any(|entry| {
        entry.kind == SeedKind::Menu
            && entry.label == "Lunch Menu"
            && entry.outcome == SeedOutcome::Skipped
    }));
    assert_eq!(repo.list_menus(owner.id).unwrap().len(), 5);
}

#[test]
fn test_second_seed_creates_nothing_new_for_named_entities() {
    let test_db = common::TestDb::new("test_second_seed_creates_nothing_new_for_named_entities.db");
    let repo = test_db.repository();
    let owner = common::create_restaurant(&repo, "owner", "Owner");
    let mut rng = StdRng::seed_from_u64(3);

    seed_demo_data(&repo, owner.id, &mut rng);
    let second = seed_demo_data(&repo, owner.id, &mut rng);

    assert_eq!(second.created_of(SeedKind::Menu), 0);
    assert_eq!(second.created_of(SeedKind::Area), 0);
    assert_eq!(second.created_of(SeedKind::MenuItem), 0);
    assert_eq!(second.failed_count(), 0);
    assert_eq!(repo.list_menus(owner.id).unwrap().len(), 5);
    assert_eq!(repo.list_menu_items(owner.id).unwrap().len(), 5);
}

#[test]
fn test_seed_is_scoped_to_restaurant() {
    let test_db = common::TestDb::new("test_seed_is_scoped_to_restaurant.db");
    let repo = test_db.repository();
    let owner = common::create_restaurant(&repo, "owner", "Owner");
    let other = common::create_restaurant(&repo, "other", "Other");
    let mut rng = StdRng::seed_from_u64(9);

    seed_demo_data(&repo, owner.id, &mut rng);

    assert!(repo.list_menus(other.id).unwrap().is_empty());
    assert!(repo.list_tables(other.id).unwrap().is_empty());
}
