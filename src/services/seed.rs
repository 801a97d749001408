use std::ops::RangeInclusive;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::domain::area::NewArea;
use crate::domain::menu::NewMenu;
use crate::domain::menu_item::{ItemType, NewMenuItem};
use crate::domain::seed::{SeedKind, SeedOutcome, SeedReport};
use crate::domain::table::NewDiningTable;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    AreaReader, AreaWriter, MenuItemReader, MenuItemWriter, MenuReader, MenuWriter, TableReader,
    TableWriter,
};

/// Menus created by the demo seeder.
pub const DEMO_MENUS: [&str; 5] = [
    "Breakfast Menu",
    "Lunch Menu",
    "Dinner Menu",
    "Drinks Menu",
    "Desserts Menu",
];

/// Areas created by the demo seeder.
pub const DEMO_AREAS: [&str; 4] = ["Main Hall", "Terrace", "Private Room", "Bar Area"];

/// Table labels created by the demo seeder.
pub const DEMO_TABLES: [&str; 5] = ["T1", "T2", "T3", "T4", "T5"];

/// Seat counts drawn for demo tables.
pub const DEMO_TABLE_CAPACITY: RangeInclusive<i32> = 2..=8;

/// A dish created by the demo seeder.
#[derive(Debug, Clone, Copy)]
pub struct DemoItem {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub item_type: ItemType,
    pub price: f64,
}

pub const DEMO_ITEMS: [DemoItem; 5] = [
    DemoItem {
        name: "Margherita Pizza",
        description: "Tomato, mozzarella and fresh basil",
        category: "Main Course",
        item_type: ItemType::Veg,
        price: 12.99,
    },
    DemoItem {
        name: "Chicken Tikka",
        description: "Char-grilled chicken in spiced yogurt",
        category: "Starters",
        item_type: ItemType::NonVeg,
        price: 9.50,
    },
    DemoItem {
        name: "Caesar Salad",
        description: "Romaine, parmesan and garlic croutons",
        category: "Salads",
        item_type: ItemType::Veg,
        price: 8.75,
    },
    DemoItem {
        name: "Grilled Salmon",
        description: "Atlantic salmon with lemon butter",
        category: "Main Course",
        item_type: ItemType::NonVeg,
        price: 18.00,
    },
    DemoItem {
        name: "Chocolate Brownie",
        description: "Warm brownie with vanilla ice cream",
        category: "Desserts",
        item_type: ItemType::Veg,
        price: 6.25,
    },
];

/// Fills a restaurant with demo menus, areas, tables and menu items.
///
/// Entities that already exist are skipped and individual failures are
/// recorded in the report instead of aborting the run, so the call itself
/// cannot fail. Tables and items are attached to randomly chosen areas and
/// menus of the restaurant.
pub fn seed_demo_data<R, G>(repo: &R, restaurant_id: i32, rng: &mut G) -> SeedReport
where
    R: MenuReader
        + MenuWriter
        + AreaReader
        + AreaWriter
        + TableReader
        + TableWriter
        + MenuItemReader
        + MenuItemWriter
        + ?Sized,
    G: Rng,
{
    let mut report = SeedReport::default();

    for name in DEMO_MENUS {
        let outcome = seed_one(
            || repo.get_menu_by_name(restaurant_id, name).map(|menu| menu.is_some()),
            || {
                repo.create_menu(&NewMenu::new(restaurant_id, name))
                    .map(|menu| menu.id)
            },
        );
        record(&mut report, restaurant_id, SeedKind::Menu, name.to_string(), outcome);
    }

    for name in DEMO_AREAS {
        let outcome = seed_one(
            || repo.get_area_by_name(restaurant_id, name).map(|area| area.is_some()),
            || {
                repo.create_area(&NewArea::new(restaurant_id, name))
                    .map(|area| area.id)
            },
        );
        record(&mut report, restaurant_id, SeedKind::Area, name.to_string(), outcome);
    }

    seed_tables(repo, restaurant_id, rng, &mut report);
    seed_menu_items(repo, restaurant_id, rng, &mut report);

    log::info!(
        "Seeded restaurant {restaurant_id}: {} created, {} skipped, {} failed",
        report.created_count(),
        report.skipped_count(),
        report.failed_count()
    );

    report
}

fn seed_tables<R, G>(repo: &R, restaurant_id: i32, rng: &mut G, report: &mut SeedReport)
where
    R: AreaReader + TableReader + TableWriter + ?Sized,
    G: Rng,
{
    let areas = match repo.list_areas(restaurant_id) {
        Ok(areas) => areas,
        Err(err) => {
            for number in DEMO_TABLES {
                let outcome = SeedOutcome::Failed {
                    reason: err.to_string(),
                };
                record(report, restaurant_id, SeedKind::Table, number.to_string(), outcome);
            }
            return;
        }
    };

    for number in DEMO_TABLES {
        let Some(area) = areas.choose(rng) else {
            let outcome = SeedOutcome::Failed {
                reason: "no areas available".to_string(),
            };
            record(report, restaurant_id, SeedKind::Table, number.to_string(), outcome);
            continue;
        };
        let capacity = rng.gen_range(DEMO_TABLE_CAPACITY);
        let area_id = area.area.id;

        let outcome = seed_one(
            || {
                repo.get_table_by_number(restaurant_id, area_id, number)
                    .map(|table| table.is_some())
            },
            || {
                let new_table =
                    NewDiningTable::new(restaurant_id, area_id, number).with_capacity(capacity);
                repo.create_table(&new_table).map(|table| table.id)
            },
        );
        let label = format!("{number} ({}, {capacity} seats)", area.area.name);
        record(report, restaurant_id, SeedKind::Table, label, outcome);
    }
}

fn seed_menu_items<R, G>(repo: &R, restaurant_id: i32, rng: &mut G, report: &mut SeedReport)
where
    R: MenuReader + MenuItemReader + MenuItemWriter + ?Sized,
    G: Rng,
{
    let menu_ids: Vec<i32> = match repo.list_menus(restaurant_id) {
        Ok(menus) => menus.into_iter().map(|menu| menu.id).collect(),
        Err(err) => {
            for item in DEMO_ITEMS {
                let outcome = SeedOutcome::Failed {
                    reason: err.to_string(),
                };
                record(report, restaurant_id, SeedKind::MenuItem, item.name.to_string(), outcome);
            }
            return;
        }
    };

    for item in DEMO_ITEMS {
        let Some(&menu_id) = menu_ids.choose(rng) else {
            let outcome = SeedOutcome::Failed {
                reason: "no menus available".to_string(),
            };
            record(report, restaurant_id, SeedKind::MenuItem, item.name.to_string(), outcome);
            continue;
        };

        let outcome = seed_one(
            || {
                repo.get_menu_item_by_name(restaurant_id, item.name)
                    .map(|existing| existing.is_some())
            },
            || {
                let new_item = NewMenuItem::new(restaurant_id, menu_id, item.name)
                    .with_description(item.description)
                    .with_category(item.category)
                    .with_item_type(item.item_type)
                    .with_price(item.price);
                repo.create_menu_item(&new_item).map(|created| created.id)
            },
        );
        record(report, restaurant_id, SeedKind::MenuItem, item.name.to_string(), outcome);
    }
}

/// Runs the existence check and, when nothing matches, the insert.
fn seed_one(
    exists: impl FnOnce() -> RepositoryResult<bool>,
    create: impl FnOnce() -> RepositoryResult<i32>,
) -> SeedOutcome {
    match exists() {
        Ok(true) => return SeedOutcome::Skipped,
        Ok(false) => {}
        Err(err) => {
            return SeedOutcome::Failed {
                reason: err.to_string(),
            };
        }
    }

    match create() {
        Ok(id) => SeedOutcome::Created { id },
        Err(RepositoryError::Conflict(_)) => SeedOutcome::Skipped,
        Err(err) => SeedOutcome::Failed {
            reason: err.to_string(),
        },
    }
}

fn record(
    report: &mut SeedReport,
    restaurant_id: i32,
    kind: SeedKind,
    label: String,
    outcome: SeedOutcome,
) {
    if let SeedOutcome::Failed { reason } = &outcome {
        log::warn!("Skipping demo {kind} `{label}` for restaurant {restaurant_id}: {reason}");
    }
    report.record(kind, label, outcome);
}
