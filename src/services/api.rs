//! Action dispatch for the JSON testing API.
//!
//! A request names an `action` and, optionally, a `restaurant_id`. The
//! remaining parameters are decoded into the form of the selected action.

use std::collections::BTreeMap;
use std::str::FromStr;

use rand::Rng;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::area::AreaSummary;
use crate::domain::menu::Menu;
use crate::domain::menu_item::MenuItem;
use crate::domain::restaurant::Restaurant;
use crate::domain::seed::SeedReport;
use crate::domain::table::DiningTableWithArea;
use crate::repository::DashboardRepository;
use crate::services::restaurants::TenantPolicy;
use crate::services::{
    ServiceError, ServiceResult, areas, menu_items, menus, restaurants, seed, tables,
};

/// Operations exposed through the `action` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ListRestaurants,
    ListTables,
    ListMenuItems,
    ListMenus,
    ListAreas,
    AddMenu,
    AddArea,
    AddTable,
    AddMenuItem,
    SeedDemoData,
}

impl Action {
    pub const ALL: [Action; 10] = [
        Action::ListRestaurants,
        Action::ListTables,
        Action::ListMenuItems,
        Action::ListMenus,
        Action::ListAreas,
        Action::AddMenu,
        Action::AddArea,
        Action::AddTable,
        Action::AddMenuItem,
        Action::SeedDemoData,
    ];

    /// Value of the `action` parameter selecting this operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::ListRestaurants => "get_restaurants",
            Action::ListTables => "get_tables",
            Action::ListMenuItems => "get_menu_items",
            Action::ListMenus => "get_menus",
            Action::ListAreas => "get_areas",
            Action::AddMenu => "add_menu",
            Action::AddArea => "add_area",
            Action::AddTable => "add_table",
            Action::AddMenuItem => "add_menu_item",
            Action::SeedDemoData => "create_sample_data",
        }
    }

    /// Whether the action operates on a single restaurant.
    pub fn is_restaurant_scoped(&self) -> bool {
        !matches!(self, Action::ListRestaurants)
    }
}

impl FromStr for Action {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or(ServiceError::InvalidAction)
    }
}

/// Flat string parameters of an API request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActionParams(BTreeMap<String, String>);

impl ActionParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a parameter.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style variant of [`ActionParams::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Copy every parameter of `other` over this one.
    pub fn merge(&mut self, other: ActionParams) {
        self.0.extend(other.0);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Explicit restaurant id; anything but a positive integer counts as absent.
    pub fn restaurant_id(&self) -> Option<i32> {
        self.get("restaurant_id")
            .and_then(|value| value.trim().parse::<i32>().ok())
            .filter(|id| *id > 0)
    }

    /// Decode the parameters into an action form.
    pub fn form<T: DeserializeOwned>(&self) -> ServiceResult<T> {
        let value = serde_json::to_value(self).map_err(|err| ServiceError::Form(err.to_string()))?;
        serde_json::from_value(value).map_err(|err| ServiceError::Form(err.to_string()))
    }
}

impl FromIterator<(String, String)> for ActionParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Action-specific part of a response envelope.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ApiBody {
    Restaurants {
        restaurants: Vec<Restaurant>,
        count: usize,
    },
    Tables {
        tables: Vec<DiningTableWithArea>,
        count: usize,
    },
    MenuItems {
        menu_items: Vec<MenuItem>,
        count: usize,
    },
    Menus {
        menus: Vec<Menu>,
        count: usize,
    },
    Areas {
        areas: Vec<AreaSummary>,
        count: usize,
    },
    Created {
        id: i32,
        name: String,
    },
    CreatedTable {
        id: i32,
        table_number: String,
    },
    Seeded {
        created: Vec<String>,
        count: usize,
        report: SeedReport,
    },
    Failure {
        message: String,
    },
}

/// JSON envelope returned by every API call.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(flatten)]
    pub body: ApiBody,
}

impl ApiResponse {
    pub fn success(body: ApiBody) -> Self {
        Self {
            success: true,
            body,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            body: ApiBody::Failure {
                message: message.into(),
            },
        }
    }
}

impl From<ServiceResult<ApiBody>> for ApiResponse {
    fn from(value: ServiceResult<ApiBody>) -> Self {
        match value {
            Ok(body) => ApiResponse::success(body),
            Err(err) => ApiResponse::failure(err.to_string()),
        }
    }
}

/// Runs the action named in `params` against the resolved restaurant.
pub fn handle_action<R, G>(
    repo: &R,
    policy: &TenantPolicy,
    params: &ActionParams,
    rng: &mut G,
) -> ServiceResult<ApiBody>
where
    R: DashboardRepository + ?Sized,
    G: Rng,
{
    let action = params
        .get("action")
        .ok_or(ServiceError::InvalidAction)?
        .parse::<Action>()?;

    let restaurant_id = if action.is_restaurant_scoped() {
        let id = policy.resolve(repo, params.restaurant_id());
        log::debug!("Handling `{}` for restaurant {id}", action.as_str());
        id
    } else {
        0
    };

    let body = match action {
        Action::ListRestaurants => {
            let restaurants = restaurants::list_restaurants(repo)?;
            ApiBody::Restaurants {
                count: restaurants.len(),
                restaurants,
            }
        }
        Action::ListTables => {
            let tables = tables::list_tables(repo, restaurant_id)?;
            ApiBody::Tables {
                count: tables.len(),
                tables,
            }
        }
        Action::ListMenuItems => {
            let menu_items = menu_items::list_menu_items(repo, restaurant_id)?;
            ApiBody::MenuItems {
                count: menu_items.len(),
                menu_items,
            }
        }
        Action::ListMenus => {
            let menus = menus::list_menus(repo, restaurant_id)?;
            ApiBody::Menus {
                count: menus.len(),
                menus,
            }
        }
        Action::ListAreas => {
            let areas = areas::list_areas(repo, restaurant_id)?;
            ApiBody::Areas {
                count: areas.len(),
                areas,
            }
        }
        Action::AddMenu => {
            let menu = menus::create_menu(repo, restaurant_id, params.form()?)?;
            ApiBody::Created {
                id: menu.id,
                name: menu.name,
            }
        }
        Action::AddArea => {
            let area = areas::create_area(repo, restaurant_id, params.form()?)?;
            ApiBody::Created {
                id: area.id,
                name: area.name,
            }
        }
        Action::AddTable => {
            let table = tables::create_table(repo, restaurant_id, params.form()?)?;
            ApiBody::CreatedTable {
                id: table.id,
                table_number: table.table_number,
            }
        }
        Action::AddMenuItem => {
            let item = menu_items::create_menu_item(repo, restaurant_id, params.form()?)?;
            ApiBody::Created {
                id: item.id,
                name: item.name,
            }
        }
        Action::SeedDemoData => {
            let report = seed::seed_demo_data(repo, restaurant_id, rng);
            ApiBody::Seeded {
                created: report.created(),
                count: report.created_count(),
                report,
            }
        }
    };

    Ok(body)
}
