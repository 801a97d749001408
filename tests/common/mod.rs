//! Helpers for integration tests.
#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

use restaurant_dashboard::db::{DbPool, establish_connection_pool, run_migrations};
use restaurant_dashboard::domain::restaurant::{NewRestaurant, Restaurant};
use restaurant_dashboard::repository::{DieselRepository, RestaurantWriter};

/// Temporary, fully migrated database used in integration tests.
///
/// The database file lives in its own temporary directory, removed on drop
/// together with the SQLite `-wal`/`-shm` companions.
pub struct TestDb {
    path: PathBuf,
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temporary directory.");
        let path = dir.path().join(filename);

        let pool = establish_connection_pool(path.to_str().expect("UTF-8 path"))
            .expect("Failed to establish SQLite connection.");
        run_migrations(&pool).expect("Migrations failed");

        TestDb {
            path,
            pool,
            _dir: dir,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    pub fn repository(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }
}

/// Registers a restaurant owned by `username`.
pub fn create_restaurant(repo: &DieselRepository, username: &str, name: &str) -> Restaurant {
    repo.create_restaurant(&NewRestaurant::new(username, name))
        .expect("Failed to create restaurant.")
}
