//! Registers a restaurant account: `add-restaurant <USERNAME> <NAME>`.

use std::process::ExitCode;

use clap::Parser;
use dotenvy::dotenv;

use restaurant_dashboard::config::ServerConfig;
use restaurant_dashboard::db::{establish_connection_pool, run_migrations};
use restaurant_dashboard::domain::restaurant::NewRestaurant;
use restaurant_dashboard::repository::{DieselRepository, RestaurantWriter};

#[derive(Debug, Parser)]
#[command(version, about = "Register a restaurant account")]
struct Args {
    /// Login handle of the owning account.
    #[arg(value_parser = non_blank)]
    username: String,

    /// Display name of the restaurant.
    #[arg(value_parser = non_blank)]
    name: String,

    /// SQLite database file; defaults to `app.db`.
    #[arg(short = 'd', long, env = "DATABASE_URL")]
    database_url: Option<String>,
}

fn non_blank(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        Err("must not be empty".to_string())
    } else {
        Ok(value.to_string())
    }
}

fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let args = Args::parse();
    let database_url = args
        .database_url
        .unwrap_or_else(|| ServerConfig::from_env().database_url);

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = run_migrations(&pool) {
        log::error!("Failed to run database migrations: {e}");
        return ExitCode::FAILURE;
    }

    let repo = DieselRepository::new(pool);
    match repo.create_restaurant(&NewRestaurant::new(args.username, args.name)) {
        Ok(restaurant) => {
            println!("{}", restaurant.id);
            log::info!(
                "Created restaurant {} `{}` for `{}`",
                restaurant.id,
                restaurant.name,
                restaurant.username
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to create restaurant: {e}");
            ExitCode::FAILURE
        }
    }
}
