use actix_files::Files;
use actix_web::middleware::{Condition, DefaultHeaders};
use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;
use tera::Tera;

use restaurant_dashboard::config::ServerConfig;
use restaurant_dashboard::db::{establish_connection_pool, run_migrations};
use restaurant_dashboard::repository::DieselRepository;
use restaurant_dashboard::routes::api::{api_get, api_post, api_preflight};
use restaurant_dashboard::routes::main::show_index;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let config = ServerConfig::from_env();

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    match run_migrations(&pool) {
        Ok(0) => log::info!("Database schema is up to date"),
        Ok(applied) => log::info!("Applied {applied} pending migration(s)"),
        Err(e) => {
            log::error!("Failed to run database migrations: {e}");
            std::process::exit(1);
        }
    }

    let repo = DieselRepository::new(pool);

    let tera = match Tera::new(&format!("{}/**/*", config.templates_dir)) {
        Ok(t) => t,
        Err(e) => {
            log::error!("Parsing error(s): {e}");
            std::process::exit(1);
        }
    };

    let permissive_cors = config.permissive_cors;
    if permissive_cors {
        log::warn!("Permissive CORS is enabled; do not expose this server in production");
    }

    let tenant_policy = config.tenant_policy.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(Condition::new(
                permissive_cors,
                DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Methods", "GET, POST"))
                    .add(("Access-Control-Allow-Headers", "Content-Type")),
            ))
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(show_index)
            .service(api_get)
            .service(api_post)
            .service(api_preflight)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(tenant_policy.clone()))
    })
    .bind((config.address.as_str(), config.port))?
    .run()
    .await
}
