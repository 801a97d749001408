use actix_web::{HttpResponse, Responder, get, web};
use tera::{Context, Tera};

use crate::repository::DieselRepository;
use crate::routes::render_template;
use crate::services::api::Action;
use crate::services::restaurants;

#[get("/")]
pub async fn show_index(repo: web::Data<DieselRepository>, tera: web::Data<Tera>) -> impl Responder {
    match restaurants::list_restaurants(repo.get_ref()) {
        Ok(restaurants) => {
            let actions: Vec<&str> = Action::ALL.iter().map(Action::as_str).collect();
            let mut context = Context::new();
            context.insert("restaurants", &restaurants);
            context.insert("actions", &actions);
            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to list restaurants: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
