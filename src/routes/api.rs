use actix_web::http::header::CONTENT_TYPE;
use actix_web::{HttpRequest, HttpResponse, Responder, get, options, post, web};
use serde_json::{Map, Value};

use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::api::{ActionParams, ApiResponse, handle_action};
use crate::services::restaurants::TenantPolicy;

const MALFORMED_PARAMETERS: &str = "Malformed request parameters";

#[get("/api")]
pub async fn api_get(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    policy: web::Data<TenantPolicy>,
) -> impl Responder {
    match query_params(&req) {
        Ok(params) => dispatch(repo.get_ref(), policy.get_ref(), params),
        Err(message) => bad_request(message),
    }
}

#[post("/api")]
pub async fn api_post(
    req: HttpRequest,
    body: web::Bytes,
    repo: web::Data<DieselRepository>,
    policy: web::Data<TenantPolicy>,
) -> impl Responder {
    let mut params = match query_params(&req) {
        Ok(params) => params,
        Err(message) => return bad_request(message),
    };

    match body_params(&req, &body) {
        Ok(body) => params.merge(body),
        Err(message) => return bad_request(message),
    }

    dispatch(repo.get_ref(), policy.get_ref(), params)
}

/// Preflight requests; CORS headers come from the app-wide middleware.
#[options("/api")]
pub async fn api_preflight() -> impl Responder {
    HttpResponse::Ok().finish()
}

fn dispatch(repo: &DieselRepository, policy: &TenantPolicy, params: ActionParams) -> HttpResponse {
    let mut rng = rand::thread_rng();
    let result = handle_action(repo, policy, &params, &mut rng);

    if let Err(ServiceError::Internal(message)) = &result {
        log::error!(
            "Action `{}` failed: {message}",
            params.get("action").unwrap_or_default()
        );
    }

    let response = ApiResponse::from(result);
    if response.success {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::BadRequest().json(response)
    }
}

fn bad_request(message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::failure(message))
}

fn query_params(req: &HttpRequest) -> Result<ActionParams, String> {
    serde_html_form::from_str::<Vec<(String, String)>>(req.query_string())
        .map(ActionParams::from_iter)
        .map_err(|err| {
            log::debug!("Failed to parse query string: {err}");
            MALFORMED_PARAMETERS.to_string()
        })
}

fn body_params(req: &HttpRequest, body: &[u8]) -> Result<ActionParams, String> {
    if body.is_empty() {
        return Ok(ActionParams::new());
    }

    let is_json = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.to_ascii_lowercase().contains("json"));

    if is_json {
        json_params(body)
    } else {
        serde_html_form::from_bytes::<Vec<(String, String)>>(body)
            .map(ActionParams::from_iter)
            .map_err(|err| {
                log::debug!("Failed to parse form body: {err}");
                MALFORMED_PARAMETERS.to_string()
            })
    }
}

/// Flattens a JSON object into string parameters. Nulls are dropped, other
/// non-string values keep their JSON text (`4`, `true`).
fn json_params(body: &[u8]) -> Result<ActionParams, String> {
    let object = serde_json::from_slice::<Map<String, Value>>(body).map_err(|err| {
        log::debug!("Failed to parse JSON body: {err}");
        MALFORMED_PARAMETERS.to_string()
    })?;

    Ok(object
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::Null => None,
            Value::String(text) => Some((key, text)),
            other => Some((key, other.to_string())),
        })
        .collect())
}
