use actix_web::{web, HttpRequest, HttpResponse};
use log::debug;

use crate::problem::ProblemDetails;
use crate::validation::{self, ValidationResult};

// Checks the parity of `id`: even ids are accepted, odd ids get a 400 problem
pub async fn check_id(req: HttpRequest, id: web::Path<i32>) -> HttpResponse {
    let id = id.into_inner();
    match validation::evaluate(id) {
        ValidationResult::Ok(message) => {
            debug!("minimal-dus: id={} accepted", id);
            HttpResponse::Ok().json(message)
        }
        ValidationResult::Problem(detail) => {
            debug!("minimal-dus: id={} rejected", id);
            ProblemDetails::bad_request(detail)
                .with_instance(req.path())
                .to_response()
        }
    }
}

/// Rejects path segments that do not parse as `i32` with a 400 problem instead of actix's 404.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        let segment = req.match_info().get("id").unwrap_or_default().to_string();
        debug!("minimal-dus: rejected path segment '{}': {}", segment, err);
        ProblemDetails::bad_request(format!("The value '{}' is not valid for id.", segment))
            .with_instance(req.path())
            .into()
    })
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/minimal-dus")
            .app_data(path_config())
            // Explicit resource so other methods get 405, not the default 404
            .service(web::resource("/{id}").route(web::get().to(check_id)))
    );
}
