use actix_web::{http::StatusCode, HttpRequest, HttpResponse};
use log::debug;

use crate::problem::ProblemDetails;

pub async fn not_found(req: HttpRequest) -> HttpResponse {
    debug!("No route for {} {}", req.method(), req.path());
    ProblemDetails::for_status(StatusCode::NOT_FOUND)
        .with_instance(req.path())
        .to_response()
}
