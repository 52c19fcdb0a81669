use actix_web::error::InternalError;
use actix_web::{HttpResponse, HttpResponseBuilder};
use serde_json::json;

// Outward error bodies carry a sanitized message only; anything internal
// belongs in the log, not in the response.

pub fn bad_request(message: &str) -> actix_web::Error {
    error_response(HttpResponse::BadRequest(), message)
}

pub fn not_found(message: &str) -> actix_web::Error {
    error_response(HttpResponse::NotFound(), message)
}

pub fn internal_server_error(message: &str) -> actix_web::Error {
    error_response(HttpResponse::InternalServerError(), message)
}

fn error_response(mut builder: HttpResponseBuilder, message: &str) -> actix_web::Error {
    let response = builder.json(json!({ "error": message }));
    InternalError::from_response(message.to_string(), response).into()
}
