use crate::configuration::Settings;
use crate::routes::files::upload::ALLOWED_EXTENSIONS;
use actix_web::{get, web, Responder};
use serde_json::json;

#[get("/")]
pub async fn root(settings: web::Data<Settings>) -> impl Responder {
    web::Json(json!({
        "message": "File Service is running",
        "version": env!("CARGO_PKG_VERSION"),
        "supported_formats": ALLOWED_EXTENSIONS,
        "max_file_size": format!("{}MB", settings.uploads.max_file_size / (1024 * 1024)),
    }))
}
