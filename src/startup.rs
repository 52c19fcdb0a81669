use crate::configuration::Settings;
use crate::connectors::{
    FileServiceClient, FileServiceConnector, ModelServiceClient, ModelServiceConnector,
};
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, web, App, HttpServer};
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub async fn run_gateway(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let pg_pool = web::Data::new(pg_pool);

    let model_service: web::Data<Arc<dyn ModelServiceConnector>> = web::Data::new(Arc::new(
        ModelServiceClient::new(&settings.connectors.model_service),
    ));
    let file_service: web::Data<Arc<dyn FileServiceConnector>> = web::Data::new(Arc::new(
        FileServiceClient::new(&settings.connectors.file_service),
    ));

    let settings = web::Data::new(settings);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .service(routes::health_check)
            .service(routes::status::root)
            .service(routes::status::services_status)
            .service(routes::chat::create::handler)
            .service(routes::chat::history::handler)
            .service(routes::chat::clear::handler)
            .app_data(pg_pool.clone())
            .app_data(model_service.clone())
            .app_data(file_service.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

pub async fn run_file_service(
    listener: TcpListener,
    pg_pool: Pool<Postgres>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let pg_pool = web::Data::new(pg_pool);
    let settings = web::Data::new(settings);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .service(routes::health_check)
            .service(routes::files::info::root)
            .service(routes::files::upload::handler)
            .service(routes::files::list::handler)
            .service(routes::files::content::handler)
            .service(routes::files::delete::handler)
            .app_data(pg_pool.clone())
            .app_data(settings.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
