mod config;
mod errors;
mod media;
mod models;
mod routes;

use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, web};
use crate::config::Config;
use crate::errors::ApiError;
use crate::media::MediaLister;
use crate::routes::{health, media as media_routes};
use actix_web::middleware::Logger;
use actix_web::http::header;
use actix_web::web::Data;
use env_logger::Env;

/// Registers the `/api` routes. Static files and the fallback are added in `main`.
fn api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/media", web::get().to(media_routes::list_media)),
    );
}

async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::NotFound)
}

fn cors(origins: &[String]) -> Cors {
    let cors = if origins.is_empty() {
        Cors::permissive()
    } else {
        origins.iter().fold(Cors::default(), |c, o| c.allowed_origin(o))
    };
    cors.allowed_methods(vec!["GET"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Init logger to show info by default, but can be overridden by RUST_LOG
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cfg = Config::from_args_env()?;

    let media_dir = cfg.media_dir();
    if !media_dir.is_dir() {
        log::warn!("media directory {} does not exist, listings will be empty", media_dir.display());
    }
    let lister = Data::new(MediaLister::new(&media_dir, cfg.media_url_prefix.clone()));

    log::info!("Serving {} at {}", lister.dir().display(), cfg.listen);

    let listen_addr = cfg.listen.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(cors(&cfg.allowed_origins))
            .app_data(lister.clone())
            .configure(api)
            .service(actix_files::Files::new(cfg.media_mount(), &media_dir))
            .default_service(web::to(not_found))
    })
    .bind(listen_addr)?
    .run()
    .await?;
    Ok(())
}
