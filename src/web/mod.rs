mod handlers;
mod state;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::config::DashboardConfig;
use state::AppState;

/// Register the dashboard's pages and API routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Static files
        .route("/", web::get().to(handlers::index_html))
        .route("/app.js", web::get().to(handlers::app_js))
        .route("/style.css", web::get().to(handlers::style_css))
        // API routes
        .route("/api/bounds", web::get().to(handlers::bounds))
        .route("/api/series", web::get().to(handlers::series_query))
        .route("/api/series", web::post().to(handlers::series_json))
        .route("/api/export", web::get().to(handlers::export));
}

pub async fn start_server(port: u16, config: DashboardConfig) -> std::io::Result<()> {
    let data = web::Data::new(AppState::new(config));

    tracing::info!(port, "starting population growth dashboard");
    println!("Starting Population Growth Dashboard on http://localhost:{port}");

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(data.clone())
            .configure(configure)
    })
    .bind(("127.0.0.1", port))?
    .run()
    .await
}
