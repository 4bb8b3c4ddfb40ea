use axum::{routing::get, Router};
use lightscan::config::{AuditConfig, AuditMode};
use lightscan::{api, models, services};
use std::sync::Arc;
use tower_http::services::ServeFile;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = AuditConfig::from_env()?;

    // lighthouse mode is useless without the CLI and a browser, so refuse
    // to start instead of failing on the first request
    if config.mode == AuditMode::Lighthouse {
        if let Err(e) = services::check_environment() {
            eprintln!("{}. Please install it before starting.", e);
            std::process::exit(1);
        }
    }

    let state = Arc::new(models::AppState {
        client: reqwest::Client::new(),
        config: config.clone(),
    });

    // build our application with a route
    let app = Router::new()
        .route("/", get(api::landing_handler))
        .route("/loading", get(api::loading_handler))
        .route("/audit", get(api::audit_handler))
        .route_service("/robots.txt", ServeFile::new("static/robots.txt"))
        .route_service("/sitemap.xml", ServeFile::new("static/sitemap.xml"))
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    println!("🚀 Server running on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
