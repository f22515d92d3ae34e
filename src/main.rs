use actix_web::HttpServer;
use research_projects_api::{AppConfig, AppState, create_app, telemetry};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing(&telemetry::LogConfig::from_env())?;

    let config = AppConfig::from_env();
    let bind_address = config.server.bind_address.clone();
    tracing::info!(
        bind_address = %bind_address,
        service_ids = ?config.routing.service_ids,
        "starting server"
    );

    let state = AppState::init(config).await?;

    HttpServer::new(move || create_app(state.clone()))
        .bind(&bind_address)?
        .run()
        .await?;

    tracing::info!("server stopped");
    Ok(())
}
