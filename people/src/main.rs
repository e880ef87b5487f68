use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use tribes_config::AppConfig;
use tribes_observability::{init_tracing, ObservabilityMiddleware, TracingConfig};
use tribes_people::services::InMemoryStore;
use tribes_people::{configure, AppState, Collaborators, SERVICE_NAME};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to read configuration")?;

    init_tracing(TracingConfig::for_service(SERVICE_NAME));
    tracing::info!(
        site_name = %config.site_name,
        data_path = %config.data_path.display(),
        "Configuration loaded"
    );

    let store = InMemoryStore::from_path(&config.data_path)
        .await
        .with_context(|| format!("failed to load seed data from {}", config.data_path.display()))?;

    let bind = (config.host.clone(), config.port);
    let state = web::Data::new(AppState::new(config, Collaborators::from_store(Arc::new(store))));

    tracing::info!(host = %bind.0, port = bind.1, "Starting {}", SERVICE_NAME);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET"])
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(ObservabilityMiddleware::for_service(SERVICE_NAME))
            .wrap(cors)
            .configure(configure)
    })
    .bind(bind)?
    .run()
    .await?;

    Ok(())
}
