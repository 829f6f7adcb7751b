use pricecast::{catalog::Catalog, config, model, observability, server};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Init
    observability::init_tracing();
    let metrics_handle = observability::init_metrics()?;

    // 2. Load Config
    let config = config::AppConfig::load("config.yaml")?;

    // 3. Load the reference dataset; the service cannot run without it
    let catalog = Arc::new(Catalog::load(&config.catalog.path)?);

    // 4. Load the pipeline; a failure leaves the service up but unable to predict
    let pipeline = match model::loader::load_pipeline(&config.pipeline.path) {
        Ok(pipeline) => Some(pipeline),
        Err(e) => {
            error!(path = %config.pipeline.path, error = %e, "error loading the model");
            None
        }
    };
    let predictor = model::Predictor::new(catalog.clone(), pipeline);
    info!(ready = predictor.is_ready(), "predictor initialized");

    // 5. Create Router
    let state = server::types::AppState::new(catalog, predictor);
    let app = server::routes::create_router(state, metrics_handle);

    // 6. Bind & Serve
    let listener = TcpListener::bind(config.bind_address()).await?;
    info!("Server listening on http://{}", config.bind_address());

    axum::serve(listener, app).await?;

    Ok(())
}
