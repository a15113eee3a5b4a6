use diabetes_api::api::router::create_router;
use diabetes_api::config::AppConfig;
use diabetes_api::inference::{load_classifier, SharedClassifier};
use diabetes_api::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let addr = config.listen_addr();

    let model = load_model(&config);

    tracing::info!("Starting Diabetes Prediction API");
    tracing::info!(
        "Model: {}",
        if model.is_some() { "loaded" } else { "not loaded" }
    );
    tracing::info!("API will be available at: http://{addr}");
    tracing::info!("API docs: http://{addr}/docs");
    tracing::info!("Press CTRL+C to stop the server");

    let state = AppState::new(config, model);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}

/// A failed load is logged and the service starts without a model.
fn load_model(config: &AppConfig) -> Option<SharedClassifier> {
    match load_classifier(&config.model_path) {
        Ok(model) => {
            tracing::info!(
                path = %config.model_path.display(),
                kind = model.kind(),
                features = model.n_features(),
                "Model loaded successfully"
            );
            Some(model)
        }
        Err(e) => {
            tracing::error!(
                path = %config.model_path.display(),
                error = %e,
                "Error loading model; /predict will fail until restart"
            );
            None
        }
    }
}

/// `RUST_LOG` sets the filter (default `info`); `LOG_FORMAT=json` switches
/// to JSON lines.
fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json")) {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}
