use std::{env, net::SocketAddr, sync::Arc};

use ai_content_generator::{app::envy::Envy, router, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let _ = dotenvy::dotenv();
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("failed to read environment: {:#?}", e);
            return;
        }
    };

    if envy.gemini_api_key().is_none() {
        tracing::warn!("GEMINI_API_KEY is not set, /generate-text will fail");
    }
    if envy.modelslab_credentials().is_none() {
        tracing::warn!("STABLE_DIFFUSION_KEY or MODELSLAB_API_URL is not set, /generate-image will fail");
    }

    // properties
    let port = envy.port.unwrap_or(8000);
    let state = Arc::new(AppState::new(envy));

    // app
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    if let Err(e) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!(%e);
    }
}
