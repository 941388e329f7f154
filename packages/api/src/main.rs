use lambda_http::{run, Error};
use std::env::set_var;

use tcg_api::{create_app, state::AppState};
use tcg_shared::config::Settings;

#[tokio::main]
async fn main() -> Result<(), Error> {
    set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");

    let settings = Settings::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(settings.log_level)
        .with_target(false)
        .without_time()
        .init();

    let state = AppState::from_settings(&settings).await;
    tracing::info!(
        "Starting tournament API ({:?} store, fetch limit {})",
        settings.store_backend,
        settings.fetch_limit
    );

    run(create_app(state)).await
}
