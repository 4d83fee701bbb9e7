use lambda_http::{run, service_fn, tracing, Error, Request};
use roles_shared::{AdminClient, AppState, Config};
use std::sync::Arc;

mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    // Configuration and the HTTP connection pool live for the whole container
    let config = Config::from_env()?;
    tracing::info!(?config, "Loaded admin API configuration");

    let state = AppState::new(AdminClient::new(config));

    run(service_fn(move |event: Request| {
        let state = Arc::clone(&state);
        async move { http_handler::function_handler(event, state).await }
    }))
    .await
}
