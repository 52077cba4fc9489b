use grading::server::{config::Config, error::AppError, router, startup, state::AppState};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let app = router::router()
        .with_state(AppState::new(db))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.address()).await?;
    tracing::info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}
