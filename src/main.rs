use dioxus_logger::tracing::{self, Level};
use freezer_tracker::server::{
    config::Config, error::Error, model::app::AppState, router, startup,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(e) = dioxus_logger::init(level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let session = startup::connect_to_session(&config).await?;
    let db = startup::connect_to_database(&config).await?;

    let app = router::routes()
        .with_state(AppState { db })
        .layer(session);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
