//! Drafter main entry point

mod app;
mod config;

fn main() -> std::io::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "drafter=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Drafter");

    let shared_config = config::create_shared_config();

    let mut app = app::App::new(shared_config);
    let result = app.run();
    app.save_config();
    result
}
