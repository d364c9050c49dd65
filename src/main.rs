use pet_warehouse::config::Config;
use pet_warehouse::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(&config);

    server::run(config).await
}

/// Initializes the global tracing subscriber from the loaded configuration.
///
/// `RUST_LOG` takes precedence over the configured level; `LOG_FORMAT=json`
/// switches to newline-delimited JSON output.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
