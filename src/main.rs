use pitchboard::config;
use pitchboard::server;
use pitchboard::telemetry::{self, LogFormat};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    telemetry::init(&config.log_level, LogFormat::parse(&config.log_format));
    config.print_summary();

    server::run(config).await
}
