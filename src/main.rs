use anyhow::Result;
use slotboard::settings::Settings;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("slotboard=info")),
        )
        .init();

    let settings = Settings::load();
    slotboard::app::run(settings)
}
