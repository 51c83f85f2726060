//! Project tracking expense client.
//! Default: desktop window (cargo run). Device builds: dx serve --platform android --features mobile.

use anyhow::Context;
use projtrack_client_core::Services;
use projtrack_frontend::app;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "projtrack=info,projtrack_frontend=info,projtrack_client_core=info".into()
            }),
        )
        .init();

    let data_dir = app::data_dir().context("no local data directory on this platform")?;
    let services = Services::open(&data_dir)
        .with_context(|| format!("opening storage in {}", data_dir.display()))?;
    tracing::info!(
        "storage at {}, backend {}",
        data_dir.display(),
        services.api.config().base_url
    );

    app::launch(services);
    Ok(())
}
