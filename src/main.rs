use anyhow::Context;
use folio_kernel::{settings::Settings, InitCtx, ModuleRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load Folio settings")?;
    folio_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        port = settings.server.port,
        "folio-app bootstrap starting"
    );

    let mut registry = ModuleRegistry::new();
    folio_app::register_all(&mut registry, &settings)?;

    let ctx = InitCtx {
        settings: &settings,
    };
    registry.init_modules(&ctx).await?;
    registry.start_modules(&ctx).await?;

    let served = folio_http::start_server(&registry, &settings).await;

    registry.stop_modules().await?;
    tracing::info!("folio-app shut down");
    served
}
