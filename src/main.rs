#![forbid(unsafe_code)]
#![deny(rust_2018_idioms, clippy::all)]

use anyhow::Result;
use tracing::info;

mod settings;
mod telemetry;
mod templates;
mod ui;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = settings::load()?;

    telemetry::init(&settings.tracing)?;

    let (addr, server) = warp::serve(ui::ui())
        .try_bind_with_graceful_shutdown(settings.socket_addr(), async {
            tokio::signal::ctrl_c().await.ok();
        })?;

    info!(%addr, "listening");

    server.await;

    info!("shutting down");
    telemetry::shutdown();

    Ok(())
}
