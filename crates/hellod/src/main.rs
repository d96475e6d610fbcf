//! hellod: serve one fixed plain-text response on a configured port
//!
//! No flags and no subcommands. `PORT`, `HOST` and `WORKERS` environment
//! variables override the defaults (80, 0.0.0.0, available CPUs). The
//! process stays alive while serving and exits with status 1 when startup
//! fails.

use hellod_core::{Server, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    init_logger();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => fatal(&err),
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.workers)
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => fatal(&err.into()),
    };

    if let Err(err) = runtime.block_on(run(config)) {
        fatal(&err);
    }
}

async fn run(config: ServerConfig) -> hellod_core::Result<()> {
    let server = Server::bind(&config).await?;

    // The startup notice is part of the process contract, not a log line
    println!("{}", startup_notice(config.port));
    tracing::info!(addr = %server.local_addr(), "listening");

    server.serve().await
}

fn startup_notice(port: u16) -> String {
    format!("Server running at {port}")
}

fn init_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("hellod=info,hellod_core=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

fn fatal(err: &hellod_core::Error) -> ! {
    tracing::error!("{err}");
    std::process::exit(1);
}
