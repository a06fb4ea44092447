use clap::Parser;
use keygauge_core::api::Analyzer;
use keygauge_core::catalog::StatCatalog;
use keygauge_core::config::{Config, ConfigOverrides, OutputMode};
use keygauge_core::corpus;
use keygauge_core::error::KgResult;
use keygauge_core::language::Language;
use keygauge_core::weights::WeightSet;
use std::net::SocketAddr;
use std::path::Path;
use std::process;
use std::sync::Arc;
use tracing::info;

mod api;
mod banner;
mod http;
mod pool;

use http::AppState;
use pool::WorkerPool;

const PORT: u16 = 8888;
const DATA_ROOT: &str = "data";
const CONFIG_FILE: &str = "config.conf";

#[derive(Parser, Debug)]
#[command(name = "keygauge", about = "Keyboard layout analysis server")]
struct Args {
    #[command(flatten)]
    overrides: ConfigOverrides,
}

fn setup(args: &Args) -> KgResult<(Config, Arc<WorkerPool>)> {
    let mut config = Config::read(Path::new(CONFIG_FILE))?;
    config.apply_overrides(&args.overrides)?;

    let level = match config.output {
        OutputMode::Quiet => tracing::Level::WARN,
        OutputMode::Normal => tracing::Level::INFO,
        OutputMode::Verbose => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("Language         : {}", config.language);
    info!("Corpus           : {}", config.corpus);
    info!("Output mode      : {}", config.output.as_char());

    let root = Path::new(DATA_ROOT);

    let stage = banner::Stage::begin("Reading Data");
    let language = Language::load(root, &config.language)?;
    let tables = corpus::load(root, &language, &config.corpus)?;
    stage.finish();

    let stage = banner::Stage::begin("Initializing Stats");
    let weights = WeightSet::find(root, &config.language, "default")?;
    let catalog = StatCatalog::build(weights.as_ref())?;
    if config.output == OutputMode::Verbose {
        catalog.audit()?;
    }
    stage.finish();

    let analyzer = Arc::new(Analyzer::new(language, tables, catalog));
    let pool = Arc::new(WorkerPool::new(analyzer, num_cpus::get()));
    Ok((config, pool))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Signal received, shutting down...");
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let (_config, pool) = match setup(&args) {
        Ok(ready) => ready,
        Err(err) => {
            eprintln!("ERROR: {err}");
            process::exit(1);
        }
    };

    let app = http::build_router(AppState {
        pool: Arc::clone(&pool),
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], PORT));
    info!("Server listening on {addr}");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            eprintln!("ERROR: failed to bind port {PORT}: {err}");
            process::exit(1);
        }
    };

    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        eprintln!("ERROR: {err}");
        process::exit(1);
    }

    pool.shutdown();
    info!("Server stopped");
}
