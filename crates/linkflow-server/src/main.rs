//! Linkflow — contact-network visualizer backend.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

mod routes;
mod state;

use state::AppState;

fn resolve_data_dir() -> PathBuf {
    std::env::var("LINKFLOW_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--seed" | "seed" => {
                let config = linkflow_core::LinkflowConfig::from_env(resolve_data_dir())?;
                let store = linkflow_store::RosterStore::open(&config.data_paths.roster_file);
                let count = store
                    .reseed()
                    .map_err(|e| anyhow::anyhow!("reseed failed: {}", e))?;
                println!("Roster reset to bundled dataset ({} members)", count);
                return Ok(());
            }
            "--help" | "-h" | "help" => {
                println!("Linkflow — contact-network visualizer backend");
                println!();
                println!("Usage: linkflow [command]");
                println!();
                println!("Commands:");
                println!("  (none)      Start the server");
                println!("  seed        Reset the roster to the bundled dataset");
                println!("  help        Show this help message");
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'linkflow help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    let data_dir = resolve_data_dir();
    info!("Data directory: {}", data_dir.display());

    let config = linkflow_core::LinkflowConfig::from_env(&data_dir)?;
    let port = config.port;

    let state = Arc::new(AppState::new(config));

    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Linkflow server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
