//! Serves the cheat-sheet page and its JSON views over HTTP.

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use weldsheet::runtime::{init_tracing, load_index};
use weldsheet::server::{self, DEFAULT_ADDR};

#[derive(Parser, Debug)]
#[command(
    name = "weldsheet-serve",
    version,
    about = "Serve the welding cheat sheet page"
)]
struct Args {
    #[arg(
        long,
        env = "WELDSHEET_ADDR",
        default_value = DEFAULT_ADDR,
        help = "Address to listen on"
    )]
    addr: SocketAddr,
    #[arg(
        long,
        env = "WELDSHEET_CATALOG",
        help = "Serve an exported catalog file instead of the built-in table"
    )]
    catalog: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing("info");

    let index = load_index(args.catalog.as_deref())?;
    server::serve(Arc::new(index), args.addr).await
}
