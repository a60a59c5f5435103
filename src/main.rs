//! bizdash - a terminal dashboard for finance, projects and reports
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use bizdash_core::prelude::*;
use clap::Parser;

/// bizdash - a terminal dashboard for finance, projects and reports
#[derive(Parser, Debug)]
#[command(name = "bizdash")]
#[command(about = "A terminal dashboard for finance, projects and reports", long_about = None)]
struct Args {
    /// Workspace directory (holds .bizdash/config.toml)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Print a JSON snapshot of the dashboard metrics instead of starting the TUI
    #[arg(long)]
    headless: bool,

    /// Write a default .bizdash/config.toml into the workspace and exit
    #[arg(long)]
    init: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let workspace = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if !workspace.is_dir() {
        eprintln!("Not a directory: {}", workspace.display());
        std::process::exit(1);
    }

    if args.init {
        bizdash::init_workspace(&workspace)?;
        eprintln!(
            "Wrote {}",
            workspace.join(".bizdash").join("config.toml").display()
        );
        return Ok(());
    }

    if args.headless {
        bizdash::run_headless(&workspace).await
    } else {
        bizdash::run_with_workspace(&workspace).await
    }
}
