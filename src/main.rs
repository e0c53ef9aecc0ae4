mod cli;
mod error;
mod export;
mod model;
mod orchestrator;
mod store;
mod synth;
#[cfg(feature = "tui")]
mod tui;

use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let is_non_tui = args.text;

    match cli::run(args).await {
        Ok(()) => {
            // Explicitly exit with code 0 on success for scripted usage.
            if is_non_tui {
                std::process::exit(0);
            }
            Ok(())
        }
        Err(e) => Err(e),
    }
}
