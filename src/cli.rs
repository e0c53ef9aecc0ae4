use crate::model::{ExportFormat, RunConfig, RunEvent};
use crate::orchestrator::RunController;
use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::time::Duration;
use tokio::sync::mpsc;

/// Output line routing for the stdout/stderr writer.
enum OutputLine {
    Stdout(String),
    Stderr(String),
}

/// Spawn a blocking writer for stdout/stderr to avoid blocking async tasks.
fn spawn_output_writer() -> (
    mpsc::UnboundedSender<OutputLine>,
    tokio::task::JoinHandle<()>,
) {
    let (tx, mut rx) = mpsc::unbounded_channel::<OutputLine>();
    let handle = tokio::task::spawn_blocking(move || {
        let stdout = std::io::stdout();
        let stderr = std::io::stderr();
        let mut out = std::io::LineWriter::new(stdout.lock());
        let mut err = std::io::LineWriter::new(stderr.lock());

        while let Some(line) = rx.blocking_recv() {
            match line {
                OutputLine::Stdout(msg) => {
                    let _ = writeln!(out, "{}", msg);
                }
                OutputLine::Stderr(msg) => {
                    let _ = writeln!(err, "{}", msg);
                }
            }
        }

        let _ = out.flush();
        let _ = err.flush();
    });
    (tx, handle)
}

#[derive(Debug, Parser, Clone)]
#[command(
    name = "leadscout",
    version,
    about = "Simulated business-listing discovery with optional TUI"
)]
pub struct Cli {
    /// Search keyword (prefills the form in TUI mode)
    #[arg(long)]
    pub keyword: Option<String>,

    /// City/location (prefills the form in TUI mode)
    #[arg(long)]
    pub city: Option<String>,

    /// Print discovered records line by line and exit (no TUI)
    #[arg(long)]
    pub text: bool,

    /// Number of records to collect before stopping in text mode
    #[arg(long, default_value_t = 8)]
    pub ticks: u64,

    /// Delay between result emissions
    #[arg(long, default_value = "1500ms")]
    pub tick_interval: humantime::Duration,

    /// Write an XLSX export after the run (text mode)
    #[arg(long)]
    pub export_xlsx: bool,

    /// Write an XML export after the run (text mode)
    #[arg(long)]
    pub export_xml: bool,
}

/// Build a `RunConfig` from CLI arguments.
pub fn build_config(args: &Cli) -> RunConfig {
    RunConfig {
        tick_interval: Duration::from(args.tick_interval),
    }
}

pub async fn run(args: Cli) -> Result<()> {
    if !args.text {
        #[cfg(feature = "tui")]
        {
            return crate::tui::run(args).await;
        }
        #[cfg(not(feature = "tui"))]
        {
            // Fallback when built without TUI support.
            return run_text(args).await;
        }
    }

    run_text(args).await
}

/// Headless mode: run the emitter for a bounded number of ticks, print each
/// record as it arrives, then export if requested.
async fn run_text(args: Cli) -> Result<()> {
    let keyword = args.keyword.clone().unwrap_or_default();
    let city = args.city.clone().unwrap_or_default();

    let (out_tx, out_handle) = spawn_output_writer();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RunEvent>();
    let mut ctl = RunController::new(build_config(&args), event_tx);
    ctl.start_run(&keyword, &city)?;

    let mut collected = 0u64;
    while collected < args.ticks {
        match event_rx.recv().await {
            Some(RunEvent::Record { record, .. }) => {
                collected += 1;
                let _ = out_tx.send(OutputLine::Stdout(format!(
                    "{}\t{}\t{}\t{}\t{} ({} reviews)",
                    record.id, record.name, record.phone, record.address, record.rating,
                    record.reviews
                )));
            }
            Some(RunEvent::Info(msg)) => {
                let _ = out_tx.send(OutputLine::Stderr(msg));
            }
            Some(_) => {}
            None => break,
        }
    }
    ctl.stop_run();

    let _ = out_tx.send(OutputLine::Stderr(format!(
        "{} businesses found for \"{}\" in {}",
        ctl.store().len(),
        keyword,
        city
    )));

    if args.export_xlsx {
        let path = ctl.export(ExportFormat::Xlsx)?;
        let _ = out_tx.send(OutputLine::Stderr(format!("Saved: {}", path.display())));
    }
    if args.export_xml {
        let path = ctl.export(ExportFormat::Xml)?;
        let _ = out_tx.send(OutputLine::Stderr(format!("Saved: {}", path.display())));
    }

    drop(out_tx);
    let _ = out_handle.await;
    Ok(())
}
