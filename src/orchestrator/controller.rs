//! Run state machine and periodic record emission.

use crate::error::ScrapeError;
use crate::export;
use crate::model::{ExportFormat, RunConfig, RunEvent, SearchQuery};
use crate::store::SharedStore;
use crate::synth::{self, SeedSet, SEED_COUNT};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::time::MissedTickBehavior;

/// Commands emitted by UI layers to drive the controller.
#[derive(Debug, Clone)]
pub enum UiCommand {
    Start { keyword: String, city: String },
    Stop,
    Export(ExportFormat),
    Quit,
}

/// Handle for the active emitter task.
struct ActiveRun {
    cancel: Arc<AtomicBool>,
    task: tokio::task::JoinHandle<()>,
}

/// Owns the idle/running state, the result store and at most one emitter task.
///
/// The single-writer invariant holds because every path that spawns an
/// emitter first cancels the previous one, and cancellation is synchronous:
/// once `stop_run` returns, no further append can happen.
pub struct RunController {
    cfg: RunConfig,
    store: SharedStore,
    event_tx: UnboundedSender<RunEvent>,
    active: Option<ActiveRun>,
    /// Query of the most recent run; kept after stop so exports still work.
    last_query: Option<SearchQuery>,
}

impl RunController {
    pub fn new(cfg: RunConfig, event_tx: UnboundedSender<RunEvent>) -> Self {
        Self {
            cfg,
            store: SharedStore::default(),
            event_tx,
            active: None,
            last_query: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Validate the query, replace any active run and begin periodic emission.
    ///
    /// Validation failure leaves the controller untouched: no state change,
    /// no store clear, no events.
    pub fn start_run(&mut self, keyword: &str, city: &str) -> Result<(), ScrapeError> {
        let query = SearchQuery::parse(keyword, city)?;

        self.cancel_active();
        self.store.lock().clear();

        let seeds = synth::synthesize(&query);
        let cancel = Arc::new(AtomicBool::new(false));
        let task = tokio::spawn(emit_loop(
            seeds,
            self.cfg.tick_interval,
            self.store.clone(),
            self.event_tx.clone(),
            cancel.clone(),
        ));
        self.active = Some(ActiveRun { cancel, task });
        let _ = self.event_tx.send(RunEvent::RunStarted {
            query: query.clone(),
        });
        self.last_query = Some(query);
        Ok(())
    }

    /// Stop the active run, if any. Idempotent; a second call is a no-op.
    pub fn stop_run(&mut self) {
        if self.cancel_active() {
            let _ = self.event_tx.send(RunEvent::RunStopped {
                total: self.store.len(),
            });
        }
    }

    /// Export the accumulated records for the current/last run into the
    /// working directory.
    pub fn export(&self, format: ExportFormat) -> Result<PathBuf, ScrapeError> {
        let query = self.last_query.as_ref().ok_or(ScrapeError::EmptyExport)?;
        export::export(&self.store.snapshot(), query, format)
    }

    /// Returns true if a run was actually cancelled.
    fn cancel_active(&mut self) -> bool {
        match self.active.take() {
            Some(run) => {
                run.cancel.store(true, Ordering::SeqCst);
                // The emitter checks the flag under the store lock; taking the
                // lock once here means any in-flight tick has either appended
                // already or will observe the flag and bail.
                drop(self.store.lock());
                run.task.abort();
                true
            }
            None => false,
        }
    }
}

impl Drop for RunController {
    fn drop(&mut self) {
        // The emitter must not outlive its controller.
        self.cancel_active();
    }
}

/// Periodic emission loop. Each tick derives the next presented record from
/// the seed cycle, appends it and notifies listeners. Never terminates on its
/// own; the seed cycle is inexhaustible by design.
async fn emit_loop(
    seeds: SeedSet,
    tick_interval: std::time::Duration,
    store: SharedStore,
    event_tx: UnboundedSender<RunEvent>,
    cancel: Arc<AtomicBool>,
) {
    let mut interval = tokio::time::interval(tick_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first interval tick completes immediately; consume it so the first
    // record lands one full interval after start.
    interval.tick().await;

    let mut cursor: u64 = 0;
    loop {
        interval.tick().await;
        let record = synth::derive(seeds.get((cursor % SEED_COUNT as u64) as usize), cursor);
        {
            let mut store = store.lock();
            if cancel.load(Ordering::SeqCst) {
                break;
            }
            store.append(record.clone());
        }
        let _ = event_tx.send(RunEvent::Record { record, cursor });
        cursor += 1;
    }
}

/// Command loop bridging a UI layer to the controller. Recovered errors
/// (validation, empty export) are reported as `Info` events rather than
/// terminating the session.
pub async fn run_session(
    cfg: RunConfig,
    event_tx: UnboundedSender<RunEvent>,
    mut cmd_rx: UnboundedReceiver<UiCommand>,
) -> anyhow::Result<()> {
    let mut ctl = RunController::new(cfg, event_tx.clone());
    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            UiCommand::Start { keyword, city } => {
                if let Err(e) = ctl.start_run(&keyword, &city) {
                    let _ = event_tx.send(RunEvent::Info(e.to_string()));
                }
            }
            UiCommand::Stop => ctl.stop_run(),
            UiCommand::Export(format) => match ctl.export(format) {
                Ok(path) => {
                    let _ = event_tx.send(RunEvent::Exported { format, path });
                }
                Err(e) => {
                    let _ = event_tx.send(RunEvent::Info(e.to_string()));
                }
            },
            UiCommand::Quit => {
                ctl.stop_run();
                break;
            }
        }
    }
    Ok(())
}
