use std::sync::mpsc::{Receiver, channel};
use std::thread::{self, JoinHandle};

use ids_app::{SIMULATED_RUN_DELAY, synthesize_metrics};
use ids_catalog::ModelKind;
use ids_results::MetricSet;

/// One-shot background run: sleeps the simulated delay and synthesizes the
/// scores. Not cancellable; re-triggering is prevented by the disabled run
/// control, not here.
pub struct RunWorker {
    pub progress_rx: Receiver<WorkerMessage>,
    _handle: JoinHandle<()>,
}

#[derive(Debug, Clone)]
pub enum WorkerMessage {
    Complete {
        /// The model the run was triggered with, carried through so the
        /// results view never re-reads widget state after the delay.
        model: ModelKind,
        metrics: MetricSet,
    },
}

impl RunWorker {
    pub fn start(model: ModelKind) -> Self {
        let (tx, rx) = channel();

        let handle = thread::spawn(move || {
            thread::sleep(SIMULATED_RUN_DELAY);
            let metrics = synthesize_metrics(&mut rand::rng());
            let _ = tx.send(WorkerMessage::Complete { model, metrics });
        });

        Self {
            progress_rx: rx,
            _handle: handle,
        }
    }
}
