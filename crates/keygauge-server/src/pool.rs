//! The analysis worker pool. A fixed set of OS threads shares one mutex and
//! two condvars: workers sleep until a batch is published, the submitter
//! sleeps until the completion count reaches the batch size. Results land
//! in per-index slots so batch order survives out-of-order completion.

use keygauge_core::api::{Analyzer, CustomWeights};
use keygauge_core::error::KeygaugeError;
use serde_json::{json, Value};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::JoinHandle;
use tracing::{debug, info};

/// One unit of batch work. Items that already failed decoding still occupy
/// a slot so their error object comes back in position.
#[derive(Debug, Clone)]
pub enum Job {
    Analyze {
        layout: String,
        weights: CustomWeights,
    },
    Reject {
        message: &'static str,
    },
}

#[derive(Default)]
struct PoolState {
    jobs: Vec<Job>,
    results: Vec<Option<Value>>,
    task_count: usize,
    assigned: usize,
    completed: usize,
    shutdown: bool,
}

struct Shared {
    analyzer: Arc<Analyzer>,
    state: Mutex<PoolState>,
    work_ready: Condvar,
    batch_done: Condvar,
}

pub struct WorkerPool {
    shared: Arc<Shared>,
    /// Serializes batches: one in flight at a time, submitters queue here.
    submit_lock: Mutex<()>,
    handles: Mutex<Vec<JoinHandle<()>>>,
}

impl WorkerPool {
    pub fn new(analyzer: Arc<Analyzer>, size: usize) -> Self {
        let shared = Arc::new(Shared {
            analyzer,
            state: Mutex::new(PoolState::default()),
            work_ready: Condvar::new(),
            batch_done: Condvar::new(),
        });

        let handles = (0..size)
            .map(|id| {
                let shared = Arc::clone(&shared);
                std::thread::Builder::new()
                    .name(format!("analysis-{id}"))
                    .spawn(move || worker_loop(&shared))
                    .expect("failed to spawn analysis worker")
            })
            .collect();

        info!("Analysis pool started with {size} workers");
        Self {
            shared,
            submit_lock: Mutex::new(()),
            handles: Mutex::new(handles),
        }
    }

    /// Runs a batch to completion and returns the results in input order.
    pub fn submit(&self, jobs: Vec<Job>) -> Vec<Value> {
        if jobs.is_empty() {
            return Vec::new();
        }

        let _guard = self.submit_lock.lock().unwrap();
        let count = jobs.len();

        let mut state = self.shared.state.lock().unwrap();
        state.results = vec![None; count];
        state.jobs = jobs;
        state.task_count = count;
        state.assigned = 0;
        state.completed = 0;
        self.shared.work_ready.notify_all();

        while state.completed < state.task_count {
            state = self.shared.batch_done.wait(state).unwrap();
        }

        state.task_count = 0;
        state.jobs.clear();
        let results = std::mem::take(&mut state.results);
        results.into_iter().flatten().collect()
    }

    /// Wakes every worker into the shutdown path and joins them. Items in
    /// flight finish first.
    pub fn shutdown(&self) {
        {
            let mut state = self.shared.state.lock().unwrap();
            state.shutdown = true;
            self.shared.work_ready.notify_all();
        }
        for handle in self.handles.lock().unwrap().drain(..) {
            let _ = handle.join();
        }
        info!("Analysis pool stopped");
    }
}

fn worker_loop(shared: &Shared) {
    loop {
        let (slot, job) = {
            let mut state = shared.state.lock().unwrap();
            loop {
                if state.shutdown {
                    return;
                }
                if state.assigned < state.task_count {
                    let slot = state.assigned;
                    state.assigned += 1;
                    break (slot, state.jobs[slot].clone());
                }
                state = shared.work_ready.wait(state).unwrap();
            }
        };

        let value = run_job(&shared.analyzer, job);

        let mut state = shared.state.lock().unwrap();
        state.results[slot] = Some(value);
        state.completed += 1;
        if state.completed == state.task_count {
            shared.batch_done.notify_all();
        }
    }
}

fn run_job(analyzer: &Analyzer, job: Job) -> Value {
    match job {
        Job::Reject { message } => json!({ "error": message }),
        Job::Analyze { layout, weights } => match analyzer.evaluate(&layout, &weights) {
            Ok(report) => serde_json::to_value(report)
                .unwrap_or_else(|_| json!({ "error": "Invalid JSON format." })),
            Err(KeygaugeError::Layout(_)) => {
                debug!("rejecting layout string {layout:?}");
                json!({ "error": "Invalid layout string." })
            }
            Err(err) => json!({ "error": err.to_string() }),
        },
    }
}
