//! Execution contract for the data-parallel phases.
//!
//! A job is a set of `element_count` independent work items. Each item only
//! reads shared immutable buffers and writes its own output slot (or
//! atomically increments a shared counter), so items may run in any order
//! and on any worker. The host waits on the returned [`Completion`] before
//! it reads a result buffer back.

use std::fmt::Display;
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::Error;
use crate::Result;

pub mod buffer;
mod thread_pool;

pub use buffer::{CounterBuffer, ReadOnlyBuffer, RecordBuffer};
pub use thread_pool::ThreadPoolAccelerator;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobKind {
    Histogram,
    Encode,
}

impl Display for JobKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Histogram => write!(f, "Histogram"),
            Self::Encode => write!(f, "Encode"),
        }
    }
}

/// Work executed once per element index.
pub trait ElementJob: Send + Sync {
    fn execute(&self, index: usize);
}

pub trait Accelerator {
    /// Schedules `job` for every index in `0..element_count` without
    /// blocking.
    fn submit(
        &self,
        kind: JobKind,
        element_count: usize,
        job: Arc<dyn ElementJob>,
    ) -> Result<Completion>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JobReport {
    pub kind: JobKind,
    pub element_count: usize,
    pub elapsed: Duration,
}

impl JobReport {
    pub fn empty(kind: JobKind) -> Self {
        Self {
            kind,
            element_count: 0,
            elapsed: Duration::ZERO,
        }
    }

    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Handle to a submitted job. Every work group reports once over the
/// channel; a channel that disconnects early means a work group died.
pub struct Completion {
    kind: JobKind,
    element_count: usize,
    work_groups: usize,
    receiver: Receiver<()>,
    submitted: Instant,
}

impl Completion {
    pub fn new(
        kind: JobKind,
        element_count: usize,
        work_groups: usize,
        receiver: Receiver<()>,
        submitted: Instant,
    ) -> Self {
        Self {
            kind,
            element_count,
            work_groups,
            receiver,
            submitted,
        }
    }

    pub fn kind(&self) -> JobKind {
        self.kind
    }

    /// Blocks until every work group finished.
    pub fn wait(self) -> Result<JobReport> {
        for finished in 0..self.work_groups {
            self.receiver.recv().map_err(|_| {
                log::error!(
                    "{} job lost a work group after {} of {} finished",
                    self.kind,
                    finished,
                    self.work_groups
                );
                Error::AcceleratorJobFailed(
                    self.kind,
                    format!(
                        "work group terminated abnormally ({} of {} finished)",
                        finished, self.work_groups
                    ),
                )
            })?;
        }
        let report = JobReport {
            kind: self.kind,
            element_count: self.element_count,
            elapsed: self.submitted.elapsed(),
        };
        log::info!(
            "{} job over {} elements finished in {:.3} ms",
            report.kind,
            report.element_count,
            report.elapsed_millis()
        );
        Ok(report)
    }
}
