use std::sync::{mpsc, Arc};
use std::time::Instant;

use threadpool::ThreadPool;

use super::{Accelerator, Completion, ElementJob, JobKind};
use crate::error::Error;
use crate::Result;

/// Accelerator backed by a pool of worker threads. Element indices are cut
/// into work groups of consecutive indices; each work group runs on one
/// worker.
pub struct ThreadPoolAccelerator {
    threadpool: ThreadPool,
    work_group_size: usize,
}

impl ThreadPoolAccelerator {
    pub fn acquire(number_of_threads: usize, work_group_size: usize) -> Result<Self> {
        if number_of_threads == 0 {
            return Err(Error::AcceleratorUnavailable(
                "at least one worker thread is required".to_owned(),
            ));
        }
        if work_group_size == 0 {
            return Err(Error::AcceleratorUnavailable(
                "work group size must be positive".to_owned(),
            ));
        }
        let threadpool = ThreadPool::with_name("accelerator".to_owned(), number_of_threads);
        log::info!(
            "Acquired accelerator with {} worker threads and work groups of {} elements",
            number_of_threads,
            work_group_size
        );
        Ok(Self {
            threadpool,
            work_group_size,
        })
    }

    pub fn number_of_threads(&self) -> usize {
        self.threadpool.max_count()
    }

    pub fn work_group_size(&self) -> usize {
        self.work_group_size
    }
}

impl Accelerator for ThreadPoolAccelerator {
    fn submit(
        &self,
        kind: JobKind,
        element_count: usize,
        job: Arc<dyn ElementJob>,
    ) -> Result<Completion> {
        let (sender, receiver) = mpsc::channel();
        let submitted = Instant::now();
        let mut work_groups = 0;
        for start in (0..element_count).step_by(self.work_group_size) {
            let end = usize::min(start + self.work_group_size, element_count);
            let job = Arc::clone(&job);
            let sender = sender.clone();
            self.threadpool.execute(move || {
                for index in start..end {
                    job.execute(index);
                }
                // receiver is gone only if the host dropped the completion
                let _ = sender.send(());
            });
            work_groups += 1;
        }
        log::debug!(
            "Submitted {} job over {} elements in {} work groups",
            kind,
            element_count,
            work_groups
        );
        Ok(Completion::new(
            kind,
            element_count,
            work_groups,
            receiver,
            submitted,
        ))
    }
}
