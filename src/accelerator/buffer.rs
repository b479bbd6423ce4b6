use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Arc;

use super::{Completion, JobReport};
use crate::Result;

/// Immutable buffer shared with running jobs.
#[derive(Clone, Debug)]
pub struct ReadOnlyBuffer<T> {
    data: Arc<[T]>,
}

impl<T> ReadOnlyBuffer<T> {
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T: Clone> From<&[T]> for ReadOnlyBuffer<T> {
    fn from(value: &[T]) -> Self {
        Self { data: value.into() }
    }
}

impl<T> From<Vec<T>> for ReadOnlyBuffer<T> {
    fn from(value: Vec<T>) -> Self {
        Self { data: value.into() }
    }
}

impl<T, const N: usize> From<[T; N]> for ReadOnlyBuffer<T> {
    fn from(value: [T; N]) -> Self {
        Self {
            data: Arc::new(value),
        }
    }
}

/// Counters that many work items increment concurrently.
#[derive(Clone, Debug)]
pub struct CounterBuffer {
    slots: Arc<[AtomicU32]>,
}

impl CounterBuffer {
    pub fn zeroed(len: usize) -> Self {
        Self {
            slots: (0..len).map(|_| AtomicU32::new(0)).collect(),
        }
    }

    pub fn increment(&self, index: usize) {
        self.slots[index].fetch_add(1, Ordering::Relaxed);
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Waits for `completion`, then copies the counters to the host.
    pub fn read_back(&self, completion: Completion) -> Result<(Vec<u32>, JobReport)> {
        let report = completion.wait()?;
        let counts = self
            .slots
            .iter()
            .map(|slot| slot.load(Ordering::Relaxed))
            .collect();
        Ok((counts, report))
    }
}

/// One output word per element, each written by exactly one work item.
#[derive(Clone, Debug)]
pub struct RecordBuffer {
    slots: Arc<[AtomicU64]>,
}

impl RecordBuffer {
    pub fn zeroed(len: usize) -> Self {
        Self {
            slots: (0..len).map(|_| AtomicU64::new(0)).collect(),
        }
    }

    pub fn write(&self, index: usize, value: u64) {
        self.slots[index].store(value, Ordering::Relaxed);
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Waits for `completion`, then copies the records to the host.
    pub fn read_back(&self, completion: Completion) -> Result<(Vec<u64>, JobReport)> {
        let report = completion.wait()?;
        let records = self
            .slots
            .iter()
            .map(|slot| slot.load(Ordering::Relaxed))
            .collect();
        Ok((records, report))
    }
}
