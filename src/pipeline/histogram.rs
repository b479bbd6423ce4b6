use std::sync::Arc;

use crate::accelerator::{
    Accelerator, CounterBuffer, ElementJob, JobKind, JobReport, ReadOnlyBuffer,
};
use crate::huffman::{FrequencyTable, Symbol, ALPHABET_SIZE};
use crate::Result;

/// Adds one to the bucket of the symbol at each element index.
pub struct HistogramJob {
    input: ReadOnlyBuffer<Symbol>,
    counts: CounterBuffer,
}

impl HistogramJob {
    pub fn new(input: ReadOnlyBuffer<Symbol>, counts: CounterBuffer) -> Self {
        Self { input, counts }
    }
}

impl ElementJob for HistogramJob {
    fn execute(&self, index: usize) {
        let symbol = self.input.as_slice()[index];
        self.counts.increment(symbol as usize);
    }
}

/// Counts symbol frequencies of `input` on the accelerator and reads the
/// histogram back. The counter buffer is released before returning.
pub fn count_frequencies<A: Accelerator>(
    accelerator: &A,
    input: &ReadOnlyBuffer<Symbol>,
) -> Result<(FrequencyTable, JobReport)> {
    let counts = CounterBuffer::zeroed(ALPHABET_SIZE);
    let job = Arc::new(HistogramJob::new(input.clone(), counts.clone()));
    let completion = accelerator.submit(JobKind::Histogram, input.len(), job)?;
    let (counts_read_back, report) = counts.read_back(completion)?;
    drop(counts);
    log::debug!("Released histogram buffer");
    let frequencies = FrequencyTable::try_from(counts_read_back)?;
    Ok((frequencies, report))
}
