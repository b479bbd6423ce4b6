//! Sequences the compression phases.
//!
//! histogram (parallel) → read back → tree (host) → code table (host) →
//! encode (parallel) → read back. Each phase starts only after the previous
//! phase's output has been read back, and every table is written once by
//! the phase that produces it.

use crate::accelerator::{Accelerator, ReadOnlyBuffer};
use crate::error::Error;
use crate::huffman::{CodeTable, HuffmanTree, Symbol};
use crate::logger;
use crate::Result;

mod encode;
mod histogram;
mod report;

pub use encode::{encode_parallel, EncodeJob};
pub use histogram::{count_frequencies, HistogramJob};
pub use report::PipelineReport;

pub struct Pipeline<'a, A: Accelerator> {
    accelerator: &'a A,
}

impl<'a, A: Accelerator> Pipeline<'a, A> {
    pub fn new(accelerator: &'a A) -> Self {
        Self { accelerator }
    }

    pub fn run(&self, input: &[Symbol]) -> Result<PipelineReport> {
        Self::validate_input_length(input)?;
        let input_buffer = ReadOnlyBuffer::from(input);

        let (frequencies, histogram_report) = count_frequencies(self.accelerator, &input_buffer)
            .inspect_err(|e| log::error!("Histogram phase failed: {}", e))?;
        logger::log_frequency_table(&frequencies);

        let tree = HuffmanTree::new(&frequencies);
        let code_table = CodeTable::from(tree.as_ref());
        logger::log_code_table(&code_table);

        let (records, encode_report) =
            encode_parallel(self.accelerator, &input_buffer, &code_table)
                .inspect_err(|e| log::error!("Encode phase failed: {}", e))?;
        drop(input_buffer);
        log::debug!("Released input buffer");

        Ok(PipelineReport {
            input: input.to_vec(),
            frequencies,
            tree,
            code_table,
            records,
            histogram_report,
            encode_report,
        })
    }

    fn validate_input_length(input: &[Symbol]) -> Result<()> {
        if input.len() as u64 > u32::MAX as u64 {
            return Err(Error::InputTooLarge(input.len()));
        }
        Ok(())
    }
}
