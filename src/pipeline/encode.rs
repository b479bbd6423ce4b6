use std::sync::Arc;

use crate::accelerator::{
    Accelerator, ElementJob, JobKind, JobReport, ReadOnlyBuffer, RecordBuffer,
};
use crate::huffman::code_table::CodeBitPattern;
use crate::huffman::{CodeTable, EncodedRecord, Symbol};
use crate::Result;

/// Writes the code pattern of the symbol at each element index into that
/// element's record slot.
///
/// A symbol without a code word yields pattern 0 with length 0; the code
/// table has to come from the frequencies of this same input.
pub struct EncodeJob {
    input: ReadOnlyBuffer<Symbol>,
    patterns: ReadOnlyBuffer<CodeBitPattern>,
    lengths: ReadOnlyBuffer<u8>,
    output: RecordBuffer,
}

impl EncodeJob {
    pub fn new(
        input: ReadOnlyBuffer<Symbol>,
        patterns: ReadOnlyBuffer<CodeBitPattern>,
        lengths: ReadOnlyBuffer<u8>,
        output: RecordBuffer,
    ) -> Self {
        Self {
            input,
            patterns,
            lengths,
            output,
        }
    }
}

impl ElementJob for EncodeJob {
    fn execute(&self, index: usize) {
        let symbol = self.input.as_slice()[index] as usize;
        let length = self.lengths.as_slice()[symbol];
        let pattern = self.patterns.as_slice()[symbol];
        debug_assert!(
            length as u32 == CodeBitPattern::BITS || pattern >> length == 0,
            "pattern wider than its code length"
        );
        self.output.write(index, pattern);
    }
}

/// Encodes every element of `input` on the accelerator, one record per
/// element, and reads the records back. The table and record buffers are
/// released before returning.
pub fn encode_parallel<A: Accelerator>(
    accelerator: &A,
    input: &ReadOnlyBuffer<Symbol>,
    code_table: &CodeTable,
) -> Result<(Vec<EncodedRecord>, JobReport)> {
    let patterns = ReadOnlyBuffer::from(code_table.pattern_table());
    let lengths = ReadOnlyBuffer::from(code_table.length_table());
    let output = RecordBuffer::zeroed(input.len());
    let job = Arc::new(EncodeJob::new(
        input.clone(),
        patterns,
        lengths,
        output.clone(),
    ));
    let completion = accelerator.submit(JobKind::Encode, input.len(), job)?;
    let (records, report) = output.read_back(completion)?;
    drop(output);
    log::debug!("Released code table and record buffers");
    let records = records.into_iter().map(EncodedRecord::from).collect();
    Ok((records, report))
}
