use super::code_table::CodeBitPattern;
use super::{CodeTable, Symbol};
use crate::error::Error;
use crate::Result;

/// One fixed-width output word per input element, holding the right-aligned
/// code pattern of that element's symbol. The length comes from the code
/// table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EncodedRecord {
    pub bit_pattern: CodeBitPattern,
}

impl From<CodeBitPattern> for EncodedRecord {
    fn from(bit_pattern: CodeBitPattern) -> Self {
        Self { bit_pattern }
    }
}

/// Host side reference encoder. Produces the same records as the parallel
/// encode job, but rejects symbols the table has no code word for.
pub fn encode_sequential(input: &[Symbol], code_table: &CodeTable) -> Result<Vec<EncodedRecord>> {
    input
        .iter()
        .map(|&symbol| {
            code_table
                .get(symbol)
                .map(|code_word| EncodedRecord::from(code_word.bit_pattern))
                .ok_or(Error::SymbolNotPresentInCodeTable(symbol))
        })
        .collect()
}

/// Expands records into their code bits, most significant bit first.
pub fn record_bits<'a>(
    input: &'a [Symbol],
    records: &'a [EncodedRecord],
    code_table: &'a CodeTable,
) -> impl Iterator<Item = bool> + 'a {
    let lengths = code_table.length_table();
    input
        .iter()
        .zip(records.iter())
        .flat_map(move |(&symbol, record)| {
            let bit_pattern = record.bit_pattern;
            (0..lengths[symbol as usize])
                .rev()
                .map(move |shift| (bit_pattern >> shift) & 1 == 1)
        })
}
