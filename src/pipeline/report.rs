use std::fmt;
use std::io::{self, Write};

use crate::accelerator::JobReport;
use crate::huffman::encoder::record_bits;
use crate::huffman::{display_symbol, CodeTable, EncodedRecord, FrequencyTable, HuffmanTree, Symbol};

/// Everything read back from one pipeline run.
pub struct PipelineReport {
    pub input: Vec<Symbol>,
    pub frequencies: FrequencyTable,
    pub tree: Option<HuffmanTree>,
    pub code_table: CodeTable,
    pub records: Vec<EncodedRecord>,
    pub histogram_report: JobReport,
    pub encode_report: JobReport,
}

impl PipelineReport {
    /// The records expanded to their code bits, most significant bit first.
    pub fn encoded_bits(&self) -> impl Iterator<Item = bool> + '_ {
        record_bits(&self.input, &self.records, &self.code_table)
    }

    pub fn encoded_bit_count(&self) -> u64 {
        let lengths = self.code_table.length_table();
        self.input
            .iter()
            .map(|&symbol| lengths[symbol as usize] as u64)
            .sum()
    }

    pub fn bits_per_symbol(&self) -> f64 {
        if self.input.is_empty() {
            return 0.0;
        }
        self.encoded_bit_count() as f64 / self.input.len() as f64
    }

    pub fn write_encoded_bits<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for bit in self.encoded_bits() {
            writer.write_all(if bit { b"1" } else { b"0" })?;
        }
        writer.write_all(b"\n")
    }
}

impl fmt::Display for PipelineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Symbols and frequencies:")?;
        for sf in self.frequencies.iter_present() {
            writeln!(f, "{}: {}", display_symbol(sf.symbol), sf.frequency)?;
        }
        writeln!(f, "Symbols and codes:")?;
        for (symbol, code_word) in self.code_table.iter() {
            writeln!(f, "{}: {}", display_symbol(symbol), code_word)?;
        }
        writeln!(f, "Input length: {} symbols", self.input.len())?;
        writeln!(
            f,
            "Encoded length: {} bits ({:.3} bits per symbol)",
            self.encoded_bit_count(),
            self.bits_per_symbol()
        )?;
        writeln!(
            f,
            "Histogram phase: {:.3} ms",
            self.histogram_report.elapsed_millis()
        )?;
        write!(
            f,
            "Encode phase: {:.3} ms",
            self.encode_report.elapsed_millis()
        )
    }
}
