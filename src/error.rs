use std::fmt::Display;

use crate::accelerator::JobKind;
use crate::huffman::{display_symbol, Symbol};

#[derive(Debug)]
pub enum Error {
    AcceleratorUnavailable(String),
    AcceleratorJobFailed(JobKind, String),
    InputTooLarge(usize),
    UnableToOpenInputFileForReading(String, std::io::Error),
    FailedToReadInputFile(String, std::io::Error),
    HistogramSizeMismatch(usize),
    SymbolNotPresentInCodeTable(Symbol),
    IncompleteCodeWord,
    FailedToWriteReport(std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AcceleratorUnavailable(reason) => {
                write!(f, "Accelerator could not be acquired: {}", reason)
            }
            Self::AcceleratorJobFailed(kind, reason) => {
                write!(f, "{} job failed: {}", kind, reason)
            }
            Self::InputTooLarge(length) => {
                write!(
                    f,
                    "Input of {} elements exceeds the histogram counter range of {} elements",
                    length,
                    u32::MAX
                )
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::FailedToReadInputFile(path, error) => {
                write!(f, "Failed to read input file '{}': {}", path, error)
            }
            Self::HistogramSizeMismatch(length) => {
                write!(
                    f,
                    "Histogram read back with {} slots, expected {}",
                    length,
                    crate::huffman::ALPHABET_SIZE
                )
            }
            Self::SymbolNotPresentInCodeTable(symbol) => {
                write!(
                    f,
                    "Symbol {} not present in code table",
                    display_symbol(*symbol)
                )
            }
            Self::IncompleteCodeWord => {
                write!(f, "Bit sequence ended inside a code word")
            }
            Self::FailedToWriteReport(error) => {
                write!(f, "Failed to write report: {}", error)
            }
        }
    }
}

impl std::error::Error for Error {}
