use std::fmt;

use super::{display_symbol, Symbol, SymbolFrequency, ALPHABET_SIZE};
use crate::error::Error;

/// Histogram over the byte alphabet. Entries sum to the length of the input
/// that produced the table.
#[derive(Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u32; ALPHABET_SIZE],
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self {
            counts: [0; ALPHABET_SIZE],
        }
    }

    pub fn from_counts(counts: [u32; ALPHABET_SIZE]) -> Self {
        Self { counts }
    }

    /// Host side reference count, one increment per input element.
    pub fn count_sequential(input: &[Symbol]) -> Self {
        input.iter().copied().collect()
    }

    pub fn increment_symbol(&mut self, symbol: Symbol) {
        self.counts[symbol as usize] += 1;
    }

    pub fn get(&self, symbol: Symbol) -> u32 {
        self.counts[symbol as usize]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&count| count as u64).sum()
    }

    /// Number of symbols with a positive count.
    pub fn used(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.used() == 0
    }

    /// Present symbols in ascending symbol order.
    pub fn iter_present(&self) -> impl Iterator<Item = SymbolFrequency> + '_ {
        (0..=Symbol::MAX)
            .zip(self.counts.iter().copied())
            .filter(|&(_, frequency)| frequency > 0)
            .map(SymbolFrequency::from)
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Symbol> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = Symbol>>(symbols: T) -> Self {
        let mut table = Self::new();
        for symbol in symbols {
            table.increment_symbol(symbol);
        }
        table
    }
}

impl TryFrom<Vec<u32>> for FrequencyTable {
    type Error = Error;

    fn try_from(value: Vec<u32>) -> Result<Self, Self::Error> {
        let length = value.len();
        let counts: [u32; ALPHABET_SIZE] = value
            .try_into()
            .map_err(|_| Error::HistogramSizeMismatch(length))?;
        Ok(Self::from_counts(counts))
    }
}

impl fmt::Debug for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.iter_present()
                    .map(|sf| (display_symbol(sf.symbol), sf.frequency)),
            )
            .finish()
    }
}
