pub mod code_table;
pub mod encoder;
pub mod frequency;
mod pending_queue;
pub mod tree;

pub use code_table::{CodeTable, CodeWord};
pub use encoder::{encode_sequential, EncodedRecord};
pub use frequency::FrequencyTable;
pub use tree::{HuffmanTree, Node, NodeKind};

pub type Symbol = u8;

pub const ALPHABET_SIZE: usize = Symbol::MAX as usize + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolFrequency {
    pub symbol: Symbol,
    pub frequency: u32,
}

impl SymbolFrequency {
    pub fn new(symbol: Symbol, frequency: u32) -> Self {
        Self { symbol, frequency }
    }
}

impl From<(Symbol, u32)> for SymbolFrequency {
    fn from(value: (Symbol, u32)) -> Self {
        Self::new(value.0, value.1)
    }
}

/// Renders a symbol for human readable output: printable ASCII as a quoted
/// character, everything else as a hex byte.
pub fn display_symbol(symbol: Symbol) -> String {
    if symbol.is_ascii_graphic() || symbol == b' ' {
        format!("'{}'", symbol as char)
    } else {
        format!("0x{:02X}", symbol)
    }
}
