use std::fmt;

use super::{HuffmanTree, NodeKind, Symbol, ALPHABET_SIZE};

pub type CodeBitPattern = u64;

/// A code word with its bits right-aligned in `bit_pattern`. The length is
/// tracked separately because leading zero bits are significant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CodeWord {
    pub bit_pattern: CodeBitPattern,
    pub length: u8,
}

impl CodeWord {
    pub fn new(bit_pattern: CodeBitPattern, length: u8) -> Self {
        Self {
            bit_pattern,
            length,
        }
    }

    fn push(self, bit: bool) -> CodeWord {
        debug_assert!(
            (self.length as u32) < CodeBitPattern::BITS,
            "code word exceeds {} bits",
            CodeBitPattern::BITS
        );
        CodeWord {
            bit_pattern: (self.bit_pattern << 1) | bit as CodeBitPattern,
            length: self.length + 1,
        }
    }

    /// Bits of the code word, most significant first.
    pub fn bits(&self) -> impl Iterator<Item = bool> {
        let bit_pattern = self.bit_pattern;
        (0..self.length)
            .rev()
            .map(move |shift| (bit_pattern >> shift) & 1 == 1)
    }

    /// True if `self` is a proper or equal prefix of `other`.
    pub fn is_prefix_of(&self, other: &CodeWord) -> bool {
        self.length <= other.length
            && other.bit_pattern >> (other.length - self.length) == self.bit_pattern
    }
}

impl fmt::Display for CodeWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits() {
            write!(f, "{}", if bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// Code word per symbol, defined only for symbols that appear in the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeTable {
    code_words: [Option<CodeWord>; ALPHABET_SIZE],
}

impl CodeTable {
    pub fn new() -> Self {
        Self {
            code_words: [None; ALPHABET_SIZE],
        }
    }

    pub fn get(&self, symbol: Symbol) -> Option<&CodeWord> {
        self.code_words[symbol as usize].as_ref()
    }

    pub fn len(&self) -> usize {
        self.code_words.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Present entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &CodeWord)> + '_ {
        (0..=Symbol::MAX)
            .zip(self.code_words.iter())
            .filter_map(|(symbol, code_word)| code_word.as_ref().map(|cw| (symbol, cw)))
    }

    /// Pattern per symbol slot, zero for absent symbols. This is the layout
    /// handed to the encode job.
    pub fn pattern_table(&self) -> [CodeBitPattern; ALPHABET_SIZE] {
        self.code_words
            .map(|code_word| code_word.map_or(0, |cw| cw.bit_pattern))
    }

    /// Code length per symbol slot, zero for absent symbols.
    pub fn length_table(&self) -> [u8; ALPHABET_SIZE] {
        self.code_words
            .map(|code_word| code_word.map_or(0, |cw| cw.length))
    }

    fn set_code_word_for_symbol(&mut self, symbol: Symbol, code_word: CodeWord) {
        self.code_words[symbol as usize] = Some(code_word);
    }

    fn fill_table(&mut self, tree: &HuffmanTree, node_index: usize, current: CodeWord) {
        match tree.node(node_index).kind() {
            NodeKind::Leaf { symbol } => {
                // a lone root leaf still needs one bit to be representable
                let code_word = if current.length == 0 {
                    current.push(false)
                } else {
                    current
                };
                self.set_code_word_for_symbol(symbol, code_word);
            }
            NodeKind::Inner { left, right } => {
                self.fill_table(tree, left, current.push(false));
                self.fill_table(tree, right, current.push(true));
            }
        }
    }
}

impl Default for CodeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&HuffmanTree> for CodeTable {
    fn from(tree: &HuffmanTree) -> Self {
        let mut table = CodeTable::new();
        table.fill_table(tree, tree.root_index(), CodeWord::default());
        table
    }
}

impl From<Option<&HuffmanTree>> for CodeTable {
    fn from(tree: Option<&HuffmanTree>) -> Self {
        tree.map(CodeTable::from).unwrap_or_default()
    }
}
