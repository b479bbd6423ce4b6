use std::fmt;

use super::pending_queue::PendingQueue;
use super::{display_symbol, FrequencyTable, Symbol, SymbolFrequency};
use crate::error::Error;
use crate::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Leaf { symbol: Symbol },
    Inner { left: usize, right: usize },
}

#[derive(Clone, Copy, Debug)]
pub struct Node {
    frequency: u64,
    index: usize,
    kind: NodeKind,
}

impl Node {
    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }
}

/// Huffman tree stored as an arena. Children always have a smaller index
/// than their parent, the root is the last node pushed.
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root_index: usize,
    leaf_count: usize,
}

impl HuffmanTree {
    /// Builds the tree for all symbols with a positive count, seeded in
    /// ascending symbol order. Returns `None` for an all-zero table.
    pub fn new(frequencies: &FrequencyTable) -> Option<HuffmanTree> {
        let symbols_and_frequencies: Vec<SymbolFrequency> = frequencies.iter_present().collect();
        Self::from_symbol_frequencies(&symbols_and_frequencies)
    }

    /// Builds the tree seeding the pending queue in slice order. Entries with
    /// a zero frequency are skipped.
    pub fn from_symbol_frequencies(
        symbols_and_frequencies: &[SymbolFrequency],
    ) -> Option<HuffmanTree> {
        let mut queue = PendingQueue::new();
        let mut nodes: Vec<Node> = Vec::with_capacity(symbols_and_frequencies.len() * 2);

        for sf in symbols_and_frequencies.iter().filter(|sf| sf.frequency > 0) {
            let node = Node {
                frequency: sf.frequency as u64,
                index: nodes.len(),
                kind: NodeKind::Leaf { symbol: sf.symbol },
            };
            queue.push(node.frequency, node.index);
            nodes.push(node);
        }
        let leaf_count = nodes.len();

        // first removed becomes the 0 branch, second the 1 branch
        while let Some((left, right)) = queue.pop_pair() {
            let node = Node {
                frequency: nodes[left].frequency + nodes[right].frequency,
                index: nodes.len(),
                kind: NodeKind::Inner { left, right },
            };
            queue.push(node.frequency, node.index);
            nodes.push(node);
        }

        let root_index = queue.pop()?;
        log::debug!(
            "Built huffman tree with {} leaves and {} nodes",
            leaf_count,
            nodes.len()
        );
        Some(HuffmanTree {
            nodes,
            root_index,
            leaf_count,
        })
    }

    pub fn root(&self) -> &Node {
        &self.nodes[self.root_index]
    }

    pub fn root_index(&self) -> usize {
        self.root_index
    }

    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Walks the tree guided by `bits`, emitting a symbol at every leaf.
    ///
    /// Only meant to verify encoded output, not for speed. A tree that is a
    /// single leaf consumes one bit per symbol.
    pub fn decode_sequence<I: IntoIterator<Item = bool>>(&self, bits: I) -> Result<Vec<Symbol>> {
        let mut out = Vec::new();
        let mut current_index = self.root_index;
        let mut inside_code_word = false;
        for take_right in bits {
            match self.nodes[current_index].kind {
                NodeKind::Inner { left, right } => {
                    current_index = if take_right { right } else { left };
                }
                NodeKind::Leaf { symbol } => {
                    out.push(symbol);
                    continue;
                }
            }
            if let NodeKind::Leaf { symbol } = self.nodes[current_index].kind {
                out.push(symbol);
                current_index = self.root_index;
                inside_code_word = false;
            } else {
                inside_code_word = true;
            }
        }
        if inside_code_word {
            return Err(Error::IncompleteCodeWord);
        }
        Ok(out)
    }
}

const BOX_DRAWINGS_DOUBLE_HORIZONTAL: &str = "═";
const SPACE: &str = " ";

fn first_visible_column(line: &str) -> usize {
    line.chars().position(|c| c != ' ').unwrap_or(0)
}

// Node & Tree visualization
impl Node {
    fn get_string(&self, tree: &HuffmanTree) -> Vec<String> {
        match self.kind {
            NodeKind::Leaf { symbol } => {
                vec![format!("({},{})", display_symbol(symbol), self.frequency)]
            }
            NodeKind::Inner { left, right } => {
                let left_box: Vec<String> = tree.nodes[left].get_string(tree);
                let right_box: Vec<String> = tree.nodes[right].get_string(tree);
                let left_width = left_box[0].chars().count();
                let right_width = right_box[0].chars().count();
                let mut result: Vec<String> = Vec::new();

                result.push(format!(
                    "{}•{}",
                    SPACE.repeat(left_width),
                    SPACE.repeat(right_width)
                ));
                result.push(format!(
                    "{}║{}",
                    SPACE.repeat(left_width),
                    SPACE.repeat(right_width)
                ));

                let left_pos = (first_visible_column(&left_box[0]) * 2
                    + left_box[0].trim().chars().count())
                    / 2;
                let right_pos = (first_visible_column(&right_box[0]) * 2
                    + right_box[0].trim().chars().count())
                    / 2;
                result.push(format!(
                    "{}╔{}╩{}╗{}",
                    SPACE.repeat(left_pos),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(left_width - left_pos - 1),
                    BOX_DRAWINGS_DOUBLE_HORIZONTAL.repeat(right_pos),
                    SPACE.repeat(right_width - right_pos - 1)
                ));

                let left_depth = left_box.len();
                let right_depth = right_box.len();
                for i in 0..std::cmp::max(left_depth, right_depth) {
                    let left_str = left_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(left_width));
                    let right_str = right_box
                        .get(i)
                        .cloned()
                        .unwrap_or_else(|| SPACE.repeat(right_width));
                    result.push(format!("{} {}", left_str, right_str));
                }
                result
            }
        }
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strs = self.root().get_string(self);
        for s in strs.iter() {
            writeln!(f, "{}", s)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{HuffmanTree, NodeKind};
    use crate::error::Error;
    use crate::huffman::{FrequencyTable, Symbol, SymbolFrequency};

    fn leaf_symbol(tree: &HuffmanTree, index: usize) -> Symbol {
        match tree.node(index).kind() {
            NodeKind::Leaf { symbol } => symbol,
            NodeKind::Inner { .. } => panic!("node {} is not a leaf", index),
        }
    }

    fn children(tree: &HuffmanTree, index: usize) -> (usize, usize) {
        match tree.node(index).kind() {
            NodeKind::Inner { left, right } => (left, right),
            NodeKind::Leaf { .. } => panic!("node {} is not an inner node", index),
        }
    }

    fn calculate_depth_for_each_symbol(tree: &HuffmanTree) -> Vec<(Symbol, usize)> {
        let mut depths = Vec::new();
        let mut node_index_stack = vec![(tree.root_index(), 0)];
        while let Some((index, depth)) = node_index_stack.pop() {
            match tree.node(index).kind() {
                NodeKind::Inner { left, right } => {
                    node_index_stack.push((left, depth + 1));
                    node_index_stack.push((right, depth + 1));
                }
                NodeKind::Leaf { symbol } => depths.push((symbol, depth)),
            }
        }
        depths.sort();
        depths
    }

    #[test]
    fn test_empty_table_has_no_tree() {
        assert!(HuffmanTree::new(&FrequencyTable::new()).is_none());
    }

    #[test]
    fn test_single_symbol_tree_is_leaf() {
        let tree = HuffmanTree::new(&FrequencyTable::count_sequential(b"AAAA")).unwrap();
        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(tree.nodes().len(), 1);
        assert_eq!(leaf_symbol(&tree, tree.root_index()), b'A');
        assert_eq!(tree.root().frequency(), 4);
    }

    #[test]
    fn test_aabcbad_tree_shape() {
        let tree = HuffmanTree::new(&FrequencyTable::count_sequential(b"AABCBAD")).unwrap();
        assert_eq!(tree.root().frequency(), 7);

        let (a, rest) = children(&tree, tree.root_index());
        assert_eq!(leaf_symbol(&tree, a), b'A');
        assert_eq!(tree.node(rest).frequency(), 4);

        let (b, c_and_d) = children(&tree, rest);
        assert_eq!(
            leaf_symbol(&tree, b),
            b'B',
            "resident leaf B must be dequeued before the merged C/D node"
        );
        assert_eq!(tree.node(c_and_d).frequency(), 2);

        let (c, d) = children(&tree, c_and_d);
        assert_eq!(leaf_symbol(&tree, c), b'C');
        assert_eq!(leaf_symbol(&tree, d), b'D');
    }

    #[test]
    fn test_inner_frequency_is_sum_of_children() {
        let tree = HuffmanTree::new(&FrequencyTable::count_sequential(
            b"the quick brown fox jumps over the lazy dog",
        ))
        .unwrap();
        for node in tree.nodes() {
            if let NodeKind::Inner { left, right } = node.kind() {
                assert_eq!(
                    node.frequency(),
                    tree.node(left).frequency() + tree.node(right).frequency(),
                    "frequency mismatch at node {}",
                    node.index()
                );
            }
        }
    }

    #[test]
    fn test_node_count_and_indices() {
        let symbols_and_frequencies =
            [(1, 17), (2, 3), (3, 12), (4, 3), (5, 18), (6, 12), (7, 13)].map(SymbolFrequency::from);
        let tree = HuffmanTree::from_symbol_frequencies(&symbols_and_frequencies).unwrap();
        assert_eq!(tree.leaf_count(), 7);
        assert_eq!(tree.nodes().len(), 13);
        assert_eq!(tree.root_index(), 12);
        for (index, node) in tree.nodes().iter().enumerate() {
            assert_eq!(index, node.index());
        }
    }

    #[test]
    fn test_zero_frequencies_are_skipped() {
        let symbols_and_frequencies = [(1, 0), (2, 5), (3, 0)].map(SymbolFrequency::from);
        let tree = HuffmanTree::from_symbol_frequencies(&symbols_and_frequencies).unwrap();
        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(leaf_symbol(&tree, tree.root_index()), 2);
    }

    #[test]
    fn test_higher_frequent_symbols_must_have_less_depth() {
        let symbols_and_frequencies =
            [(1, 17), (2, 3), (3, 12), (4, 3), (5, 18), (6, 12), (7, 13)].map(SymbolFrequency::from);
        let tree = HuffmanTree::from_symbol_frequencies(&symbols_and_frequencies).unwrap();
        let depths = calculate_depth_for_each_symbol(&tree);
        for &(left_symbol, left_depth) in &depths {
            for &(right_symbol, right_depth) in &depths {
                let left_frequency = symbols_and_frequencies[left_symbol as usize - 1].frequency;
                let right_frequency = symbols_and_frequencies[right_symbol as usize - 1].frequency;
                if left_frequency > right_frequency {
                    assert!(
                        left_depth <= right_depth,
                        "Depth {} of symbol {} with frequency {} is greater than depth {} of symbol {} with frequency {}",
                        left_depth,
                        left_symbol,
                        left_frequency,
                        right_depth,
                        right_symbol,
                        right_frequency
                    );
                }
            }
        }
    }

    #[test]
    fn test_equal_frequencies_merge_in_symbol_order() {
        let tree = HuffmanTree::new(&FrequencyTable::count_sequential(b"DCBA")).unwrap();
        let (left, right) = children(&tree, tree.root_index());
        let (a, b) = children(&tree, left);
        let (c, d) = children(&tree, right);
        assert_eq!(
            [a, b, c, d].map(|index| leaf_symbol(&tree, index)),
            [b'A', b'B', b'C', b'D']
        );
    }

    #[test]
    fn test_decode_sequence_walks_tree() {
        let tree = HuffmanTree::new(&FrequencyTable::count_sequential(b"AABCBAD")).unwrap();
        // A=0 B=10 C=110 D=111
        let bits = [
            false, false, true, false, true, true, false, true, false, false, true, true, true,
        ];
        let decoded = tree.decode_sequence(bits).unwrap();
        assert_eq!(decoded, b"AABCBAD");
    }

    #[test]
    fn test_decode_single_leaf_tree() {
        let tree = HuffmanTree::new(&FrequencyTable::count_sequential(b"ZZZ")).unwrap();
        let decoded = tree.decode_sequence([false, false, false]).unwrap();
        assert_eq!(decoded, b"ZZZ");
    }

    #[test]
    fn test_decode_incomplete_code_word() {
        let tree = HuffmanTree::new(&FrequencyTable::count_sequential(b"AABCBAD")).unwrap();
        let result = tree.decode_sequence([false, true, true]);
        assert!(matches!(result, Err(Error::IncompleteCodeWord)));
    }

    #[test]
    fn test_display_contains_every_leaf() {
        let tree = HuffmanTree::new(&FrequencyTable::count_sequential(b"AABCBAD")).unwrap();
        let rendered = tree.to_string();
        for label in ["('A',3)", "('B',2)", "('C',1)", "('D',1)"] {
            assert!(rendered.contains(label), "missing {} in\n{}", label, rendered);
        }
    }
}
