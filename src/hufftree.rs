use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::Write;

use tracing::{debug, trace};

use crate::config::Alphabet;
use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::min_heap::MinHeap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    pub root: HuffNode,
}

impl HuffmanTree {
    pub fn from_bytes(bytes: &[u8], alphabet: Alphabet) -> Result<Self> {
        let table = FrequencyTable::from_bytes(bytes, alphabet)?;
        HuffmanTree::from_frequencies(&table)
    }

    /// Greedy merge of the two lightest nodes until one root is left.
    ///
    /// Leaves are queued in ascending symbol order and every merged node
    /// takes the next sequence number; equal weights leave the queue in
    /// sequence order, so the same table always yields the same tree.
    pub fn from_frequencies(table: &FrequencyTable) -> Result<Self> {
        let leaves: Vec<QueuedNode> = table
            .iter()
            .enumerate()
            .map(|(seq, (symbol, weight))| QueuedNode {
                seq,
                node: HuffNode::new(symbol, weight),
            })
            .collect();
        if leaves.is_empty() {
            return Err(HuffmanError::EmptyInput);
        }

        let mut next_seq = leaves.len();
        let mut heap = MinHeap::build(leaves);
        while heap.heap_size() > 1 {
            let x = heap.extract_min()?;
            let y = heap.extract_min()?;
            trace!(left = x.node.weight(), right = y.node.weight(), "merging nodes");

            heap.insert(QueuedNode {
                seq: next_seq,
                node: HuffNode::merge(x.node, y.node),
            });
            next_seq += 1;
        }
        let root = heap.extract_min()?.node;

        let tree = HuffmanTree { root };
        debug!(
            weight = tree.root.weight(),
            depth = tree.depth(),
            leaves = tree.leaf_count(),
            "built huffman tree"
        );
        Ok(tree)
    }

    /// Root-to-leaf paths, `false` for left and `true` for right.
    ///
    /// A tree that is a single leaf has no edges; its symbol gets the
    /// one-bit path `[false]` so it can still be written to a bitstream.
    pub fn generate_table(&self) -> BTreeMap<u8, Vec<bool>> {
        let mut table = BTreeMap::new();
        match &self.root {
            HuffNode::Leaf { symbol, .. } => {
                table.insert(*symbol, vec![false]);
            }
            internal => internal.generate_table(&mut table, &mut Vec::new()),
        }
        table
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Indented, one-node-per-line dump of the tree.
    pub fn render(&self) -> String {
        let mut out = String::new();
        render_node(&self.root, 0, "root", &mut out);
        out
    }
}

fn render_node(node: &HuffNode, depth: usize, label: &str, out: &mut String) {
    let indent = "  ".repeat(depth);
    match node {
        HuffNode::Leaf { symbol, weight } => {
            let _ = writeln!(
                out,
                "{}{}-> Leaf: {:?} ({}) [weight: {}]",
                indent, label, *symbol as char, symbol, weight
            );
        }
        HuffNode::Internal { weight, left, right } => {
            let _ = writeln!(out, "{}{}-> Internal [weight: {}]", indent, label, weight);
            render_node(left, depth + 1, "L", out);
            render_node(right, depth + 1, "R", out);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode {
    Leaf {
        weight: usize,
        symbol: u8,
    },
    Internal {
        weight: usize,
        left: Box<HuffNode>,
        right: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn new(symbol: u8, weight: usize) -> Self {
        HuffNode::Leaf { weight, symbol }
    }

    pub fn weight(&self) -> usize {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    /// `a` becomes the left child, `b` the right.
    pub fn merge(a: Self, b: Self) -> Self {
        let weight = a.weight() + b.weight();
        HuffNode::Internal {
            weight,
            left: Box::new(a),
            right: Box::new(b),
        }
    }

    fn generate_table(&self, table: &mut BTreeMap<u8, Vec<bool>>, path: &mut Vec<bool>) {
        match self {
            HuffNode::Leaf { symbol, .. } => {
                table.insert(*symbol, path.clone());
            }
            HuffNode::Internal { left, right, .. } => {
                path.push(false);
                left.generate_table(table, path);
                path.pop();

                path.push(true);
                right.generate_table(table, path);
                path.pop();
            }
        }
    }

    fn depth(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 0,
            HuffNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 1,
            HuffNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// Heap entry ordered by `(weight, seq)`.
#[derive(Debug)]
struct QueuedNode {
    seq: usize,
    node: HuffNode,
}

impl PartialEq for QueuedNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueuedNode {}

impl PartialOrd for QueuedNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueuedNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.node
            .weight()
            .cmp(&other.node.weight())
            .then(self.seq.cmp(&other.seq))
    }
}
