use derivative::Derivative;
use log::debug;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::{FrequencyTable, HuffmanError, Result, Symbol};

/// A node of a Huffman tree. Internal nodes always own exactly two children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    Leaf {
        symbol: S,
        frequency: u64,
    },
    Internal {
        frequency: u64,
        left: Box<Node<S>>,
        right: Box<Node<S>>,
    },
}

impl<S: Symbol> Node<S> {
    fn from_children(left: Node<S>, right: Node<S>) -> Result<Self> {
        let frequency = left
            .frequency()
            .checked_add(right.frequency())
            .ok_or(HuffmanError::FrequencyOverflow)?;
        Ok(Node::Internal {
            frequency,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn frequency(&self) -> u64 {
        match self {
            Node::Leaf { frequency, .. } | Node::Internal { frequency, .. } => *frequency,
        }
    }

    pub fn symbol(&self) -> Option<S> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// The child reached by following `bit`: `false` goes left, `true` right.
    pub fn child(&self, bit: bool) -> Option<&Node<S>> {
        match self {
            Node::Internal { left, right, .. } => {
                Some(if bit { right.as_ref() } else { left.as_ref() })
            }
            Node::Leaf { .. } => None,
        }
    }
}

/// Merge priority of a pending node. Leaves rank by symbol, merged nodes by
/// creation order, and at equal frequency every leaf comes before any
/// merged node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Rank<S> {
    Leaf(S),
    Merged(u64),
}

#[derive(Debug, Derivative)]
#[derivative(PartialEq, Eq, PartialOrd, Ord)]
struct Pending<S: Symbol> {
    frequency: u64,
    rank: Rank<S>,

    #[derivative(PartialEq = "ignore")]
    #[derivative(PartialOrd = "ignore")]
    #[derivative(Ord = "ignore")]
    node: Node<S>,
}

/// A canonical Huffman tree.
///
/// Building twice from the same table always produces the same tree, so
/// a decoder can rebuild it from persisted frequencies alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: Node<S>,
}

impl<S: Symbol> HuffmanTree<S> {
    pub fn build(freq: &FrequencyTable<S>) -> Result<Self> {
        let mut pq: BinaryHeap<_> = freq
            .iter()
            .map(|(symbol, frequency)| {
                Reverse(Pending {
                    frequency,
                    rank: Rank::Leaf(symbol),
                    node: Node::Leaf { symbol, frequency },
                })
            })
            .collect();

        let mut merged = 0;
        while pq.len() > 1 {
            let (Some(Reverse(left)), Some(Reverse(right))) = (pq.pop(), pq.pop()) else {
                unreachable!("heap holds at least two nodes");
            };
            let node = Node::from_children(left.node, right.node)?;
            pq.push(Reverse(Pending {
                frequency: node.frequency(),
                rank: Rank::Merged(merged),
                node,
            }));
            merged += 1;
        }

        let root = pq.pop().ok_or(HuffmanError::EmptyInput)?.0.node;
        let tree = Self { root };
        debug!(
            "built tree over {} symbols, frequency {}, depth {}",
            tree.leaf_count(),
            tree.frequency(),
            tree.depth()
        );
        Ok(tree)
    }

    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    pub fn frequency(&self) -> u64 {
        self.root.frequency()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    /// Length of the longest root-to-leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        let mut stack = vec![(&self.root, 0)];
        let mut deepest = 0;
        while let Some((node, depth)) = stack.pop() {
            match node {
                Node::Leaf { .. } => deepest = deepest.max(depth),
                Node::Internal { left, right, .. } => {
                    stack.push((right.as_ref(), depth + 1));
                    stack.push((left.as_ref(), depth + 1));
                }
            }
        }
        deepest
    }

    /// Leaves from left to right.
    pub fn leaves(&self) -> impl Iterator<Item = &Node<S>> + '_ {
        let mut stack = vec![&self.root];
        std::iter::from_fn(move || {
            while let Some(node) = stack.pop() {
                match node {
                    Node::Leaf { .. } => return Some(node),
                    Node::Internal { left, right, .. } => {
                        stack.push(right.as_ref());
                        stack.push(left.as_ref());
                    }
                }
            }
            None
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Alphabet;

    fn tree_of(text: &str) -> HuffmanTree<char> {
        HuffmanTree::build(&FrequencyTable::count(text.chars(), &Alphabet::default())).unwrap()
    }

    fn leaf(symbol: char, frequency: u64) -> Node<char> {
        Node::Leaf { symbol, frequency }
    }

    fn join(left: Node<char>, right: Node<char>) -> Node<char> {
        Node::from_children(left, right).unwrap()
    }

    #[test]
    fn node_from_children() {
        let n = Node::from_children(leaf('a', 2), leaf('b', 5)).unwrap();

        assert_eq!(n.frequency(), 7);
        assert_eq!(n.symbol(), None);
        assert_eq!(n.child(false), Some(&leaf('a', 2)));
        assert_eq!(n.child(true), Some(&leaf('b', 5)));
        assert_eq!(leaf('a', 1).child(false), None);
    }

    #[test]
    fn pending_compares_frequency_then_rank() {
        let a = Pending { frequency: 3, rank: Rank::Leaf('z'), node: leaf('z', 3) };
        let b = Pending { frequency: 4, rank: Rank::Leaf('a'), node: leaf('a', 4) };
        assert!(a < b);

        let c = Pending { frequency: 3, rank: Rank::Leaf('a'), node: leaf('a', 3) };
        assert!(c < a);

        let m = Pending { frequency: 3, rank: Rank::Merged(0), node: leaf('q', 3) };
        assert!(a < m);
        let n = Pending { frequency: 3, rank: Rank::Merged(1), node: leaf('a', 3) };
        assert!(m < n);
    }

    #[test]
    fn two_leaves() {
        let tree = tree_of("aaab");
        assert_eq!(
            tree.root(),
            &join(leaf('b', 1), leaf('a', 3))
        );
    }

    #[test]
    fn equal_frequencies_merge_by_symbol() {
        // a, b merge first (symbol order), then c, d, then the two pairs.
        let tree = tree_of("dcba");
        let ab = join(leaf('a', 1), leaf('b', 1));
        let cd = join(leaf('c', 1), leaf('d', 1));
        assert_eq!(tree.root(), &join(ab, cd));
    }

    #[test]
    fn leaves_before_merged_nodes_on_ties() {
        // After merging a+b (2), the pending set is {c:2, merged:2}; c wins.
        let tree = tree_of("abcc");
        let ab = join(leaf('a', 1), leaf('b', 1));
        assert_eq!(tree.root(), &join(leaf('c', 2), ab));
    }

    #[test]
    fn single_symbol_is_lone_leaf() {
        let tree = tree_of("aaaa");
        assert_eq!(tree.root(), &leaf('a', 4));
        assert!(tree.root().is_leaf());
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.leaf_count(), 1);
    }

    #[test]
    fn empty_table_fails() {
        let t: FrequencyTable<char> = FrequencyTable::new();
        assert!(matches!(HuffmanTree::build(&t), Err(HuffmanError::EmptyInput)));
    }

    #[test]
    fn merging_saturated_counts_fails() {
        assert!(matches!(
            Node::from_children(leaf('a', u64::MAX), leaf('b', 1)),
            Err(HuffmanError::FrequencyOverflow)
        ));

        let table: FrequencyTable<char> =
            vec![('a', u64::MAX), ('b', u64::MAX)].into_iter().collect();
        assert!(matches!(
            HuffmanTree::build(&table),
            Err(HuffmanError::FrequencyOverflow)
        ));
    }

    #[test]
    fn deterministic() {
        let text = "This is a really long message, I sure do hope it encodes and decodes properly.";
        assert_eq!(tree_of(text), tree_of(text));
    }

    #[test]
    fn frequency_conservation() {
        let text = "abracadabra alakazam";
        let tree = tree_of(text);
        let leaf_sum: u64 = tree.leaves().map(Node::frequency).sum();
        assert_eq!(tree.frequency(), text.chars().count() as u64);
        assert_eq!(leaf_sum, tree.frequency());
        assert_eq!(tree.leaf_count(), 10);
    }

    #[test]
    fn skewed_depth() {
        // Fibonacci weights produce a maximally skewed tree.
        let fib = [1u64, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144];
        let table: FrequencyTable<u8> = fib.iter().enumerate().map(|(i, &f)| (i as u8, f)).collect();
        let tree = HuffmanTree::build(&table).unwrap();
        assert_eq!(tree.depth(), fib.len() - 1);
    }
}
