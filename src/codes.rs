use bitvec::prelude::*;
use log::trace;
use std::collections::HashMap;

use crate::bits::{BitStr, Bits};
use crate::{Alphabet, HuffmanTree, Node, Symbol};

/// Symbol to code mapping derived from a [`HuffmanTree`].
#[derive(Debug, Clone)]
pub struct CodeTable<S> {
    codes: HashMap<S, BitBox<u8, Msb0>>,
}

impl<S: Symbol> CodeTable<S> {
    /// Walks the tree once, appending `0` for every left edge and `1` for
    /// every right edge. A tree that is a single leaf gets the code `0`.
    pub fn generate(tree: &HuffmanTree<S>) -> Self {
        let mut codes = HashMap::new();

        if let Node::Leaf { symbol, .. } = tree.root() {
            codes.insert(*symbol, bitbox![u8, Msb0; 0]);
            return Self { codes };
        }

        let mut stack = vec![(tree.root(), Bits::new())];
        while let Some((node, path)) = stack.pop() {
            match node {
                Node::Leaf { symbol, .. } => {
                    codes.insert(*symbol, path.into_boxed_bitslice());
                }
                Node::Internal { left, right, .. } => {
                    let mut r = path.clone();
                    r.push(true);
                    stack.push((right.as_ref(), r));

                    let mut l = path;
                    l.push(false);
                    stack.push((left.as_ref(), l));
                }
            }
        }

        Self { codes }
    }

    pub fn get(&self, symbol: S) -> Option<&BitStr> {
        self.codes.get(&symbol).map(|c| c.as_bitslice())
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (S, &BitStr)> + '_ {
        self.codes.iter().map(|(&s, c)| (s, c.as_bitslice()))
    }

    /// Concatenates the code of every symbol in `input`.
    ///
    /// Symbols outside `alphabet` or without a code are skipped.
    pub fn encode(&self, input: impl IntoIterator<Item = S>, alphabet: &Alphabet) -> Bits {
        let mut out = Bits::new();
        for s in input {
            match self.codes.get(&s) {
                Some(code) if alphabet.contains(s) => {
                    out.extend_from_bitslice(code.as_bitslice())
                }
                _ => trace!("no code for {:?}, skipping", s),
            }
        }

        out
    }
}
