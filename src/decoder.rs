use crate::bits::BitStr;
use crate::{HuffmanError, HuffmanTree, Node, Result, Symbol};

/// Turns bitstreams back into symbols by walking a retained tree.
#[derive(Debug, Clone)]
pub struct Decoder<S> {
    tree: HuffmanTree<S>,
}

impl<S: Symbol> Decoder<S> {
    pub fn new(tree: HuffmanTree<S>) -> Self {
        Self { tree }
    }

    pub fn tree(&self) -> &HuffmanTree<S> {
        &self.tree
    }

    /// Each bit moves the cursor left (`0`) or right (`1`); reaching a leaf
    /// emits its symbol and returns the cursor to the root. The input must
    /// end on a code boundary.
    pub fn decode(&self, input: &BitStr) -> Result<Vec<S>> {
        let root = self.tree.root();

        // A lone leaf was assigned the one bit code `0`.
        if let Node::Leaf { symbol, .. } = root {
            return match input.first_one() {
                Some(position) => Err(HuffmanError::UnexpectedBit { position }),
                None => Ok(vec![*symbol; input.len()]),
            };
        }

        let mut out = Vec::new();
        let mut cursor = root;
        for bit in input.iter().by_vals() {
            // Internal nodes always have both children.
            let Some(next) = cursor.child(bit) else {
                unreachable!("cursor never rests on a leaf");
            };
            match next {
                Node::Leaf { symbol, .. } => {
                    out.push(*symbol);
                    cursor = root;
                }
                Node::Internal { .. } => cursor = next,
            }
        }

        if !std::ptr::eq(cursor, root) {
            return Err(HuffmanError::TruncatedCode {
                consumed: input.len(),
            });
        }

        Ok(out)
    }
}
