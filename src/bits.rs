use bitvec::prelude::*;

use crate::{HuffmanError, Result};

/// An owned bit string, first bit first.
pub type Bits = BitVec<u8, Msb0>;

/// A borrowed bit string.
pub type BitStr = BitSlice<u8, Msb0>;

/// Parses a textual bit string such as `"0110"`.
pub fn parse_bits(text: &str) -> Result<Bits> {
    text.chars()
        .enumerate()
        .map(|(position, c)| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            found => Err(HuffmanError::InvalidBit { position, found }),
        })
        .collect()
}

pub fn render_bits(bits: &BitStr) -> String {
    bits.iter()
        .by_vals()
        .map(|b| if b { '1' } else { '0' })
        .collect()
}
