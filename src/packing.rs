use log::debug;

use crate::bits::{BitStr, Bits};
use crate::{HuffmanError, Packing, Result};

/// Splits `bits` into groups of [`Packing::group_bits`], zero pads the last
/// group and stores each group as one byte, first bit most significant.
///
/// Returns the bytes and the number of padding bits appended.
pub fn pack(bits: &BitStr, packing: Packing) -> (Vec<u8>, u8) {
    let width = packing.group_bits();
    let padding = packing.padding_for(bits.len());

    let mut padded = bits.to_bitvec();
    padded.resize(bits.len() + padding as usize, false);

    let bytes = padded
        .chunks_exact(width)
        .map(|group| {
            group
                .iter()
                .by_vals()
                .fold(0u8, |acc, bit| (acc << 1) | bit as u8)
        })
        .collect::<Vec<_>>();

    debug!(
        "packed {} bits into {} bytes ({:?}, {} padding bits)",
        bits.len(),
        bytes.len(),
        packing,
        padding
    );
    (bytes, padding)
}

/// Expands `bytes` back into fixed width groups and drops the trailing
/// `padding` bits.
pub fn unpack(bytes: &[u8], padding: u8, packing: Packing) -> Result<Bits> {
    let width = packing.group_bits();
    let available = bytes.len() * width;

    let legal = if bytes.is_empty() {
        padding == 0
    } else {
        packing.padding_is_legal(padding) && (padding as usize) <= available
    };
    if !legal {
        return Err(HuffmanError::InvalidPadding { padding, available });
    }

    let mut bits = Bits::with_capacity(available);
    for (offset, &value) in bytes.iter().enumerate() {
        if packing == Packing::Septet && value & 0x80 != 0 {
            return Err(HuffmanError::SeptetOverflow { offset, value });
        }
        for i in (0..width).rev() {
            bits.push(value & (1 << i) != 0);
        }
    }

    bits.truncate(available - padding as usize);
    Ok(bits)
}
