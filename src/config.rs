use serde::{Deserialize, Serialize};

use crate::Symbol;

/// The fixed code space symbols must fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    size: u32,
}

impl Alphabet {
    /// Every Unicode scalar value.
    pub const UNICODE: Alphabet = Alphabet { size: 0x11_0000 };

    pub const fn new(size: u32) -> Self {
        Self { size }
    }

    /// The 100 000 entry table older packed files were produced with.
    pub const fn legacy() -> Self {
        Self { size: 100_000 }
    }

    pub const fn size(&self) -> u32 {
        self.size
    }

    pub fn contains<S: Symbol>(&self, symbol: S) -> bool {
        symbol.ordinal() < self.size
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::UNICODE
    }
}

/// How a bitstream is laid out in bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Packing {
    /// Eight bits per byte, zero padded up to the next byte boundary.
    #[default]
    Octet,
    /// Seven bits per byte, high bit always clear. Always pads with at
    /// least one bit, so an aligned bitstream gains a whole zero group.
    Septet,
}

impl Packing {
    pub const fn group_bits(self) -> usize {
        match self {
            Packing::Octet => 8,
            Packing::Septet => 7,
        }
    }

    /// Number of zero bits appended to a bitstream of `len` bits.
    pub const fn padding_for(self, len: usize) -> u8 {
        match self {
            Packing::Octet => ((8 - len % 8) % 8) as u8,
            Packing::Septet => (7 - len % 7) as u8,
        }
    }

    pub(crate) const fn padding_is_legal(self, padding: u8) -> bool {
        match self {
            Packing::Octet => padding < 8,
            Packing::Septet => padding >= 1 && padding <= 7,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    pub alphabet: Alphabet,
    pub packing: Packing,
}

impl CodecConfig {
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    pub fn with_packing(mut self, packing: Packing) -> Self {
        self.packing = packing;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_bounds() {
        let a = Alphabet::new(128);
        assert!(a.contains(b'z'));
        assert!(!a.contains(0xC8u8));
        assert!(!a.contains('é'));
        assert!(Alphabet::default().contains('\u{10FFFF}'));
        assert!(!Alphabet::legacy().contains('\u{1F600}'));
    }

    #[test]
    fn octet_padding() {
        assert_eq!(Packing::Octet.padding_for(0), 0);
        assert_eq!(Packing::Octet.padding_for(4), 4);
        assert_eq!(Packing::Octet.padding_for(8), 0);
        assert_eq!(Packing::Octet.padding_for(13), 3);
    }

    #[test]
    fn septet_padding_never_zero() {
        assert_eq!(Packing::Septet.padding_for(0), 7);
        assert_eq!(Packing::Septet.padding_for(4), 3);
        assert_eq!(Packing::Septet.padding_for(7), 7);
        assert_eq!(Packing::Septet.padding_for(13), 1);
        for len in 0..100 {
            let p = Packing::Septet.padding_for(len);
            assert!(Packing::Septet.padding_is_legal(p));
            assert_eq!((len + p as usize) % 7, 0);
        }
    }

    #[test]
    fn builder() {
        let c = CodecConfig::default()
            .with_packing(Packing::Septet)
            .with_alphabet(Alphabet::legacy());
        assert_eq!(c.packing, Packing::Septet);
        assert_eq!(c.alphabet.size(), 100_000);
    }
}
