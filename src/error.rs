use thiserror::Error;

/// Everything that can go wrong while building, packing or decoding.
#[derive(Error, Debug)]
pub enum HuffmanError {
    #[error("input contains no encodable symbols")]
    EmptyInput,

    #[error("invalid bit {found:?} at position {position}, expected '0' or '1'")]
    InvalidBit { position: usize, found: char },

    #[error("bitstream ends inside a code after {consumed} bits")]
    TruncatedCode { consumed: usize },

    #[error("bit 1 at position {position} has no path in a single-symbol tree")]
    UnexpectedBit { position: usize },

    #[error("symbol frequencies overflow a 64-bit total")]
    FrequencyOverflow,

    #[error("padding of {padding} bits is invalid for {available} unpacked bits")]
    InvalidPadding { padding: u8, available: usize },

    #[error("byte {value:#04x} at offset {offset} does not fit in a 7-bit group")]
    SeptetOverflow { offset: usize, value: u8 },

    #[error("not a huffpack artifact (magic {found:?})")]
    BadMagic { found: [u8; 4] },

    #[error("unsupported artifact version {0}")]
    UnsupportedVersion(u16),

    #[error("failed to serialize artifact: {0}")]
    Encode(#[from] rmp_serde::encode::Error),

    #[error("failed to deserialize artifact: {0}")]
    Decode(#[from] rmp_serde::decode::Error),
}

impl HuffmanError {
    /// True for errors caused by a corrupt or truncated bitstream.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            HuffmanError::InvalidBit { .. }
                | HuffmanError::TruncatedCode { .. }
                | HuffmanError::UnexpectedBit { .. }
                | HuffmanError::InvalidPadding { .. }
                | HuffmanError::SeptetOverflow { .. }
                | HuffmanError::FrequencyOverflow
        )
    }
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
