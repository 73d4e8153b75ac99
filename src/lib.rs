//! Huffman compression of text and byte streams.
//!
//! ```
//! use huffpack::{compress_str, decompress_str, CodecConfig};
//!
//! let data = compress_str("abracadabra", &CodecConfig::default())?;
//! assert_eq!(decompress_str(&data)?, "abracadabra");
//! # Ok::<(), huffpack::HuffmanError>(())
//! ```

mod artifact;
pub mod bits;
mod codec;
mod codes;
mod config;
mod decoder;
mod error;
mod frequency;
pub mod packing;
mod symbol;
mod tree;

pub use artifact::{Artifact, CompressionStats};
pub use codec::{compress, compress_str, decompress, decompress_str};
pub use codes::CodeTable;
pub use config::{Alphabet, CodecConfig, Packing};
pub use decoder::Decoder;
pub use error::{HuffmanError, Result};
pub use frequency::FrequencyTable;
pub use symbol::Symbol;
pub use tree::{HuffmanTree, Node};
