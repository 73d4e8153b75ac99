use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

use crate::{FrequencyTable, HuffmanError, Packing, Result, Symbol};

const MAGIC: [u8; 4] = *b"HUFP";
const VERSION: u16 = 1;

/// A compressed payload together with everything needed to decode it:
/// the frequency table the canonical tree is rebuilt from, the packing
/// mode and the padding length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "S: Symbol")]
pub struct Artifact<S> {
    magic: [u8; 4],
    version: u16,
    packing: Packing,
    padding: u8,
    frequencies: FrequencyTable<S>,
    payload: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompressionStats {
    pub symbols: u64,
    pub encoded_bits: usize,
    pub payload_bytes: usize,
}

impl CompressionStats {
    pub fn bits_per_symbol(&self) -> f64 {
        if self.symbols == 0 {
            return 0.0;
        }
        self.encoded_bits as f64 / self.symbols as f64
    }
}

impl<S: Symbol> Artifact<S> {
    pub(crate) fn new(
        packing: Packing,
        padding: u8,
        frequencies: FrequencyTable<S>,
        payload: Vec<u8>,
    ) -> Self {
        Self {
            magic: MAGIC,
            version: VERSION,
            packing,
            padding,
            frequencies,
            payload,
        }
    }

    pub fn packing(&self) -> Packing {
        self.packing
    }

    pub fn padding(&self) -> u8 {
        self.padding
    }

    pub fn frequencies(&self) -> &FrequencyTable<S> {
        &self.frequencies
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn stats(&self) -> CompressionStats {
        let total_bits = self.payload.len() * self.packing.group_bits();
        CompressionStats {
            symbols: self.frequencies.total(),
            encoded_bits: total_bits.saturating_sub(self.padding as usize),
            payload_bytes: self.payload.len(),
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(rmp_serde::to_vec(self)?)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let artifact: Self = rmp_serde::from_slice(data)?;
        artifact.validate()
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        rmp_serde::encode::write(out, self)?;
        Ok(())
    }

    pub fn read_from<R: Read>(input: R) -> Result<Self> {
        let artifact: Self = rmp_serde::decode::from_read(input)?;
        artifact.validate()
    }

    fn validate(self) -> Result<Self> {
        if self.magic != MAGIC {
            return Err(HuffmanError::BadMagic { found: self.magic });
        }
        if self.version != VERSION {
            return Err(HuffmanError::UnsupportedVersion(self.version));
        }
        Ok(self)
    }
}
