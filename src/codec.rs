use log::debug;

use crate::packing::{pack, unpack};
use crate::{
    Artifact, CodeTable, CodecConfig, Decoder, FrequencyTable, HuffmanTree, Result, Symbol,
};

/// Runs the whole pipeline: count, build, generate codes, encode, pack.
pub fn compress<S: Symbol>(input: &[S], config: &CodecConfig) -> Result<Artifact<S>> {
    let frequencies = FrequencyTable::count(input.iter().copied(), &config.alphabet);
    let tree = HuffmanTree::build(&frequencies)?;
    let codes = CodeTable::generate(&tree);

    let bits = codes.encode(input.iter().copied(), &config.alphabet);
    let (payload, padding) = pack(&bits, config.packing);

    debug!(
        "compressed {} symbols into {} bytes",
        input.len(),
        payload.len()
    );
    Ok(Artifact::new(config.packing, padding, frequencies, payload))
}

/// Rebuilds the canonical tree from the artifact's frequencies and decodes
/// its payload.
pub fn decompress<S: Symbol>(artifact: &Artifact<S>) -> Result<Vec<S>> {
    let tree = HuffmanTree::build(artifact.frequencies())?;
    let bits = unpack(artifact.payload(), artifact.padding(), artifact.packing())?;
    Decoder::new(tree).decode(&bits)
}

pub fn compress_str(text: &str, config: &CodecConfig) -> Result<Vec<u8>> {
    let chars: Vec<char> = text.chars().collect();
    compress(&chars, config)?.to_bytes()
}

pub fn decompress_str(data: &[u8]) -> Result<String> {
    let artifact = Artifact::<char>::from_bytes(data)?;
    Ok(decompress(&artifact)?.into_iter().collect())
}
