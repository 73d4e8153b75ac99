use huffpack::{compress, decompress, CodecConfig};

fn main() {
    let s: Vec<char> = "Hello my name is Sam!".chars().collect();
    let artifact = compress(&s, &CodecConfig::default()).unwrap();
    let stats = artifact.stats();

    let dec: String = decompress(&artifact).unwrap().into_iter().collect();

    println!("{:?}", dec);
    println!(
        "{} symbols -> {} bytes ({:.2} bits/symbol)",
        stats.symbols,
        stats.payload_bytes,
        stats.bits_per_symbol()
    );
}
