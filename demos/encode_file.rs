use huffpack::{compress, decompress, Artifact, CodecConfig, Packing};
use std::env;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};

fn main() {
    let fp = env::args().nth(1).expect("Please provide path to input file as first argument.");
    let packing = match env::args().nth(2).as_deref() {
        Some("septet") => Packing::Septet,
        _ => Packing::Octet,
    };

    let input_bytes = fs::read(&fp).expect("First argument was not a valid filepath.");
    let packed_path = format!("{}.hufp", fp);

    // encode scope - save to file
    {
        let config = CodecConfig::default().with_packing(packing);
        let artifact = compress(&input_bytes, &config).unwrap();

        let mut out = BufWriter::new(File::create(&packed_path).unwrap());
        artifact.write_to(&mut out).unwrap();

        let stats = artifact.stats();
        println!(
            "{}: {} bytes -> {} payload bytes ({:.2} bits/byte, {} padding bits)",
            fp,
            input_bytes.len(),
            stats.payload_bytes,
            stats.bits_per_symbol(),
            artifact.padding()
        );
    }

    // decode scope - read from file
    {
        let file = BufReader::new(File::open(&packed_path).unwrap());
        let artifact: Artifact<u8> = Artifact::read_from(file).unwrap();
        let decoded = decompress(&artifact).unwrap();

        assert_eq!(decoded, input_bytes);
        println!("{} decodes back to the original", packed_path);
    }
}
