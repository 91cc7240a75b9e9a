use static_huffman::HuffmanCodec;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sample_text = "Hello, world! This is a sample text for Huffman compression. \
                      The quick brown fox jumps over the lazy dog. \
                      Huffman encoding is a greedy algorithm that builds optimal prefix codes.";

    std::fs::write("sample.txt", sample_text)?;
    println!("Created sample file: {} bytes", sample_text.len());

    let codec = HuffmanCodec::new();
    let meta = codec.encode_file(
        Path::new("sample.txt"),
        Path::new("sample.dat"),
        Path::new("sample.tab"),
    )?;
    println!(
        "Compressed to: {} bytes ({:.1}% of original), code book: {} bytes",
        meta.packed_length,
        meta.compression_ratio() * 100.0,
        std::fs::metadata("sample.tab")?.len()
    );

    codec.decode_file(
        Path::new("sample.dat"),
        Path::new("sample.tab"),
        Path::new("decompressed.txt"),
    )?;

    let decompressed_text = std::fs::read_to_string("decompressed.txt")?;
    if sample_text == decompressed_text {
        println!("Decompression successful! Data matches exactly.");
    } else {
        println!("Decompression failed! Data mismatch.");
        return Err("Decompression verification failed".into());
    }

    for path in ["sample.txt", "sample.dat", "sample.tab", "decompressed.txt"] {
        std::fs::remove_file(path)?;
    }
    println!("Cleaned up temporary files");

    Ok(())
}
