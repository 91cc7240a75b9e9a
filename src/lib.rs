//! # static_huffman
//!
//! A static Huffman coder. Input bytes are counted, a Huffman tree is
//! built over the counts, and every byte is replaced by its root-to-leaf
//! path. The packed bits and the code book come back as two separate
//! artifacts, and the decoder needs both.
//!
//! ## Quick Start
//!
//! ```rust
//! use static_huffman::{decode, encode};
//!
//! let compressed = encode(b"abb")?;
//! assert_eq!(compressed.packed, vec![0x70]);
//! assert_eq!(compressed.code_book, "97:0-98:1");
//!
//! let text = decode(&compressed.packed, &compressed.code_book)?;
//! assert_eq!(text, "abb");
//! # Ok::<(), static_huffman::HuffmanError>(())
//! ```

pub mod bitstream;
pub mod codebook;
pub mod config;
pub mod error;
pub mod frequency;
pub mod huffman_codec;
pub mod hufftree;
pub mod metadata;

// Internal modules - not part of public API
mod bit_vec;
mod compressed_data;
mod min_heap;

pub use codebook::{BitPath, CodeBook};
pub use compressed_data::CompressedData;
pub use config::{Alphabet, CodecConfig};
pub use error::{HuffmanError, Result};
pub use frequency::FrequencyTable;
pub use huffman_codec::HuffmanCodec;
pub use hufftree::HuffmanTree;
pub use metadata::EncodingMetaData;

/// Encodes ASCII `input` into packed bytes and code-book text.
pub fn encode(input: &[u8]) -> Result<CompressedData> {
    HuffmanCodec::new().encode(input)
}

/// Decodes packed bytes with an ASCII code book.
pub fn decode(packed: &[u8], code_book: &str) -> Result<String> {
    HuffmanCodec::new().decode_text(packed, code_book)
}
