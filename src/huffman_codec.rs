use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::bitstream::{BitPacker, BitUnpacker};
use crate::codebook::CodeBook;
use crate::compressed_data::CompressedData;
use crate::config::{Alphabet, CodecConfig};
use crate::error::Result;
use crate::frequency::FrequencyTable;
use crate::hufftree::HuffmanTree;
use crate::metadata::EncodingMetaData;

/// Encoder and decoder for one alphabet.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanCodec {
    config: CodecConfig,
}

impl HuffmanCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CodecConfig) -> Self {
        HuffmanCodec { config }
    }

    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        Self::with_config(CodecConfig::new(alphabet))
    }

    pub fn config(&self) -> CodecConfig {
        self.config
    }

    /// Builds the code book for `data` without packing anything.
    pub fn code_book(&self, data: &[u8]) -> Result<CodeBook> {
        let table = FrequencyTable::from_bytes(data, self.config.alphabet)?;
        let tree = HuffmanTree::from_frequencies(&table)?;
        Ok(CodeBook::from_tree(tree))
    }

    pub fn encode(&self, data: &[u8]) -> Result<CompressedData> {
        let book = self.code_book(data)?;
        let (packed, payload_bits) = BitPacker::new(&book).pack(data)?;

        let metadata = EncodingMetaData {
            original_length: data.len(),
            packed_length: packed.len(),
            payload_bits,
            distinct_symbols: book.len(),
        };
        debug!(
            original = metadata.original_length,
            packed = metadata.packed_length,
            symbols = metadata.distinct_symbols,
            "encoded"
        );

        Ok(CompressedData {
            packed,
            code_book: book.serialize(),
            metadata,
        })
    }

    pub fn decode(&self, packed: &[u8], code_book: &str) -> Result<Vec<u8>> {
        let book = CodeBook::deserialize(code_book, self.config.alphabet)?;
        BitUnpacker::new(&book).unpack(packed)
    }

    /// Like [`decode`](Self::decode), reading each byte as one character.
    pub fn decode_text(&self, packed: &[u8], code_book: &str) -> Result<String> {
        let bytes = self.decode(packed, code_book)?;
        Ok(bytes.into_iter().map(char::from).collect())
    }

    /// Encodes `input` and writes the packed data and code book files.
    ///
    /// Nothing is written unless encoding succeeds.
    pub fn encode_file(
        &self,
        input: &Path,
        data_path: &Path,
        table_path: &Path,
    ) -> Result<EncodingMetaData> {
        let data = fs::read(input)?;
        let compressed = self.encode(&data)?;

        fs::write(data_path, &compressed.packed)?;
        fs::write(table_path, &compressed.code_book)?;
        info!(
            input = %input.display(),
            data = %data_path.display(),
            table = %table_path.display(),
            "wrote compressed files"
        );
        Ok(compressed.metadata)
    }

    /// Decodes the packed data and code book files into `output`, returning
    /// the number of bytes written.
    pub fn decode_file(&self, data_path: &Path, table_path: &Path, output: &Path) -> Result<usize> {
        let decoded = self.decode_from_files(data_path, table_path)?;
        fs::write(output, &decoded)?;
        info!(output = %output.display(), bytes = decoded.len(), "wrote decompressed file");
        Ok(decoded.len())
    }

    pub fn decode_from_files(&self, data_path: &Path, table_path: &Path) -> Result<Vec<u8>> {
        let packed = fs::read(data_path)?;
        let code_book = fs::read_to_string(table_path)?;
        self.decode(&packed, &code_book)
    }
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use super::*;
    use crate::error::HuffmanError;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("static_huffman_{}_{}", std::process::id(), name))
    }

    #[test]
    fn abb_scenario() {
        let codec = HuffmanCodec::new();
        let compressed = codec.encode(b"abb").unwrap();
        assert_eq!(compressed.packed, vec![0x70]);
        assert_eq!(compressed.code_book, "97:0-98:1");
        assert_eq!(compressed.metadata.payload_bits, 3);
        assert_eq!(codec.decode_text(&[0x70], "97:0-98:1").unwrap(), "abb");
    }

    #[test]
    fn single_symbol_round_trip() {
        let codec = HuffmanCodec::new();
        let compressed = codec.encode(b"aaaa").unwrap();
        assert_eq!(compressed.code_book, "97:0");
        assert_eq!(compressed.packed, vec![0b0000_1000]);
        let decoded = codec.decode(&compressed.packed, &compressed.code_book).unwrap();
        assert_eq!(decoded, b"aaaa");
    }

    #[test]
    fn full_byte_alphabet_round_trip() {
        let data: Vec<u8> = (0..=255u8).chain([0xff, 0xff, 0x00]).collect();
        assert!(matches!(
            HuffmanCodec::new().encode(&data),
            Err(HuffmanError::InvalidSymbol { offset: 128, .. })
        ));

        let codec = HuffmanCodec::with_alphabet(Alphabet::Byte);
        let (packed, book) = codec.encode(&data).unwrap().into_parts();
        assert_eq!(codec.decode(&packed, &book).unwrap(), data);
        // the ASCII decoder refuses a book naming high symbols
        assert!(matches!(
            HuffmanCodec::new().decode(&packed, &book),
            Err(HuffmanError::Format { .. })
        ));
    }

    #[test]
    fn file_round_trip() {
        let input = scratch("input.txt");
        let data_path = scratch("output.dat");
        let table_path = scratch("table.txt");
        let output = scratch("decompress.txt");
        let text = "Huffman encoding is a greedy algorithm that builds optimal prefix codes.\n";
        fs::write(&input, text).unwrap();

        let codec = HuffmanCodec::new();
        let meta = codec.encode_file(&input, &data_path, &table_path).unwrap();
        assert_eq!(meta.original_length, text.len());
        assert!(meta.compression_ratio() < 1.0);

        let written = codec.decode_file(&data_path, &table_path, &output).unwrap();
        assert_eq!(written, text.len());
        assert_eq!(fs::read_to_string(&output).unwrap(), text);

        for path in [input, data_path, table_path, output] {
            let _ = fs::remove_file(path);
        }
    }

    #[test]
    fn failed_encode_writes_nothing() {
        let input = scratch("empty.txt");
        let data_path = scratch("empty.dat");
        let table_path = scratch("empty.tab");
        fs::write(&input, "").unwrap();

        let err = HuffmanCodec::new()
            .encode_file(&input, &data_path, &table_path)
            .unwrap_err();
        assert!(matches!(err, HuffmanError::EmptyInput));
        assert!(!data_path.exists());
        assert!(!table_path.exists());

        let _ = fs::remove_file(input);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = HuffmanCodec::new()
            .decode_from_files(&scratch("nope.dat"), &scratch("nope.tab"))
            .unwrap_err();
        assert!(matches!(err, HuffmanError::Io(_)));
    }
}
