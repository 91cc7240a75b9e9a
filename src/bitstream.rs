//! Sentinel-framed packing of code paths into bytes.
//!
//! The packed stream is the concatenated codes, one `1` sentinel bit, then
//! zero padding to the next byte boundary. The decoder cuts at the last
//! set bit, which is always the sentinel.

use tracing::debug;

use crate::bit_vec::BitVec;
use crate::codebook::CodeBook;
use crate::error::{HuffmanError, Result};

pub struct BitPacker<'a> {
    book: &'a CodeBook,
}

impl<'a> BitPacker<'a> {
    pub fn new(book: &'a CodeBook) -> Self {
        BitPacker { book }
    }

    /// Returns the packed bytes and the number of payload bits before the
    /// sentinel.
    pub fn pack(&self, data: &[u8]) -> Result<(Vec<u8>, usize)> {
        let mut bit_vec = BitVec::new();
        for &byte in data {
            let path = self.book.get(byte).ok_or(HuffmanError::MissingCode(byte))?;
            bit_vec.push_bits(path.bits());
        }
        let payload_bits = bit_vec.bit_count();

        bit_vec.push_bit(true);
        while bit_vec.bit_count() % 8 != 0 {
            bit_vec.push_bit(false);
        }

        let packed = bit_vec.into_bytes();
        debug!(payload_bits, bytes = packed.len(), "packed bitstream");
        Ok((packed, payload_bits))
    }
}

pub struct BitUnpacker<'a> {
    book: &'a CodeBook,
}

impl<'a> BitUnpacker<'a> {
    pub fn new(book: &'a CodeBook) -> Self {
        BitUnpacker { book }
    }

    pub fn unpack(&self, packed: &[u8]) -> Result<Vec<u8>> {
        let bit_vec = BitVec::from_bytes(packed);
        let end = bit_vec.last_one().ok_or(HuffmanError::MalformedStream)?;

        let table = self.book.decode_table();
        let mut result = Vec::new();
        let mut candidate: Vec<bool> = Vec::new();
        for bit in bit_vec.iter().take(end) {
            candidate.push(bit);
            if let Some(&symbol) = table.get(candidate.as_slice()) {
                result.push(symbol);
                candidate.clear();
            }
        }

        if !candidate.is_empty() {
            let dangling = candidate.iter().map(|&b| if b { '1' } else { '0' }).collect();
            return Err(HuffmanError::IncompleteCode(dangling));
        }

        debug!(payload_bits = end, symbols = result.len(), "unpacked bitstream");
        Ok(result)
    }
}
