/// Size figures gathered while encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingMetaData {
    pub original_length: usize,
    pub packed_length: usize,
    /// Code bits before the sentinel.
    pub payload_bits: usize,
    pub distinct_symbols: usize,
}

impl EncodingMetaData {
    /// Packed size over original size; below 1.0 means the data shrank.
    pub fn compression_ratio(&self) -> f64 {
        if self.original_length == 0 {
            return 0.0;
        }
        self.packed_length as f64 / self.original_length as f64
    }

    /// Mean code length per input symbol.
    pub fn bits_per_symbol(&self) -> f64 {
        if self.original_length == 0 {
            return 0.0;
        }
        self.payload_bits as f64 / self.original_length as f64
    }
}
