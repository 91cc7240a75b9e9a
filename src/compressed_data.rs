use crate::metadata::EncodingMetaData;

/// The two artifacts an encode produces, kept together until both are
/// written out.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressedData {
    /// Packed code bits, sentinel and padding.
    pub packed: Vec<u8>,
    /// Serialized code book text.
    pub code_book: String,
    pub metadata: EncodingMetaData,
}

impl CompressedData {
    pub fn into_parts(self) -> (Vec<u8>, String) {
        (self.packed, self.code_book)
    }
}
