//! Error types for encoding and decoding.

use crate::min_heap::HeapErr;

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, HuffmanError>;

/// Everything that can go wrong between raw input and decoded output.
#[derive(Debug, thiserror::Error)]
pub enum HuffmanError {
    /// There is nothing to build a tree from.
    #[error("input is empty")]
    EmptyInput,

    /// A byte outside the configured alphabet.
    #[error("byte {symbol:#04x} at offset {offset} is outside the {limit}-symbol alphabet")]
    InvalidSymbol {
        symbol: u8,
        offset: usize,
        limit: usize,
    },

    /// Malformed code-book text.
    #[error("malformed code book entry {entry:?}: {reason}")]
    Format { entry: String, reason: &'static str },

    /// A symbol in the data has no code in the book.
    #[error("no code for byte {0:#04x}")]
    MissingCode(u8),

    /// The packed stream carries no sentinel bit.
    #[error("packed stream has no sentinel bit")]
    MalformedStream,

    /// Bits left over at the end of the stream that match no code.
    #[error("stream ends inside a code: dangling bits {0:?}")]
    IncompleteCode(String),

    #[error("priority queue error: {0:?}")]
    Heap(HeapErr),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<HeapErr> for HuffmanError {
    fn from(e: HeapErr) -> Self {
        HuffmanError::Heap(e)
    }
}

impl HuffmanError {
    pub(crate) fn format(entry: &str, reason: &'static str) -> Self {
        HuffmanError::Format {
            entry: entry.to_string(),
            reason,
        }
    }
}
