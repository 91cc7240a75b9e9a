use crate::error::{HuffmanError, Result};

/// The set of byte values a codec accepts as symbols.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alphabet {
    /// 7-bit ASCII, values 0..=127.
    #[default]
    Ascii,
    /// Every byte value, 0..=255.
    Byte,
}

impl Alphabet {
    /// Number of symbols in the alphabet.
    pub fn size(self) -> usize {
        match self {
            Alphabet::Ascii => 128,
            Alphabet::Byte => 256,
        }
    }

    pub fn contains(self, symbol: u8) -> bool {
        (symbol as usize) < self.size()
    }

    /// Fails on the first byte of `data` outside the alphabet.
    pub fn check(self, data: &[u8]) -> Result<()> {
        match data.iter().position(|&b| !self.contains(b)) {
            Some(offset) => Err(HuffmanError::InvalidSymbol {
                symbol: data[offset],
                offset,
                limit: self.size(),
            }),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecConfig {
    pub alphabet: Alphabet,
}

impl CodecConfig {
    pub fn new(alphabet: Alphabet) -> Self {
        CodecConfig { alphabet }
    }
}
