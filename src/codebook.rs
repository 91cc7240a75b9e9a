//! Symbol ↔ bit-path mapping and its textual form.
//!
//! A code book is written as `sym:path` entries joined by `-`, sorted by
//! symbol, for example `10:1010111-13:1010110`. The symbol is a decimal
//! byte value and the path a string of `0`/`1` read root to leaf.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::config::Alphabet;
use crate::error::{HuffmanError, Result};
use crate::hufftree::HuffmanTree;

const ENTRY_SEPARATOR: char = '-';
const FIELD_SEPARATOR: char = ':';

/// A root-to-leaf path, `false` for a left turn and `true` for a right one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitPath(Vec<bool>);

impl BitPath {
    pub fn bits(&self) -> &[bool] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn starts_with(&self, other: &BitPath) -> bool {
        self.0.starts_with(&other.0)
    }
}

impl From<Vec<bool>> for BitPath {
    fn from(bits: Vec<bool>) -> Self {
        BitPath(bits)
    }
}

impl Borrow<[bool]> for BitPath {
    fn borrow(&self) -> &[bool] {
        &self.0
    }
}

impl fmt::Display for BitPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.0 {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for BitPath {
    type Err = HuffmanError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(HuffmanError::format(s, "empty path"));
        }
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(HuffmanError::format(s, "path is not binary")),
            })
            .collect::<Result<Vec<bool>>>()
            .map(BitPath)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBook {
    codes: BTreeMap<u8, BitPath>,
}

impl CodeBook {
    /// Consumes the tree; only the paths survive.
    pub fn from_tree(tree: HuffmanTree) -> Self {
        let codes: BTreeMap<u8, BitPath> = tree
            .generate_table()
            .into_iter()
            .map(|(symbol, path)| (symbol, BitPath(path)))
            .collect();
        debug!(entries = codes.len(), "derived code book");
        CodeBook { codes }
    }

    pub fn get(&self, symbol: u8) -> Option<&BitPath> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitPath)> {
        self.codes.iter().map(|(&symbol, path)| (symbol, path))
    }

    /// Reverse mapping used by the decoder.
    pub fn decode_table(&self) -> HashMap<BitPath, u8> {
        self.codes
            .iter()
            .map(|(&symbol, path)| (path.clone(), symbol))
            .collect()
    }

    /// True when no path is a prefix of another (or equal to it).
    pub fn is_prefix_free(&self) -> bool {
        let mut paths: Vec<&BitPath> = self.codes.values().collect();
        paths.sort();
        // a prefix sorts directly before some path that extends it
        paths.windows(2).all(|w| !w[1].starts_with(w[0]))
    }

    pub fn serialize(&self) -> String {
        self.to_string()
    }

    /// Parses the textual form, rejecting anything a tree could not have
    /// produced: bad fields, symbols outside `alphabet`, duplicates, and
    /// paths that prefix one another.
    pub fn deserialize(text: &str, alphabet: Alphabet) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(HuffmanError::format(text, "empty code book"));
        }

        let mut codes = BTreeMap::new();
        let mut seen_paths = HashSet::new();
        for entry in text.split(ENTRY_SEPARATOR) {
            let (symbol, path) = entry
                .split_once(FIELD_SEPARATOR)
                .ok_or_else(|| HuffmanError::format(entry, "missing ':' separator"))?;

            let symbol: u8 = symbol
                .parse()
                .map_err(|_| HuffmanError::format(entry, "symbol is not a byte value"))?;
            if !alphabet.contains(symbol) {
                return Err(HuffmanError::format(entry, "symbol outside alphabet"));
            }

            let path: BitPath = path
                .parse()
                .map_err(|_| HuffmanError::format(entry, "path must be non-empty 0/1 digits"))?;
            if !seen_paths.insert(path.clone()) {
                return Err(HuffmanError::format(entry, "duplicate path"));
            }
            if codes.insert(symbol, path).is_some() {
                return Err(HuffmanError::format(entry, "duplicate symbol"));
            }
        }

        let book = CodeBook { codes };
        if !book.is_prefix_free() {
            return Err(HuffmanError::format(text, "a path is a prefix of another"));
        }
        debug!(entries = book.len(), "parsed code book");
        Ok(book)
    }
}

impl fmt::Display for CodeBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (symbol, path)) in self.codes.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", ENTRY_SEPARATOR)?;
            }
            write!(f, "{}{}{}", symbol, FIELD_SEPARATOR, path)?;
        }
        Ok(())
    }
}

/// Parses with the default ASCII alphabet.
impl FromStr for CodeBook {
    type Err = HuffmanError;

    fn from_str(s: &str) -> Result<Self> {
        CodeBook::deserialize(s, Alphabet::Ascii)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn book_for(text: &str) -> CodeBook {
        let tree = HuffmanTree::from_bytes(text.as_bytes(), Alphabet::Ascii).unwrap();
        CodeBook::from_tree(tree)
    }

    fn reason(err: HuffmanError) -> &'static str {
        match err {
            HuffmanError::Format { reason, .. } => reason,
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn serializes_sorted_by_symbol() {
        assert_eq!(book_for("abb").serialize(), "97:0-98:1");
        assert_eq!(book_for("dcba").serialize(), "97:00-98:01-99:10-100:11");
        assert_eq!(book_for("aaaa").serialize(), "97:0");
    }

    #[test]
    fn text_round_trip() {
        let book = book_for("the quick brown fox jumps over the lazy dog\n");
        let text = book.serialize();
        assert_eq!(text.parse::<CodeBook>().unwrap(), book);
        assert!(!text.contains(' '));
        assert!(!text.ends_with('-'));
    }

    #[test]
    fn derived_books_are_prefix_free() {
        let book = book_for("mississippi river banks");
        assert!(book.is_prefix_free());
        assert_eq!(book.len(), 12);
    }

    #[test]
    fn trailing_newline_is_ignored() {
        let book: CodeBook = "10:1010111-13:1010110\n".parse().unwrap();
        assert_eq!(book.get(10).unwrap().to_string(), "1010111");
        assert_eq!(book.get(13).unwrap().to_string(), "1010110");
    }

    #[test]
    fn duplicate_symbol_is_rejected() {
        let err = "5:10-5:01".parse::<CodeBook>().unwrap_err();
        assert_eq!(reason(err), "duplicate symbol");
    }

    #[test]
    fn malformed_entries_are_rejected() {
        let cases = [
            ("", "empty code book"),
            ("97", "missing ':' separator"),
            ("97:0--98:1", "missing ':' separator"),
            ("x:0", "symbol is not a byte value"),
            ("300:0", "symbol is not a byte value"),
            ("200:0", "symbol outside alphabet"),
            ("97:012", "path must be non-empty 0/1 digits"),
            ("97:", "path must be non-empty 0/1 digits"),
            ("97:0-98:0", "duplicate path"),
            ("97:0-98:01", "a path is a prefix of another"),
        ];
        for (text, expected) in cases {
            let err = text.parse::<CodeBook>().unwrap_err();
            assert_eq!(reason(err), expected, "input {text:?}");
        }
    }

    #[test]
    fn full_byte_alphabet_accepts_high_symbols() {
        let book = CodeBook::deserialize("200:0-255:1", Alphabet::Byte).unwrap();
        assert_eq!(book.len(), 2);
        assert_eq!(book.decode_table()[&BitPath::from(vec![true])], 255);
    }
}
