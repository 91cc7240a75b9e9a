use tracing::debug;

use crate::config::Alphabet;
use crate::error::{HuffmanError, Result};

/// Per-symbol occurrence counts and their normalized weights.
///
/// Weights are `ceil(count / total * 100)`, so every symbol that occurs
/// gets a weight of at least 1. Distinct counts can collapse onto the same
/// weight; only the ordering the weights induce matters for tree building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Vec<usize>,
    weights: Vec<usize>,
    total: usize,
}

impl FrequencyTable {
    pub fn from_bytes(bytes: &[u8], alphabet: Alphabet) -> Result<Self> {
        if bytes.is_empty() {
            return Err(HuffmanError::EmptyInput);
        }
        alphabet.check(bytes)?;

        let counts = bytes
            .iter()
            .fold(vec![0usize; alphabet.size()], |mut acc, &byte| {
                acc[byte as usize] += 1;
                acc
            });

        let total = bytes.len();
        let weights = counts
            .iter()
            .map(|&count| (count * 100).div_ceil(total))
            .collect();

        let table = FrequencyTable {
            counts,
            weights,
            total,
        };
        debug!(
            total,
            distinct = table.distinct_symbols(),
            "built frequency table"
        );
        Ok(table)
    }

    /// Normalized weight of `symbol`, 0 when it never occurs.
    pub fn weight(&self, symbol: u8) -> usize {
        self.weights.get(symbol as usize).copied().unwrap_or(0)
    }

    pub fn count(&self, symbol: u8) -> usize {
        self.counts.get(symbol as usize).copied().unwrap_or(0)
    }

    /// Number of input bytes the table was built from.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn distinct_symbols(&self) -> usize {
        self.weights.iter().filter(|&&w| w > 0).count()
    }

    /// `(symbol, weight)` for every occurring symbol, ascending by symbol.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.weights
            .iter()
            .enumerate()
            .filter(|&(_, &w)| w > 0)
            .map(|(symbol, &w)| (symbol as u8, w))
    }
}
