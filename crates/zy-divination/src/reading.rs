//! Readings and hexagram resolution.
//!
//! A reading collects up to six line records, bottom to top (the first
//! throw is the bottom line). A completed reading resolves to two 6-bit
//! keys: the original key from each line's resting polarity and the changed
//! key with old lines flipped, then both keys are looked up in the King Wen
//! name table.

use serde::{Deserialize, Serialize};

use crate::error::{DivinationError, DivinationResult};
use crate::line::LineRecord;
use crate::table::hexagram_name;

/// Number of lines in a complete hexagram.
pub const HEXAGRAM_LINES: usize = 6;

/// An in-progress or completed sequence of thrown lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    lines: Vec<LineRecord>,
}

impl Reading {
    /// Create an empty reading.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a reading directly from up to six line records.
    ///
    /// Fails with [`DivinationError::ReadingFull`] if more than six are given.
    pub fn from_lines(lines: Vec<LineRecord>) -> DivinationResult<Self> {
        if lines.len() > HEXAGRAM_LINES {
            return Err(DivinationError::ReadingFull);
        }
        Ok(Self { lines })
    }

    /// Append the next line, bottom to top.
    pub fn push(&mut self, record: LineRecord) -> DivinationResult<()> {
        if self.is_complete() {
            return Err(DivinationError::ReadingFull);
        }
        self.lines.push(record);
        Ok(())
    }

    /// The lines thrown so far, bottom to top.
    pub fn lines(&self) -> &[LineRecord] {
        &self.lines
    }

    /// Number of lines thrown so far.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether no lines have been thrown yet.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether all six lines have been thrown.
    pub fn is_complete(&self) -> bool {
        self.lines.len() == HEXAGRAM_LINES
    }

    /// The original key: resting polarity bits, bottom to top.
    ///
    /// Requires a complete reading.
    pub fn original_key(&self) -> DivinationResult<String> {
        self.key_with(|r| r.line.original_bit())
    }

    /// The changed key: old lines flipped, young lines unchanged.
    ///
    /// Requires a complete reading.
    pub fn changed_key(&self) -> DivinationResult<String> {
        self.key_with(|r| r.line.changed_bit())
    }

    /// Resolve both hexagrams of a complete reading.
    pub fn resolve(&self) -> DivinationResult<HexagramPair> {
        let original = Hexagram::from_key(self.original_key()?);
        let changed = Hexagram::from_key(self.changed_key()?);
        Ok(HexagramPair { original, changed })
    }

    fn key_with(&self, bit: impl Fn(&LineRecord) -> char) -> DivinationResult<String> {
        if !self.is_complete() {
            return Err(DivinationError::IncompleteReading(self.lines.len()));
        }
        Ok(self.lines.iter().map(bit).collect())
    }
}

/// A resolved hexagram: its 6-bit key and looked-up name.
///
/// Derived data: serializable for display/export, but always re-resolved
/// from a [`Reading`] rather than deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hexagram {
    /// The 6-character key over {'0','1'}, bottom to top.
    pub key: String,
    /// The King Wen name, or the unknown sentinel for out-of-table keys.
    pub name: &'static str,
}

impl Hexagram {
    /// Look up a key in the name table. Never fails: unknown keys get the
    /// sentinel name.
    pub fn from_key(key: String) -> Self {
        let name = hexagram_name(&key);
        Self { key, name }
    }
}

impl std::fmt::Display for Hexagram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.key)
    }
}

/// The original and changed hexagrams of a completed reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HexagramPair {
    /// Hexagram formed from the resting line polarities.
    pub original: Hexagram,
    /// Hexagram formed after flipping all changing lines.
    pub changed: Hexagram,
}

impl HexagramPair {
    /// Whether any line changed, i.e. the two keys differ.
    pub fn has_change(&self) -> bool {
        self.original.key != self.changed.key
    }
}
