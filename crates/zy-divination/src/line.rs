//! Hexagram line states and their derivation from a coin toss.
//!
//! Classification follows the traditional 6/7/8/9 point convention: each
//! marked face counts 2 points and each unmarked face 3, so three coins
//! total 6-9 points. Six and nine are the "old" (changing) lines.

use serde::{Deserialize, Serialize};

use crate::coin::CoinToss;

/// One of the four line states a three-coin throw can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    /// Stable yang (7 points, two marked faces).
    YoungYang,
    /// Stable yin (8 points, one marked face).
    YoungYin,
    /// Changing yang (9 points, no marked face). Flips to yin in the
    /// changed hexagram.
    OldYang,
    /// Changing yin (6 points, three marked faces). Flips to yang in the
    /// changed hexagram.
    OldYin,
}

impl Line {
    /// Classify a toss by its marked-face count.
    ///
    /// m = 3 → old yin, m = 2 → young yang, m = 1 → young yin,
    /// m = 0 → old yang. Total over all possible tosses.
    pub fn classify(toss: &CoinToss) -> Self {
        match toss.marked_count() {
            3 => Self::OldYin,
            2 => Self::YoungYang,
            1 => Self::YoungYin,
            _ => Self::OldYang,
        }
    }

    /// The ritual point value of this line (6, 7, 8, or 9).
    pub fn ritual_number(self) -> u8 {
        match self {
            Self::OldYin => 6,
            Self::YoungYang => 7,
            Self::YoungYin => 8,
            Self::OldYang => 9,
        }
    }

    /// Whether the resting polarity of this line is yang.
    pub fn is_yang(self) -> bool {
        matches!(self, Self::YoungYang | Self::OldYang)
    }

    /// Whether this is a changing ("old") line.
    pub fn is_changing(self) -> bool {
        matches!(self, Self::OldYang | Self::OldYin)
    }

    /// The key bit of the resting polarity: '1' for yang, '0' for yin.
    pub fn original_bit(self) -> char {
        if self.is_yang() { '1' } else { '0' }
    }

    /// The key bit after applying the change rule: old lines flip to the
    /// opposite polarity, young lines keep their own bit.
    pub fn changed_bit(self) -> char {
        match self {
            Self::OldYang => '0',
            Self::OldYin => '1',
            Self::YoungYang => '1',
            Self::YoungYin => '0',
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YoungYang => write!(f, "少阳"),
            Self::YoungYin => write!(f, "少阴"),
            Self::OldYang => write!(f, "老阳(动)"),
            Self::OldYin => write!(f, "老阴(动)"),
        }
    }
}

/// A classified throw: the line state plus the raw marked count it came
/// from, kept for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    /// The classified line state.
    pub line: Line,
    /// Marked-face count of the toss that produced it (0-3).
    pub marked_count: u8,
}

impl LineRecord {
    /// Classify a toss into a line record.
    pub fn from_toss(toss: &CoinToss) -> Self {
        Self {
            line: Line::classify(toss),
            marked_count: toss.marked_count(),
        }
    }
}
