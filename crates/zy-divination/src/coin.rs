//! Three-coin tosses.
//!
//! One throw of the ritual is three independent fair coin flips. The marked
//! face is the inscribed character side of a Qianlong coin; the count of
//! marked faces (0-3) determines the line a throw produces.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// The outcome of throwing three coins at once.
///
/// `true` means the coin landed with its marked (inscribed) face up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinToss {
    /// The three coin faces, in the order they were drawn.
    pub coins: [bool; 3],
}

impl CoinToss {
    /// Throw three fair coins using the given RNG.
    pub fn throw(rng: &mut StdRng) -> Self {
        Self {
            coins: [
                rng.random_bool(0.5),
                rng.random_bool(0.5),
                rng.random_bool(0.5),
            ],
        }
    }

    /// Construct a toss from explicit faces.
    pub fn from_faces(coins: [bool; 3]) -> Self {
        Self { coins }
    }

    /// Number of coins showing the marked face (0-3).
    pub fn marked_count(&self) -> u8 {
        self.coins.iter().filter(|&&c| c).count() as u8
    }
}

impl std::fmt::Display for CoinToss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces: Vec<&str> = self
            .coins
            .iter()
            .map(|&c| if c { "字" } else { "背" })
            .collect();
        write!(f, "[{}]", faces.join(" "))
    }
}
