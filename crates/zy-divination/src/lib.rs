//! Coin-throw I-Ching (Zhouyi) divination core.
//!
//! Models the traditional three-coin casting ritual: six throws of three
//! coins build a hexagram line by line, bottom to top. Each throw is
//! classified into one of the four line states (young/old yang/yin), and a
//! completed reading resolves to an original and a changed hexagram via the
//! static King Wen name table.

pub mod category;
pub mod coin;
pub mod error;
pub mod line;
pub mod reading;
pub mod session;
pub mod table;

pub use category::Category;
pub use coin::CoinToss;
pub use error::{DivinationError, DivinationResult};
pub use line::{Line, LineRecord};
pub use reading::{Hexagram, HexagramPair, Reading};
pub use session::{DivinationRequest, DivinationSession, SessionConfig};
pub use table::{UNKNOWN_HEXAGRAM, hexagram_name};
