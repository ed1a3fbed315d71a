//! Sequential divination sessions.
//!
//! A session fixes the querent's category and question up front, then
//! collects six throws one at a time. Resolution is only available once the
//! reading is complete.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::coin::CoinToss;
use crate::error::DivinationResult;
use crate::line::LineRecord;
use crate::reading::{HexagramPair, Reading};

/// Configuration for a divination session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible throws.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// A completed consultation: what was asked, and the thrown reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivinationRequest {
    /// The chosen category.
    pub category: Category,
    /// The querent's free-text question.
    pub question: String,
    /// The six-line reading, bottom to top.
    pub reading: Reading,
}

/// An interactive coin-throw session.
pub struct DivinationSession {
    category: Category,
    question: String,
    reading: Reading,
    rng: StdRng,
}

impl DivinationSession {
    /// Start a session for the given category and question.
    pub fn new(category: Category, question: impl Into<String>, config: SessionConfig) -> Self {
        Self {
            category,
            question: question.into(),
            reading: Reading::new(),
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    /// The chosen category.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The querent's question.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The reading built so far.
    pub fn reading(&self) -> &Reading {
        &self.reading
    }

    /// Whether all six lines have been thrown.
    pub fn is_complete(&self) -> bool {
        self.reading.is_complete()
    }

    /// Throw three coins and append the resulting line.
    ///
    /// Returns the toss and its classified line. Fails once the reading is
    /// complete.
    pub fn throw(&mut self) -> DivinationResult<(CoinToss, LineRecord)> {
        let toss = CoinToss::throw(&mut self.rng);
        let record = LineRecord::from_toss(&toss);
        self.reading.push(record)?;
        Ok((toss, record))
    }

    /// Resolve the completed reading into its hexagram pair.
    pub fn resolve(&self) -> DivinationResult<HexagramPair> {
        self.reading.resolve()
    }

    /// Consume the session into a request for interpretation.
    pub fn into_request(self) -> DivinationRequest {
        DivinationRequest {
            category: self.category,
            question: self.question,
            reading: self.reading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DivinationError;

    fn session(seed: u64) -> DivinationSession {
        DivinationSession::new(
            Category::Career,
            "近期事业变动如何应对？",
            SessionConfig::default().with_seed(seed),
        )
    }

    #[test]
    fn six_throws_complete_the_reading() {
        let mut s = session(1);
        for n in 1..=6 {
            s.throw().unwrap();
            assert_eq!(s.reading().len(), n);
        }
        assert!(s.is_complete());
        assert!(s.resolve().is_ok());
    }

    #[test]
    fn seventh_throw_fails() {
        let mut s = session(1);
        for _ in 0..6 {
            s.throw().unwrap();
        }
        assert!(matches!(s.throw(), Err(DivinationError::ReadingFull)));
    }

    #[test]
    fn resolve_before_completion_fails() {
        let mut s = session(1);
        s.throw().unwrap();
        assert!(matches!(
            s.resolve(),
            Err(DivinationError::IncompleteReading(1))
        ));
    }

    #[test]
    fn same_seed_same_reading() {
        let mut a = session(99);
        let mut b = session(99);
        for _ in 0..6 {
            a.throw().unwrap();
            b.throw().unwrap();
        }
        assert_eq!(a.reading(), b.reading());
        assert_eq!(a.resolve().unwrap(), b.resolve().unwrap());
    }

    #[test]
    fn request_carries_question_and_reading() {
        let mut s = session(5);
        for _ in 0..6 {
            s.throw().unwrap();
        }
        let request = s.into_request();
        assert_eq!(request.category, Category::Career);
        assert_eq!(request.question, "近期事业变动如何应对？");
        assert!(request.reading.is_complete());
    }
}
