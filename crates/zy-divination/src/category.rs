//! Divination categories.

use serde::{Deserialize, Serialize};

/// The fixed set of consultation categories a querent chooses from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// 感情问题 — love and relationships.
    Love,
    /// 事业方向 — career direction.
    Career,
    /// 健康问题 — health.
    Health,
    /// 工作问题 — work.
    Work,
    /// 学业财运 — studies and fortune.
    StudyFortune,
    /// 其他 — anything else.
    Other,
}

impl Category {
    /// Parse a category from a user-supplied string.
    ///
    /// Accepts the Chinese labels and short ASCII aliases.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "感情问题" | "感情" | "love" => Some(Self::Love),
            "事业方向" | "事业" | "career" => Some(Self::Career),
            "健康问题" | "健康" | "health" => Some(Self::Health),
            "工作问题" | "工作" | "work" => Some(Self::Work),
            "学业财运" | "学业" | "财运" | "study" | "fortune" => Some(Self::StudyFortune),
            "其他" | "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// All categories in presentation order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Love,
            Self::Career,
            Self::Health,
            Self::Work,
            Self::StudyFortune,
            Self::Other,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Love => write!(f, "感情问题"),
            Self::Career => write!(f, "事业方向"),
            Self::Health => write!(f, "健康问题"),
            Self::Work => write!(f, "工作问题"),
            Self::StudyFortune => write!(f, "学业财运"),
            Self::Other => write!(f, "其他"),
        }
    }
}
