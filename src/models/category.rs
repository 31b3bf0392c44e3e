//! Expense categories
//!
//! Categories form a closed set: every transaction carries one of the six
//! values below, and unknown strings fail to parse instead of falling back
//! to a default. The declared order is the row order of the exported report.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FinoraError;

/// Expense category for a transaction
///
/// Meaningful only for expense transactions; income transactions still carry
/// one (defaulting to [`Category::Other`]) but aggregation ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Housing,
    Leisure,
    Health,
    Other,
}

impl Category {
    /// All categories in fixed declared order
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transport,
        Category::Housing,
        Category::Leisure,
        Category::Health,
        Category::Other,
    ];

    /// Number of categories
    pub const COUNT: usize = Self::ALL.len();

    /// Human-readable name used as the report row label
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Housing => "Housing",
            Self::Leisure => "Leisure",
            Self::Health => "Health",
            Self::Other => "Other",
        }
    }

    /// Position of this category in [`Category::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Self::Food => 0,
            Self::Transport => 1,
            Self::Housing => 2,
            Self::Leisure => 3,
            Self::Health => 4,
            Self::Other => 5,
        }
    }

    /// Machine-readable identifier (the serialized form)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Housing => "housing",
            Self::Leisure => "leisure",
            Self::Health => "health",
            Self::Other => "other",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Other
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Category {
    type Err = FinoraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "food" => Ok(Self::Food),
            "transport" => Ok(Self::Transport),
            "housing" => Ok(Self::Housing),
            "leisure" => Ok(Self::Leisure),
            "health" => Ok(Self::Health),
            "other" => Ok(Self::Other),
            _ => Err(FinoraError::UnknownVariant {
                field: "category",
                value: s.to_string(),
            }),
        }
    }
}
