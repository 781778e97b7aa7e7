//! Fixed expense categories and their display colors.
//!
//! The category table is static configuration: the form populates its
//! options from it, rows badge themselves with its colors, and chart
//! slices/bars are colored from it.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Expense category.
///
/// Declaration order is the display order of options and chart labels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Food,
    Travel,
    Shopping,
    Bills,
    Entertainment,
    Health,
    Other,
}

pub const CATEGORY_FOOD: &str = "food";
pub const CATEGORY_TRAVEL: &str = "travel";
pub const CATEGORY_SHOPPING: &str = "shopping";
pub const CATEGORY_BILLS: &str = "bills";
pub const CATEGORY_ENTERTAINMENT: &str = "entertainment";
pub const CATEGORY_HEALTH: &str = "health";
pub const CATEGORY_OTHER: &str = "other";

impl Category {
    pub const ALL: [Category; 7] = [
        Self::Food,
        Self::Travel,
        Self::Shopping,
        Self::Bills,
        Self::Entertainment,
        Self::Health,
        Self::Other,
    ];

    /// Stable name used in storage and form values.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Food => CATEGORY_FOOD,
            Self::Travel => CATEGORY_TRAVEL,
            Self::Shopping => CATEGORY_SHOPPING,
            Self::Bills => CATEGORY_BILLS,
            Self::Entertainment => CATEGORY_ENTERTAINMENT,
            Self::Health => CATEGORY_HEALTH,
            Self::Other => CATEGORY_OTHER,
        }
    }

    /// Hex display color (`#RRGGBB`).
    pub fn color(self) -> &'static str {
        match self {
            Self::Food => "#FF6384",
            Self::Travel => "#36A2EB",
            Self::Shopping => "#FFCE56",
            Self::Bills => "#4BC0C0",
            Self::Entertainment => "#9966FF",
            Self::Health => "#FF9F40",
            Self::Other => "#C9CBCF",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses one category from its stable name.
///
/// Surrounding whitespace is ignored; matching is case-sensitive.
pub fn parse_category(value: &str) -> Result<Category, CategoryParseError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(CategoryParseError::Empty);
    }

    Category::ALL
        .into_iter()
        .find(|category| category.as_str() == normalized)
        .ok_or_else(|| CategoryParseError::Unknown(normalized.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    Empty,
    Unknown(String),
}

impl Display for CategoryParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "category must not be empty"),
            Self::Unknown(value) => write!(f, "unknown category: {value}"),
        }
    }
}

impl Error for CategoryParseError {}
