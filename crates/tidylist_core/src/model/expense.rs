//! Expense entity and form-input validation.
//!
//! # Invariants
//! - `amount` is finite and non-negative.
//! - `category` is always one of the fixed `Category` values.
//! - `date` is the local calendar date at creation, `YYYY-MM-DD`.

use super::category::{parse_category, Category, CategoryParseError};
use super::id::{next_entity_id, EntityId, IdExhausted};
use chrono::Local;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

static AMOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+(\.\d*)?|\.\d+)$").expect("valid amount regex"));

/// One recorded expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: EntityId,
    pub amount: f64,
    pub description: String,
    pub category: Category,
    pub date: String,
}

impl Expense {
    /// Creates an expense dated today with a fresh id.
    pub fn new(
        amount: f64,
        description: impl Into<String>,
        category: Category,
    ) -> Result<Self, IdExhausted> {
        Ok(Self {
            id: next_entity_id()?,
            amount,
            description: description.into(),
            category,
            date: Local::now().format("%Y-%m-%d").to_string(),
        })
    }
}

/// Per-category amount sums derived from a full expense list.
///
/// Iteration follows `Category` declaration order. Never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals {
    sums: BTreeMap<Category, f64>,
}

impl CategoryTotals {
    /// Sums `amount` grouped by `category` in one pass.
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let mut sums = BTreeMap::new();
        for expense in expenses {
            *sums.entry(expense.category).or_insert(0.0) += expense.amount;
        }
        Self { sums }
    }

    pub fn get(&self, category: Category) -> Option<f64> {
        self.sums.get(&category).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.sums.iter().map(|(category, sum)| (*category, *sum))
    }

    pub fn len(&self) -> usize {
        self.sums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sums.is_empty()
    }

    /// Sum across every category.
    pub fn grand_total(&self) -> f64 {
        self.sums.values().sum()
    }
}

/// Raw form submission, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpensePayload {
    pub amount: String,
    pub description: String,
    pub category: String,
}

impl ExpensePayload {
    pub fn new(
        amount: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            description: description.into(),
            category: category.into(),
        }
    }
}

/// Validated expense fields ready for `Expense::new`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub amount: f64,
    pub description: String,
    pub category: Category,
}

impl ExpenseDraft {
    /// Validates a raw payload.
    ///
    /// Checks run in field order: amount, description, category.
    pub fn parse(payload: &ExpensePayload) -> Result<Self, ExpenseValidationError> {
        let amount_text = payload.amount.trim();
        if amount_text.is_empty() {
            return Err(ExpenseValidationError::EmptyAmount);
        }
        if !AMOUNT_RE.is_match(amount_text) {
            return Err(ExpenseValidationError::InvalidAmount(
                amount_text.to_string(),
            ));
        }
        let amount = amount_text
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| ExpenseValidationError::InvalidAmount(amount_text.to_string()))?;

        let description = payload.description.trim();
        if description.is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        let category = parse_category(&payload.category)?;

        Ok(Self {
            amount,
            description: description.to_string(),
            category,
        })
    }

    pub fn into_expense(self) -> Result<Expense, IdExhausted> {
        Expense::new(self.amount, self.description, self.category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyAmount,
    InvalidAmount(String),
    EmptyDescription,
    Category(CategoryParseError),
}

impl Display for ExpenseValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAmount => write!(f, "amount must not be empty"),
            Self::InvalidAmount(value) => {
                write!(f, "amount must be a non-negative decimal, got `{value}`")
            }
            Self::EmptyDescription => write!(f, "description must not be empty"),
            Self::Category(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ExpenseValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Category(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CategoryParseError> for ExpenseValidationError {
    fn from(value: CategoryParseError) -> Self {
        Self::Category(value)
    }
}
