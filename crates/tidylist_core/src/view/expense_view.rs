//! Expense table, category form options and chart projection.

use super::chart::{ChartData, ChartKind};
use super::{
    require_anchors, Surface, ViewResult, ANCHOR_BAR_CHART, ANCHOR_CATEGORY_SELECT,
    ANCHOR_EXPENSE_TABLE_BODY, ANCHOR_PIE_CHART,
};
use crate::model::category::Category;
use crate::model::expense::{CategoryTotals, Expense};
use crate::model::id::EntityId;

/// Hex alpha suffix appended to badge colors for the tinted background.
const BADGE_BACKGROUND_ALPHA: &str = "20";
const CURRENCY_SYMBOL: &str = "₹";

/// Sink for the expense tracker projection.
pub trait ExpenseSurface: Surface {
    fn set_category_options(&mut self, options: Vec<CategoryOption>);
    /// Discards every table row and mounts `rows` in order.
    fn replace_expense_rows(&mut self, rows: Vec<ExpenseRow>);
    fn update_chart(&mut self, kind: ChartKind, data: &ChartData);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseIntent {
    Delete(EntityId),
}

/// One `<option>` of the category select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
}

/// One table row as presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRow {
    pub id: EntityId,
    pub date: String,
    pub description: String,
    pub category: String,
    pub badge_color: String,
    pub badge_background: String,
    pub amount_display: String,
}

impl ExpenseRow {
    pub fn from_expense(expense: &Expense) -> Self {
        let color = expense.category.color();
        Self {
            id: expense.id,
            date: expense.date.clone(),
            description: expense.description.clone(),
            category: expense.category.as_str().to_string(),
            badge_color: color.to_string(),
            badge_background: format!("{color}{BADGE_BACKGROUND_ALPHA}"),
            amount_display: format_amount(expense.amount),
        }
    }

    pub fn delete_intent(&self) -> ExpenseIntent {
        ExpenseIntent::Delete(self.id)
    }
}

/// Formats an amount as currency with two decimals.
pub fn format_amount(amount: f64) -> String {
    format!("{CURRENCY_SYMBOL}{amount:.2}")
}

/// Render adapter for the expense tracker.
pub struct ExpenseTableView<V: ExpenseSurface> {
    surface: V,
}

impl<V: ExpenseSurface> ExpenseTableView<V> {
    /// Binds the view and populates the category options once.
    pub fn new(mut surface: V) -> ViewResult<Self> {
        require_anchors(
            &surface,
            &[
                ANCHOR_EXPENSE_TABLE_BODY,
                ANCHOR_CATEGORY_SELECT,
                ANCHOR_PIE_CHART,
                ANCHOR_BAR_CHART,
            ],
        )?;

        let options = Category::ALL
            .into_iter()
            .map(|category| CategoryOption {
                value: category.as_str().to_string(),
                label: category.as_str().to_string(),
            })
            .collect();
        surface.set_category_options(options);

        Ok(Self { surface })
    }

    pub fn render(&mut self, expenses: &[Expense], totals: &CategoryTotals) {
        let rows = expenses.iter().map(ExpenseRow::from_expense).collect();
        self.surface.replace_expense_rows(rows);

        let chart = ChartData::from_totals(totals);
        for kind in ChartKind::ALL {
            self.surface.update_chart(kind, &chart);
        }
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut V {
        &mut self.surface
    }

    pub fn into_surface(self) -> V {
        self.surface
    }
}
