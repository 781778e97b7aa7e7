//! Render adapters between collections and presentation surfaces.
//!
//! # Responsibility
//! - Project controller-owned collections into row/chart view models.
//! - Push full projections to a surface on every render.
//! - Expose per-row intents that route user actions back by entity id.
//!
//! # Invariants
//! - Rendering replaces the whole projection; nothing is diffed.
//! - Views never mutate domain state.
//! - Required anchors are checked once, at construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod chart;
pub mod expense_view;
mod memory;
pub mod task_view;

pub use chart::{ChartData, ChartKind};
pub use expense_view::{CategoryOption, ExpenseIntent, ExpenseRow, ExpenseSurface, ExpenseTableView};
pub use memory::MemorySurface;
pub use task_view::{pending_label, TaskIntent, TaskListView, TaskRow, TaskSurface};

pub const ANCHOR_TASK_LIST: &str = "taskList";
pub const ANCHOR_TASK_COUNT: &str = "taskCount";
pub const ANCHOR_EXPENSE_TABLE_BODY: &str = "expenseTableBody";
pub const ANCHOR_CATEGORY_SELECT: &str = "category";
pub const ANCHOR_PIE_CHART: &str = "pieChart";
pub const ANCHOR_BAR_CHART: &str = "barChart";

pub type ViewResult<T> = Result<T, ViewError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    MissingAnchor(&'static str),
}

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingAnchor(anchor) => {
                write!(f, "presentation anchor `{anchor}` is missing")
            }
        }
    }
}

impl Error for ViewError {}

/// A presentation target addressed through named anchors.
pub trait Surface {
    fn has_anchor(&self, anchor: &str) -> bool;
}

fn require_anchors<S: Surface + ?Sized>(
    surface: &S,
    anchors: &[&'static str],
) -> ViewResult<()> {
    for &anchor in anchors {
        if !surface.has_anchor(anchor) {
            log::error!(
                "event=view_mount module=view status=error error_code=missing_anchor anchor={anchor}"
            );
            return Err(ViewError::MissingAnchor(anchor));
        }
    }
    Ok(())
}
