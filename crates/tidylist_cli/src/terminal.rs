//! Plain-text surface for the command line.
//!
//! Keeps only the latest frame; commands print it once they finish.

use tidylist_core::view::expense_view::format_amount;
use tidylist_core::view::{CategoryOption, ExpenseRow, ExpenseSurface, TaskRow, TaskSurface};
use tidylist_core::{ChartData, ChartKind, Surface};

#[derive(Debug, Default)]
pub struct TerminalSurface {
    task_rows: Vec<TaskRow>,
    pending_label: String,
    expense_rows: Vec<ExpenseRow>,
    totals: Option<ChartData>,
}

impl TerminalSurface {
    pub fn print_tasks(&self) {
        if self.task_rows.is_empty() {
            println!("(no tasks)");
        }
        for row in &self.task_rows {
            let mark = if row.completed { 'x' } else { ' ' };
            println!("[{mark}] {:>15}  {}", row.id, row.text);
        }
        println!("{}", self.pending_label);
    }

    pub fn print_expenses(&self) {
        if self.expense_rows.is_empty() {
            println!("(no expenses)");
        }
        for row in &self.expense_rows {
            println!(
                "{:>15}  {}  {:<13}  {:>12}  {}",
                row.id, row.date, row.category, row.amount_display, row.description
            );
        }
    }

    pub fn print_totals(&self) {
        let Some(chart) = self.totals.as_ref().filter(|chart| !chart.is_empty()) else {
            println!("(no expenses)");
            return;
        };
        for (label, sum) in chart.labels.iter().zip(&chart.data) {
            println!("{label:<13}  {}", format_amount(*sum));
        }
    }
}

impl Surface for TerminalSurface {
    fn has_anchor(&self, _anchor: &str) -> bool {
        true
    }
}

impl TaskSurface for TerminalSurface {
    fn replace_task_rows(&mut self, rows: Vec<TaskRow>) {
        self.task_rows = rows;
    }

    fn set_pending_label(&mut self, label: &str) {
        self.pending_label = label.to_string();
    }
}

impl ExpenseSurface for TerminalSurface {
    fn set_category_options(&mut self, _options: Vec<CategoryOption>) {}

    fn replace_expense_rows(&mut self, rows: Vec<ExpenseRow>) {
        self.expense_rows = rows;
    }

    // Both charts carry the same totals.
    fn update_chart(&mut self, kind: ChartKind, data: &ChartData) {
        if kind == ChartKind::Bar {
            self.totals = Some(data.clone());
        }
    }
}
