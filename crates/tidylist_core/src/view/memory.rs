//! Headless surface that records every rendered frame.

use super::chart::{ChartData, ChartKind};
use super::expense_view::{CategoryOption, ExpenseRow, ExpenseSurface};
use super::task_view::{TaskRow, TaskSurface};
use super::{
    Surface, ANCHOR_BAR_CHART, ANCHOR_CATEGORY_SELECT, ANCHOR_EXPENSE_TABLE_BODY,
    ANCHOR_PIE_CHART, ANCHOR_TASK_COUNT, ANCHOR_TASK_LIST,
};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Default)]
pub struct MemorySurface {
    anchors: BTreeSet<String>,
    task_frames: Vec<Vec<TaskRow>>,
    pending_label: String,
    category_options: Vec<CategoryOption>,
    expense_frames: Vec<Vec<ExpenseRow>>,
    charts: HashMap<ChartKind, ChartData>,
    chart_updates: usize,
}

impl MemorySurface {
    pub fn with_anchors(anchors: &[&str]) -> Self {
        Self {
            anchors: anchors.iter().map(|anchor| anchor.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Surface exposing every anchor the to-do list needs.
    pub fn for_tasks() -> Self {
        Self::with_anchors(&[ANCHOR_TASK_LIST, ANCHOR_TASK_COUNT])
    }

    /// Surface exposing every anchor the expense tracker needs.
    pub fn for_expenses() -> Self {
        Self::with_anchors(&[
            ANCHOR_EXPENSE_TABLE_BODY,
            ANCHOR_CATEGORY_SELECT,
            ANCHOR_PIE_CHART,
            ANCHOR_BAR_CHART,
        ])
    }

    /// Rows of the most recent task frame.
    pub fn task_rows(&self) -> &[TaskRow] {
        self.task_frames.last().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn task_render_count(&self) -> usize {
        self.task_frames.len()
    }

    pub fn pending_label(&self) -> &str {
        &self.pending_label
    }

    pub fn category_options(&self) -> &[CategoryOption] {
        &self.category_options
    }

    /// Rows of the most recent expense frame.
    pub fn expense_rows(&self) -> &[ExpenseRow] {
        self.expense_frames.last().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn expense_render_count(&self) -> usize {
        self.expense_frames.len()
    }

    pub fn chart(&self, kind: ChartKind) -> Option<&ChartData> {
        self.charts.get(&kind)
    }

    pub fn chart_update_count(&self) -> usize {
        self.chart_updates
    }
}

impl Surface for MemorySurface {
    fn has_anchor(&self, anchor: &str) -> bool {
        self.anchors.contains(anchor)
    }
}

impl TaskSurface for MemorySurface {
    fn replace_task_rows(&mut self, rows: Vec<TaskRow>) {
        self.task_frames.push(rows);
    }

    fn set_pending_label(&mut self, label: &str) {
        self.pending_label = label.to_string();
    }
}

impl ExpenseSurface for MemorySurface {
    fn set_category_options(&mut self, options: Vec<CategoryOption>) {
        self.category_options = options;
    }

    fn replace_expense_rows(&mut self, rows: Vec<ExpenseRow>) {
        self.expense_frames.push(rows);
    }

    fn update_chart(&mut self, kind: ChartKind, data: &ChartData) {
        self.charts.insert(kind, data.clone());
        self.chart_updates += 1;
    }
}
