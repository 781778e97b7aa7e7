//! Chart projection of category totals.

use crate::model::expense::CategoryTotals;

/// The two chart canvases fed from the same totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Pie,
    Bar,
}

impl ChartKind {
    pub const ALL: [ChartKind; 2] = [Self::Pie, Self::Bar];

    /// Dataset caption; the pie chart relies on its legend instead.
    pub fn dataset_label(self) -> Option<&'static str> {
        match self {
            Self::Pie => None,
            Self::Bar => Some("Expenses by Category"),
        }
    }
}

/// Parallel label/value/color columns for one chart dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
    pub colors: Vec<String>,
}

impl ChartData {
    pub fn from_totals(totals: &CategoryTotals) -> Self {
        let mut chart = Self::default();
        for (category, sum) in totals.iter() {
            chart.labels.push(category.as_str().to_string());
            chart.data.push(sum);
            chart.colors.push(category.color().to_string());
        }
        chart
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
