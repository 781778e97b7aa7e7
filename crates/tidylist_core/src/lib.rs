//! Core logic for tidylist: a to-do list and an expense tracker built on
//! one ordered-list CRUD pattern, plus a set of small testing exercises.

pub mod config;
pub mod controller;
pub mod db;
pub mod exercises;
pub mod logging;
pub mod model;
pub mod reorder;
pub mod store;
pub mod view;

pub use config::{AppConfig, ConfigError};
pub use controller::{
    ControllerError, ControllerResult, EditPrompt, ExpenseController, TaskController,
};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::category::{parse_category, Category, CategoryParseError};
pub use model::expense::{
    CategoryTotals, Expense, ExpenseDraft, ExpensePayload, ExpenseValidationError,
};
pub use model::id::{EntityId, IdExhausted};
pub use model::task::Task;
pub use reorder::{DragState, ReorderAdapter};
pub use store::{ListStore, MemoryListStore, SqliteListStore, StoreError, StoreResult};
pub use view::{
    ChartData, ChartKind, ExpenseSurface, MemorySurface, Surface, TaskSurface, ViewError,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
