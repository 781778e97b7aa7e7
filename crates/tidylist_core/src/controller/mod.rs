//! Collection controllers.
//!
//! # Responsibility
//! - Own the in-memory ordered collection for one domain.
//! - Apply user intents as atomic mutations.
//! - Persist the full collection and re-render after every mutation.
//!
//! # Invariants
//! - The side-effect order is: mutate, save (full overwrite), render.
//! - Rejected input (blank text, unknown id) is a no-op: no save, no render.
//! - A collection is loaded once, at construction.

use crate::model::id::IdExhausted;
use crate::store::StoreError;
use crate::view::ViewError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod expense_controller;
pub mod task_controller;

pub use expense_controller::{ExpenseController, DEFAULT_EXPENSES_KEY};
pub use task_controller::{EditPrompt, TaskController, DEFAULT_TASKS_KEY};

pub type ControllerResult<T> = Result<T, ControllerError>;

#[derive(Debug)]
pub enum ControllerError {
    /// Persisting the mutated collection failed; memory already holds it.
    Store(StoreError),
    View(ViewError),
    /// Reported order is not a permutation of the current ids.
    InvalidReorder(String),
    /// No id is left for a new entity; the collection is unchanged.
    IdsExhausted(IdExhausted),
}

impl Display for ControllerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::View(err) => write!(f, "{err}"),
            Self::InvalidReorder(details) => write!(f, "invalid reorder: {details}"),
            Self::IdsExhausted(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::View(err) => Some(err),
            Self::InvalidReorder(_) => None,
            Self::IdsExhausted(err) => Some(err),
        }
    }
}

impl From<StoreError> for ControllerError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<ViewError> for ControllerError {
    fn from(value: ViewError) -> Self {
        Self::View(value)
    }
}

impl From<IdExhausted> for ControllerError {
    fn from(value: IdExhausted) -> Self {
        Self::IdsExhausted(value)
    }
}
