//! Expense tracker controller.

use super::{ControllerError, ControllerResult};
use crate::model::expense::{CategoryTotals, Expense, ExpenseDraft, ExpensePayload};
use crate::model::id::{observe_entity_id, EntityId};
use crate::store::ListStore;
use crate::view::{ExpenseIntent, ExpenseSurface, ExpenseTableView};
use log::{debug, error, info};

pub const DEFAULT_EXPENSES_KEY: &str = "expenses";

/// Owns the expense collection, its table projection and its charts.
pub struct ExpenseController<S: ListStore, V: ExpenseSurface> {
    store: S,
    view: ExpenseTableView<V>,
    storage_key: String,
    expenses: Vec<Expense>,
}

impl<S: ListStore, V: ExpenseSurface> ExpenseController<S, V> {
    pub fn new(store: S, surface: V) -> ControllerResult<Self> {
        Self::with_key(store, surface, DEFAULT_EXPENSES_KEY)
    }

    /// Loads expenses under `storage_key`, populates the form and renders.
    ///
    /// # Errors
    /// - `ControllerError::View` when the surface lacks a required anchor.
    pub fn with_key(store: S, surface: V, storage_key: impl Into<String>) -> ControllerResult<Self> {
        let storage_key = storage_key.into();
        let view = ExpenseTableView::new(surface)?;
        let expenses: Vec<Expense> = store.load(&storage_key);
        if let Some(max_id) = expenses.iter().map(|expense| expense.id).max() {
            observe_entity_id(max_id);
        }
        info!(
            "event=controller_init module=controller status=ok kind=expense key={} count={}",
            storage_key,
            expenses.len()
        );

        let mut controller = Self {
            store,
            view,
            storage_key,
            expenses,
        };
        controller.render();
        Ok(controller)
    }

    /// Validates `payload` and appends the resulting expense.
    ///
    /// Returns the new id, or `None` when validation rejects the payload.
    ///
    /// # Errors
    /// - `ControllerError::IdsExhausted` when no id is left; nothing changes.
    /// - `ControllerError::Store` when saving fails; the expense is kept.
    pub fn add(&mut self, payload: &ExpensePayload) -> ControllerResult<Option<EntityId>> {
        let draft = match ExpenseDraft::parse(payload) {
            Ok(draft) => draft,
            Err(err) => {
                debug!("event=expense_add module=controller status=rejected reason={err}");
                return Ok(None);
            }
        };

        let expense = draft.into_expense().map_err(|err| {
            error!("event=expense_add module=controller status=error error_code=ids_exhausted");
            ControllerError::from(err)
        })?;
        let id = expense.id;
        self.expenses.push(expense);
        self.commit("expense_add", id)?;
        Ok(Some(id))
    }

    /// Removes the first expense with `id`. Returns `false` when absent.
    pub fn delete(&mut self, id: EntityId) -> ControllerResult<bool> {
        let Some(index) = self.expenses.iter().position(|expense| expense.id == id) else {
            return Ok(false);
        };
        self.expenses.remove(index);
        self.commit("expense_delete", id)?;
        Ok(true)
    }

    pub fn handle(&mut self, intent: ExpenseIntent) -> ControllerResult<bool> {
        match intent {
            ExpenseIntent::Delete(id) => self.delete(id),
        }
    }

    /// Recomputes per-category sums over the whole collection.
    pub fn calculate_category_totals(&self) -> CategoryTotals {
        CategoryTotals::from_expenses(&self.expenses)
    }

    pub fn grand_total(&self) -> f64 {
        self.expenses.iter().map(|expense| expense.amount).sum()
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn get(&self, id: EntityId) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn surface(&self) -> &V {
        self.view.surface()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Saves the full collection, then re-renders table and charts.
    ///
    /// The surface is redrawn even when the save fails.
    fn commit(&mut self, event: &'static str, id: EntityId) -> ControllerResult<()> {
        let saved = self.store.save(&self.storage_key, &self.expenses);
        self.render();
        match saved {
            Ok(()) => {
                info!(
                    "event={event} module=controller status=ok id={id} count={}",
                    self.expenses.len()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event={event} module=controller status=error id={id} error_code=save_failed error={err}"
                );
                Err(err.into())
            }
        }
    }

    fn render(&mut self) {
        let totals = self.calculate_category_totals();
        self.view.render(&self.expenses, &totals);
    }
}
