//! To-do list controller.

use super::{ControllerError, ControllerResult};
use crate::model::id::{observe_entity_id, EntityId};
use crate::model::task::Task;
use crate::store::ListStore;
use crate::view::{pending_label, TaskIntent, TaskListView, TaskSurface};
use log::{debug, error, info};
use std::collections::HashMap;

pub const DEFAULT_TASKS_KEY: &str = "tasks";

/// Source of replacement text for an edit.
pub trait EditPrompt {
    /// Returns the edited text, or `None` when the user cancels.
    fn prompt(&mut self, current: &str) -> Option<String>;
}

impl<F> EditPrompt for F
where
    F: FnMut(&str) -> Option<String>,
{
    fn prompt(&mut self, current: &str) -> Option<String> {
        self(current)
    }
}

/// Owns the ordered task collection and routes task intents.
pub struct TaskController<S: ListStore, V: TaskSurface> {
    store: S,
    view: TaskListView<V>,
    storage_key: String,
    tasks: Vec<Task>,
}

impl<S: ListStore, V: TaskSurface> TaskController<S, V> {
    /// Loads tasks under the default key and renders them.
    pub fn new(store: S, surface: V) -> ControllerResult<Self> {
        Self::with_key(store, surface, DEFAULT_TASKS_KEY)
    }

    /// Loads tasks under `storage_key` and renders them.
    ///
    /// # Errors
    /// - `ControllerError::View` when the surface lacks a required anchor.
    pub fn with_key(store: S, surface: V, storage_key: impl Into<String>) -> ControllerResult<Self> {
        let storage_key = storage_key.into();
        let view = TaskListView::new(surface)?;
        let tasks: Vec<Task> = store.load(&storage_key);
        if let Some(max_id) = tasks.iter().map(|task| task.id).max() {
            observe_entity_id(max_id);
        }
        info!(
            "event=controller_init module=controller status=ok kind=task key={} count={}",
            storage_key,
            tasks.len()
        );

        let mut controller = Self {
            store,
            view,
            storage_key,
            tasks,
        };
        controller.render();
        Ok(controller)
    }

    /// Appends a task with trimmed `text`.
    ///
    /// Returns the new id, or `None` when the text is blank.
    ///
    /// # Errors
    /// - `ControllerError::IdsExhausted` when no id is left; nothing changes.
    /// - `ControllerError::Store` when saving fails; the task is kept.
    pub fn add(&mut self, text: &str) -> ControllerResult<Option<EntityId>> {
        let text = text.trim();
        if text.is_empty() {
            debug!("event=task_add module=controller status=rejected reason=empty_text");
            return Ok(None);
        }

        let task = Task::new(text).map_err(|err| {
            error!("event=task_add module=controller status=error error_code=ids_exhausted");
            ControllerError::from(err)
        })?;
        let id = task.id;
        self.tasks.push(task);
        self.commit("task_add", id)?;
        Ok(Some(id))
    }

    /// Flips completion of `id`. Returns `false` when `id` is unknown.
    pub fn toggle(&mut self, id: EntityId) -> ControllerResult<bool> {
        let Some(task) = self.find_mut(id) else {
            return Ok(false);
        };
        task.toggle();
        self.commit("task_toggle", id)?;
        Ok(true)
    }

    /// Replaces the text of `id` with trimmed `new_text`.
    ///
    /// `None` (cancelled prompt), blank text and unknown ids are no-ops.
    pub fn edit(&mut self, id: EntityId, new_text: Option<&str>) -> ControllerResult<bool> {
        let Some(new_text) = new_text.map(str::trim).filter(|text| !text.is_empty()) else {
            debug!("event=task_edit module=controller status=rejected id={id} reason=empty_or_cancelled");
            return Ok(false);
        };
        let Some(task) = self.find_mut(id) else {
            return Ok(false);
        };
        task.update(new_text);
        self.commit("task_edit", id)?;
        Ok(true)
    }

    /// Asks `prompt` for new text, seeded with the current text, then edits.
    pub fn edit_with_prompt<P: EditPrompt + ?Sized>(
        &mut self,
        id: EntityId,
        prompt: &mut P,
    ) -> ControllerResult<bool> {
        let Some(current) = self.get(id).map(|task| task.text.clone()) else {
            return Ok(false);
        };
        let answer = prompt.prompt(&current);
        self.edit(id, answer.as_deref())
    }

    /// Removes the first task with `id`. Returns `false` when absent.
    pub fn delete(&mut self, id: EntityId) -> ControllerResult<bool> {
        let Some(index) = self.tasks.iter().position(|task| task.id == id) else {
            return Ok(false);
        };
        self.tasks.remove(index);
        self.commit("task_delete", id)?;
        Ok(true)
    }

    /// Replaces the order with `ids` as read back from the surface.
    ///
    /// # Errors
    /// - `ControllerError::InvalidReorder` when `ids` is not a permutation
    ///   of the current ids; the prior order is kept.
    ///
    /// Tasks sharing an id keep their relative order.
    pub fn reorder(&mut self, ids: &[EntityId]) -> ControllerResult<()> {
        self.validate_permutation(ids)?;

        let mut remaining = std::mem::take(&mut self.tasks);
        let mut reordered = Vec::with_capacity(remaining.len());
        for id in ids {
            if let Some(index) = remaining.iter().position(|task| task.id == *id) {
                reordered.push(remaining.remove(index));
            }
        }
        self.tasks = reordered;
        self.commit("task_reorder", ids.first().copied().unwrap_or_default())
    }

    /// Applies one intent raised by the surface.
    ///
    /// Returns whether the collection changed.
    pub fn handle(&mut self, intent: TaskIntent) -> ControllerResult<bool> {
        match intent {
            TaskIntent::Toggle(id) => self.toggle(id),
            TaskIntent::Edit(id, text) => self.edit(id, text.as_deref()),
            TaskIntent::Delete(id) => self.delete(id),
            TaskIntent::Reorder(ids) => self.reorder(&ids).map(|()| true),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn ids(&self) -> Vec<EntityId> {
        self.tasks.iter().map(|task| task.id).collect()
    }

    pub fn get(&self, id: EntityId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn pending_count(&self) -> usize {
        self.tasks.iter().filter(|task| !task.completed).count()
    }

    pub fn pending_label(&self) -> String {
        pending_label(self.pending_count())
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

    fn find_mut(&mut self, id: EntityId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    /// Checks `ids` against the current ids as a multiset, so a stored
    /// list holding a repeated id can still be reordered.
    fn validate_permutation(&self, ids: &[EntityId]) -> ControllerResult<()> {
        if ids.len() != self.tasks.len() {
            return Err(self.reject_reorder(format!(
                "expected {} ids, got {}",
                self.tasks.len(),
                ids.len()
            )));
        }

        let mut remaining: HashMap<EntityId, usize> = HashMap::with_capacity(ids.len());
        for task in &self.tasks {
            *remaining.entry(task.id).or_default() += 1;
        }
        for id in ids {
            match remaining.get_mut(id) {
                None => return Err(self.reject_reorder(format!("unknown id {id}"))),
                Some(0) => return Err(self.reject_reorder(format!("duplicate id {id}"))),
                Some(count) => *count -= 1,
            }
        }
        Ok(())
    }

    fn reject_reorder(&self, details: String) -> ControllerError {
        error!(
            "event=task_reorder module=controller status=error key={} error_code=not_a_permutation details={}",
            self.storage_key, details
        );
        ControllerError::InvalidReorder(details)
    }

    /// Saves the full collection, then re-renders.
    ///
    /// The surface is redrawn even when the save fails so it keeps
    /// matching the in-memory collection.
    fn commit(&mut self, event: &'static str, id: EntityId) -> ControllerResult<()> {
        let saved = self.store.save(&self.storage_key, &self.tasks);
        self.render();
        match saved {
            Ok(()) => {
                info!(
                    "event={event} module=controller status=ok id={id} count={}",
                    self.tasks.len()
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
        self.view.render(&self.tasks);
    }
}
