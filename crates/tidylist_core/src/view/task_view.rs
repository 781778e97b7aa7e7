//! To-do list projection.

use super::{require_anchors, Surface, ViewResult, ANCHOR_TASK_COUNT, ANCHOR_TASK_LIST};
use crate::model::id::EntityId;
use crate::model::task::Task;

/// Sink for the to-do list projection.
pub trait TaskSurface: Surface {
    /// Discards every list item and mounts `rows` in order.
    fn replace_task_rows(&mut self, rows: Vec<TaskRow>);
    fn set_pending_label(&mut self, label: &str);
}

/// User intent raised from a task row or from the list itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskIntent {
    Toggle(EntityId),
    /// `None` text means the edit prompt was cancelled.
    Edit(EntityId, Option<String>),
    Delete(EntityId),
    Reorder(Vec<EntityId>),
}

/// One list item as presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: EntityId,
    pub text: String,
    pub completed: bool,
    pub class_name: String,
    pub draggable: bool,
}

impl TaskRow {
    pub fn from_task(task: &Task) -> Self {
        let class_name = if task.completed {
            "task-item completed"
        } else {
            "task-item"
        };
        Self {
            id: task.id,
            text: task.text.clone(),
            completed: task.completed,
            class_name: class_name.to_string(),
            draggable: true,
        }
    }

    pub fn toggle_intent(&self) -> TaskIntent {
        TaskIntent::Toggle(self.id)
    }

    pub fn edit_intent(&self, new_text: Option<String>) -> TaskIntent {
        TaskIntent::Edit(self.id, new_text)
    }

    pub fn delete_intent(&self) -> TaskIntent {
        TaskIntent::Delete(self.id)
    }
}

/// Pending-count caption, e.g. `1 task pending` / `3 tasks pending`.
pub fn pending_label(pending: usize) -> String {
    let suffix = if pending == 1 { "" } else { "s" };
    format!("{pending} task{suffix} pending")
}

/// Render adapter for the to-do list.
pub struct TaskListView<V: TaskSurface> {
    surface: V,
}

impl<V: TaskSurface> TaskListView<V> {
    /// Binds the view to a surface that exposes the list and count anchors.
    pub fn new(surface: V) -> ViewResult<Self> {
        require_anchors(&surface, &[ANCHOR_TASK_LIST, ANCHOR_TASK_COUNT])?;
        Ok(Self { surface })
    }

    pub fn render(&mut self, tasks: &[Task]) {
        let rows = tasks.iter().map(TaskRow::from_task).collect();
        let pending = tasks.iter().filter(|task| !task.completed).count();
        self.surface.replace_task_rows(rows);
        self.surface.set_pending_label(&pending_label(pending));
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

#[cfg(test)]
mod tests {
    use super::{pending_label, TaskIntent, TaskListView, TaskRow};
    use crate::model::task::Task;
    use crate::view::{MemorySurface, ViewError, ANCHOR_TASK_LIST};

    #[test]
    fn pending_label_pluralizes() {
        assert_eq!(pending_label(0), "0 tasks pending");
        assert_eq!(pending_label(1), "1 task pending");
        assert_eq!(pending_label(2), "2 tasks pending");
    }

    #[test]
    fn row_reflects_completion_in_class_name() {
        let mut task = Task::new("done already").unwrap();
        task.toggle();
        let row = TaskRow::from_task(&task);
        assert_eq!(row.class_name, "task-item completed");
        assert!(row.draggable);
        assert_eq!(row.toggle_intent(), TaskIntent::Toggle(task.id));
        assert_eq!(row.delete_intent(), TaskIntent::Delete(task.id));
    }

    #[test]
    fn construction_fails_without_count_anchor() {
        let surface = MemorySurface::with_anchors(&[ANCHOR_TASK_LIST]);
        let err = TaskListView::new(surface).err().expect("missing anchor");
        assert_eq!(err, ViewError::MissingAnchor("taskCount"));
    }

    #[test]
    fn render_replaces_rows_and_updates_caption() {
        let mut view = TaskListView::new(MemorySurface::for_tasks()).unwrap();
        let mut done = Task::new("b").unwrap();
        done.toggle();
        view.render(&[Task::new("a").unwrap(), done]);
        view.render(&[Task::new("c").unwrap()]);

        let surface = view.surface();
        assert_eq!(surface.task_render_count(), 2);
        assert_eq!(surface.task_rows().len(), 1);
        assert_eq!(surface.task_rows()[0].text, "c");
        assert_eq!(surface.pending_label(), "1 task pending");
    }
}
