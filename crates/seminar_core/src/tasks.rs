use serde::{Deserialize, Serialize};

pub type TaskId = u64;

/// A team task tied to a seminar, e.g. "send reminder mail 14 days before".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub seminar_id: Option<String>,
    pub title: String,
    pub due_date: String,
    pub assigned_to: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Input for [`TaskList::add_task`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewTask {
    pub seminar_id: Option<String>,
    pub title: String,
    pub due_date: String,
    pub assigned_to: String,
    pub notes: Option<String>,
}

/// Ordered in-memory task list. Insertion order is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskList {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuilds a list from persisted tasks; new ids continue after the highest one.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|task| task.id).max().map_or(1, |max| max + 1);
        Self { tasks, next_id }
    }

    pub fn add_task(&mut self, new: NewTask) -> TaskId {
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            seminar_id: new.seminar_id,
            title: new.title,
            due_date: new.due_date,
            assigned_to: new.assigned_to,
            completed: false,
            notes: new.notes,
        });
        id
    }

    /// Marks a task done. Returns `false` if no task has that id.
    pub fn complete_task(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = true;
                true
            }
            None => false,
        }
    }

    /// Tasks whose seminar id equals `seminar_id`; `None` selects tasks without one.
    pub fn tasks_for_seminar<'a>(
        &'a self,
        seminar_id: Option<&'a str>,
    ) -> impl Iterator<Item = &'a Task> + 'a {
        self.tasks
            .iter()
            .filter(move |task| task.seminar_id.as_deref() == seminar_id)
    }

    pub fn open_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|task| !task.completed)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
