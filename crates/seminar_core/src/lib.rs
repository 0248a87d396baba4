//! Seminar core: value records shared by the extractors, and the task list.
mod model;
mod tasks;

pub use model::{DeliveryMode, Link, Seminar, SeminarDetail};
pub use tasks::{NewTask, Task, TaskId, TaskList};
