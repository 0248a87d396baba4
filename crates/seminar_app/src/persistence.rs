use std::fs;
use std::io::{self, Write};
use std::path::Path;

use engine_logging::{engine_info, engine_warn};
use seminar_core::{Task, TaskList};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::error::AppError;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedTasks {
    tasks: Vec<Task>,
}

/// Loads the task list. A missing file is an empty list; an unreadable or
/// malformed one is an error so that a later save cannot silently drop tasks.
pub(crate) fn load_tasks(path: &Path) -> Result<TaskList, AppError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            engine_info!("No task state at {:?}, starting empty", path);
            return Ok(TaskList::new());
        }
        Err(err) => return Err(AppError::io(path, err)),
    };

    let state: PersistedTasks = ron::from_str(&content).map_err(|err| {
        engine_warn!("Failed to parse task state from {:?}: {}", path, err);
        AppError::Persist(format!("{path:?}: {err}"))
    })?;

    engine_info!("Loaded {} task(s) from {:?}", state.tasks.len(), path);
    Ok(TaskList::from_tasks(state.tasks))
}

pub(crate) fn save_tasks(path: &Path, tasks: TaskList) -> Result<(), AppError> {
    let state = PersistedTasks {
        tasks: tasks.into_tasks(),
    };
    let content = ron::ser::to_string_pretty(&state, ron::ser::PrettyConfig::new())
        .map_err(|err| AppError::Persist(err.to_string()))?;
    write_atomic(path, &content)
}

/// Writes a temp file next to `path`, then renames it over the target.
fn write_atomic(path: &Path, content: &str) -> Result<(), AppError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|err| AppError::io(dir, err))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|err| AppError::io(dir, err))?;
    write_synced(&mut tmp, content).map_err(|err| AppError::io(path, err))?;
    tmp.persist(path)
        .map_err(|err| AppError::io(path, err.error))?;
    Ok(())
}

fn write_synced(tmp: &mut NamedTempFile, content: &str) -> io::Result<()> {
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()
}
