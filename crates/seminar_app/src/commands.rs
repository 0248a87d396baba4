use std::io::Write;
use std::path::Path;

use engine_logging::{engine_info, engine_warn};
use seminar_core::{Link, NewTask, Seminar, Task, TaskList};
use seminar_engine::{parse_detail, parse_overview};
use serde::Serialize;

use crate::cli::{Command, TaskCommand};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::persistence::{load_tasks, save_tasks};
use crate::source::{read_page, DirectoryPageSource, PageSource};

/// JSON view of a merged seminar, including the derived `all_links`.
#[derive(Debug, Serialize)]
struct SeminarView<'a> {
    #[serde(flatten)]
    seminar: &'a Seminar,
    all_links: Vec<&'a Link>,
}

pub fn run(command: Command, config: &AppConfig, out: &mut dyn Write) -> Result<(), AppError> {
    match command {
        Command::Overview { file } => {
            let seminars = parse_overview(&read_page(&file)?);
            engine_info!("{:?}: {} seminar(s)", file, seminars.len());
            write_json(out, &seminars)
        }
        Command::Detail { file } => {
            let detail = parse_detail(&read_page(&file)?);
            write_json(out, &detail)
        }
        Command::Merge { file, .. } => {
            let source = DirectoryPageSource::new(&config.pages_dir);
            let seminars = merge_details(&source, &file)?;
            let views: Vec<SeminarView<'_>> = seminars
                .iter()
                .map(|seminar| SeminarView {
                    seminar,
                    all_links: seminar.all_links(),
                })
                .collect();
            write_json(out, &views)
        }
        Command::Tasks { action } => run_tasks(action, &config.tasks_path(), out),
    }
}

/// Parses the overview and attaches each stub's saved detail page, if any.
pub fn merge_details(source: &dyn PageSource, overview: &Path) -> Result<Vec<Seminar>, AppError> {
    let mut seminars = parse_overview(&source.overview(overview)?);
    let mut attached = 0usize;
    for seminar in &mut seminars {
        let Some(id) = seminar.seminar_id.as_deref() else {
            continue;
        };
        match source.detail(id)? {
            Some(html) => {
                seminar.attach_detail(parse_detail(&html));
                attached += 1;
            }
            None => engine_warn!("no saved detail page for seminar {}", id),
        }
    }
    engine_info!(
        "merged {} detail page(s) into {} seminar(s)",
        attached,
        seminars.len()
    );
    Ok(seminars)
}

fn run_tasks(action: TaskCommand, path: &Path, out: &mut dyn Write) -> Result<(), AppError> {
    let mut tasks = load_tasks(path)?;
    match action {
        TaskCommand::Add {
            title,
            due,
            assignee,
            seminar,
            notes,
        } => {
            let id = tasks.add_task(NewTask {
                seminar_id: seminar,
                title,
                due_date: due,
                assigned_to: assignee,
                notes,
            });
            save_tasks(path, tasks)?;
            writeln!(out, "{id}").map_err(|err| AppError::io("<stdout>", err))
        }
        TaskCommand::Complete { id } => {
            if !tasks.complete_task(id) {
                return Err(AppError::Persist(format!("no task with id {id}")));
            }
            save_tasks(path, tasks)
        }
        TaskCommand::List { seminar, open } => {
            let listed = filter_tasks(&tasks, seminar.as_deref(), open);
            write_json(out, &listed)
        }
    }
}

fn filter_tasks<'a>(tasks: &'a TaskList, seminar: Option<&'a str>, open_only: bool) -> Vec<&'a Task> {
    let selected: Box<dyn Iterator<Item = &'a Task> + 'a> = match seminar {
        Some(id) => Box::new(tasks.tasks_for_seminar(Some(id))),
        None => Box::new(tasks.tasks().iter()),
    };
    selected.filter(|task| !open_only || !task.completed).collect()
}

fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out).map_err(|err| AppError::io("<stdout>", err))
}
