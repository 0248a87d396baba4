use std::path::PathBuf;

use clap::{Parser, Subcommand};
use seminar_core::TaskId;

use crate::config::{AppConfig, LogLevel, LogTarget};

/// Extracts seminar records from saved seminar-management pages.
#[derive(Debug, Parser)]
#[command(name = "seminar_app", version)]
pub struct Cli {
    /// RON config file (default: ./seminar_app.ron if present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    #[arg(long, global = true, value_enum)]
    pub log_destination: Option<LogTarget>,

    /// Directory for the persisted task list.
    #[arg(long, global = true)]
    pub state_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the seminar stubs of a saved overview page as JSON.
    Overview { file: PathBuf },
    /// Print the parsed detail of a saved seminar page as JSON.
    Detail { file: PathBuf },
    /// Parse an overview and attach every saved detail page (`<id>.html`).
    Merge {
        file: PathBuf,
        #[arg(long)]
        pages_dir: Option<PathBuf>,
    },
    /// Manage the team task list.
    Tasks {
        #[command(subcommand)]
        action: TaskCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum TaskCommand {
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        due: String,
        #[arg(long)]
        assignee: String,
        #[arg(long)]
        seminar: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    Complete { id: TaskId },
    List {
        #[arg(long)]
        seminar: Option<String>,
        /// Only tasks that are not completed.
        #[arg(long)]
        open: bool,
    },
}

impl Cli {
    /// Command-line flags take precedence over the config file.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if let Some(target) = self.log_destination {
            config.log_destination = target;
        }
        if let Some(dir) = &self.state_dir {
            config.state_dir = dir.clone();
        }
        if let Command::Merge {
            pages_dir: Some(dir),
            ..
        } = &self.command
        {
            config.pages_dir = dir.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "seminar_app",
            "--log-level",
            "trace",
            "merge",
            "overview.html",
            "--pages-dir",
            "saved",
        ]);
        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.pages_dir, PathBuf::from("saved"));
        assert_eq!(config.state_dir, PathBuf::from("."));
    }

    #[test]
    fn task_list_filter_parses() {
        let cli = Cli::parse_from(["seminar_app", "tasks", "list", "--seminar", "42", "--open"]);
        match cli.command {
            Command::Tasks {
                action: TaskCommand::List { seminar, open },
            } => {
                assert_eq!(seminar.as_deref(), Some("42"));
                assert!(open);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
