mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod model;
mod persistence;
mod store;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use cli::{Cli, Command};
use config::Config;
use error::TodoError;
use model::Todo;
use store::TodoStore;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the handle alive until exit; run without logs if setup fails.
    let _logger = logging::init_logging()
        .map_err(|e| eprintln!("warning: {e}"))
        .ok();

    let config = Config::from_install_location()?;
    let mut store = TodoStore::open(&config.data_file);
    log::debug!("using data file {}", store.path().display());

    let result = match cli.command {
        Command::Add {
            title,
            project,
            description,
            due,
            assignees,
            parent,
        } => {
            let todo = Todo::new(title)
                .with_project(project)
                .with_description(description)
                .with_due(due)
                .with_assignees(assignees);
            commands::add::run(&mut store, todo, parent)
        }
        Command::List => commands::list::run(&store),
        Command::Daily => commands::due::run_daily(&store),
        Command::Weekly => commands::due::run_weekly(&store),
        Command::Complete { id } => commands::complete::run(&mut store, id),
    };

    if let Err(err) = &result {
        if let Some(usage) = usage_error(err) {
            usage.exit();
        }
    }

    result
}

/// Unknown ids are user input errors: report them the way clap reports usage errors.
fn usage_error(err: &anyhow::Error) -> Option<clap::Error> {
    match err.downcast_ref::<TodoError>()? {
        not_found @ TodoError::NotFound { .. } => {
            Some(Cli::command().error(ErrorKind::InvalidValue, not_found.to_string()))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_id_exits_like_a_usage_error() {
        let dir = TempDir::new().unwrap();
        let mut store = TodoStore::open(dir.path().join("todos.json"));

        let err = commands::complete::run(&mut store, 3).unwrap_err();
        let usage = usage_error(&err).unwrap();
        assert_eq!(usage.kind(), ErrorKind::InvalidValue);
        assert_eq!(usage.exit_code(), 2);
        assert!(usage.to_string().contains("Todo with id 3 not found"));

        let err = commands::add::run(&mut store, Todo::new("Orphan"), Some(8)).unwrap_err();
        assert!(usage_error(&err)
            .unwrap()
            .to_string()
            .contains("Parent todo with id 8 not found"));
    }

    #[test]
    fn test_other_errors_are_not_usage_errors() {
        let err = anyhow::Error::new(TodoError::IdsExhausted);
        assert!(usage_error(&err).is_none());
        assert!(usage_error(&anyhow::anyhow!("disk full")).is_none());
    }
}
