use anyhow::{Context, Result};
use colored::Colorize;
use log::warn;

use crate::error::TodoError;
use crate::model::Todo;
use crate::store::TodoStore;

/// Execute the `add` command: store a new todo, or a subtask under `parent`.
pub fn run(store: &mut TodoStore, todo: Todo, parent: Option<u64>) -> Result<()> {
    if todo.due.is_some() && todo.due_date().is_none() {
        warn!(
            "due date {:?} is not YYYY-MM-DD; it will not show up in daily/weekly views",
            todo.due
        );
    }

    match parent {
        Some(parent_id) => {
            let id = store
                .add_subtask(parent_id, todo)
                .context("Failed to add subtask")?
                .ok_or(TodoError::NotFound {
                    what: "Parent todo",
                    id: parent_id,
                })?;
            println!("{}", format!("Added subtask {} to {}.", id, parent_id).green());
        }
        None => {
            let id = store.add(todo).context("Failed to add todo")?;
            println!("{}", format!("Added todo {}.", id).green());
        }
    }

    Ok(())
}
