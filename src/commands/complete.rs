use anyhow::{Context, Result};
use colored::Colorize;

use crate::error::TodoError;
use crate::store::TodoStore;

/// Execute the `complete` command: mark a top-level todo as done.
pub fn run(store: &mut TodoStore, id: u64) -> Result<()> {
    let found = store
        .mark_complete(id)
        .context("Failed to save completion")?;
    if !found {
        return Err(TodoError::NotFound { what: "Todo", id }.into());
    }
    println!("{}", format!("Completed todo {}.", id).green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Todo;
    use tempfile::TempDir;

    #[test]
    fn test_complete_existing_and_missing() {
        let dir = TempDir::new().unwrap();
        let mut store = TodoStore::open(dir.path().join("todos.json"));
        store.add(Todo::new("Water plants")).unwrap();

        run(&mut store, 1).unwrap();
        assert!(store.get(1).unwrap().completed);

        let err = run(&mut store, 5).unwrap_err();
        assert_eq!(err.to_string(), "Todo with id 5 not found");
    }
}
