use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::{debug, warn};

use crate::error::TodoError;
use crate::model::Todo;
use crate::persistence;

/// In-memory list of top-level todos backed by a JSON file.
/// Every mutation rewrites the whole file before returning.
#[derive(Debug)]
pub struct TodoStore {
    path: PathBuf,
    todos: Vec<Todo>,
    /// `None` once the id space is used up
    next_id: Option<u64>,
}

impl TodoStore {
    /// Load the store from `path`. Missing or malformed files give an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let todos = persistence::load(&path);
        // Subtasks share the id space, so scan the whole tree.
        let next_id = todos.iter().map(Todo::max_id).max().unwrap_or(0).checked_add(1);
        if next_id.is_none() {
            warn!("{} already uses the largest possible id; new todos cannot be added", path.display());
        }
        debug!("opened store at {} (next id {:?})", path.display(), next_id);
        Self {
            path,
            todos,
            next_id,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> Result<(), TodoError> {
        persistence::save(&self.path, &self.todos)
    }

    fn take_id(&mut self) -> Result<u64, TodoError> {
        let id = self.next_id.ok_or(TodoError::IdsExhausted)?;
        self.next_id = id.checked_add(1);
        Ok(id)
    }

    /// Append a top-level todo and return its new id.
    pub fn add(&mut self, mut todo: Todo) -> Result<u64, TodoError> {
        let id = self.take_id()?;
        todo.id = id;
        self.todos.push(todo);
        self.save()?;
        Ok(id)
    }

    pub fn list_all(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    /// Look up a top-level todo. Subtasks are not searched.
    pub fn get(&self, id: u64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: u64) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|t| t.id == id)
    }

    /// Mark a top-level todo completed. Returns `false` if no such id exists.
    pub fn mark_complete(&mut self, id: u64) -> Result<bool, TodoError> {
        match self.get_mut(id) {
            Some(todo) => {
                todo.completed = true;
                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Attach `subtask` to the top-level todo `parent_id`.
    /// Returns the subtask's id, or `None` (store untouched) if the parent is absent.
    pub fn add_subtask(&mut self, parent_id: u64, mut subtask: Todo) -> Result<Option<u64>, TodoError> {
        let next_id = self.next_id;
        let Some(parent) = self.get_mut(parent_id) else {
            return Ok(None);
        };
        let id = next_id.ok_or(TodoError::IdsExhausted)?;
        subtask.id = id;
        parent.subtasks.push(subtask);
        self.next_id = id.checked_add(1);
        self.save()?;
        Ok(Some(id))
    }

    /// Top-level todos due within `[start, end]`. Todos without a parseable
    /// due date are skipped.
    pub fn filter_by_due_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Todo> {
        self.todos
            .iter()
            .filter(|t| t.due_date().is_some_and(|d| start <= d && d <= end))
            .cloned()
            .collect()
    }
}
