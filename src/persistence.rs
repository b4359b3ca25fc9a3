use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde_json::Value;

use crate::error::TodoError;
use crate::model::Todo;

/// Read every todo from `path`.
/// A missing file is an empty list; an unreadable or malformed one is also
/// treated as empty, with a warning in the log.
pub fn load(path: &Path) -> Vec<Todo> {
    if !path.exists() {
        debug!("no data file at {}, starting empty", path.display());
        return Vec::new();
    }

    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("cannot read {}: {}; starting empty", path.display(), e);
            return Vec::new();
        }
    };

    match parse_records(&content) {
        Ok(todos) => {
            debug!("loaded {} todos from {}", todos.len(), path.display());
            todos
        }
        Err(e) => {
            warn!("malformed data in {}: {}; starting empty", path.display(), e);
            Vec::new()
        }
    }
}

fn parse_records(content: &str) -> Result<Vec<Todo>, TodoError> {
    let records: Vec<Value> = serde_json::from_str(content)?;
    records.into_iter().map(Todo::from_record).collect()
}

/// Overwrite `path` with the full list, creating its directory if needed.
pub fn save(path: &Path, todos: &[Todo]) -> Result<(), TodoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let records = todos
        .iter()
        .map(Todo::to_record)
        .collect::<Result<Vec<Value>, _>>()?;
    let mut json = serde_json::to_string_pretty(&records)?;
    json.push('\n');
    fs::write(path, json)?;
    debug!("saved {} todos to {}", todos.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(load(&dir.path().join("todos.json")).is_empty());
    }

    #[test]
    fn test_load_malformed_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todos.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(load(&path).is_empty());
    }

    #[test]
    fn test_load_wrong_shape_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todos.json");
        fs::write(&path, r#"{"title": "not a list"}"#).unwrap();
        assert!(load(&path).is_empty());
    }

    #[test]
    fn test_load_bad_record_discards_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todos.json");
        fs::write(&path, r#"[{"title": "ok"}, {"project": "no title"}]"#).unwrap();
        assert!(load(&path).is_empty());
    }

    #[test]
    fn test_save_creates_directory_and_reloads() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("nested").join("todos.json");

        let mut todo = Todo::new("Buy milk").with_assignees(vec!["sam".to_string()]);
        todo.id = 1;
        save(&path, &[todo.clone()]).unwrap();

        assert!(path.exists());
        assert_eq!(load(&path), vec![todo]);
    }

    #[test]
    fn test_save_overwrites_and_indents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todos.json");

        save(&path, &[Todo::new("first"), Todo::new("second")]).unwrap();
        save(&path, &[Todo::new("only")]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\n  {\n    \"title\": \"only\""));
        assert!(!content.contains("first"));
        assert_eq!(load(&path).len(), 1);
    }
}
