use anyhow::Result;
use colored::Colorize;

use crate::model::Todo;
use crate::store::TodoStore;

const SUBTASK_INDENT: &str = "    ";

/// Execute the `list` command: print every todo with its subtasks.
pub fn run(store: &TodoStore) -> Result<()> {
    print_todos(&store.list_all());
    Ok(())
}

/// Print todos one per line, subtasks indented beneath their parent.
pub fn print_todos(todos: &[Todo]) {
    if todos.is_empty() {
        println!("{}", "No todos found.".dimmed());
        return;
    }

    for todo in todos {
        println!("{} {}", checkbox(todo.completed), describe(todo));
        for sub in &todo.subtasks {
            println!(
                "{}{} {}: {}",
                SUBTASK_INDENT,
                checkbox(sub.completed),
                sub.id,
                sub.title
            );
        }
    }
}

fn checkbox(completed: bool) -> colored::ColoredString {
    if completed {
        "[x]".green()
    } else {
        "[ ]".yellow()
    }
}

/// Everything after the checkbox on a top-level line.
fn describe(todo: &Todo) -> String {
    let mut line = format!("{}: {}", todo.id, todo.title);
    if let Some(project) = todo.project.as_deref().filter(|p| !p.is_empty()) {
        line.push_str(&format!(" (project: {})", project));
    }
    if let Some(due) = todo.due.as_deref().filter(|d| !d.is_empty()) {
        line.push_str(&format!(" due {}", due));
    }
    if !todo.assignees.is_empty() {
        line.push_str(&format!(" assignees: {}", todo.assignees.join(", ")));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_title_only() {
        let mut todo = Todo::new("Call mom");
        todo.id = 4;
        assert_eq!(describe(&todo), "4: Call mom");
    }

    #[test]
    fn test_describe_all_fields() {
        let mut todo = Todo::new("Launch")
            .with_project(Some("site".to_string()))
            .with_due(Some("2026-10-20".to_string()))
            .with_assignees(vec!["ana".to_string(), "li".to_string()]);
        todo.id = 7;
        assert_eq!(
            describe(&todo),
            "7: Launch (project: site) due 2026-10-20 assignees: ana, li"
        );
    }

    #[test]
    fn test_describe_skips_empty_project_and_due() {
        let mut todo = Todo::new("Blank")
            .with_project(Some(String::new()))
            .with_due(Some(String::new()));
        todo.id = 2;
        assert_eq!(describe(&todo), "2: Blank");
    }

    #[test]
    fn test_description_is_not_shown() {
        let mut todo = Todo::new("Quiet").with_description("long notes");
        todo.id = 1;
        assert!(!describe(&todo).contains("long notes"));
    }
}
