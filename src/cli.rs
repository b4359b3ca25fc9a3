use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(about = "Manage a local todo list with subtasks and due dates")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new todo, or a subtask with --parent
    Add {
        /// Title of the todo
        title: String,

        /// Project the todo belongs to
        #[arg(long)]
        project: Option<String>,

        /// Longer description
        #[arg(long, default_value = "")]
        description: String,

        /// Due date in YYYY-MM-DD format
        #[arg(long)]
        due: Option<String>,

        /// People assigned to the todo
        #[arg(long, num_args = 0..)]
        assignees: Vec<String>,

        /// ID of the parent todo, to add this as a subtask
        #[arg(long)]
        parent: Option<u64>,
    },

    /// List all todos
    List,

    /// List todos due today
    Daily,

    /// List todos due within the next 7 days
    Weekly,

    /// Mark a todo as completed
    Complete {
        /// ID of the todo to complete
        id: u64,
    },
}
