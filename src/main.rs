use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use colored::Colorize;
use eyre::{Result, eyre};
use std::path::PathBuf;
use taskdeck::{
    Category, DateFilter, DisplayModel, EmptyHint, FilterSelection, JsonFileStorage, StatusFilter,
    TaskId, TaskStore, project,
};

#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(about = "TaskDeck CLI - local task list with filters, stats, and a durable JSON slot")]
#[command(version)]
struct Cli {
    /// Path to the task slot file (default: <data dir>/taskdeck/tasks.json)
    #[arg(short, long)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a task
    Add {
        /// Task description (at least 3 characters)
        text: String,

        /// Due date, YYYY-MM-DD
        #[arg(short, long)]
        due: Option<NaiveDate>,

        /// Task category
        #[arg(short, long, value_enum, default_value = "other")]
        category: Category,
    },

    /// List tasks, optionally filtered
    List {
        #[arg(long, value_enum, default_value = "all")]
        status: StatusFilter,

        #[arg(long, value_enum)]
        category: Option<Category>,

        /// Date bucket, relative to today
        #[arg(long, value_enum, default_value = "all")]
        due: DateFilter,
    },

    /// Toggle a task between completed and pending
    Toggle { id: TaskId },

    /// Delete a single task
    Delete { id: TaskId },

    /// Delete all completed tasks
    ClearCompleted {
        /// Skip the confirmation guard
        #[arg(long)]
        yes: bool,
    },

    /// Delete every task
    ClearAll {
        /// Skip the confirmation guard
        #[arg(long)]
        yes: bool,
    },

    /// Show aggregate counts
    Stats,
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let path = match cli.file {
        Some(path) => path,
        None => default_slot_path()?,
    };

    let today = Local::now().date_naive();
    let mut store = TaskStore::open(Box::new(JsonFileStorage::new(path)), today)?;

    match cli.command {
        Commands::Add {
            text,
            due,
            category,
        } => {
            let task = store.add(&text, due, category, today)?;
            println!("Task added: {} (id {})", task.text, task.id);
        }

        Commands::List {
            status,
            category,
            due,
        } => {
            let selection = FilterSelection {
                status,
                category,
                date: due,
            };
            render_list(&project(store.all(), &selection, today));
        }

        Commands::Toggle { id } => {
            let task = store.toggle_complete(id)?;
            if task.completed {
                println!("Task completed: {}", task.text);
            } else {
                println!("Task marked as pending: {}", task.text);
            }
        }

        Commands::Delete { id } => {
            store.delete_one(id)?;
            println!("Task deleted");
        }

        Commands::ClearCompleted { yes } => {
            if !yes {
                return Err(eyre!(
                    "This deletes every completed task; pass --yes to confirm"
                ));
            }
            let removed = store.delete_completed()?;
            if removed > 0 {
                println!("Deleted {removed} completed tasks");
            } else {
                println!("No completed tasks to delete");
            }
        }

        Commands::ClearAll { yes } => {
            if !yes {
                return Err(eyre!(
                    "This deletes ALL tasks and cannot be undone; pass --yes to confirm"
                ));
            }
            store.delete_all()?;
            println!("All tasks deleted");
        }

        Commands::Stats => {
            let stats = store.stats();
            println!("Total:     {}", stats.total);
            println!("Pending:   {}", stats.pending);
            println!("Completed: {}", stats.completed);
        }
    }

    Ok(())
}

fn default_slot_path() -> Result<PathBuf> {
    let base = dirs::data_dir()
        .ok_or_else(|| eyre!("Could not determine a data directory; pass --file"))?;
    Ok(base.join("taskdeck").join("tasks.json"))
}

fn render_list(model: &DisplayModel) {
    match model.empty {
        Some(EmptyHint::NoTasks) => {
            println!("No tasks found");
            println!("Add your first task with `taskdeck add`");
        }
        Some(EmptyHint::NoMatches) => {
            println!("No tasks found");
            println!("Try changing your filters");
        }
        None => {
            for row in &model.rows {
                let marker = if row.completed {
                    "[x]".green()
                } else {
                    "[ ]".normal()
                };
                let date = if row.overdue {
                    format!("{} (Overdue)", row.date).red()
                } else {
                    row.date.as_str().normal()
                };
                let text = if row.completed {
                    row.text.dimmed()
                } else {
                    row.text.as_str().normal()
                };
                println!("{} {:>13}  {}  {}  [{}]", marker, row.id, text, date, row.category);
            }
        }
    }
    println!("{}", model.count_text);
}
