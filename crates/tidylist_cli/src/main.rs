//! Command-line front end for the to-do list and the expense tracker.
//!
//! # Responsibility
//! - Map subcommands onto controller operations over a SQLite store.
//! - Print the resulting list after each command.

mod terminal;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use log::{error, info};
use std::path::PathBuf;
use terminal::TerminalSurface;
use tidylist_core::db::open_db;
use tidylist_core::exercises::delayed_greeting;
use tidylist_core::reorder::DEFAULT_ITEM_HEIGHT;
use tidylist_core::{
    init_logging, AppConfig, Category, EntityId, ExpenseController, ExpensePayload,
    ReorderAdapter, SqliteListStore, TaskController,
};

#[derive(Parser)]
#[command(name = "tidylist")]
#[command(about = "Keep a to-do list and track expenses")]
#[command(version)]
struct Cli {
    /// TOML config file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// SQLite database path, overriding the config
    #[arg(long, global = true, value_name = "FILE")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Manage to-do tasks
    #[command(subcommand)]
    Tasks(TaskCommand),
    /// Manage expenses
    #[command(subcommand)]
    Expenses(ExpenseCommand),
    /// List expense categories and their chart colors
    Categories,
    /// Print a greeting after a delay
    Greet {
        name: Option<String>,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        delay_ms: i64,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::Tasks(TaskCommand::List) => "tasks_list",
            Self::Tasks(TaskCommand::Add { .. }) => "tasks_add",
            Self::Tasks(TaskCommand::Toggle { .. }) => "tasks_toggle",
            Self::Tasks(TaskCommand::Edit { .. }) => "tasks_edit",
            Self::Tasks(TaskCommand::Delete { .. }) => "tasks_delete",
            Self::Tasks(TaskCommand::Move(_)) => "tasks_move",
            Self::Expenses(ExpenseCommand::List) => "expenses_list",
            Self::Expenses(ExpenseCommand::Add { .. }) => "expenses_add",
            Self::Expenses(ExpenseCommand::Delete { .. }) => "expenses_delete",
            Self::Expenses(ExpenseCommand::Totals) => "expenses_totals",
            Self::Categories => "categories",
            Self::Greet { .. } => "greet",
        }
    }
}

#[derive(Subcommand)]
enum TaskCommand {
    List,
    Add {
        text: String,
    },
    /// Flip a task between pending and completed
    Toggle {
        id: EntityId,
    },
    Edit {
        id: EntityId,
        text: String,
    },
    Delete {
        id: EntityId,
    },
    /// Drag a task to a new position
    Move(MoveArgs),
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct MoveTarget {
    /// Drop in front of this task
    #[arg(long, value_name = "ID")]
    before: Option<EntityId>,
    /// Drop after the last task
    #[arg(long)]
    to_end: bool,
}

#[derive(Args)]
struct MoveArgs {
    id: EntityId,
    #[command(flatten)]
    target: MoveTarget,
}

#[derive(Subcommand)]
enum ExpenseCommand {
    List,
    Add {
        amount: String,
        description: String,
        category: String,
    },
    Delete {
        id: EntityId,
    },
    /// Per-category sums
    Totals,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(db) = cli.db {
        config.database_path = db;
    }
    if let Some(log_dir) = &config.log_dir {
        let log_dir = std::path::absolute(log_dir)
            .with_context(|| format!("resolving log dir {}", log_dir.display()))?;
        init_logging(&config.log_level, log_dir)?;
    }

    let command_name = cli.command.name();
    let outcome = match cli.command {
        Command::Tasks(command) => run_tasks(&config, command),
        Command::Expenses(command) => run_expenses(&config, command),
        Command::Categories => {
            for category in Category::ALL {
                println!("{:<13}  {}", category.as_str(), category.color());
            }
            Ok(())
        }
        Command::Greet { name, delay_ms } => {
            println!("{}", delayed_greeting(name.as_deref(), delay_ms).await);
            Ok(())
        }
    };

    match &outcome {
        Ok(()) => info!("event=cli_command module=cli status=ok command={command_name}"),
        Err(err) => error!(
            "event=cli_command module=cli status=error command={command_name} error={err:#}"
        ),
    }
    outcome
}

fn run_tasks(config: &AppConfig, command: TaskCommand) -> anyhow::Result<()> {
    let conn = open_db(&config.database_path)
        .with_context(|| format!("opening {}", config.database_path.display()))?;
    let store = SqliteListStore::new(&conn);
    let mut tasks =
        TaskController::with_key(store, TerminalSurface::default(), config.tasks_key.as_str())?;

    match command {
        TaskCommand::List => {}
        TaskCommand::Add { text } => {
            if tasks.add(&text)?.is_none() {
                bail!("task text must not be blank");
            }
        }
        TaskCommand::Toggle { id } => {
            if !tasks.toggle(id)? {
                bail!("no task with id {id}");
            }
        }
        TaskCommand::Edit { id, text } => {
            if !tasks.edit(id, Some(&text))? {
                bail!("no task with id {id}, or the new text is blank");
            }
        }
        TaskCommand::Delete { id } => {
            if !tasks.delete(id)? {
                bail!("no task with id {id}");
            }
        }
        TaskCommand::Move(args) => {
            let before = if args.target.to_end {
                None
            } else {
                args.target.before
            };
            let order = drag(&tasks.ids(), args.id, before)?;
            tasks.reorder(&order)?;
        }
    }

    tasks.surface().print_tasks();
    Ok(())
}

/// Replays a drag of `id` onto the top edge of `before`, or past the end.
fn drag(ids: &[EntityId], id: EntityId, before: Option<EntityId>) -> anyhow::Result<Vec<EntityId>> {
    let mut adapter = ReorderAdapter::new(ids);
    if !adapter.drag_start(id) {
        bail!("no task with id {id}");
    }

    let pointer_y = match before {
        Some(target) => {
            let Some(midpoint) = adapter.midpoint_of(target) else {
                bail!("no task with id {target}");
            };
            midpoint - DEFAULT_ITEM_HEIGHT / 2.0
        }
        None => f64::INFINITY,
    };
    adapter.drag_over(pointer_y);

    adapter
        .drag_end()
        .context("drag ended without reporting an order")
}

fn run_expenses(config: &AppConfig, command: ExpenseCommand) -> anyhow::Result<()> {
    let conn = open_db(&config.database_path)
        .with_context(|| format!("opening {}", config.database_path.display()))?;
    let store = SqliteListStore::new(&conn);
    let mut expenses = ExpenseController::with_key(
        store,
        TerminalSurface::default(),
        config.expenses_key.as_str(),
    )?;

    match command {
        ExpenseCommand::List => {}
        ExpenseCommand::Add {
            amount,
            description,
            category,
        } => {
            let payload = ExpensePayload::new(amount, description, category);
            if expenses.add(&payload)?.is_none() {
                bail!("expense rejected; see `tidylist categories` for valid categories");
            }
        }
        ExpenseCommand::Delete { id } => {
            if !expenses.delete(id)? {
                bail!("no expense with id {id}");
            }
        }
        ExpenseCommand::Totals => {
            expenses.surface().print_totals();
            return Ok(());
        }
    }

    expenses.surface().print_expenses();
    Ok(())
}
