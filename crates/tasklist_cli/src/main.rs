//! Interactive menu entry point for the tasklist application.
//!
//! # Responsibility
//! - Drive the task manager from a numbered terminal menu.
//! - Keep rendering and input parsing out of the core crate.

use anyhow::Context;
use chrono::{Local, TimeZone};
use console::style;
use std::io::{self, BufRead, Write};
use tasklist_core::{SqliteTaskStore, Task, TaskManager};

const DB_FILE: &str = "tasks.db";
const LOG_DIR: &str = "tasklist-logs";

enum MenuAction {
    Continue,
    Exit,
}

fn main() -> anyhow::Result<()> {
    // File logging is diagnostics only; a read-only working directory must
    // not keep the app from starting.
    if let Err(err) = tasklist_core::init_logging(tasklist_core::default_log_level(), LOG_DIR) {
        eprintln!("warning: file logging disabled: {err}");
    }
    log::info!(
        "event=cli_start module=cli status=ok core_version={}",
        tasklist_core::core_version()
    );

    let store = SqliteTaskStore::open(DB_FILE)
        .with_context(|| format!("failed to open task database `{DB_FILE}`"))?;
    let mut manager = TaskManager::new(store).context("failed to load tasks")?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print_menu();
        let Some(line) = read_line(&mut input)? else {
            // stdin closed; leave the same way as Save and Exit.
            break;
        };

        match run_choice(&mut manager, &mut input, line.trim())? {
            MenuAction::Continue => {}
            MenuAction::Exit => break,
        }
    }

    if let Err(err) = manager.into_store().close() {
        eprintln!("warning: failed to close task database: {err}");
    }
    Ok(())
}

fn run_choice(
    manager: &mut TaskManager<SqliteTaskStore>,
    input: &mut impl BufRead,
    choice: &str,
) -> anyhow::Result<MenuAction> {
    match choice.parse::<u32>() {
        Ok(1) => {
            if let Some(description) = prompt_line(input, "Enter task description: ")? {
                report_action("add task", manager.add(&description));
            }
        }
        Ok(2) => render_tasks(manager.tasks()),
        Ok(3) => {
            if let Some(id) = prompt_task_id(input, "Enter task number to mark as done: ")? {
                report_action("mark task as done", manager.mark_done(id));
            }
        }
        Ok(4) => {
            if let Some(id) = prompt_task_id(input, "Enter task number to delete: ")? {
                report_action("delete task", manager.delete(id));
            }
        }
        Ok(5) => {
            println!("{}", style("Tasks saved. Exiting...").magenta());
            return Ok(MenuAction::Exit);
        }
        Ok(6) => {
            if report_action("clear all data", manager.clear_all()) {
                println!("{}", style("All tasks cleared.").red().bright());
            }
        }
        _ => println!("{}", style("Invalid choice. Try again.").red()),
    }
    Ok(MenuAction::Continue)
}

fn print_menu() {
    println!();
    println!("{}", style("Todo List Menu").cyan());
    println!("1. {}", style("Add Task").green());
    println!("2. {}", style("List Tasks").yellow());
    println!("3. {}", style("Mark Task as Done").blue());
    println!("4. {}", style("Delete Task").red());
    println!("5. {}", style("Save and Exit").magenta());
    println!("6. {}", style("Clear All Data").red().bright());
    print!("Enter your choice: ");
    let _ = io::stdout().flush();
}

fn render_tasks(tasks: &[Task]) {
    for task in tasks {
        let heading = style(format!("{}. {}", task.id, task.description)).blue();
        let status = if task.done {
            style(" [Done]").green()
        } else {
            style(" [Not Done]").yellow()
        };
        print!("{heading}{status}");
        print!(
            " (Created: {})",
            style(format_time(task.created_at)).green()
        );
        if let Some(completed_at) = task.completion_time() {
            print!(
                " {}",
                style(format!("(Completed: {})", format_time(completed_at))).green()
            );
        }
        println!();
    }
}

/// Renders a unix-seconds timestamp in local time.
fn format_time(unix_seconds: i64) -> String {
    match Local.timestamp_opt(unix_seconds, 0).single() {
        Some(stamp) => stamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => unix_seconds.to_string(),
    }
}

/// Reports the outcome of a menu action without leaving the menu loop.
///
/// Storage failures abort only the current action.
fn report_action(action: &str, result: tasklist_core::StoreResult<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            println!("{}", style(format!("Failed to {action}: {err}")).red());
            false
        }
    }
}

fn prompt_line(input: &mut impl BufRead, prompt: &str) -> anyhow::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush().context("failed to flush stdout")?;
    read_line(input)
}

fn prompt_task_id(input: &mut impl BufRead, prompt: &str) -> anyhow::Result<Option<i64>> {
    let Some(line) = prompt_line(input, prompt)? else {
        return Ok(None);
    };
    match line.trim().parse::<i64>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            println!("{}", style("Invalid task number.").red());
            Ok(None)
        }
    }
}

/// Reads one line from stdin; `None` means end of input.
fn read_line(input: &mut impl BufRead) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}
