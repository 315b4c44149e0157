//! Interactive console loop for Taskbook.
//!
//! # Responsibility
//! - Read one command line at a time, dispatch it to the core task list and
//!   print the reply framed by the fixed delimiter.
//! - Load the saved list once at startup and flush it after every mutating
//!   command, so a crash mid-loop loses at most the in-flight command.

use log::{error, info};
use std::io::{self, BufRead};
use std::path::Path;
use taskbook_core::{
    default_log_level, init_logging, parse, CommandKind, JsonlTaskStore, TaskList, TaskStore,
};

const DELIMITER: &str = "---------------------------------------";
const DEFAULT_DATA_FILE: &str = "data/taskbook.jsonl";
const GREETING: &str = "Hello! I'm Taskbook.\nWhat can I do for you?";
const FAREWELL: &str = "Bye. Hope to see you again soon!";

/// Loop continuation decision returned by each dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Running,
    Exiting,
}

fn main() {
    let data_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());
    setup_logging(&data_path);

    let store = JsonlTaskStore::new(&data_path);
    let mut list = match store.load() {
        Ok(tasks) => TaskList::from_tasks(tasks),
        Err(err) => {
            error!("event=store_load module=cli status=error error={err}");
            enclose(&format!(
                "Could not read saved tasks: {err}\nStarting with an empty list."
            ));
            TaskList::new()
        }
    };
    info!(
        "event=app_start module=cli status=ok version={} tasks={}",
        env!("CARGO_PKG_VERSION"),
        list.len()
    );

    enclose(GREETING);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let (reply, state) = handle_line(&line, &mut list, &store);
        enclose(&reply);
        if state == LoopState::Exiting {
            return;
        }
    }

    // End of input behaves like `bye`.
    enclose(FAREWELL);
}

/// Parses and executes one input line against the task list.
///
/// Every error is rendered into the reply; only `bye` changes the loop
/// state.
fn handle_line(line: &str, list: &mut TaskList, store: &impl TaskStore) -> (String, LoopState) {
    let command = match parse(line) {
        Ok(command) => command,
        Err(err) => return (err.to_string(), LoopState::Running),
    };

    let reply = match command.kind {
        CommandKind::Bye => return (FAREWELL.to_string(), LoopState::Exiting),
        CommandKind::List => list.render(),
        CommandKind::Find => list.find(&command.description),
        CommandKind::Done => match list.mark_done(&command.description) {
            Ok(reply) => reply,
            Err(err) => return (err.to_string(), LoopState::Running),
        },
        CommandKind::Delete => match list.delete(&command.description) {
            Ok(reply) => reply,
            Err(err) => return (err.to_string(), LoopState::Running),
        },
        CommandKind::Todo | CommandKind::Deadline | CommandKind::Event => {
            match command.to_task() {
                Some(task) => list.add(task),
                // Parser contract guarantees a timestamp for timed kinds.
                None => return ("Could not build that task.".to_string(), LoopState::Running),
            }
        }
    };

    let reply = if command.kind.is_mutating() {
        info!(
            "event=command module=cli status=ok kind={:?} tasks={}",
            command.kind,
            list.len()
        );
        match persist(list, store) {
            Some(warning) => format!("{reply}\n{warning}"),
            None => reply,
        }
    } else {
        reply
    };

    (reply, LoopState::Running)
}

/// Flushes the list; a failed save is reported but never stops the loop.
fn persist(list: &TaskList, store: &impl TaskStore) -> Option<String> {
    match store.save(list.tasks()) {
        Ok(()) => None,
        Err(err) => {
            error!("event=store_save module=cli status=error error={err}");
            Some(format!("Warning: could not save tasks: {err}"))
        }
    }
}

/// Prints a reply framed by the fixed console delimiter.
fn enclose(reply: &str) {
    println!("{DELIMITER}");
    println!("{reply}");
    println!("{DELIMITER}");
    println!();
}

fn setup_logging(data_path: &str) {
    let log_dir = match Path::new(data_path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join("logs"),
        _ => Path::new("logs").to_path_buf(),
    };
    let log_dir = match std::env::current_dir() {
        Ok(cwd) => cwd.join(log_dir),
        Err(_) => return,
    };
    let Some(log_dir) = log_dir.to_str() else {
        return;
    };
    if let Err(err) = init_logging(default_log_level(), log_dir) {
        eprintln!("logging disabled: {err}");
    }
}
