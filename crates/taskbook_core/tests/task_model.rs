use chrono::NaiveDate;
use taskbook_core::{Task, TaskKind};

fn at(hour: u32, minute: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 11, 5)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

#[test]
fn todo_renders_with_kind_and_open_markers() {
    let task = Task::todo("read book");
    assert_eq!(task.kind, TaskKind::Todo);
    assert!(!task.done);
    assert_eq!(task.timestamp, None);
    assert_eq!(task.to_string(), "[T][ ] read book");
}

#[test]
fn deadline_renders_with_by_suffix() {
    let task = Task::deadline("submit report", at(18, 0));
    assert_eq!(task.to_string(), "[D][ ] submit report (by: Nov 5 2026, 6:00 PM)");
}

#[test]
fn event_renders_with_at_suffix() {
    let task = Task::event("team standup", at(9, 30));
    assert_eq!(task.to_string(), "[E][ ] team standup (at: Nov 5 2026, 9:30 AM)");
}

#[test]
fn mark_done_flips_the_marker_and_is_permissive() {
    let mut task = Task::todo("read book");
    task.mark_done();
    assert!(task.done);
    assert_eq!(task.to_string(), "[T][X] read book");

    // Re-marking keeps the task done without complaint.
    task.mark_done();
    assert!(task.done);
}

#[test]
fn duplicates_require_kind_description_and_timestamp_to_match() {
    let todo = Task::todo("buy milk");
    let deadline = Task::deadline("buy milk", at(18, 0));

    assert!(todo.duplicates(&Task::todo("buy milk")));
    assert!(!todo.duplicates(&Task::todo("buy bread")));
    assert!(!todo.duplicates(&deadline));
    assert!(deadline.duplicates(&Task::deadline("buy milk", at(18, 0))));
    assert!(!deadline.duplicates(&Task::deadline("buy milk", at(19, 0))));
}

#[test]
fn duplicate_check_is_exact_match_without_case_folding() {
    let task = Task::todo("Buy Milk");
    assert!(!task.duplicates(&Task::todo("buy milk")));
    assert!(!task.duplicates(&Task::todo("Buy Milk ")));
}

#[test]
fn duplicate_check_ignores_the_completion_flag() {
    let open = Task::todo("buy milk");
    let mut done = Task::todo("buy milk");
    done.mark_done();
    assert!(open.duplicates(&done));
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let task = Task::deadline("submit report", at(18, 0));

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["type"], "deadline");
    assert_eq!(json["description"], "submit report");
    assert_eq!(json["done"], false);
    assert_eq!(json["timestamp"], "2026-11-05T18:00:00");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}
