use chrono::NaiveDate;
use taskbook_core::{parse, CommandKind, ParseError, TaskKind};

#[test]
fn todo_parses_into_a_task_building_command() {
    let command = parse("todo read book").unwrap();
    assert_eq!(command.kind, CommandKind::Todo);
    assert_eq!(command.description, "read book");
    assert_eq!(command.timestamp, None);

    let task = command.to_task().unwrap();
    assert_eq!(task.kind, TaskKind::Todo);
    assert_eq!(task.description, "read book");
}

#[test]
fn deadline_splits_description_and_timestamp_at_by() {
    let command = parse("deadline submit report /by 2026-11-05 18:00").unwrap();
    assert_eq!(command.kind, CommandKind::Deadline);
    assert_eq!(command.description, "submit report");

    let expected = NaiveDate::from_ymd_opt(2026, 11, 5)
        .unwrap()
        .and_hms_opt(18, 0, 0)
        .unwrap();
    assert_eq!(command.timestamp, Some(expected));
}

#[test]
fn event_splits_description_and_timestamp_at_at() {
    let command = parse("event team standup /at 2026-11-05 09:30").unwrap();
    assert_eq!(command.kind, CommandKind::Event);
    assert_eq!(command.description, "team standup");
    assert!(command.timestamp.is_some());
}

#[test]
fn empty_descriptions_are_rejected_with_the_keyword() {
    assert_eq!(
        parse("todo").unwrap_err(),
        ParseError::EmptyDescription("todo")
    );
    assert_eq!(
        parse("todo   ").unwrap_err(),
        ParseError::EmptyDescription("todo")
    );
    assert_eq!(
        parse("deadline").unwrap_err(),
        ParseError::EmptyDescription("deadline")
    );
    assert_eq!(
        parse("done").unwrap_err(),
        ParseError::EmptyDescription("done")
    );
    assert_eq!(
        parse("find").unwrap_err(),
        ParseError::EmptyDescription("find")
    );
}

#[test]
fn empty_description_message_names_the_task_kind() {
    let message = parse("todo ").unwrap_err().to_string();
    assert_eq!(message, "The description of a todo cannot be empty.");
}

#[test]
fn unknown_keyword_is_an_invalid_task_type() {
    let err = parse("remind me tomorrow").unwrap_err();
    assert_eq!(err, ParseError::InvalidTaskType("remind".to_string()));
}

#[test]
fn deadline_without_separator_is_rejected() {
    let err = parse("deadline submit report 2026-11-05 18:00").unwrap_err();
    assert_eq!(
        err,
        ParseError::MissingTimestamp {
            keyword: "deadline",
            separator: "/by",
        }
    );
}

#[test]
fn event_without_separator_is_rejected() {
    let err = parse("event standup tomorrow").unwrap_err();
    assert_eq!(
        err,
        ParseError::MissingTimestamp {
            keyword: "event",
            separator: "/at",
        }
    );
}

#[test]
fn separator_with_blank_description_is_an_empty_description() {
    let err = parse("deadline /by 2026-11-05 18:00").unwrap_err();
    assert_eq!(err, ParseError::EmptyDescription("deadline"));
}

#[test]
fn malformed_timestamp_is_rejected() {
    let err = parse("deadline submit report /by next tuesday").unwrap_err();
    assert_eq!(err, ParseError::InvalidTimestamp("next tuesday".to_string()));

    let err = parse("event standup /at 2026-13-40 99:99").unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidTimestamp("2026-13-40 99:99".to_string())
    );
}

#[test]
fn non_task_commands_build_no_task() {
    assert_eq!(parse("list").unwrap().to_task(), None);
    assert_eq!(parse("bye").unwrap().to_task(), None);
    assert_eq!(parse("done 2").unwrap().to_task(), None);
}
