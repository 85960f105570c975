//! Tests for the record parser and the tree service

use rstest::rstest;

use deptree::application::services::TreeService;
use deptree::application::{parse_records, ApplicationError, DuplicatePolicy};
use deptree::domain::{Diagnostic, DomainError, Edge};

#[rstest]
#[case::single_field("a b\nc\n", 2)]
#[case::field_count_changes("a b\nb c d\n", 2)]
#[case::first_line_too_short("lonely\n", 1)]
fn given_malformed_input_when_parsing_then_reports_line(
    #[case] input: &str,
    #[case] expected_line: usize,
) {
    match parse_records(input, true) {
        Err(ApplicationError::Parse { line, .. }) => assert_eq!(line, expected_line),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn given_quoted_name_across_line_break_when_rendering_then_keeps_record() {
    let service = TreeService::new(DuplicatePolicy::Ignore, true);
    let output = service.render_input("a \"b\nc\"\na d\n").unwrap();
    assert_eq!(output.lines, ["a", " ├─ b\nc", " └─ d"]);
}

#[test]
fn given_field_count_change_after_multiline_record_when_parsing_then_reports_its_line() {
    match parse_records("a \"b\nc\"\nd e f\n", true) {
        Err(ApplicationError::Parse { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn given_lenient_mode_when_field_counts_vary_then_accepts() {
    let edges = parse_records("a b\nb c d\n", false).unwrap();
    assert_eq!(edges, vec![Edge::new("a", "b"), Edge::new("b", "c")]);
}

#[test]
fn given_lenient_mode_when_record_has_one_field_then_still_fails() {
    assert!(parse_records("a b\nc\n", false).is_err());
}

#[test]
fn given_quoted_names_when_rendering_then_spaces_survive() {
    let service = TreeService::new(DuplicatePolicy::Ignore, true);
    let output = service
        .render_input("\"my app\" \"lib core\"\n\"my app\" cli\n")
        .unwrap();
    assert_eq!(output.lines, ["my app", " ├─ lib core", " └─ cli"]);
}

#[test]
fn given_empty_input_when_rendering_then_no_lines() {
    let service = TreeService::new(DuplicatePolicy::Error, true);
    let output = service.render_input("").unwrap();
    assert!(output.lines.is_empty());
    assert!(output.diagnostics.is_empty());
}

#[test]
fn given_unreachable_group_and_error_policy_when_rendering_then_names_group() {
    let service = TreeService::new(DuplicatePolicy::Error, true);
    let err = service.render_input("a b\nz y\n").unwrap_err();
    match err {
        ApplicationError::Domain(DomainError::DroppedDependencies(Diagnostic::Unreachable {
            name,
            children,
        })) => {
            assert_eq!(name, "z");
            assert_eq!(children, ["y"]);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn given_unreachable_group_and_ignore_policy_when_rendering_then_renders_root_tree() {
    let service = TreeService::new(DuplicatePolicy::Ignore, true);
    let output = service.render_input("a b\nz y\n").unwrap();
    assert_eq!(output.lines, ["a", " └─ b"]);
    assert_eq!(output.diagnostics.len(), 1);
}
