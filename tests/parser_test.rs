//! Tests for the two-stage command parser

use modplan::application::command::{parse, Command};
use modplan::application::ApplicationError;
use modplan::domain::{Credits, DomainError, Tag};

fn parse_err(input: &str) -> ApplicationError {
    parse(input).unwrap_err()
}

// ============================================================
// Command word dispatch
// ============================================================

#[test]
fn given_unknown_command_word_when_parsing_then_fails() {
    let err = parse_err("frobnicate name=X");
    match err {
        ApplicationError::UnknownCommand { word } => assert_eq!(word, "frobnicate"),
        other => panic!("expected UnknownCommand, got {other:?}"),
    }
}

#[test]
fn given_bare_commands_when_parsing_then_variants_selected() {
    assert_eq!(parse("list").unwrap(), Command::List);
    assert_eq!(parse("clear").unwrap(), Command::Clear);
    assert_eq!(parse("history").unwrap(), Command::History);
    assert_eq!(parse("help").unwrap(), Command::Help);
    assert_eq!(parse("exit").unwrap(), Command::Exit);
    assert_eq!(parse("planner-list").unwrap(), Command::PlannerList);
    assert_eq!(parse("requirement-list").unwrap(), Command::RequirementList);
}

#[test]
fn given_bare_command_with_trailing_text_when_parsing_then_fails() {
    assert!(matches!(
        parse_err("list everything"),
        ApplicationError::InvalidFormat { .. }
    ));
}

// ============================================================
// add
// ============================================================

#[test]
fn given_full_add_when_parsing_then_module_fields_populated() {
    let command =
        parse("add name=Programming Methodology credits=4 code=CS1010 tag=core tag=sem1 coreq=CS1231")
            .unwrap();

    let Command::Add(add) = command else {
        panic!("expected Add");
    };
    assert_eq!(add.module.code().as_str(), "CS1010");
    assert_eq!(add.module.name().as_str(), "Programming Methodology");
    assert_eq!(add.module.credits().as_str(), "4");
    assert_eq!(add.module.tags().len(), 2);
    assert!(add.module.tags().contains(&Tag::new("core").unwrap()));
    assert_eq!(add.module.corequisites().len(), 1);
}

#[test]
fn given_repeated_single_valued_prefix_when_parsing_then_last_wins() {
    let command = parse("add name=First name=Second credits=4 code=CS1010").unwrap();

    let Command::Add(add) = command else {
        panic!("expected Add");
    };
    assert_eq!(add.module.name().as_str(), "Second");
}

#[test]
fn given_add_missing_required_prefix_when_parsing_then_format_error_with_usage() {
    let err = parse_err("add name=Calculus credits=4");
    match err {
        ApplicationError::InvalidFormat { usage } => assert!(usage.starts_with("add ")),
        other => panic!("expected InvalidFormat, got {other:?}"),
    }
}

#[test]
fn given_add_with_malformed_credits_when_parsing_then_constraint_surfaced_verbatim() {
    let err = parse_err("add name=Calculus credits=abc code=MA1301");
    match err {
        ApplicationError::Domain(DomainError::InvalidValue { message }) => {
            assert_eq!(message, Credits::CONSTRAINT)
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn given_add_with_malformed_value_and_missing_prefix_when_parsing_then_value_error_wins() {
    // Value-type errors outrank the missing-prefix format error.
    let err = parse_err("add credits=abc code=MA1301");
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::InvalidValue { .. })
    ));
}

#[test]
fn given_add_with_preamble_when_parsing_then_format_error() {
    assert!(matches!(
        parse_err("add now name=Calculus credits=4 code=MA1301"),
        ApplicationError::InvalidFormat { .. }
    ));
}

// ============================================================
// edit / delete indices
// ============================================================

#[test]
fn given_edit_with_index_and_one_field_when_parsing_then_descriptor_partial() {
    let command = parse("edit 2 credits=8").unwrap();

    let Command::Edit(edit) = command else {
        panic!("expected Edit");
    };
    assert_eq!(edit.index, 2);
    assert_eq!(edit.descriptor.credits.as_ref().unwrap().as_str(), "8");
    assert!(edit.descriptor.name.is_none());
    assert!(edit.descriptor.tags.is_none());
}

#[test]
fn given_edit_without_fields_when_parsing_then_format_error() {
    assert!(matches!(
        parse_err("edit 2"),
        ApplicationError::InvalidFormat { .. }
    ));
}

#[test]
fn given_non_numeric_or_non_positive_index_when_parsing_then_format_error() {
    assert!(matches!(
        parse_err("delete zero"),
        ApplicationError::InvalidFormat { .. }
    ));
    assert!(matches!(
        parse_err("delete 0"),
        ApplicationError::InvalidFormat { .. }
    ));
    assert!(matches!(
        parse_err("delete"),
        ApplicationError::InvalidFormat { .. }
    ));
}

#[test]
fn given_delete_with_index_when_parsing_then_index_captured() {
    let Command::Delete(delete) = parse("delete 3").unwrap() else {
        panic!("expected Delete");
    };
    assert_eq!(delete.index, 3);
}

// ============================================================
// find
// ============================================================

#[test]
fn given_find_with_keywords_when_parsing_then_keywords_grouped_by_field() {
    let Command::Find(find) = parse("find code=CS1010 code=CS2040 name=calc").unwrap() else {
        panic!("expected Find");
    };
    assert_eq!(find.code_keywords, vec!["CS1010", "CS2040"]);
    assert_eq!(find.name_keywords, vec!["calc"]);
}

#[test]
fn given_find_without_keywords_when_parsing_then_format_error() {
    assert!(matches!(
        parse_err("find"),
        ApplicationError::InvalidFormat { .. }
    ));
}

// ============================================================
// planner / requirement commands
// ============================================================

#[test]
fn given_planner_add_when_parsing_then_slot_and_codes_captured() {
    let Command::PlannerAdd(cmd) = parse("planner-add year=1 semester=2 code=CS1010 code=MA1301")
        .unwrap()
    else {
        panic!("expected PlannerAdd");
    };
    assert_eq!(cmd.plan.year().as_str(), "1");
    assert_eq!(cmd.plan.semester().as_str(), "2");
    assert_eq!(cmd.plan.modules().len(), 2);
}

#[test]
fn given_planner_add_with_out_of_range_year_when_parsing_then_value_error() {
    assert!(matches!(
        parse_err("planner-add year=7 semester=1"),
        ApplicationError::Domain(DomainError::InvalidValue { .. })
    ));
}

#[test]
fn given_planner_edit_without_codes_when_parsing_then_format_error() {
    assert!(matches!(
        parse_err("planner-edit year=1 semester=2"),
        ApplicationError::InvalidFormat { .. }
    ));
}

#[test]
fn given_requirement_add_when_parsing_then_category_captured() {
    let Command::RequirementAdd(cmd) =
        parse("requirement-add name=Computer Science Core credits=60 code=CS1010").unwrap()
    else {
        panic!("expected RequirementAdd");
    };
    assert_eq!(cmd.category.name().as_str(), "Computer Science Core");
    assert_eq!(cmd.category.credits().as_str(), "60");
    assert_eq!(cmd.category.modules().len(), 1);
}

#[test]
fn given_requirement_find_when_parsing_then_code_canonicalized() {
    let Command::RequirementFind(cmd) = parse("requirement-find code=cs1010").unwrap() else {
        panic!("expected RequirementFind");
    };
    assert_eq!(cmd.code.as_str(), "CS1010");
}

#[test]
fn given_repeated_multi_valued_prefix_when_parsing_then_values_unioned() {
    // Duplicate codes collapse into the set.
    let Command::PlannerAdd(cmd) =
        parse("planner-add year=1 semester=1 code=CS1010 code=cs1010 code=MA1301").unwrap()
    else {
        panic!("expected PlannerAdd");
    };
    assert_eq!(cmd.plan.modules().len(), 2);
}
