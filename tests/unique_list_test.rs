//! Tests for the identity-unique collection

use std::collections::BTreeSet;

use modplan::domain::{Code, Credits, DomainError, EntityKind, Module, Name, Tag, UniqueList};

/// Helper to build a module with defaults.
fn module(code: &str, name: &str, credits: &str) -> Module {
    Module::new(
        Code::new(code).unwrap(),
        Name::new(name).unwrap(),
        Credits::new(credits).unwrap(),
        BTreeSet::new(),
        BTreeSet::new(),
    )
}

fn tagged(code: &str, name: &str, credits: &str, tag: &str) -> Module {
    Module::new(
        Code::new(code).unwrap(),
        Name::new(name).unwrap(),
        Credits::new(credits).unwrap(),
        BTreeSet::from([Tag::new(tag).unwrap()]),
        BTreeSet::new(),
    )
}

// ============================================================
// add()
// ============================================================

#[test]
fn given_distinct_identities_when_adding_each_then_never_duplicates() {
    // Arrange
    let mut list = UniqueList::new();

    // Act / Assert
    for (code, name) in [("CS1010", "Programming"), ("CS2040", "Data Structures"), ("MA1301", "Calculus")] {
        list.add(module(code, name, "4")).unwrap();
    }
    assert_eq!(list.len(), 3);
}

#[test]
fn given_same_identity_when_adding_again_then_fails_with_duplicate() {
    // Arrange - same code, different data is still the same entity
    let mut list = UniqueList::new();
    list.add(module("CS1010", "Programming", "4")).unwrap();

    // Act
    let err = list.add(module("CS1010", "Something Else", "8")).unwrap_err();

    // Assert
    assert_eq!(
        err,
        DomainError::DuplicateEntity {
            kind: EntityKind::Module
        }
    );
    assert_eq!(list.len(), 1);
}

// ============================================================
// remove()
// ============================================================

#[test]
fn given_structurally_equal_entity_when_removing_then_succeeds() {
    let mut list = UniqueList::new();
    list.add(module("CS1010", "Programming", "4")).unwrap();

    list.remove(&module("CS1010", "Programming", "4")).unwrap();

    assert!(list.is_empty());
}

#[test]
fn given_same_identity_but_different_fields_when_removing_then_fails() {
    // Arrange - remove demands full equality, not just identity
    let mut list = UniqueList::new();
    list.add(tagged("CS1010", "Programming", "4", "core")).unwrap();

    // Act
    let err = list.remove(&module("CS1010", "Programming", "4")).unwrap_err();

    // Assert
    assert_eq!(
        err,
        DomainError::EntityNotFound {
            kind: EntityKind::Module
        }
    );
    assert_eq!(list.len(), 1);
}

// ============================================================
// set()
// ============================================================

#[test]
fn given_identical_replacement_when_setting_then_reports_unchanged() {
    let mut list = UniqueList::new();
    let m = module("CS1010", "Programming", "4");
    list.add(m.clone()).unwrap();

    let changed = list.set(&m, m.clone()).unwrap();

    assert!(!changed);
    assert_eq!(list.as_slice(), &[m]);
}

#[test]
fn given_replacement_when_setting_then_replaces_in_place() {
    // Arrange - insertion order must survive the replacement
    let mut list = UniqueList::new();
    list.add(module("CS1010", "Programming", "4")).unwrap();
    list.add(module("CS2040", "Data Structures", "4")).unwrap();
    list.add(module("MA1301", "Calculus", "4")).unwrap();

    // Act - replace the middle entry, changing its identity too
    let changed = list
        .set(
            &module("CS2040", "Data Structures", "4"),
            module("CS2030", "Programming II", "4"),
        )
        .unwrap();

    // Assert
    assert!(changed);
    assert_eq!(list.get(1).unwrap().code().as_str(), "CS2030");
    assert_eq!(list.get(0).unwrap().code().as_str(), "CS1010");
    assert_eq!(list.get(2).unwrap().code().as_str(), "MA1301");
}

#[test]
fn given_replacement_clashing_with_other_entry_when_setting_then_fails() {
    let mut list = UniqueList::new();
    list.add(module("CS1010", "Programming", "4")).unwrap();
    list.add(module("CS2040", "Data Structures", "4")).unwrap();

    let err = list
        .set(
            &module("CS1010", "Programming", "4"),
            module("CS2040", "Imposter", "4"),
        )
        .unwrap_err();

    assert_eq!(
        err,
        DomainError::DuplicateEntity {
            kind: EntityKind::Module
        }
    );
}

#[test]
fn given_absent_target_when_setting_then_fails_with_not_found() {
    let mut list = UniqueList::new();
    list.add(module("CS1010", "Programming", "4")).unwrap();

    let err = list
        .set(
            &module("CS9999", "Ghost", "4"),
            module("CS9999", "Ghost", "8"),
        )
        .unwrap_err();

    assert_eq!(
        err,
        DomainError::EntityNotFound {
            kind: EntityKind::Module
        }
    );
}

// ============================================================
// replace_all()
// ============================================================

#[test]
fn given_list_with_identity_duplicates_when_replacing_all_then_fails() {
    let mut list = UniqueList::new();
    list.add(module("CS1010", "Programming", "4")).unwrap();

    let err = list
        .replace_all(vec![
            module("CS2040", "Data Structures", "4"),
            module("CS2040", "Other", "8"),
        ])
        .unwrap_err();

    assert_eq!(
        err,
        DomainError::DuplicateEntity {
            kind: EntityKind::Module
        }
    );
    // Atomic: the original contents survive the failed replacement.
    assert_eq!(list.get(0).unwrap().code().as_str(), "CS1010");
}

#[test]
fn given_clean_list_when_replacing_all_then_reports_change_only_on_difference() {
    let mut list = UniqueList::new();
    list.add(module("CS1010", "Programming", "4")).unwrap();

    let same = vec![module("CS1010", "Programming", "4")];
    assert!(!list.replace_all(same).unwrap());

    let different = vec![module("CS2040", "Data Structures", "4")];
    assert!(list.replace_all(different).unwrap());
    assert_eq!(list.len(), 1);
}
