//! Two-stage command parser
//!
//! Stage 1 dispatches on the first whitespace-delimited token. Stage 2
//! tokenizes the remainder into a preamble plus `label=` prefixed arguments:
//! a token starting with a known prefix opens a value that runs until the
//! next prefixed token, so multi-word values need no quoting.

use std::collections::BTreeSet;

use crate::application::command::module_cmds::{
    AddModule, DeleteModule, EditModule, FindModules, ModuleDescriptor, ADD_USAGE, CLEAR_USAGE,
    DELETE_USAGE, EDIT_USAGE, FIND_USAGE, LIST_USAGE,
};
use crate::application::command::planner_cmds::{
    PlannerAdd, PlannerDelete, PlannerEdit, PLANNER_ADD_USAGE, PLANNER_DELETE_USAGE,
    PLANNER_EDIT_USAGE, PLANNER_LIST_USAGE,
};
use crate::application::command::requirement_cmds::{
    CategoryDescriptor, RequirementAdd, RequirementDelete, RequirementEdit, RequirementFind,
    REQUIREMENT_ADD_USAGE, REQUIREMENT_DELETE_USAGE, REQUIREMENT_EDIT_USAGE,
    REQUIREMENT_FIND_USAGE, REQUIREMENT_LIST_USAGE,
};
use crate::application::command::{Command, EXIT_USAGE, HELP_USAGE, HISTORY_USAGE};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::{
    Code, Credits, DomainResult, Module, Name, RequirementCategory, Semester, SemesterPlan, Tag,
    Year,
};

pub(crate) const NAME_PREFIX: &str = "name=";
pub(crate) const CREDITS_PREFIX: &str = "credits=";
pub(crate) const CODE_PREFIX: &str = "code=";
pub(crate) const TAG_PREFIX: &str = "tag=";
pub(crate) const COREQ_PREFIX: &str = "coreq=";
pub(crate) const YEAR_PREFIX: &str = "year=";
pub(crate) const SEMESTER_PREFIX: &str = "semester=";

/// Tokenized arguments: unlabeled preamble plus prefixed values in the
/// order they appeared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ArgMap {
    preamble: String,
    values: Vec<(&'static str, String)>,
}

impl ArgMap {
    /// Split `rest` against the prefixes this command understands. Tokens
    /// carrying an unknown label stay part of the surrounding value text.
    pub(crate) fn tokenize(rest: &str, prefixes: &[&'static str]) -> Self {
        let mut preamble_parts: Vec<&str> = Vec::new();
        let mut values: Vec<(&'static str, String)> = Vec::new();
        let mut current: Option<(&'static str, String)> = None;

        for token in rest.split_whitespace() {
            if let Some(&prefix) = prefixes.iter().find(|p| token.starts_with(**p)) {
                if let Some(entry) = current.take() {
                    values.push(entry);
                }
                current = Some((prefix, token[prefix.len()..].to_string()));
            } else if let Some((_, value)) = current.as_mut() {
                if !value.is_empty() {
                    value.push(' ');
                }
                value.push_str(token);
            } else {
                preamble_parts.push(token);
            }
        }
        if let Some(entry) = current.take() {
            values.push(entry);
        }

        Self {
            preamble: preamble_parts.join(" "),
            values,
        }
    }

    pub(crate) fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last occurrence of a single-valued prefix, if any (last wins).
    pub(crate) fn single(&self, prefix: &str) -> Option<&str> {
        self.values
            .iter()
            .rev()
            .find(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
    }

    /// All occurrences of a multi-valued prefix, in order.
    pub(crate) fn all(&self, prefix: &str) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(p, _)| *p == prefix)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub(crate) fn has(&self, prefix: &str) -> bool {
        self.values.iter().any(|(p, _)| *p == prefix)
    }
}

fn invalid(usage: &'static str) -> ApplicationError {
    ApplicationError::InvalidFormat { usage }
}

/// Parse one line of text into a command.
pub fn parse(input: &str) -> ApplicationResult<Command> {
    let text = input.trim();
    if text.is_empty() {
        return Err(invalid("type help to see the available commands"));
    }
    let (word, rest) = match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (text, ""),
    };
    match word {
        "add" => parse_add(rest),
        "edit" => parse_edit(rest),
        "delete" => parse_delete(rest),
        "list" => parse_bare(rest, Command::List, LIST_USAGE),
        "find" => parse_find(rest),
        "clear" => parse_bare(rest, Command::Clear, CLEAR_USAGE),
        "planner-add" => parse_planner_add(rest),
        "planner-edit" => parse_planner_edit(rest),
        "planner-delete" => parse_planner_delete(rest),
        "planner-list" => parse_bare(rest, Command::PlannerList, PLANNER_LIST_USAGE),
        "requirement-add" => parse_requirement_add(rest),
        "requirement-edit" => parse_requirement_edit(rest),
        "requirement-delete" => parse_requirement_delete(rest),
        "requirement-find" => parse_requirement_find(rest),
        "requirement-list" => parse_bare(rest, Command::RequirementList, REQUIREMENT_LIST_USAGE),
        "history" => parse_bare(rest, Command::History, HISTORY_USAGE),
        "help" => parse_bare(rest, Command::Help, HELP_USAGE),
        "exit" => parse_bare(rest, Command::Exit, EXIT_USAGE),
        _ => Err(ApplicationError::UnknownCommand {
            word: word.to_string(),
        }),
    }
}

/// A command that takes no arguments at all.
fn parse_bare(rest: &str, command: Command, usage: &'static str) -> ApplicationResult<Command> {
    if !rest.trim().is_empty() {
        return Err(invalid(usage));
    }
    Ok(command)
}

/// The 1-based index in the preamble of index-taking commands.
fn parse_index(preamble: &str, usage: &'static str) -> ApplicationResult<usize> {
    preamble
        .parse::<usize>()
        .ok()
        .filter(|index| *index >= 1)
        .ok_or(invalid(usage))
}

fn parse_codes(raws: Vec<&str>) -> DomainResult<BTreeSet<Code>> {
    raws.into_iter().map(Code::new).collect()
}

fn parse_tags(raws: Vec<&str>) -> DomainResult<BTreeSet<Tag>> {
    raws.into_iter().map(Tag::new).collect()
}

fn parse_add(rest: &str) -> ApplicationResult<Command> {
    let args = ArgMap::tokenize(
        rest,
        &[NAME_PREFIX, CREDITS_PREFIX, CODE_PREFIX, TAG_PREFIX, COREQ_PREFIX],
    );
    if !args.preamble().is_empty() {
        return Err(invalid(ADD_USAGE));
    }
    // Validate every present value first: value-type errors outrank the
    // missing-prefix format error.
    let code = args.single(CODE_PREFIX).map(Code::new).transpose()?;
    let name = args.single(NAME_PREFIX).map(Name::new).transpose()?;
    let credits = args.single(CREDITS_PREFIX).map(Credits::new).transpose()?;
    let tags = parse_tags(args.all(TAG_PREFIX))?;
    let corequisites = parse_codes(args.all(COREQ_PREFIX))?;
    let (Some(code), Some(name), Some(credits)) = (code, name, credits) else {
        return Err(invalid(ADD_USAGE));
    };
    Ok(Command::Add(AddModule {
        module: Module::new(code, name, credits, tags, corequisites),
    }))
}

fn parse_edit(rest: &str) -> ApplicationResult<Command> {
    let args = ArgMap::tokenize(
        rest,
        &[NAME_PREFIX, CREDITS_PREFIX, CODE_PREFIX, TAG_PREFIX, COREQ_PREFIX],
    );
    let index = parse_index(args.preamble(), EDIT_USAGE)?;
    let descriptor = ModuleDescriptor {
        code: args.single(CODE_PREFIX).map(Code::new).transpose()?,
        name: args.single(NAME_PREFIX).map(Name::new).transpose()?,
        credits: args.single(CREDITS_PREFIX).map(Credits::new).transpose()?,
        tags: if args.has(TAG_PREFIX) {
            Some(parse_tags(args.all(TAG_PREFIX))?)
        } else {
            None
        },
        corequisites: if args.has(COREQ_PREFIX) {
            Some(parse_codes(args.all(COREQ_PREFIX))?)
        } else {
            None
        },
    };
    if descriptor.is_empty() {
        return Err(invalid(EDIT_USAGE));
    }
    Ok(Command::Edit(EditModule { index, descriptor }))
}

fn parse_delete(rest: &str) -> ApplicationResult<Command> {
    let args = ArgMap::tokenize(rest, &[]);
    let index = parse_index(args.preamble(), DELETE_USAGE)?;
    Ok(Command::Delete(DeleteModule { index }))
}

fn parse_find(rest: &str) -> ApplicationResult<Command> {
    let args = ArgMap::tokenize(
        rest,
        &[NAME_PREFIX, CODE_PREFIX, CREDITS_PREFIX, TAG_PREFIX],
    );
    if !args.preamble().is_empty() {
        return Err(invalid(FIND_USAGE));
    }
    let find = FindModules {
        name_keywords: args.all(NAME_PREFIX).iter().map(|s| s.to_string()).collect(),
        code_keywords: args.all(CODE_PREFIX).iter().map(|s| s.to_string()).collect(),
        credit_keywords: args
            .all(CREDITS_PREFIX)
            .iter()
            .map(|s| s.to_string())
            .collect(),
        tag_keywords: args.all(TAG_PREFIX).iter().map(|s| s.to_string()).collect(),
    };
    if find.is_empty() {
        return Err(invalid(FIND_USAGE));
    }
    Ok(Command::Find(find))
}

fn parse_planner_add(rest: &str) -> ApplicationResult<Command> {
    let args = ArgMap::tokenize(rest, &[YEAR_PREFIX, SEMESTER_PREFIX, CODE_PREFIX]);
    if !args.preamble().is_empty() {
        return Err(invalid(PLANNER_ADD_USAGE));
    }
    let year = args.single(YEAR_PREFIX).map(Year::new).transpose()?;
    let semester = args.single(SEMESTER_PREFIX).map(Semester::new).transpose()?;
    let modules = parse_codes(args.all(CODE_PREFIX))?;
    let (Some(year), Some(semester)) = (year, semester) else {
        return Err(invalid(PLANNER_ADD_USAGE));
    };
    Ok(Command::PlannerAdd(PlannerAdd {
        plan: SemesterPlan::new(year, semester, modules),
    }))
}

fn parse_planner_edit(rest: &str) -> ApplicationResult<Command> {
    let args = ArgMap::tokenize(rest, &[YEAR_PREFIX, SEMESTER_PREFIX, CODE_PREFIX]);
    if !args.preamble().is_empty() {
        return Err(invalid(PLANNER_EDIT_USAGE));
    }
    let year = args.single(YEAR_PREFIX).map(Year::new).transpose()?;
    let semester = args.single(SEMESTER_PREFIX).map(Semester::new).transpose()?;
    let modules = parse_codes(args.all(CODE_PREFIX))?;
    let (Some(year), Some(semester)) = (year, semester) else {
        return Err(invalid(PLANNER_EDIT_USAGE));
    };
    if modules.is_empty() {
        return Err(invalid(PLANNER_EDIT_USAGE));
    }
    Ok(Command::PlannerEdit(PlannerEdit {
        year,
        semester,
        modules,
    }))
}

fn parse_planner_delete(rest: &str) -> ApplicationResult<Command> {
    let args = ArgMap::tokenize(rest, &[YEAR_PREFIX, SEMESTER_PREFIX]);
    if !args.preamble().is_empty() {
        return Err(invalid(PLANNER_DELETE_USAGE));
    }
    let year = args.single(YEAR_PREFIX).map(Year::new).transpose()?;
    let semester = args.single(SEMESTER_PREFIX).map(Semester::new).transpose()?;
    let (Some(year), Some(semester)) = (year, semester) else {
        return Err(invalid(PLANNER_DELETE_USAGE));
    };
    Ok(Command::PlannerDelete(PlannerDelete { year, semester }))
}

fn parse_requirement_add(rest: &str) -> ApplicationResult<Command> {
    let args = ArgMap::tokenize(rest, &[NAME_PREFIX, CREDITS_PREFIX, CODE_PREFIX]);
    if !args.preamble().is_empty() {
        return Err(invalid(REQUIREMENT_ADD_USAGE));
    }
    let name = args.single(NAME_PREFIX).map(Name::new).transpose()?;
    let credits = args.single(CREDITS_PREFIX).map(Credits::new).transpose()?;
    let modules = parse_codes(args.all(CODE_PREFIX))?;
    let (Some(name), Some(credits)) = (name, credits) else {
        return Err(invalid(REQUIREMENT_ADD_USAGE));
    };
    Ok(Command::RequirementAdd(RequirementAdd {
        category: RequirementCategory::new(name, credits, modules),
    }))
}

fn parse_requirement_edit(rest: &str) -> ApplicationResult<Command> {
    let args = ArgMap::tokenize(rest, &[NAME_PREFIX, CREDITS_PREFIX, CODE_PREFIX]);
    let index = parse_index(args.preamble(), REQUIREMENT_EDIT_USAGE)?;
    let descriptor = CategoryDescriptor {
        name: args.single(NAME_PREFIX).map(Name::new).transpose()?,
        credits: args.single(CREDITS_PREFIX).map(Credits::new).transpose()?,
        modules: if args.has(CODE_PREFIX) {
            Some(parse_codes(args.all(CODE_PREFIX))?)
        } else {
            None
        },
    };
    if descriptor.is_empty() {
        return Err(invalid(REQUIREMENT_EDIT_USAGE));
    }
    Ok(Command::RequirementEdit(RequirementEdit { index, descriptor }))
}

fn parse_requirement_delete(rest: &str) -> ApplicationResult<Command> {
    let args = ArgMap::tokenize(rest, &[]);
    let index = parse_index(args.preamble(), REQUIREMENT_DELETE_USAGE)?;
    Ok(Command::RequirementDelete(RequirementDelete { index }))
}

fn parse_requirement_find(rest: &str) -> ApplicationResult<Command> {
    let args = ArgMap::tokenize(rest, &[CODE_PREFIX]);
    if !args.preamble().is_empty() {
        return Err(invalid(REQUIREMENT_FIND_USAGE));
    }
    let code = Code::new(
        args.single(CODE_PREFIX)
            .ok_or_else(|| invalid(REQUIREMENT_FIND_USAGE))?,
    )?;
    Ok(Command::RequirementFind(RequirementFind { code }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_keeps_multi_word_values_together() {
        let args = ArgMap::tokenize(
            "name=Linear Algebra credits=4 code=MA2001",
            &[NAME_PREFIX, CREDITS_PREFIX, CODE_PREFIX],
        );
        assert_eq!(args.preamble(), "");
        assert_eq!(args.single(NAME_PREFIX), Some("Linear Algebra"));
        assert_eq!(args.single(CREDITS_PREFIX), Some("4"));
    }

    #[test]
    fn tokenize_collects_preamble_before_first_prefix() {
        let args = ArgMap::tokenize("2 credits=4", &[CREDITS_PREFIX]);
        assert_eq!(args.preamble(), "2");
    }

    #[test]
    fn single_takes_last_occurrence() {
        let args = ArgMap::tokenize("credits=4 credits=8", &[CREDITS_PREFIX]);
        assert_eq!(args.single(CREDITS_PREFIX), Some("8"));
    }

    #[test]
    fn unknown_labels_stay_value_text() {
        let args = ArgMap::tokenize("name=Intro to logic=fun", &[NAME_PREFIX]);
        assert_eq!(args.single(NAME_PREFIX), Some("Intro to logic=fun"));
    }
}
