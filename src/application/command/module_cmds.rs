//! Module commands: add, edit, delete, find, list

use std::collections::BTreeSet;

use itertools::Itertools;
use tracing::debug;

use crate::application::command::CommandResult;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::store::PlannerStore;
use crate::domain::{Code, Credits, Module, Name, Tag};

pub const ADD_USAGE: &str = "add name=NAME credits=CREDITS code=CODE [tag=TAG]... [coreq=CODE]...";
pub const EDIT_USAGE: &str =
    "edit INDEX [name=NAME] [credits=CREDITS] [code=CODE] [tag=TAG]... [coreq=CODE]...";
pub const DELETE_USAGE: &str = "delete INDEX";
pub const LIST_USAGE: &str = "list";
pub const FIND_USAGE: &str = "find [name=KEYWORD]... [code=KEYWORD]... [credits=KEYWORD]... [tag=KEYWORD]...";
pub const CLEAR_USAGE: &str = "clear";

/// Clone the 1-based `index` entry out of a filtered view, or fail with the
/// view's length.
pub(crate) fn target_at<E: Clone>(view: Vec<&E>, index: usize) -> ApplicationResult<E> {
    let len = view.len();
    index
        .checked_sub(1)
        .and_then(|i| view.get(i))
        .map(|e| (*e).clone())
        .ok_or(ApplicationError::InvalidIndex { index, len })
}

pub(crate) fn render_numbered<T: std::fmt::Display>(items: &[&T]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddModule {
    pub module: Module,
}

impl AddModule {
    pub fn execute(&self, store: &mut PlannerStore) -> ApplicationResult<CommandResult> {
        debug!("add module {}", self.module.code());
        let message = format!("Added module: {}", self.module);
        let mutated = store.add_module(self.module.clone())?;
        Ok(CommandResult::mutation(message, mutated))
    }
}

/// The optional replacement fields of an edit. Multi-valued fields replace
/// the whole set when present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub code: Option<Code>,
    pub name: Option<Name>,
    pub credits: Option<Credits>,
    pub tags: Option<BTreeSet<Tag>>,
    pub corequisites: Option<BTreeSet<Code>>,
}

impl ModuleDescriptor {
    pub fn is_empty(&self) -> bool {
        self.code.is_none()
            && self.name.is_none()
            && self.credits.is_none()
            && self.tags.is_none()
            && self.corequisites.is_none()
    }

    /// The module as it would look with this descriptor applied.
    pub fn apply(&self, module: &Module) -> Module {
        Module::new(
            self.code.clone().unwrap_or_else(|| module.code().clone()),
            self.name.clone().unwrap_or_else(|| module.name().clone()),
            self.credits
                .clone()
                .unwrap_or_else(|| module.credits().clone()),
            self.tags.clone().unwrap_or_else(|| module.tags().clone()),
            self.corequisites
                .clone()
                .unwrap_or_else(|| module.corequisites().clone()),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditModule {
    pub index: usize,
    pub descriptor: ModuleDescriptor,
}

impl EditModule {
    pub fn execute(&self, store: &mut PlannerStore) -> ApplicationResult<CommandResult> {
        let target = target_at(store.filtered_modules(), self.index)?;
        let edited = self.descriptor.apply(&target);
        let message = format!("Edited module: {}", edited);
        let mutated = store.edit_module(&target, edited)?;
        Ok(CommandResult::mutation(message, mutated))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteModule {
    pub index: usize,
}

impl DeleteModule {
    pub fn execute(&self, store: &mut PlannerStore) -> ApplicationResult<CommandResult> {
        let target = target_at(store.filtered_modules(), self.index)?;
        let message = format!("Deleted module: {}", target);
        let mutated = store.delete_module(&target)?;
        Ok(CommandResult::mutation(message, mutated))
    }
}

/// Keyword predicate over modules: true iff ANY keyword matches its field.
///
/// Name keywords match case-insensitively as substrings; code and tag
/// keywords match case-insensitively as whole values; credit keywords match
/// exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindModules {
    pub name_keywords: Vec<String>,
    pub code_keywords: Vec<String>,
    pub credit_keywords: Vec<String>,
    pub tag_keywords: Vec<String>,
}

impl FindModules {
    pub fn is_empty(&self) -> bool {
        self.name_keywords.is_empty()
            && self.code_keywords.is_empty()
            && self.credit_keywords.is_empty()
            && self.tag_keywords.is_empty()
    }

    pub fn matches(&self, module: &Module) -> bool {
        let name = module.name().as_str().to_lowercase();
        self.name_keywords
            .iter()
            .any(|kw| name.contains(&kw.to_lowercase()))
            || self
                .code_keywords
                .iter()
                .any(|kw| module.code().as_str().eq_ignore_ascii_case(kw))
            || self
                .credit_keywords
                .iter()
                .any(|kw| module.credits().as_str() == kw)
            || self.tag_keywords.iter().any(|kw| {
                module
                    .tags()
                    .iter()
                    .any(|tag| tag.as_str().eq_ignore_ascii_case(kw))
            })
    }

    pub fn execute(&self, store: &mut PlannerStore) -> ApplicationResult<CommandResult> {
        let predicate = self.clone();
        store.update_module_filter(Box::new(move |module| predicate.matches(module)));
        let view = store.filtered_modules();
        let message = if view.is_empty() {
            "No modules match the given keywords".to_string()
        } else {
            format!(
                "{} modules match:\n{}",
                view.len(),
                render_numbered(&view)
            )
        };
        Ok(CommandResult::query(message))
    }
}

pub(crate) fn list_modules(store: &mut PlannerStore) -> ApplicationResult<CommandResult> {
    store.reset_module_filter();
    let view = store.filtered_modules();
    let message = if view.is_empty() {
        "No modules in the planner".to_string()
    } else {
        format!("Listed {} modules:\n{}", view.len(), render_numbered(&view))
    };
    Ok(CommandResult::query(message))
}
