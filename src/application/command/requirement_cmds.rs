//! Requirement category commands

use std::collections::BTreeSet;

use tracing::debug;

use crate::application::command::module_cmds::{render_numbered, target_at};
use crate::application::command::CommandResult;
use crate::application::error::ApplicationResult;
use crate::application::store::PlannerStore;
use crate::domain::{Code, Credits, Name, RequirementCategory};

pub const REQUIREMENT_ADD_USAGE: &str =
    "requirement-add name=NAME credits=CREDITS [code=CODE]...";
pub const REQUIREMENT_EDIT_USAGE: &str =
    "requirement-edit INDEX [name=NAME] [credits=CREDITS] [code=CODE]...";
pub const REQUIREMENT_DELETE_USAGE: &str = "requirement-delete INDEX";
pub const REQUIREMENT_FIND_USAGE: &str = "requirement-find code=CODE";
pub const REQUIREMENT_LIST_USAGE: &str = "requirement-list";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementAdd {
    pub category: RequirementCategory,
}

impl RequirementAdd {
    pub fn execute(&self, store: &mut PlannerStore) -> ApplicationResult<CommandResult> {
        debug!("add category {}", self.category.name());
        let message = format!("Added requirement category: {}", self.category);
        let mutated = store.add_category(self.category.clone())?;
        Ok(CommandResult::mutation(message, mutated))
    }
}

/// The optional replacement fields of a requirement edit. A `code=` set
/// replaces the whole assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDescriptor {
    pub name: Option<Name>,
    pub credits: Option<Credits>,
    pub modules: Option<BTreeSet<Code>>,
}

impl CategoryDescriptor {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.credits.is_none() && self.modules.is_none()
    }

    pub fn apply(&self, category: &RequirementCategory) -> RequirementCategory {
        RequirementCategory::new(
            self.name.clone().unwrap_or_else(|| category.name().clone()),
            self.credits
                .clone()
                .unwrap_or_else(|| category.credits().clone()),
            self.modules
                .clone()
                .unwrap_or_else(|| category.modules().clone()),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementEdit {
    pub index: usize,
    pub descriptor: CategoryDescriptor,
}

impl RequirementEdit {
    pub fn execute(&self, store: &mut PlannerStore) -> ApplicationResult<CommandResult> {
        let target = target_at(store.filtered_categories(), self.index)?;
        let edited = self.descriptor.apply(&target);
        let message = format!("Edited requirement category: {}", edited);
        let mutated = store.edit_category(&target, edited)?;
        Ok(CommandResult::mutation(message, mutated))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementDelete {
    pub index: usize,
}

impl RequirementDelete {
    pub fn execute(&self, store: &mut PlannerStore) -> ApplicationResult<CommandResult> {
        let target = target_at(store.filtered_categories(), self.index)?;
        let message = format!("Deleted requirement category: {}", target);
        let mutated = store.delete_category(&target)?;
        Ok(CommandResult::mutation(message, mutated))
    }
}

/// Inverse membership query: which categories is this code assigned to?
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementFind {
    pub code: Code,
}

impl RequirementFind {
    pub fn execute(&self, store: &mut PlannerStore) -> ApplicationResult<CommandResult> {
        let code = self.code.clone();
        store.update_category_filter(Box::new(move |category| category.has_module_code(&code)));
        let view = store.filtered_categories();
        let message = if view.is_empty() {
            format!("No requirement category contains {}", self.code)
        } else {
            format!(
                "{} requirement categories contain {}:\n{}",
                view.len(),
                self.code,
                render_numbered(&view)
            )
        };
        Ok(CommandResult::query(message))
    }
}

pub(crate) fn list_categories(store: &mut PlannerStore) -> ApplicationResult<CommandResult> {
    store.reset_category_filter();
    let view = store.filtered_categories();
    let message = if view.is_empty() {
        "No requirement categories yet".to_string()
    } else {
        format!(
            "Listed {} requirement categories:\n{}",
            view.len(),
            render_numbered(&view)
        )
    };
    Ok(CommandResult::query(message))
}
