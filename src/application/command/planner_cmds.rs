//! Degree-plan commands: one slot per (year, semester)

use std::collections::BTreeSet;

use itertools::Itertools;
use tracing::debug;

use crate::application::command::CommandResult;
use crate::application::error::ApplicationResult;
use crate::application::store::PlannerStore;
use crate::domain::{Code, DomainError, EntityKind, Semester, SemesterPlan, Year};

pub const PLANNER_ADD_USAGE: &str = "planner-add year=YEAR semester=SEMESTER [code=CODE]...";
pub const PLANNER_EDIT_USAGE: &str =
    "planner-edit year=YEAR semester=SEMESTER code=CODE [code=CODE]...";
pub const PLANNER_DELETE_USAGE: &str = "planner-delete year=YEAR semester=SEMESTER";
pub const PLANNER_LIST_USAGE: &str = "planner-list";

/// One listing line for a plan. Codes are soft references, so a code with no
/// matching module renders as "module not found" instead of failing.
pub(crate) fn render_plan(store: &PlannerStore, plan: &SemesterPlan) -> String {
    if plan.modules().is_empty() {
        return format!(
            "year {} semester {}: (no modules)",
            plan.year(),
            plan.semester()
        );
    }
    let modules = plan
        .modules()
        .iter()
        .map(|code| match store.module_by_code(code) {
            Some(module) => format!("{} {}", module.code(), module.name()),
            None => format!("{} (module not found)", code),
        })
        .join(", ");
    format!(
        "year {} semester {}: {}",
        plan.year(),
        plan.semester(),
        modules
    )
}

fn plan_at(store: &PlannerStore, year: &Year, semester: &Semester) -> ApplicationResult<SemesterPlan> {
    store
        .plan_at(year, semester)
        .cloned()
        .ok_or_else(|| {
            DomainError::EntityNotFound {
                kind: EntityKind::SemesterPlan,
            }
            .into()
        })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerAdd {
    pub plan: SemesterPlan,
}

impl PlannerAdd {
    pub fn execute(&self, store: &mut PlannerStore) -> ApplicationResult<CommandResult> {
        debug!("add plan {}", self.plan);
        let message = format!("Added semester plan: {}", render_plan(store, &self.plan));
        let mutated = store.add_plan(self.plan.clone())?;
        Ok(CommandResult::mutation(message, mutated))
    }
}

/// Replaces the module set of an existing slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerEdit {
    pub year: Year,
    pub semester: Semester,
    pub modules: BTreeSet<Code>,
}

impl PlannerEdit {
    pub fn execute(&self, store: &mut PlannerStore) -> ApplicationResult<CommandResult> {
        let target = plan_at(store, &self.year, &self.semester)?;
        let edited = target.with_modules(self.modules.clone());
        let message = format!("Updated semester plan: {}", render_plan(store, &edited));
        let mutated = store.edit_plan(&target, edited)?;
        Ok(CommandResult::mutation(message, mutated))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerDelete {
    pub year: Year,
    pub semester: Semester,
}

impl PlannerDelete {
    pub fn execute(&self, store: &mut PlannerStore) -> ApplicationResult<CommandResult> {
        let target = plan_at(store, &self.year, &self.semester)?;
        let message = format!(
            "Deleted semester plan: year {} semester {}",
            target.year(),
            target.semester()
        );
        let mutated = store.delete_plan(&target)?;
        Ok(CommandResult::mutation(message, mutated))
    }
}

pub(crate) fn list_plans(store: &mut PlannerStore) -> ApplicationResult<CommandResult> {
    store.reset_plan_filter();
    let lines = store
        .filtered_plans()
        .iter()
        .map(|plan| render_plan(store, plan))
        .collect::<Vec<_>>();
    let message = if lines.is_empty() {
        "No semester plans yet".to_string()
    } else {
        format!("Degree plan:\n{}", lines.join("\n"))
    };
    Ok(CommandResult::query(message))
}
