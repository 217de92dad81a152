//! Command objects and their single dispatch point
//!
//! A parsed command is a tagged variant carrying its argument payload.
//! Commands are stateless and reusable; execution touches the store only
//! through its public contract, so uniqueness checks can never be bypassed.

pub mod module_cmds;
pub mod parser;
pub mod planner_cmds;
pub mod requirement_cmds;

use itertools::Itertools;

use crate::application::error::ApplicationResult;
use crate::application::history::CommandHistory;
use crate::application::store::PlannerStore;

pub use module_cmds::{AddModule, DeleteModule, EditModule, FindModules, ModuleDescriptor};
pub use parser::parse;
pub use planner_cmds::{PlannerAdd, PlannerDelete, PlannerEdit};
pub use requirement_cmds::{
    CategoryDescriptor, RequirementAdd, RequirementDelete, RequirementEdit, RequirementFind,
};

pub const HISTORY_USAGE: &str = "history";
pub const HELP_USAGE: &str = "help";
pub const EXIT_USAGE: &str = "exit";

/// What a command hands back to the coordinator: a user-facing message,
/// whether the store changed (drives the persistence sync), and whether the
/// session should end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub message: String,
    pub mutated: bool,
    pub exit: bool,
}

impl CommandResult {
    /// A pure query: nothing changed, nothing to save.
    pub fn query(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            mutated: false,
            exit: false,
        }
    }

    /// A write operation; `mutated` aggregates the store's change reports.
    pub fn mutation(message: impl Into<String>, mutated: bool) -> Self {
        Self {
            message: message.into(),
            mutated,
            exit: false,
        }
    }

    pub fn leave(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            mutated: false,
            exit: true,
        }
    }
}

/// A fully parsed command, ready to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddModule),
    Edit(EditModule),
    Delete(DeleteModule),
    List,
    Find(FindModules),
    Clear,
    PlannerAdd(PlannerAdd),
    PlannerEdit(PlannerEdit),
    PlannerDelete(PlannerDelete),
    PlannerList,
    RequirementAdd(RequirementAdd),
    RequirementEdit(RequirementEdit),
    RequirementDelete(RequirementDelete),
    RequirementFind(RequirementFind),
    RequirementList,
    History,
    Help,
    Exit,
}

impl Command {
    pub fn execute(
        &self,
        store: &mut PlannerStore,
        history: &CommandHistory,
    ) -> ApplicationResult<CommandResult> {
        match self {
            Command::Add(cmd) => cmd.execute(store),
            Command::Edit(cmd) => cmd.execute(store),
            Command::Delete(cmd) => cmd.execute(store),
            Command::List => module_cmds::list_modules(store),
            Command::Find(cmd) => cmd.execute(store),
            Command::Clear => clear(store),
            Command::PlannerAdd(cmd) => cmd.execute(store),
            Command::PlannerEdit(cmd) => cmd.execute(store),
            Command::PlannerDelete(cmd) => cmd.execute(store),
            Command::PlannerList => planner_cmds::list_plans(store),
            Command::RequirementAdd(cmd) => cmd.execute(store),
            Command::RequirementEdit(cmd) => cmd.execute(store),
            Command::RequirementDelete(cmd) => cmd.execute(store),
            Command::RequirementFind(cmd) => cmd.execute(store),
            Command::RequirementList => requirement_cmds::list_categories(store),
            Command::History => show_history(history),
            Command::Help => Ok(CommandResult::query(help_text())),
            Command::Exit => Ok(CommandResult::leave("Exiting planner")),
        }
    }
}

/// Empty all three collections in one command.
fn clear(store: &mut PlannerStore) -> ApplicationResult<CommandResult> {
    let mut mutated = store.set_modules(Vec::new())?;
    mutated |= store.set_plans(Vec::new())?;
    mutated |= store.set_categories(Vec::new())?;
    Ok(CommandResult::mutation("Planner data cleared", mutated))
}

fn show_history(history: &CommandHistory) -> ApplicationResult<CommandResult> {
    if history.is_empty() {
        return Ok(CommandResult::query("No commands entered yet"));
    }
    let listing = history
        .entries()
        .iter()
        .rev()
        .enumerate()
        .map(|(i, raw)| format!("{}. {}", i + 1, raw))
        .join("\n");
    Ok(CommandResult::query(format!(
        "Command history (most recent first):\n{}",
        listing
    )))
}

fn help_text() -> String {
    let usages = [
        module_cmds::ADD_USAGE,
        module_cmds::EDIT_USAGE,
        module_cmds::DELETE_USAGE,
        module_cmds::FIND_USAGE,
        module_cmds::LIST_USAGE,
        module_cmds::CLEAR_USAGE,
        planner_cmds::PLANNER_ADD_USAGE,
        planner_cmds::PLANNER_EDIT_USAGE,
        planner_cmds::PLANNER_DELETE_USAGE,
        planner_cmds::PLANNER_LIST_USAGE,
        requirement_cmds::REQUIREMENT_ADD_USAGE,
        requirement_cmds::REQUIREMENT_EDIT_USAGE,
        requirement_cmds::REQUIREMENT_DELETE_USAGE,
        requirement_cmds::REQUIREMENT_FIND_USAGE,
        requirement_cmds::REQUIREMENT_LIST_USAGE,
        HISTORY_USAGE,
        HELP_USAGE,
        EXIT_USAGE,
    ];
    let mut text = String::from("Commands:");
    for usage in usages {
        text.push_str("\n  ");
        text.push_str(usage);
    }
    text
}
