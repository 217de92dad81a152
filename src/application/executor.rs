//! Execution coordinator: one command cycle from text to saved state
//!
//! `execute` is the single error boundary per command. The raw text is
//! appended to history in a cleanup step that runs whether parsing or
//! execution failed, and persistence happens at most once per command,
//! only when the store reported an actual change.

use std::sync::Arc;

use tracing::debug;

use crate::application::command::{self, CommandResult};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::history::CommandHistory;
use crate::application::store::PlannerStore;
use crate::infrastructure::traits::PlannerStorage;

pub struct CommandExecutor {
    store: PlannerStore,
    storage: Arc<dyn PlannerStorage>,
    history: CommandHistory,
}

impl CommandExecutor {
    pub fn new(store: PlannerStore, storage: Arc<dyn PlannerStorage>) -> Self {
        Self {
            store,
            storage,
            history: CommandHistory::new(),
        }
    }

    /// Run one command cycle: parse, execute, record, persist if mutated.
    ///
    /// A save failure is reported as an error even though the in-memory
    /// mutation already succeeded; state is not rolled back, and memory and
    /// disk stay inconsistent until the next successful save.
    pub fn execute(&mut self, input: &str) -> ApplicationResult<CommandResult> {
        debug!("execute: {:?}", input);
        let outcome = command::parse(input)
            .and_then(|cmd| cmd.execute(&mut self.store, &self.history));
        self.history.record(input);

        let result = outcome?;
        if result.mutated {
            let snapshot = self.store.snapshot();
            self.storage
                .save(&snapshot)
                .map_err(|e| ApplicationError::SaveFailed {
                    source: Box::new(e),
                })?;
        }
        Ok(result)
    }

    pub fn store(&self) -> &PlannerStore {
        &self.store
    }

    /// Mutable access for the presentation layer's selection pushes.
    pub fn store_mut(&mut self) -> &mut PlannerStore {
        &mut self.store
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }
}
