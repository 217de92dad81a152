//! Aggregate store: the single owner of all planner state
//!
//! `PlannerStore` owns the three unique entity collections and everything
//! derived from them: one filter predicate per entity type, the selection
//! pointers, and the registered change listeners. All mutation goes through
//! the methods here; every mutator returns whether state actually changed so
//! the coordinator can decide about persistence without a hidden dirty flag.
//!
//! Filtered views are recomputed slices on access. They never touch I/O and
//! are always consistent with the latest completed mutation.

use std::fmt;

use tracing::debug;

use crate::domain::{
    Code, DomainError, DomainResult, Entity, EntityKind, Module, Name, RequirementCategory,
    Semester, SemesterPlan, UniqueList, Year,
};

/// Callback invoked after every successful state-changing mutation.
pub type Listener = Box<dyn FnMut() + Send>;

/// Filter predicate over one entity type.
pub type Predicate<E> = Box<dyn Fn(&E) -> bool + Send + Sync>;

fn show_all<E>() -> Predicate<E> {
    Box::new(|_| true)
}

/// The complete persisted state of all three collections at one point in
/// time. Filters, selection and listeners are runtime-only and not part of
/// a snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    pub modules: Vec<Module>,
    pub plans: Vec<SemesterPlan>,
    pub categories: Vec<RequirementCategory>,
}

pub struct PlannerStore {
    modules: UniqueList<Module>,
    plans: UniqueList<SemesterPlan>,
    categories: UniqueList<RequirementCategory>,
    module_filter: Predicate<Module>,
    plan_filter: Predicate<SemesterPlan>,
    category_filter: Predicate<RequirementCategory>,
    selected_module: Option<Code>,
    selected_category: Option<Name>,
    listeners: Vec<Listener>,
}

impl PlannerStore {
    pub fn new() -> Self {
        Self {
            modules: UniqueList::new(),
            plans: UniqueList::new(),
            categories: UniqueList::new(),
            module_filter: show_all(),
            plan_filter: show_all(),
            category_filter: show_all(),
            selected_module: None,
            selected_category: None,
            listeners: Vec::new(),
        }
    }

    /// Rebuild a store from persisted state, re-checking uniqueness.
    pub fn from_snapshot(snapshot: Snapshot) -> DomainResult<Self> {
        let mut store = Self::new();
        store.modules.replace_all(snapshot.modules)?;
        store.plans.replace_all(snapshot.plans)?;
        store.categories.replace_all(snapshot.categories)?;
        Ok(store)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            modules: self.modules.as_slice().to_vec(),
            plans: self.plans.as_slice().to_vec(),
            categories: self.categories.as_slice().to_vec(),
        }
    }

    /// Register a callback fired after each successful mutation.
    /// Filter and selection updates do not fire it.
    pub fn register_listener(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener();
        }
    }

    // ============================================================
    // Modules
    // ============================================================

    pub fn has_module(&self, code: &Code) -> bool {
        self.modules.iter().any(|m| m.code() == code)
    }

    pub fn module_by_code(&self, code: &Code) -> Option<&Module> {
        self.modules.iter().find(|m| m.code() == code)
    }

    pub fn modules(&self) -> &[Module] {
        self.modules.as_slice()
    }

    pub fn add_module(&mut self, module: Module) -> DomainResult<bool> {
        debug!("add_module: {}", module.code());
        self.modules.add(module)?;
        self.notify();
        Ok(true)
    }

    /// Replace `target` with `edited`. The selection follows the replacement
    /// when the edited module was selected.
    pub fn edit_module(&mut self, target: &Module, edited: Module) -> DomainResult<bool> {
        debug!("edit_module: {} -> {}", target.code(), edited.code());
        let follow = self.selected_module.as_ref() == Some(target.code());
        let new_code = edited.code().clone();
        let changed = self.modules.set(target, edited)?;
        if follow {
            self.selected_module = Some(new_code);
        }
        if changed {
            self.notify();
        }
        Ok(changed)
    }

    /// Remove the module structurally equal to `module`.
    ///
    /// If it was selected, re-select whatever now sits at its old index in
    /// the filtered view, else the entry before it, else nothing.
    pub fn delete_module(&mut self, module: &Module) -> DomainResult<bool> {
        debug!("delete_module: {}", module.code());
        let selected_deleted = self.selected_module.as_ref() == Some(module.code());
        let old_index = if selected_deleted {
            self.filtered_modules().iter().position(|m| m.is_same(module))
        } else {
            None
        };
        self.modules.remove(module)?;
        if selected_deleted {
            self.selected_module = old_index.and_then(|index| {
                let view = self.filtered_modules();
                view.get(index)
                    .copied()
                    .or_else(|| index.checked_sub(1).and_then(|i| view.get(i).copied()))
                    .map(|m| m.code().clone())
            });
        }
        self.notify();
        Ok(true)
    }

    /// Atomically replace the full module list.
    pub fn set_modules(&mut self, modules: Vec<Module>) -> DomainResult<bool> {
        let changed = self.modules.replace_all(modules)?;
        if let Some(code) = self.selected_module.clone() {
            if !self.has_module(&code) {
                self.selected_module = None;
            }
        }
        if changed {
            self.notify();
        }
        Ok(changed)
    }

    /// The subset of modules matching the active filter, in insertion order.
    pub fn filtered_modules(&self) -> Vec<&Module> {
        self.modules
            .iter()
            .filter(|m| (self.module_filter)(m))
            .collect()
    }

    /// Replace the module filter. Clears the selection when the selected
    /// module falls out of view.
    pub fn update_module_filter(&mut self, predicate: Predicate<Module>) {
        self.module_filter = predicate;
        if let Some(code) = self.selected_module.clone() {
            if !self.filtered_modules().iter().any(|m| m.code() == &code) {
                self.selected_module = None;
            }
        }
    }

    pub fn reset_module_filter(&mut self) {
        self.update_module_filter(show_all());
    }

    /// Point the selection at the module with `code`, which must be visible
    /// in the current filtered view.
    pub fn set_selected_module(&mut self, code: &Code) -> DomainResult<()> {
        if !self.filtered_modules().iter().any(|m| m.code() == code) {
            return Err(DomainError::EntityNotFound {
                kind: EntityKind::Module,
            });
        }
        self.selected_module = Some(code.clone());
        Ok(())
    }

    pub fn selected_module(&self) -> Option<&Module> {
        let code = self.selected_module.as_ref()?;
        self.module_by_code(code)
    }

    // ============================================================
    // Semester plans
    // ============================================================

    pub fn has_plan(&self, year: &Year, semester: &Semester) -> bool {
        self.plan_at(year, semester).is_some()
    }

    pub fn plan_at(&self, year: &Year, semester: &Semester) -> Option<&SemesterPlan> {
        self.plans
            .iter()
            .find(|p| p.year() == year && p.semester() == semester)
    }

    pub fn plans(&self) -> &[SemesterPlan] {
        self.plans.as_slice()
    }

    pub fn add_plan(&mut self, plan: SemesterPlan) -> DomainResult<bool> {
        debug!("add_plan: {}", plan);
        self.plans.add(plan)?;
        self.notify();
        Ok(true)
    }

    pub fn edit_plan(&mut self, target: &SemesterPlan, edited: SemesterPlan) -> DomainResult<bool> {
        debug!("edit_plan: {}", target);
        let changed = self.plans.set(target, edited)?;
        if changed {
            self.notify();
        }
        Ok(changed)
    }

    pub fn delete_plan(&mut self, plan: &SemesterPlan) -> DomainResult<bool> {
        debug!("delete_plan: {}", plan);
        self.plans.remove(plan)?;
        self.notify();
        Ok(true)
    }

    pub fn set_plans(&mut self, plans: Vec<SemesterPlan>) -> DomainResult<bool> {
        let changed = self.plans.replace_all(plans)?;
        if changed {
            self.notify();
        }
        Ok(changed)
    }

    pub fn filtered_plans(&self) -> Vec<&SemesterPlan> {
        self.plans.iter().filter(|p| (self.plan_filter)(p)).collect()
    }

    pub fn update_plan_filter(&mut self, predicate: Predicate<SemesterPlan>) {
        self.plan_filter = predicate;
    }

    pub fn reset_plan_filter(&mut self) {
        self.update_plan_filter(show_all());
    }

    // ============================================================
    // Requirement categories
    // ============================================================

    /// Case-insensitive lookup by name. Identity stays case-sensitive, so
    /// this can match a category whose stored name differs in case.
    pub fn has_requirement_category(&self, name: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.name().as_str().eq_ignore_ascii_case(name))
    }

    pub fn categories(&self) -> &[RequirementCategory] {
        self.categories.as_slice()
    }

    pub fn add_category(&mut self, category: RequirementCategory) -> DomainResult<bool> {
        debug!("add_category: {}", category.name());
        self.categories.add(category)?;
        self.notify();
        Ok(true)
    }

    pub fn edit_category(
        &mut self,
        target: &RequirementCategory,
        edited: RequirementCategory,
    ) -> DomainResult<bool> {
        debug!("edit_category: {}", target.name());
        let follow = self.selected_category.as_ref() == Some(target.name());
        let new_name = edited.name().clone();
        let changed = self.categories.set(target, edited)?;
        if follow {
            self.selected_category = Some(new_name);
        }
        if changed {
            self.notify();
        }
        Ok(changed)
    }

    /// Remove the category structurally equal to `category`, re-picking the
    /// selection the same way module deletion does.
    pub fn delete_category(&mut self, category: &RequirementCategory) -> DomainResult<bool> {
        debug!("delete_category: {}", category.name());
        let selected_deleted = self.selected_category.as_ref() == Some(category.name());
        let old_index = if selected_deleted {
            self.filtered_categories()
                .iter()
                .position(|c| c.is_same(category))
        } else {
            None
        };
        self.categories.remove(category)?;
        if selected_deleted {
            self.selected_category = old_index.and_then(|index| {
                let view = self.filtered_categories();
                view.get(index)
                    .copied()
                    .or_else(|| index.checked_sub(1).and_then(|i| view.get(i).copied()))
                    .map(|c| c.name().clone())
            });
        }
        self.notify();
        Ok(true)
    }

    pub fn set_categories(&mut self, categories: Vec<RequirementCategory>) -> DomainResult<bool> {
        let changed = self.categories.replace_all(categories)?;
        if let Some(name) = self.selected_category.clone() {
            if !self.categories.iter().any(|c| c.name() == &name) {
                self.selected_category = None;
            }
        }
        if changed {
            self.notify();
        }
        Ok(changed)
    }

    pub fn filtered_categories(&self) -> Vec<&RequirementCategory> {
        self.categories
            .iter()
            .filter(|c| (self.category_filter)(c))
            .collect()
    }

    pub fn update_category_filter(&mut self, predicate: Predicate<RequirementCategory>) {
        self.category_filter = predicate;
        if let Some(name) = self.selected_category.clone() {
            if !self
                .filtered_categories()
                .iter()
                .any(|c| c.name() == &name)
            {
                self.selected_category = None;
            }
        }
    }

    pub fn reset_category_filter(&mut self) {
        self.update_category_filter(show_all());
    }

    pub fn set_selected_category(&mut self, name: &Name) -> DomainResult<()> {
        if !self.filtered_categories().iter().any(|c| c.name() == name) {
            return Err(DomainError::EntityNotFound {
                kind: EntityKind::RequirementCategory,
            });
        }
        self.selected_category = Some(name.clone());
        Ok(())
    }

    pub fn selected_category(&self) -> Option<&RequirementCategory> {
        let name = self.selected_category.as_ref()?;
        self.categories.iter().find(|c| c.name() == name)
    }
}

impl Default for PlannerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PlannerStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlannerStore")
            .field("modules", &self.modules.len())
            .field("plans", &self.plans.len())
            .field("categories", &self.categories.len())
            .field("selected_module", &self.selected_module)
            .field("selected_category", &self.selected_category)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
