//! Requirement category entity: credits needed plus assigned modules

use std::collections::BTreeSet;
use std::fmt;

use crate::domain::collection::Entity;
use crate::domain::error::EntityKind;
use crate::domain::value::{Code, Credits, Name};

/// A graduation requirement, keyed by its name.
///
/// Identity comparison is case-sensitive exact; the store's lookup by name is
/// case-insensitive. A module code may appear in any number of categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementCategory {
    name: Name,
    credits: Credits,
    modules: BTreeSet<Code>,
}

impl RequirementCategory {
    pub fn new(name: Name, credits: Credits, modules: BTreeSet<Code>) -> Self {
        Self {
            name,
            credits,
            modules,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Credits required to fulfill this category.
    pub fn credits(&self) -> &Credits {
        &self.credits
    }

    pub fn modules(&self) -> &BTreeSet<Code> {
        &self.modules
    }

    /// Inverse membership: is `code` assigned to this category?
    pub fn has_module_code(&self, code: &Code) -> bool {
        self.modules.contains(code)
    }
}

impl Entity for RequirementCategory {
    const KIND: EntityKind = EntityKind::RequirementCategory;

    fn is_same(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for RequirementCategory {
    /// `Core (20 MCs required): CS1010, CS1231`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} MCs required)", self.name, self.credits)?;
        if !self.modules.is_empty() {
            let codes: Vec<&str> = self.modules.iter().map(Code::as_str).collect();
            write!(f, ": {}", codes.join(", "))?;
        }
        Ok(())
    }
}
