//! Semester plan entity: the modules slotted into one (year, semester)

use std::collections::BTreeSet;
use std::fmt;

use crate::domain::collection::Entity;
use crate::domain::error::EntityKind;
use crate::domain::value::{Code, Semester, Year};

/// One slot of the degree plan, keyed by the (year, semester) pair.
///
/// Module codes here are soft references: a code need not exist as a real
/// module, and listings render dangling ones as "module not found".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemesterPlan {
    year: Year,
    semester: Semester,
    modules: BTreeSet<Code>,
}

impl SemesterPlan {
    pub fn new(year: Year, semester: Semester, modules: BTreeSet<Code>) -> Self {
        Self {
            year,
            semester,
            modules,
        }
    }

    pub fn year(&self) -> &Year {
        &self.year
    }

    pub fn semester(&self) -> &Semester {
        &self.semester
    }

    pub fn modules(&self) -> &BTreeSet<Code> {
        &self.modules
    }

    /// The same slot with a different module set.
    pub fn with_modules(&self, modules: BTreeSet<Code>) -> Self {
        Self {
            year: self.year.clone(),
            semester: self.semester.clone(),
            modules,
        }
    }
}

impl Entity for SemesterPlan {
    const KIND: EntityKind = EntityKind::SemesterPlan;

    fn is_same(&self, other: &Self) -> bool {
        self.year == other.year && self.semester == other.semester
    }
}

impl fmt::Display for SemesterPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "year {} semester {} ({} modules)",
            self.year,
            self.semester,
            self.modules.len()
        )
    }
}
