//! The module entity: one unit of study, keyed by its code

use std::collections::BTreeSet;
use std::fmt;

use crate::domain::collection::Entity;
use crate::domain::error::EntityKind;
use crate::domain::value::{Code, Credits, Name, Tag};

/// A university module. Identity is the code; all other fields are data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    code: Code,
    name: Name,
    credits: Credits,
    tags: BTreeSet<Tag>,
    corequisites: BTreeSet<Code>,
}

impl Module {
    pub fn new(
        code: Code,
        name: Name,
        credits: Credits,
        tags: BTreeSet<Tag>,
        corequisites: BTreeSet<Code>,
    ) -> Self {
        Self {
            code,
            name,
            credits,
            tags,
            corequisites,
        }
    }

    pub fn code(&self) -> &Code {
        &self.code
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn credits(&self) -> &Credits {
        &self.credits
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn corequisites(&self) -> &BTreeSet<Code> {
        &self.corequisites
    }
}

impl Entity for Module {
    const KIND: EntityKind = EntityKind::Module;

    fn is_same(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl fmt::Display for Module {
    /// `CS1010 Programming Methodology (4 MCs) [foundation] coreq: CS1231`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({} MCs)", self.code, self.name, self.credits)?;
        if !self.tags.is_empty() {
            let tags: Vec<&str> = self.tags.iter().map(Tag::as_str).collect();
            write!(f, " [{}]", tags.join(", "))?;
        }
        if !self.corequisites.is_empty() {
            let coreqs: Vec<&str> = self.corequisites.iter().map(Code::as_str).collect();
            write!(f, " coreq: {}", coreqs.join(", "))?;
        }
        Ok(())
    }
}
