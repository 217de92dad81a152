//! Value types: immutable, self-validating string wrappers
//!
//! Each type stores the canonical form of a raw string and rejects invalid
//! construction with the type's constraint message. Equality, hashing and
//! ordering are structural on the backing string; `Ord` is plain
//! lexicographic comparison, which keeps listing order deterministic.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::error::{DomainError, DomainResult};

static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,3}[0-9]{4}[A-Za-z]?$").expect("valid regex"));

static CREDITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0|[1-9][0-9]{0,2})$").expect("valid regex"));

/// A module code, e.g. `CS1010` or `GER1000T`.
///
/// Canonical form is uppercase, so `cs1010` and `CS1010` are one identity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code(String);

impl Code {
    pub const CONSTRAINT: &'static str =
        "module codes are 2-3 letters, then 4 digits, then an optional letter, e.g. CS1010";

    pub fn new(raw: &str) -> DomainResult<Self> {
        if !Self::is_valid(raw) {
            return Err(DomainError::InvalidValue {
                message: Self::CONSTRAINT,
            });
        }
        Ok(Self(raw.to_ascii_uppercase()))
    }

    /// Pure validity predicate, usable without constructing.
    pub fn is_valid(raw: &str) -> bool {
        CODE_RE.is_match(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A credit count: `0` or up to three digits with no leading zero.
///
/// The backing string is kept as given; ordering is lexicographic on it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Credits(String);

impl Credits {
    pub const CONSTRAINT: &'static str =
        "credits are a whole number from 0 to 999 with no leading zero";

    pub fn new(raw: &str) -> DomainResult<Self> {
        if !Self::is_valid(raw) {
            return Err(DomainError::InvalidValue {
                message: Self::CONSTRAINT,
            });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn is_valid(raw: &str) -> bool {
        CREDITS_RE.is_match(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Credits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-text name: anything with at least one non-whitespace character.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

impl Name {
    pub const CONSTRAINT: &'static str = "names must not be blank";

    pub fn new(raw: &str) -> DomainResult<Self> {
        if !Self::is_valid(raw) {
            return Err(DomainError::InvalidValue {
                message: Self::CONSTRAINT,
            });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn is_valid(raw: &str) -> bool {
        !raw.trim().is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Year of study: a single digit from 1 to 4.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(String);

impl Year {
    pub const CONSTRAINT: &'static str = "year is a single digit from 1 to 4";

    pub fn new(raw: &str) -> DomainResult<Self> {
        if !Self::is_valid(raw) {
            return Err(DomainError::InvalidValue {
                message: Self::CONSTRAINT,
            });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn is_valid(raw: &str) -> bool {
        matches!(raw, "1" | "2" | "3" | "4")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Semester within a year: a single digit from 1 to 4.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Semester(String);

impl Semester {
    pub const CONSTRAINT: &'static str = "semester is a single digit from 1 to 4";

    pub fn new(raw: &str) -> DomainResult<Self> {
        if !Self::is_valid(raw) {
            return Err(DomainError::InvalidValue {
                message: Self::CONSTRAINT,
            });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn is_valid(raw: &str) -> bool {
        matches!(raw, "1" | "2" | "3" | "4")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A label attached to a module: one ASCII-alphanumeric word.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
    pub const CONSTRAINT: &'static str = "tags are a single alphanumeric word";

    pub fn new(raw: &str) -> DomainResult<Self> {
        if !Self::is_valid(raw) {
            return Err(DomainError::InvalidValue {
                message: Self::CONSTRAINT,
            });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn is_valid(raw: &str) -> bool {
        !raw.is_empty() && raw.chars().all(|c| c.is_ascii_alphanumeric())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_canonicalizes_to_uppercase() {
        let code = Code::new("cs1010").unwrap();
        assert_eq!(code.as_str(), "CS1010");
        assert_eq!(code, Code::new("CS1010").unwrap());
    }

    #[test]
    fn credits_rejects_leading_zero() {
        assert!(Credits::is_valid("0"));
        assert!(!Credits::is_valid("04"));
    }
}
