//! JSON file storage for the planner state
//!
//! The on-disk layout is one object with three independent top-level lists.
//! Every value type round-trips its canonical string form exactly; loading
//! re-validates each value, so a hand-edited file with an ill-formed code or
//! credit count is rejected as malformed rather than smuggled into the model.
//! Saves go through a temp file and a rename.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::store::Snapshot;
use crate::domain::{
    Code, Credits, DomainResult, Module, Name, RequirementCategory, Semester, SemesterPlan, Tag,
    Year,
};
use crate::infrastructure::error::{StorageError, StorageResult};
use crate::infrastructure::traits::{FileSystem, PlannerStorage};

pub struct JsonPlannerStorage {
    path: PathBuf,
    fs: Arc<dyn FileSystem>,
}

impl JsonPlannerStorage {
    pub fn new(path: PathBuf, fs: Arc<dyn FileSystem>) -> Self {
        Self { path, fs }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PlannerStorage for JsonPlannerStorage {
    fn load(&self) -> StorageResult<Option<Snapshot>> {
        if !self.fs.exists(&self.path) {
            debug!("load: no data file at {}", self.path.display());
            return Ok(None);
        }
        let content = self
            .fs
            .read_to_string(&self.path)
            .map_err(|e| StorageError::io(format!("read {}", self.path.display()), e))?;
        let file: PlannerFile = serde_json::from_str(&content).map_err(|e| {
            StorageError::Format {
                message: e.to_string(),
            }
        })?;
        let snapshot = file.into_domain().map_err(|e| StorageError::Format {
            message: e.to_string(),
        })?;
        debug!(
            "load: {} modules, {} plans, {} categories",
            snapshot.modules.len(),
            snapshot.plans.len(),
            snapshot.categories.len()
        );
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &Snapshot) -> StorageResult<()> {
        let file = PlannerFile::from_domain(snapshot);
        let content = serde_json::to_string_pretty(&file).map_err(|e| StorageError::Format {
            message: e.to_string(),
        })?;
        self.fs
            .ensure_parent(&self.path)
            .map_err(|e| StorageError::io(format!("create parent of {}", self.path.display()), e))?;
        let tmp = self.path.with_extension("json.tmp");
        self.fs
            .write(&tmp, &content)
            .map_err(|e| StorageError::io(format!("write {}", tmp.display()), e))?;
        self.fs
            .rename(&tmp, &self.path)
            .map_err(|e| StorageError::io(format!("rename into {}", self.path.display()), e))?;
        debug!("save: wrote {}", self.path.display());
        Ok(())
    }
}

// ============================================================
// On-disk representation
// ============================================================

#[derive(Debug, Serialize, Deserialize, Default)]
struct PlannerFile {
    #[serde(default)]
    modules: Vec<ModuleDto>,
    #[serde(default)]
    planner: Vec<PlanDto>,
    #[serde(default)]
    requirements: Vec<CategoryDto>,
}

impl PlannerFile {
    fn from_domain(snapshot: &Snapshot) -> Self {
        Self {
            modules: snapshot.modules.iter().map(ModuleDto::from_domain).collect(),
            planner: snapshot.plans.iter().map(PlanDto::from_domain).collect(),
            requirements: snapshot
                .categories
                .iter()
                .map(CategoryDto::from_domain)
                .collect(),
        }
    }

    fn into_domain(self) -> DomainResult<Snapshot> {
        Ok(Snapshot {
            modules: self
                .modules
                .into_iter()
                .map(ModuleDto::into_domain)
                .collect::<DomainResult<_>>()?,
            plans: self
                .planner
                .into_iter()
                .map(PlanDto::into_domain)
                .collect::<DomainResult<_>>()?,
            categories: self
                .requirements
                .into_iter()
                .map(CategoryDto::into_domain)
                .collect::<DomainResult<_>>()?,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ModuleDto {
    code: String,
    name: String,
    credits: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    corequisites: Vec<String>,
}

impl ModuleDto {
    fn from_domain(module: &Module) -> Self {
        Self {
            code: module.code().as_str().to_string(),
            name: module.name().as_str().to_string(),
            credits: module.credits().as_str().to_string(),
            tags: module.tags().iter().map(|t| t.as_str().to_string()).collect(),
            corequisites: module
                .corequisites()
                .iter()
                .map(|c| c.as_str().to_string())
                .collect(),
        }
    }

    fn into_domain(self) -> DomainResult<Module> {
        Ok(Module::new(
            Code::new(&self.code)?,
            Name::new(&self.name)?,
            Credits::new(&self.credits)?,
            self.tags
                .iter()
                .map(|t| Tag::new(t))
                .collect::<DomainResult<BTreeSet<_>>>()?,
            self.corequisites
                .iter()
                .map(|c| Code::new(c))
                .collect::<DomainResult<BTreeSet<_>>>()?,
        ))
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct PlanDto {
    year: String,
    semester: String,
    #[serde(default)]
    modules: Vec<String>,
}

impl PlanDto {
    fn from_domain(plan: &SemesterPlan) -> Self {
        Self {
            year: plan.year().as_str().to_string(),
            semester: plan.semester().as_str().to_string(),
            modules: plan.modules().iter().map(|c| c.as_str().to_string()).collect(),
        }
    }

    fn into_domain(self) -> DomainResult<SemesterPlan> {
        Ok(SemesterPlan::new(
            Year::new(&self.year)?,
            Semester::new(&self.semester)?,
            self.modules
                .iter()
                .map(|c| Code::new(c))
                .collect::<DomainResult<BTreeSet<_>>>()?,
        ))
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CategoryDto {
    name: String,
    credits: String,
    #[serde(default)]
    modules: Vec<String>,
}

impl CategoryDto {
    fn from_domain(category: &RequirementCategory) -> Self {
        Self {
            name: category.name().as_str().to_string(),
            credits: category.credits().as_str().to_string(),
            modules: category
                .modules()
                .iter()
                .map(|c| c.as_str().to_string())
                .collect(),
        }
    }

    fn into_domain(self) -> DomainResult<RequirementCategory> {
        Ok(RequirementCategory::new(
            Name::new(&self.name)?,
            Credits::new(&self.credits)?,
            self.modules
                .iter()
                .map(|c| Code::new(c))
                .collect::<DomainResult<BTreeSet<_>>>()?,
        ))
    }
}
