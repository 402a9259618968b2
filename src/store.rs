use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

use crate::models::plan::{Plan, TypeCounts};

// Returns the file where saved plans live.
// Defaults to a relative "./data/plans.json".
pub fn get_plans_location() -> String {
    if let Ok(path) = env::var("PLANS_LOCATION") {
        return path;
    }
    let base = env::var("DATA_LOCATION").unwrap_or("./data".to_string());
    format!("{}/plans.json", base)
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write plans to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode plans: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Persisted list of saved plans. The whole collection is read and rewritten
/// on every mutation, so reads in the same process never observe a partial
/// write. Missing or corrupt backing data reads as an empty list.
pub struct PlanStore {
    path: PathBuf,
}

impl PlanStore {
    pub fn new(path: impl Into<PathBuf>) -> PlanStore {
        PlanStore { path: path.into() }
    }

    pub fn open_default() -> PlanStore {
        PlanStore::new(get_plans_location())
    }

    /// All persisted plans in insertion order. Absent or unparseable data is
    /// treated as an empty collection, never an error.
    pub fn list(&self) -> Vec<Plan> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }

    /// Appends a plan and persists. A plan with an empty title is silently
    /// rejected; a plan with an empty id gets a generated one.
    pub fn save(&self, mut plan: Plan) -> Result<(), StoreError> {
        if plan.title.trim().is_empty() {
            return Ok(());
        }
        if plan.id.is_empty() {
            plan.id = Uuid::new_v4().to_string();
        }
        let mut plans = self.list();
        plans.push(plan);
        self.persist(&plans)
    }

    /// Removes the plan with the given id, if present.
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut plans = self.list();
        let before = plans.len();
        plans.retain(|plan| plan.id != id);
        if plans.len() == before {
            return Ok(());
        }
        self.persist(&plans)
    }

    /// Drops every saved plan.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.persist(&[])
    }

    pub fn counts_by_type(&self) -> TypeCounts {
        TypeCounts::tally(&self.list())
    }

    fn persist(&self, plans: &[Plan]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent, &self.path)?;
        }
        let encoded = serde_json::to_string_pretty(plans)?;
        fs::write(&self.path, encoded).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

fn ensure_dir(parent: &Path, target: &Path) -> Result<(), StoreError> {
    if parent.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(parent).map_err(|source| StoreError::Write {
        path: target.to_path_buf(),
        source,
    })
}
