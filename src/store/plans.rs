//! TOML plan repository
//!
//! Persists named plans at `<data dir>/plans.toml` (or the configured path).

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::error::{CraftError, CraftResult};
use crate::models::{ItemId, PlanEntry};

const PLANS_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredPlan {
    name: String,
    updated_at: DateTime<Utc>,
    #[serde(default)]
    items: Vec<PlanEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PlansDocument {
    version: u32,
    #[serde(default)]
    plans: Vec<StoredPlan>,
}

impl Default for PlansDocument {
    fn default() -> Self {
        Self {
            version: PLANS_VERSION,
            plans: Vec::new(),
        }
    }
}

impl PlansDocument {
    fn find_mut(&mut self, name: &str) -> Option<&mut StoredPlan> {
        self.plans.iter_mut().find(|p| p.name == name)
    }
}

pub struct PlanRepository {
    path: PathBuf,
}

impl PlanRepository {
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn load_from_disk(&self) -> CraftResult<PlansDocument> {
        if !self.path.exists() {
            return Ok(PlansDocument::default());
        }

        let content = fs::read_to_string(&self.path)?;
        toml::from_str(&content).map_err(|e| CraftError::PlanStore {
            file: self.path.clone(),
            message: e.to_string(),
        })
    }

    fn save_to_disk(&self, document: &PlansDocument) -> CraftResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(document)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Load, modify and write back the document under an exclusive lock
    fn update<F>(&self, apply: F) -> CraftResult<()>
    where
        F: FnOnce(&mut PlansDocument) -> CraftResult<()>,
    {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let lock_file = fs::File::create(&lock_path)?;
        lock_file.lock_exclusive()?;

        let result = self.load_from_disk().and_then(|mut document| {
            apply(&mut document)?;
            self.save_to_disk(&document)
        });

        let _ = lock_file.unlock();
        result
    }

    pub fn names(&self) -> CraftResult<Vec<String>> {
        let document = self.load_from_disk()?;
        let mut names: Vec<String> = document.plans.into_iter().map(|p| p.name).collect();
        names.sort();
        Ok(names)
    }

    pub fn items(&self, name: &str) -> CraftResult<Vec<(ItemId, u64)>> {
        let document = self.load_from_disk()?;
        document
            .plans
            .into_iter()
            .find(|p| p.name == name)
            .map(|p| p.items.into_iter().map(Into::into).collect())
            .ok_or_else(|| CraftError::UnknownPlan {
                name: name.to_string(),
            })
    }

    /// Create or overwrite a plan
    pub fn save(&self, name: &str, items: &[(ItemId, u64)]) -> CraftResult<()> {
        let entries = to_entries(items);
        self.update(|document| {
            match document.find_mut(name) {
                Some(plan) => {
                    plan.items = entries;
                    plan.updated_at = Utc::now();
                }
                None => document.plans.push(StoredPlan {
                    name: name.to_string(),
                    updated_at: Utc::now(),
                    items: entries,
                }),
            }
            Ok(())
        })?;
        log::info!("saved plan '{}' ({} items)", name, items.len());
        Ok(())
    }

    /// Replace the items of an existing plan
    pub fn replace_items(&self, name: &str, items: &[(ItemId, u64)]) -> CraftResult<()> {
        let entries = to_entries(items);
        self.update(|document| {
            let plan = document
                .find_mut(name)
                .ok_or_else(|| CraftError::UnknownPlan {
                    name: name.to_string(),
                })?;
            plan.items = entries;
            plan.updated_at = Utc::now();
            Ok(())
        })?;
        log::info!("replaced items of plan '{}' ({} items)", name, items.len());
        Ok(())
    }
}

fn to_entries(items: &[(ItemId, u64)]) -> Vec<PlanEntry> {
    items.iter().cloned().map(PlanEntry::from).collect()
}
