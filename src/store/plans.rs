use crate::domain::{Phase, WeeklyPlan};
use crate::store::files::{atomic_write, list_plan_files, plan_file};
use anyhow::Result;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

/// Failures surfaced by the plan store. Callers treat a missing phase
/// as an empty one; these errors cover the document itself.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no plan documents in {}", .0.display())]
    NoPlans(PathBuf),
    #[error("no plan with id {0}")]
    NotFound(Uuid),
    #[error("failed to read plan document")]
    Io(#[from] std::io::Error),
    #[error("malformed plan document {}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The plan-provider seam. The session and CLI only ever see this
/// trait, so tests can substitute an in-memory provider.
pub trait PlanStore {
    /// Load a plan by id, or the preferred plan when no id is given
    fn load_plan(&self, id: Option<Uuid>) -> Result<WeeklyPlan, StoreError>;

    /// Fetch one phase of a plan by its number label. A plan without
    /// that phase yields `None`, which renders nothing navigable.
    fn fetch_phase(
        &self,
        id: Option<Uuid>,
        phase_number: &str,
    ) -> Result<Option<Phase>, StoreError>;
}

/// Plan documents stored as `<uuid>.json` files in the sous directory
pub struct FilePlanStore {
    dir: PathBuf,
    /// Preferred plan from settings.json, used when no id is given
    default_plan: Option<Uuid>,
}

impl FilePlanStore {
    pub fn new(dir: PathBuf, default_plan: Option<Uuid>) -> Self {
        Self { dir, default_plan }
    }

    /// Write a plan document, atomically
    pub fn save_plan(&self, plan: &WeeklyPlan) -> Result<PathBuf> {
        let path = plan_file(&self.dir, plan.id);
        let json = serde_json::to_string_pretty(plan)?;
        atomic_write(&path, &json)?;
        Ok(path)
    }

    fn read_plan_at(&self, path: &Path) -> Result<WeeklyPlan, StoreError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolution order: explicit id, then the settings default, then
    /// the only stored plan (first in filename order when several).
    fn resolve_path(&self, id: Option<Uuid>) -> Result<PathBuf, StoreError> {
        if let Some(id) = id.or(self.default_plan) {
            let path = plan_file(&self.dir, id);
            if !path.exists() {
                return Err(StoreError::NotFound(id));
            }
            return Ok(path);
        }

        let files = list_plan_files(&self.dir).map_err(|_| io_not_found(&self.dir))?;
        files
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::NoPlans(self.dir.clone()))
    }
}

fn io_not_found(dir: &Path) -> StoreError {
    StoreError::Io(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        format!("cannot list {}", dir.display()),
    ))
}

impl PlanStore for FilePlanStore {
    fn load_plan(&self, id: Option<Uuid>) -> Result<WeeklyPlan, StoreError> {
        let path = self.resolve_path(id)?;
        self.read_plan_at(&path)
    }

    fn fetch_phase(
        &self,
        id: Option<Uuid>,
        phase_number: &str,
    ) -> Result<Option<Phase>, StoreError> {
        let plan = self.load_plan(id)?;
        Ok(plan
            .batch_cooking_plan
            .phases
            .into_iter()
            .find(|p| p.phase_number == phase_number))
    }
}

/// In-memory provider, substituted for the file store in tests
#[cfg(test)]
pub struct MemoryPlanStore {
    pub plan: WeeklyPlan,
}

#[cfg(test)]
impl PlanStore for MemoryPlanStore {
    fn load_plan(&self, _id: Option<Uuid>) -> Result<WeeklyPlan, StoreError> {
        Ok(self.plan.clone())
    }

    fn fetch_phase(
        &self,
        _id: Option<Uuid>,
        phase_number: &str,
    ) -> Result<Option<Phase>, StoreError> {
        Ok(self
            .plan
            .batch_cooking_plan
            .phases
            .iter()
            .find(|p| p.phase_number == phase_number)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::sample::starter_plan;
    use tempfile::tempdir;

    #[test]
    fn test_save_then_load_round_trip() {
        let temp_dir = tempdir().unwrap();
        let store = FilePlanStore::new(temp_dir.path().to_path_buf(), None);

        let plan = starter_plan();
        store.save_plan(&plan).unwrap();

        let loaded = store.load_plan(Some(plan.id)).unwrap();
        assert_eq!(loaded.id, plan.id);
        assert_eq!(
            loaded.batch_cooking_plan.phases.len(),
            plan.batch_cooking_plan.phases.len()
        );
    }

    #[test]
    fn test_load_without_id_uses_only_plan() {
        let temp_dir = tempdir().unwrap();
        let store = FilePlanStore::new(temp_dir.path().to_path_buf(), None);

        let plan = starter_plan();
        store.save_plan(&plan).unwrap();

        let loaded = store.load_plan(None).unwrap();
        assert_eq!(loaded.id, plan.id);
    }

    #[test]
    fn test_default_plan_wins_over_listing() {
        let temp_dir = tempdir().unwrap();

        let first = starter_plan();
        let second = starter_plan();
        let store = FilePlanStore::new(temp_dir.path().to_path_buf(), Some(second.id));
        store.save_plan(&first).unwrap();
        store.save_plan(&second).unwrap();

        let loaded = store.load_plan(None).unwrap();
        assert_eq!(loaded.id, second.id);
    }

    #[test]
    fn test_missing_plan_id() {
        let temp_dir = tempdir().unwrap();
        let store = FilePlanStore::new(temp_dir.path().to_path_buf(), None);

        let err = store.load_plan(Some(Uuid::new_v4())).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn test_empty_directory_has_no_plans() {
        let temp_dir = tempdir().unwrap();
        let store = FilePlanStore::new(temp_dir.path().to_path_buf(), None);

        let err = store.load_plan(None).unwrap_err();
        assert!(matches!(err, StoreError::NoPlans(_)));
    }

    #[test]
    fn test_malformed_document() {
        let temp_dir = tempdir().unwrap();
        let store = FilePlanStore::new(temp_dir.path().to_path_buf(), None);

        let id = Uuid::new_v4();
        std::fs::write(plan_file(temp_dir.path(), id), "not json").unwrap();

        let err = store.load_plan(Some(id)).unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
    }

    #[test]
    fn test_fetch_phase_by_number() {
        let temp_dir = tempdir().unwrap();
        let store = FilePlanStore::new(temp_dir.path().to_path_buf(), None);

        let plan = starter_plan();
        store.save_plan(&plan).unwrap();

        let phase = store.fetch_phase(None, "1").unwrap();
        assert!(phase.is_some());

        // Unknown phase number is absence, not an error
        let missing = store.fetch_phase(None, "99").unwrap();
        assert!(missing.is_none());
    }
}
