pub mod files;
pub mod plans;
pub mod sample;
pub mod settings;

pub use files::{
    atomic_write, ensure_sous_dir, get_sous_dir, init_local_sous, list_plan_files, plan_file,
    settings_file,
};
pub use plans::{FilePlanStore, PlanStore, StoreError};
#[cfg(test)]
pub use plans::MemoryPlanStore;
pub use sample::starter_plan;
pub use settings::{load_settings, save_settings, Settings};
