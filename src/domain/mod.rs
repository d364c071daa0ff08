pub mod enums;
pub mod plan;
pub mod timer;
pub mod walk;

pub use enums::{Priority, UiMode};
pub use plan::{
    BatchPlan, Equipment, Ingredient, IngredientUsage, ParallelGroup, ParallelTask, Phase,
    Quantity, Recipe, Section, Task, WeeklyPlan,
};
pub use timer::{format_clock, TaskTimer};
pub use walk::{flatten_phase, task_at, task_at_mut, FlatStep, StepOrigin};
