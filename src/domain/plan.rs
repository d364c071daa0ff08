use super::enums::Priority;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Quantities arrive from plan documents as either bare numbers or
/// free text ("2 bottes", "500g")
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Number(f64),
    Text(String),
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Number(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            Quantity::Text(s) => write!(f, "{}", s),
        }
    }
}

/// A pantry item referenced by recipes and steps
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: String,
    pub category: String,
    pub name: String,
    pub total_quantity: Quantity,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Ingredient {
    /// Quantity plus unit for display ("500 g", "3")
    pub fn amount(&self) -> String {
        match &self.unit {
            Some(unit) => format!("{} {}", self.total_quantity, unit),
            None => self.total_quantity.to_string(),
        }
    }
}

/// A piece of kitchen equipment the plan calls for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equipment {
    pub name: String,
    pub details: String,
}

/// How much of an ingredient a recipe or step consumes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientUsage {
    pub ingredient_id: String,
    pub proportion: String,
    pub description: String,
}

/// One recipe produced by the batch session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    #[serde(default = "default_scaling_factor")]
    pub scaling_factor: f64,
    #[serde(default)]
    pub ingredients: Vec<IngredientUsage>,
    #[serde(default)]
    pub instructions: Vec<String>,
}

fn default_scaling_factor() -> f64 {
    1.0
}

/// One atomic cooking step
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Clock label like "00:20". Display only; structural position is
    /// what orders steps.
    pub time: String,
    pub instruction: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    /// Countdown length in seconds, when the step is timed
    #[serde(default)]
    pub timer_duration: Option<u32>,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub ingredient_usage: Vec<IngredientUsage>,
}

/// A sequential run of steps within a phase
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub section_name: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// One branch of a parallel group: its own timeline, internally sequential
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParallelTask {
    pub sub_phase: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// Concurrently-running branches inside a phase
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParallelGroup {
    pub group_name: String,
    #[serde(default)]
    pub tasks: Vec<ParallelTask>,
}

/// A named, timed segment of the overall cooking plan.
///
/// A phase carries either `sections` or `parallel_groups`; documents
/// with both populated are tolerated and resolved in favor of
/// `sections` when flattening.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    pub phase_number: String,
    pub phase_name: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub parallel_groups: Vec<ParallelGroup>,
}

impl Phase {
    /// Time span label for headers ("00:15 – 00:45")
    pub fn time_span(&self) -> String {
        format!("{} – {}", self.start_time, self.end_time)
    }
}

/// The ordered phases of one batch-cooking session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchPlan {
    #[serde(default)]
    pub total_duration: String,
    #[serde(default)]
    pub phases: Vec<Phase>,
}

/// A stored weekly plan document.
///
/// Top-level field names keep the store's row shape (snake_case
/// columns with a camelCase JSON payload column), so only
/// `batch_cooking_plan` is renamed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub id: Uuid,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub week_start: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    #[serde(rename = "batchCookingPlan")]
    pub batch_cooking_plan: BatchPlan,
}

impl WeeklyPlan {
    /// Look up an ingredient referenced from a step or recipe
    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }
}
