use serde::{Deserialize, Serialize};

/// Urgency of a single cooking step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Short badge shown in front of the instruction text
    pub fn badge(&self, use_emoji: bool) -> &'static str {
        if use_emoji {
            match self {
                Priority::Low => "",
                Priority::Medium => "•",
                Priority::High => "⚠️",
            }
        } else {
            match self {
                Priority::Low => "",
                Priority::Medium => "*",
                Priority::High => "!",
            }
        }
    }

    /// High-priority steps get a highlighted card
    pub fn is_high(&self) -> bool {
        matches!(self, Priority::High)
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Choosing which phase of the plan to cook
    PhasePicker,
    /// Stepping through the selected phase
    Cooking,
}
