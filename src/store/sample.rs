use crate::domain::{
    BatchPlan, Ingredient, IngredientUsage, ParallelGroup, ParallelTask, Phase, Priority,
    Quantity, Section, Task, WeeklyPlan,
};
use uuid::Uuid;

/// Starter plan written by `sous init` so the TUI is drivable before
/// any real plan document lands in the directory. The prep phase is
/// the demo content the original service ships; the second phase adds
/// a parallel-group timeline with timed steps.
pub fn starter_plan() -> WeeklyPlan {
    let week_start = chrono::Local::now().date_naive();

    WeeklyPlan {
        id: Uuid::new_v4(),
        created_at: chrono::Local::now().to_rfc3339(),
        week_start: week_start.format("%Y-%m-%d").to_string(),
        ingredients: vec![
            Ingredient {
                id: "ing-oignons".to_string(),
                category: "Légumes".to_string(),
                name: "Oignons".to_string(),
                total_quantity: Quantity::Number(3.0),
                unit: None,
                notes: Some("≈150g chacun".to_string()),
            },
            Ingredient {
                id: "ing-ail".to_string(),
                category: "Légumes".to_string(),
                name: "Ail".to_string(),
                total_quantity: Quantity::Text("5 gousses".to_string()),
                unit: None,
                notes: None,
            },
            Ingredient {
                id: "ing-legumes-four".to_string(),
                category: "Légumes".to_string(),
                name: "Légumes racines".to_string(),
                total_quantity: Quantity::Number(800.0),
                unit: Some("g".to_string()),
                notes: None,
            },
        ],
        equipment: Vec::new(),
        recipes: Vec::new(),
        batch_cooking_plan: BatchPlan {
            total_duration: "1h30".to_string(),
            phases: vec![prep_phase(), cooking_phase()],
        },
    }
}

fn prep_phase() -> Phase {
    Phase {
        phase_number: "1".to_string(),
        phase_name: "Découpage et Préparation des Ingrédients".to_string(),
        start_time: "00:15".to_string(),
        end_time: "00:45".to_string(),
        sections: vec![Section {
            section_name: "Découpes Précises".to_string(),
            tasks: vec![
                Task {
                    time: "00:20".to_string(),
                    instruction: "Oignons: Éplucher et émincer 3 oignons (≈150g chacun, \
                                  2mm d'épaisseur) et répartir (1 pour chaque recette)."
                        .to_string(),
                    completed: false,
                    priority: Priority::High,
                    timer_duration: None,
                    media_url: Some("https://example.com/demo/oignons.mp4".to_string()),
                    ingredient_usage: vec![IngredientUsage {
                        ingredient_id: "ing-oignons".to_string(),
                        proportion: "3".to_string(),
                        description: "1 pour chaque recette".to_string(),
                    }],
                },
                Task {
                    time: "00:23".to_string(),
                    instruction: "Ail: Éplucher 5 gousses et hacher finement (≈2mm)."
                        .to_string(),
                    completed: false,
                    priority: Priority::Medium,
                    timer_duration: None,
                    media_url: None,
                    ingredient_usage: vec![IngredientUsage {
                        ingredient_id: "ing-ail".to_string(),
                        proportion: "5 gousses".to_string(),
                        description: "hachées finement".to_string(),
                    }],
                },
            ],
        }],
        parallel_groups: Vec::new(),
    }
}

fn cooking_phase() -> Phase {
    Phase {
        phase_number: "2".to_string(),
        phase_name: "Cuissons Parallèles".to_string(),
        start_time: "00:45".to_string(),
        end_time: "01:30".to_string(),
        sections: Vec::new(),
        parallel_groups: vec![ParallelGroup {
            group_name: "Feux et Four".to_string(),
            tasks: vec![
                ParallelTask {
                    sub_phase: "Four".to_string(),
                    start_time: "00:45".to_string(),
                    end_time: "01:25".to_string(),
                    tasks: vec![
                        Task {
                            time: "00:45".to_string(),
                            instruction: "Enfourner les légumes racines à 200°C."
                                .to_string(),
                            completed: false,
                            priority: Priority::High,
                            timer_duration: Some(2400),
                            media_url: None,
                            ingredient_usage: vec![IngredientUsage {
                                ingredient_id: "ing-legumes-four".to_string(),
                                proportion: "800g".to_string(),
                                description: "en morceaux réguliers".to_string(),
                            }],
                        },
                        Task {
                            time: "01:25".to_string(),
                            instruction: "Sortir la plaque et laisser tiédir.".to_string(),
                            completed: false,
                            priority: Priority::Medium,
                            timer_duration: None,
                            media_url: None,
                            ingredient_usage: Vec::new(),
                        },
                    ],
                },
                ParallelTask {
                    sub_phase: "Plaque".to_string(),
                    start_time: "00:45".to_string(),
                    end_time: "01:05".to_string(),
                    tasks: vec![Task {
                        time: "00:45".to_string(),
                        instruction: "Faire revenir les oignons émincés à feu doux."
                            .to_string(),
                        completed: false,
                        priority: Priority::Medium,
                        timer_duration: Some(900),
                        media_url: None,
                        ingredient_usage: Vec::new(),
                    }],
                },
            ],
        }],
    }
}
