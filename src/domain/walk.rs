use super::plan::{Phase, Task};

/// Where a flattened step lives inside its phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOrigin {
    /// Reached through `sections`
    Section { section: usize, task: usize },
    /// Reached through `parallel_groups`
    Parallel { group: usize, branch: usize, task: usize },
}

/// A row in the flattened step walk
#[derive(Debug, Clone, Copy)]
pub struct FlatStep {
    /// Index in the flattened walk
    pub index: usize,
    /// Position of the underlying task in the phase
    pub origin: StepOrigin,
}

/// Flatten a phase into a linear, randomly-addressable walk.
///
/// Sections are visited in section order, each task in order. A phase
/// without sections is walked through its parallel groups instead:
/// group order, then branch order, then task order. When a document
/// carries both, sections win. The result depends only on the phase
/// structure, so repeated calls on an unchanged phase produce the
/// same order.
pub fn flatten_phase(phase: &Phase) -> Vec<FlatStep> {
    let mut steps = Vec::new();
    let mut flat_index = 0;

    if !phase.sections.is_empty() {
        for (section_idx, section) in phase.sections.iter().enumerate() {
            for (task_idx, _task) in section.tasks.iter().enumerate() {
                steps.push(FlatStep {
                    index: flat_index,
                    origin: StepOrigin::Section {
                        section: section_idx,
                        task: task_idx,
                    },
                });
                flat_index += 1;
            }
        }
        return steps;
    }

    for (group_idx, group) in phase.parallel_groups.iter().enumerate() {
        for (branch_idx, branch) in group.tasks.iter().enumerate() {
            for (task_idx, _task) in branch.tasks.iter().enumerate() {
                steps.push(FlatStep {
                    index: flat_index,
                    origin: StepOrigin::Parallel {
                        group: group_idx,
                        branch: branch_idx,
                        task: task_idx,
                    },
                });
                flat_index += 1;
            }
        }
    }

    steps
}

/// Resolve a step origin back to its task
pub fn task_at(phase: &Phase, origin: StepOrigin) -> Option<&Task> {
    match origin {
        StepOrigin::Section { section, task } => {
            phase.sections.get(section)?.tasks.get(task)
        }
        StepOrigin::Parallel { group, branch, task } => phase
            .parallel_groups
            .get(group)?
            .tasks
            .get(branch)?
            .tasks
            .get(task),
    }
}

/// Mutable resolution, used to flip completion through the flat view
pub fn task_at_mut(phase: &mut Phase, origin: StepOrigin) -> Option<&mut Task> {
    match origin {
        StepOrigin::Section { section, task } => {
            phase.sections.get_mut(section)?.tasks.get_mut(task)
        }
        StepOrigin::Parallel { group, branch, task } => phase
            .parallel_groups
            .get_mut(group)?
            .tasks
            .get_mut(branch)?
            .tasks
            .get_mut(task),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plan::{ParallelGroup, ParallelTask, Section};

    fn step(instruction: &str) -> Task {
        Task {
            time: "00:00".to_string(),
            instruction: instruction.to_string(),
            completed: false,
            priority: Default::default(),
            timer_duration: None,
            media_url: None,
            ingredient_usage: Vec::new(),
        }
    }

    fn empty_phase() -> Phase {
        Phase {
            phase_number: "1".to_string(),
            phase_name: "Test".to_string(),
            start_time: "00:00".to_string(),
            end_time: "00:30".to_string(),
            sections: Vec::new(),
            parallel_groups: Vec::new(),
        }
    }

    fn sectioned_phase() -> Phase {
        let mut phase = empty_phase();
        phase.sections = vec![
            Section {
                section_name: "A".to_string(),
                tasks: vec![step("a1"), step("a2")],
            },
            Section {
                section_name: "B".to_string(),
                tasks: vec![step("b1")],
            },
        ];
        phase
    }

    fn parallel_phase() -> Phase {
        let mut phase = empty_phase();
        phase.parallel_groups = vec![ParallelGroup {
            group_name: "G".to_string(),
            tasks: vec![
                ParallelTask {
                    sub_phase: "Four".to_string(),
                    start_time: "00:00".to_string(),
                    end_time: "00:20".to_string(),
                    tasks: vec![step("oven1"), step("oven2")],
                },
                ParallelTask {
                    sub_phase: "Plaque".to_string(),
                    start_time: "00:00".to_string(),
                    end_time: "00:15".to_string(),
                    tasks: vec![step("hob1")],
                },
            ],
        }];
        phase
    }

    #[test]
    fn test_flatten_sections_in_order() {
        let phase = sectioned_phase();
        let steps = flatten_phase(&phase);

        assert_eq!(steps.len(), 3);
        assert_eq!(
            steps[0].origin,
            StepOrigin::Section { section: 0, task: 0 }
        );
        assert_eq!(
            steps[1].origin,
            StepOrigin::Section { section: 0, task: 1 }
        );
        assert_eq!(
            steps[2].origin,
            StepOrigin::Section { section: 1, task: 0 }
        );
        for (i, s) in steps.iter().enumerate() {
            assert_eq!(s.index, i);
        }
    }

    #[test]
    fn test_flatten_parallel_groups_in_order() {
        let phase = parallel_phase();
        let steps = flatten_phase(&phase);

        assert_eq!(steps.len(), 3);
        assert_eq!(
            steps[0].origin,
            StepOrigin::Parallel { group: 0, branch: 0, task: 0 }
        );
        assert_eq!(
            steps[1].origin,
            StepOrigin::Parallel { group: 0, branch: 0, task: 1 }
        );
        assert_eq!(
            steps[2].origin,
            StepOrigin::Parallel { group: 0, branch: 1, task: 0 }
        );
    }

    #[test]
    fn test_flatten_empty_phase() {
        assert!(flatten_phase(&empty_phase()).is_empty());
    }

    #[test]
    fn test_sections_win_when_both_present() {
        let mut phase = sectioned_phase();
        phase.parallel_groups = parallel_phase().parallel_groups;

        let steps = flatten_phase(&phase);
        assert_eq!(steps.len(), 3);
        assert!(steps
            .iter()
            .all(|s| matches!(s.origin, StepOrigin::Section { .. })));
    }

    #[test]
    fn test_flatten_is_stable() {
        let phase = sectioned_phase();
        let first = flatten_phase(&phase);
        let second = flatten_phase(&phase);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.origin, b.origin);
        }
    }

    #[test]
    fn test_task_resolution() {
        let phase = parallel_phase();
        let steps = flatten_phase(&phase);

        let task = task_at(&phase, steps[2].origin).unwrap();
        assert_eq!(task.instruction, "hob1");

        let missing = task_at(
            &phase,
            StepOrigin::Parallel { group: 5, branch: 0, task: 0 },
        );
        assert!(missing.is_none());
    }

    #[test]
    fn test_mutable_resolution_flips_completion() {
        let mut phase = sectioned_phase();
        let steps = flatten_phase(&phase);

        let task = task_at_mut(&mut phase, steps[1].origin).unwrap();
        task.completed = true;

        assert!(phase.sections[0].tasks[1].completed);
        assert!(!phase.sections[0].tasks[0].completed);
    }
}
