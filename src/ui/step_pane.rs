use crate::app::AppState;
use crate::domain::{format_clock, Phase, StepOrigin, TaskTimer};
use crate::ui::styles::{
    border_style, completed_style, default_style, hint_style, ingredient_style, media_style,
    priority_style, time_label_style, timer_done_style, timer_paused_style, timer_style,
    title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the cooking-mode step card
pub fn render_step_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Cooking ", title_style()));

    let Some(task) = app.session.current_task() else {
        let message = if app.session.step_count() == 0 {
            "Nothing to cook in this phase."
        } else {
            "All steps done — ← to review, Esc for the next phase."
        };
        let lines = vec![
            Line::from(Span::styled(message, hint_style())),
            Line::raw(""),
            nav_line(app.session.cursor_state()),
        ];
        let empty = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
        f.render_widget(empty, area);
        return;
    };

    let mut lines = Vec::new();

    // Position within the walk, with the section/branch it came from
    let mut position_spans = Vec::new();
    if let Some(step) = app.session.current_step() {
        position_spans.push(Span::styled(
            format!("Step {} of {}", step.index + 1, app.session.step_count()),
            title_style(),
        ));
        if let Some(context) = app
            .session
            .phase()
            .and_then(|phase| context_label(phase, step.origin))
        {
            position_spans.push(Span::raw("  ·  "));
            position_spans.push(Span::styled(context, hint_style()));
        }
    }
    lines.push(Line::from(position_spans));
    lines.push(Line::raw(""));

    // Instruction, led by the clock label and priority badge
    let mut instruction_spans = vec![
        Span::styled(format!("{} ", task.time), time_label_style()),
    ];
    let badge = task.priority.badge(app.use_emoji);
    if !badge.is_empty() {
        instruction_spans.push(Span::styled(format!("{} ", badge), priority_style()));
    }
    let instruction_style = if task.completed {
        completed_style()
    } else if task.priority.is_high() {
        priority_style()
    } else {
        default_style()
    };
    instruction_spans.push(Span::styled(task.instruction.clone(), instruction_style));
    lines.push(Line::from(instruction_spans));

    if task.completed {
        lines.push(Line::from(Span::styled("✓ done", title_style())));
    }

    // Ingredients this step consumes, resolved against the plan
    if !task.ingredient_usage.is_empty() {
        lines.push(Line::raw(""));
        for usage in &task.ingredient_usage {
            let name = app
                .plan
                .ingredient(&usage.ingredient_id)
                .map(|i| i.name.clone())
                .unwrap_or_else(|| usage.ingredient_id.clone());
            lines.push(Line::from(vec![
                Span::styled(format!("  {} ", name), ingredient_style()),
                Span::raw(format!("— {} ({})", usage.proportion, usage.description)),
            ]));
        }
    }

    // Countdown line for timed steps
    if let Some(duration) = task.timer_duration {
        lines.push(Line::raw(""));
        lines.push(timer_line(app.session.timer(), duration));
    }

    if let Some(url) = &task.media_url {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            format!("📹 View demonstration: {}", url),
            media_style(),
        )));
    }

    lines.push(Line::raw(""));
    lines.push(nav_line(app.session.cursor_state()));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

/// Previous/Next affordances, dimmed exactly when the cursor move
/// would be a no-op for the display
fn nav_line(state: crate::session::CursorState) -> Line<'static> {
    let prev_style = if state.at_start {
        hint_style()
    } else {
        default_style()
    };
    let next_style = if state.at_end {
        hint_style()
    } else {
        default_style()
    };
    Line::from(vec![
        Span::styled("← Previous", prev_style),
        Span::raw("    "),
        Span::styled("Next →", next_style),
    ])
}

/// The section or group/branch a step was flattened out of
fn context_label(phase: &Phase, origin: StepOrigin) -> Option<String> {
    match origin {
        StepOrigin::Section { section, .. } => {
            phase.sections.get(section).map(|s| s.section_name.clone())
        }
        StepOrigin::Parallel { group, branch, .. } => {
            let g = phase.parallel_groups.get(group)?;
            let b = g.tasks.get(branch)?;
            Some(format!("{} — {}", g.group_name, b.sub_phase))
        }
    }
}

/// One line of countdown state. Before any countdown exists the full
/// duration is shown; after it exists the remaining time is shown,
/// frozen at 0:00 when it runs out.
fn timer_line(timer: TaskTimer, duration: u32) -> Line<'static> {
    match timer {
        TaskTimer::Idle => Line::from(vec![
            Span::styled(format!("⏲ {} ", format_clock(duration)), timer_style()),
            Span::styled("Space to start", hint_style()),
        ]),
        TaskTimer::Running { remaining: 0 } => Line::from(vec![
            Span::styled("⏲ 0:00 ", timer_done_style()),
            Span::styled("time's up", timer_done_style()),
        ]),
        TaskTimer::Running { remaining } => Line::from(vec![
            Span::styled(format!("⏲ {} ", format_clock(remaining)), timer_style()),
            Span::styled("Space to pause", hint_style()),
        ]),
        TaskTimer::Paused { remaining } => Line::from(vec![
            Span::styled(
                format!("⏲ {} ", format_clock(remaining)),
                timer_paused_style(),
            ),
            Span::styled("paused — Space to resume", hint_style()),
        ]),
    }
}
