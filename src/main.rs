mod app;
mod domain;
mod input;
mod session;
mod store;
mod ticker;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{flatten_phase, WeeklyPlan};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use store::{
    ensure_sous_dir, init_local_sous, load_settings, save_settings, settings_file, starter_plan,
    FilePlanStore, PlanStore, Settings, StoreError,
};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "sous")]
#[command(about = "A terminal companion for batch-cooking sessions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .sous directory seeded with a starter plan
    Init,
    /// Print a markdown overview of a stored plan
    Overview {
        /// Plan id to summarize. Defaults to the configured or only plan.
        #[arg(short, long)]
        plan: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            // Initialize local .sous directory with a starter plan
            let sous_dir = init_local_sous()?;

            let plan = starter_plan();
            let store = FilePlanStore::new(sous_dir.clone(), None);
            let plan_path = store.save_plan(&plan)?;

            let settings = Settings {
                default_plan: Some(plan.id),
                ..Settings::default()
            };
            save_settings(settings_file(&sous_dir), &settings)?;

            println!("Initialized sous directory: {}", sous_dir.display());
            println!("Starter plan written: {}", plan_path.display());
            println!();
            println!("Run 'sous' to start cooking.");
            Ok(())
        }
        Some(Commands::Overview { plan }) => {
            let plan_id = plan
                .map(|s| {
                    Uuid::parse_str(&s)
                        .map_err(|e| anyhow::anyhow!("Invalid plan id '{}': {}", s, e))
                })
                .transpose()?;

            let sous_dir = ensure_sous_dir()?;
            let settings = load_settings(settings_file(&sous_dir)).unwrap_or_default();
            let store = FilePlanStore::new(sous_dir, settings.default_plan);

            let plan = store.load_plan(plan_id)?;
            print_overview(&plan);
            Ok(())
        }
        None => {
            // Run the normal TUI application
            run_tui()
        }
    }
}

/// Markdown plan summary on stdout
fn print_overview(plan: &WeeklyPlan) {
    println!("# Batch-cooking plan — week of {}", plan.week_start);
    println!();

    let batch = &plan.batch_cooking_plan;
    if !batch.total_duration.is_empty() {
        println!("Total duration: {}", batch.total_duration);
        println!();
    }

    println!("## Phases");
    println!();
    for phase in &batch.phases {
        let steps = flatten_phase(phase).len();
        println!(
            "- {}. {} ({}) — {} step{}",
            phase.phase_number,
            phase.phase_name,
            phase.time_span(),
            steps,
            if steps == 1 { "" } else { "s" }
        );
    }

    if !plan.recipes.is_empty() {
        println!();
        println!("## Recipes");
        println!();
        for recipe in &plan.recipes {
            println!("- {} (×{})", recipe.name, recipe.scaling_factor);
        }
    }

    if !plan.ingredients.is_empty() {
        println!();
        println!("## Ingredients");
        println!();
        for ingredient in &plan.ingredients {
            match &ingredient.notes {
                Some(notes) => println!(
                    "- {} — {} ({})",
                    ingredient.name,
                    ingredient.amount(),
                    notes
                ),
                None => println!("- {} — {}", ingredient.name, ingredient.amount()),
            }
        }
    }

    if !plan.equipment.is_empty() {
        println!();
        println!("## Equipment");
        println!();
        for equipment in &plan.equipment {
            println!("- {} — {}", equipment.name, equipment.details);
        }
    }
}

fn run_tui() -> Result<()> {
    // Ensure sous directory exists
    let sous_dir = ensure_sous_dir()?;

    // Show which directory we're using
    eprintln!("Using sous directory: {}", sous_dir.display());

    let settings = load_settings(settings_file(&sous_dir)).unwrap_or_default();
    let store = FilePlanStore::new(sous_dir, settings.default_plan);

    let plan = match store.load_plan(None) {
        Ok(plan) => plan,
        Err(StoreError::NoPlans(dir)) => {
            eprintln!("No plan documents in {}.", dir.display());
            eprintln!("Run 'sous init' to create a starter plan.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    // Create app state
    let mut app = AppState::new(plan, Box::new(store), &settings);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        // Drive the countdown
        app.tick();
    }
}
