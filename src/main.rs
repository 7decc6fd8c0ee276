mod app;
mod domain;
mod input;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{Task, TaskStatus};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(about = "A terminal task table with date ranges, subtasks and live search", long_about = None)]
struct Cli {
    /// Use plain text instead of emoji badges
    #[arg(long)]
    ascii: bool,

    /// Preload a few demonstration tasks
    #[arg(long)]
    sample: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let tasks = if cli.sample { sample_tasks() } else { Vec::new() };
    let mut app = AppState::new(tasks, !cli.ascii);

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
    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Block until the next event; there are no timers to service
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
}

/// Demonstration tasks spanning the three statuses, dated around today
fn sample_tasks() -> Vec<Task> {
    let today = chrono::Local::now().date_naive();
    vec![
        Task::new(
            "Draft quarterly report".to_string(),
            vec!["outline".to_string(), "write".to_string()],
            today - chrono::Duration::days(3),
            today + chrono::Duration::days(2),
            TaskStatus::Complete,
        ),
        Task::new(
            "Plan team offsite".to_string(),
            vec!["venue".to_string()],
            today + chrono::Duration::days(7),
            today + chrono::Duration::days(9),
            TaskStatus::InProgress,
        ),
        Task::new(
            "Renew certificates".to_string(),
            Vec::new(),
            today - chrono::Duration::days(10),
            today - chrono::Duration::days(5),
            TaskStatus::DuePassed,
        ),
    ]
}
