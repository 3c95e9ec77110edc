//! TideCrew binary: terminal setup, runtime wiring, the four startup flows

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use tidecrew::action::Action;
use tidecrew::components::Page;
use tidecrew::effect::handle_effect;
use tidecrew::reducer::reducer;
use tidecrew::state::{AppState, TICK_MS};
use tidecrew::stats::JsonFileStore;
use tidecrew_core::{ActionLog, EffectRuntime, EffectStoreWithMiddleware};

/// Rally your beach cleanup crew from the terminal
#[derive(Parser, Debug)]
#[command(name = "tidecrew")]
#[command(about = "Community beach cleanups: events, crew stats, and the 4-day outlook")]
struct Args {
    /// Crew statistics file (defaults to the platform data dir)
    #[arg(long)]
    stats_file: Option<PathBuf>,

    /// Append diagnostics here; the alternate screen hides stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::INFO.into())
                    .from_env_lossy(),
            )
            .with_writer(Arc::new(file))
            .with_ansi(false)
            .init();
    }

    let stats_store = JsonFileStore::new(
        args.stats_file.unwrap_or_else(JsonFileStore::default_path),
    );

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, stats_store).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    stats_store: JsonFileStore,
) -> io::Result<()> {
    let store = EffectStoreWithMiddleware::new(AppState::default(), reducer, ActionLog);
    let mut runtime = EffectRuntime::from_store(store);

    // Animation clock for counters and spinners
    runtime
        .tasks()
        .every("tick", Duration::from_millis(TICK_MS), || Action::Tick);

    // Startup flows are independent and unordered
    runtime.enqueue(Action::EventsLoad);
    runtime.enqueue(Action::StatsLoad);
    runtime.enqueue(Action::WeatherFetch);

    let ui = RefCell::new(Page::new());

    runtime
        .run(
            terminal,
            |frame, area, state| ui.borrow_mut().render(frame, area, state),
            |event, state| ui.borrow_mut().map_event(event, state),
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, &stats_store, ctx),
        )
        .await
}
