//! # FitLazy CLI Entry Point
//!
//! Terminal front end for the FitLazy fitness companion.
//!
//! ## Usage
//!
//! ```bash
//! # Start with the saved (or default) theme
//! fitlazy
//!
//! # Start with a specific theme
//! fitlazy --theme Nord
//!
//! # List the built-in themes
//! fitlazy --list-themes
//!
//! # Debug mode - print the daily plan and the catalog and exit
//! fitlazy --debug
//! ```
//!
//! ## Architecture
//!
//! 1. **Onboarding**: a four-step wizard collects the user profile
//! 2. **Home**: today's plan with a five-minute session countdown
//! 3. **Catalog**: the workout list with time-of-day tabs
//!
//! The event loop polls crossterm for input and, between polls, drains the
//! session tick channel fed by the Tokio ticker task. See [`fitlazy::ui::input`]
//! for the key bindings.

use fitlazy::ui::config::Config;
use fitlazy::ui::input::{self, KeyOutcome};
use fitlazy::ui::theme::Theme;
use fitlazy::ui::{self, App};
use fitlazy::workout::{self, CategoryFilter, SessionTick, TickScheduler, WorkoutPlan};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fmt::Write as _;
use std::io;
use std::panic;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// How long to wait for input before re-rendering.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// FitLazy - five lazy minutes of exercise a day, in your terminal
#[derive(Parser, Debug)]
#[command(name = "fitlazy")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A terminal fitness companion", long_about = None)]
struct Args {
    /// Colour theme to use for this run (see --list-themes)
    #[arg(short, long, value_name = "NAME")]
    theme: Option<String>,

    /// Print the built-in theme names and exit
    #[arg(long)]
    list_themes: bool,

    /// Print the daily plan and the workout catalog and exit
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_application(args).await;

    let _ = panic::take_hook();

    result
}

async fn run_application(args: Args) -> Result<()> {
    if args.list_themes {
        for name in Theme::names() {
            println!("{}", name);
        }
        return Ok(());
    }

    if args.debug {
        print!("{}", debug_report());
        return Ok(());
    }

    let (mut config, load_error) = Config::load();
    if let Some(e) = load_error {
        eprintln!("Warning: Could not load config, using defaults: {:#}", e);
    }

    let theme = config.resolve_theme(args.theme.as_deref())?.clone();
    config.theme = theme.name.to_string();

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel();
    let mut app = App::new(theme, TickScheduler::new(tick_tx));

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(
        &mut terminal,
        &mut app,
        &mut event_reader,
        &mut tick_rx,
        &mut config,
    )
    .await;

    // Unmount the current screen so no ticker outlives the UI
    drop(app);

    let cleanup_result = cleanup_terminal(&mut terminal);

    // Return the first error that occurred, or Ok if both succeeded
    run_result?;
    cleanup_result?;

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
    ticks: &mut UnboundedReceiver<SessionTick>,
    config: &mut Config,
) -> Result<()> {
    loop {
        drain_ticks(app, ticks);

        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        let event = match event_reader.read_event(POLL_TIMEOUT)? {
            Some(e) => e,
            None => continue,
        };

        if let Event::Key(key) = event {
            if input::handle_key(app, key) == KeyOutcome::ThemeChanged {
                config.theme = app.theme.name.to_string();
                if let Err(e) = config.save() {
                    app.set_status(format!("Warning: Failed to save theme: {:#}", e));
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Apply every tick queued since the last frame.
fn drain_ticks(app: &mut App, ticks: &mut UnboundedReceiver<SessionTick>) {
    while let Ok(tick) = ticks.try_recv() {
        app.on_tick(tick);
    }
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

/// Plain-text dump of the static data, for `--debug`.
fn debug_report() -> String {
    let mut out = String::new();
    let plan = WorkoutPlan::daily();

    let _ = writeln!(out, "=== Daily Plan ===");
    let _ = writeln!(
        out,
        "  {} ({} min, {} s session)",
        plan.name,
        plan.duration_minutes(),
        workout::SESSION_LENGTH_SECS
    );
    for (i, exercise) in plan.exercises.iter().enumerate() {
        let _ = writeln!(
            out,
            "    {}. {} - {} s",
            i + 1,
            exercise.name,
            exercise.duration_secs
        );
    }

    let _ = writeln!(out, "\n=== Catalog ===");
    for tab in CategoryFilter::TABS {
        let entries = workout::filter_catalog(workout::catalog(), tab);
        let _ = writeln!(out, "  [{}] {} entries", tab.label(), entries.len());
        if tab == CategoryFilter::All {
            for entry in entries {
                let _ = writeln!(
                    out,
                    "    #{} {} - {} min, {} exercises, {}{}",
                    entry.id,
                    entry.name,
                    entry.duration_minutes,
                    entry.exercise_count,
                    entry.difficulty.label(),
                    if entry.is_premium { ", premium" } else { "" }
                );
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use fitlazy::ui::app::Screen;
    use std::collections::VecDeque;

    /// Mock event reader for testing that returns a predetermined sequence of events
    struct MockEventReader {
        events: VecDeque<Event>,
    }

    impl MockEventReader {
        fn new(events: Vec<Event>) -> Self {
            Self {
                events: VecDeque::from(events),
            }
        }
    }

    impl EventReader for MockEventReader {
        fn read_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
            Ok(self.events.pop_front())
        }
    }

    fn key_event(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    #[test]
    fn test_mock_event_reader() {
        let mut reader = MockEventReader::new(vec![
            key_event(KeyCode::Enter),
            key_event(KeyCode::Char('q')),
        ]);

        assert!(matches!(
            reader.read_event(Duration::from_millis(10)).unwrap(),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Enter,
                ..
            }))
        ));
        assert!(matches!(
            reader.read_event(Duration::from_millis(10)).unwrap(),
            Some(Event::Key(KeyEvent {
                code: KeyCode::Char('q'),
                ..
            }))
        ));
        assert!(reader
            .read_event(Duration::from_millis(10))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_crossterm_event_reader_type() {
        let _reader: Box<dyn EventReader> = Box::new(CrosstermEventReader);
    }

    #[test]
    fn test_args_parsing() {
        let args = Args::try_parse_from(["fitlazy", "--theme", "Nord"]).unwrap();
        assert_eq!(args.theme.as_deref(), Some("Nord"));
        assert!(!args.debug);

        let args = Args::try_parse_from(["fitlazy", "--debug"]).unwrap();
        assert!(args.debug);
        assert_eq!(args.theme, None);
    }

    #[tokio::test]
    async fn test_run_application_unknown_theme() {
        let args = Args {
            theme: Some("Vaporwave".to_string()),
            list_themes: false,
            debug: false,
        };

        let result = run_application(args).await;
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Unknown theme"));
    }

    #[tokio::test]
    async fn test_run_application_debug_exits_cleanly() {
        let args = Args {
            theme: None,
            list_themes: false,
            debug: true,
        };
        assert!(run_application(args).await.is_ok());
    }

    #[test]
    fn test_debug_report_lists_plan_and_catalog() {
        let report = debug_report();
        assert!(report.contains("Утренняя разминка (5 min, 300 s session)"));
        assert!(report.contains("5. Растяжка - 60 s"));
        assert!(report.contains("[Утро] 2 entries"));
        assert!(report.contains("#6 Расслабление перед сном"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drain_ticks_reaches_home() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut app = App::new(Theme::default_theme().clone(), TickScheduler::new(tx));
        if let Screen::Onboarding(wizard) = &mut app.screen {
            let d = wizard.draft_mut();
            d.goal = Some(fitlazy::profile::Goal::Activity);
            d.gender = Some(fitlazy::profile::Gender::Male);
            d.age = "35".to_string();
            d.height = "180".to_string();
            d.weight = "80".to_string();
            d.activity_level = Some(fitlazy::profile::ActivityLevel::Low);
            d.workout_time = Some(fitlazy::profile::WorkoutTime::Five);
            d.agreed_to_disclaimer = true;
        }
        // Four steps, then start the session
        for _ in 0..5 {
            input::handle_key(
                &mut app,
                KeyEvent::new(KeyCode::Enter, KeyModifiers::empty()),
            );
        }

        tokio::time::sleep(Duration::from_millis(2500)).await;
        drain_ticks(&mut app, &mut rx);

        match &app.screen {
            Screen::Home(home) => assert_eq!(home.session().time_left(), 298),
            _ => panic!("expected home screen"),
        }
    }
}
