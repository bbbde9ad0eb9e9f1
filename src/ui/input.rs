//! # Key Handling
//!
//! Maps crossterm key events onto [`App`] state changes. Kept apart from the
//! event loop in `main.rs` so every binding can be exercised in tests.
//!
//! ## Global
//! - `Ctrl+C` - Quit
//! - `q` / `Q` - Quit (not while a number field has focus)
//! - `F2` - Cycle colour theme
//!
//! ## Onboarding
//! - `↑` / `↓` / `Tab` / `Shift+Tab` - Move between fields
//! - `←` / `→` - Change the selected option
//! - `Space` - Toggle consent / next option
//! - `0-9`, `-`, `Backspace` - Edit numbers
//! - `Enter` - Next step
//! - `Esc` - Previous step
//!
//! ## Home
//! - `Enter` / `s` - Start the session from the top (while not running)
//! - `p` - Pause
//! - `n` - Next exercise
//! - `c` - Open the catalog
//!
//! ## Catalog
//! - `←` / `→` / `Tab` / `h` / `l` - Switch tab, `1-4` jump to a tab
//! - `↑` / `↓` / `j` / `k` - Move selection
//! - `Esc` / `b` / `Backspace` - Back to home

use super::app::{App, Route, Screen};
use super::catalog::CatalogScreen;
use super::home::HomeScreen;
use crate::onboarding::{Wizard, WizardOutcome};
use crate::profile::UserProfile;
use crate::workout::CategoryFilter;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the event loop needs to know after a key was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    /// The theme changed and should be persisted.
    ThemeChanged,
    Ignored,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> KeyOutcome {
    if key.kind != KeyEventKind::Press {
        return KeyOutcome::Ignored;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return KeyOutcome::Handled;
    }

    match key.code {
        KeyCode::F(2) => {
            app.cycle_theme();
            return KeyOutcome::ThemeChanged;
        }
        KeyCode::Char('q') | KeyCode::Char('Q') if !is_typing(app) => {
            app.should_quit = true;
            return KeyOutcome::Handled;
        }
        _ => {}
    }

    let mut completed: Option<UserProfile> = None;
    let mut route: Option<Route> = None;

    let outcome = match &mut app.screen {
        Screen::Onboarding(wizard) => handle_onboarding_key(wizard, key, &mut completed),
        Screen::Home(home) => handle_home_key(home, key, &mut route),
        Screen::Catalog(catalog) => handle_catalog_key(catalog, key, &mut route),
    };

    if let Some(profile) = completed {
        app.complete_onboarding(profile);
    }
    if let Some(route) = route {
        app.navigate(route);
    }
    if outcome == KeyOutcome::Handled {
        app.clear_status();
    }

    outcome
}

/// A numeric onboarding field has focus, so letters belong to the input.
fn is_typing(app: &App) -> bool {
    matches!(&app.screen, Screen::Onboarding(wizard) if wizard.focused_field().is_numeric())
}

fn handle_onboarding_key(
    wizard: &mut Wizard,
    key: KeyEvent,
    completed: &mut Option<UserProfile>,
) -> KeyOutcome {
    match key.code {
        KeyCode::Enter => match wizard.next() {
            WizardOutcome::Completed(profile) => {
                *completed = Some(profile);
                KeyOutcome::Handled
            }
            WizardOutcome::Advanced(_) => KeyOutcome::Handled,
            WizardOutcome::Blocked => KeyOutcome::Ignored,
        },
        KeyCode::Esc => {
            wizard.back();
            KeyOutcome::Handled
        }
        KeyCode::Down | KeyCode::Tab => {
            wizard.focus_next();
            KeyOutcome::Handled
        }
        KeyCode::Up | KeyCode::BackTab => {
            wizard.focus_prev();
            KeyOutcome::Handled
        }
        KeyCode::Right => {
            wizard.cycle_option(true);
            KeyOutcome::Handled
        }
        KeyCode::Left => {
            wizard.cycle_option(false);
            KeyOutcome::Handled
        }
        KeyCode::Char(' ') => {
            wizard.toggle();
            KeyOutcome::Handled
        }
        KeyCode::Backspace => {
            wizard.pop_char();
            KeyOutcome::Handled
        }
        KeyCode::Char(c) => {
            if wizard.push_char(c) {
                KeyOutcome::Handled
            } else {
                KeyOutcome::Ignored
            }
        }
        _ => KeyOutcome::Ignored,
    }
}

fn handle_home_key(home: &mut HomeScreen, key: KeyEvent, route: &mut Option<Route>) -> KeyOutcome {
    let active = home.session().is_active();
    match key.code {
        KeyCode::Enter | KeyCode::Char('s') if !active => {
            home.start_session();
            KeyOutcome::Handled
        }
        KeyCode::Char('p') if active => {
            home.pause_session();
            KeyOutcome::Handled
        }
        KeyCode::Char('n') if active => {
            home.next_exercise();
            KeyOutcome::Handled
        }
        KeyCode::Char('c') => {
            *route = Some(Route::Catalog);
            KeyOutcome::Handled
        }
        _ => KeyOutcome::Ignored,
    }
}

fn handle_catalog_key(
    catalog: &mut CatalogScreen,
    key: KeyEvent,
    route: &mut Option<Route>,
) -> KeyOutcome {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
            *route = Some(Route::Home);
        }
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => catalog.next_tab(),
        KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') => catalog.prev_tab(),
        KeyCode::Down | KeyCode::Char('j') => catalog.next(),
        KeyCode::Up | KeyCode::Char('k') => catalog.previous(),
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            catalog.select_tab(CategoryFilter::TABS[index]);
        }
        _ => return KeyOutcome::Ignored,
    }
    KeyOutcome::Handled
}
