//! Application state tests
//!
//! Tests for the router: onboarding completion, navigation between home and
//! catalog, and what survives (or does not) a screen change.

use fitlazy::onboarding::WizardOutcome;
use fitlazy::profile::{ActivityLevel, Gender, Goal, UserProfile, WorkoutTime};
use fitlazy::ui::app::{Route, Screen};
use fitlazy::ui::theme::Theme;
use fitlazy::ui::App;
use fitlazy::workout::{SessionTick, TickOutcome, TickScheduler};
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Helper to create a test app wired to a tick channel
fn create_test_app() -> (App, UnboundedReceiver<SessionTick>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let app = App::new(Theme::default_theme().clone(), TickScheduler::new(tx));
    (app, rx)
}

fn sample_profile() -> UserProfile {
    UserProfile {
        goal: Goal::Lose,
        gender: Gender::Female,
        age: "30".to_string(),
        height: "165".to_string(),
        weight: "60".to_string(),
        activity_level: ActivityLevel::Medium,
        workout_time: WorkoutTime::Ten,
        agreed_to_disclaimer: true,
    }
}

#[test]
fn test_starts_on_onboarding() {
    let (app, _rx) = create_test_app();
    assert!(matches!(app.screen, Screen::Onboarding(_)));
    assert_eq!(app.screen.route(), None);
    assert!(app.profile.is_none());
}

#[test]
fn test_onboarding_scenario_reaches_home() {
    let (mut app, _rx) = create_test_app();

    let mut completions = Vec::new();
    if let Screen::Onboarding(wizard) = &mut app.screen {
        wizard.draft_mut().goal = Some(Goal::Lose);
        assert!(matches!(wizard.next(), WizardOutcome::Advanced(_)));

        let d = wizard.draft_mut();
        d.gender = Some(Gender::Female);
        d.age = "30".to_string();
        d.height = "165".to_string();
        d.weight = "60".to_string();
        assert!(matches!(wizard.next(), WizardOutcome::Advanced(_)));

        let d = wizard.draft_mut();
        d.activity_level = Some(ActivityLevel::Medium);
        d.workout_time = Some(WorkoutTime::Ten);
        assert!(matches!(wizard.next(), WizardOutcome::Advanced(_)));

        assert_eq!(wizard.next(), WizardOutcome::Blocked);
        wizard.draft_mut().agreed_to_disclaimer = true;

        for _ in 0..3 {
            if let WizardOutcome::Completed(profile) = wizard.next() {
                completions.push(profile);
            }
        }
    }

    assert_eq!(completions, vec![sample_profile()]);

    let profile = completions.remove(0);
    app.complete_onboarding(profile);
    assert_eq!(app.screen.route(), Some(Route::Home));
    assert_eq!(app.profile, Some(sample_profile()));
}

#[test]
fn test_navigate_between_home_and_catalog() {
    let (mut app, _rx) = create_test_app();
    app.complete_onboarding(sample_profile());

    app.navigate(Route::Catalog);
    assert_eq!(app.screen.route(), Some(Route::Catalog));
    assert_eq!(app.screen.title(), "Каталог тренировок");

    app.navigate(Route::Home);
    assert_eq!(app.screen.route(), Some(Route::Home));

    // Profile is kept across navigation
    assert!(app.profile.is_some());
}

#[test]
fn test_navigate_to_current_screen_keeps_state() {
    let (mut app, _rx) = create_test_app();
    app.complete_onboarding(sample_profile());
    app.navigate(Route::Catalog);

    if let Screen::Catalog(catalog) = &mut app.screen {
        catalog.next();
    }
    app.navigate(Route::Catalog);

    match &app.screen {
        Screen::Catalog(catalog) => assert_eq!(catalog.selected, 1),
        _ => panic!("expected catalog"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_leaving_home_stops_the_session_ticker() {
    let (mut app, mut rx) = create_test_app();
    app.complete_onboarding(sample_profile());

    let generation = match &mut app.screen {
        Screen::Home(home) => {
            home.start_session();
            home.ticker_generation().expect("scheduled")
        }
        _ => panic!("expected home"),
    };

    app.navigate(Route::Catalog);
    tokio::time::sleep(std::time::Duration::from_secs(3)).await;

    // Nothing is ticking any more and a late tick has nowhere to go
    while let Ok(tick) = rx.try_recv() {
        assert_eq!(app.on_tick(tick), TickOutcome::Ignored);
    }
    assert_eq!(app.on_tick(SessionTick { generation }), TickOutcome::Ignored);
}

#[tokio::test(start_paused = true)]
async fn test_returning_home_remounts_fresh_session() {
    let (mut app, _rx) = create_test_app();
    app.complete_onboarding(sample_profile());

    if let Screen::Home(home) = &mut app.screen {
        home.start_session();
        home.next_exercise();
    }

    app.navigate(Route::Catalog);
    app.navigate(Route::Home);

    match &app.screen {
        Screen::Home(home) => {
            assert!(!home.session().is_active());
            assert_eq!(home.session().time_left(), 300);
            assert_eq!(home.session().exercise_index(), 0);
            assert_eq!(home.ticker_generation(), None);
        }
        _ => panic!("expected home"),
    }
}

#[test]
fn test_cycle_theme() {
    let (mut app, _rx) = create_test_app();
    let first = app.theme.name;
    app.cycle_theme();
    assert_ne!(app.theme.name, first);
    for _ in 1..Theme::all().len() {
        app.cycle_theme();
    }
    assert_eq!(app.theme.name, first);
}
