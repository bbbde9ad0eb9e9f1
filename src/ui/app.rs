use super::catalog::CatalogScreen;
use super::home::HomeScreen;
use super::theme::Theme;
use crate::onboarding::Wizard;
use crate::profile::UserProfile;
use crate::workout::{SessionTick, TickOutcome, TickScheduler};

/// Destinations reachable after onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Catalog,
}

/// The mounted screen together with its local state. Replacing the variant
/// unmounts the previous screen and drops its state.
#[derive(Debug)]
pub enum Screen {
    Onboarding(Wizard),
    Home(HomeScreen),
    Catalog(CatalogScreen),
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Onboarding(_) => "Добро пожаловать",
            Screen::Home(_) => "Сегодня",
            Screen::Catalog(_) => "Каталог тренировок",
        }
    }

    pub fn route(&self) -> Option<Route> {
        match self {
            Screen::Onboarding(_) => None,
            Screen::Home(_) => Some(Route::Home),
            Screen::Catalog(_) => Some(Route::Catalog),
        }
    }
}

pub struct App {
    pub screen: Screen,
    pub profile: Option<UserProfile>,
    pub theme: Theme,
    pub should_quit: bool,
    /// One-line message shown in the footer (e.g. a failed config save).
    pub status: Option<String>,
    scheduler: TickScheduler,
}

impl App {
    pub fn new(theme: Theme, scheduler: TickScheduler) -> Self {
        Self {
            screen: Screen::Onboarding(Wizard::new()),
            profile: None,
            theme,
            should_quit: false,
            status: None,
            scheduler,
        }
    }

    /// Store the finished profile and mount the home screen.
    pub fn complete_onboarding(&mut self, profile: UserProfile) {
        self.profile = Some(profile);
        self.screen = Screen::Home(HomeScreen::new(self.scheduler.clone()));
    }

    /// Switch screens. Navigating to the screen already shown keeps its
    /// state; there is no way back to onboarding.
    pub fn navigate(&mut self, route: Route) {
        if self.screen.route() == Some(route) {
            return;
        }
        self.screen = match route {
            Route::Home => Screen::Home(HomeScreen::new(self.scheduler.clone())),
            Route::Catalog => Screen::Catalog(CatalogScreen::new()),
        };
    }

    /// Forward a tick to the home screen, if it is mounted.
    pub fn on_tick(&mut self, tick: SessionTick) -> TickOutcome {
        match &mut self.screen {
            Screen::Home(home) => home.on_tick(tick),
            _ => TickOutcome::Ignored,
        }
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next().clone();
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}
