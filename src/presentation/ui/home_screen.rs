//! Authenticated shell: nested tab navigation around the tab screens.

use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use tracing::debug;

use super::empty_screen::EmptyScreen;
use super::objects_screen::{ObjectsAction, ObjectsScreen};
use super::process_screen::{ProcessAction, ProcessScreen};
use super::product_list::ProductList;
use super::profile_screen::{ProfileAction, ProfileScreen};
use super::settings_screen::{SettingsAction, SettingsScreen};
use super::view::ViewContext;
use crate::domain::entities::Username;
use crate::domain::navigation::{NavController, NavOptions, NavOutcome, PopTarget, TabRoute};
use crate::presentation::widgets::{Hint, Orientation, TabBar};

/// UI state of one tab destination.
#[derive(Debug, Clone)]
pub enum TabScreen {
    Products(ProductList),
    Profile(ProfileScreen),
    Settings(SettingsScreen),
    Objects(ObjectsScreen),
    Process(ProcessScreen),
    Empty(EmptyScreen),
}

impl TabScreen {
    #[must_use]
    pub fn for_route(route: TabRoute) -> Self {
        match route {
            TabRoute::Inicio => Self::Products(ProductList::default()),
            TabRoute::Perfil => Self::Profile(ProfileScreen::default()),
            TabRoute::ThemeSettings => Self::Settings(SettingsScreen),
            TabRoute::Objetos => Self::Objects(ObjectsScreen::new()),
            TabRoute::Proceso => Self::Process(ProcessScreen),
            TabRoute::Buscar | TabRoute::Favoritos | TabRoute::Carrito => {
                Self::Empty(EmptyScreen::new(route.label()))
            }
        }
    }

    const fn hints(&self) -> &'static [Hint] {
        match self {
            Self::Products(_) => ProductList::HINTS,
            Self::Profile(_) => ProfileScreen::HINTS,
            Self::Settings(_) => SettingsScreen::HINTS,
            Self::Objects(_) => ObjectsScreen::HINTS,
            Self::Process(_) => ProcessScreen::HINTS,
            Self::Empty(_) => &[],
        }
    }
}

/// What the shell asks the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeAction {
    None,
    Logout,
    SetDarkMode(bool),
    SaveRecord { name: String, description: String },
    PressProcess,
}

/// Values from app state a tab needs to interpret a key.
#[derive(Debug, Clone, Copy)]
pub struct KeyContext {
    pub dark_mode: bool,
    pub record_count: usize,
}

pub struct HomeScreen {
    username: Username,
    tabs: NavController<TabRoute, Option<TabScreen>>,
}

impl HomeScreen {
    #[must_use]
    pub fn new(username: Username) -> Self {
        let mut home = Self {
            username,
            tabs: NavController::new(TabRoute::START),
        };
        home.ensure_screen();
        home
    }

    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    #[must_use]
    pub fn title(&self) -> String {
        format!("PupiStore - {}", self.username)
    }

    #[must_use]
    pub const fn current_tab(&self) -> TabRoute {
        *self.tabs.current_route()
    }

    /// Bar item to highlight: the nearest bar destination on the stack.
    #[must_use]
    pub fn active_bar_tab(&self) -> Option<TabRoute> {
        self.tabs
            .routes()
            .rev()
            .copied()
            .find(|route| route.is_bar_item())
    }

    /// Bar selection: one tab above start at most, state saved and restored.
    pub fn select_tab(&mut self, tab: TabRoute) -> NavOutcome {
        let options = NavOptions::new()
            .pop_up_to(PopTarget::Start, false)
            .save_state()
            .launch_single_top()
            .restore_state();
        let outcome = self.tabs.navigate(tab, &options);
        self.ensure_screen();
        outcome
    }

    pub fn select_index(&mut self, index: u8) {
        if let Some(tab) = TabRoute::BAR.get(usize::from(index)) {
            self.select_tab(*tab);
        }
    }

    pub fn next_tab(&mut self) {
        self.step_tab(1);
    }

    pub fn previous_tab(&mut self) {
        self.step_tab(TabRoute::BAR.len() - 1);
    }

    fn step_tab(&mut self, offset: usize) {
        let current = self
            .active_bar_tab()
            .and_then(|tab| TabRoute::BAR.iter().position(|item| *item == tab))
            .unwrap_or(0);
        self.select_tab(TabRoute::BAR[(current + offset) % TabRoute::BAR.len()]);
    }

    /// Pushes a secondary destination above the current tab.
    pub fn open(&mut self, route: TabRoute) {
        self.tabs.navigate(route, &NavOptions::new().launch_single_top());
        self.ensure_screen();
    }

    /// Pops the nested stack. `false` when already at the start tab.
    pub fn back(&mut self) -> bool {
        self.tabs.back()
    }

    fn ensure_screen(&mut self) {
        let route = self.current_tab();
        let state = self.tabs.current_mut().state_mut();
        if state.is_none() {
            debug!(tab = %route, "Creating tab screen");
            *state = Some(TabScreen::for_route(route));
        }
    }

    #[must_use]
    pub fn hints(&self) -> &'static [Hint] {
        match self.tabs.current().state() {
            Some(screen) => screen.hints(),
            None => &[],
        }
    }

    pub fn handle_key(&mut self, key: &KeyEvent, ctx: KeyContext) -> HomeAction {
        self.ensure_screen();
        let Some(screen) = self.tabs.current_mut().state_mut().as_mut() else {
            return HomeAction::None;
        };

        match screen {
            TabScreen::Products(list) => {
                list.handle_key(key);
                HomeAction::None
            }
            TabScreen::Profile(profile) => match profile.handle_key(key) {
                ProfileAction::Open(route) => {
                    self.open(route);
                    HomeAction::None
                }
                ProfileAction::Logout => HomeAction::Logout,
                ProfileAction::None => HomeAction::None,
            },
            TabScreen::Settings(settings) => match settings.handle_key(key, ctx.dark_mode) {
                SettingsAction::SetDarkMode(value) => HomeAction::SetDarkMode(value),
                SettingsAction::None => HomeAction::None,
            },
            TabScreen::Objects(objects) => match objects.handle_key(key, ctx.record_count) {
                ObjectsAction::Save { name, description } => {
                    HomeAction::SaveRecord { name, description }
                }
                ObjectsAction::None => HomeAction::None,
            },
            TabScreen::Process(process) => match process.handle_key(key) {
                ProcessAction::Press => HomeAction::PressProcess,
                ProcessAction::None => HomeAction::None,
            },
            TabScreen::Empty(_) => HomeAction::None,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, ctx: &ViewContext<'_>) {
        let orientation = Orientation::resolve(ctx.layout, area);
        let (content, bar) = orientation.split(area);

        TabBar::new(self.active_bar_tab(), orientation, ctx.theme).render(bar, buf);

        let inner = Rect {
            x: content.x + 1,
            width: content.width.saturating_sub(2),
            ..content
        };
        match self.tabs.current().state() {
            Some(TabScreen::Products(list)) => list.render(inner, buf, ctx),
            Some(TabScreen::Profile(profile)) => profile.render(inner, buf, ctx, &self.username),
            Some(TabScreen::Settings(settings)) => settings.render(inner, buf, ctx),
            Some(TabScreen::Objects(objects)) => objects.render(inner, buf, ctx),
            Some(TabScreen::Process(process)) => process.render(inner, buf, ctx),
            Some(TabScreen::Empty(empty)) => empty.render(inner, buf, ctx),
            None => {}
        }
    }
}
