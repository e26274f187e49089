//! Main application orchestrator.

use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    widgets::{Block, Widget},
};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use super::home_screen::{HomeAction, HomeScreen, KeyContext};
use super::login_screen::{LoginAction, LoginScreen};
use super::registration_screen::{RegistrationAction, RegistrationScreen};
use super::view::ViewContext;
use crate::application::services::{
    PreferenceStore, ProcessSimulator, ProcessState, RecordError, RecordList, RecordManager,
};
use crate::domain::entities::{Record, Session};
use crate::domain::errors::PreferenceError;
use crate::domain::keybinding::{Action, Keymap};
use crate::domain::navigation::{AppRoute, NavController, NavOptions, PopTarget};
use crate::infrastructure::config::{AppConfig, LayoutMode};
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{FooterBar, FooterBarStyle, HeaderBar, HeaderBarStyle, Hint};

/// Results of background work, delivered back to the UI task.
#[derive(Debug)]
enum AppMessage {
    PreferenceWritten {
        value: bool,
        result: Result<(), PreferenceError>,
    },
    RecordSaved(Result<Record, RecordError>),
}

/// UI state of an outer destination.
enum Screen {
    Registration(RegistrationScreen),
    Login(LoginScreen),
    Home(Box<HomeScreen>),
}

impl Screen {
    fn for_route(route: &AppRoute) -> Self {
        match route {
            AppRoute::Registration => Self::Registration(RegistrationScreen::new()),
            AppRoute::Login => Self::Login(LoginScreen::new()),
            AppRoute::Home { username } => Self::Home(Box::new(HomeScreen::new(username.clone()))),
        }
    }

    fn hints(&self) -> &'static [Hint] {
        match self {
            Self::Registration(_) => RegistrationScreen::HINTS,
            Self::Login(_) => LoginScreen::HINTS,
            Self::Home(home) => home.hints(),
        }
    }
}

/// Commits theme writes one at a time, in the order they were requested.
fn spawn_theme_writer(
    preferences: Arc<PreferenceStore>,
    tx: mpsc::UnboundedSender<AppMessage>,
) -> mpsc::UnboundedSender<bool> {
    let (writes_tx, mut writes_rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        while let Some(value) = writes_rx.recv().await {
            let result = preferences.write(value).await;
            if tx.send(AppMessage::PreferenceWritten { value, result }).is_err() {
                break;
            }
        }
    });
    writes_tx
}

pub struct App {
    keymap: Keymap,
    theme: Theme,
    dark_mode: bool,
    layout: LayoutMode,
    nav: NavController<AppRoute, Option<Screen>>,
    preferences: Arc<PreferenceStore>,
    records: Arc<RecordManager>,
    records_rx: watch::Receiver<RecordList>,
    record_snapshot: RecordList,
    process: ProcessSimulator,
    process_rx: watch::Receiver<ProcessState>,
    process_state: ProcessState,
    message_tx: mpsc::UnboundedSender<AppMessage>,
    theme_writes: mpsc::UnboundedSender<bool>,
    // Writes queued but not yet reported back; stream echoes are ignored meanwhile.
    pending_theme_writes: usize,
    message_rx: mpsc::UnboundedReceiver<AppMessage>,
    running: bool,
}

impl App {
    #[must_use]
    pub fn new(
        config: &AppConfig,
        preferences: Arc<PreferenceStore>,
        records: Arc<RecordManager>,
        process: ProcessSimulator,
    ) -> Self {
        let dark_mode = preferences.current();
        let records_rx = records.subscribe();
        let record_snapshot = records.current();
        let process_rx = process.subscribe();
        let process_state = process.state();
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let theme_writes = spawn_theme_writer(Arc::clone(&preferences), message_tx.clone());

        let mut app = Self {
            keymap: Keymap::default(),
            theme: Theme::new(&config.theme.accent_color, dark_mode),
            dark_mode,
            layout: config.layout,
            nav: NavController::new(config.start_route.route()),
            preferences,
            records,
            records_rx,
            record_snapshot,
            process,
            process_rx,
            process_state,
            message_tx,
            theme_writes,
            pending_theme_writes: 0,
            message_rx,
            running: true,
        };
        app.ensure_screen();
        app
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        info!(route = %self.nav.current_route(), "Application started");
        self.run_event_loop(terminal).await?;
        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut dark_mode_updates = self.preferences.read();

        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            tokio::select! {
                Some(message) = self.message_rx.recv() => {
                    self.handle_message(message);
                }

                Some(dark_mode) = dark_mode_updates.next() => {
                    if self.pending_theme_writes == 0 {
                        self.apply_dark_mode(dark_mode);
                    }
                }

                Ok(()) = self.records_rx.changed() => {
                    self.record_snapshot = Arc::clone(&self.records_rx.borrow_and_update());
                }

                Ok(()) = self.process_rx.changed() => {
                    self.process_state = *self.process_rx.borrow_and_update();
                }

                Some(Ok(event)) = terminal_events.next() => {
                    if self.handle_terminal_event(event) == EventResult::Exit {
                        self.running = false;
                    }
                }

                else => {
                    warn!("All event sources closed");
                    self.running = false;
                }
            }

            terminal.draw(|frame| self.render(frame))?;
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) => self.handle_key(key),
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if !EventHandler::is_press(&key) {
            return EventResult::Continue;
        }

        if let Some(action) = self.keymap.resolve(&key) {
            return self.handle_global(action);
        }

        self.handle_screen_key(key);
        EventResult::Continue
    }

    fn handle_global(&mut self, action: Action) -> EventResult {
        debug!(?action, "Global action");
        match action {
            Action::Quit => return EventResult::Exit,
            Action::Back => return self.back(),
            Action::ToggleTheme => self.write_dark_mode(!self.dark_mode),
            Action::Logout => {
                if self.home().is_some() {
                    self.logout();
                }
            }
            Action::NextTab => {
                if let Some(home) = self.home_mut() {
                    home.next_tab();
                }
            }
            Action::PreviousTab => {
                if let Some(home) = self.home_mut() {
                    home.previous_tab();
                }
            }
            Action::SelectTab(index) => {
                if let Some(home) = self.home_mut() {
                    home.select_index(index);
                }
            }
        }
        EventResult::Continue
    }

    fn handle_screen_key(&mut self, key: KeyEvent) {
        let ctx = KeyContext {
            dark_mode: self.dark_mode,
            record_count: self.record_snapshot.len(),
        };
        let Some(screen) = self.nav.current_mut().state_mut().as_mut() else {
            return;
        };

        match screen {
            Screen::Registration(registration) => {
                if registration.handle_key(key) == RegistrationAction::Submitted {
                    self.navigate(AppRoute::Login, &NavOptions::new());
                }
            }
            Screen::Login(login) => match login.handle_key(key) {
                LoginAction::LoggedIn(session) => self.login(session),
                LoginAction::OpenRegistration => {
                    self.navigate(AppRoute::Registration, &NavOptions::new());
                }
                LoginAction::None => {}
            },
            Screen::Home(home) => match home.handle_key(&key, ctx) {
                HomeAction::Logout => self.logout(),
                HomeAction::SetDarkMode(value) => self.write_dark_mode(value),
                HomeAction::SaveRecord { name, description } => {
                    self.save_record(name, description);
                }
                HomeAction::PressProcess => {
                    let outcome = self.process.press();
                    debug!(?outcome, "Process button pressed");
                }
                HomeAction::None => {}
            },
        }
    }

    /// Nested back first, then the outer stack. Back on the outer root exits.
    fn back(&mut self) -> EventResult {
        if let Some(home) = self.home_mut()
            && home.back()
        {
            return EventResult::Continue;
        }

        if self.nav.back() {
            self.ensure_screen();
            EventResult::Continue
        } else {
            EventResult::Exit
        }
    }

    fn navigate(&mut self, route: AppRoute, options: &NavOptions) {
        let outcome = self.nav.navigate(route, options);
        debug!(?outcome, route = %self.nav.current_route(), "Navigated");
        self.ensure_screen();
    }

    fn login(&mut self, session: Session) {
        let route = AppRoute::home(session.into_username());
        info!(route = %route, "Login successful");
        let options = NavOptions::new()
            .pop_up_to(PopTarget::Start, true)
            .launch_single_top();
        self.navigate(route, &options);
    }

    fn logout(&mut self) {
        info!("Logging out");
        self.nav.clear_and_navigate(AppRoute::Login);
        self.ensure_screen();
    }

    fn ensure_screen(&mut self) {
        let route = self.nav.current_route().clone();
        let state = self.nav.current_mut().state_mut();
        if state.is_none() {
            debug!(route = %route, "Creating screen");
            *state = Some(Screen::for_route(&route));
        }
    }

    fn home(&self) -> Option<&HomeScreen> {
        match self.nav.current().state() {
            Some(Screen::Home(home)) => Some(home.as_ref()),
            _ => None,
        }
    }

    fn home_mut(&mut self) -> Option<&mut HomeScreen> {
        match self.nav.current_mut().state_mut() {
            Some(Screen::Home(home)) => Some(home.as_mut()),
            _ => None,
        }
    }

    /// Applies `value` at once and queues the commit behind earlier ones.
    fn write_dark_mode(&mut self, value: bool) {
        self.apply_dark_mode(value);
        if self.theme_writes.send(value).is_ok() {
            self.pending_theme_writes += 1;
        } else {
            warn!(dark_mode = value, "Theme writer stopped, preference not saved");
        }
    }

    fn save_record(&self, name: String, description: String) {
        let records = Arc::clone(&self.records);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = records.insert(&name, &description).await;
            let _ = tx.send(AppMessage::RecordSaved(result));
        });
    }

    fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::PreferenceWritten { value, result } => {
                self.pending_theme_writes = self.pending_theme_writes.saturating_sub(1);
                match result {
                    Ok(()) => debug!(dark_mode = value, "Theme preference saved"),
                    Err(e) => warn!(error = %e, dark_mode = value, "Theme preference not saved"),
                }
            }
            AppMessage::RecordSaved(result) => match result {
                Ok(record) => debug!(id = %record.id(), "Record save finished"),
                Err(e) => warn!(error = %e, "Failed to save record"),
            },
        }
    }

    fn apply_dark_mode(&mut self, dark_mode: bool) {
        if self.dark_mode != dark_mode {
            debug!(dark_mode, "Theme mode changed");
        }
        self.dark_mode = dark_mode;
        self.theme = self.theme.with_mode(dark_mode);
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let buf = frame.buffer_mut();
        Block::default().style(self.theme.base_style).render(area, buf);

        let [header, body, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let (title, subtitle) = match self.home() {
            Some(home) => (home.title(), home.current_tab().label()),
            None => match self.nav.current_route() {
                AppRoute::Registration => ("PupiStore".to_string(), "Registro"),
                _ => ("PupiStore".to_string(), "Iniciar sesión"),
            },
        };
        HeaderBar::new(&title)
            .subtitle(subtitle)
            .dark_mode(self.dark_mode)
            .style(HeaderBarStyle::from_theme(&self.theme))
            .render(header, buf);

        let ctx = ViewContext {
            theme: &self.theme,
            dark_mode: self.dark_mode,
            records: &self.record_snapshot,
            process: self.process_state,
            layout: self.layout,
        };
        let hints: &[Hint] = match self.nav.current().state() {
            Some(screen) => {
                match screen {
                    Screen::Registration(registration) => registration.render(body, buf, &ctx),
                    Screen::Login(login) => login.render(body, buf, &ctx),
                    Screen::Home(home) => home.render(body, buf, &ctx),
                }
                screen.hints()
            }
            None => &[],
        };

        FooterBar::new(hints)
            .keybindings(self.keymap.visible())
            .style(FooterBarStyle::from_theme(&self.theme))
            .render(footer, buf);
    }
}
