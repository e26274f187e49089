//! Stack based navigation state machine.

use std::collections::HashMap;

use tracing::debug;

use super::route::Destination;

/// Frame a `pop_up_to` option pops back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopTarget {
    /// The controller's start destination.
    Start,
    /// The topmost frame with this route key.
    Route(&'static str),
}

/// Pops frames above a target before a push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopUpTo {
    pub target: PopTarget,
    pub inclusive: bool,
    pub save_state: bool,
}

/// Options for [`NavController::navigate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavOptions {
    pub pop_up_to: Option<PopUpTo>,
    pub launch_single_top: bool,
    pub restore_state: bool,
}

impl NavOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pop_up_to: None,
            launch_single_top: false,
            restore_state: false,
        }
    }

    /// Pops everything above `target` (and `target` itself when inclusive).
    #[must_use]
    pub const fn pop_up_to(mut self, target: PopTarget, inclusive: bool) -> Self {
        self.pop_up_to = Some(PopUpTo {
            target,
            inclusive,
            save_state: false,
        });
        self
    }

    /// Keeps the UI state of frames removed by `pop_up_to`.
    #[must_use]
    pub const fn save_state(mut self) -> Self {
        if let Some(pop) = self.pop_up_to.as_mut() {
            pop.save_state = true;
        }
        self
    }

    /// Does not push a duplicate of the top frame.
    #[must_use]
    pub const fn launch_single_top(mut self) -> Self {
        self.launch_single_top = true;
        self
    }

    /// Recalls previously saved UI state for the pushed destination.
    #[must_use]
    pub const fn restore_state(mut self) -> Self {
        self.restore_state = true;
        self
    }
}

/// What a navigate call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// A new frame is on top.
    Pushed,
    /// The top frame already had this destination and was reused.
    SingleTop,
}

/// One stack entry: a route and the UI state of its screen.
#[derive(Debug)]
pub struct Frame<R, S> {
    route: R,
    state: S,
}

impl<R, S> Frame<R, S> {
    const fn new(route: R, state: S) -> Self {
        Self { route, state }
    }

    pub const fn route(&self) -> &R {
        &self.route
    }

    pub const fn state(&self) -> &S {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }
}

/// Stack of frames with a guaranteed active frame.
///
/// `S` is the per-destination UI state carried by each frame, saved and
/// restored by route key.
#[derive(Debug)]
pub struct NavController<R, S = ()> {
    start_key: &'static str,
    below: Vec<Frame<R, S>>,
    top: Frame<R, S>,
    saved: HashMap<&'static str, S>,
}

impl<R: Destination, S: Default> NavController<R, S> {
    /// Creates a controller with a single frame at `start`.
    #[must_use]
    pub fn new(start: R) -> Self {
        Self {
            start_key: start.key(),
            below: Vec::new(),
            top: Frame::new(start, S::default()),
            saved: HashMap::new(),
        }
    }

    /// Key of the configured start destination.
    #[must_use]
    pub const fn start_key(&self) -> &'static str {
        self.start_key
    }

    /// Active frame.
    #[must_use]
    pub const fn current(&self) -> &Frame<R, S> {
        &self.top
    }

    /// Active frame, mutable.
    pub fn current_mut(&mut self) -> &mut Frame<R, S> {
        &mut self.top
    }

    /// Active route.
    #[must_use]
    pub const fn current_route(&self) -> &R {
        &self.top.route
    }

    /// Number of frames on the stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.below.len() + 1
    }

    /// Routes from bottom to top.
    pub fn routes(&self) -> impl DoubleEndedIterator<Item = &R> {
        self.below
            .iter()
            .map(Frame::route)
            .chain(std::iter::once(&self.top.route))
    }

    /// Whether a saved state exists for a route key.
    #[must_use]
    pub fn has_saved_state(&self, key: &str) -> bool {
        self.saved.contains_key(key)
    }

    /// Navigates to `route`.
    pub fn navigate(&mut self, route: R, options: &NavOptions) -> NavOutcome {
        // An active frame for the same destination is kept as is, before any pop.
        if options.launch_single_top && self.top.route.key() == route.key() {
            debug!(route = %route, depth = self.depth(), "Single top, reusing active frame");
            self.top.route = route;
            return NavOutcome::SingleTop;
        }

        let (keep, save_state) = options
            .pop_up_to
            .map_or((self.depth(), false), |pop| (self.keep_len(pop), pop.save_state));

        if options.launch_single_top && keep > 0 {
            let popped = self.pop_to_len(keep);
            self.stash(popped, save_state);

            if self.top.route.key() == route.key() {
                debug!(route = %route, depth = self.depth(), "Single top, reusing frame");
                self.top.route = route;
                return NavOutcome::SingleTop;
            }
        } else if keep > 0 {
            let popped = self.pop_to_len(keep);
            self.stash(popped, save_state);
        }

        let state = if options.restore_state {
            self.saved.remove(route.key()).unwrap_or_default()
        } else {
            S::default()
        };

        debug!(route = %route, "Navigating");
        let frame = Frame::new(route, state);

        if keep == 0 {
            let popped = self.pop_to_len(1);
            self.stash(popped, save_state);
            let bottom = std::mem::replace(&mut self.top, frame);
            self.stash(vec![bottom], save_state);
        } else {
            let previous = std::mem::replace(&mut self.top, frame);
            self.below.push(previous);
        }

        debug!(depth = self.depth(), "Stack updated");
        NavOutcome::Pushed
    }

    /// Pops the active frame. Returns `false` when it is the only one.
    pub fn back(&mut self) -> bool {
        let Some(previous) = self.below.pop() else {
            debug!(route = %self.top.route, "Back ignored on root frame");
            return false;
        };

        let popped = std::mem::replace(&mut self.top, previous);
        debug!(from = %popped.route, to = %self.top.route, "Back");
        true
    }

    /// Replaces the whole stack (and any saved state) with `route`.
    pub fn clear_and_navigate(&mut self, route: R) {
        debug!(route = %route, cleared = self.depth(), "Clearing stack");
        self.below.clear();
        self.saved.clear();
        self.top = Frame::new(route, S::default());
    }

    /// Number of frames that survive `pop`. A missing target pops nothing.
    fn keep_len(&self, pop: PopUpTo) -> usize {
        let mut matches = self
            .routes()
            .enumerate()
            .filter(|(_, route)| route.key() == self.target_key(pop.target))
            .map(|(index, _)| index);

        // The start target is the root frame even when the key recurs above it.
        let position = match pop.target {
            PopTarget::Start => matches.next(),
            PopTarget::Route(_) => matches.last(),
        };

        match position {
            Some(index) if pop.inclusive => index,
            Some(index) => index + 1,
            None => {
                debug!(pop_target = self.target_key(pop.target), "Pop target not on stack");
                self.depth()
            }
        }
    }

    const fn target_key(&self, target: PopTarget) -> &'static str {
        match target {
            PopTarget::Start => self.start_key,
            PopTarget::Route(key) => key,
        }
    }

    /// Pops until `len` frames remain (never below one), top first.
    fn pop_to_len(&mut self, len: usize) -> Vec<Frame<R, S>> {
        let mut popped = Vec::new();
        while self.depth() > len.max(1) {
            let Some(next) = self.below.pop() else {
                break;
            };
            popped.push(std::mem::replace(&mut self.top, next));
        }
        popped
    }

    fn stash(&mut self, popped: Vec<Frame<R, S>>, save_state: bool) {
        if !save_state {
            return;
        }
        for frame in popped {
            self.saved.insert(frame.route.key(), frame.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Username;
    use crate::domain::navigation::route::{AppRoute, TabRoute};

    fn home(name: &str) -> AppRoute {
        AppRoute::home(Username::new(name).unwrap())
    }

    fn login_options() -> NavOptions {
        NavOptions::new()
            .pop_up_to(PopTarget::Start, true)
            .launch_single_top()
    }

    fn tab_options() -> NavOptions {
        NavOptions::new()
            .pop_up_to(PopTarget::Start, false)
            .save_state()
            .launch_single_top()
            .restore_state()
    }

    fn keys<R: Destination, S: Default>(nav: &NavController<R, S>) -> Vec<&'static str> {
        nav.routes().map(Destination::key).collect()
    }

    #[test]
    fn test_initial_state() {
        let nav: NavController<AppRoute> = NavController::new(AppRoute::Login);
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current_route(), &AppRoute::Login);
        assert_eq!(nav.start_key(), "login");
    }

    #[test]
    fn test_push_and_back() {
        let mut nav: NavController<AppRoute> = NavController::new(AppRoute::Registration);
        assert_eq!(
            nav.navigate(AppRoute::Login, &NavOptions::new()),
            NavOutcome::Pushed
        );
        assert_eq!(keys(&nav), ["registro", "login"]);

        assert!(nav.back());
        assert_eq!(nav.current_route(), &AppRoute::Registration);
    }

    #[test]
    fn test_back_on_root_is_noop() {
        let mut nav: NavController<AppRoute> = NavController::new(AppRoute::Login);
        assert!(!nav.back());
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current_route(), &AppRoute::Login);
    }

    #[test]
    fn test_login_replaces_start_destination() {
        let mut nav: NavController<AppRoute> = NavController::new(AppRoute::Login);
        nav.navigate(home("pupi"), &login_options());

        assert_eq!(keys(&nav), ["home"]);
        assert!(!nav.back());
    }

    #[test]
    fn test_login_after_registration_clears_auth_screens() {
        let mut nav: NavController<AppRoute> = NavController::new(AppRoute::Registration);
        nav.navigate(AppRoute::Login, &NavOptions::new());
        nav.navigate(home("pupi"), &login_options());

        assert_eq!(keys(&nav), ["home"]);
    }

    #[test]
    fn test_login_after_register_detour_pops_to_root() {
        let mut nav: NavController<AppRoute> = NavController::new(AppRoute::Login);
        nav.navigate(AppRoute::Registration, &NavOptions::new());
        nav.navigate(AppRoute::Login, &NavOptions::new());
        nav.navigate(home("pupi"), &login_options());

        assert_eq!(keys(&nav), ["home"]);
    }

    #[test]
    fn test_logout_leaves_only_login() {
        let mut nav: NavController<AppRoute> = NavController::new(AppRoute::Registration);
        nav.navigate(AppRoute::Login, &NavOptions::new());
        nav.navigate(home("pupi"), &login_options());

        nav.clear_and_navigate(AppRoute::Login);

        assert_eq!(keys(&nav), ["login"]);
        assert!(!nav.back());
        assert_eq!(nav.current_route(), &AppRoute::Login);
    }

    #[test]
    fn test_single_top_keeps_depth() {
        let mut nav: NavController<AppRoute> = NavController::new(AppRoute::Login);
        nav.navigate(home("pupi"), &login_options());
        let depth = nav.depth();

        let outcome = nav.navigate(home("pupi"), &NavOptions::new().launch_single_top());

        assert_eq!(outcome, NavOutcome::SingleTop);
        assert_eq!(nav.depth(), depth);
    }

    #[test]
    fn test_single_top_updates_payload() {
        let mut nav: NavController<AppRoute> = NavController::new(AppRoute::Login);
        nav.navigate(home("uno"), &NavOptions::new());
        nav.navigate(home("dos"), &NavOptions::new().launch_single_top());

        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.current_route(), &home("dos"));
    }

    #[test]
    fn test_without_single_top_duplicates_push() {
        let mut nav: NavController<TabRoute> = NavController::new(TabRoute::Inicio);
        nav.navigate(TabRoute::Perfil, &NavOptions::new());
        nav.navigate(TabRoute::Perfil, &NavOptions::new());
        assert_eq!(nav.depth(), 3);
    }

    #[test]
    fn test_pop_up_to_missing_target_pops_nothing() {
        let mut nav: NavController<TabRoute> = NavController::new(TabRoute::Inicio);
        nav.navigate(TabRoute::Perfil, &NavOptions::new());
        nav.navigate(
            TabRoute::Carrito,
            &NavOptions::new().pop_up_to(PopTarget::Route("buscar"), true),
        );
        assert_eq!(keys(&nav), ["inicio", "perfil", "carrito"]);
    }

    #[test]
    fn test_pop_up_to_named_route_exclusive() {
        let mut nav: NavController<TabRoute> = NavController::new(TabRoute::Inicio);
        nav.navigate(TabRoute::Perfil, &NavOptions::new());
        nav.navigate(TabRoute::ThemeSettings, &NavOptions::new());
        nav.navigate(
            TabRoute::Objetos,
            &NavOptions::new().pop_up_to(PopTarget::Route("perfil"), false),
        );
        assert_eq!(keys(&nav), ["inicio", "perfil", "objetos"]);
    }

    #[test]
    fn test_tab_switching_keeps_one_tab_above_start() {
        let mut nav: NavController<TabRoute> = NavController::new(TabRoute::Inicio);
        for tab in [TabRoute::Buscar, TabRoute::Carrito, TabRoute::Perfil] {
            nav.navigate(tab, &tab_options());
        }
        assert_eq!(keys(&nav), ["inicio", "perfil"]);

        nav.navigate(TabRoute::Inicio, &tab_options());
        assert_eq!(keys(&nav), ["inicio"]);
    }

    #[test]
    fn test_tab_state_saved_and_restored() {
        let mut nav: NavController<TabRoute, u32> = NavController::new(TabRoute::Inicio);
        nav.navigate(TabRoute::Favoritos, &tab_options());
        *nav.current_mut().state_mut() = 42;

        nav.navigate(TabRoute::Carrito, &tab_options());
        assert!(nav.has_saved_state("favoritos"));
        assert_eq!(*nav.current().state(), 0);

        nav.navigate(TabRoute::Favoritos, &tab_options());
        assert_eq!(*nav.current().state(), 42);
        assert!(!nav.has_saved_state("favoritos"));
    }

    #[test]
    fn test_start_state_survives_tab_switch() {
        let mut nav: NavController<TabRoute, u32> = NavController::new(TabRoute::Inicio);
        *nav.current_mut().state_mut() = 7;

        nav.navigate(TabRoute::Perfil, &tab_options());
        nav.navigate(TabRoute::Inicio, &tab_options());

        assert_eq!(keys(&nav), ["inicio"]);
        assert_eq!(*nav.current().state(), 7);
    }

    #[test]
    fn test_reselecting_active_tab_keeps_depth_and_state() {
        let mut nav: NavController<TabRoute, u32> = NavController::new(TabRoute::Inicio);
        nav.navigate(TabRoute::Perfil, &tab_options());
        *nav.current_mut().state_mut() = 3;
        let depth = nav.depth();

        nav.navigate(TabRoute::Perfil, &tab_options());

        assert_eq!(nav.depth(), depth);
        assert_eq!(*nav.current().state(), 3);
    }

    #[test]
    fn test_single_top_with_pop_keeps_active_frame_without_save() {
        let mut nav: NavController<TabRoute, u32> = NavController::new(TabRoute::Inicio);
        nav.navigate(TabRoute::Perfil, &NavOptions::new());
        *nav.current_mut().state_mut() = 3;

        let outcome = nav.navigate(
            TabRoute::Perfil,
            &NavOptions::new()
                .pop_up_to(PopTarget::Start, false)
                .launch_single_top(),
        );

        assert_eq!(outcome, NavOutcome::SingleTop);
        assert_eq!(keys(&nav), ["inicio", "perfil"]);
        assert_eq!(*nav.current().state(), 3);
        assert!(!nav.has_saved_state("perfil"));
    }

    #[test]
    fn test_single_top_after_pop_reuses_uncovered_frame() {
        let mut nav: NavController<TabRoute, u32> = NavController::new(TabRoute::Inicio);
        *nav.current_mut().state_mut() = 4;
        nav.navigate(TabRoute::Buscar, &NavOptions::new());

        let outcome = nav.navigate(
            TabRoute::Inicio,
            &NavOptions::new()
                .pop_up_to(PopTarget::Start, false)
                .launch_single_top(),
        );

        assert_eq!(outcome, NavOutcome::SingleTop);
        assert_eq!(keys(&nav), ["inicio"]);
        assert_eq!(*nav.current().state(), 4);
    }

    #[test]
    fn test_state_dropped_without_save() {
        let mut nav: NavController<TabRoute, u32> = NavController::new(TabRoute::Inicio);
        nav.navigate(TabRoute::Buscar, &NavOptions::new());
        *nav.current_mut().state_mut() = 9;
        assert!(nav.back());

        nav.navigate(TabRoute::Buscar, &NavOptions::new().restore_state());
        assert_eq!(*nav.current().state(), 0);
    }

    #[test]
    fn test_clear_discards_saved_state() {
        let mut nav: NavController<TabRoute, u32> = NavController::new(TabRoute::Inicio);
        nav.navigate(TabRoute::Buscar, &tab_options());
        *nav.current_mut().state_mut() = 5;
        nav.navigate(TabRoute::Carrito, &tab_options());

        nav.clear_and_navigate(TabRoute::Inicio);

        assert!(!nav.has_saved_state("buscar"));
        assert_eq!(nav.depth(), 1);
    }
}
