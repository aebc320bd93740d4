use tracing::{debug, warn};

use crate::filter::{countries, CountryMatch};
use crate::model::UserPatch;
use crate::store::{Provenance, SessionStore, StoreError, UserRef};
use crate::ui::detail::{DetailAction, DetailIntent, DetailReducer, DetailState};
use crate::ui::home::{HomeAction, HomeIntent, HomeReducer, HomeState};
use crate::ui::list::{ListIntent, ListReducer, ListState, LoadStatus};
use crate::ui::mvi::Reducer;
use crate::ui::route::Route;
use crate::ui::worker::{CommandResult, Completion, RequestId, UiCommand, UiCommandSender};

/// The screen on display and its state.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Home(HomeState),
    List(ListState),
    Detail(DetailState),
}

/// Run a reducer over the current screen state if `$variant` is on display.
macro_rules! dispatch_mvi {
    ($self:expr, $variant:path, $reducer:ty, $intent:expr) => {
        if let $variant(state) = &mut $self.screen {
            *state = <$reducer>::reduce(std::mem::take(state), $intent);
        }
    };
}

pub struct App {
    should_quit: bool,
    store: SessionStore,
    country_match: CountryMatch,
    route: Route,
    /// Routes to return to with Back, most recent last.
    history: Vec<Route>,
    screen: Screen,
    command_sender: Option<UiCommandSender>,
    next_request: RequestId,
    tick: u64,
    /// Set when a command could not be queued.
    last_error: Option<String>,
}

impl App {
    pub fn new(store: SessionStore, country_match: CountryMatch) -> Self {
        Self {
            should_quit: false,
            store,
            country_match,
            route: Route::Home,
            history: Vec::new(),
            screen: Screen::Home(HomeState::default()),
            command_sender: None,
            next_request: RequestId::new(1),
            tick: 0,
            last_error: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    /// Show the first screen. Nothing is pushed onto the history.
    pub fn start(&mut self, route: Route) {
        self.mount(route);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn navigate(&mut self, route: Route) {
        let previous = std::mem::replace(&mut self.route, Route::Home);
        self.history.push(previous);
        self.mount(route);
    }

    /// Return to the previous route. False when there is none.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(route) => {
                self.mount(route);
                true
            }
            None => false,
        }
    }

    fn mount(&mut self, route: Route) {
        debug!(route = %route, "Mounting route");
        if matches!(self.screen, Screen::Detail(_)) {
            self.store.flush();
        }
        self.screen = match &route {
            Route::Home => Screen::Home(HomeState::default()),
            Route::RandomUsers => Screen::List(self.load_list(Provenance::Random, false)),
            Route::SavedUsers => Screen::List(self.load_list(Provenance::Saved, false)),
            Route::User { id, provenance } => Screen::Detail(self.resolve_user(id, *provenance)),
        };
        self.route = route;
    }

    /// Fresh list state with its load already issued. Saved lists always
    /// refetch; random lists only when `force` is set or nothing is cached.
    fn load_list(&mut self, mode: Provenance, force: bool) -> ListState {
        let state = ListState::new(mode, self.country_match);
        let issued = match mode {
            Provenance::Random => {
                self.issue(|request| UiCommand::FetchRandomUsers { request, force })
            }
            Provenance::Saved => self.issue(|request| UiCommand::FetchSavedUsers { request }),
        };
        match issued {
            Ok(request) => ListReducer::reduce(state, ListIntent::Load { request }),
            Err(message) => ListState {
                status: LoadStatus::Failed(message),
                ..state
            },
        }
    }

    fn resolve_user(&mut self, id: &str, provenance: Option<Provenance>) -> DetailState {
        let held = provenance
            .map(|provenance| UserRef {
                provenance,
                id: id.to_string(),
            })
            .filter(|user_ref| self.store.get(user_ref).is_some())
            .or_else(|| self.store.find(id));

        if let Some(user_ref) = held {
            if let Some(user) = self.store.get(&user_ref) {
                return DetailState::for_user(user_ref, &user);
            }
        }

        let state = DetailState::unresolved(id);
        match self.issue(|request| UiCommand::FetchUser {
            request,
            id: id.to_string(),
        }) {
            Ok(request) => DetailReducer::reduce(
                state,
                DetailIntent::Started {
                    request,
                    action: DetailAction::Load,
                },
            ),
            Err(_) => DetailState::missing(id),
        }
    }

    // ========================================================================
    // Home
    // ========================================================================

    pub fn dispatch_home(&mut self, intent: HomeIntent) {
        dispatch_mvi!(self, Screen::Home, HomeReducer, intent);
    }

    pub fn activate_home(&mut self) {
        let Screen::Home(HomeState { selected }) = self.screen else {
            return;
        };
        match selected {
            HomeAction::Fetch => self.fetch_random_and_browse(),
            HomeAction::History => self.navigate(Route::SavedUsers),
        }
    }

    /// Force a new random batch and show the random list waiting on it.
    pub fn fetch_random_and_browse(&mut self) {
        let previous = std::mem::replace(&mut self.route, Route::RandomUsers);
        self.history.push(previous);
        self.screen = Screen::List(self.load_list(Provenance::Random, true));
    }

    // ========================================================================
    // List
    // ========================================================================

    pub fn dispatch_list(&mut self, intent: ListIntent) {
        dispatch_mvi!(self, Screen::List, ListReducer, intent);
    }

    pub fn list_move_down(&mut self) {
        let Screen::List(state) = &self.screen else {
            return;
        };
        let users = self.store.users(state.mode);
        let visible = state.visible(&users).len();
        self.dispatch_list(ListIntent::MoveDown { visible });
    }

    pub fn list_cycle_country(&mut self, forward: bool) {
        let Screen::List(state) = &self.screen else {
            return;
        };
        let countries = countries(&self.store.users(state.mode));
        self.dispatch_list(ListIntent::CycleCountry { countries, forward });
    }

    /// Re-issue the list's load; random lists are refetched unconditionally.
    pub fn refresh_list(&mut self) {
        let Screen::List(state) = &self.screen else {
            return;
        };
        let mode = state.mode;
        let issued = match mode {
            Provenance::Random => self.issue(|request| UiCommand::FetchRandomUsers {
                request,
                force: true,
            }),
            Provenance::Saved => self.issue(|request| UiCommand::FetchSavedUsers { request }),
        };
        if let Ok(request) = issued {
            self.dispatch_list(ListIntent::Load { request });
        }
    }

    pub fn open_selected_user(&mut self) {
        let Screen::List(state) = &self.screen else {
            return;
        };
        if state.is_loading() {
            return;
        }
        let users = self.store.users(state.mode);
        let Some(user) = state.selected_user(&users) else {
            return;
        };
        let route = Route::user(user.id.clone(), state.mode);
        self.navigate(route);
    }

    // ========================================================================
    // Detail
    // ========================================================================

    /// Apply a name edit. Unsaved random users are renamed in the store
    /// right away and written out when the screen is left; saved users keep
    /// the edit local until Update.
    pub fn edit_detail(&mut self, intent: DetailIntent) {
        dispatch_mvi!(self, Screen::Detail, DetailReducer, intent);

        let Screen::Detail(state) = &self.screen else {
            return;
        };
        if state.provenance == Some(Provenance::Random) && !self.store.is_saved(&state.id) {
            self.store
                .update_random_user_name(&state.id, state.name.clone());
        }
    }

    pub fn save_current_user(&mut self) {
        let Screen::Detail(state) = &self.screen else {
            return;
        };
        if !state.can_save(self.store.is_saved(&state.id)) {
            debug!(id = %state.id, "Save ignored");
            return;
        }
        let Some(mut user) = state.target().and_then(|target| self.store.get(&target)) else {
            return;
        };
        user.name = state.name.clone();
        self.start_detail_action(DetailAction::Save, |request| UiCommand::SaveUser {
            request,
            user,
        });
    }

    pub fn delete_current_user(&mut self) {
        let Screen::Detail(state) = &self.screen else {
            return;
        };
        if !state.can_modify(self.store.is_saved(&state.id)) {
            return;
        }
        let id = state.id.clone();
        self.start_detail_action(DetailAction::Delete, |request| UiCommand::DeleteUser {
            request,
            id,
        });
    }

    pub fn update_current_user(&mut self) {
        let Screen::Detail(state) = &self.screen else {
            return;
        };
        if !state.can_modify(self.store.is_saved(&state.id)) {
            return;
        }
        let id = state.id.clone();
        let patch = UserPatch::name(state.name.clone());
        self.start_detail_action(DetailAction::Update, |request| UiCommand::UpdateUser {
            request,
            id,
            patch,
        });
    }

    fn start_detail_action(
        &mut self,
        action: DetailAction,
        build: impl FnOnce(RequestId) -> UiCommand,
    ) {
        match self.issue(build) {
            Ok(request) => {
                dispatch_mvi!(
                    self,
                    Screen::Detail,
                    DetailReducer,
                    DetailIntent::Started { request, action }
                );
            }
            Err(message) => warn!(?action, %message, "Detail action not started"),
        }
    }

    // ========================================================================
    // Completions
    // ========================================================================

    /// Route a finished command to the screen waiting on it. Completions for
    /// screens that are gone only had their effect on the store.
    pub fn on_completion(&mut self, completion: Completion) {
        let Completion { request, result } = completion;
        debug!(request = %request, "Command completed");

        match result {
            CommandResult::RandomUsers(result) => self.finish_list_load(request, result.map(|_| ())),
            CommandResult::SavedUsers(result) => self.finish_list_load(request, result.map(|_| ())),
            CommandResult::User(result) => {
                let intent = match result {
                    Ok(user) => DetailIntent::Loaded { request, user },
                    Err(err) => DetailIntent::Finished {
                        request,
                        outcome: Err(err.user_message().to_string()),
                    },
                };
                dispatch_mvi!(self, Screen::Detail, DetailReducer, intent);
            }
            CommandResult::Saved(result) => {
                self.finish_detail_action(request, result.map(|_| "User saved"));
            }
            CommandResult::Updated(result) => {
                self.finish_detail_action(request, result.map(|_| "User updated"));
            }
            CommandResult::Deleted(Ok(())) => {
                if self.detail_waiting_on(request) {
                    self.back();
                }
            }
            CommandResult::Deleted(Err(err)) => self.finish_detail_action(request, Err(err)),
        }
    }

    fn finish_list_load(&mut self, request: RequestId, result: Result<(), StoreError>) {
        let intent = match result {
            Ok(()) => ListIntent::Loaded { request },
            Err(err) => ListIntent::LoadFailed {
                request,
                message: err.user_message().to_string(),
            },
        };
        self.dispatch_list(intent);
    }

    fn finish_detail_action(
        &mut self,
        request: RequestId,
        result: Result<&'static str, StoreError>,
    ) {
        let outcome = result
            .map(str::to_string)
            .map_err(|err| err.user_message().to_string());
        dispatch_mvi!(
            self,
            Screen::Detail,
            DetailReducer,
            DetailIntent::Finished { request, outcome }
        );
    }

    fn detail_waiting_on(&self, request: RequestId) -> bool {
        matches!(
            &self.screen,
            Screen::Detail(state) if state.pending.map(|pending| pending.request) == Some(request)
        )
    }

    fn issue(&mut self, build: impl FnOnce(RequestId) -> UiCommand) -> Result<RequestId, String> {
        let request = self.next_request;
        self.next_request = request.next();

        let Some(sender) = &self.command_sender else {
            let message = "Backend worker is not running".to_string();
            self.last_error = Some(message.clone());
            return Err(message);
        };

        match sender.try_send(build(request)) {
            Ok(()) => {
                self.last_error = None;
                Ok(request)
            }
            Err(err) => {
                let message = format!("Command queue unavailable: {err}");
                warn!(request = %request, error = %err, "Failed to queue command");
                self.last_error = Some(message.clone());
                Err(message)
            }
        }
    }
}
