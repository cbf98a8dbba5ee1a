//! App state and core application logic
//!
//! Manages the application state machine, navigation stack,
//! and coordinates between UI and backend services.
//!
//! Key handling is synchronous. Anything that needs the network is returned
//! as an [`Action`]; the runner performs it and feeds the outcome back as an
//! [`AppEvent`] through [`App::apply`].

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, warn};

use crate::api::TvMazeError;
use crate::models::{Episode, Season, Show};
use crate::pin::{PinGate, PinOutcome};
use crate::store::FavoritesStore;

/// Rows from the end of the listing at which the next page is requested
pub const LOAD_MORE_THRESHOLD: usize = 5;

/// Rows moved by PageUp/PageDown
const PAGE_SIZE: usize = 10;

// =============================================================================
// App State Enum
// =============================================================================

/// Application state enum representing current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    /// PIN keypad overlay
    Pin,
    /// Catalog listing (home)
    #[default]
    Shows,
    /// Search input and results
    Search,
    /// Detail view for one show
    Detail,
    /// Saved favorites
    Favorites,
}

impl AppState {
    /// Tab title, if the screen is a tab
    pub fn tab_title(&self) -> Option<&'static str> {
        match self {
            AppState::Shows => Some("Shows"),
            AppState::Search => Some("Search"),
            AppState::Favorites => Some("Favorites"),
            AppState::Pin | AppState::Detail => None,
        }
    }
}

// =============================================================================
// Actions and Events
// =============================================================================

/// Asynchronous work requested by a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    LoadShows { page: u32 },
    Search { query: String },
    LoadDetail { id: u64 },
}

/// Outcome of an [`Action`], delivered back to the UI loop
#[derive(Debug)]
pub enum AppEvent {
    ShowsLoaded {
        page: u32,
        result: Result<Vec<Show>>,
    },
    SearchCompleted {
        query: String,
        result: Result<Vec<Show>>,
    },
    DetailLoaded {
        id: u64,
        result: Result<(Show, Vec<Episode>)>,
    },
}

// =============================================================================
// Input Mode
// =============================================================================

/// Current input mode for keyboard handling
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Text input mode (search box focused)
    Editing,
}

// =============================================================================
// Loading State
// =============================================================================

/// Loading state for async operations
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadingState {
    /// Idle - no loading in progress
    #[default]
    Idle,
    /// Loading with optional message
    Loading(Option<String>),
    /// Error with message
    Error(String),
}

impl LoadingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LoadingState::Error(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            LoadingState::Loading(Some(msg)) => Some(msg),
            LoadingState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

// =============================================================================
// Selection State (per-view)
// =============================================================================

/// Selection state for list views
#[derive(Debug, Clone, Default)]
pub struct ListState {
    /// Currently selected index
    pub selected: usize,
    /// Scroll offset for viewport
    pub offset: usize,
    /// Total number of items
    pub len: usize,
}

impl ListState {
    pub fn new(len: usize) -> Self {
        Self {
            selected: 0,
            offset: 0,
            len,
        }
    }

    /// Move selection up
    pub fn up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            if self.selected < self.offset {
                self.offset = self.selected;
            }
        }
    }

    /// Move selection down
    pub fn down(&mut self) {
        if self.len > 0 && self.selected < self.len - 1 {
            self.selected += 1;
        }
    }

    /// Move selection up by a page
    pub fn page_up(&mut self, page_size: usize) {
        self.selected = self.selected.saturating_sub(page_size);
        if self.selected < self.offset {
            self.offset = self.selected;
        }
    }

    /// Move selection down by a page
    pub fn page_down(&mut self, page_size: usize) {
        if self.len > 0 {
            self.selected = (self.selected + page_size).min(self.len - 1);
        }
    }

    /// Jump to first item
    pub fn first(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    /// Jump to last item
    pub fn last(&mut self) {
        if self.len > 0 {
            self.selected = self.len - 1;
        }
    }

    /// Update offset to keep selected item visible
    pub fn scroll_into_view(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + visible_height {
            self.offset = self.selected + 1 - visible_height;
        }
    }

    /// Reset selection
    pub fn reset(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    /// Update length (e.g., when new results come in)
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.selected = 0;
            self.offset = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Within `threshold` rows of the last item (always true when empty)
    pub fn near_end(&self, threshold: usize) -> bool {
        self.selected + threshold >= self.len
    }
}

// =============================================================================
// View-Specific State
// =============================================================================

/// Catalog listing state
#[derive(Debug, Clone, Default)]
pub struct ShowsState {
    /// Shows from every page received so far, in page order
    pub shows: Vec<Show>,
    pub list: ListState,
    /// Next page to request (starts at 0)
    pub next_page: u32,
    /// Set once the catalog reports no further pages
    pub exhausted: bool,
    pub loading: LoadingState,
}

impl ShowsState {
    /// Request the next page unless one is in flight or the catalog ended
    pub fn request_more(&mut self) -> Option<Action> {
        if self.loading.is_loading() || self.exhausted {
            return None;
        }
        self.loading = LoadingState::Loading(Some("Loading shows...".into()));
        Some(Action::LoadShows {
            page: self.next_page,
        })
    }

    pub fn selected_show(&self) -> Option<&Show> {
        self.shows.get(self.list.selected)
    }

    fn apply(&mut self, page: u32, result: Result<Vec<Show>>) {
        self.loading = LoadingState::Idle;

        if page != self.next_page {
            debug!(page, expected = self.next_page, "Discarding out-of-order page");
            return;
        }

        match result {
            Ok(shows) if shows.is_empty() => {
                info!(page, "Catalog exhausted");
                self.exhausted = true;
            }
            Ok(shows) => {
                debug!(page, count = shows.len(), "Page loaded");
                self.shows.extend(shows);
                self.list.set_len(self.shows.len());
                self.next_page += 1;
            }
            Err(e) if TvMazeError::is_not_found(&e) => {
                info!(page, "Catalog exhausted");
                self.exhausted = true;
            }
            Err(e) => {
                warn!(page, error = %e, "Failed to load shows");
            }
        }
    }
}

/// Search view state
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Search query
    pub query: String,
    /// Cursor position in query (in characters)
    pub cursor: usize,
    /// Search results
    pub results: Vec<Show>,
    /// Results list state
    pub list: ListState,
    /// Loading state
    pub loading: LoadingState,
    /// Query the current results belong to
    pub last_query: Option<String>,
    /// Query of the search in flight
    pending: Option<String>,
}

impl SearchState {
    /// Byte offset of the cursor
    fn byte_index(&self) -> usize {
        self.query
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.query.len())
    }

    fn char_len(&self) -> usize {
        self.query.chars().count()
    }

    /// Insert character at cursor
    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index();
        self.query.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index();
            self.query.remove(idx);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let idx = self.byte_index();
            self.query.remove(idx);
        }
    }

    /// Move cursor left
    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right
    pub fn cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Clear query
    pub fn clear(&mut self) {
        self.query.clear();
        self.cursor = 0;
    }

    /// Set results and update list state
    pub fn set_results(&mut self, results: Vec<Show>) {
        self.list.reset();
        self.list.set_len(results.len());
        self.results = results;
        self.loading = LoadingState::Idle;
    }

    /// Get currently selected result
    pub fn selected_result(&self) -> Option<&Show> {
        self.results.get(self.list.selected)
    }

    /// Start a search for the current query.
    ///
    /// A blank query clears the results without a request; nothing is
    /// returned while a search is already in flight.
    pub fn submit(&mut self) -> Option<Action> {
        if self.loading.is_loading() {
            return None;
        }
        let query = self.query.trim().to_string();
        if query.is_empty() {
            self.set_results(Vec::new());
            self.last_query = None;
            return None;
        }
        self.loading = LoadingState::Loading(Some(format!("Searching \"{}\"...", query)));
        self.pending = Some(query.clone());
        Some(Action::Search { query })
    }

    fn apply(&mut self, query: String, result: Result<Vec<Show>>) {
        if self.pending.as_deref() != Some(query.as_str()) {
            debug!(%query, "Discarding stale search response");
            return;
        }
        self.pending = None;

        match result {
            Ok(shows) => {
                debug!(%query, count = shows.len(), "Search completed");
                self.set_results(shows);
                self.last_query = Some(query);
            }
            Err(e) => {
                warn!(%query, error = %e, "Search failed");
                self.loading = LoadingState::Idle;
            }
        }
    }
}

/// Which detail panel has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailFocus {
    #[default]
    Info,
    Seasons,
    Episodes,
}

impl DetailFocus {
    pub fn next(self) -> Self {
        match self {
            DetailFocus::Info => DetailFocus::Seasons,
            DetailFocus::Seasons => DetailFocus::Episodes,
            DetailFocus::Episodes => DetailFocus::Info,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            DetailFocus::Info => DetailFocus::Episodes,
            DetailFocus::Seasons => DetailFocus::Info,
            DetailFocus::Episodes => DetailFocus::Seasons,
        }
    }
}

/// Detail view state for one show
#[derive(Debug, Clone)]
pub struct DetailState {
    /// Show being displayed (the only navigation parameter)
    pub id: u64,
    pub show: Option<Show>,
    pub seasons: Vec<Season>,
    pub focus: DetailFocus,
    pub season_list: ListState,
    pub episode_list: ListState,
    /// Scroll of the info panel
    pub info_scroll: u16,
    /// Episode popup open
    pub popup: bool,
    pub loading: LoadingState,
}

impl DetailState {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            show: None,
            seasons: Vec::new(),
            focus: DetailFocus::Info,
            season_list: ListState::new(0),
            episode_list: ListState::new(0),
            info_scroll: 0,
            popup: false,
            loading: LoadingState::Loading(Some("Loading show...".into())),
        }
    }

    pub fn set_loaded(&mut self, show: Show, episodes: Vec<Episode>) {
        self.seasons = crate::models::seasons(episodes);
        self.season_list = ListState::new(self.seasons.len());
        self.show = Some(show);
        self.sync_episodes();
        self.loading = LoadingState::Idle;
    }

    pub fn selected_season(&self) -> Option<&Season> {
        self.seasons.get(self.season_list.selected)
    }

    pub fn selected_episode(&self) -> Option<&Episode> {
        self.selected_season()
            .and_then(|s| s.episodes.get(self.episode_list.selected))
    }

    /// Reset the episode list to the selected season
    fn sync_episodes(&mut self) {
        let len = self.selected_season().map_or(0, |s| s.episodes.len());
        self.episode_list = ListState::new(len);
    }

    fn up(&mut self) {
        match self.focus {
            DetailFocus::Info => self.info_scroll = self.info_scroll.saturating_sub(1),
            DetailFocus::Seasons => {
                let before = self.season_list.selected;
                self.season_list.up();
                if before != self.season_list.selected {
                    self.sync_episodes();
                }
            }
            DetailFocus::Episodes => self.episode_list.up(),
        }
    }

    fn down(&mut self) {
        match self.focus {
            DetailFocus::Info => self.info_scroll = self.info_scroll.saturating_add(1),
            DetailFocus::Seasons => {
                let before = self.season_list.selected;
                self.season_list.down();
                if before != self.season_list.selected {
                    self.sync_episodes();
                }
            }
            DetailFocus::Episodes => self.episode_list.down(),
        }
    }
}

/// Favorites view state (the list itself lives in the store)
#[derive(Debug, Clone, Default)]
pub struct FavoritesState {
    pub list: ListState,
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Current state/screen
    pub state: AppState,
    /// Navigation history stack
    pub nav_stack: Vec<AppState>,
    /// Whether the app is running
    pub running: bool,
    /// Current input mode
    pub input_mode: InputMode,
    /// Transient message shown in the status bar until the next key press
    pub status: Option<String>,

    // View-specific states
    pub pin: PinGate,
    pub shows: ShowsState,
    pub search: SearchState,
    pub detail: Option<DetailState>,
    pub favorites_view: FavoritesState,

    // Shared state
    pub favorites: FavoritesStore,
    /// Lock again when the terminal regains focus
    pub lock_on_focus: bool,

    /// Screen to return to after unlocking
    locked_from: Option<AppState>,
    /// Focus was lost since the last unlock
    backgrounded: bool,
    /// A rejected PIN is waiting to ring the bell
    bell: bool,
}

impl App {
    /// Create an unlocked app on the Shows screen
    pub fn new(favorites: FavoritesStore) -> Self {
        let favorites_view = FavoritesState {
            list: ListState::new(favorites.len()),
        };
        Self {
            state: AppState::Shows,
            nav_stack: Vec::new(),
            running: true,
            input_mode: InputMode::Normal,
            status: None,

            pin: PinGate::new(),
            shows: ShowsState::default(),
            search: SearchState::default(),
            detail: None,
            favorites_view,

            favorites,
            lock_on_focus: true,

            locked_from: None,
            backgrounded: false,
            bell: false,
        }
    }

    /// Work to do right after start-up (the first page, unless locked)
    pub fn start(&mut self) -> Option<Action> {
        if self.is_locked() {
            None
        } else {
            self.shows.request_more()
        }
    }

    /// Navigate to a new state, pushing current to stack
    pub fn navigate(&mut self, state: AppState) {
        if self.state != state {
            // Tab switches keep one step of history
            if state.tab_title().is_some() {
                self.nav_stack.clear();
            }
            self.nav_stack.push(self.state);
            self.state = state;
        }
        self.input_mode = InputMode::Normal;
        if state == AppState::Favorites {
            self.favorites_view.list.set_len(self.favorites.len());
        }
    }

    /// Go back to previous state
    pub fn back(&mut self) -> bool {
        if self.input_mode == InputMode::Editing {
            self.input_mode = InputMode::Normal;
            return true;
        }

        if let Some(detail) = self.detail.as_mut() {
            if self.state == AppState::Detail && detail.popup {
                detail.popup = false;
                return true;
            }
        }

        if let Some(prev) = self.nav_stack.pop() {
            self.state = prev;
            if prev == AppState::Favorites {
                self.favorites_view.list.set_len(self.favorites.len());
            }
            true
        } else {
            false
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
    }

    /// Focus search input
    pub fn focus_search(&mut self) {
        self.navigate(AppState::Search);
        self.input_mode = InputMode::Editing;
    }

    /// Open the detail screen for a show
    pub fn open_detail(&mut self, id: u64) -> Option<Action> {
        self.detail = Some(DetailState::new(id));
        self.navigate(AppState::Detail);
        Some(Action::LoadDetail { id })
    }

    // -------------------------------------------------------------------------
    // Lock
    // -------------------------------------------------------------------------

    pub fn is_locked(&self) -> bool {
        self.state == AppState::Pin
    }

    /// Show the PIN screen over whatever is displayed
    pub fn lock(&mut self) {
        if self.is_locked() {
            return;
        }
        info!("Locked");
        self.locked_from = Some(self.state);
        self.state = AppState::Pin;
        self.input_mode = InputMode::Normal;
        self.pin.clear();
    }

    fn unlock(&mut self) -> Option<Action> {
        info!("Unlocked");
        self.state = self.locked_from.take().unwrap_or(AppState::Shows);
        self.backgrounded = false;
        if self.shows.shows.is_empty() {
            self.shows.request_more()
        } else {
            None
        }
    }

    pub fn focus_lost(&mut self) {
        self.backgrounded = true;
    }

    pub fn focus_gained(&mut self) {
        if self.backgrounded && self.lock_on_focus {
            self.lock();
        }
        self.backgrounded = false;
    }

    /// True once after a rejected PIN
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell)
    }

    // -------------------------------------------------------------------------
    // Favorites
    // -------------------------------------------------------------------------

    /// Toggle membership and report the outcome in the status bar
    pub fn toggle_favorite(&mut self, show: &Show) {
        let before = self.favorites.is_favorite(show.id);
        let after = self.favorites.toggle(show);

        let msg = if before == after {
            format!("Could not update favorites for {}", show.name)
        } else if after {
            format!("{} added to favorites!", show.name)
        } else {
            format!("{} removed from favorites!", show.name)
        };
        self.set_status(msg);
        self.favorites_view.list.set_len(self.favorites.len());
    }

    // -------------------------------------------------------------------------
    // Async Results
    // -------------------------------------------------------------------------

    /// Apply the outcome of an [`Action`]
    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::ShowsLoaded { page, result } => self.shows.apply(page, result),
            AppEvent::SearchCompleted { query, result } => self.search.apply(query, result),
            AppEvent::DetailLoaded { id, result } => {
                let Some(detail) = self.detail.as_mut().filter(|d| d.id == id) else {
                    debug!(id, "Discarding stale detail response");
                    return;
                };
                match result {
                    Ok((show, episodes)) => {
                        debug!(id, episodes = episodes.len(), "Detail loaded");
                        detail.set_loaded(show, episodes);
                    }
                    Err(e) => {
                        warn!(id, error = %e, "Failed to load show");
                        detail.loading = LoadingState::Error("Could not load show".into());
                    }
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle keyboard event, returning work for the runner if any
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        self.status = None;

        // Global quit shortcut (Ctrl+C or q in normal mode)
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return None;
        }

        if self.is_locked() {
            return self.handle_pin_key(key);
        }

        if self.input_mode == InputMode::Editing {
            self.handle_editing_key(key)
        } else {
            self.handle_normal_key(key)
        }
    }

    fn handle_pin_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => match self.pin.push(c) {
                PinOutcome::Unlocked => return self.unlock(),
                PinOutcome::Rejected => {
                    debug!("PIN rejected");
                    self.bell = true;
                }
                PinOutcome::Pending => {}
            },
            KeyCode::Backspace => self.pin.backspace(),
            KeyCode::Esc => self.pin.clear(),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
        None
    }

    /// Handle keys in editing (text input) mode
    fn handle_editing_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                return self.search.submit();
            }
            KeyCode::Char(c) => self.search.insert(c),
            KeyCode::Backspace => self.search.backspace(),
            KeyCode::Delete => self.search.delete(),
            KeyCode::Left => self.search.cursor_left(),
            KeyCode::Right => self.search.cursor_right(),
            KeyCode::Home => self.search.cursor_home(),
            KeyCode::End => self.search.cursor_end(),
            _ => {}
        }
        None
    }

    /// Handle keys in normal navigation mode
    fn handle_normal_key(&mut self, key: KeyEvent) -> Option<Action> {
        // Global shortcuts
        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                return None;
            }
            KeyCode::Char('1') | KeyCode::Char('h') => {
                self.navigate(AppState::Shows);
                return if self.shows.shows.is_empty() {
                    self.shows.request_more()
                } else {
                    None
                };
            }
            KeyCode::Char('2') => {
                self.navigate(AppState::Search);
                return None;
            }
            KeyCode::Char('/') => {
                self.focus_search();
                return None;
            }
            KeyCode::Char('3') | KeyCode::Char('v') => {
                self.navigate(AppState::Favorites);
                return None;
            }
            KeyCode::Esc => {
                self.back();
                return None;
            }
            _ => {}
        }

        match self.state {
            AppState::Shows => self.handle_shows_key(key),
            AppState::Search => self.handle_search_key(key),
            AppState::Detail => self.handle_detail_key(key),
            AppState::Favorites => self.handle_favorites_key(key),
            AppState::Pin => None,
        }
    }

    fn handle_shows_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.shows.list.up(),
            KeyCode::Down | KeyCode::Char('j') => self.shows.list.down(),
            KeyCode::PageUp => self.shows.list.page_up(PAGE_SIZE),
            KeyCode::PageDown => self.shows.list.page_down(PAGE_SIZE),
            KeyCode::Home | KeyCode::Char('g') => self.shows.list.first(),
            KeyCode::End | KeyCode::Char('G') => self.shows.list.last(),
            KeyCode::Enter => {
                let id = self.shows.selected_show()?.id;
                return self.open_detail(id);
            }
            _ => return None,
        }

        // Infinite scroll
        if self.shows.list.near_end(LOAD_MORE_THRESHOLD) {
            self.shows.request_more()
        } else {
            None
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.search.list.up(),
            KeyCode::Down | KeyCode::Char('j') => self.search.list.down(),
            KeyCode::PageUp => self.search.list.page_up(PAGE_SIZE),
            KeyCode::PageDown => self.search.list.page_down(PAGE_SIZE),
            KeyCode::Home | KeyCode::Char('g') => self.search.list.first(),
            KeyCode::End | KeyCode::Char('G') => self.search.list.last(),
            KeyCode::Char('i') => self.input_mode = InputMode::Editing,
            KeyCode::Enter => {
                let id = self.search.selected_result()?.id;
                return self.open_detail(id);
            }
            _ => {}
        }
        None
    }

    fn handle_detail_key(&mut self, key: KeyEvent) -> Option<Action> {
        let detail = self.detail.as_mut()?;

        if detail.popup {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                detail.popup = false;
            }
            return None;
        }

        match key.code {
            KeyCode::Tab => detail.focus = detail.focus.next(),
            KeyCode::BackTab => detail.focus = detail.focus.prev(),
            KeyCode::Up | KeyCode::Char('k') => detail.up(),
            KeyCode::Down | KeyCode::Char('j') => detail.down(),
            KeyCode::Enter => match detail.focus {
                DetailFocus::Info => {}
                DetailFocus::Seasons => detail.focus = DetailFocus::Episodes,
                DetailFocus::Episodes => detail.popup = detail.selected_episode().is_some(),
            },
            KeyCode::Char('f') => {
                let show = detail.show.clone()?;
                self.toggle_favorite(&show);
            }
            KeyCode::Char('r') if detail.loading.is_error() => {
                let id = detail.id;
                detail.loading = LoadingState::Loading(Some("Loading show...".into()));
                return Some(Action::LoadDetail { id });
            }
            _ => {}
        }
        None
    }

    fn handle_favorites_key(&mut self, key: KeyEvent) -> Option<Action> {
        let list = &mut self.favorites_view.list;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => list.up(),
            KeyCode::Down | KeyCode::Char('j') => list.down(),
            KeyCode::Home | KeyCode::Char('g') => list.first(),
            KeyCode::End | KeyCode::Char('G') => list.last(),
            KeyCode::Enter => {
                let id = self.favorites.favorites().get(list.selected)?.id;
                return self.open_detail(id);
            }
            KeyCode::Char('f') | KeyCode::Char('x') => {
                let show = self.favorites.favorites().get(list.selected)?.clone();
                self.toggle_favorite(&show);
            }
            _ => {}
        }
        None
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
