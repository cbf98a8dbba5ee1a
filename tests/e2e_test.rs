//! End-to-end flow tests for mazetui
//!
//! Drives the app with key presses, runs the resulting actions against a
//! mock catalog and feeds the outcomes back, the way the event loop does.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mockito::{Matcher, Mock, Server, ServerGuard};

use mazetui::app::{DetailFocus, InputMode, LOAD_MORE_THRESHOLD};
use mazetui::pin::PIN;
use mazetui::tui::perform;
use mazetui::{Action, App, AppState, FavoritesStore, FileStore, MemoryStore, TvMazeClient};

// =============================================================================
// Mock Catalog
// =============================================================================

fn page_body(ids: std::ops::Range<u64>) -> String {
    let shows: Vec<serde_json::Value> = ids
        .map(|id| {
            serde_json::json!({
                "id": id,
                "name": format!("Show {}", id),
                "genres": ["Drama"],
                "schedule": {"time": "20:00", "days": ["Monday"]},
                "image": null,
                "summary": format!("<p>Summary of show {}.</p>", id)
            })
        })
        .collect();
    serde_json::Value::Array(shows).to_string()
}

async fn mock_page(server: &mut ServerGuard, page: u32, status: usize, body: String) -> Mock {
    server
        .mock("GET", "/shows")
        .match_query(Matcher::UrlEncoded("page".into(), page.to_string()))
        .with_status(status)
        .with_body(body)
        .create_async()
        .await
}

async fn mock_detail(server: &mut ServerGuard, id: u64) -> (Mock, Mock) {
    let show = server
        .mock("GET", format!("/shows/{}", id).as_str())
        .with_status(200)
        .with_body(
            serde_json::json!({
                "id": id,
                "name": format!("Show {}", id),
                "genres": ["Drama"],
                "schedule": {"time": "20:00", "days": ["Monday"]},
                "summary": "<p>Detailed.</p>"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let episodes = server
        .mock("GET", format!("/shows/{}/episodes", id).as_str())
        .with_status(200)
        .with_body(
            r#"[
                {"id": 1001, "name": "Pilot", "season": 1, "number": 1},
                {"id": 1002, "name": "Second", "season": 1, "number": 2},
                {"id": 2001, "name": "Return", "season": 2, "number": 1}
            ]"#,
        )
        .create_async()
        .await;

    (show, episodes)
}

// =============================================================================
// Helpers
// =============================================================================

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

/// Feed a key to the app and run whatever it asks for
async fn press(app: &mut App, client: &TvMazeClient, event: KeyEvent) {
    if let Some(action) = app.handle_key(event) {
        run(app, client, action).await;
    }
}

async fn run(app: &mut App, client: &TvMazeClient, action: Action) {
    let event = perform(client, action).await;
    app.apply(event);
}

async fn enter_pin(app: &mut App, client: &TvMazeClient, pin: &str) {
    for c in pin.chars() {
        press(app, client, char_key(c)).await;
    }
}

fn memory_app() -> App {
    App::new(FavoritesStore::load(MemoryStore::new()))
}

// =============================================================================
// Lock Screen
// =============================================================================

#[tokio::test]
async fn test_unlock_loads_first_page() {
    let mut server = Server::new_async().await;
    let page0 = mock_page(&mut server, 0, 200, page_body(1..21)).await;
    let client = TvMazeClient::with_base_url(server.url());

    let mut app = memory_app();
    app.lock();
    assert!(app.start().is_none(), "nothing loads behind the lock");

    enter_pin(&mut app, &client, "9999").await;
    assert!(app.is_locked());
    assert!(app.take_bell());
    assert!(!app.take_bell());

    enter_pin(&mut app, &client, PIN).await;

    page0.assert_async().await;
    assert_eq!(app.state, AppState::Shows);
    assert_eq!(app.shows.shows.len(), 20);
    assert_eq!(app.shows.next_page, 1);
}

#[tokio::test]
async fn test_focus_regain_locks_and_returns_to_screen() {
    let mut server = Server::new_async().await;
    let _page0 = mock_page(&mut server, 0, 200, page_body(1..21)).await;
    let client = TvMazeClient::with_base_url(server.url());

    let mut app = memory_app();
    let action = app.start().unwrap();
    run(&mut app, &client, action).await;
    press(&mut app, &client, char_key('3')).await;
    assert_eq!(app.state, AppState::Favorites);

    app.focus_lost();
    app.focus_gained();
    assert!(app.is_locked());

    enter_pin(&mut app, &client, PIN).await;
    assert_eq!(app.state, AppState::Favorites);
    // Already loaded; unlocking doesn't refetch
    assert_eq!(app.shows.next_page, 1);
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn test_scrolling_loads_next_page_until_exhausted() {
    let mut server = Server::new_async().await;
    let page0 = mock_page(&mut server, 0, 200, page_body(1..21)).await;
    let page1 = mock_page(&mut server, 1, 200, page_body(21..31)).await;
    let page2 = mock_page(&mut server, 2, 404, String::new()).await;
    let client = TvMazeClient::with_base_url(server.url());

    let mut app = memory_app();
    let action = app.start().unwrap();
    run(&mut app, &client, action).await;

    // Move until within the threshold of the end
    let steps = 20 - LOAD_MORE_THRESHOLD;
    for _ in 0..steps {
        press(&mut app, &client, key(KeyCode::Down)).await;
    }
    page1.assert_async().await;
    assert_eq!(app.shows.shows.len(), 30);
    assert_eq!(app.shows.list.selected, steps);

    // End of the list hits the 404 page
    press(&mut app, &client, key(KeyCode::End)).await;
    page2.assert_async().await;
    assert!(app.shows.exhausted);
    assert_eq!(app.shows.shows.len(), 30);

    // Exhausted: no more requests
    press(&mut app, &client, key(KeyCode::Up)).await;
    press(&mut app, &client, key(KeyCode::Down)).await;
    page0.assert_async().await;
    page2.assert_async().await;
}

#[tokio::test]
async fn test_failed_page_can_be_retried() {
    let mut server = Server::new_async().await;
    let failing = mock_page(&mut server, 0, 500, String::new()).await;
    let client = TvMazeClient::with_base_url(server.url());

    let mut app = memory_app();
    let action = app.start().unwrap();
    run(&mut app, &client, action).await;
    failing.assert_async().await;
    assert!(app.shows.shows.is_empty());
    assert!(!app.shows.exhausted);

    failing.remove_async().await;
    let _ok = mock_page(&mut server, 0, 200, page_body(1..6)).await;

    // Re-entering the tab asks again
    press(&mut app, &client, char_key('1')).await;
    assert_eq!(app.shows.shows.len(), 5);
}

// =============================================================================
// Detail & Favorites
// =============================================================================

#[tokio::test]
async fn test_open_detail_and_favorite_persists() {
    let mut server = Server::new_async().await;
    let _page0 = mock_page(&mut server, 0, 200, page_body(1..21)).await;
    let (show_mock, episodes_mock) = mock_detail(&mut server, 2).await;
    let client = TvMazeClient::with_base_url(server.url());
    let dir = tempfile::tempdir().unwrap();

    let mut app = App::new(FavoritesStore::load(FileStore::new(dir.path())));
    let action = app.start().unwrap();
    run(&mut app, &client, action).await;

    press(&mut app, &client, key(KeyCode::Down)).await;
    press(&mut app, &client, key(KeyCode::Enter)).await;
    show_mock.assert_async().await;
    episodes_mock.assert_async().await;

    assert_eq!(app.state, AppState::Detail);
    let detail = app.detail.as_ref().unwrap();
    assert_eq!(detail.show.as_ref().unwrap().name, "Show 2");
    assert_eq!(detail.seasons.len(), 2);
    assert_eq!(detail.seasons[0].episodes.len(), 2);

    press(&mut app, &client, char_key('f')).await;
    assert!(app.favorites.is_favorite(2));
    assert_eq!(app.status.as_deref(), Some("Show 2 added to favorites!"));

    // A fresh store over the same directory sees it
    let reloaded = FavoritesStore::load(FileStore::new(dir.path()));
    assert!(reloaded.is_favorite(2));

    // Back to the list, then over to favorites
    press(&mut app, &client, key(KeyCode::Esc)).await;
    assert_eq!(app.state, AppState::Shows);
    press(&mut app, &client, char_key('3')).await;
    assert_eq!(app.favorites.favorites()[0].id, 2);

    // Remove from the favorites screen
    press(&mut app, &client, char_key('x')).await;
    assert!(app.favorites.is_empty());
    assert_eq!(app.status.as_deref(), Some("Show 2 removed from favorites!"));
}

#[tokio::test]
async fn test_episode_popup_flow() {
    let mut server = Server::new_async().await;
    let _detail = mock_detail(&mut server, 7).await;
    let client = TvMazeClient::with_base_url(server.url());

    let mut app = memory_app();
    let action = app.open_detail(7).unwrap();
    run(&mut app, &client, action).await;

    press(&mut app, &client, key(KeyCode::Tab)).await;
    press(&mut app, &client, key(KeyCode::Down)).await;
    press(&mut app, &client, key(KeyCode::Enter)).await;

    let detail = app.detail.as_ref().unwrap();
    assert_eq!(detail.focus, DetailFocus::Episodes);
    assert_eq!(detail.selected_season().unwrap().number, 2);

    press(&mut app, &client, key(KeyCode::Enter)).await;
    let detail = app.detail.as_ref().unwrap();
    assert!(detail.popup);
    assert_eq!(detail.selected_episode().unwrap().name, "Return");

    // Esc closes the popup before leaving the screen
    press(&mut app, &client, key(KeyCode::Esc)).await;
    assert!(!app.detail.as_ref().unwrap().popup);
    assert_eq!(app.state, AppState::Detail);
}

#[tokio::test]
async fn test_missing_show_shows_error_then_retry() {
    let mut server = Server::new_async().await;
    let _show = server
        .mock("GET", "/shows/5")
        .with_status(404)
        .create_async()
        .await;
    let _episodes = server
        .mock("GET", "/shows/5/episodes")
        .with_status(404)
        .create_async()
        .await;
    let client = TvMazeClient::with_base_url(server.url());

    let mut app = memory_app();
    let action = app.open_detail(5).unwrap();
    run(&mut app, &client, action).await;

    let detail = app.detail.as_ref().unwrap();
    assert!(detail.show.is_none());
    assert!(detail.loading.is_error());

    let retry = app.handle_key(char_key('r'));
    assert_eq!(retry, Some(Action::LoadDetail { id: 5 }));
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_flow() {
    let mut server = Server::new_async().await;
    let search = server
        .mock("GET", "/search/shows")
        .match_query(Matcher::UrlEncoded("q".into(), "girls".into()))
        .with_status(200)
        .with_body(
            r#"[
                {"score": 0.9, "show": {"id": 139, "name": "Girls", "genres": ["Drama"]}},
                {"score": 0.5, "show": {"id": 23542, "name": "Good Girls", "genres": []}}
            ]"#,
        )
        .create_async()
        .await;
    let (show_mock, _episodes) = mock_detail(&mut server, 23542).await;
    let client = TvMazeClient::with_base_url(server.url());

    let mut app = memory_app();
    press(&mut app, &client, char_key('/')).await;
    assert_eq!(app.state, AppState::Search);
    assert_eq!(app.input_mode, InputMode::Editing);

    for c in "girls".chars() {
        press(&mut app, &client, char_key(c)).await;
    }
    press(&mut app, &client, key(KeyCode::Enter)).await;

    search.assert_async().await;
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.search.results.len(), 2);

    press(&mut app, &client, key(KeyCode::Down)).await;
    press(&mut app, &client, key(KeyCode::Enter)).await;
    show_mock.assert_async().await;
    assert_eq!(app.detail.as_ref().unwrap().id, 23542);

    // Back returns to the results, not the listing
    press(&mut app, &client, key(KeyCode::Esc)).await;
    assert_eq!(app.state, AppState::Search);
    assert_eq!(app.search.results.len(), 2);
}

#[tokio::test]
async fn test_blank_search_sends_nothing() {
    let mut server = Server::new_async().await;
    let search = server
        .mock("GET", "/search/shows")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let client = TvMazeClient::with_base_url(server.url());

    let mut app = memory_app();
    press(&mut app, &client, char_key('/')).await;
    press(&mut app, &client, char_key(' ')).await;
    press(&mut app, &client, key(KeyCode::Enter)).await;

    search.assert_async().await;
    assert!(app.search.results.is_empty());
}
