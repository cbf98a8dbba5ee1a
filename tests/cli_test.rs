//! CLI tests for mazetui
//!
//! Argument parsing and the command handlers' exit codes, run against a
//! mock catalog with favorites in a temporary directory.

use clap::Parser;
use mockito::{Matcher, Server, ServerGuard};
use tempfile::TempDir;

use mazetui::cli::{
    Cli, Command, EpisodesCmd, ExitCode, FavoritesAction, FavoritesCmd, InfoCmd, Output,
    SearchCmd, ShowsCmd,
};
use mazetui::commands::{self, Context};
use mazetui::config::Config;
use mazetui::{FavoritesStore, FileStore, TvMazeClient};

// =============================================================================
// Helpers
// =============================================================================

fn output() -> Output {
    Output {
        json: true,
        quiet: true,
    }
}

fn context(server: &ServerGuard, dir: &TempDir) -> Context {
    Context {
        client: TvMazeClient::with_base_url(server.url()),
        data_dir: Some(dir.path().to_path_buf()),
    }
}

async fn mock_show(server: &mut ServerGuard, id: u64, name: &str) -> mockito::Mock {
    server
        .mock("GET", format!("/shows/{}", id).as_str())
        .with_status(200)
        .with_body(format!(r#"{{"id": {}, "name": "{}", "genres": ["Drama"]}}"#, id, name))
        .create_async()
        .await
}

async fn mock_episodes(server: &mut ServerGuard, id: u64) -> mockito::Mock {
    server
        .mock("GET", format!("/shows/{}/episodes", id).as_str())
        .with_status(200)
        .with_body(
            r#"[
                {"id": 1, "name": "Winter Is Coming", "season": 1, "number": 1},
                {"id": 2, "name": "The Kingsroad", "season": 1, "number": 2},
                {"id": 11, "name": "The North Remembers", "season": 2, "number": 1}
            ]"#,
        )
        .create_async()
        .await
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn test_parse_shows_defaults() {
    let cli = Cli::parse_from(["mazetui", "shows"]);
    match cli.command {
        Some(Command::Shows(cmd)) => {
            assert_eq!(cmd.page, 0);
            assert_eq!(cmd.limit, None);
        }
        _ => panic!("Expected Shows command"),
    }
}

#[test]
fn test_parse_aliases() {
    let cli = Cli::parse_from(["mazetui", "ls", "-p", "3", "-l", "5"]);
    assert!(matches!(
        cli.command,
        Some(Command::Shows(ShowsCmd {
            page: 3,
            limit: Some(5)
        }))
    ));

    let cli = Cli::parse_from(["mazetui", "ep", "82", "--season", "2"]);
    assert!(matches!(
        cli.command,
        Some(Command::Episodes(EpisodesCmd {
            id: 82,
            season: Some(2)
        }))
    ));

    let cli = Cli::parse_from(["mazetui", "fav", "check", "82"]);
    match cli.command {
        Some(Command::Favorites(cmd)) => assert_eq!(cmd.action, FavoritesAction::Check { id: 82 }),
        _ => panic!("Expected Favorites command"),
    }
}

#[test]
fn test_parse_rejects_missing_arguments() {
    assert!(Cli::try_parse_from(["mazetui", "search"]).is_err());
    assert!(Cli::try_parse_from(["mazetui", "info"]).is_err());
    assert!(Cli::try_parse_from(["mazetui", "favorites"]).is_err());
    assert!(Cli::try_parse_from(["mazetui", "episodes", "-1"]).is_err());
}

// =============================================================================
// Catalog Commands
// =============================================================================

#[tokio::test]
async fn test_shows_cmd_success() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/shows")
        .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
        .with_status(200)
        .with_body(r#"[{"id": 250, "name": "Kirby Buckets"}, {"id": 251, "name": "Bitten"}]"#)
        .create_async()
        .await;
    let dir = tempfile::tempdir().unwrap();

    let cmd = ShowsCmd {
        page: 1,
        limit: Some(1),
    };
    let code = commands::shows_cmd(cmd, &context(&server, &dir), &output()).await;

    mock.assert_async().await;
    assert_eq!(code, ExitCode::Success);
}

#[tokio::test]
async fn test_shows_cmd_past_end_is_not_found() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/shows")
        .match_query(Matcher::Any)
        .with_status(404)
        .create_async()
        .await;
    let dir = tempfile::tempdir().unwrap();

    let cmd = ShowsCmd {
        page: 900,
        limit: None,
    };
    let code = commands::shows_cmd(cmd, &context(&server, &dir), &output()).await;
    assert_eq!(code, ExitCode::NotFound);
}

#[tokio::test]
async fn test_search_cmd() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/search/shows")
        .match_query(Matcher::UrlEncoded("q".into(), "thrones".into()))
        .with_status(200)
        .with_body(r#"[{"score": 1.0, "show": {"id": 82, "name": "Game of Thrones"}}]"#)
        .create_async()
        .await;
    let dir = tempfile::tempdir().unwrap();

    let cmd = SearchCmd {
        query: "  thrones ".into(),
        limit: 10,
    };
    let code = commands::search_cmd(cmd, &context(&server, &dir), &output()).await;

    mock.assert_async().await;
    assert_eq!(code, ExitCode::Success);
}

#[tokio::test]
async fn test_search_cmd_blank_query() {
    let server = Server::new_async().await;
    let dir = tempfile::tempdir().unwrap();

    let cmd = SearchCmd {
        query: "   ".into(),
        limit: 10,
    };
    let code = commands::search_cmd(cmd, &context(&server, &dir), &output()).await;
    assert_eq!(code, ExitCode::InvalidArgs);
}

#[tokio::test]
async fn test_search_cmd_server_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/search/shows")
        .match_query(Matcher::Any)
        .with_status(502)
        .create_async()
        .await;
    let dir = tempfile::tempdir().unwrap();

    let cmd = SearchCmd {
        query: "girls".into(),
        limit: 10,
    };
    let code = commands::search_cmd(cmd, &context(&server, &dir), &output()).await;
    assert_eq!(code, ExitCode::NetworkError);
}

#[tokio::test]
async fn test_info_cmd() {
    let mut server = Server::new_async().await;
    let show = mock_show(&mut server, 82, "Game of Thrones").await;
    let episodes = mock_episodes(&mut server, 82).await;
    let dir = tempfile::tempdir().unwrap();

    let code = commands::info_cmd(InfoCmd { id: 82 }, &context(&server, &dir), &output()).await;

    show.assert_async().await;
    episodes.assert_async().await;
    assert_eq!(code, ExitCode::Success);
}

#[tokio::test]
async fn test_info_cmd_unknown_show() {
    let mut server = Server::new_async().await;
    let _show = server
        .mock("GET", "/shows/999999")
        .with_status(404)
        .create_async()
        .await;
    let _episodes = server
        .mock("GET", "/shows/999999/episodes")
        .with_status(404)
        .create_async()
        .await;
    let dir = tempfile::tempdir().unwrap();

    let code =
        commands::info_cmd(InfoCmd { id: 999_999 }, &context(&server, &dir), &output()).await;
    assert_eq!(code, ExitCode::NotFound);
}

#[tokio::test]
async fn test_episodes_cmd_season_filter() {
    let mut server = Server::new_async().await;
    let _episodes = mock_episodes(&mut server, 82).await;
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(&server, &dir);

    let cmd = EpisodesCmd {
        id: 82,
        season: Some(2),
    };
    assert_eq!(
        commands::episodes_cmd(cmd, &ctx, &output()).await,
        ExitCode::Success
    );

    let cmd = EpisodesCmd {
        id: 82,
        season: Some(7),
    };
    assert_eq!(
        commands::episodes_cmd(cmd, &ctx, &output()).await,
        ExitCode::NotFound
    );
}

#[tokio::test]
async fn test_network_unreachable() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = Context {
        client: TvMazeClient::with_base_url("http://127.0.0.1:9"),
        data_dir: Some(dir.path().to_path_buf()),
    };

    let code = commands::info_cmd(InfoCmd { id: 1 }, &ctx, &output()).await;
    assert_eq!(code, ExitCode::NetworkError);
}

// =============================================================================
// Favorites Command
// =============================================================================

#[tokio::test]
async fn test_favorites_toggle_round_trip() {
    let mut server = Server::new_async().await;
    // Only adding needs the catalog
    let show = mock_show(&mut server, 82, "Game of Thrones").await;
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(&server, &dir);

    let toggle = || FavoritesCmd {
        action: FavoritesAction::Toggle { id: 82 },
    };

    assert_eq!(
        commands::favorites_cmd(toggle(), &ctx, &output()).await,
        ExitCode::Success
    );
    assert!(FavoritesStore::load(FileStore::new(dir.path())).is_favorite(82));

    assert_eq!(
        commands::favorites_cmd(toggle(), &ctx, &output()).await,
        ExitCode::Success
    );
    assert!(!FavoritesStore::load(FileStore::new(dir.path())).is_favorite(82));

    show.assert_async().await;
}

#[tokio::test]
async fn test_favorites_toggle_unknown_show() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/shows/5")
        .with_status(404)
        .create_async()
        .await;
    let dir = tempfile::tempdir().unwrap();

    let cmd = FavoritesCmd {
        action: FavoritesAction::Toggle { id: 5 },
    };
    let code = commands::favorites_cmd(cmd, &context(&server, &dir), &output()).await;

    assert_eq!(code, ExitCode::NotFound);
    assert!(FavoritesStore::load(FileStore::new(dir.path())).is_empty());
}

#[tokio::test]
async fn test_favorites_toggle_storage_failure() {
    let mut server = Server::new_async().await;
    let _show = mock_show(&mut server, 82, "Game of Thrones").await;
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("data");
    std::fs::write(&blocker, "").unwrap();

    let ctx = Context {
        client: TvMazeClient::with_base_url(server.url()),
        data_dir: Some(blocker),
    };
    let cmd = FavoritesCmd {
        action: FavoritesAction::Toggle { id: 82 },
    };
    let code = commands::favorites_cmd(cmd, &ctx, &output()).await;
    assert_eq!(code, ExitCode::StorageError);
}

#[tokio::test]
async fn test_favorites_list_and_check() {
    let server = Server::new_async().await;
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(&server, &dir);

    let list = FavoritesCmd {
        action: FavoritesAction::List,
    };
    assert_eq!(
        commands::favorites_cmd(list, &ctx, &output()).await,
        ExitCode::Success
    );

    let check = FavoritesCmd {
        action: FavoritesAction::Check { id: 82 },
    };
    assert_eq!(
        commands::favorites_cmd(check, &ctx, &output()).await,
        ExitCode::Success
    );
}

// =============================================================================
// Config
// =============================================================================

#[test]
fn test_context_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        api_url: Some("http://localhost:4010/".into()),
        data_dir: Some(dir.path().to_path_buf()),
        ..Config::default()
    };

    let ctx = Context::from_config(&config);
    assert_eq!(ctx.data_dir.as_deref(), Some(dir.path()));
    // Environment override wins when set by the caller's shell
    if std::env::var(mazetui::config::API_URL_ENV).is_err() {
        assert_eq!(ctx.client.base_url(), "http://localhost:4010");
    }
}
