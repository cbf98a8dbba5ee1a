//! Integration tests for mazetui
//!
//! Tests are organized by component:
//! - tvmaze_test: TVMaze client tests (listing, search, details, errors)
//! - favorites_test: Favorites persistence on disk
//! - ui_test: Full-frame rendering of each screen
//! - cli_test: Argument parsing and command exit codes
//! - e2e_test: End-to-end flows (Unlock -> Shows -> Detail -> Favorites, Search)

// Note: Each test file is a separate integration test crate
// Tests are run individually by cargo, not via mod.rs
