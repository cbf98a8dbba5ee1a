//! API clients for external services
//!
//! - TVMaze: show listing, search, details and episodes

pub mod tvmaze;

pub use tvmaze::{TvMazeClient, TvMazeError};
