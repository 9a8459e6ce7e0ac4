//! Player registration, match results and round pairing for a Swiss-system
//! tournament kept in SQLite.

pub mod config;
pub mod data;
pub mod db;
pub mod error;
pub mod pairing;
pub mod render;
pub mod repository;

pub use config::Config;
pub use data::{Match, Pairing, Player, Standing};
pub use error::{Result, TournamentError};
pub use pairing::{pair, swiss_pairings};
pub use repository::{SqliteRepository, StandingsProvider, TournamentRepository};
