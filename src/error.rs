use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the tournament store and the pairing engine.
#[derive(Debug, Error)]
pub enum TournamentError {
	#[error("could not open tournament database at {path}: {source}")]
	ConnectionFailure {
		path: PathBuf,
		#[source]
		source: rusqlite::Error,
	},

	#[error("match references an unknown player (winner {winner}, loser {loser})")]
	InvalidReference { winner: i64, loser: i64 },

	#[error("cannot pair an odd number of players ({0})")]
	OddPlayerCount(usize),

	#[error("player {0} cannot play against themselves")]
	SelfMatch(i64),

	#[error("database error: {0}")]
	Store(#[from] rusqlite::Error),

	#[error("csv error: {0}")]
	Csv(#[from] csv::Error),

	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TournamentError>;
