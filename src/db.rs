use std::path::Path;

use log::debug;
use rusqlite::{Connection, OpenFlags};

use crate::error::{Result, TournamentError};

pub fn open(path: &Path) -> Result<Connection> {
	let conn = Connection::open_with_flags(
		path,
		OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE,
	)
	.map_err(|source| TournamentError::ConnectionFailure {
		path: path.to_path_buf(),
		source,
	})?;
	debug!("opened tournament database at {}", path.display());

	prepare(conn)
}

pub fn open_in_memory() -> Result<Connection> {
	let conn = Connection::open_in_memory().map_err(|source| {
		TournamentError::ConnectionFailure {
			path: ":memory:".into(),
			source,
		}
	})?;

	prepare(conn)
}

fn prepare(mut conn: Connection) -> Result<Connection> {
	conn.execute_batch("PRAGMA foreign_keys = ON;")?;
	create_schema(&mut conn)?;
	Ok(conn)
}

/// Creates the tables and the `standings` view if they are missing.
///
/// Players tied on wins are ranked by id, i.e. registration order.
pub fn create_schema(conn: &mut Connection) -> Result<()> {
	let tx = conn.transaction()?;

	tx.execute(
		"CREATE TABLE IF NOT EXISTS players (
			id   INTEGER PRIMARY KEY AUTOINCREMENT,
			name TEXT    NOT NULL
		);",
		[],
	)?;

	tx.execute(
		"CREATE TABLE IF NOT EXISTS matches (
			id     INTEGER PRIMARY KEY AUTOINCREMENT,
			winner INTEGER REFERENCES players (id)
						   NOT NULL,
			loser  INTEGER REFERENCES players (id)
						   NOT NULL
		);",
		[],
	)?;

	tx.execute(
		"CREATE VIEW IF NOT EXISTS standings AS
			SELECT p.id,
				   p.name,
				   (SELECT COUNT(*) FROM matches w WHERE w.winner = p.id) AS wins,
				   (SELECT COUNT(*) FROM matches m
					 WHERE m.winner = p.id OR m.loser = p.id)            AS matches
			  FROM players p
			 ORDER BY wins DESC, p.id ASC;",
		[],
	)?;

	tx.commit()?;
	Ok(())
}
