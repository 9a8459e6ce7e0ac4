//! Storage operations for players and matches.
//!
//! The pairing engine only needs a [`StandingsProvider`], so it can be driven
//! from a plain list of standings as easily as from the database.

use std::io::Read;

use log::{debug, info};
use rusqlite::{params, Connection, ErrorCode};

use crate::config::Config;
use crate::data::{Match, Player, Standing};
use crate::db;
use crate::error::{Result, TournamentError};

/// Source of standings ranked by wins, highest first.
pub trait StandingsProvider {
	fn player_standings(&self) -> Result<Vec<Standing>>;
}

impl StandingsProvider for [Standing] {
	fn player_standings(&self) -> Result<Vec<Standing>> {
		Ok(self.to_vec())
	}
}

impl StandingsProvider for Vec<Standing> {
	fn player_standings(&self) -> Result<Vec<Standing>> {
		self.as_slice().player_standings()
	}
}

pub trait TournamentRepository: StandingsProvider {
	/// Removes every recorded match, returning how many were removed.
	fn delete_matches(&self) -> Result<usize>;

	/// Removes every player along with the matches they played, returning
	/// how many players were removed.
	fn delete_players(&self) -> Result<usize>;

	fn count_players(&self) -> Result<usize>;

	/// Registers a player and returns the id the store assigned. Names need
	/// not be unique.
	fn register_player(&self, name: &str) -> Result<i64>;

	/// Records that `winner` beat `loser`.
	fn report_match(&self, winner: i64, loser: i64) -> Result<()>;

	fn players(&self) -> Result<Vec<Player>>;

	fn matches(&self) -> Result<Vec<Match>>;
}

pub struct SqliteRepository {
	conn: Connection,
}

impl SqliteRepository {
	pub fn open(config: &Config) -> Result<Self> {
		Ok(SqliteRepository {
			conn: db::open(&config.database_path)?,
		})
	}

	pub fn in_memory() -> Result<Self> {
		Ok(SqliteRepository {
			conn: db::open_in_memory()?,
		})
	}
}

impl StandingsProvider for SqliteRepository {
	fn player_standings(&self) -> Result<Vec<Standing>> {
		let mut stmt = self
			.conn
			.prepare(
				"SELECT id, name, wins, matches FROM standings
				 ORDER BY wins DESC, id ASC;",
			)?;

		let standings = stmt
			.query_map([], |row| {
				Ok(Standing {
					id: row.get(0)?,
					name: row.get(1)?,
					wins: row.get(2)?,
					matches: row.get(3)?,
				})
			})?
			.collect::<rusqlite::Result<Vec<_>>>()?;

		Ok(standings)
	}
}

impl TournamentRepository for SqliteRepository {
	fn delete_matches(&self) -> Result<usize> {
		let removed = self.conn.execute("DELETE FROM matches;", [])?;
		info!("removed {removed} matches");

		Ok(removed)
	}

	fn delete_players(&self) -> Result<usize> {
		let tx = self.conn.unchecked_transaction()?;
		let matches = tx.execute("DELETE FROM matches;", [])?;
		let removed = tx.execute("DELETE FROM players;", [])?;
		tx.commit()?;
		info!("removed {removed} players and {matches} matches");

		Ok(removed)
	}

	fn count_players(&self) -> Result<usize> {
		let count: i64 = self
			.conn
			.query_row("SELECT COUNT(*) FROM players;", [], |row| row.get(0))?;

		Ok(count as usize)
	}

	fn register_player(&self, name: &str) -> Result<i64> {
		let mut stmt = self.conn.prepare("INSERT INTO players (name) VALUES (?1);")?;
		stmt.execute([name])?;

		let id = self.conn.last_insert_rowid();
		debug!("registered player {id} ({name})");

		Ok(id)
	}

	fn report_match(&self, winner: i64, loser: i64) -> Result<()> {
		if winner == loser {
			return Err(TournamentError::SelfMatch(winner));
		}

		let mut stmt = self
			.conn
			.prepare("INSERT INTO matches (winner, loser) VALUES (?1, ?2);")?;

		match stmt.execute(params![winner, loser]) {
			Ok(_) => {
				debug!("recorded match: {winner} beat {loser}");
				Ok(())
			}
			Err(rusqlite::Error::SqliteFailure(err, _))
				if err.code == ErrorCode::ConstraintViolation =>
			{
				Err(TournamentError::InvalidReference { winner, loser })
			}
			Err(err) => Err(err.into()),
		}
	}

	fn players(&self) -> Result<Vec<Player>> {
		let mut stmt = self.conn.prepare("SELECT id, name FROM players ORDER BY id;")?;

		let players = stmt
			.query_map([], |row| {
				Ok(Player {
					id: row.get(0)?,
					name: row.get(1)?,
				})
			})?
			.collect::<rusqlite::Result<Vec<_>>>()?;

		Ok(players)
	}

	fn matches(&self) -> Result<Vec<Match>> {
		let mut stmt = self
			.conn
			.prepare("SELECT winner, loser FROM matches ORDER BY id;")?;

		let matches = stmt
			.query_map([], |row| {
				Ok(Match {
					winner: row.get(0)?,
					loser: row.get(1)?,
				})
			})?
			.collect::<rusqlite::Result<Vec<_>>>()?;

		Ok(matches)
	}
}

/// Reports every row of a CSV file with a `winner,loser` header, stopping at
/// the first row that fails. Returns how many matches were recorded.
pub fn load_matches<R: Read>(repo: &impl TournamentRepository, input: R) -> Result<usize> {
	let mut reader = csv::Reader::from_reader(input);
	let mut count = 0;

	for record in reader.deserialize() {
		let result: Match = record?;
		repo.report_match(result.winner, result.loser)?;
		count += 1;
	}

	Ok(count)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn repo_with(names: &[&str]) -> (SqliteRepository, Vec<i64>) {
		let repo = SqliteRepository::in_memory().unwrap();
		let ids = names
			.iter()
			.map(|name| repo.register_player(name).unwrap())
			.collect();
		(repo, ids)
	}

	#[test]
	fn new_players_have_empty_records() {
		let (repo, ids) = repo_with(&["Melpomene Murray", "Randy Schwartz"]);

		let standings = repo.player_standings().unwrap();
		assert_eq!(standings.len(), 2);
		assert_eq!(standings[0], Standing::new(ids[0], "Melpomene Murray", 0, 0));
		assert_eq!(standings[1], Standing::new(ids[1], "Randy Schwartz", 0, 0));
	}

	#[test]
	fn register_returns_distinct_ids_for_duplicate_names() {
		let (repo, ids) = repo_with(&["Chandra Nalaar", "Chandra Nalaar"]);

		assert_ne!(ids[0], ids[1]);
		assert_eq!(repo.count_players().unwrap(), 2);
	}

	#[test]
	fn report_match_updates_both_players() {
		let (repo, ids) = repo_with(&["Bruno Walton", "Boots O'Neal"]);
		repo.report_match(ids[0], ids[1]).unwrap();

		let standings = repo.player_standings().unwrap();
		let winner = standings.iter().find(|s| s.id == ids[0]).unwrap();
		let loser = standings.iter().find(|s| s.id == ids[1]).unwrap();
		assert_eq!((winner.wins, winner.matches), (1, 1));
		assert_eq!((loser.wins, loser.matches), (0, 1));
	}

	#[test]
	fn standings_break_ties_by_id() {
		let (repo, ids) = repo_with(&["A", "B", "C", "D"]);
		repo.report_match(ids[3], ids[0]).unwrap();
		repo.report_match(ids[1], ids[2]).unwrap();

		let order: Vec<i64> = repo
			.player_standings()
			.unwrap()
			.into_iter()
			.map(|s| s.id)
			.collect();
		assert_eq!(order, vec![ids[1], ids[3], ids[0], ids[2]]);
	}

	#[test]
	fn large_field_is_ranked_by_wins_then_id() {
		let names: Vec<String> = (1..=40).map(|i| format!("Player {i}")).collect();
		let names: Vec<&str> = names.iter().map(String::as_str).collect();
		let (repo, ids) = repo_with(&names);
		for i in (0..ids.len()).step_by(4) {
			repo.report_match(ids[i + 3], ids[i]).unwrap();
			repo.report_match(ids[i + 1], ids[i + 2]).unwrap();
		}

		let standings = repo.player_standings().unwrap();
		assert_eq!(standings.len(), 40);
		assert!(standings
			.windows(2)
			.all(|w| (w[0].wins, w[1].id) > (w[1].wins, w[0].id)));
		assert!(standings[..20].iter().all(|s| s.wins == 1));
	}

	#[test]
	fn unknown_player_is_an_invalid_reference() {
		let (repo, ids) = repo_with(&["Lone Wolf"]);

		match repo.report_match(ids[0], ids[0] + 100) {
			Err(TournamentError::InvalidReference { winner, loser }) => {
				assert_eq!(winner, ids[0]);
				assert_eq!(loser, ids[0] + 100);
			}
			other => panic!("expected InvalidReference, got {other:?}"),
		}
		assert!(repo.matches().unwrap().is_empty());
	}

	#[test]
	fn player_cannot_beat_themselves() {
		let (repo, ids) = repo_with(&["Narcissus"]);

		assert!(matches!(
			repo.report_match(ids[0], ids[0]),
			Err(TournamentError::SelfMatch(id)) if id == ids[0]
		));
	}

	#[test]
	fn delete_matches_keeps_players() {
		let (repo, ids) = repo_with(&["A", "B"]);
		repo.report_match(ids[0], ids[1]).unwrap();
		repo.report_match(ids[1], ids[0]).unwrap();

		assert_eq!(repo.delete_matches().unwrap(), 2);
		assert_eq!(repo.count_players().unwrap(), 2);
		assert!(repo
			.player_standings()
			.unwrap()
			.iter()
			.all(|s| s.wins == 0 && s.matches == 0));
	}

	#[test]
	fn delete_players_clears_played_matches() {
		let (repo, ids) = repo_with(&["A", "B", "C"]);
		repo.report_match(ids[0], ids[1]).unwrap();

		assert_eq!(repo.delete_players().unwrap(), 3);
		assert_eq!(repo.count_players().unwrap(), 0);
		assert!(repo.matches().unwrap().is_empty());
	}

	#[test]
	fn players_and_matches_list_in_insertion_order() {
		let (repo, ids) = repo_with(&["A", "B", "C"]);
		repo.report_match(ids[2], ids[0]).unwrap();
		repo.report_match(ids[0], ids[1]).unwrap();

		let names: Vec<String> = repo.players().unwrap().into_iter().map(|p| p.name).collect();
		assert_eq!(names, vec!["A", "B", "C"]);
		assert_eq!(
			repo.matches().unwrap(),
			vec![
				Match { winner: ids[2], loser: ids[0] },
				Match { winner: ids[0], loser: ids[1] },
			]
		);
	}

	#[test]
	fn load_matches_reports_each_row() {
		let (repo, ids) = repo_with(&["A", "B", "C"]);
		let input = format!(
			"winner,loser\n{},{}\n{},{}\n",
			ids[0], ids[1], ids[2], ids[1]
		);

		assert_eq!(load_matches(&repo, input.as_bytes()).unwrap(), 2);
		let standings = repo.player_standings().unwrap();
		assert_eq!(standings[2], Standing::new(ids[1], "B", 0, 2));
	}

	#[test]
	fn load_matches_stops_at_unknown_player() {
		let (repo, ids) = repo_with(&["A", "B"]);
		let input = format!("winner,loser\n{},{}\n{},99\n", ids[0], ids[1], ids[0]);

		assert!(matches!(
			load_matches(&repo, input.as_bytes()),
			Err(TournamentError::InvalidReference { loser: 99, .. })
		));
		assert_eq!(repo.matches().unwrap().len(), 1);
	}

	#[test]
	fn slices_provide_standings_as_given() {
		let standings = vec![Standing::new(7, "X", 3, 3), Standing::new(2, "Y", 0, 3)];
		assert_eq!(standings.player_standings().unwrap(), standings);
	}
}
