use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
	pub id: i64,
	pub name: String,
}

/// One completed game. There are no draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
	pub winner: i64,
	pub loser: i64,
}

/// A row of the `standings` view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
	pub id: i64,
	pub name: String,
	pub wins: u32,
	pub matches: u32,
}

impl Standing {
	pub fn new(id: i64, name: &str, wins: u32, matches: u32) -> Self {
		Standing {
			id,
			name: name.to_string(),
			wins,
			matches,
		}
	}
}

/// Two players drawn against each other for the next round.
///
/// `player1` is the one ranked higher (or tied-higher) in the standings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
	pub player1_id: i64,
	pub player1_name: String,
	pub player2_id: i64,
	pub player2_name: String,
}

impl Pairing {
	pub fn between(first: &Standing, second: &Standing) -> Self {
		Pairing {
			player1_id: first.id,
			player1_name: first.name.clone(),
			player2_id: second.id,
			player2_name: second.name.clone(),
		}
	}
}
