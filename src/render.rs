use std::io::Write;

use serde::Serialize;

use crate::data::{Pairing, Standing};
use crate::error::Result;

pub fn standings_string(standings: &[Standing]) -> String {
	let mut string = String::from("# Standings\n```");

	for (rank, standing) in standings.iter().enumerate() {
		string.push_str(&format!(
			"\n{}: {} (#{}) {}-{}",
			rank + 1,
			standing.name,
			standing.id,
			standing.wins,
			standing.matches.saturating_sub(standing.wins)
		));
	}

	string.push_str("\n```\n");
	string
}

pub fn pairings_string(pairings: &[Pairing]) -> String {
	let mut string = String::from("# Pairings\n```");

	for (table, pairing) in pairings.iter().enumerate() {
		string.push_str(&format!(
			"\n{}: {} (#{}) vs {} (#{})",
			table + 1,
			pairing.player1_name,
			pairing.player1_id,
			pairing.player2_name,
			pairing.player2_id
		));
	}

	string.push_str("\n```\n");
	string
}

/// Writes `rows` as CSV with a header line taken from the field names.
pub fn write_csv<W: Write, T: Serialize>(out: W, rows: &[T]) -> Result<()> {
	let mut writer = csv::Writer::from_writer(out);
	for row in rows {
		writer.serialize(row)?;
	}
	writer.flush()?;

	Ok(())
}
