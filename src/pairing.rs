//! Swiss-system pairing.
//!
//! Players are drawn against their neighbour in the standings: first against
//! second, third against fourth, and so on. There is no bye, so the number of
//! players has to be even, and previous opponents are not taken into account.

use log::debug;

use crate::data::{Pairing, Standing};
use crate::error::{Result, TournamentError};
use crate::repository::StandingsProvider;

/// Pairs adjacent entries of `standings`, which must already be ranked.
pub fn pair(standings: &[Standing]) -> Result<Vec<Pairing>> {
	if standings.len() % 2 != 0 {
		return Err(TournamentError::OddPlayerCount(standings.len()));
	}

	Ok(standings
		.chunks_exact(2)
		.map(|pair| Pairing::between(&pair[0], &pair[1]))
		.collect())
}

/// Pairings for the next round, from the provider's current standings.
pub fn swiss_pairings<P>(provider: &P) -> Result<Vec<Pairing>>
where
	P: StandingsProvider + ?Sized,
{
	let standings = provider.player_standings()?;
	let pairings = pair(&standings)?;
	debug!(
		"paired {} players into {} matches",
		standings.len(),
		pairings.len()
	);

	Ok(pairings)
}
