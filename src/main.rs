mod cli;

use std::{
	fs::File,
	io::{self, Write},
};

use clap::Parser;
use cli::{Cli, Commands, Format};
use log::info;
use swiss::{
	render, repository, swiss_pairings, Config, Result, SqliteRepository, StandingsProvider,
	TournamentRepository,
};

fn main() -> Result<()> {
	env_logger::builder().format_target(false).init();

	let cli = Cli::parse();

	let config = Config::resolve(cli.database);
	let repo = SqliteRepository::open(&config)?;

	let mut out = match cli.output.as_deref() {
		Some(path) => Box::new(File::create(path)?) as Box<dyn Write>,
		None => Box::new(io::stdout()) as Box<dyn Write>,
	};

	run(cli.command, cli.format, &repo, &mut out)?;

	out.flush()?;
	Ok(())
}

fn run(
	command: Commands,
	format: Format,
	repo: &impl TournamentRepository,
	out: &mut dyn Write,
) -> Result<()> {
	match command {
		Commands::ResetMatches => {
			let removed = repo.delete_matches()?;
			writeln!(out, "removed {removed} matches")?;
		}
		Commands::ResetPlayers => {
			let removed = repo.delete_players()?;
			writeln!(out, "removed {removed} players")?;
		}
		Commands::Count => writeln!(out, "{}", repo.count_players()?)?,
		Commands::Register { names } => {
			for name in names {
				let id = repo.register_player(&name)?;
				writeln!(out, "{id}: {name}")?;
			}
		}
		Commands::Report { winner, loser } => {
			repo.report_match(winner, loser)?;
			writeln!(out, "recorded: {winner} beat {loser}")?;
		}
		Commands::Load { matches } => {
			let count = repository::load_matches(repo, File::open(&matches)?)?;
			info!("loaded matches from {}", matches.display());
			writeln!(out, "loaded {count} matches")?;
		}
		Commands::Standings => {
			let standings = repo.player_standings()?;
			match format {
				Format::Text => out.write_all(render::standings_string(&standings).as_bytes())?,
				Format::Csv => render::write_csv(out, &standings)?,
			}
		}
		Commands::Pairings => {
			let pairings = swiss_pairings(repo)?;
			match format {
				Format::Text => out.write_all(render::pairings_string(&pairings).as_bytes())?,
				Format::Csv => render::write_csv(out, &pairings)?,
			}
		}
	}

	Ok(())
}
