use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(author, version, about = "Swiss-system tournament manager", long_about = None)]
pub struct Cli {
	/// Database file; defaults to $TOURNAMENT_DATABASE or tournament.db
	#[arg(short, long, value_name = "FILE")]
	pub database: Option<PathBuf>,

	#[arg(short, long, value_name = "FILE")]
	pub output: Option<PathBuf>,

	#[arg(short, long, value_enum, default_value_t = Format::Text)]
	pub format: Format,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
	Text,
	Csv,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Remove all recorded matches
	ResetMatches,
	/// Remove all players and their matches
	ResetPlayers,
	/// Print the number of registered players
	Count,
	/// Register one or more players
	Register {
		#[arg(required = true)]
		names: Vec<String>,
	},
	/// Record that WINNER beat LOSER
	Report {
		winner: i64,
		loser: i64,
	},
	/// Record every match in a CSV file with a `winner,loser` header
	Load {
		#[arg(value_name = "FILE")]
		matches: PathBuf,
	},
	/// Print players ranked by wins
	Standings,
	/// Pair players for the next round
	Pairings,
}
