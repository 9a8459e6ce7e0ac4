use std::{env, path::PathBuf};

pub const DATABASE_ENV: &str = "TOURNAMENT_DATABASE";
pub const DEFAULT_DATABASE: &str = "tournament.db";

/// Where the tournament database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	pub database_path: PathBuf,
}

impl Config {
	pub fn new(database_path: impl Into<PathBuf>) -> Self {
		Config {
			database_path: database_path.into(),
		}
	}

	/// Reads `TOURNAMENT_DATABASE`, falling back to `tournament.db` in the
	/// working directory.
	pub fn from_env() -> Self {
		match env::var_os(DATABASE_ENV) {
			Some(path) if !path.is_empty() => Config::new(path),
			_ => Config::default(),
		}
	}

	/// An explicitly given path wins over the environment.
	pub fn resolve(database_path: Option<PathBuf>) -> Self {
		match database_path {
			Some(path) => Config::new(path),
			None => Config::from_env(),
		}
	}
}

impl Default for Config {
	fn default() -> Self {
		Config::new(DEFAULT_DATABASE)
	}
}
