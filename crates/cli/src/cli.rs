use std::path::PathBuf;

use clap::{Parser, Subcommand};
use slotsync_primitives::ItemId;

#[derive(Parser, Debug)]
#[command(name = "slotsync")]
#[command(about = "Inspect item layouts and replay variant sync scenarios")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Decode layout text and list its slots
	Inspect {
		/// Layout text, dense (`4151,-1,11840`) or explicit (`4151:0,11840:2`)
		layout: String,
	},
	/// Show the built-in variant group of an item
	Lookup {
		/// Item id
		id: ItemId,
	},
	/// Replay inventory snapshots from a scenario file
	Replay {
		/// Scenario TOML file
		#[arg(value_name = "PATH")]
		scenario: PathBuf,

		/// Policy TOML file overriding the scenario's `[policy]`
		#[arg(long, value_name = "PATH")]
		policy: Option<PathBuf>,
	},
}
