//! `slotsync` binary.
//!
//! Offline tooling around the sync engine:
//! - decode and list layout text
//! - look up built-in variant groups
//! - replay inventory scenarios against an in-memory store

mod cli;
mod scenario;

use std::fs;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use scenario::Scenario;
use slotsync_layout::{codec, decode_with_warnings};
use slotsync_primitives::{ItemId, row_of};
use slotsync_sync::SyncPolicy;
use slotsync_variants::builtin;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	setup_tracing(cli.verbose);

	match cli.command {
		Command::Inspect { layout } => inspect(&layout),
		Command::Lookup { id } => lookup(id),
		Command::Replay { scenario, policy } => {
			let text = fs::read_to_string(&scenario)
				.with_context(|| format!("reading {}", scenario.display()))?;
			let mut parsed = Scenario::from_toml(&text)
				.with_context(|| format!("parsing {}", scenario.display()))?;

			if let Some(path) = policy {
				let text = fs::read_to_string(&path)
					.with_context(|| format!("reading {}", path.display()))?;
				parsed.policy = SyncPolicy::from_toml(&text)
					.with_context(|| format!("parsing {}", path.display()))?;
			}

			replay(parsed);
			Ok(())
		}
	}
}

fn inspect(text: &str) -> anyhow::Result<()> {
	let (layout, warnings) = decode_with_warnings(text);

	println!("dialect: {:?}", codec::detect_dialect(text));
	println!("occupied: {}", layout.len());
	for (pos, item) in layout.entries() {
		println!("  {pos:>5}  row {:<4} {item}", row_of(pos));
	}
	for warning in &warnings {
		println!("warning: {warning}");
	}
	println!("encoded: {layout}");

	if warnings.is_empty() {
		Ok(())
	} else {
		anyhow::bail!("{} token(s) skipped", warnings.len())
	}
}

fn lookup(id: ItemId) -> anyhow::Result<()> {
	let registry = builtin();
	let group = registry
		.lookup(id)
		.with_context(|| format!("{id} is not in any variant group"))?;

	println!("{} {}", group.id(), group.name());
	for member in group.members() {
		let marker = if *member == id { "*" } else { " " };
		println!(" {marker} {member}");
	}

	for collision in registry.collisions().iter().filter(|c| c.item == id) {
		println!("note: {collision}");
	}
	Ok(())
}

fn replay(scenario: Scenario) {
	let replay = scenario.run(builtin());

	for (step, report) in replay.steps.iter().enumerate() {
		println!("step {step}:");
		if report.is_empty() {
			println!("  (no changes)");
		}
		for event in report.events() {
			println!("  {event}");
		}
	}

	println!("store:");
	for (group, key, value) in replay.store.entries() {
		println!("  {group}.{key} = {value:?}");
	}
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("slotsync=debug,warn")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}
