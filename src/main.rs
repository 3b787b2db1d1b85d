use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use testify_migrate::config::{Config, LoadedConfig, discover_config};
use testify_migrate::migrate::{MigrateOptions, candidate_files, migrate_file};
use testify_migrate::rules::{ExpansionLine, RuleSet};

#[derive(Parser)]
#[command(name = "testify-migrate")]
#[command(
	author,
	version,
	about = "CLI tool for migrating gocheck test suites to testify"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	/// Directory containing the test files to migrate
	#[arg(
		value_name = "DIR",
		required_unless_present_any = ["list_rules", "show_config", "validate_config"]
	)]
	dir: Option<PathBuf>,

	/// List the effective rewrite rules for DIR (default: current directory)
	#[arg(long, conflicts_with_all = ["show_config", "validate_config"])]
	list_rules: bool,

	/// Display the resolved configuration for DIR (default: current directory)
	#[arg(long, conflicts_with = "validate_config")]
	show_config: bool,

	/// Check the config file for errors without migrating anything
	#[arg(long)]
	validate_config: bool,

	/// Config file to use instead of <DIR>/.testify-migrate.toml
	#[arg(long, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Filename suffix selecting test files [default: _test.go]
	#[arg(long, value_name = "SUFFIX")]
	suffix: Option<String>,

	/// Also migrate files in subdirectories
	#[arg(long)]
	recursive: bool,

	/// Report which files would change without writing them
	#[arg(long)]
	dry_run: bool,

	/// Suppress per-file progress output
	#[arg(short, long)]
	quiet: bool,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();
	let dir = cli.dir.clone().unwrap_or_else(|| PathBuf::from("."));
	let explicit = cli.config.as_deref();

	// Handle --list-rules
	if cli.list_rules {
		return handle_list_rules(&dir, explicit);
	}

	// Handle --show-config
	if cli.show_config {
		return handle_show_config(&dir, explicit);
	}

	// Handle --validate-config
	if cli.validate_config {
		return handle_validate_config(&dir, explicit);
	}

	handle_migrate(&cli, &dir)
}

fn load_config(dir: &Path, explicit: Option<&Path>) -> Result<Option<LoadedConfig>> {
	discover_config(dir, explicit).context("Failed to load configuration")
}

fn build_rules(loaded: Option<&LoadedConfig>) -> Result<RuleSet> {
	match loaded {
		Some(loaded) => RuleSet::from_config(&loaded.config)
			.with_context(|| format!("Invalid rules in {}", loaded.path.display())),
		None => Ok(RuleSet::builtin().clone()),
	}
}

fn handle_migrate(cli: &Cli, dir: &Path) -> Result<ExitCode> {
	let loaded = load_config(dir, cli.config.as_deref())?;
	let rules = build_rules(loaded.as_ref())?;

	let config = loaded.map(|l| l.config).unwrap_or_default();
	let options = MigrateOptions {
		suffix: cli
			.suffix
			.clone()
			.unwrap_or_else(|| config.suffix().to_string()),
		recursive: cli.recursive || config.recursive,
		dry_run: cli.dry_run,
	};

	let files = candidate_files(dir, &options.suffix, options.recursive)
		.with_context(|| format!("Failed to list test files in {}", dir.display()))?;

	let mut changed = 0;
	for path in &files {
		if !cli.quiet {
			println!("Read {}", path.display());
		}

		let outcome = migrate_file(path, &rules, options.dry_run)
			.with_context(|| format!("Failed to migrate {}", path.display()))?;

		if outcome.changed {
			changed += 1;
		}

		if !cli.quiet {
			if outcome.written {
				println!("Write {}", path.display());
			} else if outcome.changed {
				println!("Would write {}", path.display());
			}
		}
	}

	if !cli.quiet {
		let verb = if options.dry_run { "would change" } else { "changed" };
		println!("{} file(s) processed, {} {}", files.len(), changed, verb);
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_list_rules(dir: &Path, explicit: Option<&Path>) -> Result<ExitCode> {
	let loaded = load_config(dir, explicit)?;
	let rules = build_rules(loaded.as_ref())?;

	println!("Literal rules:");
	for literal in &rules.literals {
		println!("  {:?} -> {:?}", literal.from, literal.to);
	}

	for (i, tier) in rules.tiers.iter().enumerate() {
		println!("\nTier {} ({}):", i + 1, tier.name);
		for rule in &tier.rules {
			println!("  {} -> {}", rule.pattern.as_str(), rule.replacement);
		}
	}

	println!("\nStructural patterns:");
	for pattern in &rules.structural {
		println!("  {}: {}", pattern.name, pattern.pattern.as_str());
		for line in pattern.expansion {
			match line {
				ExpansionLine::Rewrite(template) => println!("    rewrite {:?}", template),
				ExpansionLine::Literal(text) => println!("    literal {:?}", text),
			}
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_show_config(dir: &Path, explicit: Option<&Path>) -> Result<ExitCode> {
	let loaded = load_config(dir, explicit)?;
	let defaults = Config::default();

	let config = match loaded {
		Some(ref loaded) => {
			println!("# Source: {}", loaded.path.display());
			&loaded.config
		}
		None => {
			println!("No configuration file found, using defaults.");
			&defaults
		}
	};

	println!("suffix: {}", config.suffix());
	println!("recursive: {}", config.recursive);
	println!("literal rules: {}", config.literals.len());
	for literal in &config.literals {
		println!("  {:?} -> {:?}", literal.from, literal.to);
	}
	println!("regex rules: {}", config.rules.len());
	for rule in &config.rules {
		match rule.tier {
			Some(tier) => println!("  [tier {}] {} -> {}", tier, rule.pattern, rule.replacement),
			None => println!("  [custom] {} -> {}", rule.pattern, rule.replacement),
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_validate_config(dir: &Path, explicit: Option<&Path>) -> Result<ExitCode> {
	let result = discover_config(dir, explicit)
		.and_then(|loaded| match loaded {
			Some(loaded) => RuleSet::from_config(&loaded.config).map(|_| Some(loaded)),
			None => Ok(None),
		});

	match result {
		Ok(Some(loaded)) => {
			println!(
				"Configuration is valid: {} ({} literal, {} regex rules)",
				loaded.path.display(),
				loaded.config.literals.len(),
				loaded.config.rules.len()
			);
			Ok(ExitCode::SUCCESS)
		}
		Ok(None) => {
			println!("No configuration file found.");
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Configuration error: {}", e);
			Ok(ExitCode::FAILURE)
		}
	}
}
