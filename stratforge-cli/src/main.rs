//! StratForge CLI — validate, export, resolve, and seed commands.
//!
//! Commands:
//! - `validate` — check a strategy payload (JSON or TOML) against the DSL
//! - `export` — validate a payload and emit target-platform source code
//! - `resolve` — print the optimization config for an instrument symbol
//! - `seed list` / `seed show` — enumerate or emit the built-in strategies

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use stratforge_core::{
    emit_tagged, validate, DefaultsTable, Resolver, SeedStrategy, StrategyDsl,
};

#[derive(Parser)]
#[command(
    name = "stratforge",
    about = "StratForge CLI — strategy DSL validation, code export, and optimization config resolution"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a strategy payload file (JSON or TOML).
    Validate {
        /// Path to the payload file.
        #[arg(long)]
        input: PathBuf,
    },
    /// Validate a payload and emit source code for a target platform.
    Export {
        /// Path to the payload file.
        #[arg(long)]
        input: PathBuf,

        /// Target format: json, pine, python, mql4, mql5.
        /// Unknown tags fall back to json.
        #[arg(long, default_value = "json")]
        format: String,

        /// Output directory. Prints to stdout when omitted.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the resolved optimization config for a symbol.
    Resolve {
        /// Instrument symbol (e.g. XAUUSD, EURUSD, BTCUSDT).
        #[arg(long)]
        symbol: String,
    },
    /// Built-in seed strategies.
    Seed {
        #[command(subcommand)]
        action: SeedAction,
    },
}

#[derive(Subcommand)]
enum SeedAction {
    /// List the available seed strategies.
    List,
    /// Emit one seed strategy in the given format.
    Show {
        /// Seed name (see `seed list`).
        name: String,

        /// Target format: json, pine, python, mql4, mql5.
        #[arg(long, default_value = "json")]
        format: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { input } => run_validate(&input),
        Commands::Export {
            input,
            format,
            output,
        } => run_export(&input, &format, output.as_deref()),
        Commands::Resolve { symbol } => run_resolve(&symbol),
        Commands::Seed { action } => match action {
            SeedAction::List => run_seed_list(),
            SeedAction::Show { name, format } => run_seed_show(&name, &format),
        },
    }
}

/// Load a payload file and validate it into a DSL.
///
/// TOML files are converted to a JSON value first so both formats funnel
/// through the same validator.
fn load_strategy(path: &Path) -> Result<StrategyDsl> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let payload: serde_json::Value = if path.extension().is_some_and(|e| e == "toml") {
        let value: toml::Value = toml::from_str(&content)
            .with_context(|| format!("invalid TOML in {}", path.display()))?;
        serde_json::to_value(value)?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON in {}", path.display()))?
    };

    match validate(&payload) {
        Ok(dsl) => Ok(dsl),
        Err(err) => {
            eprintln!("Validation failed:");
            for v in &err.violations {
                eprintln!("  {}: {}", v.path, v.message);
            }
            bail!("{} violation(s) in {}", err.violations.len(), path.display());
        }
    }
}

fn run_validate(input: &Path) -> Result<()> {
    let dsl = load_strategy(input)?;
    println!("OK: {}", dsl.name);
    println!("Fingerprint: {}", dsl.fingerprint());
    println!(
        "Symbols: {} | Timeframe: {} | Indicators: {} | Entries: {} | Exits: {}",
        dsl.symbols.join(", "),
        dsl.timeframe,
        dsl.indicators.len(),
        dsl.entries.len(),
        dsl.exits.len()
    );
    Ok(())
}

fn run_export(input: &Path, format: &str, output: Option<&Path>) -> Result<()> {
    let dsl = load_strategy(input)?;
    let emitted = emit_tagged(&dsl, format);

    match output {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
            let filename = format!("{}.{}", slug(&dsl.name), emitted.extension);
            let dest = dir.join(filename);
            std::fs::write(&dest, &emitted.code)
                .with_context(|| format!("failed to write {}", dest.display()))?;
            println!("Wrote {}", dest.display());
        }
        None => print!("{}", emitted.code),
    }
    Ok(())
}

fn run_resolve(symbol: &str) -> Result<()> {
    let tables = DefaultsTable::builtin();
    let resolver = Resolver::new(&tables);

    let Some(config) = resolver.resolve_symbol(symbol) else {
        bail!("no optimization defaults registered for '{symbol}'; supply explicit configuration");
    };

    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn run_seed_list() -> Result<()> {
    println!("{:<24} {:<40} Symbols", "Name", "Strategy");
    println!("{}", "-".repeat(80));
    for seed in SeedStrategy::all() {
        let dsl = seed.to_dsl();
        println!(
            "{:<24} {:<40} {}",
            seed.name(),
            dsl.name,
            dsl.symbols.join(", ")
        );
    }
    Ok(())
}

fn run_seed_show(name: &str, format: &str) -> Result<()> {
    let Some(seed) = SeedStrategy::from_name(name) else {
        let valid: Vec<&str> = SeedStrategy::all().iter().map(|s| s.name()).collect();
        bail!("unknown seed '{name}'. Valid: {}", valid.join(", "));
    };

    let emitted = emit_tagged(&seed.to_dsl(), format);
    print!("{}", emitted.code);
    Ok(())
}

/// Filesystem-safe slug of a strategy name.
fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_sep = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            last_sep = false;
        } else if !last_sep {
            out.push('_');
            last_sep = true;
        }
    }
    if out.ends_with('_') {
        out.pop();
    }
    if out.is_empty() {
        "strategy".into()
    } else {
        out
    }
}
