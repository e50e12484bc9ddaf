//! Argument types and command execution for the `databag` binary.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use databag::{BagConfig, DataBag};
use serde_json::{Map, Value};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "databag")]
#[command(about = "Read and edit an entity JSON file with dotted paths")]
pub struct Args {
    /// JSON file holding the entity body
    #[arg(short, long)]
    pub file: PathBuf,

    /// Entity type the body belongs to (first path segment)
    #[arg(short, long)]
    pub entity: String,

    /// Optional TOML file with bag settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the value at a path
    Get {
        path: String,
        /// JSON value printed when the path resolves to nothing
        #[arg(long)]
        default: Option<String>,
    },
    /// Write a value (JSON, or a plain string) at a path; `null` removes
    Set {
        path: String,
        value: String,
        /// Save the entity back to the file if it changed
        #[arg(long)]
        write: bool,
    },
    /// Remove the value at a path
    Remove {
        path: String,
        /// Only remove the addressed element for numeric indices
        #[arg(long)]
        single: bool,
        /// Save the entity back to the file if it changed
        #[arg(long)]
        write: bool,
    },
    /// Print the entity body
    State,
}

/// What a command produced.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    /// The resolved value (`get`) or the entity body (everything else).
    pub output: Value,
    /// Dirty flag of the entity after the command.
    pub dirty: Option<bool>,
    /// Whether the body was written back to the file.
    pub written: bool,
}

/// Loads bag settings, falling back to defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<BagConfig> {
    let Some(path) = path else {
        return Ok(BagConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("Failed to parse config file {}", path.display()))
}

/// Reads an entity body. The file must hold a JSON object.
pub fn load_entity(path: &Path) -> Result<Map<String, Value>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read entity file {}", path.display()))?;
    match serde_json::from_str::<Value>(&raw).context("Failed to decode entity JSON")? {
        Value::Object(body) => Ok(body),
        other => bail!("Entity file must hold a JSON object, found {other}"),
    }
}

/// Parses a command-line value as JSON, taking it as a plain string otherwise.
#[must_use]
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Runs `command` against a bag holding `entity`.
pub fn execute(bag: &mut DataBag, entity: &str, command: &Command) -> databag::Result<Value> {
    match command {
        Command::Get { path, default } => {
            let default = default.as_deref().map(parse_value).unwrap_or(Value::Null);
            bag.get(path, default)
        }
        Command::Set { path, value, .. } => {
            bag.set(path, parse_value(value))?;
            Ok(bag.entity_state(entity))
        }
        Command::Remove { path, single, .. } => {
            bag.remove_with(path, !single)?;
            Ok(bag.entity_state(entity))
        }
        Command::State => Ok(bag.entity_state(entity)),
    }
}

/// Loads the entity, runs the command and optionally saves the result.
pub fn run(args: &Args) -> Result<Outcome> {
    let config = load_config(args.config.as_deref())?;
    let body = load_entity(&args.file)?;
    debug!(file = %args.file.display(), entity = %args.entity, "Entity loaded");

    let mut bag = DataBag::with_config(config);
    bag.add_entity_data(&args.entity, body);

    let output = execute(&mut bag, &args.entity, &args.command)?;
    let dirty = bag.is_dirty(&args.entity);

    let write = matches!(
        args.command,
        Command::Set { write: true, .. } | Command::Remove { write: true, .. }
    );
    let written = write && dirty == Some(true);
    if written {
        let encoded = serde_json::to_string_pretty(&bag.entity_state(&args.entity))?;
        fs::write(&args.file, encoded)
            .with_context(|| format!("Failed to write entity file {}", args.file.display()))?;
        info!(file = %args.file.display(), "Entity saved");
    } else if write {
        info!("Entity unchanged, nothing written");
    }

    Ok(Outcome {
        output,
        dirty,
        written,
    })
}
