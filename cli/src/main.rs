//! DataBag command-line tool
//!
//! Reads an entity body from a JSON file and applies one path operation:
//!
//!   databag --file person.json --entity person get person.addresses.visit.street
//!   databag --file person.json --entity person set person.firstName Jane --write
//!   databag --file person.json --entity person remove person.emailAddresses.private
//!
//! Results are printed as JSON on stdout.

use anyhow::Result;
use clap::Parser;
use databag_cli::{run, Args};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    debug!(command = ?args.command, "Running command");
    let outcome = run(&args)?;

    println!("{}", serde_json::to_string_pretty(&outcome.output)?);
    if !matches!(args.command, databag_cli::Command::Get { .. }) {
        match outcome.dirty {
            Some(true) if outcome.written => eprintln!("dirty: saved to {}", args.file.display()),
            Some(true) => eprintln!("dirty: not saved"),
            Some(false) => eprintln!("clean"),
            None => eprintln!("unknown entity"),
        }
    }
    Ok(())
}
