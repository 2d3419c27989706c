//! Foodie Express - Binary Entry Point
//!
//! A line-oriented console shell over the delivery engine. Reads one
//! command per line from stdin, executes it and prints the rendered result.
//! Log output goes to stderr and is controlled by `RUST_LOG`.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use foodie_express::catalog::DEFAULT_BUCKET_COUNT;
use foodie_express::config::{DEFAULT_ITEM_CAPACITY, DEFAULT_QUEUE_CAPACITY};
use foodie_express::engine::render;
use foodie_express::{Command, DeliveryEngine, EngineConfig, Outcome, Price};

#[derive(Parser)]
#[command(name = "foodie")]
#[command(author, version, about = "Food delivery menu and order queue")]
struct Cli {
    /// Hash index bucket count (a prime spreads sequential IDs best)
    #[arg(long, env = "FOODIE_BUCKETS", default_value_t = DEFAULT_BUCKET_COUNT)]
    buckets: usize,

    /// Menu slots to pre-allocate
    #[arg(long, env = "FOODIE_CAPACITY", default_value_t = DEFAULT_ITEM_CAPACITY)]
    capacity: usize,

    /// Order queue slots to pre-allocate
    #[arg(long, env = "FOODIE_QUEUE_CAPACITY", default_value_t = DEFAULT_QUEUE_CAPACITY)]
    queue_capacity: usize,

    /// Initial menu item as NAME=PRICE (repeatable)
    #[arg(long = "item", value_name = "NAME=PRICE")]
    items: Vec<String>,

    /// Do not print the banner
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

impl Cli {
    fn engine_config(&self) -> EngineConfig {
        EngineConfig::default()
            .with_bucket_count(self.buckets)
            .with_item_capacity(self.capacity)
            .with_queue_capacity(self.queue_capacity)
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.engine_config();
    let mut engine = DeliveryEngine::with_config(&config).context("invalid engine configuration")?;

    for spec in &cli.items {
        let (name, price) = spec
            .rsplit_once('=')
            .with_context(|| format!("--item `{spec}` is not NAME=PRICE"))?;
        let price = Price::parse(price).with_context(|| format!("--item `{spec}`"))?;
        engine
            .execute(Command::Add { name: name.trim().to_string(), price })
            .with_context(|| format!("--item `{spec}`"))?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !cli.quiet {
        writeln!(out, "{}", render::banner())?;
        if !cli.items.is_empty() {
            writeln!(out, "\nInitial setup complete! {} food items added.", cli.items.len())?;
        }
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        write!(out, "\n> ")?;
        out.flush()?;

        let Some(line) = lines.next() else { break };
        let line = line.context("failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let result = Command::parse(&line).and_then(|command| engine.execute(command));
        match result {
            Ok(outcome) => {
                writeln!(out, "{}", render::outcome(&outcome))?;
                if outcome == Outcome::Quit {
                    break;
                }
            }
            Err(err) => writeln!(out, "{}", render::error(&err))?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_map_to_config() {
        let cli = Cli::try_parse_from(["foodie", "--buckets", "13", "--capacity", "8", "--queue-capacity", "4"]).unwrap();
        let config = cli.engine_config();
        assert_eq!(config.bucket_count, 13);
        assert_eq!(config.item_capacity, 8);
        assert_eq!(config.queue_capacity, 4);
    }

    #[test]
    fn test_flag_defaults_match_config() {
        let cli = Cli::try_parse_from(["foodie"]).unwrap();
        assert_eq!(cli.engine_config(), EngineConfig::default());
    }
}
