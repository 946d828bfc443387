//! Calculator CLI.
//!
//! Prints one sample invocation of each arithmetic operation by default,
//! evaluates single operations with `eval`, and writes a starter config with
//! `init`.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use calculator::core::number::Number;
use calculator::core::operation::Operation;
use calculator::demo::{demo_lines, evaluate};
use calculator::exit_codes;
use calculator::io::config::{CalculatorConfig, DEFAULT_CONFIG_FILE, load_config, write_config};
use calculator::logging;

#[derive(Parser)]
#[command(
    name = "calculator",
    version,
    about = "Pure arithmetic operations with a demo CLI"
)]
struct Cli {
    /// Config file supplying demo operands (defaults apply if missing).
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print one sample invocation of each operation (default).
    Demo,
    /// Evaluate a single operation and print `a <op> b = result`.
    Eval {
        operation: Operation,
        #[arg(allow_negative_numbers = true)]
        a: Number,
        #[arg(allow_negative_numbers = true)]
        b: Number,
        /// Print the evaluation as a JSON object.
        #[arg(long)]
        json: bool,
    },
    /// Write the default config file if missing.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => cmd_demo(&cli.config),
        Command::Eval {
            operation,
            a,
            b,
            json,
        } => cmd_eval(operation, a, b, json),
        Command::Init { force } => cmd_init(&cli.config, force),
    }
}

fn cmd_demo(config_path: &Path) -> Result<i32> {
    let cfg = load_config(config_path)?;
    let lines = demo_lines(&cfg.demo).context("run demo")?;
    for line in lines {
        println!("{line}");
    }
    Ok(exit_codes::OK)
}

fn cmd_eval(operation: Operation, a: Number, b: Number, json: bool) -> Result<i32> {
    let evaluation = match evaluate(operation, a, b) {
        Ok(evaluation) => evaluation,
        Err(err) => {
            debug!(%operation, %a, %b, error = %err, "evaluation failed");
            eprintln!("{err}");
            return Ok(exit_codes::ARITHMETIC);
        }
    };
    if json {
        let payload = serde_json::to_string(&evaluation).context("serialize evaluation")?;
        println!("{payload}");
    } else {
        println!("{evaluation}");
    }
    Ok(exit_codes::OK)
}

fn cmd_init(config_path: &Path, force: bool) -> Result<i32> {
    if !force && config_path.exists() {
        info!(path = %config_path.display(), "config exists, skipping");
        return Ok(exit_codes::OK);
    }
    write_config(config_path, &CalculatorConfig::default())
        .with_context(|| format!("write {}", config_path.display()))?;
    println!("init: config={}", config_path.display());
    Ok(exit_codes::OK)
}
