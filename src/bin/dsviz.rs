//! dsviz CLI: replay engine scripts and print their notifications.
//!
//! Usage:
//!   dsviz run <script> [--config path] [--pretty]
//!   dsviz config [--config path]

use clap::{Parser, Subcommand};
use dsviz::script::{load_script, Record};
use dsviz::{EngineConfig, Workbench};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "dsviz",
    version,
    about = "Instrumented data-structure engines"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a YAML/JSON script and print one JSON notification per line
    Run {
        /// Path to the script file
        script: PathBuf,
        /// Path to a YAML engine configuration
        #[arg(long)]
        config: Option<PathBuf>,
        /// Pretty-print each notification
        #[arg(long)]
        pretty: bool,
    },
    /// Print the effective configuration as YAML
    Config {
        /// Path to a YAML engine configuration
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn render(record: &Record, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(record)
    } else {
        serde_json::to_string(record)
    }
}

fn cmd_run(script: &Path, config: Option<&Path>, pretty: bool) -> i32 {
    let config = match EngineConfig::resolve(config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let commands = match load_script(script) {
        Ok(commands) => commands,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };
    let mut bench = match Workbench::new(&config) {
        Ok(bench) => bench,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let report = match bench.replay(&commands) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    for record in &report.records {
        match render(record, pretty) {
            Ok(line) => println!("{}", line),
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        }
    }
    for rejection in &report.rejections {
        eprintln!("Rejected: {}", rejection);
    }
    0
}

fn cmd_config(config: Option<&Path>) -> i32 {
    let yaml = EngineConfig::resolve(config).and_then(|config| config.to_yaml());
    match yaml {
        Ok(yaml) => {
            print!("{}", yaml);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() {
    dsviz::logging::init();
    let cli = Cli::parse();

    let code = match cli.command {
        Commands::Run {
            script,
            config,
            pretty,
        } => cmd_run(&script, config.as_deref(), pretty),
        Commands::Config { config } => cmd_config(config.as_deref()),
    };
    std::process::exit(code);
}
