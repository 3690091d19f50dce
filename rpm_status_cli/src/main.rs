use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use colored::*;
use rpm_status_cli::config::{AppConfig, ConfigManager, get_config};
use rpm_status_cli::{
    CliError, CliResult, ErrorContext, ExitCode, PollOutcome, ReplaySource, StatusPoller, progress,
};
use rpm_status_core::{ExportStatusRenderer, RpmStatusRenderer, formatter_for_type};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rpm-status")]
#[command(author, version, about = "Render progress of RPM repository sync, publish and export operations", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the progress of an operation from captured reports
    Status {
        /// Operation the reports belong to
        #[arg(value_enum)]
        operation: Operation,

        /// JSON-lines capture, one full progress report per line
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Delay between two reports in milliseconds
        #[arg(long, value_name = "MS")]
        interval_ms: Option<u64>,

        /// Disable progress bar display
        #[arg(long)]
        no_progress: bool,
    },

    /// Print a one-line label for each content unit
    Units {
        /// Content type identifier (e.g. rpm, erratum, package_group)
        #[arg(short = 't', long = "type", value_name = "TYPE_ID")]
        content_type: String,

        /// JSON array of units
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Get a configuration value
    Get {
        /// Configuration key (e.g., status.poll_interval_ms)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., status.num_display_errors)
        key: String,

        /// Value to set
        value: String,
    },

    /// List all configuration values
    List,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Operation {
    Sync,
    Publish,
    Export,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let debug = cli.debug;

    // Initialize logging based on debug flag
    if debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Debug)
            .filter_module("rpm_status_core", log::LevelFilter::Debug)
            .filter_module("rpm_status_cli", log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
        eprintln!("Debug logging enabled");
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let code = match run(cli.command).await {
        Ok(code) => code,
        Err(error) => {
            eprint!("{}", error.format_for_user(debug));
            error.exit_code()
        }
    };

    std::process::exit(code as i32);
}

async fn run(command: Commands) -> CliResult<ExitCode> {
    match command {
        Commands::Status {
            operation,
            input,
            interval_ms,
            no_progress,
        } => {
            let mut config = get_config()?;
            config.apply_cli_overrides(interval_ms, no_progress);
            status_command(config, operation, &input).await
        }
        Commands::Units {
            content_type,
            input,
        } => units_command(&content_type, &input),
        Commands::Config { command } => config_command(command),
        Commands::Completions { shell } => {
            generate_completions(shell);
            Ok(ExitCode::Success)
        }
    }
}

async fn status_command(
    config: AppConfig,
    operation: Operation,
    input: &Path,
) -> CliResult<ExitCode> {
    log::debug!("Replaying {operation:?} reports from {}", input.display());
    log::debug!("Configuration: {config:?}");

    if !config.output.color_enabled {
        colored::control::set_override(false);
    }

    let mut source = ReplaySource::from_path(input)
        .map_err(|e| CliError::from_io_error(e, &input.display().to_string()))?;
    let mut prompt = progress::create_prompt(&config.output);
    let interval = config.poll_interval();

    let outcome = match operation {
        Operation::Sync | Operation::Publish => {
            let renderer = RpmStatusRenderer::with_options(config.render_options());
            StatusPoller::new(renderer, interval)
                .run(&mut source, prompt.as_mut())
                .await?
        }
        Operation::Export => {
            let renderer = ExportStatusRenderer::with_options(config.render_options());
            StatusPoller::new(renderer, interval)
                .run(&mut source, prompt.as_mut())
                .await?
        }
    };

    match outcome {
        PollOutcome::Finished { ticks } => {
            log::debug!("Rendered {ticks} reports");
            Ok(ExitCode::Success)
        }
        PollOutcome::Cancelled { ticks } => {
            log::debug!("Operation cancelled on report {ticks}");
            Ok(ExitCode::Cancelled)
        }
    }
}

fn units_command(type_id: &str, input: &Path) -> CliResult<ExitCode> {
    let formatter =
        formatter_for_type(type_id).map_err(|_| CliError::unknown_content_type(type_id))?;

    let path = input.display().to_string();
    let text = fs::read_to_string(input).map_err(|e| CliError::from_io_error(e, &path))?;
    let units: Vec<serde_json::Value> = serde_json::from_str(&text).map_err(|e| {
        CliError::invalid_input("Unit listing must be a JSON array of objects")
            .with_context("path", &path)
            .with_source(Box::new(e))
    })?;

    for unit in &units {
        let label = formatter
            .format_unit(unit)
            .map_err(|e| CliError::from(rpm_status_core::Error::from(e)))?;
        println!("{label}");
    }

    Ok(ExitCode::Success)
}

fn config_command(command: ConfigCommand) -> CliResult<ExitCode> {
    let mut manager = ConfigManager::new();

    match command {
        ConfigCommand::Get { key } => {
            let value = manager.get(&key)?;
            println!("{value}");
        }
        ConfigCommand::Set { key, value } => {
            manager.set(&key, &value)?;
            eprintln!("{}", format!("Set {key} = {value}").green());
            eprintln!(
                "Configuration saved to: {}",
                manager.get_config_path().display()
            );
        }
        ConfigCommand::List => {
            let items = manager.list()?;
            eprintln!("{}", "Configuration:".bold().blue());
            eprintln!("Config file: {}", manager.get_config_path().display());
            eprintln!();

            // Group items by section
            let mut sections: BTreeMap<String, Vec<(String, String)>> = BTreeMap::new();
            for (key, value) in items {
                let (section, name) = key.split_once('.').unwrap_or(("general", key.as_str()));
                sections
                    .entry(section.to_string())
                    .or_default()
                    .push((name.to_string(), value));
            }

            for (section, items) in sections {
                println!("[{}]", section.yellow());
                for (key, value) in items {
                    println!("  {} = {}", key.cyan(), value);
                }
                println!();
            }
        }
    }

    Ok(ExitCode::Success)
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    generate(shell, &mut cmd, name, &mut std::io::stdout());
}
