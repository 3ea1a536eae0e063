//! brlfetch - system facts next to ASCII art
//!
//! On each run:
//! - checks for a newer release (never blocks or fails the run)
//! - probes user, host, OS, kernel, uptime, session and hardware facts
//! - prints them beside the art block, one fact per row

mod config;
mod facts;
mod install;
mod probe;
mod render;
mod update;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::time::Duration;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::facts::FactSet;
use crate::probe::env::EnvSnapshot;
use crate::probe::metrics;
use crate::probe::platform::SysinfoPlatform;
use crate::probe::runner::SystemRunner;
use crate::probe::ProbeContext;
use crate::render::art;
use crate::render::palette::Palette;
use crate::update::HttpVersionSource;

/// brlfetch - show system information beside ASCII art
#[derive(Parser)]
#[command(name = "brlfetch")]
#[command(version)]
#[command(about = "Show host, OS and hardware facts beside ASCII art")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Skip the startup version check
    #[arg(long, default_value_t = false)]
    no_update_check: bool,

    /// Disable ANSI colors
    #[arg(long, default_value_t = false)]
    no_color: bool,

    /// Log probe fallbacks to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Install brlfetch into ~/.local/bin
    Install {
        /// Replace an existing install
        #[arg(short, long, default_value_t = false)]
        update: bool,
    },

    /// Update an existing install (same as `install --update`)
    Update,

    /// Show configuration file location and settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config();

    match &cli.command {
        None => run_fetch(&config, &cli),
        Some(Commands::Install { update }) => {
            let mode = if *update {
                install::Mode::Update
            } else {
                install::Mode::Install
            };
            install::run(&config, mode)
        }
        Some(Commands::Update) => install::run(&config, install::Mode::Update),
        Some(Commands::Config) => show_config_info(&config),
    }
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "brlfetch=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config() -> Config {
    Config::load().unwrap_or_else(|err| {
        warn!("{err:#}; using default settings");
        Config::default()
    })
}

/// Update check, probes, then the combined display
fn run_fetch(config: &Config, cli: &Cli) -> Result<()> {
    if config.update.enabled && !cli.no_update_check {
        check_for_update(config);
    }

    let env = EnvSnapshot::capture();
    let runner = SystemRunner::new(Duration::from_millis(config.probes.command_timeout_ms));
    let platform = SysinfoPlatform;
    let metrics = metrics::detect(config.probes.extended_metrics);

    let ctx = ProbeContext {
        env: &env,
        runner: &runner,
        platform: &platform,
        metrics: metrics.as_ref(),
    };
    let facts = FactSet::collect(&ctx);

    let palette = if config.display.color && !cli.no_color {
        Palette::default()
    } else {
        Palette::plain()
    };

    for line in render::render(&art::TUX, &facts, &palette) {
        println!("{line}");
    }
    Ok(())
}

fn check_for_update(config: &Config) {
    let timeout = Duration::from_secs(config.update.timeout_seconds.max(1));
    let source = match HttpVersionSource::new(&config.update.version_url, timeout) {
        Ok(source) => source,
        Err(err) => {
            tracing::debug!("update check skipped: {err}");
            return;
        }
    };

    if let Some(advisory) = update::check(&source, update::VERSION) {
        eprintln!("{}", advisory.to_string().bright_yellow());
    }
}

fn show_config_info(config: &Config) -> Result<()> {
    println!("{}", "brlfetch Configuration\n".bright_cyan().bold());

    match Config::config_path() {
        Ok(path) => {
            println!(
                "{} {}",
                "Config file:".bright_yellow(),
                path.display().to_string().bright_white()
            );
            if path.exists() {
                println!("  {} {}", "Status:".bright_cyan(), "Exists".bright_green());
            } else {
                match config.save() {
                    Ok(()) => println!(
                        "  {} {}",
                        "Status:".bright_cyan(),
                        "Created with defaults".bright_green()
                    ),
                    Err(err) => println!(
                        "  {} {}",
                        "Note:".bright_yellow(),
                        format!("Could not create config file yet: {err:#}").bright_black()
                    ),
                }
            }
        }
        Err(err) => {
            println!(
                "{} Could not determine config path: {}",
                "Error:".bright_red(),
                err
            );
        }
    }

    println!("\n{}", "Update check:".bright_white().bold());
    println!("  {} {}", "Enabled:".bright_cyan(), config.update.enabled);
    println!("  {} {}", "Version URL:".bright_cyan(), config.update.version_url);
    println!(
        "  {} {}s",
        "Timeout:".bright_cyan(),
        config.update.timeout_seconds
    );

    println!("\n{}", "Probes:".bright_white().bold());
    println!(
        "  {} {}ms",
        "Command timeout:".bright_cyan(),
        config.probes.command_timeout_ms
    );
    println!(
        "  {} {}",
        "Extended metrics:".bright_cyan(),
        config.probes.extended_metrics
    );

    println!("\n{}", "Display:".bright_white().bold());
    println!("  {} {}", "Color:".bright_cyan(), config.display.color);

    println!("\n{}", "Install:".bright_white().bold());
    println!("  {} {}", "Payload URL:".bright_cyan(), config.install.payload_url);
    match install::install_dir(config) {
        Ok(dir) => println!("  {} {}", "Directory:".bright_cyan(), dir.display()),
        Err(err) => println!("  {} {}", "Directory:".bright_cyan(), err),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn install_update_flag_selects_update_mode() {
        let cli = Cli::parse_from(["brlfetch", "install", "-u"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Install { update: true })
        ));

        let cli = Cli::parse_from(["brlfetch", "--no-color", "--no-update-check"]);
        assert!(cli.command.is_none());
        assert!(cli.no_color && cli.no_update_check);
    }
}
