//! Sweeplog CLI - Reports on room cleaning history.

use clap::Parser;
use sweeplog_cli::commands;
use sweeplog_cli::repl;
use sweeplog_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> sweeplog_cli::Result<()> {
    let cli = Cli::parse();

    // Log to stderr so report output stays clean
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::path()?,
    };
    let mut config = Config::load_from(&config_path)?;

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&config, cli.rooms, cli.log, &formatter)?;
        }
        Some(Command::Config(args)) => {
            commands::execute_config(
                args,
                &mut config,
                &config_path,
                cli.rooms.as_deref(),
                cli.log.as_deref(),
                &formatter,
            )?;
        }
        Some(cmd) => {
            let paths = config.resolve_data(cli.rooms.as_deref(), cli.log.as_deref())?;
            let reports = commands::load_reports(&config, &paths)?;
            commands::execute(cmd, &reports, &formatter)?;
        }
    }

    Ok(())
}
