use anyhow::Context;
use clap::Parser;
use registrar::domain::config::{LoggingConfig, RegistrarConfig};
use registrar::kernel::config::load_config;
use registrar_logger::{Logger, parse_level};
use registrar_shell::{Cli, Shell};
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg: RegistrarConfig =
        load_config(cli.config.as_ref()).context("Critical: Configuration is malformed")?;
    cli.apply(&mut cfg);

    // Level and file output come from the config, so events raised while loading it are
    // not recorded.
    let _log = init_logger(&cfg.logging)?;
    tracing::info!(config = ?cli.config, level = %cfg.logging.level, "Configuration loaded");

    let mut registry = registrar::init(&cfg).context("Failed to load seed data")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(stdin.lock(), stdout.lock(), cfg.shell.clone()).run(&mut registry)?;

    Ok(())
}

fn init_logger(logging: &LoggingConfig) -> anyhow::Result<Logger> {
    let builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level(parse_level(&logging.level)?);

    let logger = match &logging.directory {
        Some(dir) if logging.json => builder.path(dir).json().init(),
        Some(dir) => builder.path(dir).init(),
        None => builder.init(),
    }
    .context("Failed to initialize logging")?;

    Ok(logger)
}
