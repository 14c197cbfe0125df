use clap::Parser;
use pdl_core::error::{AppError, ErrorSeverity};
use pdl_core::storage::config::{Config, ConfigOverrides, Settings};
use pdl_core::utils::logging::{LogLevel, init_logger};
use std::path::PathBuf;

mod cli;

use cli::dispatcher::Dispatcher;
use cli::main_types::Cli;
use cli::prompt::TerminalPrompt;

#[tokio::main]
async fn main() {
    // Values from a local .env never override the real environment.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Load Config
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            init_logger(LogLevel::default());
            report(&err);
            std::process::exit(1);
        }
    };

    let level = if cli.verbose {
        config.log_level.min(LogLevel::Debug)
    } else {
        config.log_level
    };
    init_logger(level);
    log::debug!("Log level: {} ({})", level, level.ordinal());
    log::debug!("Writing results to {}", config.output_dir.display());

    let dispatcher = Dispatcher::new(config);

    if let Err(err) = dispatcher
        .dispatch(cli.query, cli.person, &TerminalPrompt)
        .await
    {
        report(&err);
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> pdl_core::Result<Config> {
    let settings_path = cli
        .config_dir
        .as_ref()
        .map(|dir| PathBuf::from(dir).join("config.toml"));
    let settings = Settings::load(settings_path)?;

    let overrides = ConfigOverrides {
        api_key: cli.api_key.clone(),
        log_level: cli.log_level.clone(),
        base_url: cli.base_url.clone(),
        output_dir: cli.output_dir.as_ref().map(PathBuf::from),
    };

    Ok(Config::resolve(overrides, settings)?)
}

fn report(err: &AppError) {
    match err.severity() {
        ErrorSeverity::Critical => log::error!("Fatal: {}", err),
        _ => log::error!("{}", err),
    }

    if let Some(hint) = err.troubleshooting_hint() {
        log::error!("Hint: {}", hint);
    }
}
