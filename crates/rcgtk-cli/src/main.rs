//! `rcgtk` binary.

use std::process::ExitCode;

use clap::Parser;
use log::{LevelFilter, debug, error, info};
use miette::GraphicalReportHandler;

use rcgtk_cli::{
    Args,
    error_adapter::{render, to_reportables},
};

fn main() -> ExitCode {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logging(&args.log_level);
    debug!(args:?; "Parsed arguments");

    match rcgtk_cli::run(&args) {
        Ok(()) => {
            info!("Conversion completed");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let reporter = GraphicalReportHandler::new();
            for reportable in to_reportables(&err) {
                error!("{}", render(&reporter, &reportable));
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(level: &str) {
    let filter = level.parse::<LevelFilter>().unwrap_or_else(|_| {
        eprintln!("Unknown log level `{level}`, falling back to `warn`");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter)
        .init();
    info!(level:? = filter; "Logging initialized");
}
