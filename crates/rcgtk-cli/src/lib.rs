//! CLI logic for the rcgtk converter.
//!
//! This module contains the core CLI logic: configuration, symbol table
//! construction, conversion and file output.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, process::Command};

use log::{debug, info, warn};
use miette::GraphicalReportHandler;

use rcgtk::{
    Converter, RcgtkError,
    config::{AppConfig, SymbolConfig},
    symbol::SymbolTable,
};
use rcgtk_parser::{error::Diagnostic, parse_defines};

use error_adapter::{render, warnings_to_reportables};

/// Run the rcgtk CLI application
///
/// This function builds the symbol table, converts the configured dialog of
/// the input script and writes the requested outputs.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `RcgtkError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Preprocessor failures
/// - Parsing and translation errors
/// - Asset manifest errors
pub fn run(args: &Args) -> Result<(), RcgtkError> {
    info!(input_path = args.input.as_str(); "Processing resource script");

    let app_config = apply_arguments(config::load_config(args.config.as_ref())?, args);
    let symbols = load_symbols(args, app_config.symbols())?;

    let source = fs::read_to_string(&args.input)?;
    let converter = Converter::new(app_config).with_symbols(symbols);

    if let Some(ui_output) = args.ui_output() {
        let conversion = converter.convert(&source)?;
        report_warnings(conversion.warnings(), &source);

        fs::write(ui_output, conversion.document())?;
        info!(output_file = ui_output; "Interface exported successfully");
    }

    if let Some(resources_output) = args.resources_output() {
        let manifest = converter.render_manifest(&source)?;

        fs::write(resources_output, manifest)?;
        info!(output_file = resources_output; "Resource manifest exported successfully");
    }

    Ok(())
}

/// Command-line dialog selection takes precedence over the configuration.
fn apply_arguments(config: AppConfig, args: &Args) -> AppConfig {
    let mut dialog = config.dialog().clone();

    let id = args
        .dialog_id
        .as_deref()
        .or(dialog.id())
        .unwrap_or(Args::DEFAULT_DIALOG_ID)
        .to_string();
    dialog = dialog.with_id(id);

    if let Some(anchor) = &args.anchor {
        dialog = dialog.with_anchor(anchor.as_str());
    }

    debug!(dialog:?; "Dialog selection");
    config.with_dialog(dialog)
}

fn load_symbols(args: &Args, symbols: &SymbolConfig) -> Result<SymbolTable, RcgtkError> {
    if let Some(header) = &args.header {
        let dump = preprocess(symbols.preprocessor(), header)?;
        return Ok(parse_defines(&dump));
    }

    if let Some(defines) = &args.defines {
        info!(path = defines.as_str(); "Reading define dump");
        return Ok(parse_defines(&fs::read_to_string(defines)?));
    }

    warn!("No `--header` or `--defines` given; identifiers are used verbatim");
    Ok(SymbolTable::new())
}

/// Run the preprocessor on `header` and return its standard output.
fn preprocess(command: &[String], header: &str) -> Result<String, RcgtkError> {
    let (program, arguments) = command
        .split_first()
        .ok_or_else(|| RcgtkError::Config("`symbols.preprocessor` is empty".to_string()))?;
    info!(program = program.as_str(), header; "Running preprocessor");

    let output = Command::new(program)
        .args(arguments)
        .arg(header)
        .output()
        .map_err(|err| RcgtkError::Preprocessor(format!("failed to run `{program}`: {err}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(RcgtkError::Preprocessor(format!(
            "`{program}` exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    String::from_utf8(output.stdout)
        .map_err(|err| RcgtkError::Preprocessor(format!("`{program}` output is not UTF-8: {err}")))
}

fn report_warnings(warnings: &[Diagnostic], source: &str) {
    if warnings.is_empty() {
        return;
    }

    let reporter = GraphicalReportHandler::new();
    for reportable in warnings_to_reportables(warnings, source) {
        warn!("{}", render(&reporter, &reportable));
    }
    let placeholders = warnings
        .iter()
        .filter(|diag| diag.code().is_some_and(|code| code.is_placeholder()))
        .count();
    info!(
        warnings = warnings.len(),
        placeholders;
        "Conversion finished with warnings"
    );
}
