//! Command-line argument definitions for the rcgtk CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the input script, the symbol source, the
//! outputs to write, the dialog to convert, configuration and logging.

use clap::Parser;

/// Command-line arguments for the rcgtk converter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input resource script
    #[arg(help = "Path to the input .rc file")]
    pub input: String,

    /// C header defining the control identifiers; run through the
    /// configured preprocessor
    #[arg(long, conflicts_with = "defines")]
    pub header: Option<String>,

    /// Pre-generated `#define` dump to read identifiers from
    #[arg(long)]
    pub defines: Option<String>,

    /// Path of the generated GtkBuilder document
    #[arg(long)]
    pub ui_output: Option<String>,

    /// Path of the generated GResources manifest
    #[arg(long)]
    pub resources_output: Option<String>,

    /// Text inside the dialog header used to locate the dialog
    #[arg(long)]
    pub anchor: Option<String>,

    /// Identifier of the dialog to convert
    #[arg(long)]
    pub dialog_id: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Interface document path used when no output is requested.
    pub const DEFAULT_UI_OUTPUT: &'static str = "window.ui";

    /// Dialog converted when neither the command line nor the configuration
    /// names one.
    pub const DEFAULT_DIALOG_ID: &'static str = "IDD_DIALOG";

    /// The interface document path, if one should be written.
    ///
    /// Without any output flag the interface goes to
    /// [`DEFAULT_UI_OUTPUT`](Self::DEFAULT_UI_OUTPUT).
    pub fn ui_output(&self) -> Option<&str> {
        match (&self.ui_output, &self.resources_output) {
            (Some(path), _) => Some(path.as_str()),
            (None, None) => Some(Self::DEFAULT_UI_OUTPUT),
            (None, Some(_)) => None,
        }
    }

    pub fn resources_output(&self) -> Option<&str> {
        self.resources_output.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["rcgtk", "rufus.rc"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).expect("valid arguments")
    }

    #[test]
    fn test_default_output() {
        let args = args(&[]);

        assert_eq!(args.ui_output(), Some("window.ui"));
        assert_eq!(args.resources_output(), None);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_resources_only() {
        let args = args(&["--resources-output", "GResources.xml"]);

        assert_eq!(args.ui_output(), None);
        assert_eq!(args.resources_output(), Some("GResources.xml"));
    }

    #[test]
    fn test_both_outputs() {
        let args = args(&["--ui-output", "a.ui", "--resources-output", "b.xml"]);

        assert_eq!(args.ui_output(), Some("a.ui"));
        assert_eq!(args.resources_output(), Some("b.xml"));
    }

    #[test]
    fn test_header_conflicts_with_defines() {
        let result =
            Args::try_parse_from(["rcgtk", "rufus.rc", "--header", "a.h", "--defines", "d.txt"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_dialog_selection() {
        let args = args(&["--anchor", "CAPTION \"Rufus", "--dialog-id", "IDD_MAIN", "-c", "c.toml"]);

        assert_eq!(args.anchor.as_deref(), Some("CAPTION \"Rufus"));
        assert_eq!(args.dialog_id.as_deref(), Some("IDD_MAIN"));
        assert_eq!(args.config.as_deref(), Some("c.toml"));
    }
}
