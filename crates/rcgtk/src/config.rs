//! Configuration types for rcgtk conversions.
//!
//! This module provides configuration structures that control how a
//! resource script is located, translated and written out. All types
//! implement [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining every section.
//! - [`GridRatios`] - Divisors of the dialog-unit to grid-cell mapping.
//! - [`SymbolConfig`] - Identifier prefix and preprocessor command.
//! - [`DialogConfig`] - Which dialog to convert and how to name its window.
//! - [`AssetConfig`] - Where asset entries start and how their paths map.
//!
//! # Example
//!
//! ```
//! # use rcgtk::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.symbols().prefix(), "ID_");
//! assert_eq!(config.dialog().window_id(), "window");
//! ```

use serde::Deserialize;

pub use rcgtk_core::grid::GridRatios;
use rcgtk_parser::DEFAULT_SECTION_MARKER;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Grid mapping section.
    #[serde(default)]
    grid: GridRatios,

    /// Symbol resolution section.
    #[serde(default)]
    symbols: SymbolConfig,

    /// Dialog selection section.
    #[serde(default)]
    dialog: DialogConfig,

    /// Asset manifest section.
    #[serde(default)]
    assets: AssetConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(
        grid: GridRatios,
        symbols: SymbolConfig,
        dialog: DialogConfig,
        assets: AssetConfig,
    ) -> Self {
        Self {
            grid,
            symbols,
            dialog,
            assets,
        }
    }

    pub fn grid(&self) -> GridRatios {
        self.grid
    }

    pub fn symbols(&self) -> &SymbolConfig {
        &self.symbols
    }

    pub fn dialog(&self) -> &DialogConfig {
        &self.dialog
    }

    pub fn assets(&self) -> &AssetConfig {
        &self.assets
    }

    /// Replaces the dialog section.
    pub fn with_dialog(mut self, dialog: DialogConfig) -> Self {
        self.dialog = dialog;
        self
    }
}

/// How identifiers are resolved.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SymbolConfig {
    /// Prepended to every resolved identifier value.
    prefix: String,

    /// Command that prints a `#define` dump; the header path is appended.
    preprocessor: Vec<String>,
}

impl SymbolConfig {
    pub const DEFAULT_PREFIX: &'static str = "ID_";

    pub fn new(prefix: impl Into<String>, preprocessor: Vec<String>) -> Self {
        Self {
            prefix: prefix.into(),
            preprocessor,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The preprocessor program followed by its arguments.
    pub fn preprocessor(&self) -> &[String] {
        &self.preprocessor
    }
}

impl Default for SymbolConfig {
    fn default() -> Self {
        Self {
            prefix: Self::DEFAULT_PREFIX.to_string(),
            preprocessor: ["gcc", "-E", "-dD"].map(String::from).to_vec(),
        }
    }
}

/// Which dialog block is converted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DialogConfig {
    /// Required first word of the declaration line, if any.
    id: Option<String>,

    /// Text inside the dialog header used to find the block. Without it the
    /// search starts at the end of the file.
    anchor: Option<String>,

    /// `id` attribute of the generated window object.
    window_id: String,
}

impl DialogConfig {
    pub const DEFAULT_WINDOW_ID: &'static str = "window";

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }

    pub fn window_id(&self) -> &str {
        &self.window_id
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }

    pub fn with_window_id(mut self, window_id: impl Into<String>) -> Self {
        self.window_id = window_id.into();
        self
    }
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            id: None,
            anchor: None,
            window_id: Self::DEFAULT_WINDOW_ID.to_string(),
        }
    }
}

/// How embedded assets are listed in the manifest.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Comment after which asset entries are scanned.
    section_marker: String,

    /// Prefix every asset location must start with; it is stripped.
    source_prefix: String,

    /// `prefix` attribute of the generated `<gresource>` element.
    resource_prefix: String,
}

impl AssetConfig {
    pub const DEFAULT_SOURCE_PREFIX: &'static str = "../res/";
    pub const DEFAULT_RESOURCE_PREFIX: &'static str = "/res/";

    pub fn section_marker(&self) -> &str {
        &self.section_marker
    }

    pub fn source_prefix(&self) -> &str {
        &self.source_prefix
    }

    pub fn resource_prefix(&self) -> &str {
        &self.resource_prefix
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            section_marker: DEFAULT_SECTION_MARKER.to_string(),
            source_prefix: Self::DEFAULT_SOURCE_PREFIX.to_string(),
            resource_prefix: Self::DEFAULT_RESOURCE_PREFIX.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.grid(), GridRatios::default());
        assert_eq!(config.symbols().preprocessor(), ["gcc", "-E", "-dD"]);
        assert_eq!(config.dialog().id(), None);
        assert_eq!(config.assets().source_prefix(), "../res/");
        assert_eq!(config.assets().resource_prefix(), "/res/");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [grid]
            row_compression = 40

            [dialog]
            id = "IDD_DIALOG"
            "#,
        )
        .expect("valid config");

        assert_eq!(config.grid().row_compression, 40.0);
        assert_eq!(config.grid().column_ratio, GridRatios::DEFAULT_COLUMN_RATIO);
        assert_eq!(config.dialog().id(), Some("IDD_DIALOG"));
        assert_eq!(config.dialog().window_id(), "window");
        assert_eq!(config.symbols().prefix(), "ID_");
    }

    #[test]
    fn test_full_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [grid]
            column_ratio = 10
            row_ratio = 5
            row_compression = 1

            [symbols]
            prefix = "RES_"
            preprocessor = ["cpp", "-dM"]

            [dialog]
            anchor = "CAPTION \"Main"
            window_id = "main_window"

            [assets]
            section_marker = "// assets"
            source_prefix = "res/"
            resource_prefix = "/org/example/"
            "#,
        )
        .expect("valid config");

        assert_eq!(config.grid().row_ratio, 5.0);
        assert_eq!(config.symbols().prefix(), "RES_");
        assert_eq!(config.symbols().preprocessor(), ["cpp", "-dM"]);
        assert_eq!(config.dialog().anchor(), Some("CAPTION \"Main"));
        assert_eq!(config.dialog().window_id(), "main_window");
        assert_eq!(config.assets().section_marker(), "// assets");
        assert_eq!(config.assets().resource_prefix(), "/org/example/");
    }

    #[test]
    fn test_dialog_builders() {
        let dialog = DialogConfig::default()
            .with_id("IDD_MAIN")
            .with_anchor("CAPTION")
            .with_window_id("main");

        assert_eq!(dialog.id(), Some("IDD_MAIN"));
        assert_eq!(dialog.anchor(), Some("CAPTION"));
        assert_eq!(dialog.window_id(), "main");
    }
}
