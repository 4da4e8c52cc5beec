//! rcgtk - Translate Windows dialog resources into GTK 4 interfaces.
//!
//! Reads one dialog block of a resource script (`.rc`) and produces a
//! GtkBuilder document laying its controls out on a `GtkGrid`, plus a
//! GResources manifest for the script's embedded binary assets.

pub mod config;
pub mod overrides;
pub mod resolver;
pub mod widget;

mod assemble;
mod error;
mod manifest;
mod translate;

pub use rcgtk_core::{geometry, grid, semantic, style, symbol};

pub use assemble::{GTK_VERSION, assemble, render_document};
pub use error::RcgtkError;
pub use translate::Translator;

use log::{debug, info, trace};

use rcgtk_core::{grid::GridMapper, symbol::SymbolTable};
use rcgtk_parser::{
    DialogDescriptor, error::Diagnostic, error::DiagnosticCollector, locate_anchor,
    parse_dialog_block, scan_assets,
};

use config::AppConfig;
use overrides::OverrideRules;
use resolver::SymbolResolver;

/// The result of translating a dialog: the GtkBuilder document and the
/// warnings raised on the way.
#[derive(Debug, Clone)]
pub struct Conversion {
    document: String,
    warnings: Vec<Diagnostic>,
}

impl Conversion {
    /// The complete GtkBuilder document.
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Recoverable problems: unresolved identifiers and untranslated
    /// elements.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    pub fn into_document(self) -> String {
        self.document
    }
}

/// Builder for converting resource scripts.
///
/// Holds the configuration, the symbol table and the override rules for
/// every conversion it performs.
///
/// # Examples
///
/// ```
/// use rcgtk::{Converter, config::AppConfig};
///
/// let source = r#"
/// IDD_DIALOG DIALOGEX 12, 12, 232, 326
/// CAPTION "Rufus"
/// BEGIN
///     LTEXT "Device",IDC_DEVICE_TXT,8,6,22,8
/// END
/// "#;
///
/// let symbols = [("IDC_DEVICE_TXT", "1001")].into_iter().collect();
/// let converter = Converter::new(AppConfig::default()).with_symbols(symbols);
///
/// let conversion = converter.convert(source).expect("Failed to convert");
/// assert!(conversion.document().contains(r#"id="ID_1001""#));
/// assert!(conversion.warnings().is_empty());
/// ```
#[derive(Debug)]
pub struct Converter {
    config: AppConfig,
    resolver: SymbolResolver,
    rules: OverrideRules,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl Converter {
    /// Create a converter with an empty symbol table and the standard
    /// override rules.
    pub fn new(config: AppConfig) -> Self {
        let resolver = SymbolResolver::new(SymbolTable::new(), config.symbols().prefix());
        let rules = OverrideRules::standard(config.grid());
        Self {
            config,
            resolver,
            rules,
        }
    }

    /// Use `symbols` to resolve control identifiers.
    pub fn with_symbols(mut self, symbols: SymbolTable) -> Self {
        self.resolver = SymbolResolver::new(symbols, self.config.symbols().prefix());
        self
    }

    /// Replace the override rules.
    pub fn with_rules(mut self, rules: OverrideRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Locate and parse the configured dialog block.
    ///
    /// The search starts at the configured anchor text, or at the end of the
    /// source when no anchor is set.
    ///
    /// # Errors
    ///
    /// Returns `RcgtkError::Parse` if the anchor or the dialog declaration is
    /// missing, or the block is not closed.
    pub fn parse_dialog(&self, source: &str) -> Result<DialogDescriptor, RcgtkError> {
        info!("Parsing dialog block");
        let dialog_config = self.config.dialog();

        let index = match dialog_config.anchor() {
            Some(anchor) => locate_anchor(source, anchor)
                .map_err(|err| RcgtkError::new_parse_error(err, source))?,
            None => source.len(),
        };
        debug!(index; "Searching for dialog declaration");

        let dialog = parse_dialog_block(source, index, dialog_config.id())
            .map_err(|err| RcgtkError::new_parse_error(err, source))?;
        trace!(dialog:?; "Parsed dialog");

        Ok(dialog)
    }

    /// Translate a parsed dialog into a GtkBuilder document.
    ///
    /// `source` must be the text `dialog` was parsed from; it is attached to
    /// errors for reporting.
    ///
    /// # Errors
    ///
    /// Returns `RcgtkError::Config` for invalid grid ratios and
    /// `RcgtkError::Parse` with every schema violation in the body.
    pub fn render_interface(
        &self,
        source: &str,
        dialog: &DialogDescriptor,
    ) -> Result<Conversion, RcgtkError> {
        let mapper = GridMapper::new(self.config.grid())
            .map_err(|err| RcgtkError::Config(err.to_string()))?;
        let translator = Translator::new(&self.resolver, mapper, &self.rules);

        info!(elements = dialog.body().len(); "Translating dialog elements");
        let mut diagnostics = DiagnosticCollector::new();
        let mut fragments = Vec::with_capacity(dialog.body().len());
        for directive in dialog.body() {
            fragments.push(translator.translate(directive, &mut diagnostics));
        }
        let warnings = diagnostics
            .finish()
            .map_err(|err| RcgtkError::new_parse_error(err, source))?;
        debug!(warnings = warnings.len(); "Dialog elements translated");

        let window = assemble(self.config.dialog().window_id(), dialog.caption(), &fragments);
        Ok(Conversion {
            document: render_document(&window),
            warnings,
        })
    }

    /// Parse and translate the configured dialog of `source`.
    ///
    /// # Errors
    ///
    /// See [`Converter::parse_dialog`] and [`Converter::render_interface`].
    pub fn convert(&self, source: &str) -> Result<Conversion, RcgtkError> {
        let dialog = self.parse_dialog(source)?;
        self.render_interface(source, &dialog)
    }

    /// Build the GResources manifest for the assets listed in `source`.
    ///
    /// # Errors
    ///
    /// Returns `RcgtkError::Parse` for malformed asset lines or locations
    /// outside the configured source prefix.
    pub fn render_manifest(&self, source: &str) -> Result<String, RcgtkError> {
        info!("Scanning asset entries");
        let assets = self.config.assets();

        let entries = scan_assets(source, assets.section_marker())
            .map_err(|err| RcgtkError::new_parse_error(err, source))?;
        let manifest = manifest::render_manifest(&entries, assets)
            .map_err(|err| RcgtkError::new_parse_error(err, source))?;

        info!(assets = entries.len(); "Resource manifest rendered");
        Ok(manifest)
    }
}
