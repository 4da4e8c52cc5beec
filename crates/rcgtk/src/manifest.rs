//! GResources manifest generation.

use log::debug;

use rcgtk_parser::{
    AssetEntry,
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
};

use crate::config::AssetConfig;

const HEADER_COMMENT: &str = "<!-- GResources XML file autogenerated by rcgtk - DO NOT EDIT! -->";

/// Renders the manifest listing every asset under one `<gresource>`.
///
/// Each location must start with the configured source prefix, which is
/// removed; the alias is the resource name.
///
/// # Errors
///
/// Returns `E122` for every location outside the source prefix.
pub fn render_manifest(entries: &[AssetEntry], config: &AssetConfig) -> Result<String, ParseError> {
    let mut collector = DiagnosticCollector::new();
    let mut files = String::new();

    for entry in entries {
        match entry.location().strip_prefix(config.source_prefix()) {
            Some(path) => {
                files.push_str(&format!(
                    "    <file alias=\"{}\">{path}</file>\n",
                    entry.alias()
                ));
            }
            None => collector.emit(
                Diagnostic::error(format!(
                    "resource `{}` is outside `{}`",
                    entry.alias(),
                    config.source_prefix()
                ))
                .with_code(ErrorCode::E122)
                .with_label(entry.span(), "unexpected location")
                .with_help(format!(
                    "move the file below `{}` or change `assets.source_prefix`",
                    config.source_prefix()
                )),
            ),
        }
    }
    collector.finish()?;
    debug!(files = entries.len(); "Rendered resource manifest");

    Ok(format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         {HEADER_COMMENT}\n\
         <gresources>\n\
         \x20 <gresource prefix=\"{}\">\n\
         {files}\
         \x20 </gresource>\n\
         </gresources>\n",
        config.resource_prefix()
    ))
}

#[cfg(test)]
mod tests {
    use rcgtk_parser::Span;

    use super::*;

    fn entry(alias: &str, location: &str) -> AssetEntry {
        AssetEntry::new(alias, location, Span::default())
    }

    #[test]
    fn test_manifest() {
        let manifest = render_manifest(
            &[
                entry("IDR_FD_COMMAND_COM", "../res/freedos/COMMAND.COM"),
                entry("IDR_UEFI_NTFS", "../res/uefi/uefi-ntfs.img"),
            ],
            &AssetConfig::default(),
        )
        .expect("valid manifest");

        assert_eq!(
            manifest,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <!-- GResources XML file autogenerated by rcgtk - DO NOT EDIT! -->\n\
             <gresources>\n\
             \x20 <gresource prefix=\"/res/\">\n\
             \x20   <file alias=\"IDR_FD_COMMAND_COM\">freedos/COMMAND.COM</file>\n\
             \x20   <file alias=\"IDR_UEFI_NTFS\">uefi/uefi-ntfs.img</file>\n\
             \x20 </gresource>\n\
             </gresources>\n"
        );
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = render_manifest(&[], &AssetConfig::default()).expect("valid manifest");

        assert!(manifest.contains("<gresource prefix=\"/res/\">\n  </gresource>"));
    }

    #[test]
    fn test_prefix_mismatch_is_fatal() {
        let err = render_manifest(
            &[entry("A", "../res/a.bin"), entry("B", "/tmp/b.bin"), entry("C", "res/c")],
            &AssetConfig::default(),
        )
        .unwrap_err();

        assert_eq!(err.diagnostics().len(), 2);
        assert!(
            err.diagnostics()
                .iter()
                .all(|diagnostic| diagnostic.code() == Some(ErrorCode::E122))
        );
    }
}
