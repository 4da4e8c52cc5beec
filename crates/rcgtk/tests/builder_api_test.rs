//! Integration tests for the Converter API
//!
//! These tests drive whole conversions through the public API.

use rcgtk::{
    Converter, RcgtkError,
    config::{AppConfig, DialogConfig, GridRatios},
    overrides::OverrideRules,
    symbol::SymbolTable,
};
use rcgtk_parser::ErrorCode;

const SCRIPT: &str = r#"
IDD_ABOUTBOX DIALOGEX 0, 0, 313, 198
CAPTION "About Rufus"
BEGIN
    DEFPUSHBUTTON   "OK",IDOK,261,175,50,14,WS_GROUP
END

IDD_DIALOG DIALOGEX 12, 12, 232, 326
STYLE DS_SETFONT | WS_POPUP | WS_CAPTION
CAPTION "Rufus 3.22"
BEGIN
    LTEXT           "Device",IDS_DEVICE_TXT,8,6,22,8
    COMBOBOX        IDC_DEVICE,8,30,196,10,CBS_DROPDOWNLIST | WS_VSCROLL
    CONTROL         "Quick format",IDC_QUICK_FORMAT,"Button",
                    BS_AUTOCHECKBOX | WS_TABSTOP,8,97,110,10
    CONTROL         "",IDC_STATIC,"Static",SS_ETCHEDHORZ,8,120,216,1
    PUSHBUTTON      "Hidden",IDC_HIDDEN,8,130,20,10,NOT WS_VISIBLE | WS_TABSTOP
    EDITTEXT        IDC_LABEL,8,140,216,12
END

// Generated from the TEXTINCLUDE 3 resource.
IDR_FD_COMMAND_COM      RCDATA                  "../res/freedos/COMMAND.COM"
"#;

fn symbols() -> SymbolTable {
    [
        ("IDS_DEVICE_TXT", "2001"),
        ("IDC_DEVICE", "1001"),
        ("IDC_QUICK_FORMAT", "1002"),
        ("IDC_HIDDEN", "1003"),
        ("IDC_LABEL", "1004"),
        ("IDC_STATIC", "-1"),
    ]
    .into_iter()
    .collect()
}

fn rufus_config() -> AppConfig {
    AppConfig::default().with_dialog(
        DialogConfig::default()
            .with_id("IDD_DIALOG")
            .with_anchor("CAPTION \"Rufus"),
    )
}

/// Splits a document into its grid children.
fn children(document: &str) -> Vec<String> {
    document
        .split("        <child>")
        .skip(1)
        .map(str::to_string)
        .collect()
}

#[test]
fn test_converter_default() {
    let _converter = Converter::default();
}

#[test]
fn test_convert_second_dialog() {
    let converter = Converter::new(rufus_config()).with_symbols(symbols());

    let conversion = converter.convert(SCRIPT).expect("Failed to convert");
    let document = conversion.document();

    assert!(document.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(document.contains("<requires lib=\"gtk\" version=\"4.0\"/>"));
    assert!(document.contains("<property name=\"title\">Rufus 3.22</property>"));
    assert!(!document.contains("IDOK"), "first dialog must not leak in");

    let label = document.find("id=\"ID_2001\"").expect("label");
    let combo = document.find("id=\"ID_1001\"").expect("combo box");
    let check = document.find("id=\"ID_1002\"").expect("checkbox");
    let edit = document.find("id=\"ID_1004\"").expect("edit field");
    assert!(label < combo && combo < check && check < edit);
}

#[test]
fn test_control_button_with_checkbox_style() {
    let converter = Converter::new(rufus_config()).with_symbols(symbols());

    let document = converter.convert(SCRIPT).expect("Failed to convert").into_document();

    assert!(document.contains("<object class=\"GtkCheckButton\" id=\"ID_1002\">"));
    assert!(!document.contains("<object class=\"GtkButton\" id=\"ID_1002\">"));
}

#[test]
fn test_visibility() {
    let converter = Converter::new(rufus_config()).with_symbols(symbols());

    let document = converter.convert(SCRIPT).expect("Failed to convert").into_document();
    let children = children(&document);

    let label = children.iter().find(|c| c.contains("ID_2001")).expect("label");
    assert!(label.contains("<property name=\"visible\">True</property>"));

    let hidden = children.iter().find(|c| c.contains("ID_1003")).expect("button");
    assert!(hidden.contains("<property name=\"visible\">False</property>"));
}

#[test]
fn test_unsupported_static_control_does_not_abort() {
    let converter = Converter::new(rufus_config()).with_symbols(symbols());

    let conversion = converter.convert(SCRIPT).expect("Failed to convert");

    assert!(
        conversion
            .document()
            .contains("<!-- UNSUPPORTED CONTROL STYLE OF 'Static' -->")
    );
    let codes: Vec<_> = conversion.warnings().iter().filter_map(|w| w.code()).collect();
    assert_eq!(codes, [ErrorCode::W002]);
    assert!(conversion.document().contains("ID_1004"), "later elements still translated");
}

#[test]
fn test_unresolved_identifiers_are_warnings() {
    let converter = Converter::new(rufus_config());

    let conversion = converter.convert(SCRIPT).expect("Failed to convert");

    assert!(conversion.document().contains("id=\"IDC_DEVICE\""));
    let unresolved = conversion
        .warnings()
        .iter()
        .filter(|w| w.code() == Some(ErrorCode::W001))
        .count();
    assert_eq!(unresolved, 5);
}

#[test]
fn test_without_anchor_uses_last_dialog() {
    let converter = Converter::default().with_symbols(symbols());

    let dialog = converter.parse_dialog(SCRIPT).expect("Failed to parse");

    assert_eq!(dialog.id(), "IDD_DIALOG");
}

#[test]
fn test_dialog_id_without_anchor() {
    let config = AppConfig::default().with_dialog(DialogConfig::default().with_id("IDD_ABOUTBOX"));
    let converter = Converter::new(config);

    let dialog = converter.parse_dialog(SCRIPT).expect("Failed to parse");

    assert_eq!(dialog.caption(), Some("About Rufus"));
}

#[test]
fn test_missing_anchor_is_parse_error() {
    let config = AppConfig::default().with_dialog(DialogConfig::default().with_anchor("CAPTION \"Nope"));

    let err = Converter::new(config).convert(SCRIPT).unwrap_err();

    match err {
        RcgtkError::Parse { err, src } => {
            assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E111));
            assert_eq!(src, SCRIPT);
        }
        other => panic!("Expected a parse error, got {other:?}"),
    }
}

#[test]
fn test_schema_errors_are_fatal() {
    let source = "IDD_X DIALOG 0,0,1,1\nBEGIN\n LTEXT \"A\",IDC_A,1\n EDITTEXT IDC_B,x,1,1,1\nEND\n";

    let err = Converter::default().convert(source).unwrap_err();

    let RcgtkError::Parse { err, .. } = err else {
        panic!("Expected a parse error");
    };
    let codes: Vec<_> = err.diagnostics().iter().filter_map(|d| d.code()).collect();
    assert!(codes.contains(&ErrorCode::E102));
    assert!(codes.contains(&ErrorCode::E103));
}

#[test]
fn test_invalid_grid_ratio() {
    let config: AppConfig = toml::from_str("[grid]\nrow_ratio = 0\n").expect("valid toml");

    let err = Converter::new(config).convert(SCRIPT).unwrap_err();

    assert!(matches!(err, RcgtkError::Config(_)));
}

#[test]
fn test_custom_grid_ratios() {
    let config: AppConfig =
        toml::from_str("[grid]\ncolumn_ratio = 1\nrow_ratio = 1\nrow_compression = 1\n")
            .expect("valid toml");
    assert_eq!(config.grid(), GridRatios { column_ratio: 1.0, row_ratio: 1.0, row_compression: 1.0 });
    let converter = Converter::new(config.with_dialog(rufus_config().dialog().clone()))
        .with_symbols(symbols());

    let document = converter.convert(SCRIPT).expect("Failed to convert").into_document();
    let children = children(&document);
    let edit = children.iter().find(|c| c.contains("ID_1004")).expect("edit field");

    assert!(edit.contains("<property name=\"column-span\">216</property>"));
    assert!(edit.contains("<property name=\"row-span\">12</property>"));
}

#[test]
fn test_combo_box_height_rule() {
    let source = "IDD_X DIALOG 0,0,100,100\nBEGIN\n COMBOBOX IDC_DEVICE,8,30,196,400,CBS_DROPDOWNLIST\nEND\n";
    let row_span = |converter: Converter| {
        let document = converter.convert(source).expect("Failed to convert").into_document();
        let start = document.find("name=\"row-span\">").expect("row-span") + "name=\"row-span\">".len();
        let end = start + document[start..].find('<').expect("closing tag");
        document[start..end].to_string()
    };

    let with_rules = row_span(Converter::default().with_symbols(symbols()));
    let without_rules = row_span(
        Converter::default()
            .with_symbols(symbols())
            .with_rules(OverrideRules::new()),
    );

    assert_eq!(with_rules, "1");
    assert_eq!(without_rules, "2");
}

#[test]
fn test_negative_coordinates_are_clamped() {
    let source = "IDD_X DIALOG 0,0,1,1\nBEGIN\n LTEXT \"A\",IDC_A,-4,2,30,8\nEND\n";

    let conversion = Converter::default().convert(source).expect("Failed to convert");
    let document = conversion.document();

    assert!(document.contains("<property name=\"column\">0</property>"));
    assert!(document.contains("<property name=\"column-span\">4</property>"));
    assert!(
        conversion
            .warnings()
            .iter()
            .all(|w| w.code() == Some(ErrorCode::W001))
    );
}

#[test]
fn test_render_manifest() {
    let manifest = Converter::default()
        .render_manifest(SCRIPT)
        .expect("Failed to render manifest");

    assert!(manifest.contains("<file alias=\"IDR_FD_COMMAND_COM\">freedos/COMMAND.COM</file>"));
}
