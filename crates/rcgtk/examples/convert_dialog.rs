//! Example: Converting a dialog held in memory
//!
//! Parses a small resource script, prints the generated GtkBuilder document
//! and lists the warnings raised while translating.

use rcgtk::{
    Converter,
    config::{AppConfig, DialogConfig},
    symbol::SymbolTable,
};

const SOURCE: &str = r#"
IDD_DIALOG DIALOGEX 12, 12, 232, 120
CAPTION "Example"
BEGIN
    LTEXT           "Device",IDC_DEVICE_TXT,8,6,60,8
    COMBOBOX        IDC_DEVICE,8,18,216,80,CBS_DROPDOWNLIST | WS_TABSTOP
    CONTROL         "Quick format",IDC_QUICK_FORMAT,"Button",
                    BS_AUTOCHECKBOX | WS_TABSTOP,8,40,110,10
    ICON            IDI_ICON,IDC_ICON,200,40,20,20
    DEFPUSHBUTTON   "Start",IDC_START,174,100,50,14
END
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let symbols: SymbolTable = [
        ("IDC_DEVICE_TXT", "1000"),
        ("IDC_DEVICE", "1001"),
        ("IDC_QUICK_FORMAT", "1002"),
        ("IDC_START", "1003"),
    ]
    .into_iter()
    .collect();

    let config = AppConfig::default().with_dialog(DialogConfig::default().with_id("IDD_DIALOG"));
    let converter = Converter::new(config).with_symbols(symbols);

    let conversion = converter.convert(SOURCE)?;
    println!("{}", conversion.document());

    for warning in conversion.warnings() {
        eprintln!("{warning}");
    }

    Ok(())
}
