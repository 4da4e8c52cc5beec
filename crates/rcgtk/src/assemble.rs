//! Document assembly.
//!
//! Widget fragments are placed, in body order, inside a single `GtkGrid`
//! that is the only child of a `GtkWindow`.

/// GTK version the generated interface requires.
pub const GTK_VERSION: &str = "4.0";

/// Wraps `fragments` in a window and grid container.
///
/// Fragments are concatenated as given: no reordering, deduplication or
/// validation.
pub fn assemble<I, S>(window_id: &str, title: Option<&str>, fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut window = String::new();
    window.push_str(&format!("  <object class=\"GtkWindow\" id=\"{window_id}\">\n"));
    if let Some(title) = title {
        window.push_str(&format!("    <property name=\"title\">{title}</property>\n"));
    }
    window.push_str(
        "    <property name=\"can-focus\">False</property>\n\
         \x20   <child>\n\
         \x20     <object class=\"GtkGrid\">\n\
         \x20       <property name=\"visible\">True</property>\n\
         \x20       <property name=\"can-focus\">False</property>\n\
         \x20       <property name=\"column-homogeneous\">False</property>\n",
    );
    for fragment in fragments {
        window.push_str(fragment.as_ref());
    }
    window.push_str("      </object>\n    </child>\n  </object>\n");
    window
}

/// Wraps an assembled window in a complete GtkBuilder document.
pub fn render_document(window: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <interface>\n\
         \x20 <requires lib=\"gtk\" version=\"{GTK_VERSION}\"/>\n\
         {window}\
         </interface>\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragments_keep_order() {
        let window = assemble("window", None, ["<first/>\n", "<second/>\n", "<first/>\n"]);

        let first = window.find("<first/>").expect("first");
        let second = window.find("<second/>").expect("second");
        assert!(first < second);
        assert_eq!(window.matches("<first/>").count(), 2);
    }

    #[test]
    fn test_window_attributes() {
        let window = assemble("main", Some("Rufus 3.22"), Vec::<String>::new());

        assert!(window.starts_with("  <object class=\"GtkWindow\" id=\"main\">\n"));
        assert!(window.contains("<property name=\"title\">Rufus 3.22</property>"));
        assert!(window.contains("<object class=\"GtkGrid\">"));
    }

    #[test]
    fn test_no_title_without_caption() {
        let window = assemble("window", None, Vec::<String>::new());

        assert!(!window.contains("\"title\""));
    }

    #[test]
    fn test_render_document() {
        let document = render_document(&assemble("window", None, Vec::<String>::new()));

        assert!(document.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<interface>\n"));
        assert!(document.contains("  <requires lib=\"gtk\" version=\"4.0\"/>\n  <object"));
        assert!(document.ends_with("  </object>\n</interface>\n"));
    }
}
