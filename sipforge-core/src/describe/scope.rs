use crate::domain::FormatEntry;
use crate::formats::TOP_FORMATS;

/// Compose the human-readable scope and content note for one package.
/// Empty packages get an empty note; empty format labels render as
/// "Unidentified".
pub fn compose_scope_note(
    package_name: &str,
    entries: &[FormatEntry],
    extent_is_empty: bool,
) -> String {
    if extent_is_empty {
        return String::new();
    }
    let formats: Vec<&str> = entries
        .iter()
        .take(TOP_FORMATS)
        .map(|e| {
            if e.label.is_empty() {
                "Unidentified"
            } else {
                e.label.as_str()
            }
        })
        .collect();
    format!(
        "Original directory name: \"{}\". Most common file formats: {}",
        package_name,
        formats.join(", ")
    )
}
