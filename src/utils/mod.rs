//! Project-specific utilities live here.

/// Attachment name for a CSV export, `books_{locale}_{seed}.csv`.
///
/// The locale comes straight from the query string, so anything outside
/// `[A-Za-z0-9-]` is replaced before it reaches a response header.
pub fn export_filename(locale: &str, seed: u64) -> String {
    let locale: String = locale
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    format!("books_{locale}_{seed}.csv")
}
