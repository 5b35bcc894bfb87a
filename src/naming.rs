//! Canonical recipe names
//!
//! A canonical name is the human-readable key a recipe is looked up by.

/// Lowercase a name and join its words with `-`.
pub fn canonicalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
