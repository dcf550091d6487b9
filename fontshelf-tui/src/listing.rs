//! Non-interactive output for `fontshelf list`.

use std::collections::BTreeMap;

use fontshelf_core::Catalog;

/// Grouped catalog as text: a letter line, then its fonts indented.
/// With `results`, a flat list of matches instead.
pub fn render_plain(catalog: &Catalog, results: Option<&[String]>) -> String {
    let mut out = String::new();

    match results {
        Some(results) => {
            for family in results {
                out.push_str(family);
                out.push('\n');
            }
        }
        None => {
            for bucket in catalog.buckets() {
                out.push_str(&bucket.letter.to_string());
                out.push('\n');
                for family in bucket.sorted_fonts() {
                    out.push_str("  ");
                    out.push_str(family);
                    out.push('\n');
                }
            }
        }
    }

    out
}

/// Same selection as [`render_plain`], as JSON: an object of letter to
/// families, or an array of matches.
pub fn render_json(catalog: &Catalog, results: Option<&[String]>) -> serde_json::Result<String> {
    match results {
        Some(results) => serde_json::to_string_pretty(results),
        None => {
            let sections: BTreeMap<String, Vec<&str>> = catalog
                .buckets()
                .map(|bucket| (bucket.letter.to_string(), bucket.sorted_fonts()))
                .collect();
            serde_json::to_string_pretty(&sections)
        }
    }
}
