//! Display titles derived from file and directory names.
//!
//! Every menu entry needs a human-readable title. When neither the
//! directory's `_config.toml` nor a page's front matter provides one, the
//! title is derived from the name on disk:
//!
//! - `MyDocsPage.md` → "My docs page"
//! - `getting-started/` → "Getting started"
//! - `HTMLParser.md` → "Html parser"
//! - `Net::Http` → "Net/http"
//!
//! Only the first character of the whole title is capitalized, not each word.

use regex::Regex;
use std::sync::LazyLock;

/// `HTMLParser` → `HTML Parser`: an uppercase run followed by a capitalized word.
static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap());

/// `myPage`, `v2Api` → `my Page`, `v2 Api`.
static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());

/// Convert a file or directory name into a display title.
///
/// Total and pure: any input, including the empty string, produces a title.
pub fn derive_title(name: &str) -> String {
    let spaced = name.replace("::", "/");
    let spaced = ACRONYM_BOUNDARY.replace_all(&spaced, "$1 $2");
    let spaced = CAMEL_BOUNDARY.replace_all(&spaced, "$1 $2");
    let lowered = spaced.replace('-', " ").to_lowercase();

    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Base name without its final extension.
///
/// - `intro.md` → `intro`
/// - `archive.tar.gz` → `archive.tar`
/// - `.hidden` → `.hidden`
/// - `README` → `README`
pub fn file_stem(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(0) | None => file_name,
        Some(dot) => &file_name[..dot],
    }
}

/// Whether a stem names the index page of its directory.
pub fn is_index(stem: &str) -> bool {
    stem == "index"
}
