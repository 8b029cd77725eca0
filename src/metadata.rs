//! Page front matter and metadata resolution.
//!
//! A source file may open with a YAML front matter block:
//!
//! ```text
//! ---
//! title: Getting Started
//! menu_title: Start here
//! layout: wide
//! ---
//! # Body follows
//! ```
//!
//! The block must start on the very first line. It closes at the next line
//! that is exactly `---` or `...`. A file without a leading `---` line has
//! no front matter and its whole content is the body.
//!
//! ## Recognized keys
//!
//! - `title`: page title, also the menu title fallback
//! - `menu_title`: menu label, wins over `title`
//! - `hide_in_menu`: keep the page out of the menu
//! - `layout`: wins over the directory's `layout`
//! - `section`: wins over the directory's `name`
//!
//! Everything else is kept verbatim in `extra` for the renderer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const FENCE: &str = "---";
const CLOSING_FENCES: &[&str] = &["---", "..."];

/// Parsed front matter of one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_title: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hide_in_menu: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum FrontMatterError {
    #[error("front matter is not closed with `---`")]
    Unterminated,
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Split content into the raw front matter block and the body.
///
/// Returns `None` for the block when the content doesn't open with `---`.
pub fn split_front_matter(content: &str) -> Result<(Option<&str>, &str), FrontMatterError> {
    let Some(rest) = strip_fence_line(content) else {
        return Ok((None, content));
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let trimmed = line.trim_end_matches(['\n', '\r']);
        if CLOSING_FENCES.contains(&trimmed) {
            let block = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Ok((Some(block), body));
        }
        offset += line.len();
    }
    Err(FrontMatterError::Unterminated)
}

/// If the first line is exactly `---`, return everything after it.
fn strip_fence_line(content: &str) -> Option<&str> {
    let rest = content.strip_prefix(FENCE)?;
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

/// Parse front matter and body from page content.
///
/// An empty block (`---\n---`) gives default front matter. A block that
/// isn't a YAML mapping is an error.
pub fn parse_front_matter(content: &str) -> Result<(FrontMatter, &str), FrontMatterError> {
    let (block, body) = split_front_matter(content)?;
    let front_matter = match block {
        Some(raw) if !raw.trim().is_empty() => serde_yaml::from_str(raw)?,
        _ => FrontMatter::default(),
    };
    Ok((front_matter, body))
}

/// Resolve a metadata field from multiple sources.
///
/// Takes a list of optional values in priority order and returns the first
/// non-None, non-empty value.
///
/// ```text
/// menu title: resolve(&[menu_title, title, derived])
/// ```
pub fn resolve(sources: &[Option<&str>]) -> Option<String> {
    sources
        .iter()
        .filter_map(|opt| {
            opt.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        })
        .next()
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // split_front_matter
    // =========================================================================

    #[test]
    fn no_front_matter_is_all_body() {
        let (block, body) = split_front_matter("# Title\n\nText").unwrap();
        assert!(block.is_none());
        assert_eq!(body, "# Title\n\nText");
    }

    #[test]
    fn block_and_body_are_split() {
        let (block, body) = split_front_matter("---\ntitle: A\n---\nBody\n").unwrap();
        assert_eq!(block, Some("title: A\n"));
        assert_eq!(body, "Body\n");
    }

    #[test]
    fn dots_close_the_block() {
        let (block, body) = split_front_matter("---\ntitle: A\n...\nBody").unwrap();
        assert_eq!(block, Some("title: A\n"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn crlf_line_endings() {
        let (block, body) = split_front_matter("---\r\ntitle: A\r\n---\r\nBody").unwrap();
        assert_eq!(block, Some("title: A\r\n"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn closing_fence_at_end_of_file() {
        let (block, body) = split_front_matter("---\ntitle: A\n---").unwrap();
        assert_eq!(block, Some("title: A\n"));
        assert_eq!(body, "");
    }

    #[test]
    fn fence_must_be_first_line() {
        let (block, _) = split_front_matter("\n---\ntitle: A\n---\n").unwrap();
        assert!(block.is_none());
    }

    #[test]
    fn fence_with_trailing_text_is_not_front_matter() {
        let (block, _) = split_front_matter("--- title\n---\n").unwrap();
        assert!(block.is_none());
    }

    #[test]
    fn unterminated_block_is_error() {
        let result = split_front_matter("---\ntitle: A\nno end");
        assert!(matches!(result, Err(FrontMatterError::Unterminated)));
    }

    // =========================================================================
    // parse_front_matter
    // =========================================================================

    #[test]
    fn recognized_keys_are_typed() {
        let content = "---\ntitle: Intro\nmenu_title: Start\nhide_in_menu: true\n\
                       layout: wide\nsection: Guides\n---\n";
        let (fm, _) = parse_front_matter(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Intro"));
        assert_eq!(fm.menu_title.as_deref(), Some("Start"));
        assert!(fm.hide_in_menu);
        assert_eq!(fm.layout.as_deref(), Some("wide"));
        assert_eq!(fm.section.as_deref(), Some("Guides"));
    }

    #[test]
    fn unknown_keys_land_in_extra() {
        let (fm, _) = parse_front_matter("---\nauthor: Ada\ntags: [a, b]\n---\n").unwrap();
        assert_eq!(fm.extra["author"], "Ada");
        assert_eq!(fm.extra["tags"], serde_json::json!(["a", "b"]));
    }

    #[test]
    fn empty_block_gives_defaults() {
        let (fm, body) = parse_front_matter("---\n---\nBody").unwrap();
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(body, "Body");
    }

    #[test]
    fn invalid_yaml_is_error() {
        let result = parse_front_matter("---\ntitle: [unclosed\n---\n");
        assert!(matches!(result, Err(FrontMatterError::Yaml(_))));
    }

    #[test]
    fn non_mapping_block_is_error() {
        let result = parse_front_matter("---\n- a\n- b\n---\n");
        assert!(matches!(result, Err(FrontMatterError::Yaml(_))));
    }

    #[test]
    fn mistyped_known_key_is_error() {
        let result = parse_front_matter("---\nhide_in_menu: [1]\n---\n");
        assert!(matches!(result, Err(FrontMatterError::Yaml(_))));
    }

    // =========================================================================
    // resolve
    // =========================================================================

    #[test]
    fn resolve_first_non_empty_wins() {
        assert_eq!(
            resolve(&[None, Some("  "), Some("Title"), Some("Other")]),
            Some("Title".to_string())
        );
    }

    #[test]
    fn resolve_trims() {
        assert_eq!(resolve(&[Some("  Hi  ")]), Some("Hi".to_string()));
    }

    #[test]
    fn resolve_all_empty_is_none() {
        assert_eq!(resolve(&[None, Some("")]), None);
    }
}
