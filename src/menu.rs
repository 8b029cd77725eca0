//! Menu entries and their ordering.
//!
//! ## Titles
//!
//! - Directory: `title` from the directory's own `_config.toml`, else the
//!   directory name run through [`naming::derive_title`].
//! - Page: `menu_title`, else `title`, else the file stem run through
//!   [`naming::derive_title`].
//!
//! ## Ordering
//!
//! Children whose basename appears in the directory's `order` list come
//! first, in list order. Everything else follows, sorted by basename.
//!
//! ```text
//! order = ["b", "a"]    children {a, b, c}    →    [b, a, c]
//! ```

use crate::config::EffectiveConfig;
use crate::metadata;
use crate::naming;
use crate::types::{MenuEntry, PageDescriptor};
use std::path::Path;

/// Sort rank of one entry. Variant order puts every listed entry before
/// every unlisted one.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Rank<'a> {
    Listed(usize),
    Unlisted(&'a str),
}

fn rank<'a>(entry: &'a MenuEntry, order: Option<&[String]>) -> Rank<'a> {
    order
        .and_then(|order| order.iter().position(|name| *name == entry.basename))
        .map(Rank::Listed)
        .unwrap_or(Rank::Unlisted(&entry.basename))
}

/// Menu entry for a directory. `children` starts empty.
pub fn directory_entry(
    config: &EffectiveConfig,
    source_dir: &Path,
    target_dir: &str,
) -> MenuEntry {
    let basename = source_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let title = config
        .local_title()
        .map(String::from)
        .unwrap_or_else(|| naming::derive_title(&basename));
    let link = config
        .local_link()
        .map(String::from)
        .unwrap_or_else(|| format!("/{}/", target_dir.trim_matches('/')));

    MenuEntry {
        title,
        link,
        basename,
        children: Vec::new(),
    }
}

/// Menu entry for a page.
pub fn page_entry(page: &PageDescriptor) -> MenuEntry {
    let file_name = page
        .source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let basename = naming::file_stem(&file_name).to_string();
    let derived = naming::derive_title(&basename);
    let title = metadata::resolve(&[
        page.front_matter.menu_title.as_deref(),
        page.front_matter.title.as_deref(),
        Some(derived.as_str()),
    ])
    .unwrap_or(derived);

    MenuEntry {
        title,
        link: page.permalink.clone(),
        basename,
        children: Vec::new(),
    }
}

/// Sort entries: listed basenames first in `order` sequence, the rest by
/// basename. Stable, so equal basenames keep their relative order.
pub fn sort_entries(entries: &mut [MenuEntry], order: Option<&[String]>) {
    entries.sort_by(|a, b| rank(a, order).cmp(&rank(b, order)));
}

/// Append an entry and restore the ordering.
pub fn insert_and_sort(
    entries: &mut Vec<MenuEntry>,
    entry: MenuEntry,
    order: Option<&[String]>,
) {
    entries.push(entry);
    sort_entries(entries, order);
}
