//! Shared test utilities for the doctree test suite.
//!
//! Provides a tree builder, lookup helpers, and menu assertions that work
//! with scan output (`Manifest`, `PageDescriptor`, `MenuEntry`).
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! write_files(tmp.path(), &[("docs/intro.md", "# Intro"), ("docs/sub/page.md", "Page")]);
//! let manifest = scan(tmp.path(), &site).unwrap();
//!
//! let page = find_page(&manifest, "/docs/intro/");
//! assert_menu_shape(&manifest.trees[0].menu, &[
//!     ("intro", &[]),
//!     ("sub", &["page"]),
//! ]);
//! ```

use std::fs;
use std::path::Path;

use crate::types::{Manifest, MenuEntry, PageDescriptor};

// =========================================================================
// Tree setup
// =========================================================================

/// Write `(relative path, content)` pairs under `root`, creating parent
/// directories as needed.
pub fn write_files(root: &Path, files: &[(&str, &str)]) {
    for (rel, content) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
    }
}

// =========================================================================
// Manifest lookups — panics with a clear message on miss
// =========================================================================

/// Find a page by permalink. Panics if not found.
pub fn find_page<'a>(manifest: &'a Manifest, permalink: &str) -> &'a PageDescriptor {
    manifest
        .pages
        .iter()
        .find(|p| p.permalink == permalink)
        .unwrap_or_else(|| {
            let links = page_permalinks(manifest);
            panic!("page '{permalink}' not found. Available: {links:?}")
        })
}

/// Find a menu entry by basename among siblings. Panics if not found.
pub fn find_entry<'a>(entries: &'a [MenuEntry], basename: &str) -> &'a MenuEntry {
    entries
        .iter()
        .find(|e| e.basename == basename)
        .unwrap_or_else(|| {
            let names = menu_basenames(entries);
            panic!("menu entry '{basename}' not found. Available: {names:?}")
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// All permalinks in manifest order.
pub fn page_permalinks(manifest: &Manifest) -> Vec<&str> {
    manifest.pages.iter().map(|p| p.permalink.as_str()).collect()
}

/// Basenames of sibling entries in order.
pub fn menu_basenames(entries: &[MenuEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.basename.as_str()).collect()
}

/// Titles of sibling entries in order.
pub fn menu_titles(entries: &[MenuEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.title.as_str()).collect()
}

// =========================================================================
// Menu assertions
// =========================================================================

/// Assert that a menu matches an expected two-level shape, by basename.
///
/// Each entry is `(basename, children)`. Use `&[]` for leaf nodes.
pub fn assert_menu_shape(entries: &[MenuEntry], expected: &[(&str, &[&str])]) {
    let expected_names: Vec<&str> = expected.iter().map(|(name, _)| *name).collect();
    assert_eq!(
        menu_basenames(entries),
        expected_names,
        "menu top-level basenames mismatch"
    );

    for (name, children) in expected {
        let entry = find_entry(entries, name);
        assert_eq!(
            menu_basenames(&entry.children),
            children.to_vec(),
            "menu children of '{name}' mismatch"
        );
    }
}
