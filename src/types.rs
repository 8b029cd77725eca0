//! Types handed to the external renderers.
//!
//! A scan produces a [`Manifest`]: every page to render, every static asset
//! to copy, and one menu tree per tree root. All of it serializes to JSON so
//! the rendering side can run as a separate process.

use crate::metadata::FrontMatter;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything one scan produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub trees: Vec<TreeRoot>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<PageDescriptor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assets: Vec<StaticAsset>,
}

/// One configured documentation tree and its menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeRoot {
    /// Source directory relative to the site root.
    pub source: PathBuf,
    /// Output base path, without leading or trailing `/`.
    pub target: String,
    /// Section name.
    pub name: String,
    /// Top-level menu entries. The root directory itself has no entry.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub menu: Vec<MenuEntry>,
}

/// A page to render.
///
/// `layout` and `section` are already resolved: the page's own front matter
/// wins, the directory's config fills the gaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDescriptor {
    /// Source file relative to the site root.
    pub source: PathBuf,
    /// Output URL path, always with leading and trailing `/`.
    pub permalink: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// The page's own front matter, as written.
    pub front_matter: FrontMatter,
    /// Content after the front matter block.
    pub body: String,
}

/// A navigation node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub title: String,
    pub link: String,
    /// Identifier used for ordering; file stem or directory name.
    pub basename: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuEntry>,
}

/// A file passed through untouched from a copy-only subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticAsset {
    /// Source file relative to the site root.
    pub source: PathBuf,
    /// Destination relative to the output root.
    pub destination: PathBuf,
}
