//! Directory walking: pages, static assets, and menu trees.
//!
//! Each tree root from the site config is walked depth-first:
//!
//! ```text
//! docs/                        # tree root (no menu entry of its own)
//! ├── _config.toml             # override for docs/, never a page
//! ├── index.md                 # page → /docs/ (represented by the directory)
//! ├── intro.md                 # page → /docs/intro/, menu entry "Intro"
//! ├── _draft.md                # skipped: underscore prefix
//! ├── guides/                  # menu entry "Guides" → /docs/guides/
//! │   ├── index.md             # page → /docs/guides/
//! │   └── QuickStart.md        # page → /docs/guides/QuickStart/, entry "Quick start"
//! └── images/
//!     ├── _config.toml         # copy_only = true
//!     ├── logo.png             # static asset → docs/images/logo.png
//!     └── icons/ok.svg         # static asset → docs/images/icons/ok.svg
//! ```
//!
//! ## Rules
//!
//! - Names starting with `_` are never walked: no page, no menu entry, no
//!   recursion. Dot-files (`.git`, `.DS_Store`, `.nojekyll`) are skipped as
//!   well, outside `copy_only` subtrees.
//! - Every other file becomes a page, read as UTF-8 with optional YAML
//!   front matter.
//! - A page is left out of the menu when its front matter sets
//!   `hide_in_menu`, or when it is an `index` page (its directory's entry
//!   already links to it).
//! - A directory is left out of the menu when it is a tree root or its own
//!   `_config.toml` sets `hide_in_menu`. Subdirectories of a hidden
//!   directory still get entries. A tree root's children become the tree's
//!   top-level menu.
//! - A `copy_only` directory contributes static assets only. Nothing below
//!   it is merged, paged, or put in the menu.
//!
//! ## Errors
//!
//! Every error is fatal. A missing tree root, an unreadable directory, a
//! malformed `_config.toml`, a file name that isn't valid UTF-8, or a page
//! that can't be read or parsed aborts
//! the walk; no partial manifest is returned.

use crate::config::{self, ConfigError, EffectiveConfig, SiteConfig, TreeConfig};
use crate::menu;
use crate::naming;
use crate::page::{self, PageError};
use crate::types::{Manifest, MenuEntry, PageDescriptor, StaticAsset, TreeRoot};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Page error: {0}")]
    Page(#[from] PageError),
    #[error("Tree root not found: {0}")]
    MissingRoot(PathBuf),
    #[error("File name is not valid UTF-8: {0}")]
    InvalidName(PathBuf),
}

/// Result of walking one tree root.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeOutput {
    pub root: TreeRoot,
    pub pages: Vec<PageDescriptor>,
    pub assets: Vec<StaticAsset>,
}

/// What one directory contributes to its caller.
#[derive(Debug, Default)]
struct DirectoryResult {
    pages: Vec<PageDescriptor>,
    assets: Vec<StaticAsset>,
    /// Entries for the parent's children list: the directory's own entry,
    /// or its children directly when the directory is a tree root.
    menu: Vec<MenuEntry>,
}

impl DirectoryResult {
    fn absorb(&mut self, child: DirectoryResult, children: &mut Vec<MenuEntry>) {
        self.pages.extend(child.pages);
        self.assets.extend(child.assets);
        children.extend(child.menu);
    }
}

/// A directory entry that survived filtering.
struct Entry {
    name: String,
    is_dir: bool,
}

/// Walk every tree root in the site config, in key order.
pub fn scan(site_root: &Path, site: &SiteConfig) -> Result<Manifest, ScanError> {
    let mut manifest = Manifest {
        trees: Vec::new(),
        pages: Vec::new(),
        assets: Vec::new(),
    };

    for tree in site.trees.values() {
        let output = walk_tree(site_root, tree)?;
        manifest.trees.push(output.root);
        manifest.pages.extend(output.pages);
        manifest.assets.extend(output.assets);
    }

    Ok(manifest)
}

/// Walk a single tree root.
pub fn walk_tree(site_root: &Path, tree: &TreeConfig) -> Result<TreeOutput, ScanError> {
    let source = PathBuf::from(&tree.source);
    let root_dir = site_root.join(&source);
    if !root_dir.is_dir() {
        return Err(ScanError::MissingRoot(root_dir));
    }
    info!(source = %tree.source, output = %tree.target, "walking tree");

    let result = walk_directory(site_root, &source, &tree.target, &tree.config, true)?;
    debug!(
        source = %tree.source,
        pages = result.pages.len(),
        assets = result.assets.len(),
        "tree walked"
    );

    Ok(TreeOutput {
        root: TreeRoot {
            source,
            target: tree.target.clone(),
            name: tree.name.clone(),
            menu: result.menu,
        },
        pages: result.pages,
        assets: result.assets,
    })
}

fn walk_directory(
    site_root: &Path,
    source_dir: &Path,
    target_dir: &str,
    parent: &EffectiveConfig,
    is_root: bool,
) -> Result<DirectoryResult, ScanError> {
    let dir = site_root.join(source_dir);
    let config = config::resolve_directory(parent, &dir)?;

    if config.settings.copy_only {
        debug!(dir = %source_dir.display(), "copy-only subtree");
        let assets = collect_assets(site_root, source_dir, target_dir)?;
        return Ok(DirectoryResult {
            assets,
            ..Default::default()
        });
    }
    debug!(dir = %source_dir.display(), output = target_dir, "walking directory");

    let mut result = DirectoryResult::default();
    let mut children = Vec::new();

    for entry in read_entries(&dir)? {
        if entry.is_dir {
            let child = walk_directory(
                site_root,
                &source_dir.join(&entry.name),
                &join_target(target_dir, &entry.name),
                &config,
                false,
            )?;
            result.absorb(child, &mut children);
        } else {
            let page = page::build_page(site_root, source_dir, &entry.name, target_dir, &config)?;
            let stem = naming::file_stem(&entry.name);
            if !page.front_matter.hide_in_menu && !naming::is_index(stem) {
                children.push(menu::page_entry(&page));
            }
            result.pages.push(page);
        }
    }

    menu::sort_entries(&mut children, config.order());

    if is_root {
        result.menu = children;
    } else if !config.local_hide_in_menu() {
        let mut entry = menu::directory_entry(&config, source_dir, target_dir);
        entry.children = children;
        result.menu.push(entry);
    }

    Ok(result)
}

/// List a directory's walkable entries, sorted by name so the page list is
/// deterministic.
fn read_entries(dir: &Path) -> Result<Vec<Entry>, ScanError> {
    let io_err = |source| ScanError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for item in fs::read_dir(dir).map_err(io_err)? {
        let item = item.map_err(io_err)?;
        let name = item
            .file_name()
            .into_string()
            .map_err(|_| ScanError::InvalidName(item.path()))?;
        if is_reserved(&name) || name.starts_with('.') {
            continue;
        }
        let path = item.path();
        if path.is_dir() {
            entries.push(Entry { name, is_dir: true });
        } else if path.is_file() {
            entries.push(Entry {
                name,
                is_dir: false,
            });
        } else {
            warn!(path = %path.display(), "skipping entry that is neither file nor directory");
        }
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Every non-reserved file below a copy-only directory, paired with its
/// destination. Reserved directories are pruned with everything below them.
fn collect_assets(
    site_root: &Path,
    source_dir: &Path,
    target_dir: &str,
) -> Result<Vec<StaticAsset>, ScanError> {
    let root = site_root.join(source_dir);
    let walker = WalkDir::new(&root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_reserved(&e.file_name().to_string_lossy()));

    let mut assets = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|err| ScanError::Io {
            path: err.path().map(Path::to_path_buf).unwrap_or_else(|| root.clone()),
            source: err.into(),
        })?;
        if entry.file_type().is_dir() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(&root) else {
            continue;
        };
        assets.push(StaticAsset {
            source: source_dir.join(relative),
            destination: Path::new(target_dir).join(relative),
        });
    }

    Ok(assets)
}

/// Underscore-prefixed names are internal: override files, drafts, partials.
fn is_reserved(name: &str) -> bool {
    name.starts_with('_')
}

fn join_target(target_dir: &str, name: &str) -> String {
    if target_dir.is_empty() {
        name.to_string()
    } else {
        format!("{target_dir}/{name}")
    }
}
