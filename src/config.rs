//! Site configuration and per-directory config inheritance.
//!
//! Configuration comes from two places:
//!
//! ```text
//! site/
//! ├── doctree.toml             # Site config: one [trees.<source>] block per tree root
//! └── docs/
//!     ├── _config.toml         # Override for docs/ (merged over the tree block)
//!     ├── intro.md
//!     └── api/
//!         ├── _config.toml     # Override for docs/api/ (merged over docs/)
//!         └── ...
//! ```
//!
//! ## Site Config
//!
//! ```toml
//! [trees.docs]                  # source directory, relative to the site root
//! target = "documentation"      # output base path (defaults to the source path)
//! name = "docs"                 # section name (defaults to the source path)
//! layout = "doc"                # default layout for pages without one
//! order = ["intro", "advanced"] # basenames listed first in the menu, in this order
//! title = "Documentation"       # menu title override
//! link = "/documentation/"      # menu link override
//! copy_only = false             # pass the subtree through as static assets
//! hide_in_menu = false          # keep this directory out of the menu
//! ```
//!
//! Any other key is carried along as pass-through metadata.
//!
//! ## Inheritance
//!
//! Each directory's effective config is its `_config.toml` merged over its
//! parent's effective config. The merge is shallow: a key present in the
//! override replaces the parent's value for that key wholesale, including
//! arrays and tables. A directory without an override inherits its parent's
//! config unchanged. Siblings never see each other's overrides because
//! every merge produces a fresh table.
//!
//! `target` only places a tree root. Output paths below the root follow the
//! directory structure, so a `target` in an override merges like any other
//! key but never moves a page.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Site config file name, looked up in the site root.
pub const SITE_CONFIG_FILE: &str = "doctree.toml";

/// Per-directory override file. The leading underscore keeps the walker
/// from treating it as a page.
pub const OVERRIDE_FILE: &str = "_config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Typed view over one directory's configuration.
///
/// Recognized keys have explicit presence (`Option`) so "not set" and
/// "set to a falsy value" stay distinct. Unrecognized keys land in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirConfig {
    /// Output base path. Only meaningful on a tree root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Section name attached to pages that don't declare one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Layout attached to pages that don't declare one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    /// Menu title for the directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Menu link for the directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Basenames that sort first among the directory's menu children.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Vec<String>>,
    /// Pass the subtree through as static assets.
    pub copy_only: bool,
    /// Keep the directory out of the menu. Its pages are still generated.
    pub hide_in_menu: bool,
    /// Pass-through metadata.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Resolved configuration for one directory.
///
/// Built from an immutable parent snapshot by [`resolve_directory`]; never
/// mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct EffectiveConfig {
    /// Merged settings: the local override over everything inherited.
    pub settings: DirConfig,
    /// The directory's own override, if it has one. Menu titles and links
    /// come from here so an ancestor's `title` doesn't label every
    /// descendant.
    pub local: Option<DirConfig>,
    table: toml::Table,
}

impl EffectiveConfig {
    /// Build a root config from a raw table (a tree block from the site config).
    pub fn from_table(table: toml::Table, origin: &Path) -> Result<Self, ConfigError> {
        let settings = to_dir_config(table.clone(), origin)?;
        Ok(Self {
            local: Some(settings.clone()),
            settings,
            table,
        })
    }

    /// The explicit menu order for this directory's children, if any.
    pub fn order(&self) -> Option<&[String]> {
        self.settings.order.as_deref()
    }

    /// Menu title set directly on this directory.
    pub fn local_title(&self) -> Option<&str> {
        self.local.as_ref().and_then(|l| l.title.as_deref())
    }

    /// Menu link set directly on this directory.
    pub fn local_link(&self) -> Option<&str> {
        self.local.as_ref().and_then(|l| l.link.as_deref())
    }

    /// `hide_in_menu` set directly on this directory. A hidden ancestor
    /// doesn't hide its subdirectories.
    pub fn local_hide_in_menu(&self) -> bool {
        self.local.as_ref().is_some_and(|l| l.hide_in_menu)
    }

    /// The same settings with no local override. A child without its own
    /// `_config.toml` gets exactly this.
    fn inherited(&self) -> Self {
        Self {
            settings: self.settings.clone(),
            local: None,
            table: self.table.clone(),
        }
    }
}

/// One configured tree root.
#[derive(Debug, Clone)]
pub struct TreeConfig {
    /// Source directory relative to the site root (the `[trees.<key>]` key).
    pub source: String,
    /// Output base path, `/`-trimmed.
    pub target: String,
    /// Section name.
    pub name: String,
    /// Effective config of the tree block itself.
    pub config: EffectiveConfig,
}

/// Site configuration loaded from [`SITE_CONFIG_FILE`].
#[derive(Debug, Clone, Default)]
pub struct SiteConfig {
    /// Tree roots keyed by source directory, walked in key order.
    pub trees: BTreeMap<String, TreeConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawSiteConfig {
    trees: BTreeMap<String, toml::Table>,
}

// =============================================================================
// Merging
// =============================================================================

/// Shallow merge: every top-level key in `overlay` replaces the same key in
/// `base`. Keys only in `base` are kept.
pub fn merge_tables(base: &toml::Table, overlay: toml::Table) -> toml::Table {
    let mut merged = base.clone();
    for (key, value) in overlay {
        merged.insert(key, value);
    }
    merged
}

/// Load `_config.toml` from a directory as a raw table.
///
/// Returns `Ok(None)` if the directory has no override file.
/// Returns `Err` if the file exists but can't be read or isn't valid TOML.
pub fn load_raw_override(dir: &Path) -> Result<Option<toml::Table>, ConfigError> {
    let path = dir.join(OVERRIDE_FILE);
    if !path.is_file() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    let table: toml::Table =
        toml::from_str(&content).map_err(|source| ConfigError::Toml { path, source })?;
    Ok(Some(table))
}

/// Resolve a directory's effective config from its parent's.
///
/// The parent is only read. Without an override the result is an
/// independent copy of the parent's settings.
pub fn resolve_directory(
    parent: &EffectiveConfig,
    dir: &Path,
) -> Result<EffectiveConfig, ConfigError> {
    let Some(overlay) = load_raw_override(dir)? else {
        return Ok(parent.inherited());
    };

    let origin = dir.join(OVERRIDE_FILE);
    if overlay.contains_key("target") {
        warn!(path = %origin.display(), "`target` has no effect below a tree root");
    }
    debug!(path = %origin.display(), keys = overlay.len(), "applying directory override");

    let local = to_dir_config(overlay.clone(), &origin)?;
    let table = merge_tables(&parent.table, overlay);
    let settings = to_dir_config(table.clone(), &origin)?;

    Ok(EffectiveConfig {
        settings,
        local: Some(local),
        table,
    })
}

fn to_dir_config(table: toml::Table, origin: &Path) -> Result<DirConfig, ConfigError> {
    toml::Value::Table(table)
        .try_into()
        .map_err(|source| ConfigError::Toml {
            path: origin.to_path_buf(),
            source,
        })
}

// =============================================================================
// Site config loading
// =============================================================================

/// Load the site config from a file.
///
/// A missing file yields an empty config with no trees.
pub fn load_site_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    if !path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_site_config(&content, path)
}

/// Parse site config content. `origin` is only used in error messages.
pub fn parse_site_config(content: &str, origin: &Path) -> Result<SiteConfig, ConfigError> {
    let raw: RawSiteConfig = toml::from_str(content).map_err(|source| ConfigError::Toml {
        path: origin.to_path_buf(),
        source,
    })?;

    let mut trees = BTreeMap::new();
    for (source, block) in raw.trees {
        let tree = tree_config(&source, block, origin)?;
        trees.insert(source, tree);
    }
    Ok(SiteConfig { trees })
}

/// Build one tree root from its config block, defaulting `target` and
/// `name` to the source path when the block doesn't set them.
pub fn tree_config(
    source: &str,
    mut block: toml::Table,
    origin: &Path,
) -> Result<TreeConfig, ConfigError> {
    validate_source(source)?;

    for key in ["target", "name"] {
        if !block.contains_key(key) {
            block.insert(key.to_string(), toml::Value::String(source.to_string()));
        }
    }

    let config = EffectiveConfig::from_table(block, origin)?;
    let target = config
        .settings
        .target
        .as_deref()
        .unwrap_or(source)
        .trim_matches('/')
        .to_string();
    if target.is_empty() {
        return Err(ConfigError::Validation(format!(
            "trees.{source}.target must not be empty"
        )));
    }
    let name = config
        .settings
        .name
        .clone()
        .unwrap_or_else(|| source.to_string());

    Ok(TreeConfig {
        source: source.to_string(),
        target,
        name,
        config,
    })
}

fn validate_source(source: &str) -> Result<(), ConfigError> {
    if source.trim().is_empty() {
        return Err(ConfigError::Validation(
            "tree source path must not be empty".into(),
        ));
    }
    let escapes = Path::new(source)
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(ConfigError::Validation(format!(
            "tree source `{source}` must be a relative path inside the site root"
        )));
    }
    Ok(())
}

/// Returns a fully-commented stock `doctree.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# doctree configuration
# =====================
# One [trees.<source>] block per documentation tree. <source> is the
# directory to walk, relative to this file.
#
# Any directory inside a tree may hold a _config.toml with the same keys.
# Its keys replace the inherited values for that directory and everything
# below it. `target` there is ignored: output paths follow the directories.
#
# Files and directories whose names start with "_" are never walked.

[trees.docs]
# Output base path for permalinks. Defaults to the source path.
# target = "docs"

# Section name attached to every page. Defaults to the source path.
# name = "docs"

# Layout attached to pages whose front matter doesn't set one.
# layout = "doc"

# Menu children whose basename is listed here come first, in this order.
# Everything else follows alphabetically.
# order = ["intro", "advanced"]

# Pass a subtree through as static assets: no pages, no menu entries.
# copy_only = false

# Keep a directory out of the menu. Its pages are still generated, and
# its subdirectories still get entries unless they set this themselves.
# hide_in_menu = false

# Menu title and link for a directory. Defaults to a title derived from
# the directory name and the directory's index permalink.
# title = "Documentation"
# link = "/docs/"
"##
}
