//! # doctree
//!
//! Turns directory trees of documentation into three things an external
//! site renderer needs: a page per source file with a deterministic
//! permalink, a list of static assets to copy, and an ordered navigation
//! menu mirroring the directory structure.
//!
//! # Pipeline
//!
//! ```text
//! doctree.toml  →  SiteConfig  →  scan  →  Manifest { trees, pages, assets }
//!                                   │
//!                                   ├── config::resolve_directory  (per directory)
//!                                   ├── page::build_page           (per file)
//!                                   └── menu::*                    (entries + ordering)
//! ```
//!
//! The walk is a single synchronous depth-first pass. Every recursive call
//! returns its own pages, assets, and menu entries for the caller to merge,
//! so no state is shared between sibling subtrees.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks tree roots, produces the [`types::Manifest`] |
//! | [`config`] | Site config loading, per-directory `_config.toml` inheritance |
//! | [`page`] | Permalinks and inherited metadata for one source file |
//! | [`menu`] | Menu entry titles, links, and `order`-aware sorting |
//! | [`metadata`] | YAML front matter splitting and parsing |
//! | [`naming`] | Display titles derived from file and directory names |
//! | [`types`] | Serializable output types handed to renderers |
//! | [`output`] | CLI output formatting |
//!
//! # Conventions
//!
//! - **Underscore means internal.** `_config.toml`, `_drafts/`, `_partial.md`
//!   are never walked.
//! - **Index pages belong to their directory.** `guide/index.md` is served at
//!   `/guide/` and the directory's menu entry links there.
//! - **Order is opt-in.** Without an `order` list, menu entries sort by name.
//! - **Config flows down.** A directory's `_config.toml` applies to it and
//!   everything below it until another override replaces a key.

pub mod config;
pub mod menu;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod page;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
