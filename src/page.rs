//! Page descriptors: permalink and inherited metadata for one source file.

use crate::config::EffectiveConfig;
use crate::metadata::{self, FrontMatterError};
use crate::naming;
use crate::types::PageDescriptor;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Front matter error in {path}: {source}")]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: FrontMatterError,
    },
}

/// Output URL path for a page.
///
/// - `index` → `/{target_dir}/`
/// - anything else → `/{target_dir}/{stem}/`
pub fn permalink(target_dir: &str, stem: &str) -> String {
    let target_dir = target_dir.trim_matches('/');
    match (target_dir.is_empty(), naming::is_index(stem)) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/{stem}/"),
        (false, true) => format!("/{target_dir}/"),
        (false, false) => format!("/{target_dir}/{stem}/"),
    }
}

/// Build the descriptor for `source_dir/file_name`.
///
/// `source_dir` is relative to `site_root`. The file is read as UTF-8; a
/// file that can't be read or whose front matter doesn't parse is an error.
pub fn build_page(
    site_root: &Path,
    source_dir: &Path,
    file_name: &str,
    target_dir: &str,
    config: &EffectiveConfig,
) -> Result<PageDescriptor, PageError> {
    let source = source_dir.join(file_name);
    let path = site_root.join(&source);
    let content = fs::read_to_string(&path).map_err(|source| PageError::Io {
        path: path.clone(),
        source,
    })?;
    let (front_matter, body) =
        metadata::parse_front_matter(&content).map_err(|source| PageError::FrontMatter {
            path: path.clone(),
            source,
        })?;

    let stem = naming::file_stem(file_name);
    let layout = front_matter
        .layout
        .clone()
        .or_else(|| config.settings.layout.clone());
    let section = front_matter
        .section
        .clone()
        .or_else(|| config.settings.name.clone());

    Ok(PageDescriptor {
        permalink: permalink(target_dir, stem),
        source,
        layout,
        section,
        body: body.to_string(),
        front_matter,
    })
}
