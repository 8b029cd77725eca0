//! CLI output formatting for scan results.
//!
//! Output leads with what the reader navigates by (menu titles and
//! permalinks), with source paths shown as indented context lines.
//!
//! ```text
//! Tree docs → /docs/
//!     Section: docs
//! 001 Intro → /docs/intro/
//! 002 Advanced → /docs/advanced/
//! 003 Sub → /docs/sub/
//!     001 Page → /docs/sub/page/
//!
//! Pages
//! 001 /docs/
//!     Source: docs/index.md
//! 002 /docs/intro/
//!     Source: docs/intro.md
//!     Layout: doc
//!
//! Assets
//! 001 docs/images/a.png → docs/images/a.png
//!
//! Scanned 1 tree, 4 pages, 1 asset
//! ```
//!
//! Each `format_*` function is pure and returns lines; `print_*` wrappers
//! write them to stdout.

use crate::types::{Manifest, MenuEntry, PageDescriptor, TreeRoot};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `1 page`, `2 pages`.
fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

fn format_menu(entries: &[MenuEntry], depth: usize, lines: &mut Vec<String>) {
    for (i, entry) in entries.iter().enumerate() {
        lines.push(format!(
            "{}{} {} → {}",
            indent(depth),
            format_index(i + 1),
            entry.title,
            entry.link
        ));
        format_menu(&entry.children, depth + 1, lines);
    }
}

/// Format one tree root with its menu.
pub fn format_tree(tree: &TreeRoot) -> Vec<String> {
    let mut lines = vec![
        format!("Tree {} → /{}/", tree.source.display(), tree.target),
        format!("{}Section: {}", indent(1), tree.name),
    ];
    if tree.menu.is_empty() {
        lines.push(format!("{}(no menu entries)", indent(1)));
    }
    format_menu(&tree.menu, 0, &mut lines);
    lines
}

fn format_page(index: usize, page: &PageDescriptor) -> Vec<String> {
    let mut lines = vec![
        format!("{} {}", format_index(index), page.permalink),
        format!("{}Source: {}", indent(1), page.source.display()),
    ];
    if let Some(layout) = &page.layout {
        lines.push(format!("{}Layout: {layout}", indent(1)));
    }
    if page.front_matter.hide_in_menu {
        lines.push(format!("{}Hidden from menu", indent(1)));
    }
    lines
}

/// Format the full scan result: trees, pages, assets, summary.
pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    for tree in &manifest.trees {
        lines.extend(format_tree(tree));
        lines.push(String::new());
    }

    if !manifest.pages.is_empty() {
        lines.push("Pages".to_string());
        for (i, page) in manifest.pages.iter().enumerate() {
            lines.extend(format_page(i + 1, page));
        }
        lines.push(String::new());
    }

    if !manifest.assets.is_empty() {
        lines.push("Assets".to_string());
        for (i, asset) in manifest.assets.iter().enumerate() {
            lines.push(format!(
                "{} {} → {}",
                format_index(i + 1),
                asset.source.display(),
                asset.destination.display()
            ));
        }
        lines.push(String::new());
    }

    lines.push(format_summary(manifest));
    lines
}

/// One-line totals.
pub fn format_summary(manifest: &Manifest) -> String {
    format!(
        "Scanned {}, {}, {}",
        plural(manifest.trees.len(), "tree"),
        plural(manifest.pages.len(), "page"),
        plural(manifest.assets.len(), "asset")
    )
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::FrontMatter;
    use crate::types::StaticAsset;
    use std::path::PathBuf;

    fn entry(title: &str, link: &str, children: Vec<MenuEntry>) -> MenuEntry {
        MenuEntry {
            title: title.to_string(),
            link: link.to_string(),
            basename: title.to_lowercase(),
            children,
        }
    }

    fn sample_manifest() -> Manifest {
        Manifest {
            trees: vec![TreeRoot {
                source: PathBuf::from("docs"),
                target: "docs".to_string(),
                name: "docs".to_string(),
                menu: vec![
                    entry("Intro", "/docs/intro/", vec![]),
                    entry(
                        "Sub",
                        "/docs/sub/",
                        vec![entry("Page", "/docs/sub/page/", vec![])],
                    ),
                ],
            }],
            pages: vec![PageDescriptor {
                source: PathBuf::from("docs/intro.md"),
                permalink: "/docs/intro/".to_string(),
                layout: Some("doc".to_string()),
                section: Some("docs".to_string()),
                front_matter: FrontMatter::default(),
                body: String::new(),
            }],
            assets: vec![StaticAsset {
                source: PathBuf::from("docs/img/a.png"),
                destination: PathBuf::from("docs/img/a.png"),
            }],
        }
    }

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
    }

    #[test]
    fn tree_menu_is_indented_by_depth() {
        let manifest = sample_manifest();
        let lines = format_tree(&manifest.trees[0]);
        assert_eq!(
            lines,
            vec![
                "Tree docs → /docs/",
                "    Section: docs",
                "001 Intro → /docs/intro/",
                "002 Sub → /docs/sub/",
                "    001 Page → /docs/sub/page/",
            ]
        );
    }

    #[test]
    fn empty_menu_is_called_out() {
        let mut manifest = sample_manifest();
        manifest.trees[0].menu.clear();
        let lines = format_tree(&manifest.trees[0]);
        assert!(lines.contains(&"    (no menu entries)".to_string()));
    }

    #[test]
    fn pages_show_source_and_layout() {
        let lines = format_scan_output(&sample_manifest());
        let start = lines.iter().position(|l| l == "Pages").unwrap();
        assert_eq!(lines[start + 1], "001 /docs/intro/");
        assert_eq!(lines[start + 2], "    Source: docs/intro.md");
        assert_eq!(lines[start + 3], "    Layout: doc");
    }

    #[test]
    fn assets_listed_with_destination() {
        let lines = format_scan_output(&sample_manifest());
        assert!(lines.contains(&"001 docs/img/a.png → docs/img/a.png".to_string()));
    }

    #[test]
    fn summary_pluralizes() {
        let manifest = sample_manifest();
        assert_eq!(format_summary(&manifest), "Scanned 1 tree, 1 page, 1 asset");

        let empty = Manifest {
            trees: vec![],
            pages: vec![],
            assets: vec![],
        };
        assert_eq!(format_summary(&empty), "Scanned 0 trees, 0 pages, 0 assets");
    }

    #[test]
    fn sections_omitted_when_empty() {
        let empty = Manifest {
            trees: vec![],
            pages: vec![],
            assets: vec![],
        };
        let lines = format_scan_output(&empty);
        assert_eq!(lines, vec!["Scanned 0 trees, 0 pages, 0 assets"]);
    }
}
