use clap::{Parser, Subcommand};
use doctree::{config, output, scan};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "doctree")]
#[command(about = "Walk documentation trees into pages, assets, and a navigation menu")]
#[command(long_about = "\
Walk documentation trees into pages, assets, and a navigation menu

Each [trees.<dir>] block in doctree.toml names a directory to walk. Every
file becomes a page with a permalink under the tree's target; every
directory becomes a menu entry.

Content structure:

  site/
  ├── doctree.toml             # [trees.docs] target = \"docs\", order = [...]
  └── docs/
      ├── _config.toml         # Per-directory override (cascades to children)
      ├── index.md             # → /docs/
      ├── intro.md             # → /docs/intro/
      ├── _draft.md            # Underscore prefix = never walked
      ├── guides/              # Menu entry \"Guides\"
      │   └── QuickStart.md    # → /docs/guides/QuickStart/, titled \"Quick start\"
      └── images/
          ├── _config.toml     # copy_only = true
          └── logo.png         # Static asset, no page

Run 'doctree gen-config' to print a documented doctree.toml.")]
#[command(version)]
struct Cli {
    /// Site root; tree sources are relative to it
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Site config file [default: <source>/doctree.toml]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log each directory visited
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Walk all trees and print pages, assets, and menus
    Scan {
        /// Also write the manifest as JSON to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Walk all trees and report whether the content is valid
    Check,
    /// Print a stock doctree.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Scan { json } => {
            let site = load_site(&cli.source, cli.config.as_deref())?;
            let manifest = scan::scan(&cli.source, &site)?;
            if let Some(path) = json {
                let content = serde_json::to_string_pretty(&manifest)?;
                std::fs::write(&path, content)?;
            }
            output::print_scan_output(&manifest);
        }
        Command::Check => {
            let site = load_site(&cli.source, cli.config.as_deref())?;
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source, &site)?;
            println!("{}", output::format_summary(&manifest));
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// `--verbose` forces debug logging; otherwise `RUST_LOG`, defaulting to warn.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_site(
    source: &Path,
    config_path: Option<&Path>,
) -> Result<config::SiteConfig, config::ConfigError> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| source.join(config::SITE_CONFIG_FILE));
    config::load_site_config(&path)
}
