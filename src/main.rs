use clap::{Parser, Subcommand};
use docs_nav::source::DiskSource;
use docs_nav::{config, header, output, site};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "docs-nav")]
#[command(about = "Derive documentation nav and sidebar config from folders")]
#[command(long_about = "\
Derive documentation nav and sidebar config from folders

Your folder structure is the data source. Folders with an index.md become
sidebar groups, loose markdown files become links, and the subfolders of
header/ become the top navigation.

Docs structure:

  docs/
  ├── docnav.toml                  # Conventions (optional)
  ├── index.md                     # Root overview link
  ├── header/                      # Top navigation categories
  │   └── getting-started/
  │       └── index.md             # → nav \"Getting Started\"
  ├── guide/
  │   ├── index.md                 # Group title (sidebarTitle frontmatter or folder name)
  │   └── install.md               # → /guide/install
  ├── drafts/                      # No index.md = hidden with everything below
  └── .vitepress/                  # Reserved, never listed

Run 'docs-nav gen-config' to print a documented docnav.toml.")]
#[command(version)]
struct Cli {
    /// Documentation root directory
    #[arg(long, default_value = "docs", global = true)]
    source: PathBuf,

    /// Config file (defaults to <source>/docnav.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the top navigation as JSON
    Nav,
    /// Print the sidebar as JSON
    Sidebar,
    /// Write the full theme configuration as JSON
    Build {
        /// Output file
        #[arg(short, long, default_value = "docnav.json")]
        output: PathBuf,
    },
    /// Print nav and sidebar as a readable tree
    Check,
    /// Print a stock docnav.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose { "debug" } else { "info" })
    });
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Nav => {
            let config = config::load_config(&cli.source, cli.config.as_deref())?;
            let nav = header::build_header_nav(&DiskSource, &cli.source, &config)?;
            println!("{}", serde_json::to_string_pretty(&nav)?);
        }
        Command::Sidebar => {
            let config = config::load_config(&cli.source, cli.config.as_deref())?;
            let sidebar = site::build_sidebar_map(&DiskSource, &cli.source, &config)?;
            println!("{}", serde_json::to_string_pretty(&sidebar)?);
        }
        Command::Build { output: out_path } => {
            println!("==> Building navigation from {}", cli.source.display());
            let theme = site::load_and_build(&DiskSource, &cli.source, cli.config.as_deref())?;
            let json = serde_json::to_string_pretty(&theme)?;
            std::fs::write(&out_path, json)?;
            output::print_theme(&theme);
            println!("==> Wrote {}", out_path.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let theme = site::load_and_build(&DiskSource, &cli.source, cli.config.as_deref())?;
            output::print_theme(&theme);
            println!("==> Navigation is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
