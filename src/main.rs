use clap::{Parser, Subcommand};
use docs_nav::diagnostics::TracingDiagnostics;
use docs_nav::{compile, config, output};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docs-nav", version)]
#[command(about = "Derive top navigation and sidebars from a docs content tree")]
#[command(long_about = "\
Derive top navigation and sidebars from a docs content tree

Every directory that directly holds markdown files gets its own sidebar.
Directories above them appear in the top navigation, nested as deep as
needed. Numeric prefixes order entries and show in sidebar titles.

Content structure:

  docs/
  ├── nav.toml                     # Config (optional, see gen-config)
  ├── .vitepress/                  # Excluded
  ├── components/                  # Excluded
  └── golang/                      # Nav: \"Go 语言\" → /golang/
      ├── title.txt                # \"Go 语言\" (directory title)
      ├── core/                    # Sidebar /golang/core/
      │   ├── index.md             # Header entry (title from front matter)
      │   ├── 1.intro.md           # \"1. intro\", or \"1. <title>\"
      │   └── 2.types.md
      └── gin/                     # Sidebar /golang/gin/
          └── 1.start.md

Title resolution (first available wins):
  File:       front matter title → file name without order prefix
  Directory:  title.txt → index.md front matter title → directory name")]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "docs", global = true)]
    source: PathBuf,

    /// Log progress at INFO level (otherwise RUST_LOG, default WARN)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile navigation and write it as JSON for the site renderer
    Build {
        /// Output file [default: <source>/.vitepress/navigation.json]
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Compile and print the navigation without writing anything
    Check,
    /// Print a stock nav.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Build { out } => {
            let config = config::load_config(&cli.source)?;
            let site = compile::compile(&cli.source, &config, &TracingDiagnostics)?;
            let out = out.unwrap_or_else(|| cli.source.join(".vitepress/navigation.json"));
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let mut json = serde_json::to_string_pretty(&site)?;
            json.push('\n');
            std::fs::write(&out, json)?;
            output::print_navigation(&site);
            println!("==> Wrote {}", out.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let config = config::load_config(&cli.source)?;
            let site = compile::compile(&cli.source, &config, &TracingDiagnostics)?;
            output::print_navigation(&site);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
