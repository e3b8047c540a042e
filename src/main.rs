use clap::{Parser, Subcommand};
use folio::{config, content, generate, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Static generator for an animated single-page developer portfolio")]
#[command(long_about = "\
Static generator for an animated single-page developer portfolio

The content directory is the data source. JSON collections become the
about, experience and projects sections; config.toml carries the profile,
palette and motion settings.

Content structure:

  content/
  ├── config.toml        # Site, profile, colors, motion (optional)
  ├── hero.md            # Bio under the hero title (optional)
  ├── about.json         # Role cards
  ├── skills.json        # Skills grid
  ├── history.json       # Work history, newest first
  ├── projects.json      # Project cards
  └── assets/            # Images and CV → copied to output/assets/

Missing collections render as empty sections and are reported as warnings.
Invalid JSON stops the build.

Run 'folio gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render index.html and copy assets
    Build,
    /// Validate the content directory without building
    Check {
        /// Print the loaded content as JSON instead of the summary
        #[arg(long)]
        json: bool,
    },
    /// Print every section's entrance schedule
    Timeline,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            println!("==> Loading {}", cli.source.display());
            let portfolio = content::load(&cli.source)?;
            output::print_load_output(&portfolio, &cli.source);

            println!("==> Generating HTML → {}", cli.output.display());
            let report = generate::generate(&portfolio, &cli.source, &cli.output)?;
            output::print_generate_output(&report);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check { json } => {
            let portfolio = content::load(&cli.source)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&portfolio)?);
            } else {
                println!("==> Checking {}", cli.source.display());
                output::print_load_output(&portfolio, &cli.source);
                println!("==> Content is valid");
            }
        }
        Command::Timeline => {
            let portfolio = content::load(&cli.source)?;
            output::print_timeline_output(&portfolio);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
