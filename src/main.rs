use clap::{Parser, Subcommand};
use simple_press::{build, config};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "simple-press")]
#[command(about = "Static site generator for JSON-driven article sites")]
#[command(long_about = "\
Static site generator for JSON-driven article sites

Your content is plain JSON records. One config, an optional homepage
record, one record per article. A build renders the whole site from
scratch into the output directory.

Content structure:

  site/
  ├── config.json                  # Site metadata: domain, title, description
  ├── media/                       # Optional, copied to output media/
  └── content/
      ├── homepage.json            # Optional, arbitrary shape
      └── articles/
          ├── first-post.json      # Filename stem becomes the URL slug
          └── second-post.json

  shared/                          # Static assets, copied to output assets/

Article record keys (all optional): title, description, date,
modified_date, author, image, content (markdown). When content is
present, the build derives the rendered HTML body and an estimated
reading time.

Run 'simple-press gen-config' to print a starter config.json.")]
#[command(version)]
struct Cli {
    /// Site directory (config.json, content/, media/)
    #[arg(long, default_value = "site", global = true)]
    site: PathBuf,

    /// Shared assets directory, copied to output assets/
    #[arg(long, default_value = "shared", global = true)]
    assets: PathBuf,

    /// Output directory (wiped and recreated on every build)
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the site: pages, assets, sitemap, robots
    Build,
    /// Validate config and content without writing output
    Check,
    /// Print a starter config.json with all keys documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let paths = build::BuildPaths {
        site: cli.site,
        assets: cli.assets,
        output: cli.output,
    };

    match cli.command {
        Command::Build => {
            build::build(&paths)?;
        }
        Command::Check => {
            println!("==> Checking {}", paths.site.display());
            let report = build::check(&paths)?;
            println!("Config: {}", report.domain);
            println!(
                "Homepage: {}",
                if report.has_homepage { "present" } else { "absent" }
            );
            println!(
                "Articles: {} ({})",
                report.article_slugs.len(),
                report.article_slugs.join(", ")
            );
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::starter_config_json());
        }
    }

    Ok(())
}
