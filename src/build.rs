//! Site build orchestration.
//!
//! The whole build is one sequential pass over the content tree — load
//! everything, render everything, write everything. No incremental state is
//! kept between builds and none is needed: the output directory is wiped
//! and recreated every time.
//!
//! ## Stages
//!
//! 1. Load `config.json` (a missing config fails the build up front)
//! 2. Reset the output directory (destructive: manually placed files are lost)
//! 3. Copy the shared assets tree to `output/assets/` (required)
//! 4. Copy `site/media/` to `output/media/` if present
//! 5. Render the homepage if `homepage.json` is present
//! 6. Render every article, sorted by filename, to `{slug}/index.html`
//! 7. Write `sitemap.xml` from the accumulated page list
//! 8. Write `robots.txt`
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                 # Homepage (if homepage.json exists)
//! ├── hello-world/
//! │   └── index.html             # Clean-URL article page
//! ├── assets/                    # Shared assets, copied verbatim
//! ├── media/                     # Site media, copied verbatim (if present)
//! ├── sitemap.xml
//! └── robots.txt
//! ```
//!
//! An error anywhere after stage 2 aborts the build and leaves the output
//! tree as far as it got; the next build starts from a clean wipe anyway.

use crate::config::{self, ConfigError};
use crate::content::{self, ContentError};
use crate::jsonld::{self, Page};
use crate::render;
use crate::sitemap::{self, Sitemap};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Config file not found: {0}")]
    MissingConfig(PathBuf),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Content error: {0}")]
    Content(#[from] ContentError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Asset copy error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The three directory roots a build works with.
pub struct BuildPaths {
    /// Site directory: `config.json`, `content/`, optional `media/`.
    pub site: PathBuf,
    /// Shared assets directory, copied to `output/assets/`.
    pub assets: PathBuf,
    /// Output directory. Wiped and recreated on every build.
    pub output: PathBuf,
}

impl BuildPaths {
    fn config(&self) -> PathBuf {
        self.site.join("config.json")
    }

    fn homepage(&self) -> PathBuf {
        self.site.join("content").join("homepage.json")
    }

    fn articles_dir(&self) -> PathBuf {
        self.site.join("content").join("articles")
    }

    fn media(&self) -> PathBuf {
        self.site.join("media")
    }
}

/// Run the full build pipeline.
pub fn build(paths: &BuildPaths) -> Result<(), BuildError> {
    let config_path = paths.config();
    if !config_path.exists() {
        return Err(BuildError::MissingConfig(config_path));
    }
    let config = config::load_config(&config_path)?;
    let base_url = config.base_url();

    println!("Building {}...", config.domain);

    if paths.output.exists() {
        fs::remove_dir_all(&paths.output)?;
    }
    fs::create_dir_all(&paths.output)?;

    copy_tree(&paths.assets, &paths.output.join("assets"))?;

    let media = paths.media();
    if media.exists() {
        copy_tree(&media, &paths.output.join("media"))?;
    }

    let homepage_path = paths.homepage();
    if homepage_path.exists() {
        let page = content::load_homepage(&homepage_path)?;
        let canonical = format!("{base_url}/");
        let json_ld = jsonld::json_ld(&config, &Page::Homepage)?;
        let html = render::render_homepage(&config, &page, &canonical, &json_ld);
        fs::write(paths.output.join("index.html"), html.into_string())?;
        println!("  Generated index.html");
    }

    let articles = content::discover_articles(&paths.articles_dir())?;
    for article in &articles {
        let canonical = format!("{base_url}/{}/", article.slug);
        let json_ld = jsonld::json_ld(&config, &Page::Article(article))?;
        let html = render::render_article(&config, article, &canonical, &json_ld);

        let article_dir = paths.output.join(&article.slug);
        fs::create_dir_all(&article_dir)?;
        fs::write(article_dir.join("index.html"), html.into_string())?;
        println!("  Generated {}/index.html", article.slug);
    }

    let sitemap = Sitemap::from_articles(&base_url, &articles);
    fs::write(paths.output.join("sitemap.xml"), sitemap.to_xml())?;
    println!("  Generated sitemap.xml");

    fs::write(
        paths.output.join("robots.txt"),
        sitemap::robots_txt(&base_url),
    )?;
    println!("  Generated robots.txt");

    println!("Site generated at {}", paths.output.display());
    Ok(())
}

/// What `check` found, for the CLI to print.
pub struct CheckReport {
    pub domain: String,
    pub has_homepage: bool,
    pub article_slugs: Vec<String>,
}

/// Parse config and every content file without writing anything.
///
/// Catches the same load-time failures a build would hit — missing config,
/// malformed JSON, a non-object homepage — while leaving the output
/// directory untouched.
pub fn check(paths: &BuildPaths) -> Result<CheckReport, BuildError> {
    let config_path = paths.config();
    if !config_path.exists() {
        return Err(BuildError::MissingConfig(config_path));
    }
    let config = config::load_config(&config_path)?;

    let homepage_path = paths.homepage();
    let has_homepage = homepage_path.exists();
    if has_homepage {
        content::load_homepage(&homepage_path)?;
    }

    let articles = content::discover_articles(&paths.articles_dir())?;

    Ok(CheckReport {
        domain: config.domain,
        has_homepage,
        article_slugs: articles.into_iter().map(|a| a.slug).collect(),
    })
}

/// Copy a directory tree verbatim. The source must exist; a missing source
/// surfaces as the underlying walk error.
fn copy_tree(src: &Path, dst: &Path) -> Result<(), BuildError> {
    for entry in WalkDir::new(src) {
        let entry = entry?;
        // Walk entries are always rooted at src
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
