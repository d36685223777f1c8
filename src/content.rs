//! Content loading and discovery.
//!
//! The content tree is plain JSON records:
//!
//! ```text
//! site/
//! ├── config.json                  # Site metadata (see config module)
//! ├── media/                       # Optional, copied verbatim to output
//! └── content/
//!     ├── homepage.json            # Optional, arbitrary shape
//!     └── articles/
//!         ├── first-post.json      # One object per article
//!         └── second-post.json
//! ```
//!
//! The homepage record has no schema — whatever keys it carries are handed
//! to the homepage template as-is. Articles have a recognized key set
//! (`title`, `description`, `date`, `modified_date`, `author`, `image`,
//! `content`); unrecognized keys are ignored. The filename stem becomes the
//! article's slug, which doubles as its output directory name, so slugs are
//! unique by construction.
//!
//! Loading derives two fields when an article carries non-empty `content`:
//! the estimated reading time and the rendered HTML body.

use crate::{markdown, readtime};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Expected a JSON object in {0}")]
    ExpectedObject(PathBuf),
}

/// Homepage record: an arbitrary JSON object passed through to the template.
pub type HomepageData = Map<String, Value>;

/// One article, as loaded from `articles/<slug>.json`.
///
/// All source keys are optional strings; records are hand-edited files and
/// pages render with whatever is present. `slug`, `reading_time`, and
/// `content_html` are derived at load, never read from the file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Article {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Publication date, used verbatim in JSON-LD and the sitemap.
    pub date: Option<String>,
    pub modified_date: Option<String>,
    pub author: Option<String>,
    /// Site-relative image path (e.g. `/media/cover.jpg`).
    pub image: Option<String>,
    /// Raw markdown body.
    pub content: Option<String>,

    /// URL path segment, from the filename stem.
    #[serde(skip)]
    pub slug: String,
    /// Estimated minutes, present only when `content` is non-empty.
    #[serde(skip)]
    pub reading_time: Option<u32>,
    /// Rendered markdown, present only when `content` is non-empty.
    #[serde(skip)]
    pub content_html: Option<String>,
}

/// Load the homepage record, requiring a JSON object at the top level.
pub fn load_homepage(path: &Path) -> Result<HomepageData, ContentError> {
    let content = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&content).map_err(|source| ContentError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ContentError::ExpectedObject(path.to_path_buf())),
    }
}

/// Load one article file: parse, attach the filename-stem slug, derive
/// reading time and rendered HTML when the record carries content.
pub fn load_article(path: &Path) -> Result<Article, ContentError> {
    let content = fs::read_to_string(path)?;
    let mut article: Article =
        serde_json::from_str(&content).map_err(|source| ContentError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    article.slug = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    if let Some(text) = article.content.as_deref().filter(|c| !c.is_empty()) {
        article.reading_time = Some(readtime::reading_time(text));
        article.content_html = Some(markdown::render(text));
    }

    Ok(article)
}

/// Load every `*.json` article in the directory, sorted by filename so the
/// build order (and the sitemap order) is deterministic. A missing articles
/// directory means a site without articles, not an error.
pub fn discover_articles(dir: &Path) -> Result<Vec<Article>, ContentError> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map(|e| e.eq_ignore_ascii_case("json"))
                    .unwrap_or(false)
        })
        .collect();
    paths.sort();

    paths.iter().map(|path| load_article(path)).collect()
}
