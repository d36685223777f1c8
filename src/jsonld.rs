//! Structured data (JSON-LD) generation.
//!
//! Search engines read a schema.org document embedded in each page's head.
//! The homepage carries a `WebSite` schema, articles carry an `Article`
//! schema. Both are pure functions of the site config and the page record —
//! no I/O, no state — which keeps rebuild output byte-identical.
//!
//! The page kind is a closed enum: there is no "unknown kind" branch to
//! degrade through, a page either is the homepage or an article.

use crate::config::SiteConfig;
use crate::content::Article;
use serde_json::json;

/// The two page kinds that carry structured data.
pub enum Page<'a> {
    Homepage,
    Article(&'a Article),
}

/// Render the schema.org document for a page, pretty-printed with 2-space
/// indentation for readability in page source.
pub fn json_ld(config: &SiteConfig, page: &Page) -> Result<String, serde_json::Error> {
    let base = config.base_url();
    let home_url = format!("{base}/");

    let publisher = json!({
        "@type": "Organization",
        "name": config.title,
        "url": home_url,
    });

    let schema = match page {
        Page::Homepage => json!({
            "@context": "https://schema.org",
            "@type": "WebSite",
            "url": home_url,
            "name": config.title,
            "description": config.description.as_deref().unwrap_or(""),
            "publisher": publisher,
        }),
        Page::Article(article) => {
            let url = format!("{base}/{}/", article.slug);
            let date = article.date.as_deref().unwrap_or("");
            let modified = article
                .modified_date
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or(date);

            let mut schema = json!({
                "@context": "https://schema.org",
                "@type": "Article",
                "mainEntityOfPage": {
                    "@type": "WebPage",
                    "@id": url,
                },
                "url": url,
                "headline": article.title.as_deref().unwrap_or(""),
                "description": article.description.as_deref().unwrap_or(""),
                "datePublished": date,
                "dateModified": modified,
                "publisher": publisher,
            });

            if let Some(author) = article.author.as_deref().filter(|a| !a.is_empty()) {
                schema["author"] = json!({ "@type": "Person", "name": author });
            }
            // Stored image paths are site-relative; resolve against the domain
            if let Some(image) = article.image.as_deref().filter(|i| !i.is_empty()) {
                schema["image"] = json!(format!("{base}{image}"));
            }

            schema
        }
    };

    serde_json::to_string_pretty(&schema)
}
