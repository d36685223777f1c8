//! Sitemap and robots file generation.
//!
//! The sitemap lists every generated page for search engine indexing:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```
//!
//! The homepage entry carries priority 1.0 and no last-modified date;
//! article entries carry priority 0.8 and their publication date when one
//! exists. `robots.txt` allows everything and points crawlers at the
//! sitemap's absolute URL.

use crate::content::Article;

/// XML namespace for the sitemap protocol.
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const HOME_PRIORITY: &str = "1.0";
const ARTICLE_PRIORITY: &str = "0.8";

/// Single URL entry in the sitemap.
pub struct UrlEntry {
    /// Full absolute URL.
    pub loc: String,
    /// Last modification date (YYYY-MM-DD), omitted when unknown.
    pub lastmod: Option<String>,
    /// Crawl priority, a fixed decimal string.
    pub priority: &'static str,
}

/// Sitemap for one build: the entry document plus every article page.
pub struct Sitemap {
    urls: Vec<UrlEntry>,
}

impl Sitemap {
    /// Build the sitemap from the accumulated article list.
    pub fn from_articles(base_url: &str, articles: &[Article]) -> Self {
        let mut urls = vec![UrlEntry {
            loc: format!("{base_url}/"),
            lastmod: None,
            priority: HOME_PRIORITY,
        }];

        for article in articles {
            urls.push(UrlEntry {
                loc: format!("{base_url}/{}/", article.slug),
                lastmod: article.date.clone().filter(|d| !d.is_empty()),
                priority: ARTICLE_PRIORITY,
            });
        }

        Self { urls }
    }

    /// Serialize to sitemap XML.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.urls.len() * 128);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in &self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            if let Some(lastmod) = &entry.lastmod {
                xml.push_str(&format!("    <lastmod>{}</lastmod>\n", escape_xml(lastmod)));
            }
            xml.push_str(&format!("    <priority>{}</priority>\n", entry.priority));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// The fixed robots file: allow everything, advertise the sitemap.
pub fn robots_txt(base_url: &str) -> String {
    format!("User-agent: *\nAllow: /\nSitemap: {base_url}/sitemap.xml\n")
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
