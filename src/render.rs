//! HTML page templates.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping; the only
//! unescaped interpolations are the JSON-LD document and the article body,
//! both of which this crate generates itself.
//!
//! Every page shares a `base_document` shell carrying the head metadata
//! that search engines consume: title, meta description, canonical link,
//! and the JSON-LD `<script>` block. Pages link the copied stylesheet at
//! `/assets/style.css` rather than embedding it.

use crate::config::SiteConfig;
use crate::content::{Article, HomepageData};
use crate::markdown;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde_json::Value;

/// Renders the base HTML document structure shared by all pages.
fn base_document(
    title: &str,
    description: Option<&str>,
    canonical_url: &str,
    json_ld: &str,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                @if let Some(desc) = description {
                    meta name="description" content=(desc);
                }
                link rel="canonical" href=(canonical_url);
                link rel="stylesheet" href="/assets/style.css";
                script type="application/ld+json" { (PreEscaped(json_ld)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the site header with the title linking back to the entry page.
fn site_header(config: &SiteConfig) -> Markup {
    html! {
        header.site-header {
            nav {
                a.site-title href="/" { (config.title) }
            }
        }
    }
}

/// Renders the homepage from its free-form content record.
///
/// The record has no schema; the template reads the keys it understands
/// (`heading`, `intro`) and falls back to config values where they are
/// absent. The `intro` field is markdown and is converted right here in
/// the template.
pub fn render_homepage(
    config: &SiteConfig,
    page: &HomepageData,
    canonical_url: &str,
    json_ld: &str,
) -> Markup {
    let heading = page
        .get("heading")
        .and_then(Value::as_str)
        .unwrap_or(&config.title);
    let intro = page.get("intro").and_then(Value::as_str);

    let content = html! {
        (site_header(config))
        main.homepage {
            h1 { (heading) }
            @if let Some(intro) = intro {
                div.intro {
                    (PreEscaped(markdown::render(intro)))
                }
            }
        }
    };

    base_document(
        &config.title,
        config.description.as_deref(),
        canonical_url,
        json_ld,
        content,
    )
}

/// Renders an article page: title, byline, and the rendered markdown body.
pub fn render_article(
    config: &SiteConfig,
    article: &Article,
    canonical_url: &str,
    json_ld: &str,
) -> Markup {
    let title = article.title.as_deref().unwrap_or(&article.slug);
    let page_title = format!("{} - {}", title, config.title);

    let content = html! {
        (site_header(config))
        main.article-page {
            article {
                header.article-header {
                    h1 { (title) }
                    p.article-meta {
                        @if let Some(date) = &article.date {
                            time datetime=(date) { (date) }
                        }
                        @if let Some(author) = &article.author {
                            span.author { "by " (author) }
                        }
                        @if let Some(minutes) = article.reading_time {
                            span.reading-time { (minutes) " min read" }
                        }
                    }
                }
                @if let Some(body) = &article.content_html {
                    div.article-body {
                        (PreEscaped(body.as_str()))
                    }
                }
            }
        }
    };

    base_document(
        &page_title,
        article.description.as_deref(),
        canonical_url,
        json_ld,
        content,
    )
}
