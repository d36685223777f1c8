//! # Simple Press
//!
//! A minimal static site generator for JSON-driven article sites. Your
//! content is plain JSON records: one site config, an optional homepage
//! record, and one record per article. A build renders them into a complete
//! static site — clean-URL HTML pages with schema.org structured data, a
//! sitemap, and a robots file.
//!
//! # Architecture: One Sequential Pass
//!
//! A build is a single top-to-bottom pipeline with no incremental state:
//!
//! ```text
//! config.json ──┐
//! homepage.json ├─→ load → render → write ──→ dist/
//! articles/*.json ┘                            ├── index.html
//!                                              ├── {slug}/index.html
//!                                              ├── assets/  media/
//!                                              ├── sitemap.xml
//!                                              └── robots.txt
//! ```
//!
//! The output directory is wiped and recreated on every build. That trades
//! rebuild speed for a guarantee worth much more at this scale: the output
//! tree is always exactly what the current content says, never a mix of
//! generations.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`build`] | The orchestrator — sequences the eight pipeline stages and owns the output directory |
//! | [`config`] | `config.json` loading (`domain`, `title`, `description`) |
//! | [`content`] | Homepage/article record loading, article discovery, slug and derived-field computation |
//! | [`markdown`] | Markdown → HTML via pulldown-cmark, with heading anchors |
//! | [`readtime`] | Reading-time estimation (200 wpm, floor of one minute) |
//! | [`jsonld`] | schema.org WebSite/Article structured data |
//! | [`render`] | Maud page templates: homepage and article |
//! | [`sitemap`] | `sitemap.xml` and `robots.txt` generation |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system, rather than Handlebars or Tera. Advantages:
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions — no stringly-typed lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped.
//! - **Zero runtime files**: no template directory to ship or get out of sync.
//!
//! ## Clean URLs
//!
//! Every article is written as `{slug}/index.html`, where the slug is the
//! content filename's stem. Any static file server then serves the article
//! at `/{slug}/` with no extension and no rewrite rules. The slug doubles
//! as the sitemap path segment and the JSON-LD canonical id, so all three
//! always agree.
//!
//! ## Closed Page-Kind Set
//!
//! Structured data branches on exactly two page kinds, homepage and
//! article, expressed as an enum. There is no fallback branch emitting an
//! empty schema for an unrecognized kind — a kind that doesn't exist
//! doesn't compile.
//!
//! ## Fail Loudly, Except Where Absence Is Normal
//!
//! A missing config file, a missing shared-assets directory, or malformed
//! JSON anywhere aborts the build with a propagated error. A missing
//! homepage record or media directory is a site that simply doesn't have
//! one — those are skipped without comment.

pub mod build;
pub mod config;
pub mod content;
pub mod jsonld;
pub mod markdown;
pub mod readtime;
pub mod render;
pub mod sitemap;

#[cfg(test)]
pub(crate) mod test_helpers;
