//! Shared test utilities for the simple-press test suite.
//!
//! Builds throwaway site trees inside a [`TempDir`] so tests exercise the
//! real filesystem pipeline without touching checked-in fixtures. Each test
//! gets an isolated tree it can mutate freely.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::build::BuildPaths;

/// Write a file under `dir`, creating intermediate directories. Returns the
/// full path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// A minimal complete site: config, homepage, one article, one shared asset.
///
/// ```text
/// <tmp>/
/// ├── site/
/// │   ├── config.json
/// │   └── content/
/// │       ├── homepage.json
/// │       └── articles/hello.json
/// └── shared/style.css
/// ```
///
/// Returns the tempdir (keep it alive for the test's duration) and the
/// matching [`BuildPaths`] with output at `<tmp>/dist`.
pub fn site_fixture() -> (TempDir, BuildPaths) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    write_file(
        root,
        "site/config.json",
        r#"{"domain": "example.com", "title": "Example", "description": "An example site"}"#,
    );
    write_file(root, "site/content/homepage.json", r#"{"heading": "Hi"}"#);
    write_file(
        root,
        "site/content/articles/hello.json",
        r#"{"title": "Hello", "date": "2024-01-01", "content": "Just a few words."}"#,
    );
    write_file(root, "shared/style.css", "body { margin: 0; }\n");

    let paths = BuildPaths {
        site: root.join("site"),
        assets: root.join("shared"),
        output: root.join("dist"),
    };
    (tmp, paths)
}
