//! Blog posts: markdown files in a single flat directory.

use crate::error::SiteError;
use pulldown_cmark::{html, Options, Parser};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A file in the posts directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    pub filename: String,
    /// Filename without its extension
    pub title: String,
}

impl BlogPost {
    fn from_filename(filename: String) -> Self {
        let title = title_from_filename(&filename);
        Self { filename, title }
    }
}

/// A post converted to HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPost {
    pub post: BlogPost,
    pub html: String,
}

fn title_from_filename(filename: &str) -> String {
    Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename)
        .to_string()
}

/// Validate a requested post name.
///
/// The name must already be percent-decoded. Only a single plain file name is
/// accepted: anything containing a path separator or NUL, and the `.`/`..`
/// entries, is rejected so a request can never reach outside the posts
/// directory.
#[must_use]
pub fn sanitize_filename(raw: &str) -> Option<&str> {
    if raw.is_empty() || raw == "." || raw == ".." {
        return None;
    }
    if raw.contains(['/', '\\', '\0']) {
        return None;
    }
    Some(raw)
}

/// Convert markdown to HTML (CommonMark plus tables, strikethrough and footnotes).
#[must_use]
pub fn markdown_to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);
    let parser = Parser::new_ext(source, options);
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Read access to the posts directory.
#[derive(Debug, Clone)]
pub struct PostStore {
    dir: PathBuf,
}

impl PostStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Every regular file in the directory, sorted by filename.
    pub fn list(&self) -> io::Result<Vec<BlogPost>> {
        let mut posts = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => posts.push(BlogPost::from_filename(name)),
                Err(name) => debug!(name = ?name, "skipping non UTF-8 post filename"),
            }
        }
        posts.sort_by(|a, b| a.filename.cmp(&b.filename));
        Ok(posts)
    }

    /// Like [`PostStore::list`], but an unreadable directory is logged and
    /// treated as empty.
    #[must_use]
    pub fn list_or_empty(&self) -> Vec<BlogPost> {
        self.list().unwrap_or_else(|err| {
            warn!(dir = %self.dir.display(), error = %err, "failed to read posts directory");
            Vec::new()
        })
    }

    /// Load a post by (decoded) name and convert it to HTML.
    pub fn render(&self, raw_name: &str) -> Result<RenderedPost, SiteError> {
        let not_found = || SiteError::PostNotFound {
            name: raw_name.to_string(),
        };
        let name = sanitize_filename(raw_name).ok_or_else(not_found)?;
        let path = self.dir.join(name);
        if !path.is_file() {
            return Err(not_found());
        }
        let source = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Err(not_found()),
            Err(err) => return Err(err.into()),
        };
        let html = markdown_to_html(&String::from_utf8_lossy(&source));
        Ok(RenderedPost {
            post: BlogPost::from_filename(name.to_string()),
            html,
        })
    }
}
