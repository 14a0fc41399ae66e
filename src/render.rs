//! Server-side markup rendering.
//!
//! Handlers never talk to the template engine directly; they go through the
//! [`FragmentRenderer`] seam so the engine (and its failure modes) can be
//! swapped out in tests.

use crate::desktop::{Entity, Folder, Window};
use crate::error::SiteError;
use crate::layout::style_attribute;
use crate::posts::BlogPost;
use minijinja::{path_loader, Environment};
use serde::Serialize;
use serde_json::{json, Value as JsonValue};
use std::path::Path;

pub const HOME_PAGE: &str = "pages/home.html";
pub const WINDOW_FRAGMENT: &str = "partials/window.html";
pub const FOLDER_FRAGMENT: &str = "partials/folder.html";
pub const EXPLORER_FRAGMENT: &str = "partials/file-explorer.html";
pub const STORAGE_FRAGMENT: &str = "partials/storage-content.html";

/// Renders a named template against a JSON context.
pub trait FragmentRenderer: Send + Sync {
    fn render(&self, template: &str, ctx: &JsonValue) -> Result<String, SiteError>;
}

/// [`FragmentRenderer`] backed by minijinja templates loaded from disk.
///
/// Templates are read lazily on first use and cached for the life of the
/// renderer. HTML templates are auto-escaped; window content is marked
/// `|safe` in the templates themselves.
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    pub fn new<P: AsRef<Path>>(templates_dir: P) -> Self {
        let mut env = Environment::new();
        env.set_loader(path_loader(templates_dir.as_ref().to_path_buf()));
        Self { env }
    }
}

impl FragmentRenderer for TemplateRenderer {
    fn render(&self, template: &str, ctx: &JsonValue) -> Result<String, SiteError> {
        let tmpl = self
            .env
            .get_template(template)
            .map_err(|e| SiteError::render(template, e))?;
        tmpl.render(ctx).map_err(|e| SiteError::render(template, e))
    }
}

#[derive(Debug, Serialize)]
struct WindowView<'a> {
    id: &'a str,
    title: &'a str,
    style: String,
    content: &'a str,
}

impl<'a> From<&'a Window> for WindowView<'a> {
    fn from(w: &'a Window) -> Self {
        Self {
            id: &w.id,
            title: &w.title,
            style: style_attribute(&w.frame.styles()),
            content: &w.content,
        }
    }
}

#[derive(Debug, Serialize)]
struct FolderView<'a> {
    id: &'a str,
    title: &'a str,
    style: String,
    items: &'a [String],
}

impl<'a> From<&'a Folder> for FolderView<'a> {
    fn from(f: &'a Folder) -> Self {
        Self {
            id: &f.id,
            title: &f.title,
            style: style_attribute(&f.frame.styles()),
            items: &f.items,
        }
    }
}

/// Render a single window fragment.
pub fn render_window(renderer: &dyn FragmentRenderer, window: &Window) -> Result<String, SiteError> {
    renderer.render(WINDOW_FRAGMENT, &json!({ "window": WindowView::from(window) }))
}

/// Render the full desktop page from a registry snapshot.
pub fn render_home(renderer: &dyn FragmentRenderer, entities: &[Entity]) -> Result<String, SiteError> {
    let windows: Vec<WindowView<'_>> = entities
        .iter()
        .filter_map(Entity::as_window)
        .map(WindowView::from)
        .collect();
    let folders: Vec<FolderView<'_>> = entities
        .iter()
        .filter_map(Entity::as_folder)
        .map(FolderView::from)
        .collect();
    renderer.render(HOME_PAGE, &json!({ "windows": windows, "folders": folders }))
}

/// Render the file-explorer body listing blog posts.
pub fn render_explorer(renderer: &dyn FragmentRenderer, posts: &[BlogPost]) -> Result<String, SiteError> {
    renderer.render(EXPLORER_FRAGMENT, &json!({ "posts": posts }))
}

/// Wrap converted post HTML for the hover preview.
#[must_use]
pub fn preview_fragment(html: &str) -> String {
    format!("<div class=\"preview-content\">\n{html}\n</div>\n")
}
