//! # Handlers
//!
//! One module per route. Each handler is a straight line: read what it needs
//! (registry snapshot, a post, the posts directory), touch the registry if
//! the route creates or deletes something, then render markup.
//!
//! Registry mutation always happens before rendering. If rendering then
//! fails, [`insert_and_render`] takes the new window back out so a failed
//! request never leaves a half-created entity behind.

pub mod add_post;
pub mod delete_window;
pub mod home;
pub mod images;
pub mod preview;
pub mod spawn_window;

use crate::desktop::{Entity, Registry, Window};
use crate::error::SiteError;
use crate::posts::PostStore;
use crate::render::{render_window, FragmentRenderer};
use crate::router::Route;
use crate::server::{HandlerResponse, ParsedRequest};
use crate::static_files::StaticFiles;
use std::sync::Arc;
use tracing::warn;

/// Everything a handler may touch, owned by the server for its lifetime.
pub struct SiteState {
    pub registry: Arc<Registry>,
    pub renderer: Arc<dyn FragmentRenderer>,
    pub posts: PostStore,
    pub images: Option<StaticFiles>,
}

pub type HandlerResult = Result<HandlerResponse, SiteError>;

/// Run the handler for a matched route.
pub fn dispatch(state: &SiteState, route: Route, req: &ParsedRequest) -> HandlerResult {
    match route {
        Route::Home => home::handler(state),
        Route::AddWindow => spawn_window::handler(state, req),
        Route::AddPost { filename } => add_post::handler(state, req, &filename),
        Route::DeleteWindow { id } => delete_window::handler(state, &id),
        Route::Preview { filename } => preview::handler(state, &filename),
        Route::Image { path } => images::handler(state, &path),
    }
}

/// Insert `window`, then render it; undo the insert if rendering fails.
pub(crate) fn insert_and_render(state: &SiteState, window: Window) -> HandlerResult {
    let id = window.id.clone();
    state.registry.insert(Entity::Window(window.clone()));
    match render_window(state.renderer.as_ref(), &window) {
        Ok(html) => Ok(HandlerResponse::html(html)),
        Err(err) => {
            state.registry.remove(&id);
            warn!(id = %id, "rolled back window insert after render failure");
            Err(err)
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use serde_json::Value as JsonValue;
    use std::fs;
    use std::path::Path;

    /// Renders a compact, predictable fragment per template.
    pub struct StubRenderer;

    impl FragmentRenderer for StubRenderer {
        fn render(&self, template: &str, ctx: &JsonValue) -> Result<String, SiteError> {
            match template {
                crate::render::WINDOW_FRAGMENT => Ok(format!(
                    "<window id={} title={}>{}</window>",
                    ctx["window"]["id"].as_str().unwrap_or(""),
                    ctx["window"]["title"].as_str().unwrap_or(""),
                    ctx["window"]["content"].as_str().unwrap_or("")
                )),
                crate::render::EXPLORER_FRAGMENT => Ok(format!(
                    "<explorer count={}>",
                    ctx["posts"].as_array().map_or(0, Vec::len)
                )),
                crate::render::HOME_PAGE => Ok(format!(
                    "<home windows={} folders={}>",
                    ctx["windows"].as_array().map_or(0, Vec::len),
                    ctx["folders"].as_array().map_or(0, Vec::len)
                )),
                other => Err(SiteError::render(other, "no stub")),
            }
        }
    }

    /// Fails every render.
    pub struct FailingRenderer;

    impl FragmentRenderer for FailingRenderer {
        fn render(&self, template: &str, _ctx: &JsonValue) -> Result<String, SiteError> {
            Err(SiteError::render(template, "template exploded: internal detail"))
        }
    }

    pub fn state_with(
        renderer: Arc<dyn FragmentRenderer>,
        posts_dir: &Path,
    ) -> SiteState {
        SiteState {
            registry: Arc::new(Registry::new()),
            renderer,
            posts: PostStore::new(posts_dir),
            images: None,
        }
    }

    pub fn posts_dir(files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, body) in files {
            fs::write(dir.path().join(name), body).unwrap();
        }
        dir
    }
}
