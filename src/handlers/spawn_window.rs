use super::{insert_and_render, HandlerResult, SiteState};
use crate::desktop::{presets, Window};
use crate::render::render_explorer;
use crate::server::ParsedRequest;
use tracing::info;

pub const EXPLORER_TITLE: &str = "Blog Posts";

/// `POST /window/add`: open a file-explorer window listing the blog posts.
///
/// An unreadable posts directory still yields a (empty) explorer.
pub fn handler(state: &SiteState, req: &ParsedRequest) -> HandlerResult {
    let posts = state.posts.list_or_empty();
    let content = render_explorer(state.renderer.as_ref(), &posts)?;

    let z_index = state.registry.allocate_z_index(req.z_index_hint());
    let window = Window {
        id: state.registry.generate_id(),
        title: EXPLORER_TITLE.to_string(),
        frame: presets::explorer_frame().with_z_index(z_index),
        content,
    };
    info!(id = %window.id, z_index, posts = posts.len(), "spawning explorer window");
    insert_and_render(state, window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{posts_dir, state_with, FailingRenderer, StubRenderer};
    use std::sync::Arc;

    #[test]
    fn test_spawn_inserts_and_returns_fragment() {
        let dir = posts_dir(&[("a.md", "# A"), ("b.md", "# B")]);
        let state = state_with(Arc::new(StubRenderer), dir.path());
        let res = handler(&state, &ParsedRequest::new("POST", "/window/add")).unwrap();
        assert_eq!(res.status, 200);
        let body = res.body_str();
        assert!(body.contains("title=Blog Posts"));
        assert!(body.contains("<explorer count=2>"));

        let listed = state.registry.list();
        assert_eq!(listed.len(), 1);
        assert!(listed[0].id().starts_with("window-"));
        assert!(body.contains(listed[0].id()));
    }

    #[test]
    fn test_spawn_uses_z_index_hint_as_floor() {
        let dir = posts_dir(&[]);
        let state = state_with(Arc::new(StubRenderer), dir.path());
        let req = ParsedRequest::new("POST", "/window/add").with_header("X-Highest-Z-Index", "4000");
        handler(&state, &req).unwrap();
        assert_eq!(state.registry.list()[0].z_index(), 4001);
    }

    #[test]
    fn test_spawn_missing_posts_dir_still_renders() {
        let state = state_with(
            Arc::new(StubRenderer),
            std::path::Path::new("/no/such/posts/dir"),
        );
        let res = handler(&state, &ParsedRequest::new("POST", "/window/add")).unwrap();
        assert!(res.body_str().contains("<explorer count=0>"));
    }

    #[test]
    fn test_spawn_render_failure_leaves_registry_untouched() {
        let dir = posts_dir(&[]);
        let state = state_with(Arc::new(FailingRenderer), dir.path());
        let err = handler(&state, &ParsedRequest::new("POST", "/window/add")).unwrap_err();
        assert_eq!(err.status(), 500);
        assert!(state.registry.is_empty());
    }
}
