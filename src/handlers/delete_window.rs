use super::{HandlerResult, SiteState};
use crate::server::HandlerResponse;
use tracing::info;

/// `DELETE /window/delete/{id}`: idempotent; always 200 with an empty body.
pub fn handler(state: &SiteState, id: &str) -> HandlerResult {
    let removed = state.registry.remove(id);
    info!(id = %id, existed = removed.is_some(), "deleting window");
    Ok(HandlerResponse::empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desktop::{presets, Entity, Window};
    use crate::handlers::test_support::{posts_dir, state_with, StubRenderer};
    use std::sync::Arc;

    #[test]
    fn test_delete_is_idempotent() {
        let dir = posts_dir(&[]);
        let state = state_with(Arc::new(StubRenderer), dir.path());
        state.registry.insert(Entity::Window(Window {
            id: "window-1".into(),
            title: "t".into(),
            frame: presets::post_frame(),
            content: String::new(),
        }));

        let first = handler(&state, "window-1").unwrap();
        assert_eq!(first.status, 200);
        assert!(first.body.is_empty());
        assert!(state.registry.is_empty());

        let second = handler(&state, "window-1").unwrap();
        assert_eq!(second, HandlerResponse::empty());
    }
}
