use super::{HandlerResult, SiteState};
use crate::render::render_home;
use crate::server::HandlerResponse;
use tracing::debug;

/// `GET /`: the full desktop with every registered window and folder.
pub fn handler(state: &SiteState) -> HandlerResult {
    let snapshot = state.registry.list();
    debug!(entities = snapshot.len(), "rendering desktop");
    let html = render_home(state.renderer.as_ref(), &snapshot)?;
    Ok(HandlerResponse::html(html))
}
