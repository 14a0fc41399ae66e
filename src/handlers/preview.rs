use super::{HandlerResult, SiteState};
use crate::render::preview_fragment;
use crate::server::HandlerResponse;

/// `GET /preview/{filename}`: a post's HTML wrapped for the hover preview.
/// Nothing is registered.
pub fn handler(state: &SiteState, filename: &str) -> HandlerResult {
    let rendered = state.posts.render(filename)?;
    Ok(HandlerResponse::html(preview_fragment(&rendered.html)))
}
