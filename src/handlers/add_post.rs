use super::{insert_and_render, HandlerResult, SiteState};
use crate::desktop::{presets, Window};
use crate::server::ParsedRequest;
use tracing::info;

/// `GET /window/add/post/{filename}`: open a window showing one post.
pub fn handler(state: &SiteState, req: &ParsedRequest, filename: &str) -> HandlerResult {
    let rendered = state.posts.render(filename)?;

    let z_index = state.registry.allocate_z_index(req.z_index_hint());
    let window = Window {
        id: state.registry.generate_id(),
        title: rendered.post.title,
        frame: presets::post_frame().with_z_index(z_index),
        content: rendered.html,
    };
    info!(id = %window.id, post = %rendered.post.filename, z_index, "opening post window");
    insert_and_render(state, window)
}
