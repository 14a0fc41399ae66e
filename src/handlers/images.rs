use super::{HandlerResult, SiteState};
use crate::error::SiteError;
use crate::server::HandlerResponse;
use std::io;

/// `GET {image prefix}{path}`: a file from the image directory.
pub fn handler(state: &SiteState, path: &str) -> HandlerResult {
    let images = state.images.as_ref().ok_or(SiteError::NotFound)?;
    match images.load(path) {
        Ok((bytes, content_type)) => Ok(HandlerResponse::bytes(content_type, bytes)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(SiteError::NotFound),
        Err(err) => Err(err.into()),
    }
}
