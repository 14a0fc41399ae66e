use super::entity::Frame;
use crate::layout::{Anchor, Constraints, Position, Size, Value};

/// Placement of the "Blog Posts" explorer spawned by `POST /window/add`.
pub fn explorer_frame() -> Frame {
    Frame::new(
        Position::new(Value::percent(7.5), Value::percent(10.0), Anchor::TopLeft),
        Size::new(Value::percent(85.0), Value::percent(80.0)),
        Constraints::min(550, 300),
    )
}

/// Placement of a window showing a single post.
pub fn post_frame() -> Frame {
    Frame::new(
        Position::new(Value::percent(2.5), Value::percent(5.0), Anchor::TopLeft),
        Size::new(Value::percent(95.0), Value::percent(90.0)),
        Constraints::min(550, 300),
    )
}
