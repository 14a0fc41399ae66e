use super::geometry::{Anchor, Constraints, Position, Size};
use std::collections::BTreeMap;

/// CSS property name to value.
///
/// Callers should treat this as an unordered map; it is a `BTreeMap` only so
/// that [`style_attribute`] produces the same string every time.
pub type StyleMap = BTreeMap<&'static str, String>;

const HALF: &str = "50%";

/// Turn a placement intent into concrete positioning properties.
///
/// Total over every input: anchors pick which edges `x`/`y` bind to, size
/// and z-index are always emitted, and each constraint only appears when it
/// is non-zero.
#[must_use]
pub fn resolve(position: &Position, size: &Size, constraints: &Constraints, z_index: i64) -> StyleMap {
    let mut styles = StyleMap::new();
    let x = || position.x.render();
    let y = || position.y.render();

    match position.anchor {
        Anchor::Center => {
            styles.insert("left", HALF.to_string());
            styles.insert("top", HALF.to_string());
            styles.insert("transform", "translate(-50%, -50%)".to_string());
        }
        Anchor::TopRight => {
            styles.insert("right", x());
            styles.insert("top", y());
        }
        Anchor::BottomLeft => {
            styles.insert("left", x());
            styles.insert("bottom", y());
        }
        Anchor::BottomRight => {
            styles.insert("right", x());
            styles.insert("bottom", y());
        }
        Anchor::BottomCenter => {
            styles.insert("left", HALF.to_string());
            styles.insert("bottom", y());
            styles.insert("transform", "translateX(-50%)".to_string());
        }
        Anchor::TopCenter => {
            styles.insert("left", HALF.to_string());
            styles.insert("top", y());
            styles.insert("transform", "translateX(-50%)".to_string());
        }
        Anchor::MiddleLeft => {
            styles.insert("top", HALF.to_string());
            styles.insert("left", x());
            styles.insert("transform", "translateY(-50%)".to_string());
        }
        Anchor::MiddleRight => {
            styles.insert("top", HALF.to_string());
            styles.insert("right", x());
            styles.insert("transform", "translateY(-50%)".to_string());
        }
        Anchor::TopLeft => {
            if !position.x.is_center() {
                styles.insert("left", x());
            }
            if !position.y.is_center() {
                styles.insert("top", y());
            }
        }
    }

    styles.insert("width", size.width.render());
    styles.insert("height", size.height.render());
    styles.insert("z-index", z_index.to_string());

    let bounds = [
        ("min-width", constraints.min_width),
        ("min-height", constraints.min_height),
        ("max-width", constraints.max_width),
        ("max-height", constraints.max_height),
    ];
    for (name, px) in bounds {
        if px > 0 {
            styles.insert(name, format!("{px}px"));
        }
    }

    styles
}

/// Serialize a style map into an inline `style` attribute value.
#[must_use]
pub fn style_attribute(styles: &StyleMap) -> String {
    let mut out = String::with_capacity(styles.len() * 16);
    for (name, value) in styles {
        out.push_str(name);
        out.push_str(": ");
        out.push_str(value);
        out.push_str("; ");
    }
    out.truncate(out.trim_end().len());
    out
}
