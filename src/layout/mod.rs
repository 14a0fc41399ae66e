//! # Layout Module
//!
//! Converts semantic placement intents ("anchor bottom-right", "50% width",
//! "center") into concrete positioning properties for a window or folder.
//!
//! - [`Value`] - a scalar tagged with a unit (`px`, `%`, `auto`, `center`)
//! - [`Position`], [`Size`], [`Constraints`] - the placement intent
//! - [`resolve`] - the pure function producing a [`StyleMap`]
//! - [`style_attribute`] - serializes a map for an inline `style="..."`
//!
//! ```rust
//! use deskfolio::layout::{resolve, Anchor, Constraints, Position, Size, Value};
//!
//! let pos = Position::new(Value::pixels(50.0), Value::pixels(50.0), Anchor::BottomRight);
//! let size = Size::new(Value::percent(50.0), Value::percent(85.0));
//! let styles = resolve(&pos, &size, &Constraints::min(400, 300), 1000);
//! assert_eq!(styles["right"], "50px");
//! assert_eq!(styles["min-width"], "400px");
//! ```

mod geometry;
mod resolve;
mod value;

pub use geometry::{Anchor, Constraints, Position, Size};
pub use resolve::{resolve, style_attribute, StyleMap};
pub use value::{ParseValueError, Unit, Value};
