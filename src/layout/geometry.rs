use super::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placement keyword deciding which edges `x` and `y` are measured from.
///
/// Deserialized through [`Anchor::parse`], so config files get the same
/// case-insensitive, fall-back-to-`top-left` handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Anchor {
    #[default]
    TopLeft,
    TopRight,
    TopCenter,
    BottomLeft,
    BottomRight,
    BottomCenter,
    MiddleLeft,
    MiddleRight,
    Center,
}

impl Anchor {
    pub const ALL: [Anchor; 9] = [
        Anchor::TopLeft,
        Anchor::TopRight,
        Anchor::TopCenter,
        Anchor::BottomLeft,
        Anchor::BottomRight,
        Anchor::BottomCenter,
        Anchor::MiddleLeft,
        Anchor::MiddleRight,
        Anchor::Center,
    ];

    /// Parse a keyword. Anything unrecognised falls back to `top-left`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "top-right" => Anchor::TopRight,
            "top-center" => Anchor::TopCenter,
            "bottom-left" => Anchor::BottomLeft,
            "bottom-right" => Anchor::BottomRight,
            "bottom-center" => Anchor::BottomCenter,
            "middle-left" => Anchor::MiddleLeft,
            "middle-right" => Anchor::MiddleRight,
            "center" => Anchor::Center,
            _ => Anchor::TopLeft,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Anchor::TopLeft => "top-left",
            Anchor::TopRight => "top-right",
            Anchor::TopCenter => "top-center",
            Anchor::BottomLeft => "bottom-left",
            Anchor::BottomRight => "bottom-right",
            Anchor::BottomCenter => "bottom-center",
            Anchor::MiddleLeft => "middle-left",
            Anchor::MiddleRight => "middle-right",
            Anchor::Center => "center",
        }
    }
}

impl From<String> for Anchor {
    fn from(s: String) -> Self {
        Anchor::parse(&s)
    }
}

impl From<Anchor> for String {
    fn from(anchor: Anchor) -> Self {
        anchor.as_str().to_string()
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an entity sits on the desktop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: Value,
    pub y: Value,
    #[serde(default)]
    pub anchor: Anchor,
}

impl Position {
    pub const fn new(x: Value, y: Value, anchor: Anchor) -> Self {
        Self { x, y, anchor }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: Value,
    pub height: Value,
}

impl Size {
    pub const fn new(width: Value, height: Value) -> Self {
        Self { width, height }
    }
}

/// Pixel bounds. Zero means the bound is not set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    pub min_width: u32,
    pub min_height: u32,
    pub max_width: u32,
    pub max_height: u32,
}

impl Constraints {
    pub const fn min(min_width: u32, min_height: u32) -> Self {
        Self {
            min_width,
            min_height,
            max_width: 0,
            max_height: 0,
        }
    }

    pub const fn with_max(mut self, max_width: u32, max_height: u32) -> Self {
        self.max_width = max_width;
        self.max_height = max_height;
        self
    }
}
