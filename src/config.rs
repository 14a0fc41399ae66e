//! Site configuration loaded from YAML.
//!
//! Every field has a default, so a missing file or an empty document both
//! yield a working site. Placement values use the same strings the layout
//! model parses (`"50px"`, `"85%"`, `auto`, `center`).
//!
//! ```yaml
//! addr: "0.0.0.0:8080"
//! posts_dir: posts
//! templates_dir: templates
//! images:
//!   prefix: /images/
//!   dir: images
//! z_index_base: 1000
//! windows:
//!   - id: welcome
//!     title: Welcome
//!     position: { x: 50px, y: 50px, anchor: bottom-right }
//!     size: { width: 50%, height: 85% }
//!     constraints: { min_width: 400, min_height: 300 }
//!     z_index: 1000
//!     content: { html: "<h1>Welcome!</h1>" }
//! ```

use crate::desktop::DEFAULT_Z_INDEX_BASE;
use crate::layout::{Anchor, Constraints, Position, Size, Value};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub addr: String,
    pub posts_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub images: ImagesConfig,
    /// First z-index the registry hands out.
    pub z_index_base: i64,
    pub windows: Vec<SeedWindow>,
    pub folders: Vec<SeedFolder>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImagesConfig {
    pub prefix: String,
    /// `None` disables image serving.
    pub dir: Option<PathBuf>,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            prefix: "/images/".to_string(),
            dir: Some(PathBuf::from("images")),
        }
    }
}

/// Body of a seeded window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedContent {
    /// Literal trusted HTML.
    Html(String),
    /// Rendered from a template at startup with an empty context.
    Template(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedWindow {
    /// Generated as `window-<ULID>` when empty.
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub position: Position,
    pub size: Size,
    #[serde(default)]
    pub constraints: Constraints,
    /// Allocated from the registry when omitted.
    #[serde(default)]
    pub z_index: Option<i64>,
    pub content: SeedContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedFolder {
    /// Generated as `folder-<ULID>` when empty.
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub position: Position,
    pub size: Size,
    #[serde(default)]
    pub constraints: Constraints,
    #[serde(default)]
    pub z_index: Option<i64>,
    #[serde(default)]
    pub items: Vec<String>,
    /// Append every post filename found at startup to `items`.
    #[serde(default)]
    pub include_posts: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:8080".to_string(),
            posts_dir: PathBuf::from("posts"),
            templates_dir: PathBuf::from("templates"),
            images: ImagesConfig::default(),
            z_index_base: DEFAULT_Z_INDEX_BASE,
            windows: default_windows(),
            folders: default_folders(),
        }
    }
}

fn default_windows() -> Vec<SeedWindow> {
    vec![
        SeedWindow {
            id: "welcome".to_string(),
            title: "Welcome".to_string(),
            position: Position::new(Value::pixels(50.0), Value::pixels(50.0), Anchor::BottomRight),
            size: Size::new(Value::percent(50.0), Value::percent(85.0)),
            constraints: Constraints::min(400, 300).with_max(1200, 900),
            z_index: Some(1000),
            content: SeedContent::Html("<h1>Welcome!</h1>".to_string()),
        },
        SeedWindow {
            id: "storage".to_string(),
            title: "Storage".to_string(),
            position: Position::new(Value::pixels(50.0), Value::pixels(50.0), Anchor::BottomLeft),
            size: Size::new(Value::percent(50.0), Value::percent(30.0)),
            constraints: Constraints::min(600, 200),
            z_index: Some(1001),
            content: SeedContent::Template(crate::render::STORAGE_FRAGMENT.to_string()),
        },
    ]
}

fn default_folders() -> Vec<SeedFolder> {
    vec![
        SeedFolder {
            id: "folder-blog".to_string(),
            title: "Blog".to_string(),
            position: Position::new(Value::pixels(20.0), Value::pixels(20.0), Anchor::TopLeft),
            size: Size::new(Value::pixels(96.0), Value::pixels(96.0)),
            constraints: Constraints::default(),
            z_index: None,
            items: Vec::new(),
            include_posts: true,
        },
    ]
}

impl SiteConfig {
    /// Parse a YAML document.
    pub fn from_yaml(source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(source).context("invalid site config")
    }

    /// Load `path`, or return defaults when it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_yaml(&source)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        info!(
            path = %path.display(),
            windows = config.windows.len(),
            folders = config.folders.len(),
            "loaded site config"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_seed_welcome_and_storage() {
        let config = SiteConfig::default();
        assert_eq!(config.windows.len(), 2);
        assert_eq!(config.windows[0].title, "Welcome");
        assert_eq!(config.windows[0].constraints.max_width, 1200);
        assert_eq!(config.windows[1].z_index, Some(1001));
        assert_eq!(config.folders.len(), 1);
        assert_eq!(config.folders[0].id, "folder-blog");
        assert!(config.folders[0].include_posts);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = SiteConfig::from_yaml("addr: 127.0.0.1:9000\nposts_dir: content\n").unwrap();
        assert_eq!(config.addr, "127.0.0.1:9000");
        assert_eq!(config.posts_dir, PathBuf::from("content"));
        assert_eq!(config.templates_dir, PathBuf::from("templates"));
        assert_eq!(config.windows.len(), 2);
    }

    #[test]
    fn test_yaml_seed_window() {
        let yaml = r#"
windows:
  - id: about
    title: About
    position: { x: "10%", y: center, anchor: center }
    size: { width: 400px, height: auto }
    content: { html: "<p>hi</p>" }
folders: []
"#;
        let config = SiteConfig::from_yaml(yaml).unwrap();
        assert!(config.folders.is_empty());
        let w = &config.windows[0];
        assert_eq!(w.position.anchor, Anchor::Center);
        assert_eq!(w.position.y, Value::center());
        assert_eq!(w.size.height, Value::auto());
        assert_eq!(w.z_index, None);
        assert_eq!(w.constraints, Constraints::default());
        assert_eq!(w.content, SeedContent::Html("<p>hi</p>".into()));
    }

    #[test]
    fn test_seed_id_is_optional() {
        let yaml = r#"
folders:
  - title: Notes
    position: { x: 20px, y: 20px }
    size: { width: 96px, height: 96px }
    items: [a.md]
"#;
        let config = SiteConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.folders[0].id, "");
        assert_eq!(config.folders[0].items, vec!["a.md"]);
    }

    #[test]
    fn test_unknown_anchor_falls_back_to_top_left() {
        let yaml = r#"
windows:
  - id: odd
    title: Odd
    position: { x: 5px, y: 5px, anchor: left }
    size: { width: 10%, height: 10% }
    content: { html: "" }
  - id: shouty
    title: Shouty
    position: { x: 5px, y: 5px, anchor: Bottom-Right }
    size: { width: 10%, height: 10% }
    content: { html: "" }
"#;
        let config = SiteConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.windows[0].position.anchor, Anchor::TopLeft);
        assert_eq!(config.windows[1].position.anchor, Anchor::BottomRight);
    }

    #[test]
    fn test_bad_yaml_is_error() {
        assert!(SiteConfig::from_yaml("windows: 3").is_err());
        assert!(SiteConfig::from_yaml("   ").is_ok());
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = SiteConfig::load(Path::new("/definitely/not/here.yaml")).unwrap();
        assert_eq!(config, SiteConfig::default());
    }
}
