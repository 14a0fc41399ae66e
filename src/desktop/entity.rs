use crate::layout::{resolve, Constraints, Position, Size, StyleMap};

/// Placement shared by windows and folders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub position: Position,
    pub size: Size,
    pub constraints: Constraints,
    /// Stacking order; higher is on top.
    pub z_index: i64,
}

impl Frame {
    pub fn new(position: Position, size: Size, constraints: Constraints) -> Self {
        Self {
            position,
            size,
            constraints,
            z_index: 0,
        }
    }

    #[must_use]
    pub fn with_z_index(mut self, z_index: i64) -> Self {
        self.z_index = z_index;
        self
    }

    #[must_use]
    pub fn styles(&self) -> StyleMap {
        resolve(&self.position, &self.size, &self.constraints, self.z_index)
    }
}

/// A draggable window whose body is pre-rendered HTML.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    pub id: String,
    pub title: String,
    pub frame: Frame,
    /// Trusted markup, inserted into the page without escaping.
    pub content: String,
}

/// A desktop folder icon grouping a set of post filenames.
#[derive(Debug, Clone, PartialEq)]
pub struct Folder {
    pub id: String,
    pub title: String,
    pub frame: Frame,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Window,
    Folder,
}

/// Anything the registry can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Window(Window),
    Folder(Folder),
}

impl Entity {
    pub fn id(&self) -> &str {
        match self {
            Entity::Window(w) => &w.id,
            Entity::Folder(f) => &f.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Entity::Window(w) => &w.title,
            Entity::Folder(f) => &f.title,
        }
    }

    pub fn frame(&self) -> &Frame {
        match self {
            Entity::Window(w) => &w.frame,
            Entity::Folder(f) => &f.frame,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Window(_) => EntityKind::Window,
            Entity::Folder(_) => EntityKind::Folder,
        }
    }

    pub fn z_index(&self) -> i64 {
        self.frame().z_index
    }

    pub fn as_window(&self) -> Option<&Window> {
        match self {
            Entity::Window(w) => Some(w),
            Entity::Folder(_) => None,
        }
    }

    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            Entity::Folder(f) => Some(f),
            Entity::Window(_) => None,
        }
    }
}

impl From<Window> for Entity {
    fn from(w: Window) -> Self {
        Entity::Window(w)
    }
}

impl From<Folder> for Entity {
    fn from(f: Folder) -> Self {
        Entity::Folder(f)
    }
}
