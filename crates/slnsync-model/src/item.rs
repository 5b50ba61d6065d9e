//! Solution member items: projects and solution folders.
//!
//! The two files of a pair are loaded independently, so the [`ItemId`] each
//! load assigns is unrelated across files. Matching therefore goes through
//! [`ItemIdentity`]: projects by file path, folders by display name.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque per-model identifier of a solution item.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Mint a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an identifier assigned by a provider.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Short identifier (first 8 hex characters).
    pub fn short_id(&self) -> String {
        let simple = self.0.simple().to_string();
        format!("item:{}", &simple[..8])
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({})", self.short_id())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A project referenced by the solution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectItem {
    #[serde(default)]
    pub id: ItemId,
    /// Project file path as written in the solution, e.g. `src/App/App.csproj`.
    pub path: String,
    /// Project type identifier, if the solution records one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<String>,
    /// Solution path of the containing folder, `None` at the root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl ProjectItem {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            path: path.into(),
            type_id: None,
            parent: None,
        }
    }

    pub fn with_type_id(mut self, type_id: impl Into<String>) -> Self {
        self.type_id = Some(type_id.into());
        self
    }

    pub fn with_parent(mut self, folder: impl AsRef<str>) -> Self {
        self.parent = Some(normalize_folder_path(folder.as_ref()));
        self
    }
}

/// A solution folder. Folders only exist inside the solution, not on disk.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderItem {
    #[serde(default)]
    pub id: ItemId,
    /// Solution path with leading and trailing separators, e.g. `/src/tests/`.
    pub path: String,
}

impl FolderItem {
    /// Create a folder; the path is normalized to `/a/b/` form.
    pub fn new(path: impl AsRef<str>) -> Self {
        Self {
            id: ItemId::new(),
            path: normalize_folder_path(path.as_ref()),
        }
    }

    /// The display name: the last segment of the path.
    pub fn name(&self) -> &str {
        self.path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default()
    }

    /// Path of the enclosing folder, `None` for a top-level folder.
    pub fn parent_path(&self) -> Option<String> {
        parent_folder_path(&self.path)
    }
}

/// Normalize a solution folder path to `/a/b/` form.
///
/// Backslashes are accepted as separators and empty segments are dropped.
/// The root normalizes to `/`.
pub fn normalize_folder_path(path: &str) -> String {
    let segments: Vec<&str> = path
        .split(['/', '\\'])
        .filter(|s| !s.is_empty())
        .collect();
    if segments.is_empty() {
        return "/".to_string();
    }
    format!("/{}/", segments.join("/"))
}

/// Parent of a normalized folder path, `None` for top-level folders and root.
pub(crate) fn parent_folder_path(path: &str) -> Option<String> {
    let trimmed = path.trim_end_matches('/');
    let idx = trimmed.rfind('/')?;
    if idx == 0 {
        return None;
    }
    Some(format!("{}/", &trimmed[..idx]))
}

/// Which variant an item is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Project,
    Folder,
}

impl ItemKind {
    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Project => "Project",
            ItemKind::Folder => "Folder",
        }
    }
}

/// Cross-model identity of an item.
///
/// Two items with equal identities are the same entity regardless of their
/// [`ItemId`]s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemIdentity<'a> {
    /// A project, keyed by file path.
    Project(&'a str),
    /// A folder, keyed by display name.
    Folder(&'a str),
}

/// A member entry of a solution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SolutionItem {
    Project(ProjectItem),
    Folder(FolderItem),
}

impl SolutionItem {
    pub fn id(&self) -> ItemId {
        match self {
            SolutionItem::Project(p) => p.id,
            SolutionItem::Folder(f) => f.id,
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            SolutionItem::Project(_) => ItemKind::Project,
            SolutionItem::Folder(_) => ItemKind::Folder,
        }
    }

    /// Human-readable value: the project file path or the folder path.
    pub fn display_path(&self) -> &str {
        match self {
            SolutionItem::Project(p) => &p.path,
            SolutionItem::Folder(f) => &f.path,
        }
    }

    pub fn identity(&self) -> ItemIdentity<'_> {
        match self {
            SolutionItem::Project(p) => ItemIdentity::Project(&p.path),
            SolutionItem::Folder(f) => ItemIdentity::Folder(f.name()),
        }
    }

    /// Whether two items denote the same entity.
    ///
    /// Projects compare by path, folders by display name. Any other pairing
    /// falls back to the opaque identifier. Since identifiers are unique
    /// within a model this agrees with comparing [`identity`](Self::identity).
    pub fn same_entity(&self, other: &SolutionItem) -> bool {
        match (self, other) {
            (SolutionItem::Project(a), SolutionItem::Project(b)) => a.path == b.path,
            (SolutionItem::Folder(a), SolutionItem::Folder(b)) => a.name() == b.name(),
            _ => self.id() == other.id(),
        }
    }
}

impl From<ProjectItem> for SolutionItem {
    fn from(project: ProjectItem) -> Self {
        SolutionItem::Project(project)
    }
}

impl From<FolderItem> for SolutionItem {
    fn from(folder: FolderItem) -> Self {
        SolutionItem::Folder(folder)
    }
}
