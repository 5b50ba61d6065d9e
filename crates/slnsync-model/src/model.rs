//! The in-memory view of one solution file.

use serde::{Deserialize, Serialize};

use crate::item::{
    normalize_folder_path, parent_folder_path, FolderItem, ItemId, ProjectItem, SolutionItem,
};

/// Platforms, build types, and member items of one solution file.
///
/// Platforms and build types behave as insertion-ordered sets. Items keep the
/// order the provider produced; new items are appended.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionModel {
    #[serde(default)]
    platforms: Vec<String>,
    #[serde(default)]
    build_types: Vec<String>,
    #[serde(default)]
    items: Vec<SolutionItem>,
}

impl SolutionModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn platforms(&self) -> &[String] {
        &self.platforms
    }

    pub fn build_types(&self) -> &[String] {
        &self.build_types
    }

    pub fn items(&self) -> &[SolutionItem] {
        &self.items
    }

    /// Returns `true` if the model has no platforms, build types, or items.
    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty() && self.build_types.is_empty() && self.items.is_empty()
    }

    // ---------------------------------------------------------------
    // Platforms and build types
    // ---------------------------------------------------------------

    pub fn contains_platform(&self, platform: &str) -> bool {
        self.platforms.iter().any(|p| p == platform)
    }

    /// Add a platform. Returns `false` if it was already present.
    pub fn add_platform(&mut self, platform: impl Into<String>) -> bool {
        insert_unique(&mut self.platforms, platform.into())
    }

    /// Remove a platform. Returns `true` if it was present.
    pub fn remove_platform(&mut self, platform: &str) -> bool {
        remove_value(&mut self.platforms, platform)
    }

    pub fn contains_build_type(&self, build_type: &str) -> bool {
        self.build_types.iter().any(|b| b == build_type)
    }

    /// Add a build type. Returns `false` if it was already present.
    pub fn add_build_type(&mut self, build_type: impl Into<String>) -> bool {
        insert_unique(&mut self.build_types, build_type.into())
    }

    /// Remove a build type. Returns `true` if it was present.
    pub fn remove_build_type(&mut self, build_type: &str) -> bool {
        remove_value(&mut self.build_types, build_type)
    }

    // ---------------------------------------------------------------
    // Lookup
    // ---------------------------------------------------------------

    /// Find an item by its opaque identifier.
    pub fn find_item_by_id(&self, id: ItemId) -> Option<&SolutionItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Find a project by file path.
    pub fn find_project(&self, path: &str) -> Option<&ProjectItem> {
        self.items.iter().find_map(|item| match item {
            SolutionItem::Project(p) if p.path == path => Some(p),
            _ => None,
        })
    }

    /// Find a folder by solution path (`src/tests` and `/src/tests/` are equivalent).
    pub fn find_folder(&self, path: &str) -> Option<&FolderItem> {
        let path = normalize_folder_path(path);
        self.items.iter().find_map(|item| match item {
            SolutionItem::Folder(f) if f.path == path => Some(f),
            _ => None,
        })
    }

    /// The first item that is the same entity as `item`.
    pub fn find_item(&self, item: &SolutionItem) -> Option<&SolutionItem> {
        self.items.iter().find(|existing| existing.same_entity(item))
    }

    /// Whether the model holds an item that is the same entity as `item`.
    pub fn contains_item(&self, item: &SolutionItem) -> bool {
        self.find_item(item).is_some()
    }

    // ---------------------------------------------------------------
    // Item mutation
    // ---------------------------------------------------------------

    /// Add a folder, creating missing ancestors. Returns the folder's id.
    ///
    /// Adding an existing path is a no-op that returns the existing id.
    pub fn add_folder(&mut self, path: &str) -> ItemId {
        let path = normalize_folder_path(path);
        if let Some(existing) = self.find_folder(&path) {
            return existing.id;
        }
        if let Some(parent) = parent_folder_path(&path) {
            self.add_folder(&parent);
        }
        let folder = FolderItem::new(&path);
        let id = folder.id;
        self.items.push(SolutionItem::Folder(folder));
        id
    }

    /// Add a project under `parent` (a folder path, `None` for the root).
    ///
    /// The parent folder is created if missing. Adding an existing project
    /// path is a no-op that returns the existing id.
    pub fn add_project(&mut self, path: &str, type_id: Option<&str>, parent: Option<&str>) -> ItemId {
        if let Some(existing) = self.find_project(path) {
            return existing.id;
        }
        let parent = parent
            .map(normalize_folder_path)
            .filter(|p| p != "/");
        if let Some(folder) = &parent {
            self.add_folder(folder);
        }
        let project = ProjectItem {
            id: ItemId::new(),
            path: path.to_string(),
            type_id: type_id.map(str::to_string),
            parent,
        };
        let id = project.id;
        self.items.push(SolutionItem::Project(project));
        id
    }

    /// Remove a project by file path.
    pub fn remove_project(&mut self, path: &str) -> Option<ProjectItem> {
        let idx = self
            .items
            .iter()
            .position(|item| matches!(item, SolutionItem::Project(p) if p.path == path))?;
        match self.items.remove(idx) {
            SolutionItem::Project(p) => Some(p),
            SolutionItem::Folder(_) => None,
        }
    }

    /// Remove a folder by solution path.
    ///
    /// The folder is spliced out of the hierarchy: nested folders and the
    /// projects they contain move up one level instead of being dropped.
    pub fn remove_folder(&mut self, path: &str) -> Option<FolderItem> {
        let path = normalize_folder_path(path);
        let idx = self
            .items
            .iter()
            .position(|item| matches!(item, SolutionItem::Folder(f) if f.path == path))?;
        let removed = match self.items.remove(idx) {
            SolutionItem::Folder(f) => f,
            SolutionItem::Project(_) => return None,
        };
        let replacement = removed.parent_path().unwrap_or_else(|| "/".to_string());

        let mut seen: Vec<String> = Vec::new();
        let mut kept = Vec::with_capacity(self.items.len());
        for mut item in std::mem::take(&mut self.items) {
            match &mut item {
                SolutionItem::Folder(f) => {
                    if let Some(moved) = splice(&f.path, &removed.path, &replacement) {
                        f.path = moved;
                    }
                    if seen.contains(&f.path) {
                        continue;
                    }
                    seen.push(f.path.clone());
                }
                SolutionItem::Project(p) => {
                    if let Some(parent) = &p.parent {
                        if let Some(moved) = splice(parent, &removed.path, &replacement) {
                            p.parent = (moved != "/").then_some(moved);
                        }
                    }
                }
            }
            kept.push(item);
        }
        self.items = kept;
        Some(removed)
    }

    /// Add an item equivalent to `item`, keeping its path, type, and parent.
    pub fn insert_item(&mut self, item: &SolutionItem) -> ItemId {
        match item {
            SolutionItem::Project(p) => {
                self.add_project(&p.path, p.type_id.as_deref(), p.parent.as_deref())
            }
            SolutionItem::Folder(f) => self.add_folder(&f.path),
        }
    }

    /// Remove every item that is the same entity as `item`.
    ///
    /// Folders match by name, so `/app/tests/` and `/lib/tests/` both go.
    /// Returns the removed items in removal order.
    pub fn remove_item(&mut self, item: &SolutionItem) -> Vec<SolutionItem> {
        let mut removed = Vec::new();
        while let Some(target) = self.find_item(item).cloned() {
            let taken = match target {
                SolutionItem::Project(p) => self.remove_project(&p.path).map(SolutionItem::Project),
                SolutionItem::Folder(f) => self.remove_folder(&f.path).map(SolutionItem::Folder),
            };
            match taken {
                Some(taken) => removed.push(taken),
                None => break,
            }
        }
        removed
    }

    /// Bring folder and parent paths supplied by a provider into `/a/b/` form.
    pub fn normalize_paths(&mut self) {
        for item in &mut self.items {
            match item {
                SolutionItem::Folder(f) => f.path = normalize_folder_path(&f.path),
                SolutionItem::Project(p) => {
                    p.parent = p
                        .parent
                        .as_deref()
                        .map(normalize_folder_path)
                        .filter(|parent| parent != "/");
                }
            }
        }
    }
}

fn insert_unique(values: &mut Vec<String>, value: String) -> bool {
    if values.contains(&value) {
        return false;
    }
    values.push(value);
    true
}

fn remove_value(values: &mut Vec<String>, value: &str) -> bool {
    let before = values.len();
    values.retain(|v| v != value);
    values.len() != before
}

/// Rewrite `path` if it lies at or beneath `removed`, replacing that prefix.
fn splice(path: &str, removed: &str, replacement: &str) -> Option<String> {
    let rest = path.strip_prefix(removed)?;
    Some(format!("{replacement}{rest}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platforms_are_a_set() {
        let mut model = SolutionModel::new();
        assert!(model.add_platform("x64"));
        assert!(!model.add_platform("x64"));
        assert!(model.add_platform("x86"));
        assert_eq!(model.platforms(), ["x64", "x86"]);

        assert!(model.remove_platform("x64"));
        assert!(!model.remove_platform("x64"));
        assert_eq!(model.platforms(), ["x86"]);
    }

    #[test]
    fn build_types_are_a_set() {
        let mut model = SolutionModel::new();
        model.add_build_type("Debug");
        model.add_build_type("Release");
        model.add_build_type("Debug");
        assert_eq!(model.build_types().len(), 2);
        assert!(model.contains_build_type("Release"));
        assert!(model.remove_build_type("Release"));
        assert!(!model.contains_build_type("Release"));
    }

    #[test]
    fn add_folder_creates_ancestors() {
        let mut model = SolutionModel::new();
        let id = model.add_folder("src/tests");
        assert!(model.find_folder("/src/").is_some());
        assert_eq!(model.find_folder("/src/tests/").map(|f| f.id), Some(id));
        assert_eq!(model.items().len(), 2);

        // Idempotent.
        assert_eq!(model.add_folder("/src/tests/"), id);
        assert_eq!(model.items().len(), 2);
    }

    #[test]
    fn add_project_creates_parent_folder() {
        let mut model = SolutionModel::new();
        let id = model.add_project("src/App/App.csproj", Some("csproj"), Some("/src/"));
        let project = model.find_project("src/App/App.csproj").unwrap();
        assert_eq!(project.id, id);
        assert_eq!(project.parent.as_deref(), Some("/src/"));
        assert_eq!(project.type_id.as_deref(), Some("csproj"));
        assert!(model.find_folder("src").is_some());

        assert_eq!(model.add_project("src/App/App.csproj", None, None), id);
    }

    #[test]
    fn root_parent_is_none() {
        let mut model = SolutionModel::new();
        model.add_project("App.csproj", None, Some("/"));
        assert_eq!(model.find_project("App.csproj").unwrap().parent, None);
        assert_eq!(model.items().len(), 1);
    }

    #[test]
    fn lookup_by_id() {
        let mut model = SolutionModel::new();
        let id = model.add_project("a.csproj", None, None);
        assert_eq!(model.find_item_by_id(id).map(|i| i.display_path()), Some("a.csproj"));
        assert!(model.find_item_by_id(ItemId::new()).is_none());
    }

    #[test]
    fn remove_project_by_path() {
        let mut model = SolutionModel::new();
        model.add_project("a.csproj", None, None);
        model.add_project("b.csproj", None, None);
        let removed = model.remove_project("a.csproj").unwrap();
        assert_eq!(removed.path, "a.csproj");
        assert!(model.remove_project("a.csproj").is_none());
        assert_eq!(model.items().len(), 1);
    }

    #[test]
    fn remove_folder_splices_children_up() {
        let mut model = SolutionModel::new();
        model.add_project("src/App/App.csproj", None, Some("/src/"));
        model.add_project("tests/Unit/Unit.csproj", None, Some("/src/tests/"));

        let removed = model.remove_folder("/src/").unwrap();
        assert_eq!(removed.path, "/src/");

        assert!(model.find_folder("/src/").is_none());
        assert!(model.find_folder("/tests/").is_some());
        assert_eq!(model.find_project("src/App/App.csproj").unwrap().parent, None);
        assert_eq!(
            model.find_project("tests/Unit/Unit.csproj").unwrap().parent.as_deref(),
            Some("/tests/")
        );
    }

    #[test]
    fn remove_folder_merges_colliding_paths() {
        let mut model = SolutionModel::new();
        model.add_folder("/tests/");
        model.add_folder("/src/tests/");
        model.remove_folder("/src/");
        let folders: Vec<_> = model
            .items()
            .iter()
            .filter(|i| matches!(i, SolutionItem::Folder(_)))
            .collect();
        assert_eq!(folders.len(), 1);
        assert_eq!(folders[0].display_path(), "/tests/");
    }

    #[test]
    fn remove_item_uses_identity() {
        let mut model = SolutionModel::new();
        model.add_folder("/src/tests/");
        let other: SolutionItem = FolderItem::new("/tests/").into();
        assert!(model.contains_item(&other));
        let removed = model.remove_item(&other);
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].display_path(), "/src/tests/");
        assert!(!model.contains_item(&other));
    }

    #[test]
    fn remove_item_takes_every_folder_with_the_name() {
        let mut model = SolutionModel::new();
        model.add_folder("/app/tests/");
        model.add_project("lib/tests/Lib.Tests.csproj", None, Some("/lib/tests/"));
        let tests: SolutionItem = FolderItem::new("/tests/").into();

        let removed: Vec<String> = model
            .remove_item(&tests)
            .iter()
            .map(|i| i.display_path().to_string())
            .collect();
        assert_eq!(removed, ["/app/tests/", "/lib/tests/"]);
        assert!(!model.contains_item(&tests));
        assert!(model.find_folder("/app/").is_some());
        assert!(model.find_folder("/lib/").is_some());
        let project = model.find_project("lib/tests/Lib.Tests.csproj").unwrap();
        assert_eq!(project.parent.as_deref(), Some("/lib/"));
    }

    #[test]
    fn remove_item_of_absent_entity_is_empty() {
        let mut model = SolutionModel::new();
        model.add_folder("/src/");
        assert!(model.remove_item(&FolderItem::new("/docs/").into()).is_empty());
        assert_eq!(model.items().len(), 1);
    }

    #[test]
    fn insert_item_copies_project_fields() {
        let mut source = SolutionModel::new();
        source.add_project("lib/Lib.csproj", Some("vbproj"), Some("/lib/"));
        let item = source
            .items()
            .iter()
            .find(|i| i.display_path() == "lib/Lib.csproj")
            .unwrap()
            .clone();

        let mut target = SolutionModel::new();
        let id = target.insert_item(&item);
        let copy = target.find_project("lib/Lib.csproj").unwrap();
        assert_eq!(copy.id, id);
        assert_ne!(copy.id, item.id());
        assert_eq!(copy.type_id.as_deref(), Some("vbproj"));
        assert_eq!(copy.parent.as_deref(), Some("/lib/"));
    }

    #[test]
    fn normalize_provider_paths() {
        let mut model: SolutionModel = serde_json::from_str(
            r#"{"items":[{"kind":"folder","path":"src"},{"kind":"project","path":"a.csproj","parent":"src"}]}"#,
        )
        .unwrap();
        model.normalize_paths();
        assert!(model.find_folder("/src/").is_some());
        assert_eq!(model.find_project("a.csproj").unwrap().parent.as_deref(), Some("/src/"));
        assert!(model.platforms().is_empty());
    }
}
