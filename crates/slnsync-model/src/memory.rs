use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::{ProviderError, ProviderResult};
use crate::format::SolutionFormat;
use crate::model::SolutionModel;
use crate::provider::SolutionProvider;

/// In-memory, HashMap-based solution provider.
///
/// Intended for tests and embedding. Models are keyed by path and cloned on
/// open/save. Every save is recorded so callers can assert on persistence.
pub struct InMemoryProvider {
    models: RwLock<HashMap<PathBuf, SolutionModel>>,
    saves: RwLock<Vec<(SolutionFormat, PathBuf)>>,
}

impl InMemoryProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self {
            models: RwLock::new(HashMap::new()),
            saves: RwLock::new(Vec::new()),
        }
    }

    /// Make `model` available at `path`.
    pub fn insert(&self, path: impl Into<PathBuf>, model: SolutionModel) {
        self.models
            .write()
            .expect("lock poisoned")
            .insert(path.into(), model);
    }

    /// The model currently stored at `path`.
    pub fn get(&self, path: &Path) -> Option<SolutionModel> {
        self.models.read().expect("lock poisoned").get(path).cloned()
    }

    /// Every save performed so far, in order.
    pub fn saves(&self) -> Vec<(SolutionFormat, PathBuf)> {
        self.saves.read().expect("lock poisoned").clone()
    }

    /// Number of saves performed so far.
    pub fn save_count(&self) -> usize {
        self.saves.read().expect("lock poisoned").len()
    }
}

impl Default for InMemoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SolutionProvider for InMemoryProvider {
    async fn open(&self, _format: SolutionFormat, path: &Path) -> ProviderResult<SolutionModel> {
        self.get(path)
            .ok_or_else(|| ProviderError::NotFound(path.to_path_buf()))
    }

    async fn save(
        &self,
        format: SolutionFormat,
        path: &Path,
        model: &SolutionModel,
    ) -> ProviderResult<()> {
        self.insert(path, model.clone());
        self.saves
            .write()
            .expect("lock poisoned")
            .push((format, path.to_path_buf()));
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.models.read().expect("lock poisoned").len();
        f.debug_struct("InMemoryProvider")
            .field("model_count", &count)
            .field("save_count", &self.save_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SolutionModel {
        let mut model = SolutionModel::new();
        model.add_platform("x64");
        model.add_build_type("Debug");
        model.add_project("App.csproj", None, None);
        model
    }

    #[tokio::test]
    async fn open_returns_inserted_model() {
        let provider = InMemoryProvider::new();
        let stored = sample();
        provider.insert("App.sln", stored.clone());
        let model = provider.open_legacy(Path::new("App.sln")).await.unwrap();
        assert_eq!(model, stored);
        assert!(model.contains_platform("x64"));
    }

    #[tokio::test]
    async fn open_missing_is_not_found() {
        let provider = InMemoryProvider::new();
        let err = provider.open_xml(Path::new("nope.slnx")).await.unwrap_err();
        assert!(matches!(err, ProviderError::NotFound(p) if p == Path::new("nope.slnx")));
    }

    #[tokio::test]
    async fn save_replaces_model_and_is_recorded() {
        let provider = InMemoryProvider::new();
        provider.insert("App.slnx", SolutionModel::new());
        let model = sample();
        provider.save_xml(Path::new("App.slnx"), &model).await.unwrap();

        assert_eq!(provider.get(Path::new("App.slnx")), Some(model));
        assert_eq!(provider.save_count(), 1);
        assert_eq!(
            provider.saves(),
            vec![(SolutionFormat::Xml, PathBuf::from("App.slnx"))]
        );
    }
}
