use std::path::Path;

use async_trait::async_trait;

use crate::error::ProviderResult;
use crate::format::SolutionFormat;
use crate::model::SolutionModel;

/// Loads and persists solution models.
///
/// Implementations own the file grammars; callers only ever see a
/// [`SolutionModel`]. All implementations must satisfy:
/// - `open` never returns a partially parsed model; it fails instead.
/// - `save` writes the whole model or reports an error.
/// - All I/O errors are propagated, never silently ignored.
#[async_trait]
pub trait SolutionProvider: Send + Sync {
    /// Load the model stored at `path` in the given format.
    async fn open(&self, format: SolutionFormat, path: &Path) -> ProviderResult<SolutionModel>;

    /// Persist `model` to `path` in the given format.
    async fn save(
        &self,
        format: SolutionFormat,
        path: &Path,
        model: &SolutionModel,
    ) -> ProviderResult<()>;

    async fn open_legacy(&self, path: &Path) -> ProviderResult<SolutionModel> {
        self.open(SolutionFormat::Legacy, path).await
    }

    async fn open_xml(&self, path: &Path) -> ProviderResult<SolutionModel> {
        self.open(SolutionFormat::Xml, path).await
    }

    async fn save_legacy(&self, path: &Path, model: &SolutionModel) -> ProviderResult<()> {
        self.save(SolutionFormat::Legacy, path, model).await
    }

    async fn save_xml(&self, path: &Path, model: &SolutionModel) -> ProviderResult<()> {
        self.save(SolutionFormat::Xml, path, model).await
    }
}
