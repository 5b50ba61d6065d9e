//! Provider that delegates to an external program.
//!
//! The program is invoked once per operation:
//!
//! - `<program> [args..] open <sln|slnx> <path>` prints the model as JSON on stdout.
//! - `<program> [args..] save <sln|slnx> <path>` reads the model as JSON on stdin.
//!
//! A non-zero exit status is a failure; stderr is carried into the error.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::{ChildStdin, Command};
use tracing::debug;

use crate::error::{ProviderError, ProviderResult};
use crate::format::SolutionFormat;
use crate::model::SolutionModel;
use crate::provider::SolutionProvider;

/// [`SolutionProvider`] backed by an external program speaking JSON.
#[derive(Clone, Debug)]
pub struct CommandProvider {
    program: String,
    args: Vec<String>,
}

impl CommandProvider {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Arguments placed before the operation, e.g. a script path for an interpreter.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn command(&self, operation: &str, format: SolutionFormat, path: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .arg(operation)
            .arg(format.extension())
            .arg(path)
            .kill_on_drop(true);
        cmd
    }

    fn spawn_error(&self, source: std::io::Error) -> ProviderError {
        ProviderError::Spawn {
            program: self.program.clone(),
            source,
        }
    }

    fn check_status(
        &self,
        operation: &'static str,
        path: &Path,
        output: &std::process::Output,
    ) -> ProviderResult<()> {
        if output.status.success() {
            return Ok(());
        }
        Err(ProviderError::Bridge {
            program: self.program.clone(),
            operation,
            path: path.to_path_buf(),
            status: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

#[async_trait]
impl SolutionProvider for CommandProvider {
    async fn open(&self, format: SolutionFormat, path: &Path) -> ProviderResult<SolutionModel> {
        debug!(program = %self.program, %format, path = %path.display(), "opening solution");
        let output = self
            .command("open", format, path)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| self.spawn_error(e))?;
        self.check_status("open", path, &output)?;

        let mut model: SolutionModel =
            serde_json::from_slice(&output.stdout).map_err(|e| ProviderError::Serialization {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        model.normalize_paths();
        debug!(
            path = %path.display(),
            platforms = model.platforms().len(),
            build_types = model.build_types().len(),
            items = model.items().len(),
            "solution loaded"
        );
        Ok(model)
    }

    async fn save(
        &self,
        format: SolutionFormat,
        path: &Path,
        model: &SolutionModel,
    ) -> ProviderResult<()> {
        debug!(program = %self.program, %format, path = %path.display(), "saving solution");
        let payload = serde_json::to_vec(model).map_err(|e| ProviderError::Serialization {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut child = self
            .command("save", format, path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;
        let written = match child.stdin.take() {
            Some(mut stdin) => write_payload(&mut stdin, &payload).await,
            None => Ok(()),
        };
        let output = child.wait_with_output().await?;
        // A program that exits early closes the pipe; its status and stderr
        // say why, not the write error.
        self.check_status("save", path, &output)?;
        match written {
            Err(e) if e.kind() != std::io::ErrorKind::BrokenPipe => Err(e.into()),
            _ => Ok(()),
        }
    }
}

async fn write_payload(stdin: &mut ChildStdin, payload: &[u8]) -> std::io::Result<()> {
    stdin.write_all(payload).await?;
    stdin.shutdown().await
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// A bridge that stores the JSON model verbatim in the solution file.
    const FILE_BRIDGE: &str = r#"
case "$1" in
  open) cat "$3" ;;
  save) cat > "$3" ;;
  *) echo "unknown operation $1" >&2; exit 2 ;;
esac
"#;

    fn bridge(dir: &Path, body: &str) -> CommandProvider {
        let script: PathBuf = dir.join("bridge.sh");
        std::fs::write(&script, body).unwrap();
        CommandProvider::new("sh").with_args([script.to_string_lossy().into_owned()])
    }

    #[tokio::test]
    async fn open_reads_json_from_program() {
        let dir = tempfile::tempdir().unwrap();
        let sln = dir.path().join("App.sln");
        std::fs::write(
            &sln,
            r#"{"platforms":["x64"],"build_types":["Debug"],"items":[{"kind":"folder","path":"src"}]}"#,
        )
        .unwrap();

        let provider = bridge(dir.path(), FILE_BRIDGE);
        let model = provider.open_legacy(&sln).await.unwrap();
        assert_eq!(model.platforms(), ["x64"]);
        assert_eq!(model.build_types(), ["Debug"]);
        assert!(model.find_folder("/src/").is_some());
    }

    #[tokio::test]
    async fn save_then_open_through_program() {
        let dir = tempfile::tempdir().unwrap();
        let slnx = dir.path().join("App.slnx");
        let provider = bridge(dir.path(), FILE_BRIDGE);

        let mut model = SolutionModel::new();
        model.add_platform("ARM64");
        model.add_project("src/App/App.csproj", None, Some("/src/"));
        provider.save_xml(&slnx, &model).await.unwrap();

        let reopened = provider.open_xml(&slnx).await.unwrap();
        assert_eq!(reopened, model);
    }

    #[tokio::test]
    async fn failing_program_reports_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let provider = bridge(dir.path(), "echo 'unsupported version' >&2\nexit 3\n");
        let err = provider
            .open_legacy(&dir.path().join("App.sln"))
            .await
            .unwrap_err();
        match err {
            ProviderError::Bridge { operation, status, stderr, .. } => {
                assert_eq!(operation, "open");
                assert_eq!(status, Some(3));
                assert_eq!(stderr, "unsupported version");
            }
            other => panic!("expected Bridge, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn save_rejected_before_reading_reports_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let provider = bridge(dir.path(), "echo 'read-only solution' >&2\nexit 4\n");
        // Larger than a pipe buffer, so the write fails once the program is gone.
        let mut model = SolutionModel::new();
        for i in 0..10_000 {
            model.add_platform(format!("platform-{i:05}"));
        }

        let err = provider
            .save_legacy(&dir.path().join("App.sln"), &model)
            .await
            .unwrap_err();
        match err {
            ProviderError::Bridge { operation, status, stderr, .. } => {
                assert_eq!(operation, "save");
                assert_eq!(status, Some(4));
                assert_eq!(stderr, "read-only solution");
            }
            other => panic!("expected Bridge, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_output_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let provider = bridge(dir.path(), "echo 'Microsoft Visual Studio Solution File'\n");
        let err = provider
            .open_legacy(&dir.path().join("App.sln"))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Serialization { .. }));
    }

    #[tokio::test]
    async fn missing_program_is_spawn_error() {
        let provider = CommandProvider::new("slnsync-provider-that-does-not-exist");
        let err = provider
            .open_legacy(Path::new("App.sln"))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Spawn { .. }));
    }
}
