use std::path::{Path, PathBuf};

use slnsync_model::SolutionFormat;
use tracing::debug;

use crate::error::{LocateError, LocateResult};

/// The two files that describe the same solution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolutionPair {
    /// The `.sln` file.
    pub legacy: PathBuf,
    /// The `.slnx` file.
    pub xml: PathBuf,
}

impl SolutionPair {
    pub fn path(&self, format: SolutionFormat) -> &Path {
        match format {
            SolutionFormat::Legacy => &self.legacy,
            SolutionFormat::Xml => &self.xml,
        }
    }
}

/// Resolve the pair from positional arguments.
///
/// With zero arguments `working_dir` is scanned; with one, the argument is the
/// directory to scan; with more, the arguments are candidate file paths.
/// Relative arguments are taken relative to `working_dir`.
pub fn locate(args: &[PathBuf], working_dir: &Path) -> LocateResult<SolutionPair> {
    match args {
        [] => find_pair_in_directory(working_dir),
        [dir] => find_pair_in_directory(&working_dir.join(dir)),
        paths => {
            let resolved: Vec<PathBuf> = paths.iter().map(|p| working_dir.join(p)).collect();
            pick_from_paths(&resolved)
        }
    }
}

/// Scan `dir` (not recursively) for exactly one file of each format.
pub fn find_pair_in_directory(dir: &Path) -> LocateResult<SolutionPair> {
    if !dir.is_dir() {
        return Err(LocateError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut legacy = Vec::new();
    let mut xml = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        match SolutionFormat::from_path(&path) {
            Some(SolutionFormat::Legacy) => legacy.push(path),
            Some(SolutionFormat::Xml) => xml.push(path),
            None => {}
        }
    }
    debug!(dir = %dir.display(), legacy = legacy.len(), xml = xml.len(), "scanned for solution files");

    match (legacy.as_slice(), xml.as_slice()) {
        ([legacy], [xml]) => Ok(SolutionPair {
            legacy: legacy.clone(),
            xml: xml.clone(),
        }),
        _ => Err(LocateError::NoUniquePair {
            dir: dir.to_path_buf(),
            legacy: legacy.len(),
            xml: xml.len(),
        }),
    }
}

/// Pick the first existing path of each format from explicit arguments.
pub fn pick_from_paths(paths: &[PathBuf]) -> LocateResult<SolutionPair> {
    let pick = |format: SolutionFormat| {
        paths
            .iter()
            .find(|p| format.matches(p) && p.exists())
            .cloned()
            .ok_or(LocateError::FileNotFound(format))
    };
    Ok(SolutionPair {
        legacy: pick(SolutionFormat::Legacy)?,
        xml: pick(SolutionFormat::Xml)?,
    })
}
