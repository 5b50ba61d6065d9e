use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// One of the two on-disk representations of a solution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolutionFormat {
    /// The text-based `.sln` format.
    Legacy,
    /// The XML-based `.slnx` format.
    Xml,
}

impl SolutionFormat {
    /// Both formats, legacy first.
    pub const ALL: [SolutionFormat; 2] = [SolutionFormat::Legacy, SolutionFormat::Xml];

    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            SolutionFormat::Legacy => "sln",
            SolutionFormat::Xml => "slnx",
        }
    }

    /// Upper-case marker used in terminal output, e.g. `.SLN`.
    pub fn label(self) -> &'static str {
        match self {
            SolutionFormat::Legacy => ".SLN",
            SolutionFormat::Xml => ".SLNX",
        }
    }

    /// Returns `true` if the path carries this format's extension.
    ///
    /// Comparison ignores ASCII case, so `App.SLN` is a legacy solution.
    pub fn matches(self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case(self.extension()))
            .unwrap_or(false)
    }

    /// Detect the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.matches(path))
    }
}

impl fmt::Display for SolutionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
