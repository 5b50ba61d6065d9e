//! Solution-level diff: compare two solution models across all dimensions.
//!
//! Side A is conventionally the legacy file and side B the XML file, but the
//! engine itself is symmetric.

use slnsync_model::{SolutionItem, SolutionModel};
use tracing::debug;

use crate::symmetric::{symmetric_difference, symmetric_difference_by_key, Presence};

/// The three things two solutions can disagree on, in reconciliation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    Platform,
    BuildType,
    Item,
}

impl Dimension {
    pub const ORDER: [Dimension; 3] = [Dimension::Platform, Dimension::BuildType, Dimension::Item];

    /// Section heading shown before the differences of this dimension.
    pub fn heading(self) -> &'static str {
        match self {
            Dimension::Platform => "Platforms",
            Dimension::BuildType => "Build Types",
            Dimension::Item => "Projects",
        }
    }
}

/// A single disagreement between two solutions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Difference {
    Platform(Presence<String>),
    BuildType(Presence<String>),
    Item(Presence<SolutionItem>),
}

impl Difference {
    pub fn dimension(&self) -> Dimension {
        match self {
            Difference::Platform(_) => Dimension::Platform,
            Difference::BuildType(_) => Dimension::BuildType,
            Difference::Item(_) => Dimension::Item,
        }
    }

    /// Label of the differing value, e.g. `Build Type` or `Folder`.
    pub fn label(&self) -> &'static str {
        match self {
            Difference::Platform(_) => "Platform",
            Difference::BuildType(_) => "Build Type",
            Difference::Item(p) => p.value.kind().label(),
        }
    }

    /// The differing value as shown to the user.
    pub fn name(&self) -> &str {
        match self {
            Difference::Platform(p) | Difference::BuildType(p) => &p.value,
            Difference::Item(p) => p.value.display_path(),
        }
    }

    pub fn in_a(&self) -> bool {
        match self {
            Difference::Platform(p) | Difference::BuildType(p) => p.in_a,
            Difference::Item(p) => p.in_a,
        }
    }

    pub fn in_b(&self) -> bool {
        match self {
            Difference::Platform(p) | Difference::BuildType(p) => p.in_b,
            Difference::Item(p) => p.in_b,
        }
    }
}

/// The result of comparing two solution models.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolutionDiff {
    /// Platforms first, then build types, then items.
    pub changes: Vec<Difference>,
}

impl SolutionDiff {
    /// Create an empty solution diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the two solutions agree on everything.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of differences.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Number of differences in one dimension.
    pub fn count(&self, dimension: Dimension) -> usize {
        self.changes
            .iter()
            .filter(|c| c.dimension() == dimension)
            .count()
    }

    /// Differences of one dimension, in order.
    pub fn of(&self, dimension: Dimension) -> impl Iterator<Item = &Difference> {
        self.changes.iter().filter(move |c| c.dimension() == dimension)
    }
}

/// Compute every difference between two solution models.
///
/// Platforms and build types compare by name. Items compare by
/// [`SolutionItem::identity`], so the opaque ids assigned by two independent
/// loads never make equal items look different.
pub fn diff_solutions(a: &SolutionModel, b: &SolutionModel) -> SolutionDiff {
    let mut changes = Vec::new();

    changes.extend(
        symmetric_difference(a.platforms(), b.platforms())
            .into_iter()
            .map(Difference::Platform),
    );
    changes.extend(
        symmetric_difference(a.build_types(), b.build_types())
            .into_iter()
            .map(Difference::BuildType),
    );
    changes.extend(
        symmetric_difference_by_key(a.items(), b.items(), SolutionItem::identity)
            .into_iter()
            .map(Difference::Item),
    );

    let diff = SolutionDiff { changes };
    debug!(
        platforms = diff.count(Dimension::Platform),
        build_types = diff.count(Dimension::BuildType),
        items = diff.count(Dimension::Item),
        "computed solution diff"
    );
    diff
}
