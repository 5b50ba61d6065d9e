use slnsync_diff::{Difference, Dimension, Presence, SolutionDiff};
use slnsync_model::SolutionModel;
use tracing::{debug, info};

use crate::action::{Action, Outcome};
use crate::decision::DecisionSource;

/// One visited difference and how it ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub difference: Difference,
    pub outcome: Outcome,
}

/// Outcomes of a reconciliation run, in visiting order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub resolutions: Vec<Resolution>,
}

impl ReconcileReport {
    pub fn len(&self) -> usize {
        self.resolutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolutions.is_empty()
    }

    pub fn added(&self) -> usize {
        self.count(Outcome::Added)
    }

    pub fn removed(&self) -> usize {
        self.count(Outcome::Removed)
    }

    pub fn skipped(&self) -> usize {
        self.count(Outcome::Skipped)
    }

    /// Returns `true` if any difference changed a model.
    pub fn is_modified(&self) -> bool {
        self.resolutions
            .iter()
            .any(|r| r.outcome != Outcome::Skipped)
    }

    fn count(&self, outcome: Outcome) -> usize {
        self.resolutions
            .iter()
            .filter(|r| r.outcome == outcome)
            .count()
    }
}

/// Resolve every difference in `diff` against models `a` and `b`.
///
/// Before each prompt the difference is re-checked against the current
/// models: an earlier decision may already have settled it (adding a project
/// also adds its parent folder). Settled differences are skipped without
/// asking.
pub fn reconcile<D>(
    a: &mut SolutionModel,
    b: &mut SolutionModel,
    diff: &SolutionDiff,
    decisions: &mut D,
) -> ReconcileReport
where
    D: DecisionSource + ?Sized,
{
    let mut report = ReconcileReport::default();

    for dimension in Dimension::ORDER {
        let pending: Vec<&Difference> = diff.of(dimension).collect();
        if pending.is_empty() {
            continue;
        }
        decisions.begin_dimension(dimension, pending.len());

        for difference in pending {
            let current = refresh(difference, a, b);
            let outcome = if current.in_a() == current.in_b() {
                debug!(label = current.label(), name = current.name(), "difference already settled");
                Outcome::Skipped
            } else {
                let action = decisions.decide(&current);
                apply(a, b, &current, action)
            };
            debug!(label = current.label(), name = current.name(), %outcome, "difference resolved");
            report.resolutions.push(Resolution {
                difference: current,
                outcome,
            });
        }
    }

    info!(
        added = report.added(),
        removed = report.removed(),
        skipped = report.skipped(),
        "reconciliation finished"
    );
    report
}

/// The difference as it stands in the models now: presence flags and, for
/// items, the item as currently stored (path and parent may have moved).
fn refresh(difference: &Difference, a: &SolutionModel, b: &SolutionModel) -> Difference {
    match difference {
        Difference::Platform(p) => Difference::Platform(Presence {
            value: p.value.clone(),
            in_a: a.contains_platform(&p.value),
            in_b: b.contains_platform(&p.value),
        }),
        Difference::BuildType(p) => Difference::BuildType(Presence {
            value: p.value.clone(),
            in_a: a.contains_build_type(&p.value),
            in_b: b.contains_build_type(&p.value),
        }),
        Difference::Item(p) => {
            // Earlier removals may have moved the item to another parent.
            let live = a.find_item(&p.value).or_else(|| b.find_item(&p.value));
            Difference::Item(Presence {
                value: live.unwrap_or(&p.value).clone(),
                in_a: a.contains_item(&p.value),
                in_b: b.contains_item(&p.value),
            })
        }
    }
}

fn apply(
    a: &mut SolutionModel,
    b: &mut SolutionModel,
    difference: &Difference,
    action: Action,
) -> Outcome {
    let sides = [(a, difference.in_a()), (b, difference.in_b())];
    match action {
        Action::Add => {
            for (model, present) in sides {
                if !present {
                    add_value(model, difference);
                }
            }
            Outcome::Added
        }
        Action::Remove => {
            for (model, present) in sides {
                if present {
                    remove_value(model, difference);
                }
            }
            Outcome::Removed
        }
        Action::Skip => Outcome::Skipped,
    }
}

fn add_value(model: &mut SolutionModel, difference: &Difference) {
    match difference {
        Difference::Platform(p) => {
            model.add_platform(p.value.clone());
        }
        Difference::BuildType(p) => {
            model.add_build_type(p.value.clone());
        }
        Difference::Item(p) => {
            model.insert_item(&p.value);
        }
    }
}

fn remove_value(model: &mut SolutionModel, difference: &Difference) {
    match difference {
        Difference::Platform(p) => {
            model.remove_platform(&p.value);
        }
        Difference::BuildType(p) => {
            model.remove_build_type(&p.value);
        }
        Difference::Item(p) => {
            model.remove_item(&p.value);
        }
    }
}
