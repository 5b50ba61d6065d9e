use std::collections::VecDeque;

use slnsync_diff::{Difference, Dimension};

use crate::action::Action;

/// Supplies one [`Action`] per difference.
///
/// `decide` is infallible: a source that cannot read its input answers
/// [`Action::Skip`].
pub trait DecisionSource {
    /// Called once before the first difference of a dimension.
    fn begin_dimension(&mut self, _dimension: Dimension, _pending: usize) {}

    /// Choose what to do with `difference`.
    fn decide(&mut self, difference: &Difference) -> Action;
}

/// A predetermined sequence of actions. Skips once the script runs out.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDecisions {
    actions: VecDeque<Action>,
    fallback: Option<Action>,
    /// Differences presented so far, in order.
    pub presented: Vec<Difference>,
    /// Dimensions announced so far, in order.
    pub dimensions: Vec<Dimension>,
}

impl ScriptedDecisions {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Answer `action` to every difference.
    pub fn always(action: Action) -> Self {
        Self {
            fallback: Some(action),
            ..Self::default()
        }
    }

    /// Actions not consumed yet.
    pub fn remaining(&self) -> usize {
        self.actions.len()
    }
}

impl DecisionSource for ScriptedDecisions {
    fn begin_dimension(&mut self, dimension: Dimension, _pending: usize) {
        self.dimensions.push(dimension);
    }

    fn decide(&mut self, difference: &Difference) -> Action {
        self.presented.push(difference.clone());
        self.actions
            .pop_front()
            .or(self.fallback)
            .unwrap_or(Action::Skip)
    }
}
