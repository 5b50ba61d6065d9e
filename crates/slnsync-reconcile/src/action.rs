use std::fmt;

/// A decision for one difference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Make every model contain the value.
    Add,
    /// Make no model contain the value.
    Remove,
    /// Leave both models as they are.
    Skip,
}

impl Action {
    /// Interpret a typed character.
    ///
    /// The `+` and `-` keys are matched physically, so their unshifted or
    /// shifted counterparts (`=` and `_`) count too. Everything else skips.
    pub fn from_char(c: char) -> Self {
        match c {
            '+' | '=' => Action::Add,
            '-' | '_' => Action::Remove,
            _ => Action::Skip,
        }
    }
}

/// Terminal state of a difference. A pending difference reaches exactly one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Added,
    Removed,
    Skipped,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Added => f.write_str("added"),
            Outcome::Removed => f.write_str("removed"),
            Outcome::Skipped => f.write_str("skipped"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plus_and_minus_keys() {
        assert_eq!(Action::from_char('+'), Action::Add);
        assert_eq!(Action::from_char('='), Action::Add);
        assert_eq!(Action::from_char('-'), Action::Remove);
        assert_eq!(Action::from_char('_'), Action::Remove);
    }

    #[test]
    fn anything_else_skips() {
        for c in ['\u{1b}', 'a', ' ', '\n', '0', 'é'] {
            assert_eq!(Action::from_char(c), Action::Skip);
        }
    }
}
