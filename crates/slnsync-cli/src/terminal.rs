//! Interactive terminal: renders differences and reads single keystrokes.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal;
use slnsync_diff::{Difference, Dimension};
use slnsync_model::SolutionFormat;
use slnsync_reconcile::{Action, DecisionSource};
use tracing::warn;

pub const HINT: &str = "(+) Add to all solutions, (-) Remove from all solutions, (ESC) Ignore";

/// Deletes the echoed key and the two prompt lines.
const CLEAR_PROMPT: &str = "\x1b[M\x1b[2K\x1b[M";

/// Source of single keystrokes.
pub trait KeySource {
    /// Next key pressed, `None` for keys without a character (arrows, Esc, ...).
    fn next_key(&mut self) -> io::Result<Option<char>>;
}

/// Reads keys from the controlling terminal in raw mode.
pub struct RawTerminal;

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("failed to leave raw terminal mode: {}", e);
        }
    }
}

impl KeySource for RawTerminal {
    fn next_key(&mut self) -> io::Result<Option<char>> {
        let _raw = RawModeGuard::enable()?;
        loop {
            // Only presses count; releases and repeats are reported on some platforms.
            if let Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) = event::read()?
            {
                return Ok(match code {
                    KeyCode::Char(c) => Some(c),
                    _ => None,
                });
            }
        }
    }
}

fn marker(format: SolutionFormat, present: bool) -> ColoredString {
    if present {
        format!("(✓) {}", format.label()).green()
    } else {
        format!(" (x) {}", format.label()).red()
    }
}

/// The two-line prompt for one difference.
pub fn conflict_line(difference: &Difference) -> String {
    format!(
        "{} {}\t {}: {}\n\t {}\t",
        marker(SolutionFormat::Legacy, difference.in_a()),
        marker(SolutionFormat::Xml, difference.in_b()),
        difference.label(),
        difference.name(),
        HINT.italic(),
    )
}

/// [`DecisionSource`] that asks the user at the terminal.
pub struct TerminalDecisions<W, K> {
    out: W,
    keys: K,
}

impl<W: Write, K: KeySource> TerminalDecisions<W, K> {
    pub fn new(out: W, keys: K) -> Self {
        Self { out, keys }
    }

    fn emit(&mut self, text: &str) {
        let written = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush());
        if let Err(e) = written {
            warn!("failed to write prompt: {}", e);
        }
    }
}

impl<W: Write, K: KeySource> DecisionSource for TerminalDecisions<W, K> {
    fn begin_dimension(&mut self, dimension: Dimension, _pending: usize) {
        self.emit(&format!("{}:\n", dimension.heading()));
    }

    fn decide(&mut self, difference: &Difference) -> Action {
        self.emit(&conflict_line(difference));
        let action = match self.keys.next_key() {
            Ok(Some(c)) => Action::from_char(c),
            Ok(None) => Action::Skip,
            Err(e) => {
                warn!("could not read key, skipping {} {}: {}", difference.label(), difference.name(), e);
                Action::Skip
            }
        };
        self.emit(&format!("{CLEAR_PROMPT}\n"));
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    use slnsync_diff::Presence;
    use slnsync_model::ProjectItem;

    struct ScriptedKeys(VecDeque<io::Result<Option<char>>>);

    impl KeySource for ScriptedKeys {
        fn next_key(&mut self) -> io::Result<Option<char>> {
            self.0.pop_front().unwrap_or(Ok(None))
        }
    }

    fn keys(keys: Vec<io::Result<Option<char>>>) -> ScriptedKeys {
        ScriptedKeys(keys.into())
    }

    fn platform_only_in_legacy() -> Difference {
        Difference::Platform(Presence::only_in_a("x86".to_string()))
    }

    #[test]
    fn conflict_line_shows_sides_and_value() {
        colored::control::set_override(false);
        let line = conflict_line(&platform_only_in_legacy());
        assert!(line.starts_with("(✓) .SLN  (x) .SLNX\t Platform: x86\n"));
        assert!(line.contains(HINT));
    }

    #[test]
    fn conflict_line_for_project() {
        colored::control::set_override(false);
        let item = ProjectItem::new("src/App/App.csproj").into();
        let line = conflict_line(&Difference::Item(Presence::only_in_b(item)));
        assert!(line.starts_with(" (x) .SLN (✓) .SLNX\t Project: src/App/App.csproj"));
    }

    #[test]
    fn keys_map_to_actions() {
        let mut decisions = TerminalDecisions::new(
            Vec::new(),
            keys(vec![Ok(Some('+')), Ok(Some('-')), Ok(None), Ok(Some('q'))]),
        );
        let diff = platform_only_in_legacy();
        assert_eq!(decisions.decide(&diff), Action::Add);
        assert_eq!(decisions.decide(&diff), Action::Remove);
        assert_eq!(decisions.decide(&diff), Action::Skip);
        assert_eq!(decisions.decide(&diff), Action::Skip);
    }

    #[test]
    fn unreadable_key_skips() {
        let broken = io::Error::new(io::ErrorKind::Other, "no tty");
        let mut decisions = TerminalDecisions::new(Vec::new(), keys(vec![Err(broken)]));
        assert_eq!(decisions.decide(&platform_only_in_legacy()), Action::Skip);
    }

    #[test]
    fn heading_and_prompt_are_written() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        {
            let mut decisions = TerminalDecisions::new(&mut out, keys(vec![Ok(Some('+'))]));
            decisions.begin_dimension(Dimension::BuildType, 1);
            decisions.decide(&Difference::BuildType(Presence::only_in_b("Release".to_string())));
        }
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Build Types:\n"));
        assert!(text.contains("Build Type: Release"));
        assert!(text.ends_with(&format!("{CLEAR_PROMPT}\n")));
    }
}
