use console::{style, StyledObject};
use std::io::Write;

/// Colorized status lines for the setup tool.
///
/// Writes are best-effort: a line that can't be written is logged and
/// dropped so the steps behind it still run.
pub struct Console<W> {
    out: W,
    color: bool,
}

impl<W: Write> Console<W> {
    /// Colors only when the terminal supports it.
    pub fn new(out: W) -> Self {
        Self { out, color: console::colors_enabled() }
    }

    pub fn colored(out: W) -> Self {
        Self { out, color: true }
    }

    pub fn plain(out: W) -> Self {
        Self { out, color: false }
    }

    fn write(&mut self, line: StyledObject<&str>) {
        let line = line.force_styling(self.color);

        if let Err(e) = writeln!(self.out, "{line}") {
            tracing::warn!(error = %e, "failed to write status line");
        }
    }

    pub fn info(&mut self, message: &str) {
        self.write(style(message));
    }

    pub fn success(&mut self, message: &str) {
        self.write(style(message).green());
    }

    pub fn warn(&mut self, message: &str) {
        self.write(style(message).yellow());
    }

    pub fn error(&mut self, message: &str) {
        self.write(style(message).red());
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
