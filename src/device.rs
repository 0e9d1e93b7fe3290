//! Terminal device contract and the stdin/stdout implementation.

use std::io::{self, BufRead, Write};

use crossterm::{
    cursor, execute,
    terminal::{self, ClearType},
};
use is_terminal::IsTerminal;

/// Blocking line-oriented terminal used by the navigation loop.
///
/// `accept_input` may legitimately return a non-numeric, out-of-range, or
/// empty string; the loop treats all of those as "show the screen again".
pub trait IoDevice {
    /// Writes `content` with embedded newlines rendered as line breaks and
    /// no break after the final line.
    fn display(&mut self, content: &str);

    /// Blocks for and returns one line of input, without its terminator.
    fn accept_input(&mut self) -> String;

    /// Clears the visible screen. Failures are swallowed here, not surfaced.
    fn clear_display(&mut self);
}

/// `IoDevice` over the process stdin/stdout.
#[derive(Debug, Default)]
pub struct ConsoleDevice;

impl ConsoleDevice {
    pub fn new() -> Self {
        Self
    }
}

impl IoDevice for ConsoleDevice {
    fn display(&mut self, content: &str) {
        let mut stdout = io::stdout();
        let _ = stdout.write_all(content.as_bytes());
        let _ = stdout.flush();
    }

    fn accept_input(&mut self) -> String {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return String::new();
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        line
    }

    fn clear_display(&mut self) {
        // Clearing a redirected stream would just garble the output.
        if !io::stdout().is_terminal() {
            return;
        }
        let _ = execute!(
            io::stdout(),
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        );
    }
}
