use crate::exceptions::HearthError;
use std::io::{BufRead, IsTerminal, Write};

pub fn get_terminal_width() -> usize {
    static TERMINAL_WIDTH: std::sync::LazyLock<usize> = std::sync::LazyLock::new(|| {
        // 1. Check HEARTH_COLUMNS
        if let Ok(w) = std::env::var("HEARTH_COLUMNS").map(|s| s.parse().unwrap_or(0))
            && w > 0
        {
            return w;
        }

        // 2. Check COLUMNS
        if let Ok(w) = std::env::var("COLUMNS").map(|s| s.parse().unwrap_or(0))
            && w > 0
        {
            return w;
        }

        // 3. System TTY (Only called if env vars are missing)
        if is_stdout_terminal()
            && let Ok((w, _)) = crossterm::terminal::size()
        {
            return w as usize;
        }

        // 4. Default Fallback
        80
    });

    *TERMINAL_WIDTH
}

pub fn is_stdout_terminal() -> bool {
    if std::env::var("HEARTH_FORCE_TTY").is_ok() {
        return true;
    }
    std::io::stdout().is_terminal()
}

pub fn clear_screen() {
    if !std::io::stdout().is_terminal() {
        return;
    }
    let _ = crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::Clear(crossterm::terminal::ClearType::All),
        crossterm::cursor::MoveTo(0, 0)
    );
}

/// Source of answers for interactive questions asked by the shell and its modules.
pub trait Prompt {
    /// Shows `question` and returns the answer without its line terminator.
    fn ask(&mut self, question: &str) -> Result<String, HearthError>;
}

/// Line-oriented console shared by the shell loop and module prompts.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns `None` once the input is exhausted.
    pub fn read_line(&mut self) -> Result<Option<String>, HearthError> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed_len = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed_len);
        Ok(Some(buf))
    }

    pub fn print(&mut self, text: &str) -> Result<(), HearthError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    pub fn println(&mut self, text: &str) -> Result<(), HearthError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompt for Console<R, W> {
    fn ask(&mut self, question: &str) -> Result<String, HearthError> {
        self.print(question)?;
        self.read_line()?.ok_or(HearthError::InputClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_strips_terminators() {
        let mut console = Console::new(Cursor::new("first\r\nsecond\n"), Vec::new());
        assert_eq!(console.read_line().unwrap().as_deref(), Some("first"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("second"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_ask_writes_question_and_fails_on_eof() {
        let mut console = Console::new(Cursor::new("Alice\n"), Vec::new());
        assert_eq!(console.ask("Name? ").unwrap(), "Alice");
        assert!(matches!(console.ask("Again? "), Err(HearthError::InputClosed)));

        let out = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(out, "Name? Again? ");
    }
}
