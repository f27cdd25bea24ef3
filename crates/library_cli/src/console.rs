//! Line-oriented terminal I/O for the menu frontend.
//!
//! Generic over reader/writer so flows can be driven from tests.

use colored::Colorize;
use library_core::ServiceError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};

const RULE_WIDTH: usize = 74;
const BOX_WIDTH: usize = 64;

/// Failure of one menu command.
#[derive(Debug)]
pub enum CommandError {
    /// Service rejected the request; shown to the user, loop continues.
    Service(ServiceError),
    /// Typed value could not be parsed; shown to the user, loop continues.
    InvalidInput(String),
    /// Terminal read/write failed or input ended; ends the session.
    Io(io::Error),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Service(err) => write!(f, "{err}"),
            Self::InvalidInput(message) => write!(f, "{message}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Service(err) => Some(err),
            Self::InvalidInput(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<ServiceError> for CommandError {
    fn from(value: ServiceError) -> Self {
        Self::Service(value)
    }
}

impl From<io::Error> for CommandError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

pub type CommandResult<T = ()> = Result<T, CommandError>;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn header(&mut self, title: &str, subtitle: &str) -> io::Result<()> {
        let border = "═".repeat(BOX_WIDTH + 2);
        writeln!(self.output)?;
        writeln!(self.output, "{}", format!("╔{border}╗").cyan())?;
        writeln!(
            self.output,
            "{} {} {}",
            "║".cyan(),
            pad_right(title, BOX_WIDTH).bold(),
            "║".cyan()
        )?;
        writeln!(
            self.output,
            "{} {} {}",
            "║".cyan(),
            pad_right(subtitle, BOX_WIDTH).dimmed(),
            "║".cyan()
        )?;
        writeln!(self.output, "{}", format!("╚{border}╝").cyan())
    }

    /// Prints `[key] text` items and returns the trimmed selection.
    pub fn menu(&mut self, items: &[(&str, &str)]) -> io::Result<String> {
        for (key, text) in items {
            writeln!(self.output, "  [{key}] {text}")?;
        }
        writeln!(self.output)?;
        self.prompt(&"Select: ".yellow().to_string())
    }

    pub fn read_str(&mut self, label: &str) -> io::Result<String> {
        self.prompt(&format!("{}: ", label.yellow()))
    }

    pub fn read_int(&mut self, label: &str) -> CommandResult<u32> {
        let raw = self.read_str(label)?;
        raw.parse::<u32>()
            .map_err(|_| CommandError::InvalidInput(format!("invalid number `{raw}`")))
    }

    /// Accepts `1/0`, `true/false` and `yes/no`, case-insensitively.
    pub fn read_bool(&mut self, label: &str) -> CommandResult<bool> {
        let raw = self.read_str(label)?;
        parse_bool(&raw).ok_or_else(|| {
            CommandError::InvalidInput(format!("invalid boolean `{raw}`; use 1 or 0"))
        })
    }

    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.prompt(&format!("{} (y/n): ", question.yellow()))?;
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }

    pub fn ok(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", format!("✔ {message}").green())
    }

    pub fn info(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", format!("ℹ {message}").cyan())
    }

    pub fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", format!("✖ {message}").red())
    }

    pub fn note(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message.dimmed())
    }

    pub fn box_info(&mut self, lines: &[String]) -> io::Result<()> {
        let border = "─".repeat(BOX_WIDTH + 2);
        writeln!(self.output, "{}", format!("┌{border}┐").blue())?;
        for line in lines {
            writeln!(self.output, "│ {} │", pad_right(line, BOX_WIDTH))?;
        }
        writeln!(self.output, "{}", format!("└{border}┘").blue())
    }

    pub fn table_header(&mut self, columns: &[&str]) -> io::Result<()> {
        let rule = "─".repeat(RULE_WIDTH);
        writeln!(self.output, "{}", rule.dimmed())?;
        writeln!(self.output, "{}", columns.join(" | ").bold())?;
        writeln!(self.output, "{}", rule.dimmed())
    }

    pub fn table_row(&mut self, cells: &[String]) -> io::Result<()> {
        writeln!(self.output, "{}", cells.join(" | "))
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

/// Shortens `value` to `max` chars, marking the cut with `…`.
pub fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    let mut out: String = value.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad_right(value: &str, width: usize) -> String {
    let clipped: String = value.chars().take(width).collect();
    format!("{clipped:<width$}")
}

#[cfg(test)]
mod tests {
    use super::{parse_bool, truncate, CommandError, Console};
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn truncate_marks_cut_text() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly", 7), "exactly");
        assert_eq!(truncate("too long text", 5), "too …");
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool(" No "), Some(false));
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn read_int_rejects_non_numbers() {
        let mut console = console("12\nabc\n");
        assert_eq!(console.read_int("Id").expect("12 parses"), 12);
        assert!(matches!(
            console.read_int("Id"),
            Err(CommandError::InvalidInput(_))
        ));
    }

    #[test]
    fn closed_input_is_an_io_error() {
        let mut console = console("");
        assert!(matches!(console.read_int("Id"), Err(CommandError::Io(_))));
    }

    #[test]
    fn confirm_accepts_y_and_yes_only() {
        let mut console = console("Y\nyes\nn\n");
        assert!(console.confirm("Delete?").expect("read"));
        assert!(console.confirm("Delete?").expect("read"));
        assert!(!console.confirm("Delete?").expect("read"));
    }
}
