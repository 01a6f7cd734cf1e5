use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;
use log::warn;

/// Line-oriented console the machine and debugger talk through.
pub trait Console {
    /// Shows `prompt` and blocks for one line; `None` once input is closed.
    fn read_line(&mut self, prompt: &str) -> Option<String>;
    fn print(&mut self, line: &str);
    fn error(&mut self, line: &str);
}

fn write_prompt(out: &mut impl Write, prompt: &str) -> io::Result<()> {
    write!(out, "{prompt}")?;
    out.flush()
}

/// The process terminal.
#[derive(Default)]
pub struct Terminal;

impl Console for Terminal {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        if let Err(e) = write_prompt(&mut io::stdout().lock(), prompt) {
            warn!("failed to write prompt: {e}");
        }

        let mut buf = String::new();
        match io::stdin().lock().read_line(&mut buf) {
            Ok(0) => None,
            Err(e) => {
                warn!("failed to read console input: {e}");
                None
            }
            Ok(_) => Some(buf.trim_end_matches(['\r', '\n']).to_string()),
        }
    }

    fn print(&mut self, line: &str) {
        println!("{line}");
    }

    fn error(&mut self, line: &str) {
        println!("{}", line.red());
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    pub text: String,
    pub is_error: bool,
}

/// Console fed from a fixed list of lines, recording everything printed.
#[derive(Default)]
pub struct Script {
    /// Printed lines, prompts excluded
    pub lines: Vec<ConsoleLine>,
    input: VecDeque<String>,
}

impl Script {
    pub fn new<S: Into<String>>(input: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: Vec::new(),
            input: input.into_iter().map(Into::into).collect(),
        }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.lines.iter().filter(|l| l.is_error).map(|l| l.text.as_str()).collect()
    }
}

impl Console for Script {
    fn read_line(&mut self, _prompt: &str) -> Option<String> {
        self.input.pop_front()
    }

    fn print(&mut self, line: &str) {
        self.lines.push(ConsoleLine { text: line.to_string(), is_error: false });
    }

    fn error(&mut self, line: &str) {
        self.lines.push(ConsoleLine { text: line.to_string(), is_error: true });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn prompt_is_written_without_newline() {
        let mut out = Vec::new();
        write_prompt(&mut out, "] ").unwrap();
        assert_eq!(out, b"] ");
    }

    #[test]
    fn prompt_write_failure_is_reported() {
        let err = write_prompt(&mut Closed, "(toysim) ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn script_replays_input_and_records_output() {
        let mut con = Script::new(["one"]);
        assert_eq!(con.read_line("> ").as_deref(), Some("one"));
        assert_eq!(con.read_line("> "), None);
        con.print("ok");
        con.error("bad");
        assert_eq!(con.texts(), vec!["ok", "bad"]);
        assert_eq!(con.errors(), vec!["bad"]);
    }
}
