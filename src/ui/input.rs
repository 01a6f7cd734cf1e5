use crate::toy::{ToyError, codec::decode_hex};

/// Words shown by a bare `list`.
pub const LIST_WINDOW: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListArg {
    /// Window around pc.
    Here,
    /// Window around an address.
    Around(u8),
    /// Inclusive range.
    Range(u8, u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Run,
    Step,
    Next,
    Continue,
    Break(u8),
    Delete(usize),
    Info,
    Verbose(bool),
    List(ListArg),
    Reg,
    Help,
    Quit,
}

/// Tokenizes one debugger line. Blank or unknown input gives `Ok(None)`;
/// a known command with bad arguments is an error.
pub fn parse_command(line: &str) -> Result<Option<Command>, ToyError> {
    let mut words = line.split_whitespace();
    let Some(keyword) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();

    let cmd = match keyword {
        "run" | "r" => Command::Run,
        "step" | "s" => Command::Step,
        "next" | "n" => Command::Next,
        "continue" | "c" => Command::Continue,
        "break" | "b" => Command::Break(parse_addr(required(arg, "break")?)?),
        "delete" | "d" => {
            let text = required(arg, "delete")?;
            let n = text
                .parse::<usize>()
                .map_err(|_| ToyError::MalformedInput(text.to_string()))?;
            Command::Delete(n)
        }
        "info" => Command::Info,
        "verbose" | "v" => Command::Verbose(true),
        "noverbose" | "nv" => Command::Verbose(false),
        "list" | "l" => Command::List(parse_list(arg)?),
        "reg" => Command::Reg,
        "help" | "h" => Command::Help,
        "quit" | "q" => Command::Quit,
        _ => return Ok(None),
    };
    Ok(Some(cmd))
}

fn required<'a>(arg: Option<&'a str>, cmd: &'static str) -> Result<&'a str, ToyError> {
    arg.ok_or(ToyError::MissingArgument(cmd))
}

/// Hex address 00..FF, optionally written with a `0x` prefix.
pub fn parse_addr(text: &str) -> Result<u8, ToyError> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    let v = decode_hex(digits)?;
    u8::try_from(v).map_err(|_| ToyError::OutOfRange { value: text.to_string(), max: u8::MAX as u16 })
}

fn parse_list(arg: Option<&str>) -> Result<ListArg, ToyError> {
    let Some(text) = arg else {
        return Ok(ListArg::Here);
    };
    match text.split_once("..") {
        Some((a, b)) => {
            let (a, b) = (parse_addr(a)?, parse_addr(b)?);
            if a > b {
                return Err(ToyError::MalformedInput(text.to_string()));
            }
            Ok(ListArg::Range(a, b))
        }
        None => Ok(ListArg::Around(parse_addr(text)?)),
    }
}

/// Inclusive address bounds a `list` prints, given the current pc.
pub fn list_bounds(arg: ListArg, pc: u16) -> (u8, u8) {
    let around = |c: u16| {
        let lo = c.saturating_sub(LIST_WINDOW / 2).min(u8::MAX as u16);
        let hi = (lo + LIST_WINDOW - 1).min(u8::MAX as u16);
        (lo as u8, hi as u8)
    };
    match arg {
        ListArg::Here => around(pc),
        ListArg::Around(a) => around(a as u16),
        ListArg::Range(a, b) => (a, b),
    }
}
