use log::{debug, info};

use super::{
    breakpoints::Breakpoints,
    console::Console,
    input::{Command, list_bounds, parse_command},
    view::{self, HELP},
};
use crate::toy::{Event, Machine, ToyError, codec::{encode_hex, parse_word}};

const PROMPT: &str = "(toysim) ";
const INPUT_PROMPT: &str = "] ";

/// Executes one instruction, serving console I/O on the way: an empty input
/// queue is refilled from the console and stores to the console address are
/// printed as `> WWWW`.
pub fn drive(machine: &mut Machine, console: &mut impl Console) -> Result<Event, ToyError> {
    loop {
        match machine.step()? {
            Event::NeedsInput => {
                let v = read_word(console)?;
                machine.input.push_back(v);
            }
            Event::Output(v) => {
                console.print(&format!("> {}", encode_hex(v)));
                return Ok(Event::Output(v));
            }
            ev => return Ok(ev),
        }
    }
}

fn read_word(console: &mut impl Console) -> Result<u16, ToyError> {
    loop {
        let line = console.read_line(INPUT_PROMPT).ok_or(ToyError::InputClosed)?;
        match parse_word(&line) {
            Ok(v) => return Ok(v),
            Err(ToyError::OutOfRange { .. }) => {
                console.error("error: value out of range 0000..FFFF, please reenter.")
            }
            Err(_) => console.error("error: wrong format, please reenter."),
        }
    }
}

/// Runs without the debugger until HALT.
pub fn run_plain(machine: &mut Machine, console: &mut impl Console, verbose: bool) -> Result<(), ToyError> {
    console.print("------ Program Start ------");
    loop {
        if verbose {
            console.print(&view::trace_line(machine.cpu.pc, machine.fetch()?));
        }
        if drive(machine, console)? == Event::Halted {
            console.print("------- Program End -------");
            info!("halted after {} cycles", machine.cpu.cycles);
            return Ok(());
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Stopped,
    Running,
    Step,
}

/// How a command hands control back to the outer loop.
enum Resume {
    /// Keep reading commands.
    Prompt,
    /// Execute the instruction at pc.
    Execute,
    /// `run`: check breakpoints at the entry pc before executing.
    Start,
    Quit,
}

pub struct Debugger {
    pub machine: Machine,
    pub mode: Mode,
    pub verbose: bool,
    pub breakpoints: Breakpoints,
    started: bool,
}

impl Debugger {
    pub fn new(machine: Machine) -> Self {
        Self {
            machine,
            mode: Mode::Stopped,
            verbose: false,
            breakpoints: Breakpoints::new(),
            started: false,
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Command loop; returns on `quit` or when the console closes.
    pub fn run(&mut self, console: &mut impl Console) -> Result<(), ToyError> {
        'outer: loop {
            if self.mode != Mode::Stopped {
                self.checkpoint(console)?;
            }

            while self.mode != Mode::Running {
                let Some(line) = console.read_line(PROMPT) else {
                    return Ok(());
                };
                match self.command(&line, console)? {
                    Resume::Prompt => {}
                    Resume::Execute => break,
                    Resume::Start => continue 'outer,
                    Resume::Quit => return Ok(()),
                }
            }

            if drive(&mut self.machine, console)? == Event::Halted {
                console.print(&format!("Program exited normally ({} cycles).", self.machine.cpu.cycles));
                self.machine.reset()?;
                self.mode = Mode::Stopped;
                self.started = false;
            }
        }
    }

    /// Breakpoint check and trace ahead of the instruction at pc. Returns
    /// whether a breakpoint was hit, which leaves the debugger in STEP mode.
    fn checkpoint(&mut self, console: &mut impl Console) -> Result<bool, ToyError> {
        let pc = self.machine.cpu.pc;
        let hit = self.breakpoints.hit(pc);
        if let Some(n) = hit {
            self.mode = Mode::Step;
            info!("breakpoint {n} hit at {pc:02X}");
            console.print(&format!("Breakpoint {n}, 0x{pc:02X}"));
        }
        if self.verbose || self.mode == Mode::Step {
            console.print(&view::trace_line(pc, self.machine.fetch()?));
        }
        Ok(hit.is_some())
    }

    fn command(&mut self, line: &str, console: &mut impl Console) -> Result<Resume, ToyError> {
        let cmd = match parse_command(line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => return Ok(Resume::Prompt),
            Err(e) => {
                debug!("rejected command {line:?}: {e}");
                console.error(&format!("error: {e}"));
                return Ok(Resume::Prompt);
            }
        };

        match cmd {
            Command::Run => {
                if self.started
                    && !confirm(console, "The program being debugged has been started already. Start it from the beginning?")
                {
                    return Ok(Resume::Prompt);
                }
                if self.started {
                    self.machine.reset()?;
                }
                self.started = true;
                self.mode = Mode::Running;
                Ok(Resume::Start)
            }
            Command::Next if !self.started
                && !confirm(console, "The program is not being run. Start it?") =>
            {
                Ok(Resume::Prompt)
            }
            Command::Step | Command::Next => {
                self.mode = Mode::Step;
                if !self.started {
                    // The outer loop only checks a running program; the entry
                    // instruction gets its check here.
                    self.started = true;
                    if self.checkpoint(console)? {
                        return Ok(Resume::Prompt);
                    }
                }
                Ok(Resume::Execute)
            }
            Command::Continue => {
                if !self.started {
                    console.error("The program is not being run.");
                    return Ok(Resume::Prompt);
                }
                self.mode = Mode::Running;
                Ok(Resume::Execute)
            }
            Command::Break(addr) => {
                match self.breakpoints.find(addr) {
                    Some(n) => console.error(&format!("Breakpoint {n} already at 0x{addr:02X}")),
                    None => match self.breakpoints.insert(addr) {
                        Ok(n) => console.print(&format!("Breakpoint {n} at 0x{addr:02X}")),
                        Err(e) => console.error(&format!("error: {e}")),
                    },
                }
                Ok(Resume::Prompt)
            }
            Command::Delete(n) => {
                match self.breakpoints.remove(n) {
                    Ok(addr) => console.print(&format!("Deleted breakpoint {n} at 0x{addr:02X}")),
                    Err(e) => console.error(&format!("error: {e}")),
                }
                Ok(Resume::Prompt)
            }
            Command::Info => {
                print_all(console, view::breakpoint_lines(&self.breakpoints));
                Ok(Resume::Prompt)
            }
            Command::Verbose(on) => {
                self.verbose = on;
                console.print(if on { "Verbose on." } else { "Verbose off." });
                Ok(Resume::Prompt)
            }
            Command::List(arg) => {
                let pc = self.machine.cpu.pc;
                let (lo, hi) = list_bounds(arg, pc);
                print_all(console, view::memory_lines(&self.machine.mem, lo, hi, pc));
                Ok(Resume::Prompt)
            }
            Command::Reg => {
                print_all(console, view::register_lines(&self.machine.cpu));
                Ok(Resume::Prompt)
            }
            Command::Help => {
                print_all(console, HELP.iter().map(|s| s.to_string()));
                Ok(Resume::Prompt)
            }
            Command::Quit => Ok(Resume::Quit),
        }
    }
}

fn confirm(console: &mut impl Console, question: &str) -> bool {
    console
        .read_line(&format!("{question} (y or n) "))
        .is_some_and(|a| matches!(a.trim(), "y" | "Y" | "yes"))
}

fn print_all(console: &mut impl Console, lines: impl IntoIterator<Item = String>) {
    for l in lines {
        console.print(&l);
    }
}
