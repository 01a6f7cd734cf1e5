use crate::toy::{Cpu, Ram, codec::encode_hex, decoder::disasm};

use super::breakpoints::Breakpoints;

pub(super) const HELP: &[&str] = &[
    "run, r              start the program (restart asks first)",
    "step, s             execute one instruction",
    "next, n             like step; asks before starting the program",
    "continue, c         run until a breakpoint or halt",
    "break, b <addr>     set a breakpoint at hex address <addr>",
    "delete, d <n>       delete breakpoint number <n>",
    "info                list breakpoints",
    "verbose, v          trace every instruction",
    "noverbose, nv       stop tracing",
    "list, l [addr|A..B] show memory around pc, around addr, or from A to B",
    "reg                 show registers",
    "help, h             show this text",
    "quit, q             leave the debugger",
];

/// pc and the instruction about to execute.
pub(super) fn trace_line(pc: u16, word: u16) -> String {
    format!("[{}] {}  {}", encode_hex(pc), encode_hex(word), disasm(word))
}

pub(super) fn register_lines(cpu: &Cpu) -> Vec<String> {
    let mut lines = vec![format!("pc: {:02X}  cycles: {}", cpu.pc, cpu.cycles)];
    lines.extend(cpu.r.chunks(4).enumerate().map(|(row, regs)| {
        regs.iter()
            .enumerate()
            .map(|(i, &v)| format!("R{:X}: {}", row * 4 + i, encode_hex(v)))
            .collect::<Vec<_>>()
            .join("  ")
    }));
    lines
}

/// Words `lo..=hi`, with the one at pc marked.
pub(super) fn memory_lines(mem: &Ram, lo: u8, hi: u8, pc: u16) -> Vec<String> {
    (lo..=hi)
        .map(|a| {
            let w = mem.words()[a as usize];
            let mark = if a as u16 == pc { "=>" } else { "  " };
            format!("{mark} {a:02X}: {}  {}", encode_hex(w), disasm(w))
        })
        .collect()
}

pub(super) fn breakpoint_lines(bp: &Breakpoints) -> Vec<String> {
    let mut lines: Vec<String> = bp.iter().map(|(n, a)| format!("{n:<4} 0x{a:02X}")).collect();
    if lines.is_empty() {
        lines.push("No breakpoints.".into());
    } else {
        lines.insert(0, "Num  Address".into());
    }
    lines
}
