// toy/exec.rs
use std::collections::VecDeque;

use log::trace;

use crate::toy::{
    decoder::{decode, disasm},
    errors::ToyError,
    instruction::Instruction,
    memory::{Bus, IO_ADDR},
    registers::Cpu,
};

const SIGN_BIT: u16 = 0x8000;

/// What one call to [`step`] did, as seen from outside the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Retired,
    /// A STORE to the console address retired; the value must be printed.
    Output(u16),
    /// LOAD from the console address with an empty input queue. Nothing was
    /// changed: push a value onto the queue and step again.
    NeedsInput,
    /// HALT; pc is left on the halt word.
    Halted,
}

pub fn step<B: Bus>(cpu: &mut Cpu, mem: &mut B, input: &mut VecDeque<u16>) -> Result<Event, ToyError> {
    let pc = cpu.pc;
    let word = mem.load(pc)?;
    let instr = decode(word);
    trace!("{pc:02X}: {word:04X}  {}", disasm(word));
    cpu.pc = pc.wrapping_add(1);

    let mut event = Event::Retired;
    match instr {
        Instruction::Halt => {
            cpu.pc = pc;
            return Ok(Event::Halted);
        }

        Instruction::Add{rd,rs,rt} => cpu.write(rd, cpu.read(rs).wrapping_add(cpu.read(rt))),
        Instruction::Sub{rd,rs,rt} => cpu.write(rd, cpu.read(rs).wrapping_sub(cpu.read(rt))),
        Instruction::And{rd,rs,rt} => cpu.write(rd, cpu.read(rs) & cpu.read(rt)),
        Instruction::Xor{rd,rs,rt} => cpu.write(rd, cpu.read(rs) ^ cpu.read(rt)),
        Instruction::Shl{rd,rs,rt} => cpu.write(rd, shl(cpu.read(rs), cpu.read(rt))),
        Instruction::Shr{rd,rs,rt} => cpu.write(rd, shr(cpu.read(rs), cpu.read(rt))),

        Instruction::Loadi{rd,addr} => cpu.write(rd, addr as u16),
        Instruction::Load{rd,addr} if addr == IO_ADDR => match input.pop_front() {
            Some(v) => cpu.write(rd, v),
            None => {
                cpu.pc = pc;
                return Ok(Event::NeedsInput);
            }
        },
        Instruction::Load{rd,addr} => cpu.write(rd, mem.load(addr as u16)?),
        Instruction::Store{rd,addr} => {
            mem.store(addr as u16, cpu.read(rd))?;
            if addr == IO_ADDR {
                event = Event::Output(mem.load(IO_ADDR as u16)?);
            }
        }

        // Indirect access never goes through the console.
        Instruction::Loadr{rd,rt} => {
            let a = cpu.read(rt);
            cpu.write(rd, mem.load(a)?);
        }
        Instruction::Storer{rd,rt} => mem.store(cpu.read(rt), cpu.read(rd))?,

        Instruction::Beqz{rd,addr} => {
            if cpu.read(rd) == 0 {
                cpu.pc = addr as u16;
            }
        }
        Instruction::Bgtz{rd,addr} => {
            let v = cpu.read(rd);
            if v != 0 && v & SIGN_BIT == 0 {
                cpu.pc = addr as u16;
            }
        }
        Instruction::Jr{rd} => cpu.pc = cpu.read(rd),
        Instruction::Jalr{rd,addr} => {
            cpu.write(rd, cpu.pc);
            cpu.pc = addr as u16;
        }
    }
    cpu.cycles += 1;
    Ok(event)
}

/// Left shift modulo 2^16; shifting by 16 or more clears the word.
#[inline]
pub fn shl(v: u16, n: u16) -> u16 {
    v.checked_shl(n as u32).unwrap_or(0)
}

/// Right shift that copies the sign bit into the vacated high bits.
#[inline]
pub fn shr(v: u16, n: u16) -> u16 {
    let tmp = v.checked_shr(n as u32).unwrap_or(0);
    if v & SIGN_BIT != 0 { tmp | sign_mask(n) } else { tmp }
}

/// The top `n` bits of a word set.
#[inline]
fn sign_mask(n: u16) -> u16 {
    if n >= 16 { u16::MAX } else { !(u16::MAX >> n) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toy::Ram;

    #[test]
    fn halt_does_not_count_or_advance() {
        let mut cpu = Cpu::default();
        let mut mem = Ram::new();
        let mut input = VecDeque::new();
        assert_eq!(step(&mut cpu, &mut mem, &mut input).unwrap(), Event::Halted);
        assert_eq!(cpu.pc, 0x10);
        assert_eq!(cpu.cycles, 0);
    }

    #[test]
    fn sign_mask_covers_top_bits() {
        assert_eq!(sign_mask(0), 0x0000);
        assert_eq!(sign_mask(1), 0x8000);
        assert_eq!(sign_mask(4), 0xF000);
        assert_eq!(sign_mask(16), 0xFFFF);
        assert_eq!(sign_mask(300), 0xFFFF);
    }

    #[test]
    fn shifts_saturate_past_word_width() {
        assert_eq!(shl(0x0001, 15), 0x8000);
        assert_eq!(shl(0x0001, 16), 0x0000);
        assert_eq!(shr(0x4000, 20), 0x0000);
        assert_eq!(shr(0x8000, 20), 0xFFFF);
        assert_eq!(shr(0x8001, 0), 0x8001);
    }
}
