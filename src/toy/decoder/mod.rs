mod itype;
mod rtype;

use crate::toy::codec::field;
use crate::toy::instruction::{Instruction, is_format2};

/// Every 16-bit word is a valid instruction: the 4-bit opcode space is full.
pub fn decode(word: u16) -> Instruction {
    let op = field(word, 3);
    if is_format2(op) {
        itype::decode(op, word)
    } else {
        rtype::decode(op, word)
    }
}

pub fn disasm(word: u16) -> String {
    match decode(word) {
        Instruction::Halt             => "halt".into(),
        Instruction::Add{rd,rs,rt}    => format!("add   r{rd:X}, r{rs:X}, r{rt:X}"),
        Instruction::Sub{rd,rs,rt}    => format!("sub   r{rd:X}, r{rs:X}, r{rt:X}"),
        Instruction::And{rd,rs,rt}    => format!("and   r{rd:X}, r{rs:X}, r{rt:X}"),
        Instruction::Xor{rd,rs,rt}    => format!("xor   r{rd:X}, r{rs:X}, r{rt:X}"),
        Instruction::Shl{rd,rs,rt}    => format!("shl   r{rd:X}, r{rs:X}, r{rt:X}"),
        Instruction::Shr{rd,rs,rt}    => format!("shr   r{rd:X}, r{rs:X}, r{rt:X}"),
        Instruction::Loadr{rd,rt}     => format!("loadr r{rd:X}, [r{rt:X}]"),
        Instruction::Storer{rd,rt}    => format!("storer r{rd:X}, [r{rt:X}]"),
        Instruction::Jr{rd}           => format!("jr    r{rd:X}"),
        Instruction::Loadi{rd,addr}   => format!("loadi r{rd:X}, 0x{addr:02X}"),
        Instruction::Load{rd,addr}    => format!("load  r{rd:X}, [0x{addr:02X}]"),
        Instruction::Store{rd,addr}   => format!("store r{rd:X}, [0x{addr:02X}]"),
        Instruction::Beqz{rd,addr}    => format!("beqz  r{rd:X}, 0x{addr:02X}"),
        Instruction::Bgtz{rd,addr}    => format!("bgtz  r{rd:X}, 0x{addr:02X}"),
        Instruction::Jalr{rd,addr}    => format!("jalr  r{rd:X}, 0x{addr:02X}"),
    }
}
