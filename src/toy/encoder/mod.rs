// src/toy/encoder/mod.rs
use crate::toy::instruction::*;

#[inline] fn r(op:u8, rd:u8, rs:u8, rt:u8) -> u16 {
    ((op as u16 & 0xF) << 12) | ((rd as u16 & 0xF) << 8) | ((rs as u16 & 0xF) << 4) | (rt as u16 & 0xF)
}
#[inline] fn i(op:u8, rd:u8, addr:u8) -> u16 {
    ((op as u16 & 0xF) << 12) | ((rd as u16 & 0xF) << 8) | addr as u16
}

/// Packs an instruction into its word; operand fields an opcode ignores are zero.
pub fn encode(inst: Instruction) -> u16 {
    use Instruction::*;
    match inst {
        Halt => 0x0000,

        Add{rd,rs,rt} => r(OP_ADD, rd, rs, rt),
        Sub{rd,rs,rt} => r(OP_SUB, rd, rs, rt),
        And{rd,rs,rt} => r(OP_AND, rd, rs, rt),
        Xor{rd,rs,rt} => r(OP_XOR, rd, rs, rt),
        Shl{rd,rs,rt} => r(OP_SHL, rd, rs, rt),
        Shr{rd,rs,rt} => r(OP_SHR, rd, rs, rt),
        Loadr{rd,rt}  => r(OP_LOADR, rd, 0, rt),
        Storer{rd,rt} => r(OP_STORER, rd, 0, rt),
        Jr{rd}        => r(OP_JR, rd, 0, 0),

        Loadi{rd,addr} => i(OP_LOADI, rd, addr),
        Load{rd,addr}  => i(OP_LOAD, rd, addr),
        Store{rd,addr} => i(OP_STORE, rd, addr),
        Beqz{rd,addr}  => i(OP_BEQZ, rd, addr),
        Bgtz{rd,addr}  => i(OP_BGTZ, rd, addr),
        Jalr{rd,addr}  => i(OP_JALR, rd, addr),
    }
}
