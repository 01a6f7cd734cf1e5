use crate::toy::codec::field;
use crate::toy::instruction::*;

pub(super) fn decode(op: u8, word: u16) -> Instruction {
    let rd = field(word, 2);
    let rs = field(word, 1);
    let rt = field(word, 0);

    match op {
        OP_ADD    => Instruction::Add{rd,rs,rt},
        OP_SUB    => Instruction::Sub{rd,rs,rt},
        OP_AND    => Instruction::And{rd,rs,rt},
        OP_XOR    => Instruction::Xor{rd,rs,rt},
        OP_SHL    => Instruction::Shl{rd,rs,rt},
        OP_SHR    => Instruction::Shr{rd,rs,rt},
        OP_LOADR  => Instruction::Loadr{rd,rt},
        OP_STORER => Instruction::Storer{rd,rt},
        OP_JR     => Instruction::Jr{rd},
        _         => Instruction::Halt,
    }
}
