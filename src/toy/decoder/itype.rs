use crate::toy::codec::field;
use crate::toy::instruction::*;

pub(super) fn decode(op: u8, word: u16) -> Instruction {
    let rd = field(word, 2);
    let addr = field(word, 1) * 16 + field(word, 0);

    match op {
        OP_LOADI => Instruction::Loadi{rd,addr},
        OP_LOAD  => Instruction::Load{rd,addr},
        OP_STORE => Instruction::Store{rd,addr},
        OP_BEQZ  => Instruction::Beqz{rd,addr},
        OP_BGTZ  => Instruction::Bgtz{rd,addr},
        _        => Instruction::Jalr{rd,addr},
    }
}
