// toy/instruction.rs
pub const OP_HALT: u8 = 0x0;
pub const OP_ADD: u8 = 0x1;
pub const OP_SUB: u8 = 0x2;
pub const OP_AND: u8 = 0x3;
pub const OP_XOR: u8 = 0x4;
pub const OP_SHL: u8 = 0x5;
pub const OP_SHR: u8 = 0x6;
pub const OP_LOADI: u8 = 0x7;
pub const OP_LOAD: u8 = 0x8;
pub const OP_STORE: u8 = 0x9;
pub const OP_LOADR: u8 = 0xA;
pub const OP_STORER: u8 = 0xB;
pub const OP_BEQZ: u8 = 0xC;
pub const OP_BGTZ: u8 = 0xD;
pub const OP_JR: u8 = 0xE;
pub const OP_JALR: u8 = 0xF;

/// Opcodes whose low byte is an 8-bit address/immediate (format 2).
#[inline]
pub fn is_format2(op: u8) -> bool {
    matches!(op, OP_LOADI | OP_LOAD | OP_STORE | OP_BEQZ | OP_BGTZ | OP_JALR)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Halt,

    // Format 1: op rd rs rt
    Add{ rd:u8, rs:u8, rt:u8 }, Sub{ rd:u8, rs:u8, rt:u8 },
    And{ rd:u8, rs:u8, rt:u8 }, Xor{ rd:u8, rs:u8, rt:u8 },
    Shl{ rd:u8, rs:u8, rt:u8 }, Shr{ rd:u8, rs:u8, rt:u8 },
    Loadr{ rd:u8, rt:u8 }, Storer{ rd:u8, rt:u8 },
    Jr{ rd:u8 },

    // Format 2: op rd addr
    Loadi{ rd:u8, addr:u8 }, Load{ rd:u8, addr:u8 }, Store{ rd:u8, addr:u8 },
    Beqz{ rd:u8, addr:u8 }, Bgtz{ rd:u8, addr:u8 },
    Jalr{ rd:u8, addr:u8 },
}
