pub mod arch;
pub mod codec;
pub mod errors;
pub mod exec;
pub mod instruction;
pub mod memory;
pub mod registers;

pub mod decoder;
pub mod encoder;

pub mod program;


pub use arch::Machine;
pub use errors::ToyError;
pub use exec::Event;
pub use instruction::Instruction;
pub use memory::{Bus, Ram};
pub use registers::Cpu;
