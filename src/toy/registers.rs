// toy/registers.rs
use super::memory::PROGRAM_START;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cpu {
    pub r: [u16; 16],
    pub pc: u16,
    /// Retired instructions since the last reset, HALT excluded.
    pub cycles: u64,
}

impl Default for Cpu {
    fn default() -> Self {
        Self { r: [0; 16], pc: PROGRAM_START, cycles: 0 }
    }
}

impl Cpu {
    #[inline] pub fn read(&self, r: u8) -> u16 { self.r[(r & 0xF) as usize] }
    #[inline] pub fn write(&mut self, r: u8, v: u16) { self.r[(r & 0xF) as usize] = v; }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
