use super::errors::ToyError;

/// Number of addressable words.
pub const MEM_WORDS: usize = 256;
/// First word executed after a reset; 00..0F are reserved by convention.
pub const PROGRAM_START: u16 = 0x10;
/// Memory-mapped console: LOAD reads input, STORE prints.
pub const IO_ADDR: u8 = 0xFF;

pub trait Bus {
    fn load(&self, addr: u16) -> Result<u16, ToyError>;
    fn store(&mut self, addr: u16, value: u16) -> Result<(), ToyError>;
}

#[derive(Clone)]
pub struct Ram {
    words: [u16; MEM_WORDS],
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}

impl Ram {
    pub fn new() -> Self {
        Self { words: [0; MEM_WORDS] }
    }

    pub fn clear(&mut self) {
        self.words = [0; MEM_WORDS];
    }

    pub fn words(&self) -> &[u16] {
        &self.words
    }

    #[inline]
    fn slot(addr: u16) -> Result<usize, ToyError> {
        let idx = addr as usize;
        if idx < MEM_WORDS {
            Ok(idx)
        } else {
            Err(ToyError::IllegalAddress(addr))
        }
    }
}

impl Bus for Ram {
    fn load(&self, addr: u16) -> Result<u16, ToyError> {
        Ok(self.words[Self::slot(addr)?])
    }

    fn store(&mut self, addr: u16, value: u16) -> Result<(), ToyError> {
        self.words[Self::slot(addr)?] = value;
        Ok(())
    }
}
