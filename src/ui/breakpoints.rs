use crate::toy::ToyError;

pub const MAX_BREAKPOINTS: usize = 16;

/// Numbered breakpoint slots. A number, once handed out, keeps naming the
/// same slot; deleting empties the slot so it can be reused when the table
/// is full.
#[derive(Debug, Default, Clone)]
pub struct Breakpoints {
    slots: Vec<Option<u8>>,
}

impl Breakpoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a breakpoint and returns its 1-based number.
    pub fn insert(&mut self, addr: u8) -> Result<usize, ToyError> {
        if let Some(n) = self.find(addr) {
            return Ok(n);
        }
        if self.slots.len() < MAX_BREAKPOINTS {
            self.slots.push(Some(addr));
            return Ok(self.slots.len());
        }
        let free = self
            .slots
            .iter()
            .position(Option::is_none)
            .ok_or(ToyError::BreakpointTableFull)?;
        self.slots[free] = Some(addr);
        Ok(free + 1)
    }

    pub fn remove(&mut self, n: usize) -> Result<u8, ToyError> {
        n.checked_sub(1)
            .and_then(|i| self.slots.get_mut(i))
            .and_then(Option::take)
            .ok_or(ToyError::InvalidBreakpoint(n))
    }

    /// Number of the active breakpoint at `addr`.
    pub fn find(&self, addr: u8) -> Option<usize> {
        self.slots.iter().position(|&s| s == Some(addr)).map(|i| i + 1)
    }

    pub fn hit(&self, pc: u16) -> Option<usize> {
        u8::try_from(pc).ok().and_then(|a| self.find(a))
    }

    /// Active breakpoints as (number, address).
    pub fn iter(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.map(|a| (i + 1, a)))
    }
}
