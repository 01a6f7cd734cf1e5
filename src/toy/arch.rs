use std::collections::VecDeque;

use log::info;

use super::{
    errors::ToyError,
    exec::{self, Event},
    memory::{Bus, Ram},
    program::Image,
    registers::Cpu,
};

/// Everything one run of a program touches, owned in one place.
#[derive(Clone)]
pub struct Machine {
    pub cpu: Cpu,
    pub mem: Ram,
    /// Values waiting to be read from the console address.
    pub input: VecDeque<u16>,
    image: Image,
    inputs: Vec<u16>,
}

impl Machine {
    pub fn new(image: Image, inputs: Vec<u16>) -> Result<Self, ToyError> {
        let mut m = Machine {
            cpu: Cpu::default(),
            mem: Ram::new(),
            input: VecDeque::new(),
            image,
            inputs,
        };
        m.reset()?;
        Ok(m)
    }

    /// Back to the state right after loading: registers and cycles zeroed,
    /// pc at the program start, memory reloaded and the input queue refilled.
    pub fn reset(&mut self) -> Result<(), ToyError> {
        self.cpu.reset();
        self.mem.clear();
        self.image.load_into(&mut self.mem)?;
        self.input = self.inputs.iter().copied().collect();
        info!(
            "machine reset: {} cells loaded, {} queued inputs",
            self.image.cells().len(),
            self.input.len()
        );
        Ok(())
    }

    /// Word at pc, i.e. the next instruction to execute.
    pub fn fetch(&self) -> Result<u16, ToyError> {
        self.mem.load(self.cpu.pc)
    }

    pub fn step(&mut self) -> Result<Event, ToyError> {
        exec::step(&mut self.cpu, &mut self.mem, &mut self.input)
    }
}
