use std::fs;
use std::path::Path;

use log::debug;

use crate::toy::{codec::decode_hex, errors::ToyError, memory::Bus};

/// Initial memory contents of a program, as (address, word) cells.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Image {
    cells: Vec<(u8, u16)>,
}

impl Image {
    /// Contiguous words starting at `base`. Words past address FF are dropped.
    pub fn from_words(base: u8, code: &[u16]) -> Self {
        let cells = (base as usize..=u8::MAX as usize)
            .zip(code)
            .map(|(addr, &w)| (addr as u8, w))
            .collect();
        Self { cells }
    }

    pub fn cells(&self) -> &[(u8, u16)] {
        &self.cells
    }

    /// Writes every cell to `mem`; later cells for the same address win.
    pub fn load_into(&self, mem: &mut impl Bus) -> Result<(), ToyError> {
        for &(addr, w) in &self.cells {
            mem.store(addr as u16, w)?;
        }
        Ok(())
    }
}

/// Parses a program image: one `AA: WWWW` cell per non-blank line.
pub fn parse_image(text: &str) -> Result<Image, ToyError> {
    let mut cells = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let err = |msg: String| ToyError::Load { line: i + 1, msg };

        let (addr_s, word_s) = line
            .split_once(':')
            .ok_or_else(|| err(format!("expected `AA: WWWW`, found `{line}`")))?;
        let addr = decode_hex(addr_s.trim()).map_err(|e| err(format!("invalid address: {e}")))?;
        if addr > u8::MAX as u16 {
            return Err(err(format!("invalid address {addr:X}")));
        }
        let word = decode_hex(word_s.trim()).map_err(|e| err(format!("invalid word: {e}")))?;
        cells.push((addr as u8, word));
    }
    debug!("parsed {} program cells", cells.len());
    Ok(Image { cells })
}

/// Parses an input queue: one hex word per non-blank line, in order.
pub fn parse_inputs(text: &str) -> Result<Vec<u16>, ToyError> {
    text.lines()
        .enumerate()
        .map(|(i, l)| (i, l.trim()))
        .filter(|(_, l)| !l.is_empty())
        .map(|(i, l)| {
            decode_hex(l).map_err(|e| ToyError::Load { line: i + 1, msg: format!("invalid input: {e}") })
        })
        .collect()
}

fn read_text(path: &Path) -> Result<String, ToyError> {
    fs::read_to_string(path).map_err(|source| ToyError::Open { path: path.to_path_buf(), source })
}

pub fn read_image(path: &Path) -> Result<Image, ToyError> {
    parse_image(&read_text(path)?)
}

pub fn read_inputs(path: &Path) -> Result<Vec<u16>, ToyError> {
    parse_inputs(&read_text(path)?)
}
