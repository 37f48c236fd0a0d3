use super::{Address, Word, MEMORY_SIZE};
use crate::error;
use crate::mach::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Word store
///
/// Exactly 32768 cells. The loaded image fills the low addresses,
/// everything past it reads as zero.

#[derive(Clone)]
pub struct Memory {
    cells: Box<[Word]>,
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.cells.iter().rposition(|&w| w != 0).map_or(0, |i| i + 1);
        write!(f, "Memory {{ {} of {} words used }}", used, MEMORY_SIZE)
    }
}

impl Default for Memory {
    fn default() -> Memory {
        Memory {
            cells: vec![0; MEMORY_SIZE].into_boxed_slice(),
        }
    }
}

impl Memory {
    pub fn new(image: &[Word]) -> Result<Memory> {
        if image.len() > MEMORY_SIZE {
            return Err(error!(ImageTooLarge; "MORE THAN 32768 WORDS"));
        }
        let mut memory = Memory::default();
        memory.cells[..image.len()].copy_from_slice(image);
        Ok(memory)
    }

    pub fn get(&self, addr: Address) -> Option<Word> {
        self.cells.get(addr).copied()
    }

    /// Instruction stream read. Past the end is `OutOfRangeFetch`.
    pub fn fetch(&self, addr: Address) -> Result<Word> {
        match self.get(addr) {
            Some(word) => Ok(word),
            None => Err(error!(OutOfRangeFetch, truncate(addr))),
        }
    }

    /// Data read by RMEM.
    pub fn read(&self, addr: Word) -> Result<Word> {
        match self.get(addr as Address) {
            Some(word) => Ok(word),
            None => Err(error!(InvalidAddress, addr)),
        }
    }

    /// Data write by WMEM.
    pub fn write(&mut self, addr: Word, value: Word) -> Result<()> {
        match self.cells.get_mut(addr as Address) {
            Some(cell) => {
                *cell = value;
                Ok(())
            }
            None => Err(error!(InvalidAddress, addr)),
        }
    }

    pub fn as_slice(&self) -> &[Word] {
        &self.cells
    }
}

fn truncate(addr: Address) -> Word {
    (addr & 0xffff) as Word
}
