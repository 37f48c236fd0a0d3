use super::{Word, REGISTER_COUNT};

/// ## Register file
///
/// Eight words, zeroed at creation. Only reachable through
/// register references in operands or the debug accessors.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registers {
    slots: [Word; REGISTER_COUNT],
}

impl Registers {
    pub fn new() -> Registers {
        Registers::default()
    }
    pub fn get(&self, index: usize) -> Word {
        self.slots[index]
    }
    pub fn set(&mut self, index: usize, value: Word) {
        self.slots[index] = value;
    }
    pub fn as_slice(&self) -> &[Word] {
        &self.slots
    }
}

impl std::fmt::Display for Registers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (index, value) in self.slots.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "r{}={}", index, value)?;
        }
        Ok(())
    }
}
