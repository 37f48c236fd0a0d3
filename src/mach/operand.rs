use super::{Registers, Word, MEMORY_SIZE, REGISTER_COUNT};
use crate::error;
use crate::mach::Error;

type Result<T> = std::result::Result<T, Error>;

const FIRST_REGISTER: Word = MEMORY_SIZE as Word;
const PAST_REGISTERS: Word = FIRST_REGISTER + REGISTER_COUNT as Word;

/// ## Operand encoding
///
/// A raw word below 32768 is a literal. The next eight values name
/// registers `r0` through `r7`. Anything above is invalid.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Literal(Word),
    Register(usize),
    Invalid(Word),
}

impl Operand {
    pub fn decode(raw: Word) -> Operand {
        if raw < FIRST_REGISTER {
            Operand::Literal(raw)
        } else if raw < PAST_REGISTERS {
            Operand::Register((raw - FIRST_REGISTER) as usize)
        } else {
            Operand::Invalid(raw)
        }
    }

    /// The raw word this operand was decoded from.
    pub fn encode(self) -> Word {
        match self {
            Operand::Literal(v) => v,
            Operand::Register(r) => FIRST_REGISTER + r as Word,
            Operand::Invalid(v) => v,
        }
    }

    pub fn register(index: usize) -> Word {
        debug_assert!(index < REGISTER_COUNT);
        FIRST_REGISTER + index as Word
    }

    /// Effective value of a readable operand.
    pub fn resolve(raw: Word, registers: &Registers) -> Result<Word> {
        match Operand::decode(raw) {
            Operand::Literal(v) => Ok(v),
            Operand::Register(r) => Ok(registers.get(r)),
            Operand::Invalid(v) => Err(error!(InvalidOperand, v)),
        }
    }

    /// Register index of a write destination. Literals are not writable.
    pub fn target(raw: Word) -> Result<usize> {
        match Operand::decode(raw) {
            Operand::Register(r) => Ok(r),
            Operand::Literal(v) | Operand::Invalid(v) => Err(error!(InvalidDestination, v)),
        }
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Operand::Literal(v) => write!(f, "{}", v),
            Operand::Register(r) => write!(f, "r{}", r),
            Operand::Invalid(v) => write!(f, "?{}", v),
        }
    }
}
