use super::Word;

/// ## Virtual machine instruction set
///
/// Each instruction is an opcode word followed by a fixed number of
/// operand words. Operands are literals or register references.
///
/// For example: `ADD r0 r0 4` is stored as `[9, 32768, 32768, 4]`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum Opcode {
    /// Stop execution.
    Halt = 0,
    /// `SET a b` stores `b` into register `a`.
    Set = 1,
    Push = 2,
    /// Empty stack is a fault.
    Pop = 3,

    // *** Comparison
    Eq = 4,
    Gt = 5,

    // *** Branch control
    Jmp = 6,
    /// Branch if nonzero.
    Jt = 7,
    /// Branch if zero.
    Jf = 8,

    // *** Arithmetic, all results reduced modulo 32768
    Add = 9,
    Mult = 10,
    Mod = 11,
    And = 12,
    Or = 13,
    /// 15-bit complement.
    Not = 14,

    // *** Memory
    Rmem = 15,
    Wmem = 16,

    // *** Subroutines
    /// Push the address of the next instruction then jump.
    Call = 17,
    /// Pop and jump. Empty stack halts.
    Ret = 18,

    // *** Character I/O
    Out = 19,
    In = 20,

    Noop = 21,
}

impl Opcode {
    pub fn from_word(word: Word) -> Option<Opcode> {
        use Opcode::*;
        Some(match word {
            0 => Halt,
            1 => Set,
            2 => Push,
            3 => Pop,
            4 => Eq,
            5 => Gt,
            6 => Jmp,
            7 => Jt,
            8 => Jf,
            9 => Add,
            10 => Mult,
            11 => Mod,
            12 => And,
            13 => Or,
            14 => Not,
            15 => Rmem,
            16 => Wmem,
            17 => Call,
            18 => Ret,
            19 => Out,
            20 => In,
            21 => Noop,
            _ => return None,
        })
    }

    /// Number of operand words following the opcode.
    pub fn arity(self) -> usize {
        use Opcode::*;
        match self {
            Halt | Ret | Noop => 0,
            Push | Pop | Jmp | Call | Out | In => 1,
            Set | Jt | Jf | Not | Rmem | Wmem => 2,
            Eq | Gt | Add | Mult | Mod | And | Or => 3,
        }
    }

    /// Words occupied by the whole instruction.
    pub fn width(self) -> usize {
        1 + self.arity()
    }
}

impl From<Opcode> for Word {
    fn from(op: Opcode) -> Word {
        op as Word
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Halt => write!(f, "HALT"),
            Set => write!(f, "SET"),
            Push => write!(f, "PUSH"),
            Pop => write!(f, "POP"),
            Eq => write!(f, "EQ"),
            Gt => write!(f, "GT"),
            Jmp => write!(f, "JMP"),
            Jt => write!(f, "JT"),
            Jf => write!(f, "JF"),
            Add => write!(f, "ADD"),
            Mult => write!(f, "MULT"),
            Mod => write!(f, "MOD"),
            And => write!(f, "AND"),
            Or => write!(f, "OR"),
            Not => write!(f, "NOT"),
            Rmem => write!(f, "RMEM"),
            Wmem => write!(f, "WMEM"),
            Call => write!(f, "CALL"),
            Ret => write!(f, "RET"),
            Out => write!(f, "OUT"),
            In => write!(f, "IN"),
            Noop => write!(f, "NOOP"),
        }
    }
}
