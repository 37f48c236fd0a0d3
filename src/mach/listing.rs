use super::{Address, Memory, Opcode, Operand, Word};

/// ## Disassembled instruction
///
/// A view over the words at an address. Decoding never faults;
/// bad operands display as `?n`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: Opcode,
    pub operands: Vec<Operand>,
}

impl Instruction {
    /// `None` for an unknown opcode or an instruction running off
    /// the end of memory.
    pub fn decode(memory: &Memory, addr: Address) -> Option<Instruction> {
        let opcode = Opcode::from_word(memory.get(addr)?)?;
        let mut operands = Vec::with_capacity(opcode.arity());
        for index in 0..opcode.arity() {
            operands.push(Operand::decode(memory.get(addr + 1 + index)?));
        }
        Some(Instruction { opcode, operands })
    }

    pub fn width(&self) -> usize {
        self.opcode.width()
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.opcode)?;
        for operand in &self.operands {
            match (self.opcode, operand) {
                (Opcode::Out, Operand::Literal(v)) if is_printable(*v) => {
                    write!(f, " {:?}", char::from(*v as u8))?
                }
                _ => write!(f, " {}", operand)?,
            }
        }
        Ok(())
    }
}

fn is_printable(v: Word) -> bool {
    v < 0x80 && ((v as u8).is_ascii_graphic() || v == b' ' as Word)
}

/// Disassemble `count` instructions starting at `start`.
/// Words that are not instructions list as `DATA n`.
pub fn listing(memory: &Memory, start: Address, count: usize) -> Vec<(Address, String)> {
    let mut lines = Vec::new();
    let mut addr = start;
    while lines.len() < count {
        match Instruction::decode(memory, addr) {
            Some(ins) => {
                lines.push((addr, ins.to_string()));
                addr += ins.width();
            }
            None => match memory.get(addr) {
                Some(word) => {
                    lines.push((addr, format!("DATA {}", word)));
                    addr += 1;
                }
                None => break,
            },
        }
    }
    lines
}
