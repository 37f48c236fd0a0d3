/*!
## Rust Machine Module

This Rust module is the virtual machine: a 16-bit word store,
eight registers, an unbounded stack, and the 22 opcode dispatcher.

*/

/// Every memory cell, register, and stack entry is one word.
pub type Word = u16;
/// Index into the word store.
pub type Address = usize;

/// Number of addressable words. Also the first register reference.
pub const MEMORY_SIZE: usize = 32768;
/// Number of registers in the register file.
pub const REGISTER_COUNT: usize = 8;

mod error;
mod image;
mod io;
mod listing;
mod memory;
mod opcode;
mod operand;
mod registers;
mod runtime;
mod stack;

#[cfg(test)]
mod tests;

pub use error::Error;
pub use error::ErrorCode;
pub use image::load;
pub use io::ByteReader;
pub use io::CharWriter;
pub use io::Input;
pub use io::Output;
pub use listing::listing;
pub use listing::Instruction;
pub use memory::Memory;
pub use opcode::Opcode;
pub use operand::Operand;
pub use registers::Registers;
pub use runtime::Event;
pub use runtime::Runtime;
pub use runtime::Snapshot;
pub use runtime::State;
pub use runtime::Termination;
pub use stack::Stack;
