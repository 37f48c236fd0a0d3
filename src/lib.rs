//! # Synacor VM
//!
//! A virtual machine for programs made of 16-bit words.
//!
//! The machine has 32768 words of memory, eight registers, and an
//! unbounded stack. An instruction is an opcode word followed by up to
//! three operands. Operand words below 32768 are literals, the next
//! eight name registers `r0` to `r7`, and anything above is invalid.
//!
//! ```
//! use synacor::mach::{Opcode, Operand, Runtime, Termination, Word};
//! use std::collections::VecDeque;
//!
//! let r0 = Operand::register(0);
//! let image: Vec<Word> = vec![
//!     Opcode::Set as Word, r0, 3,
//!     Opcode::Add as Word, r0, r0, 4,
//!     Opcode::Out as Word, r0,
//!     Opcode::Halt as Word,
//! ];
//! let mut runtime = Runtime::new(&image).unwrap();
//! let mut output: Vec<Word> = vec![];
//! let done = runtime.run(&mut VecDeque::<u8>::new(), &mut output);
//! assert_eq!(done, Termination::Halted);
//! assert_eq!(output, vec![7]);
//! ```
//!
//! Binary images are decoded with [`mach::load`], two little-endian
//! bytes per word. The [`console`] module is the debugger used by the
//! `synacor` executable: press Ctrl-C, or type a line starting with `$`
//! when the program asks for input.

pub mod console;
pub mod mach;
