//! # Synacor VM
//!
//! Runs a binary image in the 16-bit word virtual machine.
//!

mod term;

fn main() {
    term::main();
}
