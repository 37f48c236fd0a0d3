use crate::mach::{Event, Opcode, Operand, Runtime, Termination, Word, MEMORY_SIZE};
use std::collections::VecDeque;

mod operand_test;

const M: Word = MEMORY_SIZE as Word;

fn r(index: usize) -> Word {
    Operand::register(index)
}

fn op(opcode: Opcode) -> Word {
    opcode as Word
}

fn run(image: &[Word]) -> (Termination, Runtime) {
    let (termination, runtime, _) = run_with_input(image, "");
    (termination, runtime)
}

fn run_with_input(image: &[Word], input: &str) -> (Termination, Runtime, String) {
    let mut runtime = Runtime::new(image).unwrap();
    let mut input: VecDeque<u8> = input.bytes().collect();
    let mut output = String::new();
    let termination = runtime.run(&mut input, &mut output);
    (termination, runtime, output)
}

fn step(runtime: &mut Runtime) -> Event {
    runtime.step(&mut VecDeque::<u8>::new(), &mut String::new())
}
