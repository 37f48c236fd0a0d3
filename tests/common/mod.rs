use std::collections::VecDeque;
use synacor::mach::{Event, Operand, Runtime, Word};

pub fn r(index: usize) -> Word {
    Operand::register(index)
}

pub fn bytes(words: &[Word]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes().to_vec()).collect()
}

pub fn exec(runtime: &mut Runtime, input: &str) -> String {
    exec_n(runtime, input, 5000)
}

/// Run batches of `cycles` until the machine stops or wants input.
pub fn exec_n(runtime: &mut Runtime, input: &str, cycles: usize) -> String {
    let mut input: VecDeque<u8> = input.bytes().collect();
    let mut s = String::new();
    let mut batches = 0;
    loop {
        match runtime.execute(cycles, &mut input, &mut s) {
            Event::Running => {
                batches += 1;
                if batches > 100 {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles * 100));
                    break;
                }
            }
            Event::Input => {
                s.push_str("? ");
                break;
            }
            Event::Halted => break,
            Event::Faulted(error) => {
                s.push_str(&format!("{}\n", error));
                break;
            }
        }
    }
    s
}
