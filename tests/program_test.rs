mod common;
use common::*;
use synacor::mach::{self, Opcode, Runtime, State, Word};

fn image(code: &[(usize, Vec<Word>)]) -> Vec<Word> {
    let len = code.iter().map(|(addr, words)| addr + words.len()).max().unwrap_or(0);
    let mut image = vec![0; len];
    for (addr, words) in code {
        image[*addr..*addr + words.len()].copy_from_slice(words);
    }
    image
}

fn string(s: &str) -> Vec<Word> {
    let mut words = vec![s.len() as Word];
    words.extend(s.bytes().map(|b| b as Word));
    words
}

#[rustfmt::skip]
fn print_strings() -> Vec<Word> {
    use Opcode::*;
    image(&[
        (0, vec![Set as Word, r(0), 100, Call as Word, 20]),
        (5, vec![Set as Word, r(0), 110, Call as Word, 20]),
        (10, vec![Halt as Word]),
        // print the length-prefixed string at r0
        (20, vec![Rmem as Word, r(1), r(0)]),
        (23, vec![Add as Word, r(2), r(0), r(1)]),
        (27, vec![Eq as Word, r(3), r(0), r(2)]),
        (31, vec![Jt as Word, r(3), 45]),
        (34, vec![Add as Word, r(0), r(0), 1]),
        (38, vec![Rmem as Word, r(4), r(0)]),
        (41, vec![Out as Word, r(4)]),
        (43, vec![Jmp as Word, 27]),
        (45, vec![Ret as Word]),
        (100, string("hello")),
        (110, string(" world\n")),
    ])
}

#[rustfmt::skip]
fn echo_line() -> Vec<Word> {
    use Opcode::*;
    image(&[
        (0, vec![In as Word, r(0)]),
        (2, vec![Out as Word, r(0)]),
        (4, vec![Eq as Word, r(1), r(0), '\n' as Word]),
        (8, vec![Jf as Word, r(1), 0]),
        (11, vec![Halt as Word]),
    ])
}

#[test]
fn test_subroutine_prints_strings() {
    let words = mach::load(&bytes(&print_strings())).unwrap();
    let mut r = Runtime::new(&words).unwrap();
    assert_eq!(exec(&mut r, ""), "hello world\n");
    assert_eq!(r.state(), &State::Halted);
    assert!(r.stack().is_empty());
}

#[test]
fn test_echo_suspends_for_input() {
    let mut r = Runtime::new(&echo_line()).unwrap();
    assert_eq!(exec(&mut r, "hi"), "hi? ");
    assert!(r.is_running());
    assert_eq!(exec(&mut r, "!\n"), "!\n");
    assert_eq!(r.state(), &State::Halted);
}

#[test]
fn test_runaway_loop_is_bounded() {
    let mut r = Runtime::new(&[Opcode::Jmp as Word, 0]).unwrap();
    assert_eq!(
        exec_n(&mut r, "", 1000),
        "\n100000 Execution cycles exceeded.\n"
    );
    assert_eq!(r.cycles(), 101_000);
}

#[test]
fn test_fault_is_reported_not_panicked() {
    let mut r = Runtime::new(&[Opcode::Out as Word, 'x' as Word, 99]).unwrap();
    assert_eq!(exec(&mut r, ""), "xILLEGAL OPCODE 99 AT 2\n");
    assert!(!r.is_running());
    assert_eq!(exec(&mut r, ""), "ILLEGAL OPCODE 99 AT 2\n");
}
