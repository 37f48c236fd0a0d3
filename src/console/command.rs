use crate::error;
use crate::mach::{Address, Error, Word, MEMORY_SIZE, REGISTER_COUNT};

type Result<T> = std::result::Result<T, Error>;

const DEFAULT_LIST_LEN: usize = 10;
const DEFAULT_PEEK_LEN: usize = 8;

/// ## Debug console commands
///
/// One command per line. Numbers are decimal or `0x` hex.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Step(usize),
    Continue,
    Regs,
    Stack,
    Pc(Option<Word>),
    Set(usize, Word),
    Peek(Address, usize),
    Poke(Word, Word),
    Dis(Option<Address>, usize),
    State,
    Quit,
}

pub const HELP: &str = "\
help                  this text
step [n]              execute n instructions (default 1)
continue              resume the program
regs                  show registers
stack                 show the stack, bottom first
pc [addr]             show or set the program counter
set rN value          write a register
peek addr [count]     show memory words
poke addr value       write a memory word
dis [addr] [count]    disassemble (default at pc)
state                 machine state and cycle count
quit                  leave the machine";

impl Command {
    pub fn parse(line: &str) -> Result<Command> {
        let mut words = line.split_whitespace();
        let name = match words.next() {
            Some(name) => name.to_ascii_lowercase(),
            None => return Err(error!(BadCommand; "EMPTY LINE")),
        };
        let args: Vec<&str> = words.collect();
        let command = match name.as_str() {
            "help" | "h" | "?" => {
                no_args(&args)?;
                Command::Help
            }
            "step" | "s" => match args.as_slice() {
                [] => Command::Step(1),
                [n] => Command::Step(count(n)?),
                _ => return Err(too_many()),
            },
            "continue" | "c" => {
                no_args(&args)?;
                Command::Continue
            }
            "regs" | "r" => {
                no_args(&args)?;
                Command::Regs
            }
            "stack" => {
                no_args(&args)?;
                Command::Stack
            }
            "pc" => match args.as_slice() {
                [] => Command::Pc(None),
                [addr] => Command::Pc(Some(word(addr)?)),
                _ => return Err(too_many()),
            },
            "set" => match args.as_slice() {
                [reg, value] => Command::Set(register(reg)?, word(value)?),
                _ => return Err(error!(BadCommand; "USAGE: set rN value")),
            },
            "peek" | "p" => match args.as_slice() {
                [addr] => Command::Peek(address(addr)?, DEFAULT_PEEK_LEN),
                [addr, n] => Command::Peek(address(addr)?, count(n)?),
                _ => return Err(error!(BadCommand; "USAGE: peek addr [count]")),
            },
            "poke" => match args.as_slice() {
                [addr, value] => Command::Poke(address(addr)? as Word, word(value)?),
                _ => return Err(error!(BadCommand; "USAGE: poke addr value")),
            },
            "dis" | "d" => match args.as_slice() {
                [] => Command::Dis(None, DEFAULT_LIST_LEN),
                [addr] => Command::Dis(Some(address(addr)?), DEFAULT_LIST_LEN),
                [addr, n] => Command::Dis(Some(address(addr)?), count(n)?),
                _ => return Err(too_many()),
            },
            "state" => {
                no_args(&args)?;
                Command::State
            }
            "quit" | "q" => {
                no_args(&args)?;
                Command::Quit
            }
            _ => return Err(error!(BadCommand; "UNKNOWN COMMAND, TRY help")),
        };
        Ok(command)
    }
}

fn no_args(args: &[&str]) -> Result<()> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(too_many())
    }
}

fn too_many() -> Error {
    error!(BadCommand; "TOO MANY ARGUMENTS")
}

fn number(s: &str) -> Result<u32> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse::<u32>(),
    };
    parsed.map_err(|_| error!(BadCommand; "BAD NUMBER"))
}

/// Repeat counts never need to exceed the size of memory.
fn count(s: &str) -> Result<usize> {
    Ok((number(s)? as usize).min(MEMORY_SIZE))
}

fn word(s: &str) -> Result<Word> {
    let n = number(s)?;
    if n > Word::MAX as u32 {
        return Err(error!(BadCommand; "NUMBER DOES NOT FIT IN A WORD"));
    }
    Ok(n as Word)
}

fn address(s: &str) -> Result<Address> {
    let n = number(s)? as Address;
    if n >= MEMORY_SIZE {
        return Err(error!(BadCommand; "ADDRESS OUT OF RANGE"));
    }
    Ok(n)
}

fn register(s: &str) -> Result<usize> {
    let index = s
        .strip_prefix('r')
        .or_else(|| s.strip_prefix('R'))
        .and_then(|n| n.parse::<usize>().ok());
    match index {
        Some(index) if index < REGISTER_COUNT => Ok(index),
        _ => Err(error!(BadCommand; "REGISTERS ARE r0 TO r7")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mach::ErrorCode;

    #[test]
    fn test_parse_defaults() {
        assert_eq!(Command::parse("step").unwrap(), Command::Step(1));
        assert_eq!(Command::parse("  s 5 ").unwrap(), Command::Step(5));
        assert_eq!(Command::parse("dis").unwrap(), Command::Dis(None, 10));
        assert_eq!(Command::parse("peek 0x10").unwrap(), Command::Peek(16, 8));
        assert_eq!(Command::parse("PC").unwrap(), Command::Pc(None));
    }

    #[test]
    fn test_parse_clamps_counts() {
        assert_eq!(Command::parse("step 4294967295").unwrap(), Command::Step(MEMORY_SIZE));
        assert_eq!(
            Command::parse("dis 0 4294967295").unwrap(),
            Command::Dis(Some(0), MEMORY_SIZE)
        );
        assert_eq!(Command::parse("peek 5 99999").unwrap(), Command::Peek(5, MEMORY_SIZE));
    }

    #[test]
    fn test_parse_set_register() {
        assert_eq!(Command::parse("set r7 25734").unwrap(), Command::Set(7, 25734));
        assert_eq!(Command::parse("set R0 0x7fff").unwrap(), Command::Set(0, 32767));
        let error = Command::parse("set r8 1").unwrap_err();
        assert_eq!(error.code(), ErrorCode::BadCommand);
        assert_eq!(error.to_string(), "BAD COMMAND; REGISTERS ARE r0 TO r7");
    }

    #[test]
    fn test_parse_rejects() {
        assert!(Command::parse("").is_err());
        assert!(Command::parse("fly").is_err());
        assert!(Command::parse("regs now").is_err());
        assert!(Command::parse("peek 32768").is_err());
        assert!(Command::parse("pc 65536").is_err());
        assert!(Command::parse("poke 1").is_err());
    }
}
