/*!
## Debug Console Module

Inspect and rewrite a paused machine. Commands only run between
instructions; stepping goes through the same `execute` as a normal run.

*/

mod command;

pub use command::Command;
pub use command::HELP;

use crate::mach::{listing, Error, Event, Input, Output, Runtime, State, MEMORY_SIZE};
use std::collections::VecDeque;
use std::fmt::Write;

type Result<T> = std::result::Result<T, Error>;

/// Most instructions one `step` command will execute.
const MAX_STEPS: usize = MEMORY_SIZE;

/// Only the most recent instructions of a step are listed.
const STEP_ECHO: usize = 16;

/// What the front end should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Stay,
    Resume,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub action: Action,
}

impl Reply {
    fn stay(text: String) -> Reply {
        Reply {
            text,
            action: Action::Stay,
        }
    }
}

/// Remembers the last command so an empty line repeats it.
#[derive(Debug, Default)]
pub struct Console {
    last: Option<Command>,
}

impl Console {
    pub fn new() -> Console {
        Console::default()
    }

    pub fn enter<I, O>(
        &mut self,
        runtime: &mut Runtime,
        line: &str,
        input: &mut I,
        output: &mut O,
    ) -> Result<Reply>
    where
        I: Input + ?Sized,
        O: Output + ?Sized,
    {
        let command = if line.trim().is_empty() {
            match &self.last {
                Some(command) => command.clone(),
                None => return Ok(Reply::stay(String::new())),
            }
        } else {
            Command::parse(line)?
        };
        self.last = Some(command.clone());
        apply(runtime, command, input, output)
    }
}

pub fn apply<I, O>(
    runtime: &mut Runtime,
    command: Command,
    input: &mut I,
    output: &mut O,
) -> Result<Reply>
where
    I: Input + ?Sized,
    O: Output + ?Sized,
{
    let mut s = String::new();
    match command {
        Command::Help => s.push_str(HELP),
        Command::Step(count) => {
            let mut recent = VecDeque::with_capacity(STEP_ECHO);
            let mut skipped = 0;
            let mut outcome = None;
            for _ in 0..count.min(MAX_STEPS) {
                let pc = runtime.pc() as usize;
                if let Some(line) = listing(runtime.memory(), pc, 1).pop() {
                    if recent.len() == STEP_ECHO {
                        recent.pop_front();
                        skipped += 1;
                    }
                    recent.push_back(line);
                }
                match runtime.step(input, output) {
                    Event::Running => {}
                    Event::Input => {
                        outcome = Some("waiting for input".to_string());
                        break;
                    }
                    Event::Halted => {
                        outcome = Some("halted".to_string());
                        break;
                    }
                    Event::Faulted(error) => {
                        outcome = Some(error.to_string());
                        break;
                    }
                }
            }
            if skipped > 0 {
                let _ = writeln!(s, "  ... {} earlier", skipped);
            }
            for (addr, text) in recent {
                let _ = writeln!(s, "{:5}: {}", addr, text);
            }
            if let Some(outcome) = outcome {
                let _ = writeln!(s, "{}", outcome);
            }
            let _ = write!(s, "{}", runtime.snapshot());
        }
        Command::Continue => {
            return Ok(Reply {
                text: String::new(),
                action: Action::Resume,
            })
        }
        Command::Regs => {
            let _ = write!(s, "{}", runtime.registers());
        }
        Command::Stack => {
            let _ = write!(s, "depth {} {:?}", runtime.stack().len(), runtime.stack());
        }
        Command::Pc(None) => {
            let _ = write!(s, "pc={}", runtime.pc());
        }
        Command::Pc(Some(pc)) => {
            runtime.set_pc(pc);
            let _ = write!(s, "pc={}", pc);
        }
        Command::Set(index, value) => {
            runtime.set_register(index, value);
            let _ = write!(s, "{}", runtime.registers());
        }
        Command::Peek(start, count) => {
            for addr in start..start.saturating_add(count) {
                match runtime.peek(addr) {
                    Some(word) => {
                        let _ = writeln!(s, "{:5}: {:5} 0x{:04x}", addr, word, word);
                    }
                    None => break,
                }
            }
        }
        Command::Poke(addr, value) => {
            runtime.poke(addr, value)?;
            let _ = write!(s, "{:5}: {:5} 0x{:04x}", addr, value, value);
        }
        Command::Dis(start, count) => {
            let pc = runtime.pc() as usize;
            let start = start.unwrap_or(pc);
            for (addr, text) in listing(runtime.memory(), start, count) {
                let mark = if addr == pc { '>' } else { ' ' };
                let _ = writeln!(s, "{}{:5}: {}", mark, addr, text);
            }
        }
        Command::State => {
            let state = match runtime.state() {
                State::Running => "running".to_string(),
                State::Halted => "halted".to_string(),
                State::Faulted(error) => format!("faulted: {}", error),
            };
            let _ = write!(s, "{} after {} cycles\n{}", state, runtime.cycles(), runtime.snapshot());
        }
        Command::Quit => {
            return Ok(Reply {
                text: String::new(),
                action: Action::Quit,
            })
        }
    }
    Ok(Reply::stay(s.trim_end().to_string()))
}
