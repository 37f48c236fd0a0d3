extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;

mod cli;
mod log;

use ansi_term::Style;
use clap::Parser;
use cli::Cli;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::collections::VecDeque;
use std::io::{Cursor, Read};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use synacor::console::{Action, Console};
use synacor::mach::{self, ByteReader, CharWriter, Event, Runtime, State, Termination};

const CYCLES_PER_BATCH: usize = 5000;

pub fn main() {
    let cli = Cli::parse();
    log::setup_tracing(cli.trace);
    let code = match main_loop(cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", error);
            1
        }
    };
    std::process::exit(code);
}

fn main_loop(cli: Cli) -> std::io::Result<i32> {
    let bytes = std::fs::read(&cli.image)?;
    let script = match &cli.script {
        Some(path) => std::fs::read(path)?,
        None => vec![],
    };
    let mut runtime = match mach::load(&bytes).and_then(|image| Runtime::new(&image)) {
        Ok(runtime) => runtime,
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            return Ok(1);
        }
    };
    if cli.batch {
        batch(&mut runtime, script)
    } else {
        let interrupted = Arc::new(AtomicBool::new(false));
        let int_moved = interrupted.clone();
        ctrlc::set_handler(move || {
            int_moved.store(true, Ordering::SeqCst);
        })
        .expect("Error setting Ctrl-C handler");
        interactive(&mut runtime, script.into(), cli.step, interrupted)
    }
}

fn batch(runtime: &mut Runtime, script: Vec<u8>) -> std::io::Result<i32> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut input = ByteReader::new(Cursor::new(script).chain(stdin.lock()));
    let mut output = CharWriter::new(stdout.lock());
    let termination = runtime.run(&mut input, &mut output);
    output.flush()?;
    if let Some(error) = output.take_error() {
        return Err(error);
    }
    Ok(match termination {
        Termination::Halted => 0,
        Termination::Suspended => {
            eprintln!("input ended at {}", runtime.snapshot());
            1
        }
        Termination::Faulted(error) => {
            eprintln!("{}", error);
            1
        }
    })
}

fn interactive(
    runtime: &mut Runtime,
    mut input: VecDeque<u8>,
    mut paused: bool,
    interrupted: Arc<AtomicBool>,
) -> std::io::Result<i32> {
    let interface = Interface::new("synacor")?;
    interface.set_report_signal(Signal::Interrupt, true);
    let mut output = String::new();
    let mut console = Console::new();

    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            paused = true;
        }
        if paused {
            flush(&interface, &mut output)?;
            interface.set_prompt(&format!("{}> ", runtime.pc()))?;
            match interface.read_line()? {
                ReadResult::Input(line) => {
                    match enter(&interface, &mut console, runtime, &line, &mut input, &mut output)? {
                        Some(Action::Quit) => return Ok(exit_code(runtime)),
                        Some(Action::Resume) if runtime.is_running() => paused = false,
                        Some(Action::Resume) => {
                            interface.write_fmt(format_args!("machine has stopped\n"))?
                        }
                        _ => {}
                    }
                    if !line.trim().is_empty() {
                        interface.add_history_unique(line);
                    }
                }
                ReadResult::Signal(Signal::Interrupt) => {
                    interface.set_buffer("")?;
                }
                ReadResult::Signal(_) | ReadResult::Eof => return Ok(exit_code(runtime)),
            }
            continue;
        }
        match runtime.execute(CYCLES_PER_BATCH, &mut input, &mut output) {
            Event::Running => {}
            Event::Input => {
                flush(&interface, &mut output)?;
                interface.set_prompt("")?;
                match interface.read_line()? {
                    ReadResult::Input(line) => {
                        if let Some(command) = line.strip_prefix('$') {
                            if let Some(Action::Quit) =
                                enter(&interface, &mut console, runtime, command, &mut input, &mut output)?
                            {
                                return Ok(exit_code(runtime));
                            }
                        } else {
                            input.extend(line.bytes());
                            input.push_back(b'\n');
                            interface.add_history_unique(line);
                        }
                    }
                    ReadResult::Signal(Signal::Interrupt) => {
                        interface.set_buffer("")?;
                        interface.lock_reader().cancel_read_line()?;
                        paused = true;
                    }
                    ReadResult::Signal(_) | ReadResult::Eof => return Ok(exit_code(runtime)),
                }
            }
            Event::Halted => {
                flush(&interface, &mut output)?;
                return Ok(0);
            }
            Event::Faulted(error) => {
                flush(&interface, &mut output)?;
                interface.write_fmt(format_args!(
                    "{}\n",
                    Style::new().bold().paint(error.to_string())
                ))?;
                paused = true;
            }
        }
    }
}

fn enter(
    interface: &Interface<DefaultTerminal>,
    console: &mut Console,
    runtime: &mut Runtime,
    line: &str,
    input: &mut VecDeque<u8>,
    output: &mut String,
) -> std::io::Result<Option<Action>> {
    match console.enter(runtime, line, input, output) {
        Ok(reply) => {
            flush(interface, output)?;
            if !reply.text.is_empty() {
                interface.write_fmt(format_args!("{}\n", reply.text))?;
            }
            Ok(Some(reply.action))
        }
        Err(error) => {
            interface.write_fmt(format_args!(
                "{}\n",
                Style::new().bold().paint(error.to_string())
            ))?;
            Ok(None)
        }
    }
}

fn flush(interface: &Interface<DefaultTerminal>, output: &mut String) -> std::io::Result<()> {
    if !output.is_empty() {
        interface.write_fmt(format_args!("{}", output))?;
        output.clear();
    }
    Ok(())
}

fn exit_code(runtime: &Runtime) -> i32 {
    match runtime.state() {
        State::Faulted(_) => 1,
        _ => 0,
    }
}
