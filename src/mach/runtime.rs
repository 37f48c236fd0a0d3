use super::{
    Address, Error, Input, Memory, Opcode, Operand, Output, Registers, Stack, Word, MEMORY_SIZE,
};
use crate::error;
use tracing::{debug, trace, warn};

type Result<T> = std::result::Result<T, Error>;

const RUN_BATCH: usize = 10_000;
const NOT_MASK: Word = 0x7fff;

/// ## Execution loop
///
/// Owns the word store, registers, stack, and program counter.
/// State only changes between instructions, so a debugger holding
/// `&mut Runtime` always sees a consistent machine.

pub struct Runtime {
    memory: Memory,
    registers: Registers,
    stack: Stack<Word>,
    pc: Word,
    state: State,
    cycles: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    Running,
    Halted,
    Faulted(Error),
}

/// Result of a bounded `execute`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Cycle budget used up with more to do.
    Running,
    /// IN found no byte. The program counter still points at the IN.
    Input,
    Halted,
    Faulted(Error),
}

/// Result of `run`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    Halted,
    Faulted(Error),
    /// Input ran dry. The machine is intact and `run` may be called again.
    Suspended,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub pc: Word,
    pub registers: Registers,
    pub stack: Vec<Word>,
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "pc={} {} stack={:?}", self.pc, self.registers, self.stack)
    }
}

enum Flow {
    Next,
    Wait,
    Halt,
}

impl Runtime {
    pub fn new(image: &[Word]) -> Result<Runtime> {
        Ok(Runtime {
            memory: Memory::new(image)?,
            registers: Registers::new(),
            stack: Stack::new(),
            pc: 0,
            state: State::Running,
            cycles: 0,
        })
    }

    /// Run until the machine stops or the input runs dry.
    pub fn run<I, O>(&mut self, input: &mut I, output: &mut O) -> Termination
    where
        I: Input + ?Sized,
        O: Output + ?Sized,
    {
        loop {
            match self.execute(RUN_BATCH, input, output) {
                Event::Running => {}
                Event::Input => return Termination::Suspended,
                Event::Halted => return Termination::Halted,
                Event::Faulted(error) => return Termination::Faulted(error),
            }
        }
    }

    pub fn step<I, O>(&mut self, input: &mut I, output: &mut O) -> Event
    where
        I: Input + ?Sized,
        O: Output + ?Sized,
    {
        self.execute(1, input, output)
    }

    /// Execute at most `cycles` instructions.
    pub fn execute<I, O>(&mut self, cycles: usize, input: &mut I, output: &mut O) -> Event
    where
        I: Input + ?Sized,
        O: Output + ?Sized,
    {
        match &self.state {
            State::Running => {}
            State::Halted => return Event::Halted,
            State::Faulted(error) => return Event::Faulted(error.clone()),
        }
        for _ in 0..cycles {
            match self.exec_instruction(input, output) {
                Ok(Flow::Next) => self.cycles += 1,
                Ok(Flow::Wait) => return Event::Input,
                Ok(Flow::Halt) => {
                    self.cycles += 1;
                    debug!(pc = self.pc, cycles = self.cycles, "halted");
                    self.state = State::Halted;
                    return Event::Halted;
                }
                Err(error) => {
                    let error = error.at_pc(self.pc);
                    warn!(%error, cycles = self.cycles, "faulted");
                    self.state = State::Faulted(error.clone());
                    return Event::Faulted(error);
                }
            }
        }
        Event::Running
    }

    fn exec_instruction<I, O>(&mut self, input: &mut I, output: &mut O) -> Result<Flow>
    where
        I: Input + ?Sized,
        O: Output + ?Sized,
    {
        let pc = self.pc;
        let word = self.memory.fetch(pc as Address)?;
        let op = match Opcode::from_word(word) {
            Some(op) => op,
            None => return Err(error!(IllegalOpcode, word)),
        };
        let mut raw: [Word; 3] = [0; 3];
        for (index, slot) in raw.iter_mut().take(op.arity()).enumerate() {
            *slot = self.memory.fetch(pc as Address + 1 + index)?;
        }
        let [a, b, c] = raw;
        trace!(
            pc,
            op = %op,
            a,
            b,
            c,
            registers = %self.registers,
            depth = self.stack.len(),
            "exec"
        );

        let mut jump: Option<Word> = None;
        match op {
            Opcode::Halt => return Ok(Flow::Halt),
            Opcode::Set => {
                let val = self.value(b)?;
                self.store(a, val)?;
            }
            Opcode::Push => {
                let val = self.value(a)?;
                self.stack.push(val);
            }
            Opcode::Pop => {
                let dst = Operand::target(a)?;
                match self.stack.pop() {
                    Some(val) => self.registers.set(dst, val),
                    None => return Err(error!(StackUnderflow)),
                }
            }
            Opcode::Eq => {
                let val = self.value(b)? == self.value(c)?;
                self.store(a, val as Word)?;
            }
            Opcode::Gt => {
                let val = self.value(b)? > self.value(c)?;
                self.store(a, val as Word)?;
            }
            Opcode::Jmp => jump = Some(self.value(a)?),
            Opcode::Jt => {
                if self.value(a)? != 0 {
                    jump = Some(self.value(b)?);
                }
            }
            Opcode::Jf => {
                if self.value(a)? == 0 {
                    jump = Some(self.value(b)?);
                }
            }
            Opcode::Add => {
                let sum = self.value(b)? as u32 + self.value(c)? as u32;
                self.store(a, (sum % MEMORY_SIZE as u32) as Word)?;
            }
            Opcode::Mult => {
                let product = self.value(b)? as u32 * self.value(c)? as u32;
                self.store(a, (product % MEMORY_SIZE as u32) as Word)?;
            }
            Opcode::Mod => {
                let lhs = self.value(b)?;
                let rhs = self.value(c)?;
                if rhs == 0 {
                    return Err(error!(DivisionByZero, c));
                }
                self.store(a, lhs % rhs)?;
            }
            Opcode::And => {
                let val = self.value(b)? & self.value(c)?;
                self.store(a, val)?;
            }
            Opcode::Or => {
                let val = self.value(b)? | self.value(c)?;
                self.store(a, val)?;
            }
            Opcode::Not => {
                let val = !self.value(b)? & NOT_MASK;
                self.store(a, val)?;
            }
            Opcode::Rmem => {
                let addr = self.value(b)?;
                let val = self.memory.read(addr)?;
                self.store(a, val)?;
            }
            Opcode::Wmem => {
                let addr = self.value(a)?;
                let val = self.value(b)?;
                self.memory.write(addr, val)?;
            }
            Opcode::Call => {
                let target = self.value(a)?;
                let ret = pc + op.width() as Word;
                debug!(from = pc, to = target, depth = self.stack.len(), "call");
                self.stack.push(ret);
                jump = Some(target);
            }
            Opcode::Ret => match self.stack.pop() {
                Some(addr) => {
                    debug!(from = pc, to = addr, depth = self.stack.len(), "return");
                    jump = Some(addr);
                }
                None => return Ok(Flow::Halt),
            },
            Opcode::Out => {
                let val = self.value(a)?;
                output.emit(val);
            }
            Opcode::In => {
                let dst = Operand::target(a)?;
                match input.next_byte() {
                    Some(byte) => self.registers.set(dst, byte as Word),
                    None => return Ok(Flow::Wait),
                }
            }
            Opcode::Noop => {}
        }

        self.pc = match jump {
            Some(addr) => addr,
            None => pc + op.width() as Word,
        };
        Ok(Flow::Next)
    }

    fn value(&self, raw: Word) -> Result<Word> {
        Operand::resolve(raw, &self.registers)
    }

    fn store(&mut self, raw: Word, val: Word) -> Result<()> {
        let dst = Operand::target(raw)?;
        self.registers.set(dst, val);
        Ok(())
    }

    // *** Accessors for the debug console. Never called mid-instruction.

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    /// Instructions executed so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn pc(&self) -> Word {
        self.pc
    }

    pub fn set_pc(&mut self, pc: Word) {
        self.pc = pc;
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn register(&self, index: usize) -> Word {
        self.registers.get(index)
    }

    pub fn set_register(&mut self, index: usize, value: Word) {
        self.registers.set(index, value);
    }

    /// Bottom first.
    pub fn stack(&self) -> &[Word] {
        self.stack.as_slice()
    }

    pub fn push(&mut self, value: Word) {
        self.stack.push(value);
    }

    pub fn pop(&mut self) -> Option<Word> {
        self.stack.pop()
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn peek(&self, addr: Address) -> Option<Word> {
        self.memory.get(addr)
    }

    pub fn poke(&mut self, addr: Word, value: Word) -> Result<()> {
        self.memory.write(addr, value)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pc: self.pc,
            registers: self.registers.clone(),
            stack: self.stack.as_slice().to_vec(),
        }
    }
}
