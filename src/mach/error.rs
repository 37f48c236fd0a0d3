use super::Word;

#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    pc: Option<Word>,
    word: Option<Word>,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::mach::Error::new($crate::mach::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::mach::Error::new($crate::mach::ErrorCode::$err).message($msg)
    };
    ($err:ident, $word:expr) => {
        $crate::mach::Error::new($crate::mach::ErrorCode::$err).with_word($word)
    };
    ($err:ident, $word:expr; $msg:expr) => {
        $crate::mach::Error::new($crate::mach::ErrorCode::$err)
            .with_word($word)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            pc: None,
            word: None,
            message: "",
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Address of the instruction that raised the fault, if any.
    pub fn pc(&self) -> Option<Word> {
        self.pc
    }

    /// The offending word: operand, opcode, or address.
    pub fn word(&self) -> Option<Word> {
        self.word
    }

    pub fn at_pc(&self, pc: Word) -> Error {
        debug_assert!(self.pc.is_none());
        Error {
            pc: Some(pc),
            ..self.clone()
        }
    }

    pub fn with_word(&self, word: Word) -> Error {
        debug_assert!(self.word.is_none());
        Error {
            word: Some(word),
            ..self.clone()
        }
    }

    pub fn message(&self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            message,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidOperand = 1,
    InvalidDestination = 2,
    StackUnderflow = 3,
    IllegalOpcode = 4,
    OutOfRangeFetch = 5,
    InvalidAddress = 6,
    DivisionByZero = 7,
    ImageTooLarge = 20,
    BadCommand = 30,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let s = match self {
            InvalidOperand => "INVALID OPERAND",
            InvalidDestination => "INVALID DESTINATION",
            StackUnderflow => "STACK UNDERFLOW",
            IllegalOpcode => "ILLEGAL OPCODE",
            OutOfRangeFetch => "OUT OF RANGE FETCH",
            InvalidAddress => "INVALID ADDRESS",
            DivisionByZero => "DIVISION BY ZERO",
            ImageTooLarge => "IMAGE TOO LARGE",
            BadCommand => "BAD COMMAND",
        };
        write!(f, "{}", s)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code)?;
        if let Some(word) = self.word {
            write!(f, " {}", word)?;
        }
        if let Some(pc) = self.pc {
            write!(f, " AT {}", pc)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
