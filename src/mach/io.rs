use super::Word;
use std::collections::VecDeque;
use std::io::{Read, Write};

/// Source of bytes for the IN instruction.
pub trait Input {
    /// `None` when no byte is available right now. The machine
    /// suspends on the IN and retries it when resumed.
    fn next_byte(&mut self) -> Option<u8>;
}

/// Sink for the OUT instruction. Called once per OUT.
pub trait Output {
    fn emit(&mut self, code_point: Word);
}

impl Input for VecDeque<u8> {
    fn next_byte(&mut self) -> Option<u8> {
        self.pop_front()
    }
}

impl Output for String {
    fn emit(&mut self, code_point: Word) {
        self.push(std::char::from_u32(code_point as u32).unwrap_or(std::char::REPLACEMENT_CHARACTER));
    }
}

impl Output for Vec<Word> {
    fn emit(&mut self, code_point: Word) {
        self.push(code_point);
    }
}

/// Blocking byte input. End of stream or a read error ends the input.
pub struct ByteReader<R> {
    reader: R,
}

impl<R: Read> ByteReader<R> {
    pub fn new(reader: R) -> ByteReader<R> {
        ByteReader { reader }
    }
}

impl<R: Read> Input for ByteReader<R> {
    fn next_byte(&mut self) -> Option<u8> {
        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return None,
                Ok(_) => return Some(buf[0]),
                Err(error) if error.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(error) => {
                    tracing::warn!(%error, "input failed");
                    return None;
                }
            }
        }
    }
}

/// Writes each code point as UTF-8. The first write error is kept
/// and later output is dropped.
pub struct CharWriter<W: Write> {
    writer: W,
    error: Option<std::io::Error>,
}

impl<W: Write> CharWriter<W> {
    pub fn new(writer: W) -> CharWriter<W> {
        CharWriter {
            writer,
            error: None,
        }
    }

    pub fn take_error(&mut self) -> Option<std::io::Error> {
        self.error.take()
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Output for CharWriter<W> {
    fn emit(&mut self, code_point: Word) {
        if self.error.is_some() {
            return;
        }
        let ch = std::char::from_u32(code_point as u32).unwrap_or(std::char::REPLACEMENT_CHARACTER);
        let mut buf = [0u8; 4];
        let result = self.writer.write_all(ch.encode_utf8(&mut buf).as_bytes());
        let result = match result {
            Ok(()) if ch == '\n' => self.writer.flush(),
            other => other,
        };
        if let Err(error) = result {
            self.error = Some(error);
        }
    }
}
