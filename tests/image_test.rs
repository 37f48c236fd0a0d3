mod common;
use common::*;
use std::io::Cursor;
use synacor::mach::{self, ByteReader, CharWriter, ErrorCode, Runtime, Termination, MEMORY_SIZE};

#[test]
fn test_words_are_little_endian() {
    assert_eq!(mach::load(&[0x09, 0x00, 0x00, 0x80, 0x01, 0x80]).unwrap(), vec![9, 32768, 32769]);
    assert!(mach::load(&[]).unwrap().is_empty());
}

#[test]
fn test_odd_trailing_byte_is_dropped() {
    assert_eq!(mach::load(&[0x13, 0x00, 0x61]).unwrap(), vec![19]);
}

#[test]
fn test_image_too_large() {
    let full = vec![0u8; MEMORY_SIZE * 2];
    assert_eq!(mach::load(&full).unwrap().len(), MEMORY_SIZE);
    let over = vec![0u8; MEMORY_SIZE * 2 + 2];
    assert_eq!(mach::load(&over).unwrap_err().code(), ErrorCode::ImageTooLarge);
    let words = vec![0; MEMORY_SIZE + 1];
    assert_eq!(Runtime::new(&words).err().map(|e| e.code()), Some(ErrorCode::ImageTooLarge));
}

#[test]
fn test_memory_beyond_image_is_zero() {
    let r = Runtime::new(&[21, 21]).unwrap();
    assert_eq!(r.peek(1), Some(21));
    assert_eq!(r.peek(2), Some(0));
    assert_eq!(r.peek(MEMORY_SIZE - 1), Some(0));
    assert_eq!(r.peek(MEMORY_SIZE), None);
}

#[test]
fn test_stream_io() {
    // IN r0; OUT r0; JMP 0
    let words = mach::load(&bytes(&[20, r(0), 19, r(0), 6, 0])).unwrap();
    let mut runtime = Runtime::new(&words).unwrap();
    let mut input = ByteReader::new(Cursor::new("héllo\n".as_bytes().to_vec()));
    let mut output = CharWriter::new(Vec::new());
    assert_eq!(runtime.run(&mut input, &mut output), Termination::Suspended);
    assert!(output.take_error().is_none());
    // bytes pass through one at a time, so non-ASCII input is not re-encoded
    let written = output.into_inner();
    assert_eq!(written.len(), "héllo\n".len() + 2);
    assert!(written.starts_with(b"h"));
    assert!(written.ends_with(b"llo\n"));
}
