use super::*;
use crate::mach::{ErrorCode, Registers};

#[test]
fn test_literal_resolves_to_itself() {
    let regs = Registers::new();
    assert_eq!(Operand::resolve(0, &regs), Ok(0));
    assert_eq!(Operand::resolve(M - 1, &regs), Ok(M - 1));
}

#[test]
fn test_register_bounds() {
    let mut regs = Registers::new();
    regs.set(0, 11);
    regs.set(7, 77);
    assert_eq!(Operand::resolve(M, &regs), Ok(11));
    assert_eq!(Operand::resolve(M + 7, &regs), Ok(77));
    let error = Operand::resolve(M + 8, &regs).unwrap_err();
    assert_eq!(error.code(), ErrorCode::InvalidOperand);
    assert_eq!(error.word(), Some(M + 8));
}

#[test]
fn test_targets_must_be_registers() {
    assert_eq!(Operand::target(M), Ok(0));
    assert_eq!(Operand::target(M + 7), Ok(7));
    assert_eq!(
        Operand::target(5).unwrap_err().code(),
        ErrorCode::InvalidDestination
    );
    assert_eq!(
        Operand::target(M + 8).unwrap_err().code(),
        ErrorCode::InvalidDestination
    );
}

#[test]
fn test_decode_display() {
    assert_eq!(Operand::decode(42).to_string(), "42");
    assert_eq!(Operand::decode(M + 3).to_string(), "r3");
    assert_eq!(Operand::decode(40000).to_string(), "?40000");
    assert_eq!(Operand::decode(M + 3).encode(), M + 3);
}

#[test]
fn test_set_then_read_back() {
    let image = [
        op(Opcode::Set), r(2), 12345,
        op(Opcode::Set), r(3), r(2),
        op(Opcode::Push), r(3),
        op(Opcode::Halt),
    ];
    let (termination, runtime) = run(&image);
    assert_eq!(termination, Termination::Halted);
    assert_eq!(runtime.register(2), 12345);
    assert_eq!(runtime.register(3), 12345);
    assert_eq!(runtime.stack(), &[12345]);
}

#[test]
fn test_invalid_operand_faults_with_pc() {
    let image = [op(Opcode::Noop), op(Opcode::Out), M + 8];
    let (termination, _) = run(&image);
    match termination {
        Termination::Faulted(error) => {
            assert_eq!(error.code(), ErrorCode::InvalidOperand);
            assert_eq!(error.pc(), Some(1));
            assert_eq!(error.to_string(), "INVALID OPERAND 32776 AT 1");
        }
        other => panic!("{:?}", other),
    }
}

#[test]
fn test_literal_destination_faults() {
    let image = [op(Opcode::Set), 7, 1];
    let (termination, _) = run(&image);
    match termination {
        Termination::Faulted(error) => assert_eq!(error.code(), ErrorCode::InvalidDestination),
        other => panic!("{:?}", other),
    }
}
