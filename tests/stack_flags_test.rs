//! Stack and flag instruction tests.
//!
//! Tests cover:
//! - PHA/PLA/PHP/PLP through the opcode table
//! - Break and Unused handling in pushed and pulled status bytes
//! - Stack pointer wraparound within page 1
//! - CLC/SEC/CLI/SEI/CLD/SED/CLV

use cpu6502::{FlatMemory, Status, CPU};

/// Helper function to create a CPU with `program` at 0x8000
fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    CPU::new(FlatMemory::with_program(0x8000, program).unwrap())
}

// ========== Stack Tests ==========

#[test]
fn test_pha_pla() {
    // PHA; LDA #$00; PLA
    let mut cpu = setup_cpu(&[0x48, 0xA9, 0x00, 0x68]);
    cpu.set_a(0x8C);

    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.sp(), 0xFC);
    assert_eq!(cpu.read(0x01FD), 0x8C);

    cpu.step();
    assert!(cpu.flag_z());

    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.a(), 0x8C);
    assert_eq!(cpu.sp(), 0xFD);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_php_sets_break_in_pushed_copy() {
    let mut cpu = setup_cpu(&[0x08]);
    cpu.set_status(0x01);

    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.read(0x01FD), 0x31);
    assert_eq!(cpu.status(), 0x01);
}

#[test]
fn test_plp_drops_break_sets_unused() {
    let mut cpu = setup_cpu(&[0x28]);
    cpu.push(0xDF);

    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.status(), 0xEF);
    assert!(!cpu.flag_b());
}

#[test]
fn test_stack_pointer_wraps() {
    // PHA with SP = 0 writes 0x0100 and wraps to 0xFF
    let mut cpu = setup_cpu(&[0x48, 0x68]);
    cpu.set_sp(0x00);
    cpu.set_a(0x5A);

    cpu.step();
    assert_eq!(cpu.read(0x0100), 0x5A);
    assert_eq!(cpu.sp(), 0xFF);

    cpu.set_a(0x00);
    cpu.step();
    assert_eq!(cpu.a(), 0x5A);
    assert_eq!(cpu.sp(), 0x00);
}

// ========== Flag Tests ==========

#[test]
fn test_set_and_clear_instructions() {
    // SEC; SEI; SED; CLC; CLI; CLD
    let mut cpu = setup_cpu(&[0x38, 0x78, 0xF8, 0x18, 0x58, 0xD8]);
    cpu.set_status(0x20);

    cpu.step();
    cpu.step();
    cpu.step();
    assert_eq!(cpu.status(), 0x2D);

    cpu.step();
    cpu.step();
    cpu.step();
    assert_eq!(cpu.status(), 0x20);
    assert_eq!(cpu.cycles(), 12);
}

#[test]
fn test_clv() {
    let mut cpu = setup_cpu(&[0xB8]);
    cpu.set_flag(Status::OVERFLOW, true);

    assert_eq!(cpu.step(), 2);
    assert!(!cpu.flag_v());
}
