//! Jump, subroutine and software interrupt tests.
//!
//! Tests cover:
//! - JMP absolute and indirect, including the page-wrap bug
//! - JSR/RTS return address convention
//! - BRK/RTI round trip through the IRQ vector

use cpu6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with `program` at 0x8000
fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    CPU::new(FlatMemory::with_program(0x8000, program).unwrap())
}

// ========== JMP Tests ==========

#[test]
fn test_jmp_absolute() {
    let mut cpu = setup_cpu(&[0x4C, 0x34, 0x12]);

    assert_eq!(cpu.step(), 3);
    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn test_jmp_indirect() {
    let mut cpu = setup_cpu(&[0x6C, 0x20, 0x30]);
    cpu.write16(0x3020, 0x5678);

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.pc(), 0x5678);
}

#[test]
fn test_jmp_indirect_page_wrap_bug() {
    // JMP ($12FF) takes its high byte from 0x1200
    let mut cpu = setup_cpu(&[0x6C, 0xFF, 0x12]);
    cpu.write(0x12FF, 0x34);
    cpu.write(0x1200, 0x56);
    cpu.write(0x1300, 0x99);

    cpu.step();
    assert_eq!(cpu.pc(), 0x5634);
}

// ========== Subroutine Tests ==========

#[test]
fn test_jsr_rts_round_trip() {
    // 0x8000: JSR $9000; 0x8003: INX
    let mut memory = FlatMemory::with_program(0x8000, &[0x20, 0x00, 0x90, 0xE8]).unwrap();
    memory.write(0x9000, 0x60); // RTS
    let mut cpu = CPU::new(memory);

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.sp(), 0xFB);
    assert_eq!(cpu.read(0x01FD), 0x80);
    assert_eq!(cpu.read(0x01FC), 0x02);

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.sp(), 0xFD);

    cpu.step();
    assert_eq!(cpu.x(), 0x01);
}

#[test]
fn test_nested_subroutines() {
    // JSR $9000 -> JSR $A000 -> RTS -> RTS
    let mut memory = FlatMemory::with_program(0x8000, &[0x20, 0x00, 0x90]).unwrap();
    memory.load(0x9000, &[0x20, 0x00, 0xA0, 0x60]).unwrap();
    memory.write(0xA000, 0x60);
    let mut cpu = CPU::new(memory);

    cpu.step();
    cpu.step();
    assert_eq!(cpu.pc(), 0xA000);
    assert_eq!(cpu.sp(), 0xF9);

    cpu.step();
    assert_eq!(cpu.pc(), 0x9003);
    cpu.step();
    assert_eq!(cpu.pc(), 0x8003);
    assert_eq!(cpu.sp(), 0xFD);
}

// ========== BRK / RTI Tests ==========

#[test]
fn test_brk_jumps_through_irq_vector() {
    let mut memory = FlatMemory::with_program(0x8000, &[0x00]).unwrap();
    memory.write(0xFFFE, 0x00);
    memory.write(0xFFFF, 0x90);
    let mut cpu = CPU::new(memory);
    cpu.set_status(0x20);

    assert_eq!(cpu.step(), 7);
    assert_eq!(cpu.pc(), 0x9000);
    assert!(cpu.flag_i());
    assert!(!cpu.flag_b());

    // Return address is the byte after the opcode
    assert_eq!(cpu.read(0x01FD), 0x80);
    assert_eq!(cpu.read(0x01FC), 0x01);
    // Pushed status has Break and Unused set
    assert_eq!(cpu.read(0x01FB), 0x30);
    assert_eq!(cpu.sp(), 0xFA);
}

#[test]
fn test_brk_rti_round_trip() {
    let mut memory = FlatMemory::with_program(0x8000, &[0x00, 0xEA]).unwrap();
    memory.write(0xFFFE, 0x00);
    memory.write(0xFFFF, 0x90);
    memory.write(0x9000, 0x40); // RTI
    let mut cpu = CPU::new(memory);
    cpu.set_status(0x21);

    cpu.step();
    assert_eq!(cpu.step(), 6);

    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.status(), 0x21);
    assert_eq!(cpu.sp(), 0xFD);
}

#[test]
fn test_nop() {
    let mut cpu = setup_cpu(&[0xEA]);
    let before = cpu.state();

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.a(), before.a);
    assert_eq!(cpu.flags(), before.status);
}
