//! CPU initialization and reset tests.

use cpu6502::{CpuState, FlatMemory, MemoryBus, Status, CPU, RESET_SP};

#[test]
fn test_cpu_initialization_reads_reset_vector() {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x34);
    memory.write(0xFFFD, 0x12);

    let cpu = CPU::new(memory);

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.reset_vector(), 0x1234);
}

#[test]
fn test_power_on_registers() {
    let memory = FlatMemory::with_program(0x8000, &[]).unwrap();
    let cpu = CPU::new(memory);

    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.y(), 0x00);
    assert_eq!(cpu.sp(), RESET_SP);
    assert_eq!(cpu.flags(), Status::UNUSED | Status::INTERRUPT_DISABLE);
    assert_eq!(cpu.cycles(), 0);
    assert_eq!(cpu.remaining_cycles(), 0);
}

#[test]
fn test_zeroed_memory_resets_to_zero_page() {
    let cpu = CPU::new(FlatMemory::new());
    assert_eq!(cpu.pc(), 0x0000);
}

#[test]
fn test_reset_restores_power_on_state() {
    // LDA #$FF; LDX #$FF; SED
    let memory = FlatMemory::with_program(0x8000, &[0xA9, 0xFF, 0xA2, 0xFF, 0xF8]).unwrap();
    let mut cpu = CPU::new(memory);
    cpu.step();
    cpu.step();
    cpu.step();
    cpu.push(0x42);
    assert!(cpu.flag_d());

    cpu.reset();

    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.x(), 0x00);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.status(), 0x24);
    assert!(!cpu.flag_d());
}

#[test]
fn test_reset_abandons_pending_cycles() {
    // LDA $1234 (4 cycles)
    let memory = FlatMemory::with_program(0x8000, &[0xAD, 0x34, 0x12]).unwrap();
    let mut cpu = CPU::new(memory);

    cpu.clock();
    assert_eq!(cpu.remaining_cycles(), 3);

    cpu.reset();
    assert_eq!(cpu.remaining_cycles(), 0);
    assert_eq!(cpu.cycles(), 1);
}

#[test]
fn test_reset_rereads_vector() {
    let memory = FlatMemory::with_program(0x8000, &[]).unwrap();
    let mut cpu = CPU::new(memory);

    cpu.write16(0xFFFC, 0xC000);
    cpu.reset();
    assert_eq!(cpu.pc(), 0xC000);
}

#[test]
fn test_borrowed_bus_stays_with_caller() {
    let mut memory = FlatMemory::with_program(0x8000, &[0xA9, 0x99, 0x8D, 0x00, 0x02]).unwrap();
    {
        let mut cpu = CPU::new(&mut memory);
        cpu.step();
        cpu.step();
    }
    assert_eq!(memory.read(0x0200), 0x99);
}

#[test]
fn test_into_bus_returns_memory() {
    let memory = FlatMemory::with_program(0x8000, &[0xA9, 0x11, 0x85, 0x20]).unwrap();
    let mut cpu = CPU::new(memory);
    cpu.step();
    cpu.step();

    let memory = cpu.into_bus();
    assert_eq!(memory.read(0x0020), 0x11);
}

#[test]
fn test_state_snapshot_round_trip() {
    let memory = FlatMemory::with_program(0x8000, &[0xE8, 0xE8]).unwrap();
    let mut cpu = CPU::new(memory);

    let state = CpuState {
        a: 0x12,
        x: 0x34,
        y: 0x56,
        sp: 0x80,
        pc: 0x8001,
        status: Status::CARRY | Status::UNUSED,
        remaining_cycles: 0,
        cycles: 100,
    };
    cpu.restore(&state);
    assert_eq!(cpu.state(), state);

    cpu.step();
    assert_eq!(cpu.x(), 0x35);
    assert_eq!(cpu.cycles(), 102);
}
