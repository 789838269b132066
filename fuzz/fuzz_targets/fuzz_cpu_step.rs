//! Fuzz target for CPU step execution.
//!
//! Builds an arbitrary register file and memory contents, optionally raises
//! an interrupt, then executes one instruction. Nothing may panic.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::{FlatMemory, MemoryBus, CPU};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Interrupt vectors at 0xFFFA-0xFFFF
    vectors: [u8; 6],
}

#[derive(Debug, Arbitrary)]
enum Interrupt {
    None,
    Irq,
    Nmi,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    pc: u16,
    interrupt: Interrupt,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    for (i, &byte) in input.memory.zero_page.iter().enumerate() {
        memory.write(i as u16, byte);
    }
    for (i, &byte) in input.memory.stack_page.iter().enumerate() {
        memory.write(0x0100 + i as u16, byte);
    }
    for (i, &byte) in input.memory.vectors.iter().enumerate() {
        memory.write(0xFFFA + i as u16, byte);
    }
    // Instruction bytes may overlap and wrap around the top of memory
    for (i, &byte) in input.memory.instruction_bytes.iter().enumerate() {
        memory.write(input.pc.wrapping_add(i as u16), byte);
    }

    let mut cpu = CPU::new(memory);
    cpu.set_pc(input.pc);
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    match input.interrupt {
        Interrupt::None => {}
        Interrupt::Irq => cpu.irq(),
        Interrupt::Nmi => cpu.nmi(),
    }

    let ticks = cpu.step();

    // Every instruction costs between 1 and 7 ticks, an interrupt up to 7 more
    assert!((1..=14).contains(&ticks));
    assert_eq!(cpu.remaining_cycles(), 0);
    assert_eq!(cpu.cycles(), ticks);
});
