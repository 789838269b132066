//! # Control Flow Instructions
//!
//! - JMP: jump to the effective address
//! - JSR / RTS: subroutine call and return
//! - BRK / RTI: software interrupt and interrupt return
//! - NOP and the illegal-opcode placeholder
//!
//! By the time these run the CPU has already moved PC past the instruction,
//! so "PC" below always means the address of the following instruction.

use crate::{AddressInfo, MemoryBus, Status, CPU};

/// JMP - Jump
pub(crate) fn jmp<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo) -> bool {
    cpu.pc = info.address;
    false
}

/// JSR - Jump to Subroutine
///
/// Pushes PC - 1, the address of the last byte of the JSR itself. RTS adds
/// the missing one back.
pub(crate) fn jsr<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo) -> bool {
    let return_addr = cpu.pc.wrapping_sub(1);
    cpu.push16(return_addr);
    cpu.pc = info.address;
    false
}

/// RTS - Return from Subroutine
pub(crate) fn rts<M: MemoryBus>(cpu: &mut CPU<M>, _info: AddressInfo) -> bool {
    cpu.pc = cpu.pop16().wrapping_add(1);
    false
}

/// BRK - Force Interrupt
///
/// Pushes PC and then the status with Break set in the pushed copy, sets
/// Interrupt-Disable and continues at the IRQ/BRK vector.
pub(crate) fn brk<M: MemoryBus>(cpu: &mut CPU<M>, _info: AddressInfo) -> bool {
    cpu.push16(cpu.pc);
    let pushed = cpu.status | Status::BREAK | Status::UNUSED;
    cpu.push(pushed.bits());
    cpu.set_flag(Status::INTERRUPT_DISABLE, true);
    cpu.pc = cpu.irq_vector();
    false
}

/// RTI - Return from Interrupt
///
/// Pops status (Break cleared, Unused set) and then PC. Unlike RTS the
/// popped address is used as is.
pub(crate) fn rti<M: MemoryBus>(cpu: &mut CPU<M>, _info: AddressInfo) -> bool {
    let popped = Status::from_bits_retain(cpu.pop());
    cpu.status = (popped - Status::BREAK) | Status::UNUSED;
    cpu.pc = cpu.pop16();
    false
}

/// NOP - No Operation
pub(crate) fn nop<M: MemoryBus>(_cpu: &mut CPU<M>, _info: AddressInfo) -> bool {
    false
}

/// Placeholder for undefined opcodes, identical to NOP.
pub(crate) fn illegal<M: MemoryBus>(_cpu: &mut CPU<M>, _info: AddressInfo) -> bool {
    false
}
