//! # Status Flag Manipulation Instructions
//!
//! CLC, SEC, CLI, SEI, CLD, SED and CLV set or clear a single flag. All use
//! implied addressing and take 2 cycles.

use crate::{AddressInfo, MemoryBus, Status, CPU};

/// CLC - Clear Carry Flag
pub(crate) fn clc<M: MemoryBus>(cpu: &mut CPU<M>, _info: AddressInfo) -> bool {
    cpu.set_flag(Status::CARRY, false);
    false
}

/// SEC - Set Carry Flag
pub(crate) fn sec<M: MemoryBus>(cpu: &mut CPU<M>, _info: AddressInfo) -> bool {
    cpu.set_flag(Status::CARRY, true);
    false
}

/// CLI - Clear Interrupt Disable
pub(crate) fn cli<M: MemoryBus>(cpu: &mut CPU<M>, _info: AddressInfo) -> bool {
    cpu.set_flag(Status::INTERRUPT_DISABLE, false);
    false
}

/// SEI - Set Interrupt Disable
pub(crate) fn sei<M: MemoryBus>(cpu: &mut CPU<M>, _info: AddressInfo) -> bool {
    cpu.set_flag(Status::INTERRUPT_DISABLE, true);
    false
}

/// CLD - Clear Decimal Mode
pub(crate) fn cld<M: MemoryBus>(cpu: &mut CPU<M>, _info: AddressInfo) -> bool {
    cpu.set_flag(Status::DECIMAL, false);
    false
}

/// SED - Set Decimal Mode
///
/// Only the flag changes; ADC and SBC stay binary.
pub(crate) fn sed<M: MemoryBus>(cpu: &mut CPU<M>, _info: AddressInfo) -> bool {
    cpu.set_flag(Status::DECIMAL, true);
    false
}

/// CLV - Clear Overflow Flag
pub(crate) fn clv<M: MemoryBus>(cpu: &mut CPU<M>, _info: AddressInfo) -> bool {
    cpu.set_flag(Status::OVERFLOW, false);
    false
}
