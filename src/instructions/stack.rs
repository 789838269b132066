//! # Stack Operations
//!
//! The stack lives in page 1 (0x0100-0x01FF) and grows downward; SP is an
//! 8-bit offset into that page and wraps silently.
//!
//! - PHA / PLA: push and pull the accumulator (PLA sets Z and N)
//! - PHP / PLP: push and pull the status register

use crate::{AddressInfo, MemoryBus, Status, CPU};

/// PHA - Push Accumulator
pub(crate) fn pha<M: MemoryBus>(cpu: &mut CPU<M>, _info: AddressInfo) -> bool {
    cpu.push(cpu.a);
    false
}

/// PLA - Pull Accumulator
pub(crate) fn pla<M: MemoryBus>(cpu: &mut CPU<M>, _info: AddressInfo) -> bool {
    cpu.a = cpu.pop();
    cpu.set_zn(cpu.a);
    false
}

/// PHP - Push Processor Status
///
/// The pushed byte always has Break and Unused set; the live register is
/// unchanged.
pub(crate) fn php<M: MemoryBus>(cpu: &mut CPU<M>, _info: AddressInfo) -> bool {
    let pushed = cpu.status | Status::BREAK | Status::UNUSED;
    cpu.push(pushed.bits());
    false
}

/// PLP - Pull Processor Status
///
/// Break is not a real latch, so it is dropped; Unused reads back as 1.
pub(crate) fn plp<M: MemoryBus>(cpu: &mut CPU<M>, _info: AddressInfo) -> bool {
    let popped = Status::from_bits_retain(cpu.pop());
    cpu.status = (popped - Status::BREAK) | Status::UNUSED;
    false
}
