//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA and TSX copy a register and set Z and N from the
//! copied value. TXS only moves X into the stack pointer and leaves the
//! flags alone.

use crate::{AddressInfo, MemoryBus, CPU};

/// TAX - Transfer Accumulator to X
pub(crate) fn tax<M: MemoryBus>(cpu: &mut CPU<M>, _info: AddressInfo) -> bool {
    cpu.x = cpu.a;
    cpu.set_zn(cpu.x);
    false
}

/// TAY - Transfer Accumulator to Y
pub(crate) fn tay<M: MemoryBus>(cpu: &mut CPU<M>, _info: AddressInfo) -> bool {
    cpu.y = cpu.a;
    cpu.set_zn(cpu.y);
    false
}

/// TXA - Transfer X to Accumulator
pub(crate) fn txa<M: MemoryBus>(cpu: &mut CPU<M>, _info: AddressInfo) -> bool {
    cpu.a = cpu.x;
    cpu.set_zn(cpu.a);
    false
}

/// TYA - Transfer Y to Accumulator
pub(crate) fn tya<M: MemoryBus>(cpu: &mut CPU<M>, _info: AddressInfo) -> bool {
    cpu.a = cpu.y;
    cpu.set_zn(cpu.a);
    false
}

/// TSX - Transfer Stack Pointer to X
pub(crate) fn tsx<M: MemoryBus>(cpu: &mut CPU<M>, _info: AddressInfo) -> bool {
    cpu.x = cpu.sp;
    cpu.set_zn(cpu.x);
    false
}

/// TXS - Transfer X to Stack Pointer
pub(crate) fn txs<M: MemoryBus>(cpu: &mut CPU<M>, _info: AddressInfo) -> bool {
    cpu.sp = cpu.x;
    false
}
