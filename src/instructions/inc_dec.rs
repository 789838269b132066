//! # Increment and Decrement Instructions
//!
//! INC/DEC modify memory, INX/DEX/INY/DEY modify the index registers.
//! All wrap modulo 256 and set Z and N from the result.

use crate::{AddressInfo, MemoryBus, CPU};

/// INC - Increment Memory
pub(crate) fn inc<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo) -> bool {
    let value = cpu.read(info.address).wrapping_add(1);
    cpu.write(info.address, value);
    cpu.set_zn(value);
    false
}

/// DEC - Decrement Memory
pub(crate) fn dec<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo) -> bool {
    let value = cpu.read(info.address).wrapping_sub(1);
    cpu.write(info.address, value);
    cpu.set_zn(value);
    false
}

/// INX - Increment X Register
pub(crate) fn inx<M: MemoryBus>(cpu: &mut CPU<M>, _info: AddressInfo) -> bool {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.set_zn(cpu.x);
    false
}

/// DEX - Decrement X Register
pub(crate) fn dex<M: MemoryBus>(cpu: &mut CPU<M>, _info: AddressInfo) -> bool {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.set_zn(cpu.x);
    false
}

/// INY - Increment Y Register
pub(crate) fn iny<M: MemoryBus>(cpu: &mut CPU<M>, _info: AddressInfo) -> bool {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.set_zn(cpu.y);
    false
}

/// DEY - Decrement Y Register
pub(crate) fn dey<M: MemoryBus>(cpu: &mut CPU<M>, _info: AddressInfo) -> bool {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.set_zn(cpu.y);
    false
}
