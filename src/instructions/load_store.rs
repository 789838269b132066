//! # Load and Store Instructions
//!
//! - LDA, LDX, LDY: load a register from memory, setting Z and N
//! - STA, STX, STY: store a register to memory, no flags affected
//!
//! Loads take the page-crossing penalty; stores always pay the worst case in
//! their base cycle count instead.

use crate::{AddressInfo, MemoryBus, CPU};

/// LDA - Load Accumulator
pub(crate) fn lda<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo) -> bool {
    cpu.a = cpu.operand(info);
    cpu.set_zn(cpu.a);
    true
}

/// LDX - Load X Register
pub(crate) fn ldx<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo) -> bool {
    cpu.x = cpu.operand(info);
    cpu.set_zn(cpu.x);
    true
}

/// LDY - Load Y Register
pub(crate) fn ldy<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo) -> bool {
    cpu.y = cpu.operand(info);
    cpu.set_zn(cpu.y);
    true
}

/// STA - Store Accumulator
pub(crate) fn sta<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo) -> bool {
    cpu.write(info.address, cpu.a);
    false
}

/// STX - Store X Register
pub(crate) fn stx<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo) -> bool {
    cpu.write(info.address, cpu.x);
    false
}

/// STY - Store Y Register
pub(crate) fn sty<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo) -> bool {
    cpu.write(info.address, cpu.y);
    false
}
