//! # Branch Instructions
//!
//! All branches use relative addressing. Timing:
//! - 2 cycles if the branch is not taken
//! - 3 cycles if taken to the same page
//! - 4 cycles if taken to a different page
//!
//! The extra cycles are charged here, so every branch reports `false` to the
//! generic page-crossing check. No flags are affected.

use crate::{AddressInfo, MemoryBus, Status, CPU};

fn branch_if<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo, condition: bool) -> bool {
    if condition {
        cpu.add_branch_cycles(info);
        cpu.pc = info.address;
    }
    false
}

/// BCC - Branch if Carry Clear
pub(crate) fn bcc<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo) -> bool {
    let taken = !cpu.flag(Status::CARRY);
    branch_if(cpu, info, taken)
}

/// BCS - Branch if Carry Set
pub(crate) fn bcs<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo) -> bool {
    let taken = cpu.flag(Status::CARRY);
    branch_if(cpu, info, taken)
}

/// BEQ - Branch if Equal
pub(crate) fn beq<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo) -> bool {
    let taken = cpu.flag(Status::ZERO);
    branch_if(cpu, info, taken)
}

/// BNE - Branch if Not Equal
pub(crate) fn bne<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo) -> bool {
    let taken = !cpu.flag(Status::ZERO);
    branch_if(cpu, info, taken)
}

/// BPL - Branch if Positive
pub(crate) fn bpl<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo) -> bool {
    let taken = !cpu.flag(Status::NEGATIVE);
    branch_if(cpu, info, taken)
}

/// BMI - Branch if Minus
pub(crate) fn bmi<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo) -> bool {
    let taken = cpu.flag(Status::NEGATIVE);
    branch_if(cpu, info, taken)
}

/// BVC - Branch if Overflow Clear
pub(crate) fn bvc<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo) -> bool {
    let taken = !cpu.flag(Status::OVERFLOW);
    branch_if(cpu, info, taken)
}

/// BVS - Branch if Overflow Set
pub(crate) fn bvs<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo) -> bool {
    let taken = cpu.flag(Status::OVERFLOW);
    branch_if(cpu, info, taken)
}
