//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! - ADC, SBC: binary add/subtract with carry. The Decimal flag is ignored.
//! - AND, ORA, EOR: bitwise combine into the accumulator
//! - BIT: test accumulator bits against memory
//! - CMP, CPX, CPY: compare a register with memory
//!
//! All of these read memory and take the page-crossing penalty.

use crate::{AddressInfo, MemoryBus, Status, CPU};

/// Adds `value` and the carry into the accumulator, updating C, Z, V and N.
///
/// Shared by ADC and SBC; SBC passes the one's complement of its operand.
fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.a;
    let carry_in = cpu.flag(Status::CARRY) as u16;

    // 9-bit intermediate; bit 8 is the carry out
    let sum = a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    cpu.set_flag(Status::CARRY, sum > 0xFF);
    // Overflow when both inputs share a sign the result does not have
    cpu.set_flag(Status::OVERFLOW, (a ^ result) & (value ^ result) & 0x80 != 0);
    cpu.a = result;
    cpu.set_zn(result);
}

/// ADC - Add with Carry
pub(crate) fn adc<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo) -> bool {
    let value = cpu.operand(info);
    add_with_carry(cpu, value);
    true
}

/// SBC - Subtract with Carry
///
/// A - M - (1 - C) is computed as A + !M + C, so the carry acts as an
/// inverted borrow.
pub(crate) fn sbc<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo) -> bool {
    let value = cpu.operand(info);
    add_with_carry(cpu, !value);
    true
}

/// AND - Logical AND
pub(crate) fn and<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo) -> bool {
    let value = cpu.operand(info);
    cpu.a &= value;
    cpu.set_zn(cpu.a);
    true
}

/// ORA - Logical Inclusive OR
pub(crate) fn ora<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo) -> bool {
    let value = cpu.operand(info);
    cpu.a |= value;
    cpu.set_zn(cpu.a);
    true
}

/// EOR - Exclusive OR
pub(crate) fn eor<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo) -> bool {
    let value = cpu.operand(info);
    cpu.a ^= value;
    cpu.set_zn(cpu.a);
    true
}

/// BIT - Bit Test
///
/// Z comes from A & M; N and V are copied straight from bits 7 and 6 of M.
/// The accumulator is not modified.
pub(crate) fn bit<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo) -> bool {
    let value = cpu.operand(info);
    cpu.set_flag(Status::ZERO, cpu.a & value == 0);
    cpu.set_flag(Status::NEGATIVE, value & 0x80 != 0);
    cpu.set_flag(Status::OVERFLOW, value & 0x40 != 0);
    true
}

fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, info: AddressInfo) {
    let value = cpu.operand(info);
    cpu.set_flag(Status::CARRY, register >= value);
    cpu.set_zn(register.wrapping_sub(value));
}

/// CMP - Compare Accumulator
pub(crate) fn cmp<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo) -> bool {
    let register = cpu.a;
    compare(cpu, register, info);
    true
}

/// CPX - Compare X Register
pub(crate) fn cpx<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo) -> bool {
    let register = cpu.x;
    compare(cpu, register, info);
    true
}

/// CPY - Compare Y Register
pub(crate) fn cpy<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo) -> bool {
    let register = cpu.y;
    compare(cpu, register, info);
    true
}
