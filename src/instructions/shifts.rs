//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL and ROR work on either the accumulator or a memory cell,
//! depending on whether the operand resolved to the accumulator. The bit
//! shifted out lands in Carry; the rotates shift the previous Carry in at
//! the opposite end.

use crate::{AddressInfo, MemoryBus, Status, CPU};

/// Applies `op` to the operand, writes the result back and updates C, Z, N.
///
/// `op` receives the old value and the old carry and returns the new value
/// and the new carry.
fn modify<M: MemoryBus>(
    cpu: &mut CPU<M>,
    info: AddressInfo,
    op: impl FnOnce(u8, bool) -> (u8, bool),
) -> bool {
    let value = cpu.operand(info);
    let (result, carry) = op(value, cpu.flag(Status::CARRY));
    cpu.store_operand(info, result);
    cpu.set_flag(Status::CARRY, carry);
    cpu.set_zn(result);
    false
}

/// ASL - Arithmetic Shift Left
pub(crate) fn asl<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo) -> bool {
    modify(cpu, info, |v, _| (v << 1, v & 0x80 != 0))
}

/// LSR - Logical Shift Right
pub(crate) fn lsr<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo) -> bool {
    modify(cpu, info, |v, _| (v >> 1, v & 0x01 != 0))
}

/// ROL - Rotate Left
pub(crate) fn rol<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo) -> bool {
    modify(cpu, info, |v, c| ((v << 1) | c as u8, v & 0x80 != 0))
}

/// ROR - Rotate Right
pub(crate) fn ror<M: MemoryBus>(cpu: &mut CPU<M>, info: AddressInfo) -> bool {
    modify(cpu, info, |v, c| ((v >> 1) | ((c as u8) << 7), v & 0x01 != 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn setup_cpu() -> CPU<FlatMemory> {
        CPU::new(FlatMemory::new())
    }

    #[test]
    fn test_asl_accumulator() {
        let mut cpu = setup_cpu();
        cpu.set_a(0x81);
        asl(&mut cpu, AddressInfo::accumulator());
        assert_eq!(cpu.a(), 0x02);
        assert!(cpu.flag_c());
        assert!(!cpu.flag_n());
    }

    #[test]
    fn test_lsr_memory_to_zero() {
        let mut cpu = setup_cpu();
        cpu.set_a(0xAA);
        cpu.write(0x0020, 0x01);
        lsr(&mut cpu, AddressInfo::at(0x0020));
        assert_eq!(cpu.read(0x0020), 0x00);
        assert!(cpu.flag_c());
        assert!(cpu.flag_z());
        assert_eq!(cpu.a(), 0xAA); // accumulator untouched
    }

    #[test]
    fn test_rol_shifts_carry_in() {
        let mut cpu = setup_cpu();
        cpu.set_a(0x40);
        cpu.set_flag(Status::CARRY, true);
        rol(&mut cpu, AddressInfo::accumulator());
        assert_eq!(cpu.a(), 0x81);
        assert!(!cpu.flag_c());
        assert!(cpu.flag_n());
    }

    #[test]
    fn test_ror_shifts_carry_into_bit7() {
        let mut cpu = setup_cpu();
        cpu.write(0x0300, 0x01);
        cpu.set_flag(Status::CARRY, true);
        ror(&mut cpu, AddressInfo::at(0x0300));
        assert_eq!(cpu.read(0x0300), 0x80);
        assert!(cpu.flag_c());
        assert!(cpu.flag_n());
    }
}
