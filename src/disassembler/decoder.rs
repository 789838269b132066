//! Instruction decoder for the 6502 disassembler

use crate::{MemoryBus, Operation, OPCODE_TABLE};

/// Reads the opcode at `address` and the operand bytes its table entry calls
/// for.
///
/// Returns the table entry, the raw instruction bytes and the little-endian
/// operand. Operand bytes past 0xFFFF wrap to 0x0000.
pub fn decode<B: MemoryBus + ?Sized>(bus: &B, address: u16) -> (Operation, Vec<u8>, u16) {
    let opcode = bus.read(address);
    let operation = OPCODE_TABLE[opcode as usize];

    let bytes: Vec<u8> = (0..operation.size as u16)
        .map(|i| bus.read(address.wrapping_add(i)))
        .collect();

    let operand = match bytes.as_slice() {
        [_, lo] => *lo as u16,
        [_, lo, hi] => u16::from_le_bytes([*lo, *hi]),
        _ => 0,
    };

    (operation, bytes, operand)
}
