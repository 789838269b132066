//! 6502 Disassembler Module
//!
//! Decodes instructions straight out of a [`MemoryBus`] into human-readable
//! text. Reading is side-effect free and works at any address, including the
//! middle of a multi-byte instruction, which simply decodes as whatever opcode
//! that byte happens to be.

pub mod decoder;
pub mod formatter;

use crate::{MemoryBus, Operation};

/// A single disassembled instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disassembly {
    /// Memory address where this instruction starts
    pub address: u16,

    /// Opcode followed by its operand bytes (1-3 bytes)
    pub bytes: Vec<u8>,

    /// Little-endian operand value; zero when there are no operand bytes
    pub operand: u16,

    /// Opcode table entry for the opcode byte
    pub operation: Operation,

    /// Formatted text, e.g. `LDA #$42 {IMM}`
    pub text: String,
}

impl Disassembly {
    /// Encoded length in bytes.
    pub fn size(&self) -> u8 {
        self.operation.size
    }

    /// Address of the following instruction, wrapping at 0xFFFF.
    pub fn next_address(&self) -> u16 {
        self.address.wrapping_add(self.size() as u16)
    }
}

impl std::fmt::Display for Disassembly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Disassembles the instruction at `address`.
///
/// ```
/// use cpu6502::{disassembler, FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.load(0x8000, &[0xBD, 0x34, 0x12]).unwrap();
///
/// let line = disassembler::disassemble(&mem, 0x8000);
/// assert_eq!(line.text, "LDA $1234,X {ABX}");
/// assert_eq!(line.bytes, vec![0xBD, 0x34, 0x12]);
/// ```
pub fn disassemble<B: MemoryBus + ?Sized>(bus: &B, address: u16) -> Disassembly {
    let (operation, bytes, operand) = decoder::decode(bus, address);
    let text = formatter::format_instruction(address, &operation, operand);
    Disassembly {
        address,
        bytes,
        operand,
        operation,
        text,
    }
}

/// Disassembles `count` consecutive instructions starting at `start`.
pub fn listing<B: MemoryBus + ?Sized>(bus: &B, start: u16, count: usize) -> Vec<Disassembly> {
    let mut lines = Vec::with_capacity(count);
    let mut address = start;
    for _ in 0..count {
        let line = disassemble(bus, address);
        address = line.next_address();
        lines.push(line);
    }
    lines
}
