//! # Opcode Table
//!
//! The 256-entry table mapping each opcode byte to the instruction it runs, the
//! addressing mode that resolves its operand, its encoded length and its base
//! cycle cost. It drives both execution and disassembly.
//!
//! The 151 documented NMOS opcodes follow the published reference. The other
//! 105 byte values decode to [`Instruction::Illegal`]: one byte, one cycle,
//! no effect.

use crate::{AddressingMode, Instruction};

/// Static description of one opcode.
///
/// # Examples
///
/// ```
/// use cpu6502::{AddressingMode, Instruction, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.instruction, Instruction::Lda);
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.size, 2);
/// assert_eq!(lda_imm.cycles, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// Instruction executed for this opcode.
    pub instruction: Instruction,

    /// Addressing mode used to resolve the operand.
    pub mode: AddressingMode,

    /// Encoded length in bytes, opcode included (1-3).
    pub size: u8,

    /// Base cycle cost before any page-crossing or branch adjustment.
    pub cycles: u8,
}

impl Operation {
    const fn new(instruction: Instruction, mode: AddressingMode, cycles: u8) -> Self {
        Self {
            instruction,
            mode,
            size: 1 + mode.operand_len(),
            cycles,
        }
    }

    /// Three-letter mnemonic, `???` for illegal opcodes.
    pub const fn mnemonic(&self) -> &'static str {
        self.instruction.mnemonic()
    }

    /// True for the 151 documented opcodes.
    pub const fn is_documented(&self) -> bool {
        !matches!(self.instruction, Instruction::Illegal)
    }
}

use AddressingMode::{
    Absolute as ABS, AbsoluteX as ABX, AbsoluteY as ABY, Accumulator as ACC, Immediate as IMM,
    Implied as IMP, Indirect as IND, IndirectX as IZX, IndirectY as IZY, Relative as REL,
    ZeroPage as ZP0, ZeroPageX as ZPX, ZeroPageY as ZPY,
};
use Instruction::*;

const XXX: Operation = Operation::new(Illegal, IMP, 1);

const fn op(instruction: Instruction, mode: AddressingMode, cycles: u8) -> Operation {
    Operation::new(instruction, mode, cycles)
}

/// Opcode table indexed by the opcode byte.
///
/// Laid out as the usual 16x16 grid: row = high nibble, column = low nibble.
#[rustfmt::skip]
pub static OPCODE_TABLE: [Operation; 256] = [
    // 0x00
    op(Brk, IMP, 7), op(Ora, IZX, 6), XXX, XXX, XXX, op(Ora, ZP0, 3), op(Asl, ZP0, 5), XXX,
    op(Php, IMP, 3), op(Ora, IMM, 2), op(Asl, ACC, 2), XXX, XXX, op(Ora, ABS, 4), op(Asl, ABS, 6), XXX,
    // 0x10
    op(Bpl, REL, 2), op(Ora, IZY, 5), XXX, XXX, XXX, op(Ora, ZPX, 4), op(Asl, ZPX, 6), XXX,
    op(Clc, IMP, 2), op(Ora, ABY, 4), XXX, XXX, XXX, op(Ora, ABX, 4), op(Asl, ABX, 7), XXX,
    // 0x20
    op(Jsr, ABS, 6), op(And, IZX, 6), XXX, XXX, op(Bit, ZP0, 3), op(And, ZP0, 3), op(Rol, ZP0, 5), XXX,
    op(Plp, IMP, 4), op(And, IMM, 2), op(Rol, ACC, 2), XXX, op(Bit, ABS, 4), op(And, ABS, 4), op(Rol, ABS, 6), XXX,
    // 0x30
    op(Bmi, REL, 2), op(And, IZY, 5), XXX, XXX, XXX, op(And, ZPX, 4), op(Rol, ZPX, 6), XXX,
    op(Sec, IMP, 2), op(And, ABY, 4), XXX, XXX, XXX, op(And, ABX, 4), op(Rol, ABX, 7), XXX,
    // 0x40
    op(Rti, IMP, 6), op(Eor, IZX, 6), XXX, XXX, XXX, op(Eor, ZP0, 3), op(Lsr, ZP0, 5), XXX,
    op(Pha, IMP, 3), op(Eor, IMM, 2), op(Lsr, ACC, 2), XXX, op(Jmp, ABS, 3), op(Eor, ABS, 4), op(Lsr, ABS, 6), XXX,
    // 0x50
    op(Bvc, REL, 2), op(Eor, IZY, 5), XXX, XXX, XXX, op(Eor, ZPX, 4), op(Lsr, ZPX, 6), XXX,
    op(Cli, IMP, 2), op(Eor, ABY, 4), XXX, XXX, XXX, op(Eor, ABX, 4), op(Lsr, ABX, 7), XXX,
    // 0x60
    op(Rts, IMP, 6), op(Adc, IZX, 6), XXX, XXX, XXX, op(Adc, ZP0, 3), op(Ror, ZP0, 5), XXX,
    op(Pla, IMP, 4), op(Adc, IMM, 2), op(Ror, ACC, 2), XXX, op(Jmp, IND, 5), op(Adc, ABS, 4), op(Ror, ABS, 6), XXX,
    // 0x70
    op(Bvs, REL, 2), op(Adc, IZY, 5), XXX, XXX, XXX, op(Adc, ZPX, 4), op(Ror, ZPX, 6), XXX,
    op(Sei, IMP, 2), op(Adc, ABY, 4), XXX, XXX, XXX, op(Adc, ABX, 4), op(Ror, ABX, 7), XXX,
    // 0x80
    XXX, op(Sta, IZX, 6), XXX, XXX, op(Sty, ZP0, 3), op(Sta, ZP0, 3), op(Stx, ZP0, 3), XXX,
    op(Dey, IMP, 2), XXX, op(Txa, IMP, 2), XXX, op(Sty, ABS, 4), op(Sta, ABS, 4), op(Stx, ABS, 4), XXX,
    // 0x90
    op(Bcc, REL, 2), op(Sta, IZY, 6), XXX, XXX, op(Sty, ZPX, 4), op(Sta, ZPX, 4), op(Stx, ZPY, 4), XXX,
    op(Tya, IMP, 2), op(Sta, ABY, 5), op(Txs, IMP, 2), XXX, XXX, op(Sta, ABX, 5), XXX, XXX,
    // 0xA0
    op(Ldy, IMM, 2), op(Lda, IZX, 6), op(Ldx, IMM, 2), XXX, op(Ldy, ZP0, 3), op(Lda, ZP0, 3), op(Ldx, ZP0, 3), XXX,
    op(Tay, IMP, 2), op(Lda, IMM, 2), op(Tax, IMP, 2), XXX, op(Ldy, ABS, 4), op(Lda, ABS, 4), op(Ldx, ABS, 4), XXX,
    // 0xB0
    op(Bcs, REL, 2), op(Lda, IZY, 5), XXX, XXX, op(Ldy, ZPX, 4), op(Lda, ZPX, 4), op(Ldx, ZPY, 4), XXX,
    op(Clv, IMP, 2), op(Lda, ABY, 4), op(Tsx, IMP, 2), XXX, op(Ldy, ABX, 4), op(Lda, ABX, 4), op(Ldx, ABY, 4), XXX,
    // 0xC0
    op(Cpy, IMM, 2), op(Cmp, IZX, 6), XXX, XXX, op(Cpy, ZP0, 3), op(Cmp, ZP0, 3), op(Dec, ZP0, 5), XXX,
    op(Iny, IMP, 2), op(Cmp, IMM, 2), op(Dex, IMP, 2), XXX, op(Cpy, ABS, 4), op(Cmp, ABS, 4), op(Dec, ABS, 6), XXX,
    // 0xD0
    op(Bne, REL, 2), op(Cmp, IZY, 5), XXX, XXX, XXX, op(Cmp, ZPX, 4), op(Dec, ZPX, 6), XXX,
    op(Cld, IMP, 2), op(Cmp, ABY, 4), XXX, XXX, XXX, op(Cmp, ABX, 4), op(Dec, ABX, 7), XXX,
    // 0xE0
    op(Cpx, IMM, 2), op(Sbc, IZX, 6), XXX, XXX, op(Cpx, ZP0, 3), op(Sbc, ZP0, 3), op(Inc, ZP0, 5), XXX,
    op(Inx, IMP, 2), op(Sbc, IMM, 2), op(Nop, IMP, 2), XXX, op(Cpx, ABS, 4), op(Sbc, ABS, 4), op(Inc, ABS, 6), XXX,
    // 0xF0
    op(Beq, REL, 2), op(Sbc, IZY, 5), XXX, XXX, XXX, op(Sbc, ZPX, 4), op(Inc, ZPX, 6), XXX,
    op(Sed, IMP, 2), op(Sbc, ABY, 4), XXX, XXX, XXX, op(Sbc, ABX, 4), op(Inc, ABX, 7), XXX,
];
