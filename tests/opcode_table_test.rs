//! Opcode table validation tests.
//!
//! Spot-checks entries against the published NMOS 6502 reference and checks
//! table-wide consistency.

use cpu6502::{AddressingMode, Instruction, OPCODE_TABLE};

#[test]
fn test_table_has_256_entries() {
    assert_eq!(OPCODE_TABLE.len(), 256);
}

#[test]
fn test_documented_opcode_count() {
    let documented = OPCODE_TABLE.iter().filter(|op| op.is_documented()).count();
    assert_eq!(documented, 151);
}

#[test]
fn test_known_entries() {
    let cases = [
        (0x00, Instruction::Brk, AddressingMode::Implied, 1, 7),
        (0x0A, Instruction::Asl, AddressingMode::Accumulator, 1, 2),
        (0x20, Instruction::Jsr, AddressingMode::Absolute, 3, 6),
        (0x4C, Instruction::Jmp, AddressingMode::Absolute, 3, 3),
        (0x6C, Instruction::Jmp, AddressingMode::Indirect, 3, 5),
        (0x69, Instruction::Adc, AddressingMode::Immediate, 2, 2),
        (0x91, Instruction::Sta, AddressingMode::IndirectY, 2, 6),
        (0x96, Instruction::Stx, AddressingMode::ZeroPageY, 2, 4),
        (0xA1, Instruction::Lda, AddressingMode::IndirectX, 2, 6),
        (0xB1, Instruction::Lda, AddressingMode::IndirectY, 2, 5),
        (0xBE, Instruction::Ldx, AddressingMode::AbsoluteY, 3, 4),
        (0xD0, Instruction::Bne, AddressingMode::Relative, 2, 2),
        (0xEA, Instruction::Nop, AddressingMode::Implied, 1, 2),
        (0xFE, Instruction::Inc, AddressingMode::AbsoluteX, 3, 7),
    ];

    for (opcode, instruction, mode, size, cycles) in cases {
        let entry = &OPCODE_TABLE[opcode];
        assert_eq!(entry.instruction, instruction, "opcode 0x{:02X}", opcode);
        assert_eq!(entry.mode, mode, "opcode 0x{:02X}", opcode);
        assert_eq!(entry.size, size, "opcode 0x{:02X}", opcode);
        assert_eq!(entry.cycles, cycles, "opcode 0x{:02X}", opcode);
    }
}

#[test]
fn test_undefined_opcodes_are_illegal_nops() {
    for opcode in [0x02, 0x03, 0x1A, 0x80, 0x9C, 0x9E, 0xEB, 0xFF] {
        let entry = &OPCODE_TABLE[opcode];
        assert_eq!(entry.instruction, Instruction::Illegal);
        assert_eq!(entry.mnemonic(), "???");
        assert_eq!(entry.mode, AddressingMode::Implied);
        assert_eq!(entry.size, 1);
        assert_eq!(entry.cycles, 1);
    }
}

#[test]
fn test_every_instruction_has_an_opcode() {
    let mut mnemonics: Vec<&str> = OPCODE_TABLE
        .iter()
        .filter(|op| op.is_documented())
        .map(|op| op.mnemonic())
        .collect();
    mnemonics.sort_unstable();
    mnemonics.dedup();
    assert_eq!(mnemonics.len(), 56);
}

#[test]
fn test_documented_cycles_in_range() {
    for (opcode, entry) in OPCODE_TABLE.iter().enumerate() {
        if entry.is_documented() {
            assert!(
                (2..=7).contains(&entry.cycles),
                "opcode 0x{:02X} has {} cycles",
                opcode,
                entry.cycles
            );
        }
    }
}

#[test]
fn test_accumulator_mode_only_on_shifts() {
    for entry in OPCODE_TABLE.iter() {
        if entry.mode == AddressingMode::Accumulator {
            assert!(matches!(
                entry.instruction,
                Instruction::Asl | Instruction::Lsr | Instruction::Rol | Instruction::Ror
            ));
        }
    }
}
