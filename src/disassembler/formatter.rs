//! Formatting functions for disassembled instructions
//!
//! Every line ends with the addressing mode's short tag in braces, e.g.
//! `LDA ($40),Y {INDY}`. Relative branches show the raw offset byte and the
//! resolved target: `BEQ $05 [$2007] {REL}`.

use crate::{AddressingMode, Operation};

/// Formats an instruction at `address` with the given little-endian operand.
pub fn format_instruction(address: u16, operation: &Operation, operand: u16) -> String {
    let mnemonic = operation.mnemonic();
    let tag = operation.mode.short_name();

    match format_operand(address, operation.mode, operand) {
        Some(text) => format!("{} {} {{{}}}", mnemonic, text, tag),
        None => format!("{} {{{}}}", mnemonic, tag),
    }
}

fn format_operand(address: u16, mode: AddressingMode, operand: u16) -> Option<String> {
    use AddressingMode::*;

    let text = match mode {
        Implied => return None,
        Accumulator => "A".to_string(),
        Immediate => format!("#${:02X}", operand),
        ZeroPage => format!("${:02X}", operand),
        ZeroPageX => format!("${:02X},X", operand),
        ZeroPageY => format!("${:02X},Y", operand),
        Relative => {
            let offset = operand as u8;
            let target = address
                .wrapping_add(2)
                .wrapping_add_signed(offset as i8 as i16);
            format!("${:02X} [${:04X}]", offset, target)
        }
        Absolute => format!("${:04X}", operand),
        AbsoluteX => format!("${:04X},X", operand),
        AbsoluteY => format!("${:04X},Y", operand),
        Indirect => format!("(${:04X})", operand),
        IndirectX => format!("(${:02X},X)", operand),
        IndirectY => format!("(${:02X}),Y", operand),
    };
    Some(text)
}
