//! Multiplication by repeated addition
//!
//! Computes 10 x 3 with an ADC loop, printing each instruction as it
//! executes. The program falls off its trailing NOPs into BRK, which jumps
//! through the zeroed IRQ vector to $0000.
//!
//! Run with: `cargo run --example multiply`

use cpu6502::{FlatMemory, MemoryBus, CPU};

/// Program image, loaded at $8000:
///
/// ```text
/// LDX #10      ; multiplicand
/// STX $0000
/// LDX #3       ; multiplier
/// STX $0001
/// LDY $0000    ; loop counter
/// LDA #0
/// CLC
/// loop:
/// ADC $0001
/// DEY
/// BNE loop
/// STA $0002    ; result
/// NOP
/// NOP
/// NOP
/// ```
const PROGRAM: [u8; 28] = [
    0xA2, 0x0A, 0x8E, 0x00, 0x00, 0xA2, 0x03, 0x8E, 0x01, 0x00, 0xAC, 0x00, 0x00, 0xA9, 0x00,
    0x18, 0x6D, 0x01, 0x00, 0x88, 0xD0, 0xFA, 0x8D, 0x02, 0x00, 0xEA, 0xEA, 0xEA,
];

const START: u16 = 0x8000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("6502 Multiply Demo");
    println!("==================\n");

    let memory = FlatMemory::with_program(START, &PROGRAM)?;
    let mut cpu = CPU::new(memory);

    loop {
        let line = cpu.disassemble(cpu.pc());
        let ticks = cpu.step();
        println!("${:04X}  {:<24} {:>2}  {:?}", line.address, line.text, ticks, cpu);

        if cpu.pc() == 0x0000 {
            break;
        }
    }

    println!();
    println!("10 x 3 = {}", cpu.bus().read(0x0002));
    println!("Total cycles: {}", cpu.cycles());
    Ok(())
}
