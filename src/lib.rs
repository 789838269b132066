//! # 6502 CPU Emulator Core
//!
//! An instruction-level NMOS 6502 emulator: every instruction takes effect
//! atomically on the tick that fetches it, and the CPU then counts down the
//! instruction's published cycle cost, page-crossing and branch penalties
//! included.
//!
//! ## Quick Start
//!
//! ```rust
//! use cpu6502::{CPU, FlatMemory, MemoryBus};
//!
//! // LDA #$05; CLC; ADC #$03; STA $10
//! let program = [0xA9, 0x05, 0x18, 0x69, 0x03, 0x85, 0x10];
//! let memory = FlatMemory::with_program(0x8000, &program).unwrap();
//!
//! // Initialize CPU - it will load PC from the reset vector
//! let mut cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0x8000);
//!
//! for _ in 0..4 {
//!     cpu.step();
//! }
//! assert_eq!(cpu.read(0x0010), 0x08);
//! ```
//!
//! ## Architecture
//!
//! - **Memory**: the CPU reaches memory only through the [`MemoryBus`] trait
//! - **Opcode table**: 256 static [`Operation`] entries drive both execution
//!   and disassembly
//! - **Dispatch**: [`AddressingMode`] and [`Instruction`] are closed enums
//!   matched exhaustively, no function pointers
//! - **Totality**: every opcode, undefined ones included, has defined
//!   behaviour; the core never returns an error
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the clock sequencer
//! - `memory` - MemoryBus trait and FlatMemory
//! - `opcodes` - Opcode table
//! - `addressing` - Addressing modes and effective-address resolution
//! - `instructions` - Instruction semantics
//! - `status` - Status register flags
//! - `disassembler` - Instruction decoding and formatting
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: `trace` for every executed
//! instruction and masked IRQs, `debug` for reset, serviced interrupts and
//! illegal opcodes. No logger is installed by the library.

pub mod addressing;
pub mod cpu;
pub mod disassembler;
pub mod instructions;
pub mod memory;
pub mod opcodes;
pub mod status;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::{AddressInfo, AddressingMode};
pub use cpu::{CpuState, CPU};
pub use disassembler::Disassembly;
pub use instructions::Instruction;
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Operation, OPCODE_TABLE};
pub use status::Status;

/// Address of the little-endian reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Address of the little-endian NMI vector.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Address of the little-endian IRQ/BRK vector.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Base of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Stack pointer value after reset.
pub const RESET_SP: u8 = 0xFD;

/// Errors from loading program images into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    /// The image would extend past address 0xFFFF.
    ImageTooLarge { start: u16, len: usize },
}

impl std::fmt::Display for MemoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MemoryError::ImageTooLarge { start, len } => write!(
                f,
                "image of {} bytes at ${:04X} does not fit in the 64KiB address space",
                len, start
            ),
        }
    }
}

impl std::error::Error for MemoryError {}
