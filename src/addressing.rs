//! # Addressing Modes
//!
//! The 6502 has a 16-bit address space. The upper byte of an address is its
//! "page", the lower byte the offset within that page, giving 256 pages of
//! 256 bytes.
//!
//! Each addressing mode turns the operand bytes following an opcode into an
//! [`AddressInfo`]. Resolution only reads memory and registers; it never
//! advances the program counter. All modes are computed relative to the
//! address of the opcode itself, so resolution happens before the CPU moves
//! PC past the instruction.
//!
//! Indexed modes may cross a page boundary. Whether that costs a cycle
//! depends on the instruction too, so the mode only reports the crossing.

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (the operand byte itself is the effective address)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ZeroPage,

    /// Zero page address indexed by X register, wraps within zero page.
    ZeroPageX,

    /// Zero page address indexed by Y register, wraps within zero page.
    ZeroPageY,

    /// Signed 8-bit offset from the following instruction. Branches only.
    Relative,

    /// Full 16-bit address.
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Reproduces the NMOS page-wrap bug: JMP ($10FF) reads the high byte
    /// from $1000, not $1100.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,
}

/// Effective address produced by resolving an addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddressInfo {
    /// Effective 16-bit address. Meaningless when `is_accumulator` is set or
    /// for implied instructions.
    pub address: u16,

    /// Computing the address moved into a different 256-byte page.
    pub page_crossed: bool,

    /// The operand is the accumulator rather than memory.
    pub is_accumulator: bool,
}

impl AddressInfo {
    /// An address that did not cross a page.
    pub const fn at(address: u16) -> Self {
        Self {
            address,
            page_crossed: false,
            is_accumulator: false,
        }
    }

    /// The accumulator as operand.
    pub const fn accumulator() -> Self {
        Self {
            address: 0,
            page_crossed: false,
            is_accumulator: true,
        }
    }
}

impl AddressingMode {
    /// Every mode, in declaration order.
    pub const ALL: [AddressingMode; 13] = [
        AddressingMode::Implied,
        AddressingMode::Accumulator,
        AddressingMode::Immediate,
        AddressingMode::ZeroPage,
        AddressingMode::ZeroPageX,
        AddressingMode::ZeroPageY,
        AddressingMode::Relative,
        AddressingMode::Absolute,
        AddressingMode::AbsoluteX,
        AddressingMode::AbsoluteY,
        AddressingMode::Indirect,
        AddressingMode::IndirectX,
        AddressingMode::IndirectY,
    ];

    /// Resolves the effective address for the instruction whose opcode sits
    /// at the CPU's current program counter.
    ///
    /// ```
    /// use cpu6502::{AddressingMode, FlatMemory, MemoryBus, CPU};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFD, 0x80);
    /// mem.write(0x8001, 0xF0);
    /// mem.write(0x8002, 0x12);
    ///
    /// let mut cpu = CPU::new(mem);
    /// cpu.set_x(0x20);
    ///
    /// let info = AddressingMode::AbsoluteX.resolve(&cpu);
    /// assert_eq!(info.address, 0x1310);
    /// assert!(info.page_crossed);
    /// ```
    pub fn resolve<M: MemoryBus>(self, cpu: &CPU<M>) -> AddressInfo {
        match self {
            AddressingMode::Implied => implied(cpu),
            AddressingMode::Accumulator => accumulator(cpu),
            AddressingMode::Immediate => immediate(cpu),
            AddressingMode::ZeroPage => zero_page(cpu),
            AddressingMode::ZeroPageX => zero_page_x(cpu),
            AddressingMode::ZeroPageY => zero_page_y(cpu),
            AddressingMode::Relative => relative(cpu),
            AddressingMode::Absolute => absolute(cpu),
            AddressingMode::AbsoluteX => absolute_x(cpu),
            AddressingMode::AbsoluteY => absolute_y(cpu),
            AddressingMode::Indirect => indirect(cpu),
            AddressingMode::IndirectX => indirect_x(cpu),
            AddressingMode::IndirectY => indirect_y(cpu),
        }
    }

    /// Short tag used in disassembly output, e.g. `IMM` or `INDY`.
    pub const fn short_name(self) -> &'static str {
        match self {
            AddressingMode::Implied => "IMP",
            AddressingMode::Accumulator => "ACC",
            AddressingMode::Immediate => "IMM",
            AddressingMode::ZeroPage => "ZP0",
            AddressingMode::ZeroPageX => "ZPX",
            AddressingMode::ZeroPageY => "ZPY",
            AddressingMode::Relative => "REL",
            AddressingMode::Absolute => "ABS",
            AddressingMode::AbsoluteX => "ABX",
            AddressingMode::AbsoluteY => "ABY",
            AddressingMode::Indirect => "IND",
            AddressingMode::IndirectX => "INDX",
            AddressingMode::IndirectY => "INDY",
        }
    }

    /// Number of operand bytes following the opcode.
    pub const fn operand_len(self) -> u8 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
            _ => 1,
        }
    }
}

/// True when `a` and `b` lie in different 256-byte pages.
#[inline]
pub(crate) fn pages_differ(a: u16, b: u16) -> bool {
    a & 0xFF00 != b & 0xFF00
}

#[inline]
fn operand_addr<M: MemoryBus>(cpu: &CPU<M>) -> u16 {
    cpu.pc.wrapping_add(1)
}

fn implied<M: MemoryBus>(_cpu: &CPU<M>) -> AddressInfo {
    AddressInfo::default()
}

fn accumulator<M: MemoryBus>(_cpu: &CPU<M>) -> AddressInfo {
    AddressInfo::accumulator()
}

fn immediate<M: MemoryBus>(cpu: &CPU<M>) -> AddressInfo {
    AddressInfo::at(operand_addr(cpu))
}

fn absolute<M: MemoryBus>(cpu: &CPU<M>) -> AddressInfo {
    AddressInfo::at(cpu.read16(operand_addr(cpu)))
}

fn absolute_indexed<M: MemoryBus>(cpu: &CPU<M>, index: u8) -> AddressInfo {
    let base = cpu.read16(operand_addr(cpu));
    let address = base.wrapping_add(index as u16);
    AddressInfo {
        address,
        page_crossed: pages_differ(base, address),
        is_accumulator: false,
    }
}

fn absolute_x<M: MemoryBus>(cpu: &CPU<M>) -> AddressInfo {
    absolute_indexed(cpu, cpu.x)
}

fn absolute_y<M: MemoryBus>(cpu: &CPU<M>) -> AddressInfo {
    absolute_indexed(cpu, cpu.y)
}

fn zero_page<M: MemoryBus>(cpu: &CPU<M>) -> AddressInfo {
    AddressInfo::at(cpu.read(operand_addr(cpu)) as u16)
}

// Indexing wraps inside page zero, so these never report a crossing.
fn zero_page_x<M: MemoryBus>(cpu: &CPU<M>) -> AddressInfo {
    AddressInfo::at(cpu.read(operand_addr(cpu)).wrapping_add(cpu.x) as u16)
}

fn zero_page_y<M: MemoryBus>(cpu: &CPU<M>) -> AddressInfo {
    AddressInfo::at(cpu.read(operand_addr(cpu)).wrapping_add(cpu.y) as u16)
}

fn relative<M: MemoryBus>(cpu: &CPU<M>) -> AddressInfo {
    let offset = cpu.read(operand_addr(cpu)) as i8;
    let next = cpu.pc.wrapping_add(2);
    let address = next.wrapping_add_signed(offset as i16);
    AddressInfo {
        address,
        page_crossed: pages_differ(next, address),
        is_accumulator: false,
    }
}

fn indirect<M: MemoryBus>(cpu: &CPU<M>) -> AddressInfo {
    let ptr = cpu.read16(operand_addr(cpu));
    let lo = cpu.read(ptr) as u16;
    // NMOS bug: the pointer's high byte never carries into the next page.
    let hi_addr = if ptr & 0x00FF == 0x00FF {
        ptr & 0xFF00
    } else {
        ptr + 1
    };
    let hi = cpu.read(hi_addr) as u16;
    AddressInfo::at((hi << 8) | lo)
}

fn read_zero_page_pointer<M: MemoryBus>(cpu: &CPU<M>, ptr: u8) -> u16 {
    let lo = cpu.read(ptr as u16) as u16;
    let hi = cpu.read(ptr.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

fn indirect_x<M: MemoryBus>(cpu: &CPU<M>) -> AddressInfo {
    let ptr = cpu.read(operand_addr(cpu)).wrapping_add(cpu.x);
    AddressInfo::at(read_zero_page_pointer(cpu, ptr))
}

fn indirect_y<M: MemoryBus>(cpu: &CPU<M>) -> AddressInfo {
    let ptr = cpu.read(operand_addr(cpu));
    let base = read_zero_page_pointer(cpu, ptr);
    let address = base.wrapping_add(cpu.y as u16);
    AddressInfo {
        address,
        page_crossed: pages_differ(base, address),
        is_accumulator: false,
    }
}
