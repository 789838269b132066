//! # 6502 Instruction Implementations
//!
//! Every instruction is a function taking the CPU and the already resolved
//! [`AddressInfo`]. It performs its side effects and returns whether it may
//! take the extra cycle charged when an indexed address crosses a page.
//! The CPU adds that cycle only when the addressing mode also reports a
//! crossing.
//!
//! Branches return `false` and charge their own taken/page-cross cycles.
//!
//! ## Categories
//!
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **transfer**: TAX, TAY, TXA, TYA, TSX, TXS
//! - **alu**: ADC, SBC, AND, ORA, EOR, BIT, CMP, CPX, CPY
//! - **inc_dec**: INC, DEC, INX, DEX, INY, DEY
//! - **shifts**: ASL, LSR, ROL, ROR
//! - **branches**: BCC, BCS, BEQ, BNE, BPL, BMI, BVC, BVS
//! - **control**: JMP, JSR, RTS, BRK, RTI, NOP and the illegal-opcode placeholder
//! - **stack**: PHA, PLA, PHP, PLP
//! - **flags**: CLC, SEC, CLI, SEI, CLD, SED, CLV

mod alu;
mod branches;
mod control;
mod flags;
mod inc_dec;
mod load_store;
mod shifts;
mod stack;
mod transfer;

use crate::{AddressInfo, MemoryBus, CPU};

/// One of the 56 documented 6502 instructions, or the placeholder used for
/// undefined opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    /// Undefined opcode. Behaves as a one-byte NOP.
    Illegal,
}

impl Instruction {
    /// Three-letter mnemonic, or `???` for undefined opcodes.
    pub const fn mnemonic(self) -> &'static str {
        use Instruction::*;
        match self {
            Adc => "ADC",
            And => "AND",
            Asl => "ASL",
            Bcc => "BCC",
            Bcs => "BCS",
            Beq => "BEQ",
            Bit => "BIT",
            Bmi => "BMI",
            Bne => "BNE",
            Bpl => "BPL",
            Brk => "BRK",
            Bvc => "BVC",
            Bvs => "BVS",
            Clc => "CLC",
            Cld => "CLD",
            Cli => "CLI",
            Clv => "CLV",
            Cmp => "CMP",
            Cpx => "CPX",
            Cpy => "CPY",
            Dec => "DEC",
            Dex => "DEX",
            Dey => "DEY",
            Eor => "EOR",
            Inc => "INC",
            Inx => "INX",
            Iny => "INY",
            Jmp => "JMP",
            Jsr => "JSR",
            Lda => "LDA",
            Ldx => "LDX",
            Ldy => "LDY",
            Lsr => "LSR",
            Nop => "NOP",
            Ora => "ORA",
            Pha => "PHA",
            Php => "PHP",
            Pla => "PLA",
            Plp => "PLP",
            Rol => "ROL",
            Ror => "ROR",
            Rti => "RTI",
            Rts => "RTS",
            Sbc => "SBC",
            Sec => "SEC",
            Sed => "SED",
            Sei => "SEI",
            Sta => "STA",
            Stx => "STX",
            Sty => "STY",
            Tax => "TAX",
            Tay => "TAY",
            Tsx => "TSX",
            Txa => "TXA",
            Txs => "TXS",
            Tya => "TYA",
            Illegal => "???",
        }
    }

    /// True for the eight conditional branches.
    pub const fn is_branch(self) -> bool {
        use Instruction::*;
        matches!(self, Bcc | Bcs | Beq | Bne | Bpl | Bmi | Bvc | Bvs)
    }

    /// Executes the instruction against `cpu` using the resolved operand
    /// address.
    ///
    /// Returns `true` if the instruction is eligible for the page-crossing
    /// penalty cycle. This does not touch the program counter except for
    /// instructions that jump; callers are expected to have advanced it past
    /// the instruction already.
    ///
    /// ```
    /// use cpu6502::{AddressInfo, FlatMemory, Instruction, CPU};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.write(0x0010, 0x80);
    ///
    /// let penalty = Instruction::Lda.execute(&mut cpu, AddressInfo::at(0x0010));
    /// assert!(penalty);
    /// assert_eq!(cpu.a(), 0x80);
    /// assert!(cpu.flag_n());
    /// ```
    pub fn execute<M: MemoryBus>(self, cpu: &mut CPU<M>, info: AddressInfo) -> bool {
        use Instruction::*;
        match self {
            Lda => load_store::lda(cpu, info),
            Ldx => load_store::ldx(cpu, info),
            Ldy => load_store::ldy(cpu, info),
            Sta => load_store::sta(cpu, info),
            Stx => load_store::stx(cpu, info),
            Sty => load_store::sty(cpu, info),

            Tax => transfer::tax(cpu, info),
            Tay => transfer::tay(cpu, info),
            Txa => transfer::txa(cpu, info),
            Tya => transfer::tya(cpu, info),
            Tsx => transfer::tsx(cpu, info),
            Txs => transfer::txs(cpu, info),

            Adc => alu::adc(cpu, info),
            Sbc => alu::sbc(cpu, info),
            And => alu::and(cpu, info),
            Ora => alu::ora(cpu, info),
            Eor => alu::eor(cpu, info),
            Bit => alu::bit(cpu, info),
            Cmp => alu::cmp(cpu, info),
            Cpx => alu::cpx(cpu, info),
            Cpy => alu::cpy(cpu, info),

            Inc => inc_dec::inc(cpu, info),
            Dec => inc_dec::dec(cpu, info),
            Inx => inc_dec::inx(cpu, info),
            Dex => inc_dec::dex(cpu, info),
            Iny => inc_dec::iny(cpu, info),
            Dey => inc_dec::dey(cpu, info),

            Asl => shifts::asl(cpu, info),
            Lsr => shifts::lsr(cpu, info),
            Rol => shifts::rol(cpu, info),
            Ror => shifts::ror(cpu, info),

            Bcc => branches::bcc(cpu, info),
            Bcs => branches::bcs(cpu, info),
            Beq => branches::beq(cpu, info),
            Bne => branches::bne(cpu, info),
            Bpl => branches::bpl(cpu, info),
            Bmi => branches::bmi(cpu, info),
            Bvc => branches::bvc(cpu, info),
            Bvs => branches::bvs(cpu, info),

            Jmp => control::jmp(cpu, info),
            Jsr => control::jsr(cpu, info),
            Rts => control::rts(cpu, info),
            Brk => control::brk(cpu, info),
            Rti => control::rti(cpu, info),
            Nop => control::nop(cpu, info),
            Illegal => control::illegal(cpu, info),

            Pha => stack::pha(cpu, info),
            Pla => stack::pla(cpu, info),
            Php => stack::php(cpu, info),
            Plp => stack::plp(cpu, info),

            Clc => flags::clc(cpu, info),
            Sec => flags::sec(cpu, info),
            Cli => flags::cli(cpu, info),
            Sei => flags::sei(cpu, info),
            Cld => flags::cld(cpu, info),
            Sed => flags::sed(cpu, info),
            Clv => flags::clv(cpu, info),
        }
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}
