//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the clock sequencer that drives it.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: a [`Status`] bitfield (NV-BDIZC)
//! - **Remaining cycles**: ticks left before the current instruction completes
//! - **Cycle counter**: u64 count of every tick since construction
//!
//! ## Execution Model
//!
//! Each instruction executes in full on the tick that fetches it. The
//! following ticks only count down the instruction's remaining cycles, so
//! the observable state changes at instruction granularity:
//!
//! - `clock()`: advance one tick
//! - `step()`: tick until the current instruction has completed
//! - `run_for_cycles()`: step whole instructions until a tick budget is spent
//!
//! IRQ, NMI and reset are discrete operations invoked by the caller between
//! ticks.

use log::{debug, trace};

use crate::disassembler::{self, Disassembly};
use crate::{
    AddressInfo, Instruction, MemoryBus, Status, IRQ_VECTOR, NMI_VECTOR, OPCODE_TABLE,
    RESET_SP, RESET_VECTOR, STACK_BASE,
};

/// Cycles charged for servicing an IRQ or NMI.
const INTERRUPT_CYCLES: u32 = 7;

/// 6502 CPU state and execution context.
///
/// The CPU owns its registers and the memory bus it was built with. It is
/// generic over the bus via the `MemoryBus` trait; pass `&mut bus` to keep
/// ownership on the caller's side.
///
/// # Type Parameters
///
/// * `M` - Memory bus implementation (must implement `MemoryBus` trait)
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// // Create memory and set reset vector
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Low byte
/// memory.write(0xFFFD, 0x80); // High byte (PC = 0x8000)
///
/// // Initialize CPU - loads PC from reset vector
/// let cpu = CPU::new(memory);
///
/// // Inspect initial state
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFD);
/// assert_eq!(cpu.flag_i(), true); // Interrupt disable set on reset
/// assert_eq!(cpu.status(), 0x24);
/// assert_eq!(cpu.remaining_cycles(), 0);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Processor status flags
    pub(crate) status: Status,

    /// Ticks left before the current instruction completes
    pub(crate) remaining: u32,

    /// Total ticks since construction
    pub(crate) cycles: u64,

    /// Memory bus implementation
    pub(crate) bus: M,
}

/// Snapshot of the register file, used to save and restore CPU state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CpuState {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: Status,
    pub remaining_cycles: u32,
    pub cycles: u64,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU bound to `bus` and runs the reset sequence.
    ///
    /// After construction:
    /// - PC holds the little-endian word at 0xFFFC/0xFFFD
    /// - SP is 0xFD
    /// - Status is Unused + Interrupt-Disable (0x24)
    /// - A, X and Y are zero
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    ///
    /// let cpu = CPU::new(mem);
    /// assert_eq!(cpu.pc(), 0x8000);
    /// ```
    pub fn new(bus: M) -> Self {
        let mut cpu = Self {
            a: 0,
            x: 0,
            y: 0,
            pc: 0,
            sp: RESET_SP,
            status: Status::POWER_ON,
            remaining: 0,
            cycles: 0,
            bus,
        };
        cpu.reset();
        cpu
    }

    /// Puts the CPU into its power-on state and loads PC from the reset
    /// vector.
    ///
    /// Reset takes effect immediately. Any instruction still counting down
    /// is abandoned; the total cycle counter is left alone.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = RESET_SP;
        self.status = Status::POWER_ON;
        self.pc = self.reset_vector();
        self.remaining = 0;
        debug!("reset: PC=${:04X}", self.pc);
    }

    /// Advances the CPU by one clock tick.
    ///
    /// When no instruction is in progress, this fetches, decodes and executes
    /// the instruction at PC and charges its cycle cost. Otherwise it only
    /// counts down the current instruction.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory};
    ///
    /// // LDA #$05
    /// let mem = FlatMemory::with_program(0x8000, &[0xA9, 0x05]).unwrap();
    /// let mut cpu = CPU::new(mem);
    ///
    /// cpu.clock();
    /// assert_eq!(cpu.a(), 0x05);          // effect is immediate
    /// assert_eq!(cpu.remaining_cycles(), 1);
    ///
    /// cpu.clock();
    /// assert_eq!(cpu.remaining_cycles(), 0);
    /// ```
    pub fn clock(&mut self) {
        if self.remaining == 0 {
            self.execute_next();
        }
        self.remaining -= 1;
        self.cycles += 1;
    }

    fn execute_next(&mut self) {
        let start = self.pc;
        let opcode = self.read(start);
        let operation = OPCODE_TABLE[opcode as usize];

        let info = operation.mode.resolve(self);
        self.pc = self.pc.wrapping_add(operation.size as u16);
        self.remaining = operation.cycles as u32;

        if operation.instruction == Instruction::Illegal {
            debug!("illegal opcode ${:02X} at ${:04X}", opcode, start);
        }

        let penalty = operation.instruction.execute(self, info);
        if penalty && info.page_crossed {
            self.remaining += 1;
        }

        trace!(
            "${:04X}  {:02X}  {} {:?}  cycles={}",
            start,
            opcode,
            operation.mnemonic(),
            operation.mode,
            self.remaining
        );
    }

    /// Clocks until the current instruction completes and returns the number
    /// of ticks that took.
    ///
    /// Called between instructions this executes exactly one instruction.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory};
    ///
    /// // LDA $1234
    /// let mem = FlatMemory::with_program(0x8000, &[0xAD, 0x34, 0x12]).unwrap();
    /// let mut cpu = CPU::new(mem);
    ///
    /// assert_eq!(cpu.step(), 4);
    /// assert_eq!(cpu.pc(), 0x8003);
    /// ```
    pub fn step(&mut self) -> u64 {
        let mut ticks = 0;
        loop {
            self.clock();
            ticks += 1;
            if self.remaining == 0 {
                return ticks;
            }
        }
    }

    /// Steps whole instructions until at least `cycle_budget` ticks have
    /// elapsed. Returns the ticks actually consumed, which may overshoot the
    /// budget by part of an instruction.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpu6502::{CPU, FlatMemory};
    ///
    /// // NOP sled
    /// let mem = FlatMemory::with_program(0x8000, &[0xEA; 16]).unwrap();
    /// let mut cpu = CPU::new(mem);
    ///
    /// assert_eq!(cpu.run_for_cycles(10), 10);
    /// assert_eq!(cpu.pc(), 0x8005);
    /// ```
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> u64 {
        let mut consumed = 0;
        while consumed < cycle_budget {
            consumed += self.step();
        }
        consumed
    }

    /// Raises the maskable interrupt line.
    ///
    /// Ignored while Interrupt-Disable is set. Otherwise pushes PC and status
    /// (Break clear in the pushed copy), sets Interrupt-Disable, jumps through
    /// the IRQ vector and adds 7 cycles to the pending count.
    pub fn irq(&mut self) {
        if self.flag(Status::INTERRUPT_DISABLE) {
            trace!("IRQ masked at PC=${:04X}", self.pc);
            return;
        }
        self.interrupt(IRQ_VECTOR);
        debug!("IRQ serviced, PC=${:04X}", self.pc);
    }

    /// Raises the non-maskable interrupt line. Same sequence as
    /// [`irq`](Self::irq) through the NMI vector, regardless of
    /// Interrupt-Disable.
    pub fn nmi(&mut self) {
        self.interrupt(NMI_VECTOR);
        debug!("NMI serviced, PC=${:04X}", self.pc);
    }

    fn interrupt(&mut self, vector: u16) {
        self.push16(self.pc);
        let pushed = (self.status - Status::BREAK) | Status::UNUSED;
        self.push(pushed.bits());
        self.set_flag(Status::INTERRUPT_DISABLE, true);
        self.pc = self.read16(vector);
        self.remaining = self.remaining.saturating_add(INTERRUPT_CYCLES);
    }

    /// Charges the extra cycles of a taken branch: one, plus one more when
    /// the target lies in another page.
    pub(crate) fn add_branch_cycles(&mut self, info: AddressInfo) {
        self.remaining += 1;
        if info.page_crossed {
            self.remaining += 1;
        }
    }

    // ========== Memory Access ==========

    /// Reads a byte through the bus.
    pub fn read(&self, addr: u16) -> u8 {
        self.bus.read(addr)
    }

    /// Writes a byte through the bus.
    pub fn write(&mut self, addr: u16, value: u8) {
        self.bus.write(addr, value);
    }

    /// Reads a little-endian word. The high byte comes from `addr + 1`,
    /// wrapping at 0xFFFF.
    pub fn read16(&self, addr: u16) -> u16 {
        let lo = self.read(addr);
        let hi = self.read(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Writes a little-endian word.
    pub fn write16(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write(addr, lo);
        self.write(addr.wrapping_add(1), hi);
    }

    /// Operand byte for `info`: the accumulator or the byte at its address.
    pub(crate) fn operand(&self, info: AddressInfo) -> u8 {
        if info.is_accumulator {
            self.a
        } else {
            self.read(info.address)
        }
    }

    /// Stores a result to the accumulator or memory, matching [`operand`](Self::operand).
    pub(crate) fn store_operand(&mut self, info: AddressInfo, value: u8) {
        if info.is_accumulator {
            self.a = value;
        } else {
            self.write(info.address, value);
        }
    }

    /// Returns the memory bus.
    pub fn bus(&self) -> &M {
        &self.bus
    }

    /// Returns the memory bus mutably.
    pub fn bus_mut(&mut self) -> &mut M {
        &mut self.bus
    }

    /// Consumes the CPU and hands back its bus.
    pub fn into_bus(self) -> M {
        self.bus
    }

    // ========== Stack ==========

    /// Pushes a byte at 0x0100 + SP and decrements SP (wrapping).
    pub fn push(&mut self, value: u8) {
        self.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP (wrapping) and pops the byte at 0x0100 + SP.
    pub fn pop(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.read(STACK_BASE | self.sp as u16)
    }

    /// Pushes a word, high byte first.
    pub fn push16(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push(hi);
        self.push(lo);
    }

    /// Pops a word pushed by [`push16`](Self::push16).
    pub fn pop16(&mut self) -> u16 {
        let lo = self.pop();
        let hi = self.pop();
        u16::from_le_bytes([lo, hi])
    }

    // ========== Vectors ==========

    /// Word at 0xFFFC/0xFFFD.
    pub fn reset_vector(&self) -> u16 {
        self.read16(RESET_VECTOR)
    }

    /// Word at 0xFFFE/0xFFFF, shared by IRQ and BRK.
    pub fn irq_vector(&self) -> u16 {
        self.read16(IRQ_VECTOR)
    }

    /// Word at 0xFFFA/0xFFFB.
    pub fn nmi_vector(&self) -> u16 {
        self.read16(NMI_VECTOR)
    }

    // ========== Flags ==========

    /// Returns true if every flag in `flag` is set.
    pub fn flag(&self, flag: Status) -> bool {
        self.status.contains(flag)
    }

    /// Sets or clears `flag`.
    pub fn set_flag(&mut self, flag: Status, value: bool) {
        self.status.set(flag, value);
    }

    /// Sets Zero and Negative from `value`.
    pub(crate) fn set_zn(&mut self, value: u8) {
        self.status.set(Status::ZERO, value == 0);
        self.status.set(Status::NEGATIVE, value & 0x80 != 0);
    }

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag(Status::NEGATIVE)
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag(Status::OVERFLOW)
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flag(Status::BREAK)
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag(Status::DECIMAL)
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag(Status::INTERRUPT_DISABLE)
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag(Status::ZERO)
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag(Status::CARRY)
    }

    // ========== Registers ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC).
    ///
    /// The byte is reported as stored; bit 5 is only forced on by reset,
    /// PLP and RTI.
    pub fn status(&self) -> u8 {
        self.status.bits()
    }

    /// Returns the status register as flags.
    pub fn flags(&self) -> Status {
        self.status
    }

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Replaces the whole status byte, Break and Unused included.
    pub fn set_status(&mut self, value: u8) {
        self.status = Status::from_bits_retain(value);
    }

    /// Ticks left before the current instruction completes. Zero means the
    /// CPU is between instructions.
    pub fn remaining_cycles(&self) -> u32 {
        self.remaining
    }

    /// Total ticks since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // ========== Inspection ==========

    /// Captures the register file.
    pub fn state(&self) -> CpuState {
        CpuState {
            a: self.a,
            x: self.x,
            y: self.y,
            sp: self.sp,
            pc: self.pc,
            status: self.status,
            remaining_cycles: self.remaining,
            cycles: self.cycles,
        }
    }

    /// Restores a register file captured by [`state`](Self::state). Memory is
    /// not part of the snapshot.
    pub fn restore(&mut self, state: &CpuState) {
        self.a = state.a;
        self.x = state.x;
        self.y = state.y;
        self.sp = state.sp;
        self.pc = state.pc;
        self.status = state.status;
        self.remaining = state.remaining_cycles;
        self.cycles = state.cycles;
    }

    /// Disassembles the instruction at `addr` without touching CPU state.
    pub fn disassemble(&self, addr: u16) -> Disassembly {
        disassembler::disassemble(&self.bus, addr)
    }
}

impl<M: MemoryBus> std::fmt::Debug for CPU<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "A:{:02X} X:{:02X} Y:{:02X} SP:{:02X} PC:{:04X} P:{} CYC:{}",
            self.a,
            self.x,
            self.y,
            self.sp,
            self.pc,
            self.status.to_flag_string(),
            self.cycles
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFC, 0x00);
        mem.write(0xFFFD, 0x80);
        mem.load(0x8000, program).unwrap();
        CPU::new(mem)
    }

    #[test]
    fn test_cpu_initialization() {
        let cpu = setup_cpu(&[]);

        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.sp(), 0xFD);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.cycles(), 0);
        assert_eq!(cpu.remaining_cycles(), 0);

        assert!(cpu.flag_i());
        assert!(!cpu.flag_n());
        assert!(!cpu.flag_v());
        assert!(!cpu.flag_b());
        assert!(!cpu.flag_d());
        assert!(!cpu.flag_z());
        assert!(!cpu.flag_c());
        assert_eq!(cpu.status(), 0x24);
    }

    #[test]
    fn test_clock_executes_on_first_tick() {
        // INX
        let mut cpu = setup_cpu(&[0xE8]);

        cpu.clock();
        assert_eq!(cpu.x(), 0x01);
        assert_eq!(cpu.pc(), 0x8001);
        assert_eq!(cpu.remaining_cycles(), 1);

        cpu.clock();
        assert_eq!(cpu.x(), 0x01);
        assert_eq!(cpu.remaining_cycles(), 0);
        assert_eq!(cpu.cycles(), 2);
    }

    #[test]
    fn test_page_cross_penalty_for_loads() {
        // LDX #$01; LDA $12FF,X
        let mut cpu = setup_cpu(&[0xA2, 0x01, 0xBD, 0xFF, 0x12]);
        cpu.step();
        assert_eq!(cpu.step(), 5);
    }

    #[test]
    fn test_no_page_cross_penalty_for_stores() {
        // LDX #$01; STA $12FF,X
        let mut cpu = setup_cpu(&[0xA2, 0x01, 0x9D, 0xFF, 0x12]);
        cpu.step();
        assert_eq!(cpu.step(), 5);
        assert_eq!(OPCODE_TABLE[0x9D].cycles, 5);
    }

    #[test]
    fn test_illegal_opcode_is_one_cycle_nop() {
        let mut cpu = setup_cpu(&[0x02]);
        let before = cpu.state();

        assert_eq!(cpu.step(), 1);
        assert_eq!(cpu.pc(), 0x8001);
        assert_eq!(cpu.a(), before.a);
        assert_eq!(cpu.sp(), before.sp);
        assert_eq!(cpu.status(), before.status.bits());
    }

    #[test]
    fn test_reset_keeps_total_cycles() {
        let mut cpu = setup_cpu(&[0xA9, 0x42]);
        cpu.step();
        cpu.set_sp(0x10);

        cpu.reset();
        assert_eq!(cpu.a(), 0);
        assert_eq!(cpu.sp(), 0xFD);
        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.status(), 0x24);
        assert_eq!(cpu.cycles(), 2);
    }

    #[test]
    fn test_stack_wraps_within_page_one() {
        let mut cpu = setup_cpu(&[]);
        cpu.set_sp(0x00);
        cpu.push(0xAB);
        assert_eq!(cpu.read(0x0100), 0xAB);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.pop(), 0xAB);
        assert_eq!(cpu.sp(), 0x00);
    }

    #[test]
    fn test_word_access_wraps() {
        let mut cpu = setup_cpu(&[]);
        cpu.write16(0xFFFF, 0x1234);
        assert_eq!(cpu.read(0xFFFF), 0x34);
        assert_eq!(cpu.read(0x0000), 0x12);
        assert_eq!(cpu.read16(0xFFFF), 0x1234);
    }

    #[test]
    fn test_state_restore() {
        let mut cpu = setup_cpu(&[0xA9, 0x42]);
        let saved = cpu.state();
        cpu.step();
        assert_ne!(cpu.state(), saved);

        cpu.restore(&saved);
        assert_eq!(cpu.state(), saved);
    }

    #[test]
    fn test_run_for_cycles() {
        // Fill memory with NOP instructions (0xEA, 2 cycles each)
        let mut cpu = setup_cpu(&[0xEA; 0x10]);

        assert_eq!(cpu.run_for_cycles(9), 10);
        assert_eq!(cpu.pc(), 0x8005);
        assert_eq!(cpu.cycles(), 10);
    }

    #[test]
    fn test_debug_format() {
        let cpu = setup_cpu(&[]);
        let text = format!("{:?}", cpu);
        assert_eq!(text, "A:00 X:00 Y:00 SP:FD PC:8000 P:--U--I-- CYC:0");
    }
}
