//! # Processor Status Register
//!
//! Bit layout (NV-BDIZC):
//!
//! | Bit | Flag | Meaning |
//! |-----|------|---------|
//! | 7 | N | Negative |
//! | 6 | V | Overflow |
//! | 5 | - | Unused, reads as 1 after reset and interrupt return |
//! | 4 | B | Break |
//! | 3 | D | Decimal (settable, no effect on arithmetic) |
//! | 2 | I | Interrupt disable |
//! | 1 | Z | Zero |
//! | 0 | C | Carry |

use bitflags::bitflags;

bitflags! {
    /// The 6502 status register.
    ///
    /// Each named constant is also used as the flag selector for
    /// [`CPU::flag`](crate::CPU::flag) and [`CPU::set_flag`](crate::CPU::set_flag).
    ///
    /// ```
    /// use cpu6502::Status;
    ///
    /// let s = Status::from_bits_retain(0x24);
    /// assert!(s.contains(Status::UNUSED | Status::INTERRUPT_DISABLE));
    /// assert!(!s.contains(Status::CARRY));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[repr(transparent)]
    pub struct Status: u8 {
        const CARRY = 1 << 0;
        const ZERO = 1 << 1;
        const INTERRUPT_DISABLE = 1 << 2;
        const DECIMAL = 1 << 3;
        const BREAK = 1 << 4;
        const UNUSED = 1 << 5;
        const OVERFLOW = 1 << 6;
        const NEGATIVE = 1 << 7;
    }
}

impl Status {
    /// Status after power-on or reset: only Unused and Interrupt-Disable set.
    pub const POWER_ON: Status = Status::UNUSED.union(Status::INTERRUPT_DISABLE);

    /// Renders the register as `NV-BDIZC` letters, using `-` for clear flags.
    ///
    /// ```
    /// use cpu6502::Status;
    ///
    /// assert_eq!(Status::POWER_ON.to_flag_string(), "--U--I--");
    /// ```
    pub fn to_flag_string(self) -> String {
        const NAMES: [char; 8] = ['N', 'V', 'U', 'B', 'D', 'I', 'Z', 'C'];
        NAMES
            .iter()
            .enumerate()
            .map(|(i, &name)| {
                if self.bits() & (0x80 >> i) != 0 {
                    name
                } else {
                    '-'
                }
            })
            .collect()
    }
}
