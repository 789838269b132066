//! # Memory Bus Abstraction
//!
//! The CPU reaches memory only through the [`MemoryBus`] trait. The core never
//! routes addresses to devices or distinguishes ROM from RAM; that belongs to
//! whatever implements the trait.
//!
//! [`FlatMemory`] is the minimal backend: all 65536 addresses map to one
//! zero-initialised array.

use crate::{MemoryError, RESET_VECTOR};

/// Byte-wide access to the 64KiB address space.
///
/// Reads and writes must succeed for every address. The 6502 has no bus error
/// mechanism, so neither does this trait.
///
/// # Examples
///
/// ```
/// use cpu6502::{FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use cpu6502::MemoryBus;
///
/// struct MirroredRam {
///     ram: [u8; 0x0800],
/// }
///
/// impl MemoryBus for MirroredRam {
///     fn read(&self, addr: u16) -> u8 {
///         self.ram[(addr & 0x07FF) as usize]
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         self.ram[(addr & 0x07FF) as usize] = value;
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    fn write(&mut self, addr: u16, value: u8);
}

/// Lets a CPU borrow a bus that the caller keeps owning.
///
/// ```
/// use cpu6502::{FlatMemory, MemoryBus, CPU};
///
/// let mut mem = FlatMemory::with_program(0x8000, &[0xA9, 0x07, 0x85, 0x10]).unwrap();
/// {
///     let mut cpu = CPU::new(&mut mem);
///     cpu.step();
///     cpu.step();
/// }
/// assert_eq!(mem.read(0x0010), 0x07);
/// ```
impl<B: MemoryBus + ?Sized> MemoryBus for &mut B {
    fn read(&self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value);
    }
}

impl<B: MemoryBus + ?Sized> MemoryBus for Box<B> {
    fn read(&self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value);
    }
}

/// Size of the 6502 address space in bytes.
pub const ADDRESS_SPACE: usize = 0x1_0000;

/// Simple 64KB flat memory implementation.
///
/// All addresses (0x0000-0xFFFF) are writable RAM initialized to 0x00.
///
/// # Examples
///
/// ```
/// use cpu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
#[derive(Clone)]
pub struct FlatMemory {
    data: Box<[u8; ADDRESS_SPACE]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; ADDRESS_SPACE]),
        }
    }

    /// Creates memory holding `image` at `start`, with the reset vector
    /// pointing at `start`.
    ///
    /// The vector is written after the image, so an image that reaches
    /// 0xFFFC-0xFFFD has those two bytes replaced.
    pub fn with_program(start: u16, image: &[u8]) -> Result<Self, MemoryError> {
        let mut mem = Self::new();
        mem.load(start, image)?;
        let [lo, hi] = start.to_le_bytes();
        mem.write(RESET_VECTOR, lo);
        mem.write(RESET_VECTOR + 1, hi);
        Ok(mem)
    }

    /// Copies `image` into memory starting at `start`.
    ///
    /// Fails without writing anything if the image would run past 0xFFFF.
    ///
    /// ```
    /// use cpu6502::{FlatMemory, MemoryBus, MemoryError};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0x0200, &[0xEA, 0xEA]).unwrap();
    /// assert_eq!(mem.read(0x0201), 0xEA);
    ///
    /// let err = mem.load(0xFFFF, &[0x01, 0x02]).unwrap_err();
    /// assert_eq!(err, MemoryError::ImageTooLarge { start: 0xFFFF, len: 2 });
    /// ```
    pub fn load(&mut self, start: u16, image: &[u8]) -> Result<(), MemoryError> {
        let begin = start as usize;
        let end = begin + image.len();
        if end > ADDRESS_SPACE {
            return Err(MemoryError::ImageTooLarge {
                start,
                len: image.len(),
            });
        }
        self.data[begin..end].copy_from_slice(image);
        Ok(())
    }

    /// Returns the 256 bytes of the page whose high byte is `page`.
    pub fn page(&self, page: u8) -> &[u8] {
        let begin = (page as usize) << 8;
        &self.data[begin..begin + 0x100]
    }

    /// Returns the whole address space as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.data.iter().filter(|&&b| b != 0).count();
        f.debug_struct("FlatMemory")
            .field("nonzero_bytes", &used)
            .finish()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_memory_read_write() {
        let mut mem = FlatMemory::new();

        assert_eq!(mem.read(0x0000), 0x00);
        assert_eq!(mem.read(0xFFFF), 0x00);

        mem.write(0x1234, 0x42);
        assert_eq!(mem.read(0x1234), 0x42);

        // Neighbours untouched
        assert_eq!(mem.read(0x1233), 0x00);
        assert_eq!(mem.read(0x1235), 0x00);
    }

    #[test]
    fn test_flat_memory_full_range() {
        let mut mem = FlatMemory::new();

        mem.write(0x0000, 0x01);
        mem.write(0x7FFF, 0x7F);
        mem.write(0x8000, 0x80);
        mem.write(0xFFFF, 0xFF);

        assert_eq!(mem.read(0x0000), 0x01);
        assert_eq!(mem.read(0x7FFF), 0x7F);
        assert_eq!(mem.read(0x8000), 0x80);
        assert_eq!(mem.read(0xFFFF), 0xFF);
    }

    #[test]
    fn test_load_up_to_last_byte() {
        let mut mem = FlatMemory::new();
        mem.load(0xFFFE, &[0xAA, 0xBB]).unwrap();
        assert_eq!(mem.read(0xFFFE), 0xAA);
        assert_eq!(mem.read(0xFFFF), 0xBB);
    }

    #[test]
    fn test_load_overflow_writes_nothing() {
        let mut mem = FlatMemory::new();
        let result = mem.load(0xFFF0, &[0x11; 0x20]);
        assert_eq!(
            result,
            Err(MemoryError::ImageTooLarge {
                start: 0xFFF0,
                len: 0x20
            })
        );
        assert!(mem.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_with_program_sets_reset_vector() {
        let mem = FlatMemory::with_program(0xC000, &[0xEA]).unwrap();
        assert_eq!(mem.read(0xFFFC), 0x00);
        assert_eq!(mem.read(0xFFFD), 0xC0);
        assert_eq!(mem.read(0xC000), 0xEA);
    }

    #[test]
    fn test_page_slice() {
        let mut mem = FlatMemory::new();
        mem.write(0x01FF, 0x99);
        let page = mem.page(0x01);
        assert_eq!(page.len(), 256);
        assert_eq!(page[0xFF], 0x99);
    }
}
