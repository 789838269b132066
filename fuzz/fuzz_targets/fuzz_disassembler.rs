//! Fuzz target for the disassembler.
//!
//! Places arbitrary bytes anywhere in memory and disassembles a listing from
//! an arbitrary address to find edge cases in instruction decoding.

#![no_main]

use arbitrary::Arbitrary;
use cpu6502::{disassembler, FlatMemory, MemoryBus};
use libfuzzer_sys::fuzz_target;

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    load_address: u16,
    start_address: u16,
    count: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();
    for (i, &byte) in input.bytes.iter().take(0x1_0000).enumerate() {
        memory.write(input.load_address.wrapping_add(i as u16), byte);
    }

    let lines = disassembler::listing(&memory, input.start_address, input.count as usize);

    let mut expected_address = input.start_address;
    for line in &lines {
        assert_eq!(line.address, expected_address);
        assert!((1..=3).contains(&line.size()));
        assert_eq!(line.bytes.len(), line.size() as usize);
        assert!(line.text.ends_with('}'));

        // Idempotent: decoding again yields the same line
        assert_eq!(&disassembler::disassemble(&memory, line.address), line);

        expected_address = line.next_address();
    }
});
