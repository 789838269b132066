//! WebAssembly bindings for the 6502 emulator.
//!
//! This module provides JavaScript-callable interfaces to the CPU core,
//! enabling browser-based stepping and inspection of 6502 programs.

pub mod api;

pub use api::Emulator6502;
