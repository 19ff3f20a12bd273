//! Common utilities for acceptance tests.

use s7_address::{decode, AccessRequest, AddressingMode, SimulatedMemory};

/// Decode `token` and plan its access, panicking with context on failure.
pub fn plan(token: &str, length: Option<usize>) -> AccessRequest {
    let address = decode(token).unwrap_or_else(|e| panic!("decode failed for '{token}': {e}"));
    AccessRequest::for_address(&address, length)
        .unwrap_or_else(|e| panic!("request failed for '{token}': {e}"))
}

/// A small device with one data block, flag memory, and an output image.
pub fn device() -> SimulatedMemory {
    SimulatedMemory::new()
        .with_area(AddressingMode::DataBlock, 100, 64)
        .with_area(AddressingMode::DataBlock, 16, 128)
        .with_area(AddressingMode::FlagMemory, 0, 256)
        .with_area(AddressingMode::Output, 0, 10)
}
