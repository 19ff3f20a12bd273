//! Memory transport abstraction.
//!
//! This module provides:
//! - [`MemoryTransport`] trait implemented by device connections
//! - [`SimulatedMemory`] in-memory implementation for testing and dry runs
//!
//! Range checking is the transport's job: the decoder accepts any offset its
//! grammar allows, and it is the transport that knows how large an area is.

use crate::error::{TransportError, TransportResult};
use crate::mode::AddressingMode;
use crate::request::AccessRequest;
use std::collections::HashMap;
use tracing::{debug, trace};

/// Byte-level access to a device's memory map.
pub trait MemoryTransport: Send {
    /// Read `request.length` bytes starting at `request.start`.
    fn read(&mut self, request: &AccessRequest) -> TransportResult<Vec<u8>>;

    /// Write `data` to the addressed range.
    ///
    /// `data.len()` must equal `request.length`.
    fn write(&mut self, request: &AccessRequest, data: &[u8]) -> TransportResult<()>;

    /// Read a single bit. Non-bit requests read bit 0 of the first byte.
    fn read_bit(&mut self, request: &AccessRequest) -> TransportResult<bool> {
        let mask = bit_mask(request)?;
        let bytes = self.read(request)?;
        Ok(bytes.first().is_some_and(|byte| byte & mask != 0))
    }

    /// Set or clear a single bit, leaving the rest of the byte untouched.
    fn write_bit(&mut self, request: &AccessRequest, value: bool) -> TransportResult<()> {
        let mask = bit_mask(request)?;
        let mut bytes = self.read(request)?;
        if let Some(byte) = bytes.first_mut() {
            if value {
                *byte |= mask;
            } else {
                *byte &= !mask;
            }
        }
        self.write(request, &bytes)
    }
}

fn bit_mask(request: &AccessRequest) -> TransportResult<u8> {
    match request.bit.unwrap_or(0) {
        bit @ 0..=7 => Ok(1 << bit),
        bit => Err(TransportError::InvalidBit { bit }),
    }
}

/// In-memory transport holding one byte image per area.
#[derive(Debug, Default)]
pub struct SimulatedMemory {
    areas: HashMap<(AddressingMode, u16), Vec<u8>>,
}

impl SimulatedMemory {
    /// Create an empty simulated device.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a zeroed area of `size` bytes.
    ///
    /// `db_number` is ignored outside data blocks.
    #[must_use]
    pub fn with_area(mut self, region: AddressingMode, db_number: u16, size: usize) -> Self {
        self.areas
            .insert(Self::key(region, db_number), vec![0; size]);
        self
    }

    /// Raw contents of an area (for testing).
    #[must_use]
    pub fn area(&self, region: AddressingMode, db_number: u16) -> Option<&[u8]> {
        self.areas
            .get(&Self::key(region, db_number))
            .map(Vec::as_slice)
    }

    fn key(region: AddressingMode, db_number: u16) -> (AddressingMode, u16) {
        if region == AddressingMode::DataBlock {
            (region, db_number)
        } else {
            (region, 0)
        }
    }

    fn range(&mut self, request: &AccessRequest) -> TransportResult<&mut [u8]> {
        let area = self
            .areas
            .get_mut(&Self::key(request.region, request.db_number))
            .ok_or(TransportError::UnknownArea {
                region: request.region,
                db_number: request.db_number,
            })?;

        let start = request.start as usize;
        // An overflowing end is past any area.
        let end = request.end().unwrap_or(usize::MAX);
        if end > area.len() {
            return Err(TransportError::OutOfRange {
                start,
                end,
                size: area.len(),
            });
        }
        Ok(&mut area[start..end])
    }
}

impl MemoryTransport for SimulatedMemory {
    fn read(&mut self, request: &AccessRequest) -> TransportResult<Vec<u8>> {
        let bytes = self.range(request)?.to_vec();
        debug!(%request, "Simulated read");
        trace!(?bytes, "Simulated read data");
        Ok(bytes)
    }

    fn write(&mut self, request: &AccessRequest, data: &[u8]) -> TransportResult<()> {
        if data.len() != request.length {
            return Err(TransportError::LengthMismatch {
                expected: request.length,
                actual: data.len(),
            });
        }
        self.range(request)?.copy_from_slice(data);
        debug!(%request, "Simulated write");
        Ok(())
    }
}
