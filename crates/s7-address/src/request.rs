//! Access requests handed to a memory transport.
//!
//! An [`AccessRequest`] is the transport-facing form of a
//! [`MemoryAddress`]: protocol area, block, start byte, byte count, and the
//! bit index for single-bit accesses. Strings and byte arrays have no
//! catalog width, so their length must come from the caller.

use crate::address::MemoryAddress;
use crate::data_type::Width;
use crate::error::RequestError;
use crate::mode::AddressingMode;
use serde::Serialize;
use std::fmt;

/// Device-level read/write request derived from a decoded address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AccessRequest {
    /// Addressed region.
    pub region: AddressingMode,
    /// S7 protocol area identifier.
    pub area_code: u8,
    /// Data block number, 0 outside data blocks.
    pub db_number: u16,
    /// First byte of the access.
    pub start: u32,
    /// Number of bytes to transfer.
    pub length: usize,
    /// Bit index for single-bit accesses.
    pub bit: Option<u8>,
}

impl AccessRequest {
    /// Build the request for `address`.
    ///
    /// `explicit_length` is required for variable-width types and, if given
    /// for a fixed-width type, must equal the type width.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] if the region has no protocol area or the
    /// length cannot be determined.
    pub fn for_address(
        address: &MemoryAddress,
        explicit_length: Option<usize>,
    ) -> Result<Self, RequestError> {
        let region = address.region();
        let area_code = region
            .area_code()
            .ok_or(RequestError::UnsupportedRegion(region))?;

        let data_type = address.data_type();
        let length = match (data_type.width(), explicit_length) {
            (Width::Fixed(width), None) => width,
            (Width::Fixed(width), Some(requested)) if requested == width => width,
            (Width::Fixed(width), Some(requested)) => {
                return Err(RequestError::LengthMismatch {
                    data_type,
                    expected: width,
                    requested,
                })
            }
            (Width::Variable, None) => return Err(RequestError::MissingLength(data_type)),
            (Width::Variable, Some(0)) => return Err(RequestError::ZeroLength(data_type)),
            (Width::Variable, Some(requested)) => requested,
        };

        let db_number = if region == AddressingMode::DataBlock {
            address.data_block_number()
        } else {
            0
        };

        Ok(Self {
            region,
            area_code,
            db_number,
            start: address.offset(),
            length,
            bit: address.is_bit_access().then_some(address.bit()),
        })
    }

    /// Exclusive end offset of the access, or `None` if it overflows.
    #[must_use]
    pub fn end(&self) -> Option<usize> {
        (self.start as usize).checked_add(self.length)
    }
}

impl fmt::Display for AccessRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "area=0x{:02X} ({}), DB={}, start={}, length={}",
            self.area_code, self.region, self.db_number, self.start, self.length
        )?;
        if let Some(bit) = self.bit {
            write!(f, ", bit={bit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_type::DataType;
    use crate::decoder::decode;

    fn request(token: &str, length: Option<usize>) -> Result<AccessRequest, RequestError> {
        AccessRequest::for_address(&decode(token).unwrap(), length)
    }

    #[test]
    fn test_data_block_word() {
        let req = request("DB100.DBW8", None).unwrap();
        assert_eq!(req.region, AddressingMode::DataBlock);
        assert_eq!(req.area_code, 0x84);
        assert_eq!(req.db_number, 100);
        assert_eq!(req.start, 8);
        assert_eq!(req.length, 2);
        assert_eq!(req.bit, None);
        assert_eq!(req.end(), Some(10));
    }

    #[test]
    fn test_bit_accesses() {
        let req = request("DB16.DBX80.3", None).unwrap();
        assert_eq!(req.length, 1);
        assert_eq!(req.bit, Some(3));

        let req = request("A9.1", None).unwrap();
        assert_eq!(req.area_code, 0x82);
        assert_eq!(req.db_number, 0);
        assert_eq!(req.start, 9);
        assert_eq!(req.bit, Some(1));
    }

    #[test]
    fn test_flag_memory() {
        let req = request("MW180", None).unwrap();
        assert_eq!(req.area_code, 0x83);
        assert_eq!(req.length, 2);
        assert_eq!(req.db_number, 0);
    }

    #[test]
    fn test_explicit_length_for_fixed_type() {
        assert!(request("MB4", Some(1)).is_ok());
        assert_eq!(
            request("MW4", Some(8)),
            Err(RequestError::LengthMismatch {
                data_type: DataType::Int,
                expected: 2,
                requested: 8,
            })
        );
    }

    #[test]
    fn test_unknown_region() {
        let address = MemoryAddress::default();
        assert_eq!(
            AccessRequest::for_address(&address, None),
            Err(RequestError::UnsupportedRegion(AddressingMode::Unknown))
        );
    }

    #[test]
    fn test_variable_width_needs_length() {
        let address = MemoryAddress::data_block(5, 0, DataType::String, 0);
        assert_eq!(
            AccessRequest::for_address(&address, None),
            Err(RequestError::MissingLength(DataType::String))
        );
        assert_eq!(
            AccessRequest::for_address(&address, Some(0)),
            Err(RequestError::ZeroLength(DataType::String))
        );
        let req = AccessRequest::for_address(&address, Some(32)).unwrap();
        assert_eq!(req.length, 32);
        assert_eq!(req.db_number, 5);
    }

    #[test]
    fn test_end_overflow() {
        let req = AccessRequest {
            length: usize::MAX,
            ..request("DB100.DBB10", None).unwrap()
        };
        assert_eq!(req.end(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            request("DB16.DBX80.3", None).unwrap().to_string(),
            "area=0x84 (DataBlock), DB=16, start=80, length=1, bit=3"
        );
        assert_eq!(
            request("MW180", None).unwrap().to_string(),
            "area=0x83 (FlagMemory), DB=0, start=180, length=2"
        );
    }
}
