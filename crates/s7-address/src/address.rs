//! Decoded S7 memory address.

use crate::data_type::DataType;
use crate::decoder::decode;
use crate::error::DecodeError;
use crate::mode::AddressingMode;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Structured result of decoding an address token.
///
/// Values are only built by the decoder; fields are read through accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct MemoryAddress {
    region: AddressingMode,
    data_block: u16,
    offset: u32,
    bit: u8,
    data_type: DataType,
}

impl MemoryAddress {
    /// Byte 0 of data block `number`.
    pub(crate) fn block_shorthand(number: u16) -> Self {
        Self {
            region: AddressingMode::DataBlock,
            data_block: number,
            ..Self::default()
        }
    }

    /// Typed access inside a data block.
    pub(crate) fn data_block(number: u16, offset: u32, data_type: DataType, bit: u8) -> Self {
        debug_assert!(bit < 8);
        Self {
            region: AddressingMode::DataBlock,
            data_block: number,
            offset,
            bit,
            data_type,
        }
    }

    /// Discrete output bit.
    pub(crate) fn output(slot: u32, bit: u8) -> Self {
        debug_assert!(bit < 8);
        Self {
            region: AddressingMode::Output,
            offset: slot,
            bit,
            ..Self::default()
        }
    }

    /// Flag memory byte or word.
    pub(crate) fn flag_memory(offset: u32, data_type: DataType) -> Self {
        Self {
            region: AddressingMode::FlagMemory,
            offset,
            data_type,
            ..Self::default()
        }
    }

    /// The same location accessed as `data_type`.
    ///
    /// Address tokens only carry byte, word, and bit accesses; other types,
    /// including the variable-width `String` and `ByteArray`, are selected
    /// here before building an access request.
    #[must_use]
    pub fn with_data_type(self, data_type: DataType) -> Self {
        Self { data_type, ..self }
    }

    /// Memory region.
    #[must_use]
    pub fn region(&self) -> AddressingMode {
        self.region
    }

    /// Data block number; only meaningful when the region is a data block.
    #[must_use]
    pub fn data_block_number(&self) -> u16 {
        self.data_block
    }

    /// Byte offset, or slot index for discrete outputs.
    #[must_use]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Bit index 0..=7.
    #[must_use]
    pub fn bit(&self) -> u8 {
        self.bit
    }

    /// Data type of the access.
    #[must_use]
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Returns true for single-bit accesses.
    #[must_use]
    pub fn is_bit_access(&self) -> bool {
        self.data_type == DataType::Bit || self.region == AddressingMode::Output
    }
}

impl fmt::Display for MemoryAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.region {
            AddressingMode::FlagMemory => write!(
                f,
                "{}, offset={}, type={}",
                self.region, self.offset, self.data_type
            ),
            AddressingMode::Output => {
                write!(f, "{}, offset={}, bit={}", self.region, self.offset, self.bit)
            }
            _ => write!(
                f,
                "{}, DB={}, offset={}, type={}, bit={}",
                self.region, self.data_block, self.offset, self.data_type, self.bit
            ),
        }
    }
}

impl FromStr for MemoryAddress {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let address = MemoryAddress::default();
        assert_eq!(address.region(), AddressingMode::Unknown);
        assert_eq!(address.data_block_number(), 0);
        assert_eq!(address.offset(), 0);
        assert_eq!(address.bit(), 0);
        assert_eq!(address.data_type(), DataType::BYTE);
    }

    #[test]
    fn test_display_per_region() {
        assert_eq!(
            MemoryAddress::data_block(16, 80, DataType::Bit, 3).to_string(),
            "DataBlock, DB=16, offset=80, type=Bit, bit=3"
        );
        assert_eq!(
            MemoryAddress::flag_memory(180, DataType::Int).to_string(),
            "FlagMemory, offset=180, type=Int"
        );
        assert_eq!(
            MemoryAddress::output(9, 1).to_string(),
            "Output, offset=9, bit=1"
        );
        assert_eq!(
            MemoryAddress::default().to_string(),
            "Unknown, DB=0, offset=0, type=USInt, bit=0"
        );
    }

    #[test]
    fn test_from_str() {
        let address: MemoryAddress = "DB100.DBW8".parse().unwrap();
        assert_eq!(address, MemoryAddress::data_block(100, 8, DataType::Int, 0));
        assert!("DB100".parse::<MemoryAddress>().is_err());
    }

    #[test]
    fn test_bit_access() {
        assert!(MemoryAddress::output(0, 0).is_bit_access());
        assert!(MemoryAddress::data_block(1, 0, DataType::Bit, 7).is_bit_access());
        assert!(!MemoryAddress::flag_memory(1, DataType::BYTE).is_bit_access());
    }

    #[test]
    fn test_with_data_type() {
        let address = decode("5").unwrap().with_data_type(DataType::ByteArray);
        assert_eq!(address.region(), AddressingMode::DataBlock);
        assert_eq!(address.data_block_number(), 5);
        assert_eq!(address.data_type(), DataType::ByteArray);
        assert!(address.data_type().width().is_variable());

        let word = decode("MW4").unwrap().with_data_type(DataType::WORD);
        assert_eq!(word, MemoryAddress::flag_memory(4, DataType::UInt));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(MemoryAddress::flag_memory(180, DataType::Int)).unwrap();
        assert_eq!(json["region"], "FlagMemory");
        assert_eq!(json["offset"], 180);
        assert_eq!(json["data_type"], "Int");
    }
}
