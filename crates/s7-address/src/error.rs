use crate::data_type::DataType;
use crate::mode::AddressingMode;
use thiserror::Error;

/// Failure to decode a textual S7 address.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The token matched none of the supported address dialects.
    #[error("unknown PLC address format ({token})")]
    MalformedAddress {
        /// The offending token, verbatim.
        token: String,
    },
}

/// Convenience type alias for decoder results.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Failure to resolve a data type name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataTypeError {
    /// The name is neither a canonical type name nor an alias.
    #[error("unknown data type: {name}")]
    UnknownDataType {
        /// The rejected name.
        name: String,
    },
}

/// Failure to turn a decoded address into an access request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The address refers to a region with no protocol area.
    #[error("region {0} cannot be accessed")]
    UnsupportedRegion(AddressingMode),

    /// A variable-width type was requested without a length.
    #[error("{0} has no fixed width, an explicit length is required")]
    MissingLength(DataType),

    /// A variable-width type was requested with a zero length.
    #[error("{0} access requires a non-zero length")]
    ZeroLength(DataType),

    /// The explicit length disagrees with the fixed type width.
    #[error("{data_type} is {expected} byte(s) wide, but {requested} were requested")]
    LengthMismatch {
        /// Data type of the address.
        data_type: DataType,
        /// Catalog width of the type.
        expected: usize,
        /// Length the caller asked for.
        requested: usize,
    },
}

/// Failure reported by a memory transport.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// No memory image exists for the addressed area.
    #[error("no memory area {region} (DB {db_number})")]
    UnknownArea {
        /// Addressed region.
        region: AddressingMode,
        /// Data block number, 0 outside data blocks.
        db_number: u16,
    },

    /// The access runs past the end of the area.
    #[error("access {start}..{end} exceeds area size {size}")]
    OutOfRange {
        /// First byte of the access.
        start: usize,
        /// Exclusive end of the access.
        end: usize,
        /// Size of the area in bytes.
        size: usize,
    },

    /// Bit index outside 0..=7.
    #[error("bit index {bit} is out of range (0..=7)")]
    InvalidBit {
        /// Requested bit index.
        bit: u8,
    },

    /// Write payload does not match the request length.
    #[error("write payload is {actual} byte(s), request expects {expected}")]
    LengthMismatch {
        /// Request length.
        expected: usize,
        /// Payload length.
        actual: usize,
    },
}

/// Convenience type alias for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;
