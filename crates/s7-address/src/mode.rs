//! S7 memory regions.
//!
//! The documented S7 addressing table:
//!
//! | Memory type | Description        | Range       | Data type    | Access | Example      |
//! |-------------|--------------------|-------------|--------------|--------|--------------|
//! | I, E        | Inputs             | *           | *            | R/W    | `I3.2`       |
//! | Q, A        | Outputs            | *           | *            | R/W    | `A9.1`       |
//! | PI, PE      | Peripheral inputs  | *           | *            | R      |              |
//! | PQ, PA      | Peripheral outputs | *           | *            | R/W    |              |
//! | M, F        | Flag memory        | *           | *            | R/W    | `MW180`      |
//! | DB          | Data blocks        | *           | *            | R/W    | `DB100.DBW8` |
//! | T           | Timers             | T0..T65535  | Long (DWord) | R/W    |              |
//! | C, Z        | Counters           | C0..C65535  | Short (Word) | R/W    |              |
//!
//! `*` depends on the data type. Only outputs, flag memory, and data blocks
//! have a decoder dialect; the other regions are listed for completeness.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Memory region an address refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AddressingMode {
    /// Not decoded.
    #[default]
    Unknown,
    /// Process image inputs.
    Input,
    /// Process image outputs.
    Output,
    /// Peripheral inputs.
    PeripheralInput,
    /// Peripheral outputs.
    PeripheralOutput,
    /// Flag (marker) memory.
    FlagMemory,
    /// Data blocks.
    DataBlock,
    /// Timers.
    Timer,
    /// Counters.
    Counter,
}

impl AddressingMode {
    /// All regions in declaration order.
    pub const ALL: [AddressingMode; 9] = [
        Self::Unknown,
        Self::Input,
        Self::Output,
        Self::PeripheralInput,
        Self::PeripheralOutput,
        Self::FlagMemory,
        Self::DataBlock,
        Self::Timer,
        Self::Counter,
    ];

    /// Mnemonics used for this region (English first, German second).
    #[must_use]
    pub fn mnemonics(self) -> &'static [&'static str] {
        match self {
            Self::Unknown => &[],
            Self::Input => &["I", "E"],
            Self::Output => &["Q", "A"],
            Self::PeripheralInput => &["PI", "PE"],
            Self::PeripheralOutput => &["PQ", "PA"],
            Self::FlagMemory => &["M", "F"],
            Self::DataBlock => &["DB"],
            Self::Timer => &["T"],
            Self::Counter => &["C", "Z"],
        }
    }

    /// Returns true if the decoder can produce addresses in this region.
    #[must_use]
    pub fn is_decodable(self) -> bool {
        matches!(self, Self::Output | Self::FlagMemory | Self::DataBlock)
    }

    /// Area identifier used by the S7 protocol for this region.
    #[must_use]
    pub fn area_code(self) -> Option<u8> {
        match self {
            Self::Unknown => None,
            Self::PeripheralInput | Self::PeripheralOutput => Some(0x80),
            Self::Input => Some(0x81),
            Self::Output => Some(0x82),
            Self::FlagMemory => Some(0x83),
            Self::DataBlock => Some(0x84),
            Self::Counter => Some(0x1C),
            Self::Timer => Some(0x1D),
        }
    }

    /// Returns true if the region can be read only.
    #[must_use]
    pub fn is_read_only(self) -> bool {
        matches!(self, Self::PeripheralInput)
    }
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "Unknown"),
            Self::Input => write!(f, "Input"),
            Self::Output => write!(f, "Output"),
            Self::PeripheralInput => write!(f, "PeripheralInput"),
            Self::PeripheralOutput => write!(f, "PeripheralOutput"),
            Self::FlagMemory => write!(f, "FlagMemory"),
            Self::DataBlock => write!(f, "DataBlock"),
            Self::Timer => write!(f, "Timer"),
            Self::Counter => write!(f, "Counter"),
        }
    }
}
