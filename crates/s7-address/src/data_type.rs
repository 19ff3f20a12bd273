//! S7 primitive data types and their storage widths.
//!
//! The four S7 alias names (`Byte`, `Word`, `DWord`, `LWord`) are not
//! separate variants: they are associated constants and name-table entries
//! that resolve to the unsigned integer variant of the same width, so
//! `DataType::BYTE == DataType::USInt` holds structurally.

use crate::error::DataTypeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Primitive PLC data types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DataType {
    /// 1 bit (logical).
    Bit,
    /// 8 bit signed integer.
    SInt,
    /// 16 bit signed integer.
    Int,
    /// 32 bit signed integer.
    DInt,
    /// 64 bit signed integer.
    LInt,
    /// 8 bit unsigned integer (alias `Byte`).
    #[default]
    #[serde(alias = "Byte")]
    USInt,
    /// 16 bit unsigned integer (alias `Word`).
    #[serde(alias = "Word")]
    UInt,
    /// 32 bit unsigned integer (alias `DWord`).
    #[serde(alias = "DWord")]
    UDInt,
    /// 64 bit unsigned integer (alias `LWord`).
    #[serde(alias = "LWord")]
    ULInt,
    /// 32 bit floating point.
    Real,
    /// 64 bit floating point.
    LReal,
    /// 64 bit BCD encoded date and time.
    Datetime,
    /// 64 bit BCD encoded date.
    Date,
    /// Character string; the caller supplies the length.
    String,
    /// Raw byte array; the caller supplies the length.
    ByteArray,
}

/// Storage width of a data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Width {
    /// Fixed number of bytes.
    Fixed(usize),
    /// Length must be supplied by the caller.
    Variable,
}

impl Width {
    /// Byte count for fixed-width types.
    #[must_use]
    pub fn fixed(self) -> Option<usize> {
        match self {
            Self::Fixed(bytes) => Some(bytes),
            Self::Variable => None,
        }
    }

    /// Returns true if the caller has to supply a length.
    #[must_use]
    pub fn is_variable(self) -> bool {
        matches!(self, Self::Variable)
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(bytes) => write!(f, "{bytes}"),
            Self::Variable => write!(f, "variable"),
        }
    }
}

/// Catalog entry describing one canonical data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeInfo {
    /// Canonical type name.
    pub name: &'static str,
    /// The data type itself.
    pub data_type: DataType,
    /// Storage width.
    pub width: Width,
    /// Value range or encoding summary.
    pub description: &'static str,
}

static CATALOG: [TypeInfo; 15] = [
    entry(DataType::Bit, "1 Bit (Logical)"),
    entry(DataType::SInt, "8 Bit Signed Integer (-128...127)"),
    entry(DataType::Int, "16 Bit Signed Integer (-32.768...32.767)"),
    entry(
        DataType::DInt,
        "32 Bit Signed Integer (-2.147.483.648...2.147.483.647)",
    ),
    entry(
        DataType::LInt,
        "64 Bit Signed Integer (-9.223.372.036.854.775.808...9.223.372.036.854.775.807)",
    ),
    entry(DataType::USInt, "8 Bit Unsigned Integer (0...255)"),
    entry(DataType::UInt, "16 Bit Unsigned Integer (0...65.535)"),
    entry(DataType::UDInt, "32 Bit Unsigned Integer (0...4.294.967.295)"),
    entry(
        DataType::ULInt,
        "64 Bit Unsigned Integer (0...18.446.744.073.709.551.615)",
    ),
    entry(DataType::Real, "32 Bit Signed Floating Point (single)"),
    entry(DataType::LReal, "64 Bit Signed Floating Point (double)"),
    entry(DataType::Datetime, "64 Bit BCD Encoded DateTime Value"),
    entry(DataType::Date, "64 Bit BCD Encoded DateTime Value"),
    entry(DataType::String, "String (Length must be supplied)"),
    entry(DataType::ByteArray, "Array of Bytes (Length must be supplied)"),
];

const fn entry(data_type: DataType, description: &'static str) -> TypeInfo {
    TypeInfo {
        name: data_type.name(),
        data_type,
        width: width_of(data_type),
        description,
    }
}

/// Every canonical data type, in catalog order.
#[must_use]
pub fn catalog() -> &'static [TypeInfo] {
    &CATALOG
}

/// Storage width of `data_type` in bytes.
#[must_use]
pub const fn width_of(data_type: DataType) -> Width {
    match data_type {
        DataType::Bit | DataType::SInt | DataType::USInt => Width::Fixed(1),
        DataType::Int | DataType::UInt => Width::Fixed(2),
        DataType::DInt | DataType::UDInt | DataType::Real => Width::Fixed(4),
        DataType::LInt
        | DataType::ULInt
        | DataType::LReal
        | DataType::Datetime
        | DataType::Date => Width::Fixed(8),
        DataType::String | DataType::ByteArray => Width::Variable,
    }
}

impl DataType {
    /// Alias for [`DataType::USInt`].
    pub const BYTE: DataType = DataType::USInt;
    /// Alias for [`DataType::UInt`].
    pub const WORD: DataType = DataType::UInt;
    /// Alias for [`DataType::UDInt`].
    pub const DWORD: DataType = DataType::UDInt;
    /// Alias for [`DataType::ULInt`].
    pub const LWORD: DataType = DataType::ULInt;

    /// All canonical variants.
    pub const ALL: [DataType; 15] = [
        DataType::Bit,
        DataType::SInt,
        DataType::Int,
        DataType::DInt,
        DataType::LInt,
        DataType::USInt,
        DataType::UInt,
        DataType::UDInt,
        DataType::ULInt,
        DataType::Real,
        DataType::LReal,
        DataType::Datetime,
        DataType::Date,
        DataType::String,
        DataType::ByteArray,
    ];

    /// Alias names and the variant each resolves to.
    pub const ALIASES: [(&'static str, DataType); 4] = [
        ("Byte", DataType::USInt),
        ("Word", DataType::UInt),
        ("DWord", DataType::UDInt),
        ("LWord", DataType::ULInt),
    ];

    /// Canonical name of the type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bit => "Bit",
            Self::SInt => "SInt",
            Self::Int => "Int",
            Self::DInt => "DInt",
            Self::LInt => "LInt",
            Self::USInt => "USInt",
            Self::UInt => "UInt",
            Self::UDInt => "UDInt",
            Self::ULInt => "ULInt",
            Self::Real => "Real",
            Self::LReal => "LReal",
            Self::Datetime => "Datetime",
            Self::Date => "Date",
            Self::String => "String",
            Self::ByteArray => "ByteArray",
        }
    }

    /// Storage width of this type.
    #[must_use]
    pub const fn width(self) -> Width {
        width_of(self)
    }

    /// Catalog entry for this type.
    #[must_use]
    pub fn info(self) -> &'static TypeInfo {
        // CATALOG is laid out in declaration order
        &CATALOG[self as usize]
    }

    /// Alias names that resolve to this type.
    pub fn aliases(self) -> impl Iterator<Item = &'static str> {
        Self::ALIASES
            .into_iter()
            .filter(move |(_, target)| *target == self)
            .map(|(alias, _)| alias)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataType {
    type Err = DataTypeError;

    /// Resolve a canonical or alias name. Matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|data_type| data_type.name() == s)
            .or_else(|| {
                Self::ALIASES
                    .into_iter()
                    .find(|(alias, _)| *alias == s)
                    .map(|(_, data_type)| data_type)
            })
            .ok_or_else(|| DataTypeError::UnknownDataType {
                name: s.to_string(),
            })
    }
}
