//! Address decoder for the supported S7 dialects.
//!
//! Each [`Dialect`] owns one rule of the `address.pest` grammar. A token is
//! offered to the dialects in [`Dialect::ALL`] order and the first structural
//! match wins; the shapes do not overlap, the order only keeps the outcome
//! deterministic. Adding a dialect means one grammar rule, one variant, and
//! one match arm.
//!
//! The decoder trims nothing and normalises nothing: size tags are
//! case-sensitive and surrounding whitespace is a non-match.

use crate::address::MemoryAddress;
use crate::data_type::DataType;
use crate::error::{DecodeError, DecodeResult};
use grammar::{AddressGrammar, Rule};
use pest::iterators::Pair;
use pest::Parser;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

mod grammar {
    use pest_derive::Parser;

    #[derive(Parser)]
    #[grammar = "address.pest"]
    pub(super) struct AddressGrammar;
}

/// One of the textual address grammars the decoder recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Dialect {
    /// Bare data block number, e.g. `100`.
    BlockShorthand,
    /// Data block access, e.g. `DB100.DBW8` or `DB16.DBX80.3`.
    DataBlock,
    /// Discrete output bit, e.g. `A9.1` or `Q0.7`.
    Output,
    /// Flag memory byte or word, e.g. `MW180`.
    FlagMemory,
}

impl Dialect {
    /// Dialects in the order the decoder tries them.
    pub const ALL: [Dialect; 4] = [
        Self::BlockShorthand,
        Self::DataBlock,
        Self::Output,
        Self::FlagMemory,
    ];

    fn rule(self) -> Rule {
        match self {
            Self::BlockShorthand => Rule::block_shorthand,
            Self::DataBlock => Rule::data_block,
            Self::Output => Rule::output,
            Self::FlagMemory => Rule::flag_memory,
        }
    }

    /// Decode `token` with this dialect only.
    ///
    /// Returns `None` when the token does not have this dialect's shape.
    #[must_use]
    pub fn recognize(self, token: &str) -> Option<MemoryAddress> {
        let pair = AddressGrammar::parse(self.rule(), token).ok()?.next()?;
        match self {
            Self::BlockShorthand => block_shorthand(pair),
            Self::DataBlock => data_block(pair),
            Self::Output => output(pair),
            Self::FlagMemory => flag_memory(pair),
        }
    }

    /// Example token for this dialect.
    #[must_use]
    pub fn example(self) -> &'static str {
        match self {
            Self::BlockShorthand => "100",
            Self::DataBlock => "DB100.DBW8",
            Self::Output => "A9.1",
            Self::FlagMemory => "MW180",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlockShorthand => write!(f, "block shorthand"),
            Self::DataBlock => write!(f, "data block"),
            Self::Output => write!(f, "output"),
            Self::FlagMemory => write!(f, "flag memory"),
        }
    }
}

/// Decode an S7 address token.
///
/// # Errors
///
/// Returns [`DecodeError::MalformedAddress`] carrying the token verbatim if
/// no dialect matches.
///
/// # Example
///
/// ```
/// use s7_address::{decode, AddressingMode, DataType};
///
/// let address = decode("DB100.DBW8").unwrap();
/// assert_eq!(address.region(), AddressingMode::DataBlock);
/// assert_eq!(address.data_block_number(), 100);
/// assert_eq!(address.offset(), 8);
/// assert_eq!(address.data_type(), DataType::Int);
/// ```
pub fn decode(token: &str) -> DecodeResult<MemoryAddress> {
    decode_with_dialect(token).map(|(_, address)| address)
}

/// Decode `token` and report which dialect matched.
///
/// # Errors
///
/// Returns [`DecodeError::MalformedAddress`] if no dialect matches.
pub fn decode_with_dialect(token: &str) -> DecodeResult<(Dialect, MemoryAddress)> {
    Dialect::ALL
        .into_iter()
        .find_map(|dialect| dialect.recognize(token).map(|address| (dialect, address)))
        .ok_or_else(|| DecodeError::MalformedAddress {
            token: token.to_string(),
        })
}

/// Dialect that `token` belongs to, if any.
#[must_use]
pub fn classify(token: &str) -> Option<Dialect> {
    decode_with_dialect(token).ok().map(|(dialect, _)| dialect)
}

/// Returns true if `token` decodes.
///
/// Callers that need the failure reason should call [`decode`].
#[must_use]
pub fn is_valid(token: &str) -> bool {
    decode(token).is_ok()
}

fn number<T: FromStr>(pair: &Pair<'_, Rule>) -> Option<T> {
    pair.as_str().parse().ok()
}

fn size_tag(rule: Rule) -> Option<DataType> {
    match rule {
        Rule::byte_tag => Some(DataType::BYTE),
        Rule::word_tag => Some(DataType::Int),
        Rule::bit_tag => Some(DataType::Bit),
        _ => None,
    }
}

fn block_shorthand(pair: Pair<'_, Rule>) -> Option<MemoryAddress> {
    let digits = pair
        .into_inner()
        .find(|inner| inner.as_rule() == Rule::block_number)?;
    Some(MemoryAddress::block_shorthand(number(&digits)?))
}

fn data_block(pair: Pair<'_, Rule>) -> Option<MemoryAddress> {
    let mut block = None;
    let mut data_type = None;
    let mut offset = None;
    let mut bit = 0;

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::db_number => block = number(&inner),
            Rule::byte_tag | Rule::word_tag | Rule::bit_tag => {
                data_type = size_tag(inner.as_rule());
            }
            Rule::db_offset => offset = number(&inner),
            Rule::bit_index => bit = number(&inner)?,
            _ => {}
        }
    }

    Some(MemoryAddress::data_block(block?, offset?, data_type?, bit))
}

fn output(pair: Pair<'_, Rule>) -> Option<MemoryAddress> {
    let mut slot = None;
    let mut bit = None;

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::output_slot => slot = number(&inner),
            Rule::bit_index => bit = number(&inner),
            _ => {}
        }
    }

    Some(MemoryAddress::output(slot?, bit?))
}

fn flag_memory(pair: Pair<'_, Rule>) -> Option<MemoryAddress> {
    let mut data_type = None;
    let mut offset = None;

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::byte_tag | Rule::word_tag => data_type = size_tag(inner.as_rule()),
            Rule::flag_offset => offset = number(&inner),
            _ => {}
        }
    }

    Some(MemoryAddress::flag_memory(offset?, data_type?))
}
