//! S7 symbolic address decoding.
//!
//! This crate provides:
//! - [`data_type`] - S7 data types, aliases, and the width catalog
//! - [`mode`] - memory regions of the S7 addressing table
//! - [`address`] - the decoded [`MemoryAddress`] value
//! - [`decoder`] - the address dialects, [`decode`], and [`is_valid`]
//! - [`request`] - transport-facing [`AccessRequest`]s
//! - [`transport`] - the [`MemoryTransport`] seam and [`SimulatedMemory`]
//! - [`config`] - TOML tool configuration
//!
//! # Example
//!
//! ```
//! use s7_address::{decode, is_valid, AccessRequest, AddressingMode};
//!
//! let address = decode("DB16.DBX80.3").unwrap();
//! assert_eq!(address.region(), AddressingMode::DataBlock);
//! assert_eq!(address.bit(), 3);
//!
//! let request = AccessRequest::for_address(&address, None).unwrap();
//! assert_eq!(request.length, 1);
//!
//! assert!(is_valid("MW180"));
//! assert!(!is_valid("mw180"));
//! ```

pub mod address;
pub mod config;
pub mod data_type;
pub mod decoder;
pub mod error;
pub mod mode;
pub mod request;
pub mod transport;

pub use address::MemoryAddress;
pub use config::{ConfigError, OutputFormat, ToolConfig};
pub use data_type::{catalog, width_of, DataType, TypeInfo, Width};
pub use decoder::{classify, decode, decode_with_dialect, is_valid, Dialect};
pub use error::*;
pub use mode::AddressingMode;
pub use request::AccessRequest;
pub use transport::{MemoryTransport, SimulatedMemory};
