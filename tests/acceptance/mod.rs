//! Integration tests for S7 address acceptance testing.

mod common;
mod decode_test;
mod device_test;
