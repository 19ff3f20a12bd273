//! Documented address examples and decoder contract.

use s7_address::{decode, is_valid, AddressingMode, DataType, DecodeError, MemoryAddress};

/// Examples from the S7 addressing table.
#[test]
fn test_documented_examples() {
    let address = decode("DB100.DBW8").unwrap();
    assert_eq!(address.region(), AddressingMode::DataBlock);
    assert_eq!(address.data_block_number(), 100);
    assert_eq!(address.offset(), 8);
    assert_eq!(address.data_type(), DataType::Int);
    assert_eq!(address.bit(), 0);

    let address = decode("DB16.DBB25").unwrap();
    assert_eq!(address.data_block_number(), 16);
    assert_eq!(address.offset(), 25);
    assert_eq!(address.data_type(), DataType::BYTE);

    let address = decode("A9.1").unwrap();
    assert_eq!(address.region(), AddressingMode::Output);
    assert_eq!(address.offset(), 9);
    assert_eq!(address.bit(), 1);

    let address = decode("MW180").unwrap();
    assert_eq!(address.region(), AddressingMode::FlagMemory);
    assert_eq!(address.offset(), 180);
    assert_eq!(address.data_type(), DataType::Int);
}

/// Documented regions without a dialect are rejected, not mis-decoded.
#[test]
fn test_documented_but_unsupported() {
    for token in ["I3.2", "E3.2", "PIW256", "PQW256", "T0", "C0", "Z0"] {
        assert_eq!(
            decode(token),
            Err(DecodeError::MalformedAddress {
                token: token.to_string()
            })
        );
        assert!(!is_valid(token));
    }
}

/// Repeated decoding yields equal values; `FromStr` agrees with `decode`.
#[test]
fn test_decode_is_pure() {
    for token in ["DB16.DBX80.3", "Q0.0", "MB3", "7"] {
        let first = decode(token).unwrap();
        let second: MemoryAddress = token.parse().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }
}
