//! Decoded addresses driving a simulated device.

use super::common::{device, plan};
use s7_address::{
    AccessRequest, DataType, MemoryAddress, MemoryTransport, RequestError, TransportError,
};

#[test]
fn test_word_roundtrip_through_device() {
    let mut memory = device();
    let request = plan("DB100.DBW8", None);
    memory.write(&request, &[0xBE, 0xEF]).unwrap();

    // The block shorthand addresses byte 0 of the same block
    let first_byte = plan("100", None);
    assert_eq!(memory.read(&first_byte).unwrap(), vec![0]);
    assert_eq!(memory.read(&request).unwrap(), vec![0xBE, 0xEF]);
}

#[test]
fn test_bit_in_data_block_and_outputs() {
    let mut memory = device();

    let flag = plan("DB16.DBX80.3", None);
    memory.write_bit(&flag, true).unwrap();
    assert_eq!(memory.read(&plan("DB16.DBB80", None)).unwrap(), vec![0b0000_1000]);

    // Q and A name the same output bit
    let lamp = plan("A9.1", None);
    memory.write_bit(&lamp, true).unwrap();
    assert!(memory.read_bit(&plan("Q9.1", None)).unwrap());
    assert!(!memory.read_bit(&plan("Q9.0", None)).unwrap());
}

#[test]
fn test_flag_memory_word() {
    let mut memory = device();
    let request = plan("MW180", None);
    memory.write(&request, &[0x01, 0x02]).unwrap();
    assert_eq!(memory.read(&plan("MB181", None)).unwrap(), vec![0x02]);
}

#[test]
fn test_range_checks_belong_to_the_transport() {
    let mut memory = device();
    // Decodes and plans fine; the device is only 64 bytes
    let request = plan("DB100.DBW99999", None);
    assert!(matches!(
        memory.read(&request),
        Err(TransportError::OutOfRange { size: 64, .. })
    ));
}

#[test]
fn test_fixed_width_rejects_other_lengths() {
    let address = "DB100.DBB0".parse().unwrap();
    let err = AccessRequest::for_address(&address, Some(2)).unwrap_err();
    assert!(matches!(err, RequestError::LengthMismatch { expected: 1, .. }));
}

#[test]
fn test_byte_array_dump_of_a_block() {
    let mut memory = device();
    memory
        .write(&plan("DB16.DBW4", None), &[0xCA, 0xFE])
        .unwrap();

    let block: MemoryAddress = "16".parse().unwrap();
    let dump = block.with_data_type(DataType::ByteArray);
    assert_eq!(
        AccessRequest::for_address(&dump, None),
        Err(RequestError::MissingLength(DataType::ByteArray))
    );

    let request = AccessRequest::for_address(&dump, Some(8)).unwrap();
    assert_eq!(
        memory.read(&request).unwrap(),
        vec![0, 0, 0, 0, 0xCA, 0xFE, 0, 0]
    );
}
