//! Tests for finding, inserting, and removing records

use adstore::buffer::slice::SliceBuffer;
use adstore::buffer::stack::StackBuffer;
use adstore::buffer::vec::VecBuffer;
use adstore::buffer::{AdBuffer, AdBufferExt};
use adstore::record::Records;
use adstore::{store, Error};
use adstore_tests::{assert_well_formed, init_logging};

const FLAGS: u8 = 0x01;
const TX_POWER: u8 = 0x0A;
const SERVICE_DATA: u8 = 0x16;
const MANUFACTURER: u8 = 0xFF;

#[test]
fn round_trip() {
    init_logging();

    let mut buffer = StackBuffer::<31>::new();

    store::insert(&mut buffer, FLAGS, &[0x06]).unwrap();
    store::insert(&mut buffer, TX_POWER, &[0xF4]).unwrap();
    store::insert(&mut buffer, MANUFACTURER, &[0x4C, 0x00, 0x02, 0x15]).unwrap();

    assert_eq!(&[0x06], store::get(&buffer, FLAGS).unwrap());
    assert_eq!(&[0xF4], store::get(&buffer, TX_POWER).unwrap());
    assert_eq!(&[0x4C, 0x00, 0x02, 0x15], store::get(&buffer, MANUFACTURER).unwrap());

    let location = store::find(&buffer, MANUFACTURER).unwrap();

    assert_eq!(6, location.offset());
    assert_eq!(8, location.value_offset());
    assert_eq!(4, location.value_len());

    assert_well_formed(&buffer);
}

#[test]
fn idempotent_remove() {
    init_logging();

    let mut buffer = StackBuffer::<31>::try_from_slice(&[2, FLAGS, 0x06, 2, TX_POWER, 0]).unwrap();

    let before = buffer;

    assert_eq!(Err(Error::NotFound), store::remove(&mut buffer, SERVICE_DATA));
    assert_eq!(Err(Error::NotFound), store::remove(&mut buffer, SERVICE_DATA));

    assert_eq!(before, buffer);
}

#[test]
fn compaction() {
    init_logging();

    let a = [3, FLAGS, 0xAA, 0xBB];
    let t = [4, SERVICE_DATA, 1, 2, 3];
    let b = [2, MANUFACTURER, 0xCC];

    let raw = &mut [0u8; 31];

    raw[..4].copy_from_slice(&a);
    raw[4..9].copy_from_slice(&t);
    raw[9..12].copy_from_slice(&b);

    let mut buffer = SliceBuffer::with_len(raw, 12).unwrap();

    store::remove(&mut buffer, SERVICE_DATA).unwrap();

    assert_eq!(12 - t.len(), buffer.len());

    assert_eq!([&a[..], &b[..]].concat(), &*buffer);
}

#[test]
fn uniqueness_after_repeated_inserts() {
    init_logging();

    let mut buffer = VecBuffer::with_max_len(64);

    for value in 0..10u8 {
        store::insert(&mut buffer, SERVICE_DATA, &[value; 3]).unwrap();
        store::insert(&mut buffer, TX_POWER, &[value]).unwrap();
    }

    assert_well_formed(&buffer);

    assert_eq!(2, Records::new(&buffer).count());

    assert_eq!(&[9; 3], store::get(&buffer, SERVICE_DATA).unwrap());
}

#[test]
fn replacement_accounting() {
    init_logging();

    let mut buffer = StackBuffer::<31>::new();

    store::insert(&mut buffer, FLAGS, &[0x06]).unwrap();
    store::insert(&mut buffer, SERVICE_DATA, &[0; 20]).unwrap();

    let before = buffer.len();

    store::insert(&mut buffer, SERVICE_DATA, &[0; 7]).unwrap();

    assert_eq!(before - (20 - 7), buffer.len());

    assert_well_formed(&buffer);
}

#[test]
fn out_of_space_leaves_buffer_unchanged() {
    init_logging();

    let mut buffer = StackBuffer::<31>::new();

    store::insert(&mut buffer, FLAGS, &[0x06]).unwrap();
    store::insert(&mut buffer, SERVICE_DATA, &[0; 10]).unwrap();

    let before = buffer;

    // existing record of 12 bytes plus 16 bytes of tail
    assert_eq!(
        Err(Error::OutOfSpace {
            required: 29,
            available: 28
        }),
        store::insert(&mut buffer, SERVICE_DATA, &[1; 27])
    );

    assert_eq!(before, buffer);

    assert_eq!(
        Err(Error::OutOfSpace {
            required: 17,
            available: 16
        }),
        store::insert(&mut buffer, MANUFACTURER, &[1; 15])
    );

    assert_eq!(before, buffer);

    assert!(buffer.len() <= buffer.capacity());
}

#[test]
fn lower_layer_prefilled_buffer() {
    init_logging();

    // a flags record placed by a lower layer with unused bytes after it
    let raw = &mut [2, FLAGS, 0x06, 0xDE, 0xAD, 0xBE, 0xEF];

    let mut buffer = SliceBuffer::with_len(raw, 3).unwrap();

    store::insert(&mut buffer, TX_POWER, &[0x00]).unwrap();

    assert!(buffer.tail_len() == 1);

    assert_eq!(&[2, FLAGS, 0x06, 2, TX_POWER, 0x00], buffer.into_inner());
}
