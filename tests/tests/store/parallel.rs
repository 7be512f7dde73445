//! Independent buffers used from multiple threads

use adstore::buffer::stack::StackBuffer;
use adstore::{name, store, NameKind};
use adstore_tests::{assert_well_formed, init_logging};
use std::sync::{Arc, Mutex};
use std::thread;

#[test]
fn independent_buffers() {
    init_logging();

    let handles: Vec<_> = (0..8u8)
        .map(|id| {
            thread::spawn(move || {
                let mut buffer = StackBuffer::<31>::new();

                for round in 0..100u8 {
                    store::insert(&mut buffer, 0xFF, &[id, round]).unwrap();

                    name::set_name_str(&mut buffer, &format!("device {id}"), 0).unwrap();
                }

                buffer
            })
        })
        .collect();

    for (id, handle) in handles.into_iter().enumerate() {
        let buffer = handle.join().unwrap();

        assert_well_formed(&buffer);

        assert_eq!(&[id as u8, 99], store::get(&buffer, 0xFF).unwrap());

        assert_eq!(
            (NameKind::Complete, format!("device {id}").as_bytes()),
            name::get_name(&buffer).unwrap()
        );
    }
}

#[test]
fn shared_buffer_behind_mutex() {
    init_logging();

    let shared = Arc::new(Mutex::new(StackBuffer::<31>::new()));

    let handles: Vec<_> = [0x01u8, 0x0A, 0x16, 0xFF]
        .into_iter()
        .map(|ad_type| {
            let shared = shared.clone();

            thread::spawn(move || {
                for round in 0..50u8 {
                    let mut buffer = shared.lock().unwrap();

                    store::insert(&mut *buffer, ad_type, &[round; 3]).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let buffer = shared.lock().unwrap();

    assert_well_formed(&buffer);

    assert_eq!(20, buffer.len());

    for ad_type in [0x01u8, 0x0A, 0x16, 0xFF] {
        assert_eq!(&[49; 3], store::get(&*buffer, ad_type).unwrap());
    }
}
