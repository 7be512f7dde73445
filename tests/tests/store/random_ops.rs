//! Random sequences of operations compared against a model

use adstore::buffer::stack::StackBuffer;
use adstore::buffer::vec::VecBuffer;
use adstore::buffer::{AdBuffer, AdBufferExt};
use adstore::config::{EXTENDED_MAX_LEN, LEGACY_MAX_LEN};
use adstore::{store, Error, HEADER_SIZE, MAX_VALUE_LEN};
use adstore_tests::{assert_well_formed, init_logging, Model};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A small set of AD types so that collisions are frequent
const AD_TYPES: [u8; 6] = [0x01, 0x03, 0x09, 0x0A, 0x16, 0xFF];

fn run<B: AdBuffer>(buffer: &mut B, seed: u64, iterations: usize, max_value_len: usize) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut model = Model::new(buffer.capacity());

    for _ in 0..iterations {
        let ad_type = AD_TYPES[rng.gen_range(0..AD_TYPES.len())];

        let before = buffer.to_vec();

        if rng.gen_bool(0.7) {
            let value_len = rng.gen_range(0..=max_value_len);

            let value: Vec<u8> = (0..value_len).map(|_| rng.gen()).collect();

            match store::insert(buffer, ad_type, &value) {
                Ok(()) => assert!(model.insert(ad_type, &value)),
                Err(Error::OutOfSpace { required, available }) => {
                    assert_eq!(required, value.len() + HEADER_SIZE);

                    assert!(required > available);

                    assert!(!model.insert(ad_type, &value));

                    assert_eq!(before, buffer.to_vec());
                }
                Err(e) => panic!("unexpected error {e}"),
            }
        } else {
            match store::remove(buffer, ad_type) {
                Ok(()) => assert!(model.remove(ad_type)),
                Err(Error::NotFound) => {
                    assert!(!model.remove(ad_type));

                    assert_eq!(before, buffer.to_vec());
                }
                Err(e) => panic!("unexpected error {e}"),
            }
        }

        assert!(buffer.len() <= buffer.capacity());

        assert_eq!(model.to_bytes(), buffer.to_vec());

        assert_well_formed(buffer);

        for ad_type in AD_TYPES {
            assert_eq!(model.get(ad_type), store::get(buffer, ad_type).ok());
        }
    }
}

#[test]
fn legacy_payload() {
    init_logging();

    for seed in 0..8 {
        run(&mut StackBuffer::<LEGACY_MAX_LEN>::new(), seed, 500, 40);
    }
}

#[test]
fn extended_payload() {
    init_logging();

    for seed in 100..104 {
        run(&mut VecBuffer::with_max_len(EXTENDED_MAX_LEN), seed, 500, MAX_VALUE_LEN);
    }
}

#[test]
fn crowded_extended_payload() {
    init_logging();

    // less room than six full records so that values near the ceiling run out of space
    run(&mut VecBuffer::with_max_len(600), 200, 500, MAX_VALUE_LEN);
}

#[test]
fn tiny_payload() {
    init_logging();

    run(&mut StackBuffer::<3>::new(), 7, 200, 3);
}
