//! Property tests over the counter-mode functions

use isokdf_kdf::{
    CounterMode, CounterPlacement, HashAlgorithm, KdfFunction, derive_with_mode, i2osp, kdf1,
    kdf2, kdf3, mgf1, os2ip,
};
use proptest::prelude::*;

fn any_hash() -> impl Strategy<Value = HashAlgorithm> {
    prop::sample::select(HashAlgorithm::ALL.to_vec())
}

fn any_function() -> impl Strategy<Value = KdfFunction> {
    prop::sample::select(KdfFunction::ALL.to_vec())
}

proptest! {
    #[test]
    fn output_has_requested_length(
        function in any_function(),
        hash in any_hash(),
        input in prop::collection::vec(any::<u8>(), 0..64),
        length in 0usize..300,
    ) {
        let out = function.derive_default(&input, length, hash).unwrap();
        prop_assert_eq!(out.len(), length);
    }

    #[test]
    fn shorter_output_is_prefix_of_longer(
        function in any_function(),
        hash in any_hash(),
        input in prop::collection::vec(any::<u8>(), 0..32),
        short in 0usize..100,
        extra in 0usize..100,
    ) {
        let a = function.derive_default(&input, short, hash).unwrap();
        let b = function.derive_default(&input, short + extra, hash).unwrap();
        prop_assert_eq!(a.as_slice(), &b[..short]);
    }

    #[test]
    fn kdf2_is_kdf1_shifted_by_one_block(
        hash in any_hash(),
        input in prop::collection::vec(any::<u8>(), 0..32),
        blocks in 1usize..5,
    ) {
        let h = hash.output_len();
        let k1 = kdf1(&input, (blocks + 1) * h, hash).unwrap();
        let k2 = kdf2(&input, blocks * h, hash).unwrap();
        prop_assert_eq!(&k1[h..], k2.as_slice());
    }

    #[test]
    fn mgf1_equals_kdf1(
        hash in any_hash(),
        seed in prop::collection::vec(any::<u8>(), 0..48),
        length in 0usize..200,
    ) {
        prop_assert_eq!(mgf1(&seed, length, hash).unwrap(), kdf1(&seed, length, hash).unwrap());
    }

    #[test]
    fn kdf3_matches_prefix_counter_mode(
        hash in any_hash(),
        input in prop::collection::vec(any::<u8>(), 0..32),
        width in 4usize..70,
        length in 0usize..150,
    ) {
        let direct = kdf3(&input, length, hash, width).unwrap();
        let mode = CounterMode { start: 0, width, placement: CounterPlacement::Prefix };
        let engine = derive_with_mode(KdfFunction::Kdf3, &input, length, hash, mode, None).unwrap();
        prop_assert_eq!(direct, engine);
    }

    #[test]
    fn i2osp_os2ip_round_trip(value in any::<u64>(), pad in 0usize..8) {
        let minimal = (64 - value.leading_zeros() as usize).div_ceil(8).max(1);
        let encoded = i2osp(value, minimal + pad).unwrap();
        prop_assert_eq!(encoded.len(), minimal + pad);
        prop_assert_eq!(os2ip(&encoded).unwrap(), value);
    }
}
