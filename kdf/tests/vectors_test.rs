//! Known-answer tests for every derivation function

use hex_literal::hex;
use isokdf_kdf::{HashAlgorithm, kdf1, kdf2, kdf3, kdf4, mgf1};

const X: [u8; 8] = hex!("deadbeeffeebdaed");

#[test]
fn kdf1_sha1_32() {
    let out = kdf1(&X, 32, HashAlgorithm::Sha1).expect("kdf1 should succeed");
    assert_eq!(
        out,
        hex!("b0ad565b14b478cad4763856ff3016b1a93d840f87261bede7ddf0f9305a6e44")
    );
}

#[test]
fn kdf2_sha1_32() {
    let out = kdf2(&X, 32, HashAlgorithm::Sha1).expect("kdf2 should succeed");
    assert_eq!(
        out,
        hex!("87261bede7ddf0f9305a6e44a74e6a0846dede27f48205c6b141888742b0ce2c")
    );
}

#[test]
fn kdf3_sha1_32_four_octet_counter() {
    let out = kdf3(&X, 32, HashAlgorithm::Sha1, 4).expect("kdf3 should succeed");
    assert_eq!(
        out,
        hex!("60cef67059af33f6aebce1e10188f434f80306ac0360470aeb41f81bafb35790")
    );
}

#[test]
fn kdf1_sha256_48() {
    let out = kdf1(&X, 48, HashAlgorithm::Sha256).expect("kdf1 should succeed");
    assert_eq!(
        out,
        hex!(
            "2a598c866ba1914fbf19f9528c1a676936a1567dd27c51cd3bf4a561c60be610"
            "e2f6a7a149e09e6b151d29fe2b2c099f"
        )
    );
}

#[test]
fn kdf2_sha256_48() {
    let out = kdf2(&X, 48, HashAlgorithm::Sha256).expect("kdf2 should succeed");
    assert_eq!(
        out,
        hex!(
            "e2f6a7a149e09e6b151d29fe2b2c099f9cdbebced9ffc71e1fcd3c2f1947a7bd"
            "569d0a24744a389869a23afe0bdcccd8"
        )
    );
}

#[test]
fn kdf3_sha256_48_default_counter() {
    let out = kdf3(&X, 48, HashAlgorithm::Sha256, 64).expect("kdf3 should succeed");
    assert_eq!(
        out,
        hex!(
            "1458588cf5f1e41ee77ef348d4064857b42352e4f50c9847db1c94ea16f60eee"
            "1f75028d340320bdc75a6f72fed03669"
        )
    );
}

#[test]
fn kdf1_md5_20() {
    let out = kdf1(&X, 20, HashAlgorithm::Md5).expect("kdf1 should succeed");
    assert_eq!(out, hex!("669c3831d750188880e5e2c9515e0a94c78ae430"));
}

#[test]
fn kdf2_sha512_10() {
    let out = kdf2(&X, 10, HashAlgorithm::Sha512).expect("kdf2 should succeed");
    assert_eq!(out, hex!("88dab97781743a25ed47"));
}

#[test]
fn mgf1_sha1_short() {
    let out = mgf1(b"foo", 3, HashAlgorithm::Sha1).expect("mgf1 should succeed");
    assert_eq!(out, hex!("1ac907"));
}

#[test]
fn mgf1_sha1_50() {
    let out = mgf1(b"bar", 50, HashAlgorithm::Sha1).expect("mgf1 should succeed");
    assert_eq!(
        out,
        hex!(
            "bc0c655e016bc2931d85a2e675181adcef7f581f76df2739da74faac41627be2"
            "f7f415c89e983fd0ce80ced9878641cb4876"
        )
    );
}

#[test]
fn mgf1_sha256_50() {
    let out = mgf1(b"bar", 50, HashAlgorithm::Sha256).expect("mgf1 should succeed");
    assert_eq!(
        out,
        hex!(
            "382576a7841021cc28fc4c0948753fb8312090cea942ea4c4e735d10dc724b15"
            "5f9f6069f289d61daca0cb814502ef04eae1"
        )
    );
}

#[test]
fn kdf4_sha256_40() {
    let out = kdf4(&X, 40, HashAlgorithm::Sha256).expect("kdf4 should succeed");
    assert_eq!(
        out,
        hex!("461bcf78b918af3290e2eadc06942df9c60331842ca69ce536ccfdff8970bbd243029b334e8650bf")
    );
}

#[test]
fn kdf4_sha1_16_pads_seed() {
    let out = kdf4(&X, 16, HashAlgorithm::Sha1).expect("kdf4 should succeed");
    assert_eq!(out, hex!("176578bde3b555490ee2f30ba41bc040"));
}

#[test]
fn kdf1_first_block_is_hash_of_input_and_zero_counter() {
    let out = kdf1(b"deadbeef", 20, HashAlgorithm::Sha1).expect("kdf1 should succeed");
    assert_eq!(out, hex!("4bf999cf7ba3d25b92376f3b85fb454986a9684b"));
}

#[test]
fn zero_length_yields_empty_output() {
    for hash in HashAlgorithm::ALL {
        assert!(kdf1(&X, 0, hash).expect("kdf1").is_empty());
        assert!(kdf2(&X, 0, hash).expect("kdf2").is_empty());
        assert!(kdf3(&X, 0, hash, 4).expect("kdf3").is_empty());
        assert!(kdf4(&X, 0, hash).expect("kdf4").is_empty());
        assert!(mgf1(&X, 0, hash).expect("mgf1").is_empty());
    }
}

#[test]
fn empty_input_is_accepted() {
    let out = kdf2(&[], 24, HashAlgorithm::Sha256).expect("empty input should derive");
    assert_eq!(out.len(), 24);
}

#[test]
fn kdf3_places_counter_before_input() {
    let out = kdf3(&X, 40, HashAlgorithm::Sha1, 4).expect("kdf3 should succeed");
    let first = HashAlgorithm::Sha1.digest_parts(&[&[0u8, 0, 0, 0][..], &X[..]]);
    let second = HashAlgorithm::Sha1.digest_parts(&[&[0u8, 0, 0, 1][..], &X[..]]);
    assert_eq!(&out[..20], first.as_bytes());
    assert_eq!(&out[20..], second.as_bytes());
    // Same counters on the other side of `x` give KDF1
    assert_ne!(out, kdf1(&X, 40, HashAlgorithm::Sha1).expect("kdf1 should succeed"));
}

// One block past the last 4-octet counter; rejected before any hashing
#[cfg(target_pointer_width = "64")]
#[test]
fn counter_overflow_fails_before_hashing() {
    use isokdf_kdf::KdfError;

    let h = HashAlgorithm::Sha1.output_len();
    let overflow = KdfError::IntegerTooLarge {
        value: 1 << 32,
        length: 4,
    };

    // KDF2 counts 1..=k, so k = 2^32 already needs a fifth octet
    assert_eq!(kdf2(b"x", (1usize << 32) * h, HashAlgorithm::Sha1), Err(overflow.clone()));
    // KDF1 and KDF3 count from 0 and overflow at k = 2^32 + 1
    assert_eq!(kdf1(b"x", (1usize << 32) * h + 1, HashAlgorithm::Sha1), Err(overflow.clone()));
    assert_eq!(kdf3(b"x", (1usize << 32) * h + 1, HashAlgorithm::Sha1, 4), Err(overflow));
}

#[cfg(target_pointer_width = "64")]
#[test]
fn counter_overflow_emits_plan_but_no_blocks() {
    use isokdf_kdf::{
        CounterMode, DerivationTrace, KdfError, KdfFunction, TraceEvent, derive_with_mode,
    };
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};

    let length = (1usize << 32) * HashAlgorithm::Sha1.output_len() + 1;
    let planned = Arc::new(AtomicU64::new(0));
    let hashed = Arc::new(AtomicU64::new(0));
    let (plan_sink, block_sink) = (Arc::clone(&planned), Arc::clone(&hashed));
    let trace: DerivationTrace = Arc::new(move |event: &TraceEvent| match *event {
        TraceEvent::Plan { blocks, .. } => plan_sink.store(blocks, Ordering::Relaxed),
        TraceEvent::Block { .. } => {
            block_sink.fetch_add(1, Ordering::Relaxed);
        }
    });

    let result = derive_with_mode(
        KdfFunction::Kdf3,
        b"x",
        length,
        HashAlgorithm::Sha1,
        CounterMode::kdf3(4),
        Some(&trace),
    );
    assert!(matches!(result, Err(KdfError::IntegerTooLarge { length: 4, .. })));
    assert_eq!(planned.load(Ordering::Relaxed), (1 << 32) + 1);
    assert_eq!(hashed.load(Ordering::Relaxed), 0);
}
