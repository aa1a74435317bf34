//! Published known-answer vectors and a runner for them
//!
//! The ISO 18033-2 Annex C vectors for KDF1/KDF2/KDF3 over SHA-1, plus the
//! PKCS#1 MGF1 examples. Each run recomputes the output through the same
//! dispatch the CLI uses and reports a pass/fail outcome per vector.

use isokdf_common::LoggingTransformer;
use isokdf_kdf::{HashAlgorithm, KdfFunction};
use serde::Serialize;

/// One published vector
#[derive(Debug, Clone, Copy)]
pub struct PublishedVector {
    /// Short identifier
    pub name: &'static str,
    /// Function under test
    pub function: KdfFunction,
    /// Hash algorithm
    pub hash: HashAlgorithm,
    /// KDF3 counter width
    pub counter_width: usize,
    /// Input octets, hex encoded
    pub input_hex: &'static str,
    /// Requested output length
    pub length: usize,
    /// Expected output, hex encoded
    pub expected_hex: &'static str,
}

/// Result of checking one vector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VectorOutcome {
    /// Vector identifier
    pub name: String,
    /// Expected output, hex encoded
    pub expected: String,
    /// Computed output, hex encoded, or the error message
    pub actual: String,
    /// Whether `actual` matches `expected`
    pub passed: bool,
}

/// The vectors checked by `isokdf vectors`
pub const PUBLISHED: &[PublishedVector] = &[
    PublishedVector {
        name: "iso18033-kdf1-sha1",
        function: KdfFunction::Kdf1,
        hash: HashAlgorithm::Sha1,
        counter_width: 4,
        input_hex: "deadbeeffeebdaed",
        length: 32,
        expected_hex: "b0ad565b14b478cad4763856ff3016b1a93d840f87261bede7ddf0f9305a6e44",
    },
    PublishedVector {
        name: "iso18033-kdf2-sha1",
        function: KdfFunction::Kdf2,
        hash: HashAlgorithm::Sha1,
        counter_width: 4,
        input_hex: "deadbeeffeebdaed",
        length: 32,
        expected_hex: "87261bede7ddf0f9305a6e44a74e6a0846dede27f48205c6b141888742b0ce2c",
    },
    PublishedVector {
        name: "iso18033-kdf3-sha1",
        function: KdfFunction::Kdf3,
        hash: HashAlgorithm::Sha1,
        counter_width: 4,
        input_hex: "deadbeeffeebdaed",
        length: 32,
        expected_hex: "60cef67059af33f6aebce1e10188f434f80306ac0360470aeb41f81bafb35790",
    },
    PublishedVector {
        name: "pkcs1-mgf1-sha1-empty",
        function: KdfFunction::Mgf1,
        hash: HashAlgorithm::Sha1,
        counter_width: 4,
        input_hex: "",
        length: 0,
        expected_hex: "",
    },
    PublishedVector {
        name: "pkcs1-mgf1-sha1-foo",
        function: KdfFunction::Mgf1,
        hash: HashAlgorithm::Sha1,
        counter_width: 4,
        input_hex: "666f6f",
        length: 3,
        expected_hex: "1ac907",
    },
    PublishedVector {
        name: "pkcs1-mgf1-sha1-bar",
        function: KdfFunction::Mgf1,
        hash: HashAlgorithm::Sha1,
        counter_width: 4,
        input_hex: "626172",
        length: 50,
        expected_hex: "bc0c655e016bc2931d85a2e675181adcef7f581f76df2739da74faac41627be2f7f415c89e983fd0ce80ced9878641cb4876",
    },
];

impl PublishedVector {
    /// Recompute this vector
    #[must_use]
    pub fn run(&self) -> VectorOutcome {
        let actual = hex::decode(self.input_hex)
            .map_err(|e| format!("error: bad input hex: {e}"))
            .and_then(|input| {
                self.function
                    .derive(&input, self.length, self.hash, self.counter_width, None)
                    .map(hex::encode)
                    .map_err(|e| format!("error: {e}"))
            })
            .unwrap_or_else(|message| message);

        let passed = actual == self.expected_hex;
        LoggingTransformer::log_vector_check(self.name, passed);

        VectorOutcome {
            name: self.name.to_string(),
            expected: self.expected_hex.to_string(),
            actual,
            passed,
        }
    }
}

/// Run every published vector
#[must_use]
pub fn run_published() -> Vec<VectorOutcome> {
    PUBLISHED.iter().map(PublishedVector::run).collect()
}
