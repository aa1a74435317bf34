//! Configuration parsing, presets and validation

use isokdf_common::ErrorKind;
use isokdf_hashing::HashError;
use isokdf_kdf::{
    DEFAULT_KDF3_COUNTER_WIDTH, DerivationConfig, HashAlgorithm, KdfBuilder, KdfError,
    KdfFunction,
};

#[test]
fn defaults() {
    let config = DerivationConfig::default();
    assert_eq!(config.function, KdfFunction::Kdf2);
    assert_eq!(config.hash, HashAlgorithm::Sha1);
    assert_eq!(config.counter_width, DEFAULT_KDF3_COUNTER_WIDTH);
    assert_eq!(config.length, 32);
    assert_eq!(config.validate().expect("defaults are valid"), 32);
}

#[test]
fn presets() {
    assert_eq!(DerivationConfig::iso18033_kdf1().function, KdfFunction::Kdf1);
    assert_eq!(DerivationConfig::iso18033_kdf2().function, KdfFunction::Kdf2);
    assert_eq!(DerivationConfig::iso18033_kdf3().function, KdfFunction::Kdf3);

    let mgf = DerivationConfig::pkcs1_mgf1();
    assert_eq!(mgf.function, KdfFunction::Mgf1);
    assert_eq!(mgf.hash, HashAlgorithm::Sha256);
}

#[test]
fn parse_full_document() {
    let config = DerivationConfig::from_json_str(
        r#"{"function": "kdf3", "hash": "SHA-256", "counter_width": 4, "length": 48}"#,
    )
    .expect("valid config");
    assert_eq!(config.function, KdfFunction::Kdf3);
    assert_eq!(config.hash, HashAlgorithm::Sha256);
    assert_eq!(config.counter_width, 4);
    assert_eq!(config.validate().expect("valid"), 48);
}

#[test]
fn parse_partial_document_fills_defaults() {
    let config = DerivationConfig::from_json_str(r#"{"function": "mgf1"}"#).expect("valid");
    assert_eq!(config.function, KdfFunction::Mgf1);
    assert_eq!(config.hash, HashAlgorithm::Sha1);
    assert_eq!(config.length, 32);
}

#[test]
fn unknown_hash_is_unsupported_algorithm() {
    let err = DerivationConfig::from_json_str(r#"{"hash": "whirlpool"}"#).expect_err("unknown hash");
    assert_eq!(err, KdfError::UnsupportedAlgorithm("whirlpool".to_string()));
    assert_eq!(err.kind(), ErrorKind::UnsupportedAlgorithm);
}

#[test]
fn hash_errors_keep_their_identifier_and_kind() {
    let hash_err = HashError::unsupported("blake3");
    let err = KdfError::from(hash_err.clone());
    assert_eq!(err, KdfError::UnsupportedAlgorithm("blake3".to_string()));
    assert_eq!(err.kind(), hash_err.kind());
}

#[test]
fn unknown_function_and_fields_are_config_errors() {
    let err = DerivationConfig::from_json_str(r#"{"function": "kdf9"}"#).expect_err("unknown function");
    assert_eq!(err.kind(), ErrorKind::Configuration);

    let err = DerivationConfig::from_json_str(r#"{"lenght": 5}"#).expect_err("typo");
    assert!(matches!(err, KdfError::InvalidConfig(_)));

    let err = DerivationConfig::from_json_str("not json").expect_err("malformed");
    assert!(matches!(err, KdfError::InvalidConfig(_)));
}

#[test]
fn negative_length_fails_validation() {
    let config = DerivationConfig::from_json_str(r#"{"length": -5}"#).expect("parses");
    assert_eq!(
        config.validate(),
        Err(KdfError::InvalidLength { requested: -5 })
    );
}

#[test]
fn narrow_kdf3_counter_fails_validation() {
    let config = DerivationConfig {
        function: KdfFunction::Kdf3,
        counter_width: 2,
        ..DerivationConfig::default()
    };
    assert_eq!(
        config.validate(),
        Err(KdfError::CounterWidthTooSmall { width: 2, minimum: 4 })
    );

    // Other functions ignore the width
    let config = DerivationConfig {
        function: KdfFunction::Kdf1,
        counter_width: 2,
        ..DerivationConfig::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn json_round_trip() {
    let config = DerivationConfig::pkcs1_mgf1();
    let json = config.to_json().expect("serializes");
    assert!(json.contains("\"mgf1\""));
    assert!(json.contains("\"sha256\""));
    assert_eq!(DerivationConfig::from_json_str(&json).expect("parses"), config);
}

#[test]
fn from_path_reads_file() {
    let path = std::env::temp_dir().join(format!("isokdf-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"function": "kdf1", "length": 16}"#).expect("write temp config");
    let config = DerivationConfig::from_path(&path);
    let _ = std::fs::remove_file(&path);

    let config = config.expect("reads");
    assert_eq!(config.function, KdfFunction::Kdf1);
    assert_eq!(config.length, 16);

    let err = DerivationConfig::from_path("/nonexistent/isokdf.json").expect_err("missing file");
    assert!(matches!(err, KdfError::InvalidConfig(_)));
}

#[test]
fn builder_from_config() {
    let config = DerivationConfig {
        function: KdfFunction::Kdf3,
        hash: HashAlgorithm::Sha384,
        counter_width: 8,
        length: 10,
    };
    let builder = KdfBuilder::from_config(&config);
    assert_eq!(builder.function(), KdfFunction::Kdf3);
    assert_eq!(builder.hash(), HashAlgorithm::Sha384);
    assert_eq!(builder.counter_width(), 8);
}
