//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use isokdf_kdf::{DerivationConfig, HashAlgorithm, KdfFunction};
use std::path::PathBuf;

/// Command-line arguments for the `isokdf` binary
#[derive(Parser)]
#[command(name = "isokdf")]
#[command(about = "ISO 18033 key derivation and PKCS#1 MGF1")]
#[command(version)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Log the block plan and every block at debug level
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Clone, Subcommand)]
pub enum Commands {
    /// Derive key material from a hex-encoded secret
    ///
    /// Flags override values read from `--config`. Without either, KDF2
    /// over SHA-1 producing 32 octets is used.
    ///
    /// Example usage:
    ///   isokdf derive deadbeeffeebdaed --function kdf1 --length 32
    ///   isokdf derive deadbeeffeebdaed --function kdf3 --counter-width 4
    ///   isokdf derive 666f6f --config mgf1.json --json
    Derive {
        /// Input octets, hex encoded
        input: String,

        /// Derivation function (kdf1, kdf2, kdf3, kdf4, mgf1)
        #[arg(long)]
        function: Option<KdfFunction>,

        /// Hash algorithm (md5, sha1, sha224, sha256, sha384, sha512)
        #[arg(long)]
        hash: Option<HashAlgorithm>,

        /// Output length in octets
        #[arg(long, allow_negative_numbers = true)]
        length: Option<i64>,

        /// KDF3 counter width in octets
        #[arg(long)]
        counter_width: Option<usize>,

        /// JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check the published ISO 18033 and PKCS#1 vectors
    Vectors,

    /// Print a configuration preset as JSON
    Config {
        /// Preset to print
        #[arg(value_enum, default_value_t = Preset::Default)]
        preset: Preset,
    },
}

/// Named configuration presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// KDF2, SHA-1, 32 octets
    Default,
    /// ISO 18033 KDF1
    Kdf1,
    /// ISO 18033 KDF2
    Kdf2,
    /// ISO 18033 KDF3 with a 64-octet counter
    Kdf3,
    /// PKCS#1 MGF1 over SHA-256
    Mgf1,
}

impl Preset {
    /// Configuration this preset stands for
    #[must_use]
    pub fn config(self) -> DerivationConfig {
        match self {
            Self::Default => DerivationConfig::default(),
            Self::Kdf1 => DerivationConfig::iso18033_kdf1(),
            Self::Kdf2 => DerivationConfig::iso18033_kdf2(),
            Self::Kdf3 => DerivationConfig::iso18033_kdf3(),
            Self::Mgf1 => DerivationConfig::pkcs1_mgf1(),
        }
    }
}
