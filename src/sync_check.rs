//! Detects whether a generated artifact is stale relative to its source by
//! comparing the source's content hash against a stored hash.

use clap::ValueEnum;
use md5::Md5;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::Path;

/// Hash used for the source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// Matches the `.md5` metadata files written by existing tooling
    #[default]
    Md5,
    Sha256,
}

impl HashAlgorithm {
    /// Lowercase hex digest of `bytes`
    pub fn hex_digest(&self, bytes: &[u8]) -> String {
        match self {
            Self::Md5 => to_hex(&Md5::digest(bytes)),
            Self::Sha256 => to_hex(&Sha256::digest(bytes)),
        }
    }
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Result object printed by the checker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SyncReport {
    #[serde(rename_all = "camelCase")]
    Success {
        source_file: String,
        current_hash: String,
        stored_hash: Option<String>,
        is_out_of_sync: bool,
        needs_generation: bool,
    },
    Error {
        message: String,
    },
}

impl SyncReport {
    pub fn needs_generation(&self) -> bool {
        match self {
            SyncReport::Success {
                needs_generation, ..
            } => *needs_generation,
            SyncReport::Error { .. } => false,
        }
    }

    /// Success reports are indented two spaces; error reports stay on one
    /// line with `", "` / `": "` separators.
    pub fn to_json(&self) -> String {
        let encoded = match self {
            SyncReport::Success { .. } => serde_json::to_string_pretty(self),
            SyncReport::Error { .. } => to_single_line(self),
        };
        encoded.unwrap_or_else(|e| {
            serde_json::json!({ "status": "error", "message": e.to_string() }).to_string()
        })
    }
}

/// Compact JSON with a space after each separator
struct SpacedFormatter;

impl serde_json::ser::Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}

fn to_single_line<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Compare `source`'s hash against the hash stored in `metadata`.
///
/// Failures become `SyncReport::Error`; this never returns an `Err`.
pub fn check_sync(source: &Path, metadata: &Path, algorithm: HashAlgorithm) -> SyncReport {
    if !source.exists() {
        return SyncReport::Error {
            message: format!("Source file not found: {}", source.display()),
        };
    }

    match compare(source, metadata, algorithm) {
        Ok(report) => report,
        Err(e) => SyncReport::Error {
            message: format!("{:#}", e),
        },
    }
}

fn compare(source: &Path, metadata: &Path, algorithm: HashAlgorithm) -> anyhow::Result<SyncReport> {
    let bytes = fs::read(source)?;
    let current_hash = algorithm.hex_digest(&bytes);

    let stored_hash = if metadata.exists() {
        Some(fs::read_to_string(metadata)?.trim().to_string())
    } else {
        None
    };

    let is_out_of_sync = stored_hash.as_deref() != Some(current_hash.as_str());
    let source_file = fs::canonicalize(source)?;

    Ok(SyncReport::Success {
        source_file: source_file.display().to_string(),
        current_hash,
        is_out_of_sync,
        needs_generation: is_out_of_sync || stored_hash.is_none(),
        stored_hash,
    })
}
