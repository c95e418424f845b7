//! Share record loading and the recovery pipeline

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use num_bigint::BigInt;
use serde_json::Value;

use crate::codec;
use crate::domain::{RecoveryConfig, Share, ShareCount, ShareIndex, ShareSet, Threshold};
use crate::interpolate;
use crate::screen::{self, StatsPolicy};

/// Outcome of processing one share record
#[derive(Debug)]
pub struct Report {
    /// Reconstructed secret (the hidden polynomial's constant term)
    pub secret: BigInt,
    /// Anomalous shares; present only when screening was requested
    pub anomalies: Option<Vec<Share>>,
}

/// Decodes a JSON share record into a validated share set
///
/// Record layout: a `keys` header with `n` and `k` (JSON number or string),
/// then one object per present 1-based index with `base` and `value` fields.
/// Missing indices are skipped; only the entries that exist are decoded.
///
/// # Errors
/// Returns an error on a missing or malformed header, an undecodable share,
/// a duplicate index, or a threshold above the declared share count
pub fn load_share_set(record: &Value) -> Result<ShareSet> {
    let keys = record.get("keys").context("Record has no \"keys\" object")?;
    let share_count = ShareCount::new(integer_field(keys, "n")?)?;
    let threshold = Threshold::new(integer_field(keys, "k")?)?;
    let config = RecoveryConfig::new(threshold, share_count)?;

    let mut shares = Vec::new();
    for index in 1..=*share_count {
        let Some(entry) = record.get(index.to_string()) else {
            continue;
        };
        let base_field = text_field(entry, "base").with_context(|| format!("Share {index}"))?;
        let base = codec::parse_base(&base_field).with_context(|| format!("Share {index}"))?;
        let value_field = text_field(entry, "value").with_context(|| format!("Share {index}"))?;
        let value =
            codec::decode_value(&value_field, base).with_context(|| format!("Share {index}"))?;
        shares.push(Share::new(ShareIndex::new(index)?, value, base));
    }

    ShareSet::new(shares, config)
}

/// Full pipeline for one record: optional anomaly screen, then reconstruction
///
/// Screening is advisory; anomalies are reported alongside the secret and
/// never stop recovery.
///
/// # Errors
/// Returns an error if the record cannot be loaded, the screen runs on an
/// empty set, or reconstruction fails its preconditions
pub fn process_record(record: &Value, screen_policy: Option<StatsPolicy>) -> Result<Report> {
    let set = load_share_set(record)?;
    let anomalies = match screen_policy {
        Some(policy) => Some(screen::find_anomalies(&set, policy)?),
        None => None,
    };
    let secret = interpolate::secret_at_zero(&set)?;
    Ok(Report { secret, anomalies })
}

/// Reads a share record file and runs the full pipeline on it
///
/// # Errors
/// Returns an error if the file cannot be read or is not a valid record
pub fn process_file(path: &Path, screen_policy: Option<StatsPolicy>) -> Result<Report> {
    process_record(&read_record(path)?, screen_policy)
}

/// Screens a record's shares without reconstructing
///
/// # Errors
/// Returns an error if the record cannot be loaded or holds no shares
pub fn screen_record(record: &Value, policy: StatsPolicy) -> Result<Vec<Share>> {
    let set = load_share_set(record)?;
    Ok(screen::find_anomalies(&set, policy)?)
}

/// Reads a share record file and screens it
///
/// # Errors
/// Returns an error if the file cannot be read or is not a valid record
pub fn screen_file(path: &Path, policy: StatsPolicy) -> Result<Vec<Share>> {
    screen_record(&read_record(path)?, policy)
}

fn read_record(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}

/// Reads an integer header field, tolerating JSON numbers as well as strings
fn integer_field(keys: &Value, name: &str) -> Result<u32> {
    let text = text_field(keys, name)?;
    text.parse()
        .with_context(|| format!("Field {name:?} is not an integer: {text:?}"))
}

fn text_field(object: &Value, name: &str) -> Result<String> {
    let field = object
        .get(name)
        .with_context(|| format!("Missing field {name:?}"))?;
    match field {
        Value::String(text) => Ok(text.trim().to_string()),
        other => Ok(other.to_string()),
    }
}
