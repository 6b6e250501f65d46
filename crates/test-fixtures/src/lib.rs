//! Test fixture loader for NSRL lookup responses.
//!
//! Provides the recorded catalog responses under `data/` and deterministic
//! generators for responses too large to keep on disk.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

/// Digest of the two-package small hit.
pub const SMALL_HIT_SHA256: &str =
    "C5E167C0D08F05B44180E12194BA6471B195FB039CCBF4E0FE981BDEE97F080D";

/// Digest shared by "Microsoft Word" and "Word".
pub const WORD_HIT_SHA256: &str =
    "E3B0C44298FC1C149AFBF4C8996FB92427AE41E4649B934CA495991B7852B855";

/// Digest of the partial row with no operating system.
pub const PARTIAL_HIT_SHA256: &str =
    "50B2C6C05BBDEF754ABA71FFB1A88A03A48D63CA7426049435A568093825E542";

/// Digest used for the synthetic large hit.
pub const LARGE_HIT_SHA256: &str =
    "368F9CB089D206A8B61251F0C85EEDA97EE08A56B33BE8579246E964D3AF6169";

/// Raw record count of the large hit.
pub const LARGE_HIT_RECORDS: usize = 4954;

/// Distinct usable package names in the large hit.
pub const LARGE_HIT_PACKAGES: usize = 1136;

/// Application types cycled through by the large hit.
pub const LARGE_HIT_APP_TYPES: [&str; 14] = [
    "Partition",
    "plug-in",
    "network monitoring",
    "Graphic/Drawing",
    "Scanner related",
    "Data wiping",
    "Game",
    "Drivers",
    "software collection",
    "Operating System",
    "Accounting",
    "Database Management System",
    "Utility",
    "Development",
];

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Load a fixture file as a raw string, e.g. to serve as a response body.
///
/// # Panics
/// Panics if the file doesn't exist.
pub fn load_fixture_raw(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let content = load_fixture_raw(relative_path);
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", relative_path, e))
}

/// One catalog match in wire format.
pub fn catalog_record(name: &str, app_type: &str, version: &str) -> Value {
    json!({
        "sha256": LARGE_HIT_SHA256,
        "file_name": "shared.dll",
        "file_size": 65536,
        "package": {
            "name": name,
            "version": version,
            "language": "English",
            "application_type": app_type,
            "os": null,
            "manufacturer": null,
        }
    })
}

/// Synthetic large hit: [`LARGE_HIT_RECORDS`] records collapsing to
/// [`LARGE_HIT_PACKAGES`] distinct names.
///
/// Record `j` belongs to package `j % LARGE_HIT_PACKAGES`, so the first
/// `LARGE_HIT_PACKAGES` records introduce every package once, all usable.
/// Later records add noise the reducer must absorb:
/// - every 97th record has an empty application type,
/// - some names carry trailing whitespace,
/// - some repeat a name under a different application type.
pub fn large_hit() -> Value {
    let records: Vec<Value> = (0..LARGE_HIT_RECORDS)
        .map(|j| {
            let n = j % LARGE_HIT_PACKAGES;
            let round = j / LARGE_HIT_PACKAGES;
            let mut name = format!("Package {n:04}");
            let mut app_type = LARGE_HIT_APP_TYPES[n % LARGE_HIT_APP_TYPES.len()].to_string();

            if round > 0 && j % 97 == 0 {
                app_type.clear();
            }
            if round >= 2 && n % 50 == 0 {
                name.push_str("  ");
            }
            if round >= 3 && n % 11 == 0 && !app_type.is_empty() {
                app_type = "Other".to_string();
            }

            let version = format!("{}.{}", round + 1, n % 3);
            catalog_record(&name, &app_type, &version)
        })
        .collect();
    Value::Array(records)
}

/// The large hit serialized as a response body.
pub fn large_hit_body() -> String {
    large_hit().to_string()
}
