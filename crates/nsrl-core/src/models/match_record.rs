//! Catalog match records as returned by the details endpoint.

use serde::{Deserialize, Serialize};

/// One catalog hit for a digest: a file row joined with the package that
/// shipped it.
///
/// `package` is required. Everything outside the package identity is
/// optional because the catalog carries partial rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDetails {
    pub sha256: Option<String>,
    pub sha1: Option<String>,
    pub md5: Option<String>,
    pub file_name: Option<String>,
    pub file_size: Option<u64>,
    pub package: PackageDetails,
}

/// Package (application) information for a catalog hit.
///
/// `name`, `version` and `application_type` must be present but may be
/// empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDetails {
    pub name: String,
    pub version: String,
    pub application_type: String,
    pub language: Option<String>,
    pub os: Option<OsDetails>,
    pub manufacturer: Option<Manufacturer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsDetails {
    pub name: Option<String>,
    pub version: Option<String>,
    pub manufacturer: Option<Manufacturer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub name: Option<String>,
}

/// The three catalog fields the reducer cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MatchRecord {
    pub application_name: String,
    pub application_type: String,
    pub version: String,
}

impl MatchRecord {
    pub fn new(
        application_name: impl Into<String>,
        application_type: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            application_name: application_name.into(),
            application_type: application_type.into(),
            version: version.into(),
        }
    }

    /// A record without a name or application type carries no application
    /// identity worth reporting.
    pub fn is_usable(&self) -> bool {
        !self.application_name.trim().is_empty() && !self.application_type.trim().is_empty()
    }
}

impl From<&FileDetails> for MatchRecord {
    fn from(details: &FileDetails) -> Self {
        Self {
            application_name: details.package.name.clone(),
            application_type: details.package.application_type.clone(),
            version: details.package.version.clone(),
        }
    }
}

impl From<FileDetails> for MatchRecord {
    fn from(details: FileDetails) -> Self {
        Self {
            application_name: details.package.name,
            application_type: details.package.application_type,
            version: details.package.version,
        }
    }
}
