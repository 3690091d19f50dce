//! One-line labels for content units
//!
//! Unit listings (copy, remove, search) print each unit on one line. What
//! identifies a unit depends on its content type: packages are shown by
//! their NEVRA-like tuple, delta RPMs by file name and everything else by a
//! single key field.

use crate::error::LookupError;
use crate::ids;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Content types that can be formatted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Rpm,
    Srpm,
    Drpm,
    Erratum,
    Distribution,
    PackageGroup,
    PackageCategory,
    PackageEnvironment,
    YumRepoMetadataFile,
}

const PACKAGE_FIELDS: &[&str] = &["name", "version", "release", "arch"];

impl ContentType {
    pub const ALL: [ContentType; 9] = [
        Self::Rpm,
        Self::Srpm,
        Self::Drpm,
        Self::Erratum,
        Self::Distribution,
        Self::PackageGroup,
        Self::PackageCategory,
        Self::PackageEnvironment,
        Self::YumRepoMetadataFile,
    ];

    /// Server type identifier
    pub fn type_id(&self) -> &'static str {
        match self {
            Self::Rpm => ids::TYPE_ID_RPM,
            Self::Srpm => ids::TYPE_ID_SRPM,
            Self::Drpm => ids::TYPE_ID_DRPM,
            Self::Erratum => ids::TYPE_ID_ERRATA,
            Self::Distribution => ids::TYPE_ID_DISTRO,
            Self::PackageGroup => ids::TYPE_ID_PKG_GROUP,
            Self::PackageCategory => ids::TYPE_ID_PKG_CATEGORY,
            Self::PackageEnvironment => ids::TYPE_ID_PKG_ENVIRONMENT,
            Self::YumRepoMetadataFile => ids::TYPE_ID_YUM_REPO_METADATA_FILE,
        }
    }

    /// Unit fields joined with `-` to form the label
    fn fields(&self) -> &'static [&'static str] {
        match self {
            Self::Rpm | Self::Srpm => PACKAGE_FIELDS,
            Self::Drpm => &["filename"],
            Self::Erratum
            | Self::Distribution
            | Self::PackageGroup
            | Self::PackageCategory
            | Self::PackageEnvironment => &["id"],
            Self::YumRepoMetadataFile => &["data_type"],
        }
    }

    /// Format `unit` as a one-line label
    pub fn format_unit(&self, unit: &Value) -> Result<String, LookupError> {
        let parts = self
            .fields()
            .iter()
            .map(|field| match unit.get(field) {
                None | Some(Value::Null) => {
                    Err(LookupError::missing_unit_field(self.type_id(), field))
                }
                Some(Value::String(s)) => Ok(s.clone()),
                Some(other) => Ok(other.to_string()),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(parts.join("-"))
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_id())
    }
}

impl FromStr for ContentType {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.type_id() == s)
            .ok_or_else(|| LookupError::unknown_content_type(s))
    }
}

/// Look up the formatter for a server type identifier
pub fn formatter_for_type(type_id: &str) -> Result<ContentType, LookupError> {
    type_id.parse()
}
