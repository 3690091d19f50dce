//! Fixed identifiers used by the server in progress reports and unit listings

/// Top-level key of the sync phase
pub const IMPORTER_KEY: &str = "yum_importer";

/// Top-level key of the publish phase
pub const DISTRIBUTOR_KEY: &str = "yum_distributor";

/// Top-level key of the export phase
pub const EXPORT_DISTRIBUTOR_KEY: &str = "export_distributor";

// Content type identifiers
pub const TYPE_ID_RPM: &str = "rpm";
pub const TYPE_ID_SRPM: &str = "srpm";
pub const TYPE_ID_DRPM: &str = "drpm";
pub const TYPE_ID_ERRATA: &str = "erratum";
pub const TYPE_ID_DISTRO: &str = "distribution";
pub const TYPE_ID_PKG_GROUP: &str = "package_group";
pub const TYPE_ID_PKG_CATEGORY: &str = "package_category";
pub const TYPE_ID_PKG_ENVIRONMENT: &str = "package_environment";
pub const TYPE_ID_YUM_REPO_METADATA_FILE: &str = "yum_repo_metadata_file";
