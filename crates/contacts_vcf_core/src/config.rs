//! Export configuration.
//!
//! # Responsibility
//! - Hold the fixed input/output locations and filtering policy of one run.
//! - Provide compile-time defaults used by the CLI binary.
//!
//! # Invariants
//! - An empty accepted account set drops every row.
//! - Defaults never read the environment.

use crate::logging::default_log_level;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Default contacts database location, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "databases/contacts2.db";
/// Default card file location, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "contacts.vcf";
/// Account type of the rows exported by default.
pub const DEFAULT_ACCOUNT_TYPE: &str = "com.osp.app.signin";

/// Behavior when a contact has no name row at render time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingNamePolicy {
    /// Emit empty `N:;;;;` and `FN:` lines and log a warning.
    #[default]
    EmitEmpty,
    /// Abort the export with `FormatError::MissingName`.
    Fail,
}

/// Settings for one export run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Provenance allow-set; rows with any other `account_type` are dropped.
    pub accepted_account_types: BTreeSet<String>,
    pub missing_name: MissingNamePolicy,
    pub log_level: String,
    /// Absolute directory for rolling log files; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            accepted_account_types: BTreeSet::from([DEFAULT_ACCOUNT_TYPE.to_string()]),
            missing_name: MissingNamePolicy::default(),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl ExportConfig {
    /// Returns whether rows tagged with `account_type` belong to the export.
    ///
    /// Rows without an account type never match.
    pub fn accepts(&self, account_type: Option<&str>) -> bool {
        account_type.is_some_and(|value| self.accepted_account_types.contains(value))
    }
}

#[cfg(test)]
mod tests {
    use super::{ExportConfig, MissingNamePolicy, DEFAULT_ACCOUNT_TYPE};

    #[test]
    fn default_accepts_only_the_signin_account() {
        let config = ExportConfig::default();

        assert!(config.accepts(Some(DEFAULT_ACCOUNT_TYPE)));
        assert!(!config.accepts(Some("com.google")));
        assert!(!config.accepts(None));
        assert_eq!(config.missing_name, MissingNamePolicy::EmitEmpty);
    }

    #[test]
    fn allow_set_can_be_widened() {
        let mut config = ExportConfig::default();
        config
            .accepted_account_types
            .insert("com.google".to_string());

        assert!(config.accepts(Some("com.google")));
        assert!(config.accepts(Some(DEFAULT_ACCOUNT_TYPE)));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: ExportConfig = serde_json::from_value(serde_json::json!({
            "output_path": "/tmp/out.vcf",
            "missing_name": "fail"
        }))
        .unwrap();

        assert_eq!(config.output_path.to_str(), Some("/tmp/out.vcf"));
        assert_eq!(config.missing_name, MissingNamePolicy::Fail);
        assert_eq!(config.input_path, ExportConfig::default().input_path);
        assert!(config.accepts(Some(DEFAULT_ACCOUNT_TYPE)));
    }
}
