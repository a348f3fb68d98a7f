//! CLI-specific error types and exit codes.
//!
//! Maps `CoreError` and runtime failures onto the exit codes shell
//! scripts can rely on.

use std::path::PathBuf;

use thiserror::Error;
use zabb_core::CoreError;
use zabb_runtime::BackendError;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The search completed without a verified abbreviation.
    #[error("no abbreviation found for {}", .0.display())]
    NoAbbreviationFound(PathBuf),

    /// Argument parsing error, carrying clap's rendered message.
    #[error("{0}")]
    Arguments(String),

    /// No usable jump tool on this host.
    #[error("{0}")]
    OracleUnavailable(String),

    /// The target directory does not exist or is not a directory.
    #[error("invalid directory {}: {reason}", .path.display())]
    InvalidTarget { path: PathBuf, reason: String },

    /// Unexpected internal condition (logging setup, broken output).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CliError {
    /// Map error to the process exit code.
    ///
    /// - 1: no abbreviation found
    /// - 2: invalid arguments (matches clap)
    /// - 66: target directory missing (EX_NOINPUT)
    /// - 69: jump tool missing (EX_UNAVAILABLE)
    /// - 70: internal error (EX_SOFTWARE)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::NoAbbreviationFound(_) => 1,
            Self::Arguments(_) => 2,
            Self::InvalidTarget { .. } => 66,
            Self::OracleUnavailable(_) => 69,
            Self::Internal(_) => 70,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::OracleUnavailable(msg) => Self::OracleUnavailable(msg),
            CoreError::InvalidTarget { path, reason } => Self::InvalidTarget { path, reason },
        }
    }
}

impl From<BackendError> for CliError {
    fn from(err: BackendError) -> Self {
        CoreError::from(err).into()
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(format!("write failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            CliError::NoAbbreviationFound(PathBuf::from("/x")),
            CliError::Arguments(String::new()),
            CliError::InvalidTarget {
                path: PathBuf::from("/x"),
                reason: String::new(),
            },
            CliError::OracleUnavailable(String::new()),
            CliError::Internal(String::new()),
        ];
        let mut codes: Vec<u8> = errors.iter().map(CliError::exit_code).collect();
        assert_eq!(codes[0], 1);
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
        assert!(!codes.contains(&0));
    }

    #[test]
    fn test_core_errors_map_to_cli_errors() {
        let err: CliError = CoreError::InvalidTarget {
            path: PathBuf::from("/missing"),
            reason: "No such file or directory".to_string(),
        }
        .into();
        assert_eq!(err.exit_code(), 66);
        assert_eq!(
            err.to_string(),
            "invalid directory /missing: No such file or directory"
        );

        let err: CliError = BackendError::NotInstalled {
            backend: zabb_runtime::Backend::Zoxide,
        }
        .into();
        assert_eq!(err.exit_code(), 69);
        assert!(err.to_string().contains("zoxide"));
    }

    #[test]
    fn test_clap_error_is_carried_verbatim() {
        use clap::Parser;

        let clap_err = crate::Cli::try_parse_from(["zabb", "--frobnicate"]).unwrap_err();
        assert!(clap_err.use_stderr());

        let rendered = clap_err.render().to_string();
        let err = CliError::Arguments(rendered.clone());
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), rendered);
        assert!(rendered.contains("--frobnicate"));
    }
}
