//! Fakes shared by handler tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use zabb_core::{OracleClient, OracleError, OracleResult};

use crate::bootstrap::CliContext;

/// Oracle answering from a fixed table.
#[derive(Default)]
pub struct TableOracle(HashMap<String, PathBuf>);

impl TableOracle {
    pub fn with(mut self, query: &str, path: &Path) -> Self {
        self.0.insert(query.to_string(), path.to_path_buf());
        self
    }

    pub fn into_context(self) -> CliContext {
        CliContext::new(Arc::new(self), false)
    }
}

impl OracleClient for TableOracle {
    fn query(&self, text: &str) -> OracleResult<PathBuf> {
        self.0
            .get(text)
            .cloned()
            .ok_or(OracleError::NonZeroExit { code: Some(1) })
    }
}

/// Captured writer contents as UTF-8.
pub fn output(buf: &[u8]) -> &str {
    std::str::from_utf8(buf).unwrap()
}
