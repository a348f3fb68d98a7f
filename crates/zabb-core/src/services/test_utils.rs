//! Scripted oracle fake shared by service tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::ports::{OracleClient, OracleError, OracleResult};

/// Oracle frozen in a fixed state: each known query maps to one path.
///
/// Every call is recorded so tests can assert what was (not) queried.
#[derive(Default)]
pub struct ScriptedOracle {
    answers: HashMap<String, PathBuf>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, query: &str, path: &Path) -> Self {
        self.answers.insert(query.to_string(), path.to_path_buf());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl OracleClient for ScriptedOracle {
    fn query(&self, text: &str) -> OracleResult<PathBuf> {
        self.calls.lock().unwrap().push(text.to_string());
        self.answers
            .get(text)
            .cloned()
            .ok_or(OracleError::NonZeroExit { code: Some(1) })
    }
}
