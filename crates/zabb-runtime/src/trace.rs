//! `tracing`-backed search diagnostics.

use std::path::Path;

use tracing::debug;
use zabb_core::{Candidate, SearchTrace, SkipReason};

/// Emits every search decision as a `debug` event.
///
/// Installed by the CLI when `--debug` is given; otherwise the engine
/// gets a `NoopTrace`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTrace;

impl SearchTrace for LogTrace {
    fn tier_started(&self, length: usize, candidates: usize) {
        debug!(length, candidates, "searching tier");
    }

    fn candidate_skipped(&self, candidate: &Candidate<'_>, reason: SkipReason<'_>) {
        let text = candidate.text;
        let offset = candidate.offset;
        match reason {
            SkipReason::Dangerous => {
                debug!(candidate = text, offset, "skipped: unsafe to pass to oracle");
            }
            SkipReason::QueryFailed(err) => {
                debug!(candidate = text, offset, error = %err, "skipped: oracle failed");
            }
            SkipReason::Unresolvable(err) => {
                debug!(candidate = text, offset, error = %err, "skipped: oracle path unresolvable");
            }
            SkipReason::Mismatch { resolved } => {
                debug!(
                    candidate = text,
                    offset,
                    resolved = %resolved.display(),
                    "skipped: resolves elsewhere"
                );
            }
        }
    }

    fn candidate_matched(&self, candidate: &Candidate<'_>, resolved: &Path) {
        debug!(
            candidate = candidate.text,
            offset = candidate.offset,
            resolved = %resolved.display(),
            "matched"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;
    use zabb_core::{OracleError, PathResolveError};

    /// In-memory writer the fmt subscriber logs into.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Run `f` with a debug-level subscriber and return what it logged.
    fn capture(f: impl FnOnce()) -> String {
        let out = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(out.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .without_time()
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        out.text()
    }

    fn candidate() -> Candidate<'static> {
        Candidate {
            offset: 2,
            length: 2,
            text: "cu",
        }
    }

    #[test]
    fn test_tier_start_logs_length_and_count() {
        let logs = capture(|| LogTrace.tier_started(2, 9));
        assert!(logs.contains("searching tier"), "{logs}");
        assert!(logs.contains("length=2"), "{logs}");
        assert!(logs.contains("candidates=9"), "{logs}");
        assert!(logs.contains("DEBUG"), "{logs}");
    }

    #[test]
    fn test_each_skip_reason_has_its_own_message() {
        let other = PathBuf::from("/elsewhere");
        let resolve_err = PathResolveError {
            path: PathBuf::from("/gone"),
            reason: "vanished".to_string(),
        };

        let logs = capture(|| {
            let c = candidate();
            LogTrace.candidate_skipped(&c, SkipReason::Dangerous);
            LogTrace.candidate_skipped(&c, SkipReason::QueryFailed(&OracleError::EmptyOutput));
            LogTrace.candidate_skipped(&c, SkipReason::Unresolvable(&resolve_err));
            LogTrace.candidate_skipped(&c, SkipReason::Mismatch { resolved: &other });
        });

        let lines: Vec<&str> = logs.lines().collect();
        assert_eq!(lines.len(), 4, "{logs}");
        assert!(lines[0].contains("skipped: unsafe to pass to oracle"));
        assert!(lines[1].contains("skipped: oracle failed"));
        assert!(lines[1].contains(&OracleError::EmptyOutput.to_string()));
        assert!(lines[2].contains("skipped: oracle path unresolvable"));
        assert!(lines[2].contains("vanished"));
        assert!(lines[3].contains("skipped: resolves elsewhere"));
        assert!(lines[3].contains("resolved=/elsewhere"));
        for line in &lines {
            assert!(line.contains("candidate=\"cu\""), "{line}");
            assert!(line.contains("offset=2"), "{line}");
        }
    }

    #[test]
    fn test_match_logs_resolved_path() {
        let logs = capture(|| {
            LogTrace.candidate_matched(&candidate(), Path::new("/home/u/Documents"));
        });
        assert!(logs.contains("matched"), "{logs}");
        assert!(logs.contains("resolved=/home/u/Documents"), "{logs}");
    }
}
