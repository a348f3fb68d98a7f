//! Runtime adapters for zabb.
//!
//! - [`backend`]: which jump tools exist and how to discover them on `PATH`
//! - [`oracle`]: [`ProcessOracle`], the `OracleClient` that shells out
//! - [`trace`]: [`LogTrace`], a `SearchTrace` sink backed by `tracing`

#![deny(unsafe_code)]

pub mod backend;
pub mod oracle;
pub mod trace;

pub use backend::{Backend, BackendError, InstalledBackend, discover, discover_in};
pub use oracle::ProcessOracle;
pub use trace::LogTrace;
