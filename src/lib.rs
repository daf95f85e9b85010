//! Single-shot npm version poller.
//!
//! One run fetches the watched package's latest published version from the
//! npm website, compares it against the version persisted by the previous
//! run, looks up GitHub release notes when the version changed, and persists
//! the newly observed version. An external scheduler is expected to invoke
//! the binary periodically.

pub mod checker;
pub mod config;
pub mod registry;
pub mod release;
pub mod repository;
pub mod state;
