//! Latest-version lookup against the npm website
//!
//! The published version is extracted from the package page markup: the
//! "Current Tags" table is located by a CSS selector and the first linked
//! text inside it is taken as the latest version.

pub mod error;
pub mod npm;
pub mod source;
