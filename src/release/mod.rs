//! Release-note retrieval from the GitHub Releases API
//!
//! Tag naming conventions vary (`v4.19.3` vs `4.19.3`), so the lookup tries
//! an ordered list of tag spellings and falls back to a pointer at the
//! repository's releases listing when none of them has a release.

pub mod error;
pub mod github;
pub mod notes;
pub mod source;
