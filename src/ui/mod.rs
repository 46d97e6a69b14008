//! Terminal presentation for the command-line front end.
//!
//! - **[`report`]**: formats trees, token lists, and diagnostics
//! - **[`theme`]**: centralized color palette
//!
//! Library consumers never see this module; the library itself only produces
//! plain strings.

pub mod report;
pub mod theme;

pub use report::Reporter;
