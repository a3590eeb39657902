//! Workspace facade over `cityscribe-core`, used by the demos.
pub use cityscribe_core::*;
