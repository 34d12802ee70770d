//! Platform-facing helpers shared by the UI crate.

pub mod document;
pub mod storage;
