//! Platform plumbing: embedded assets, on-disk persistence and build metadata.

pub mod assets;
pub mod persistence;
pub mod version;
