//! Filesystem side of the server: mapping request paths onto the document
//! root and reading the files found there.

pub mod static_files;

pub use static_files::{Resolution, StaticFiles};
