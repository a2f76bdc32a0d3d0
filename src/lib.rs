//! docroot - static file server
//!
//! Serves HTML and CSS from a single document root over a minimal HTTP/1.1.

pub mod config;
pub mod fs;
pub mod http;
pub mod percent;
pub mod server;
