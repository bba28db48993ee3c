//! Agartha - screenshot file server
//!
//! A tiny HTTP server that answers a fixed set of routes: an index page,
//! a favicon, a pinned screenshot and whichever screenshot was written last.

pub mod config;
pub mod files;
pub mod http;
pub mod routes;
pub mod server;
