//! Filesystem access for served images.
//!
//! Nothing here is cached: every lookup hits the disk so a screenshot written
//! a moment ago is visible to the next request.

pub mod asset;
pub mod latest;

pub use asset::{AssetError, read_asset, read_file};
pub use latest::{latest_file, resolve_latest};
