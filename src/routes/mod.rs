//! The fixed route table and what each route serves.

pub mod index;
pub mod router;

pub use router::{Route, RouteTarget, Router};
