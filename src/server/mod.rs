//! Socket setup, the accept loop and how connection tasks are started.

pub mod listener;
pub mod spawner;

pub use spawner::{DetachedSpawner, Spawner};
