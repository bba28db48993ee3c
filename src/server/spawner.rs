use std::future::Future;

/// Starts the task that serves one connection.
///
/// The accept loop only hands work over; it never waits for or tracks the
/// task. A bounded implementation (for example one gated on a semaphore) can
/// replace [`DetachedSpawner`] without touching routing.
pub trait Spawner: Send + Sync {
    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static;
}

/// One unbounded, detached tokio task per connection.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedSpawner;

impl Spawner for DetachedSpawner {
    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        // Dropping the handle detaches the task. A panic stays inside it.
        drop(tokio::spawn(task));
    }
}
