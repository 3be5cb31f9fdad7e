//! Host collaborators: where fetches run and where views land
//!
//! A controller never blocks on its fetch. It hands the fetch future to the
//! host's [`LocalSpawn`] executor and keeps going. Because the executor is
//! local, every completion is delivered on the same thread as the UI, so no
//! state is ever touched from elsewhere.

use futures::{
    future::LocalFutureObj,
    task::{LocalSpawn, SpawnError},
};

use crate::container::ContainerView;

/// The executor and container a controller is embedded in
pub struct Host<V> {
    pub(crate) spawner: Box<dyn LocalSpawn>,
    pub(crate) container: Box<dyn ContainerView<V>>,
}

impl<V> Host<V> {
    pub fn new(
        spawner: impl LocalSpawn + 'static,
        container: impl ContainerView<V> + 'static,
    ) -> Self {
        Self {
            spawner: Box::new(spawner),
            container: Box::new(container),
        }
    }
}

/// Spawns fetches on the current tokio `LocalSet`
///
/// Spawning panics outside of a `LocalSet`, as `tokio::task::spawn_local` does.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioLocalSpawner;

impl LocalSpawn for TokioLocalSpawner {
    fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
        tokio::task::spawn_local(future);
        Ok(())
    }
}
