//! Platform glue for spawning the scheduled form-phase transitions. Wasm
//! gets a local spawn; native goes through tokio so the same call sites work
//! in a test runtime.

use std::future::Future;

#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    tokio::task::spawn(future);
}
